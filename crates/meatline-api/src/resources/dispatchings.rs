// Dispatch (delivery-run) endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{DateFormat, QueryBuilder, with_query};

#[derive(Debug, Clone, Default)]
pub struct DispatchingFilter {
    pub driver: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl DispatchingFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("driver", self.driver.as_ref())
            .date("from", self.from, DateFormat::Iso8601)
            .date("to", self.to, DateFormat::Iso8601)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dispatching {
    pub id: i64,
    pub driver: String,
    pub vehicle: Option<String>,
    #[serde(default)]
    pub order_ids: Vec<i64>,
    pub dispatched_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DispatchingCreate {
    pub driver: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicle: Option<String>,
    pub order_ids: Vec<i64>,
    pub dispatched_at: DateTime<Utc>,
}

impl ApiClient {
    /// `GET dispatchings`
    pub async fn list_dispatchings(
        &self,
        filter: &DispatchingFilter,
    ) -> Result<Paginated<Dispatching>, Error> {
        self.get(&with_query("dispatchings", &filter.to_query()))
            .await
    }

    /// `POST dispatchings`
    pub async fn create_dispatching(&self, body: &DispatchingCreate) -> Result<Dispatching, Error> {
        self.post("dispatchings", body).await
    }
}
