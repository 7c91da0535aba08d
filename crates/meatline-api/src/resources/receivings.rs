// Goods-receiving endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{DateFormat, QueryBuilder, with_query};

#[derive(Debug, Clone, Default)]
pub struct ReceivingFilter {
    pub supplier: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ReceivingFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("supplier", self.supplier.as_ref())
            .date("from", self.from, DateFormat::Iso8601)
            .date("to", self.to, DateFormat::Iso8601)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Receiving {
    pub id: i64,
    pub supplier: String,
    pub weight_kg: f64,
    pub received_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReceivingCreate {
    pub supplier: String,
    pub weight_kg: f64,
    pub received_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ApiClient {
    /// `GET receivings`
    pub async fn list_receivings(
        &self,
        filter: &ReceivingFilter,
    ) -> Result<Paginated<Receiving>, Error> {
        self.get(&with_query("receivings", &filter.to_query())).await
    }

    /// `POST receivings`
    pub async fn create_receiving(&self, body: &ReceivingCreate) -> Result<Receiving, Error> {
        self.post("receivings", body).await
    }
}
