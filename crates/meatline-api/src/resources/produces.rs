// Production-run endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{DateFormat, QueryBuilder, with_query};

#[derive(Debug, Clone, Default)]
pub struct ProduceFilter {
    pub product_id: Option<i64>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ProduceFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("product_id", self.product_id)
            .date("from", self.from, DateFormat::Iso8601)
            .date("to", self.to, DateFormat::Iso8601)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

/// One production run: raw input turned into sellable product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Produce {
    pub id: i64,
    pub product_id: i64,
    pub input_kg: f64,
    pub output_kg: f64,
    pub produced_at: DateTime<Utc>,
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProduceCreate {
    pub product_id: i64,
    pub input_kg: f64,
    pub output_kg: f64,
    pub produced_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl ApiClient {
    /// `GET produces`
    pub async fn list_produces(&self, filter: &ProduceFilter) -> Result<Paginated<Produce>, Error> {
        self.get(&with_query("produces", &filter.to_query())).await
    }

    /// `POST produces`
    pub async fn create_produce(&self, body: &ProduceCreate) -> Result<Produce, Error> {
        self.post("produces", body).await
    }
}
