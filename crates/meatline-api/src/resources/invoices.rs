// Invoice endpoints (read-only)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{DateFormat, QueryBuilder, with_query};

#[derive(Debug, Clone, Default)]
pub struct InvoiceFilter {
    pub customer_id: Option<i64>,
    pub paid: Option<bool>,
    pub issued_from: Option<DateTime<Utc>>,
    pub issued_to: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl InvoiceFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("customer_id", self.customer_id)
            .opt("paid", self.paid)
            .date("issued_from", self.issued_from, DateFormat::Iso8601)
            .date("issued_to", self.issued_to, DateFormat::Iso8601)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    pub id: i64,
    pub number: String,
    pub customer_id: i64,
    pub order_id: Option<i64>,
    pub total: f64,
    pub paid: bool,
    pub issued_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

impl ApiClient {
    /// `GET invoices`
    pub async fn list_invoices(&self, filter: &InvoiceFilter) -> Result<Paginated<Invoice>, Error> {
        self.get(&with_query("invoices", &filter.to_query())).await
    }

    /// `GET invoices/{id}`
    pub async fn get_invoice(&self, id: i64) -> Result<Invoice, Error> {
        self.get(&format!("invoices/{id}")).await
    }
}
