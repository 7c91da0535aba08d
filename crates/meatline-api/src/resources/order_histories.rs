// Order-history endpoints (read-only audit trail)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{DateFormat, QueryBuilder, with_query};
use crate::resources::orders::OrderStatus;

#[derive(Debug, Clone, Default)]
pub struct OrderHistoryFilter {
    pub order_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl OrderHistoryFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("order_id", self.order_id)
            .opt("customer_id", self.customer_id)
            .date("from", self.from, DateFormat::Iso8601)
            .date("to", self.to, DateFormat::Iso8601)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderHistory {
    pub id: i64,
    pub order_id: i64,
    pub status: OrderStatus,
    pub changed_by: Option<String>,
    pub changed_at: DateTime<Utc>,
}

impl ApiClient {
    /// `GET order-histories`
    pub async fn list_order_histories(
        &self,
        filter: &OrderHistoryFilter,
    ) -> Result<Paginated<OrderHistory>, Error> {
        self.get(&with_query("order-histories", &filter.to_query()))
            .await
    }
}
