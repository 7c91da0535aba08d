// Return-request endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{QueryBuilder, with_query};
use crate::resources::customer_requests::RequestStatus;

#[derive(Debug, Clone, Default)]
pub struct ReturnRequestFilter {
    pub status: Option<RequestStatus>,
    pub order_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ReturnRequestFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("status", self.status)
            .opt("order_id", self.order_id)
            .opt("customer_id", self.customer_id)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReturnRequest {
    pub id: i64,
    pub order_id: i64,
    pub customer_id: i64,
    pub reason: Option<String>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
}

impl ApiClient {
    /// `GET return-requests`
    pub async fn list_return_requests(
        &self,
        filter: &ReturnRequestFilter,
    ) -> Result<Paginated<ReturnRequest>, Error> {
        self.get(&with_query("return-requests", &filter.to_query()))
            .await
    }

    /// `POST return-requests/{id}/approve`
    pub async fn approve_return_request(&self, id: i64) -> Result<ReturnRequest, Error> {
        self.post(&format!("return-requests/{id}/approve"), &serde_json::json!({}))
            .await
    }

    /// `POST return-requests/{id}/reject`
    pub async fn reject_return_request(&self, id: i64) -> Result<ReturnRequest, Error> {
        self.post(&format!("return-requests/{id}/reject"), &serde_json::json!({}))
            .await
    }
}
