// Customer account-request endpoints
//
// Requests come in from the storefront; an operator approves or rejects.
// Approval creates the customer server-side and returns it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{QueryBuilder, with_query};
use crate::resources::customers::Customer;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerRequestFilter {
    pub status: Option<RequestStatus>,
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl CustomerRequestFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("status", self.status)
            .opt("search", self.search.as_ref())
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomerRequest {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
struct RejectBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<&'a str>,
}

impl ApiClient {
    /// `GET customer-requests`
    pub async fn list_customer_requests(
        &self,
        filter: &CustomerRequestFilter,
    ) -> Result<Paginated<CustomerRequest>, Error> {
        self.get(&with_query("customer-requests", &filter.to_query()))
            .await
    }

    /// `POST customer-requests/{id}/approve`
    pub async fn approve_customer_request(&self, id: i64) -> Result<Customer, Error> {
        debug!(id, "approving customer request");
        self.post(&format!("customer-requests/{id}/approve"), &serde_json::json!({}))
            .await
    }

    /// `POST customer-requests/{id}/reject`
    pub async fn reject_customer_request(
        &self,
        id: i64,
        reason: Option<&str>,
    ) -> Result<(), Error> {
        debug!(id, "rejecting customer request");
        self.post_unit(
            &format!("customer-requests/{id}/reject"),
            &RejectBody { reason },
        )
        .await
    }
}
