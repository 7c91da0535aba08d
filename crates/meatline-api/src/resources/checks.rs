// Check (post-dated payment) endpoints
//
// The listing carries a metadata aggregate: the summed amount over the
// whole filter, independent of the returned page.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::PaginatedWith;
use crate::query::{DateFormat, QueryBuilder, with_query};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Pending,
    Cleared,
    Bounced,
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct CheckFilter {
    pub status: Option<CheckStatus>,
    pub customer_id: Option<i64>,
    pub amount_min: Option<u64>,
    pub amount_max: Option<u64>,
    pub due_from: Option<DateTime<Utc>>,
    pub due_to: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl CheckFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("status", self.status)
            .opt("customer_id", self.customer_id)
            .opt("amount_min", self.amount_min)
            .opt("amount_max", self.amount_max)
            .date("due_from", self.due_from, DateFormat::Iso8601)
            .date("due_to", self.due_to, DateFormat::Iso8601)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Check {
    pub id: i64,
    pub customer_id: i64,
    pub bank: Option<String>,
    pub number: Option<String>,
    pub amount: f64,
    pub status: CheckStatus,
    pub due_at: DateTime<Utc>,
    pub cleared_at: Option<DateTime<Utc>>,
}

/// Filter-wide aggregate attached to the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckMetadata {
    pub total_amount: f64,
}

#[derive(Debug, Clone, Serialize)]
struct StatusPatch {
    status: CheckStatus,
}

impl ApiClient {
    /// `GET checks`
    pub async fn list_checks(
        &self,
        filter: &CheckFilter,
    ) -> Result<PaginatedWith<Check, CheckMetadata>, Error> {
        self.get(&with_query("checks", &filter.to_query())).await
    }

    /// `GET checks/{id}`
    pub async fn get_check(&self, id: i64) -> Result<Check, Error> {
        self.get(&format!("checks/{id}")).await
    }

    /// `PATCH checks/{id}` with `{ "status": ... }`
    pub async fn update_check_status(
        &self,
        id: i64,
        status: CheckStatus,
    ) -> Result<Check, Error> {
        self.patch(&format!("checks/{id}"), &StatusPatch { status })
            .await
    }
}
