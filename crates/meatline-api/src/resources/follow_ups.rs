// Follow-up endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{DateFormat, QueryBuilder, with_query};

#[derive(Debug, Clone, Default)]
pub struct FollowUpFilter {
    pub customer_id: Option<i64>,
    pub done: Option<bool>,
    pub due_from: Option<DateTime<Utc>>,
    pub due_to: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl FollowUpFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("customer_id", self.customer_id)
            .opt("done", self.done)
            .date("due_from", self.due_from, DateFormat::Iso8601)
            .date("due_to", self.due_to, DateFormat::Iso8601)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FollowUp {
    pub id: i64,
    pub customer_id: i64,
    pub note: String,
    pub due_at: DateTime<Utc>,
    pub done: bool,
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FollowUpCreate {
    pub customer_id: i64,
    pub note: String,
    pub due_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
struct DonePatch {
    done: bool,
}

impl ApiClient {
    /// `GET follow-ups`
    pub async fn list_follow_ups(
        &self,
        filter: &FollowUpFilter,
    ) -> Result<Paginated<FollowUp>, Error> {
        self.get(&with_query("follow-ups", &filter.to_query())).await
    }

    /// `POST follow-ups`
    pub async fn create_follow_up(&self, body: &FollowUpCreate) -> Result<FollowUp, Error> {
        self.post("follow-ups", body).await
    }

    /// `PATCH follow-ups/{id}` with `{ "done": true }`
    pub async fn mark_follow_up_done(&self, id: i64) -> Result<FollowUp, Error> {
        self.patch(&format!("follow-ups/{id}"), &DonePatch { done: true })
            .await
    }
}
