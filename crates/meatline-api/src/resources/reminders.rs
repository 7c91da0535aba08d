// Reminder endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{DateFormat, QueryBuilder, with_query};

#[derive(Debug, Clone, Default)]
pub struct ReminderFilter {
    pub done: Option<bool>,
    pub remind_from: Option<DateTime<Utc>>,
    pub remind_to: Option<DateTime<Utc>>,
    pub customer_id: Option<i64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ReminderFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("done", self.done)
            .date("remind_from", self.remind_from, DateFormat::Iso8601)
            .date("remind_to", self.remind_to, DateFormat::Iso8601)
            .opt("customer_id", self.customer_id)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reminder {
    pub id: i64,
    pub title: String,
    pub note: Option<String>,
    pub customer_id: Option<i64>,
    pub remind_at: DateTime<Utc>,
    pub done: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReminderCreateUpdate {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    pub remind_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
struct DonePatch {
    done: bool,
}

impl ApiClient {
    /// `GET reminders`
    pub async fn list_reminders(
        &self,
        filter: &ReminderFilter,
    ) -> Result<Paginated<Reminder>, Error> {
        self.get(&with_query("reminders", &filter.to_query())).await
    }

    /// `POST reminders`
    pub async fn create_reminder(&self, body: &ReminderCreateUpdate) -> Result<Reminder, Error> {
        self.post("reminders", body).await
    }

    /// `PUT reminders/{id}`
    pub async fn update_reminder(
        &self,
        id: i64,
        body: &ReminderCreateUpdate,
    ) -> Result<Reminder, Error> {
        self.put(&format!("reminders/{id}"), body).await
    }

    /// `PATCH reminders/{id}` with `{ "done": true }`
    pub async fn mark_reminder_done(&self, id: i64) -> Result<Reminder, Error> {
        self.patch(&format!("reminders/{id}"), &DonePatch { done: true })
            .await
    }

    /// `DELETE reminders/{id}`
    pub async fn delete_reminder(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("reminders/{id}")).await
    }
}
