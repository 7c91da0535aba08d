// Support ticket endpoints
//
// Attachments are uploaded-file references: upload first, then pass the
// descriptor ids in `attachment_ids`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{QueryBuilder, with_query};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub priority: Option<TicketPriority>,
    pub assignee_id: Option<i64>,
    pub customer_id: Option<i64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl TicketFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("status", self.status)
            .opt("priority", self.priority)
            .opt("assignee_id", self.assignee_id)
            .opt("customer_id", self.customer_id)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: i64,
    pub subject: String,
    pub body: Option<String>,
    pub status: TicketStatus,
    pub priority: TicketPriority,
    pub customer_id: Option<i64>,
    pub assignee_id: Option<i64>,
    #[serde(default)]
    pub attachment_ids: Vec<i64>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketCreateUpdate {
    pub subject: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<TicketPriority>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment_ids: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Serialize)]
struct StatusPatch {
    status: TicketStatus,
}

impl ApiClient {
    /// `GET tickets`
    pub async fn list_tickets(&self, filter: &TicketFilter) -> Result<Paginated<Ticket>, Error> {
        self.get(&with_query("tickets", &filter.to_query())).await
    }

    /// `GET tickets/{id}`
    pub async fn get_ticket(&self, id: i64) -> Result<Ticket, Error> {
        self.get(&format!("tickets/{id}")).await
    }

    /// `POST tickets`
    pub async fn create_ticket(&self, body: &TicketCreateUpdate) -> Result<Ticket, Error> {
        self.post("tickets", body).await
    }

    /// `PUT tickets/{id}`
    pub async fn update_ticket(
        &self,
        id: i64,
        body: &TicketCreateUpdate,
    ) -> Result<Ticket, Error> {
        self.put(&format!("tickets/{id}"), body).await
    }

    /// `PATCH tickets/{id}` with `{ "status": ... }`
    pub async fn update_ticket_status(
        &self,
        id: i64,
        status: TicketStatus,
    ) -> Result<Ticket, Error> {
        self.patch(&format!("tickets/{id}"), &StatusPatch { status })
            .await
    }

    /// `DELETE tickets/{id}`
    pub async fn delete_ticket(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("tickets/{id}")).await
    }
}
