// Customer endpoints
//
// The behavior filter uses repeated-key encoding: `behavior=LOYAL&behavior=
// LATE_PAYER`, one key per tag, never comma-joined.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{DateFormat, QueryBuilder, with_query};

/// Behavior tags a customer can be labeled with.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BehaviorTag {
    Loyal,
    LatePayer,
    HighVolume,
    Inactive,
    Disputed,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerFilter {
    pub search: Option<String>,
    pub behaviors: Option<Vec<BehaviorTag>>,
    pub has_debt: Option<bool>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl CustomerFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("search", self.search.as_ref())
            .repeated("behavior", self.behaviors.as_deref())
            .opt("has_debt", self.has_debt)
            .date("created_from", self.created_from, DateFormat::Iso8601)
            .date("created_to", self.created_to, DateFormat::Iso8601)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub phone: Option<String>,
    pub address: Option<String>,
    #[serde(default)]
    pub behaviors: Vec<BehaviorTag>,
    /// Outstanding balance in the branch currency; negative means credit.
    pub debt: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body for create and full update.
#[derive(Debug, Clone, Serialize)]
pub struct CustomerCreateUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub behaviors: Option<Vec<BehaviorTag>>,
}

impl ApiClient {
    /// `GET customers`
    pub async fn list_customers(
        &self,
        filter: &CustomerFilter,
    ) -> Result<Paginated<Customer>, Error> {
        self.get(&with_query("customers", &filter.to_query())).await
    }

    /// `GET customers/{id}`
    pub async fn get_customer(&self, id: i64) -> Result<Customer, Error> {
        self.get(&format!("customers/{id}")).await
    }

    /// `POST customers`
    pub async fn create_customer(&self, body: &CustomerCreateUpdate) -> Result<Customer, Error> {
        debug!(name = %body.name, "creating customer");
        self.post("customers", body).await
    }

    /// `PUT customers/{id}`
    pub async fn update_customer(
        &self,
        id: i64,
        body: &CustomerCreateUpdate,
    ) -> Result<Customer, Error> {
        self.put(&format!("customers/{id}"), body).await
    }

    /// `DELETE customers/{id}`
    pub async fn delete_customer(&self, id: i64) -> Result<(), Error> {
        debug!(id, "deleting customer");
        self.delete(&format!("customers/{id}")).await
    }
}
