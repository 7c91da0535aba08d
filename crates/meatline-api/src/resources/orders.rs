// Order endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{DateFormat, QueryBuilder, with_query};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Confirmed,
    Preparing,
    OutForDelivery,
    Delivered,
    Cancelled,
}

#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub status: Option<OrderStatus>,
    pub customer_id: Option<i64>,
    pub search: Option<String>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_to: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl OrderFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("status", self.status)
            .opt("customer_id", self.customer_id)
            .opt("search", self.search.as_ref())
            .date("created_from", self.created_from, DateFormat::Iso8601)
            .date("created_to", self.created_to, DateFormat::Iso8601)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: i64,
    pub product_name: Option<String>,
    /// Ordered weight in kilograms.
    pub quantity_kg: f64,
    pub unit_price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: i64,
    pub customer_id: i64,
    pub status: OrderStatus,
    pub total: f64,
    #[serde(default)]
    pub items: Vec<OrderItem>,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
    pub delivered_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderCreate {
    pub customer_id: i64,
    pub items: Vec<OrderItemCreate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OrderItemCreate {
    pub product_id: i64,
    pub quantity_kg: f64,
}

#[derive(Debug, Clone, Serialize)]
struct StatusPatch {
    status: OrderStatus,
}

impl ApiClient {
    /// `GET orders`
    pub async fn list_orders(&self, filter: &OrderFilter) -> Result<Paginated<Order>, Error> {
        self.get(&with_query("orders", &filter.to_query())).await
    }

    /// `GET orders/{id}`
    pub async fn get_order(&self, id: i64) -> Result<Order, Error> {
        self.get(&format!("orders/{id}")).await
    }

    /// `POST orders`
    pub async fn create_order(&self, body: &OrderCreate) -> Result<Order, Error> {
        debug!(customer_id = body.customer_id, "creating order");
        self.post("orders", body).await
    }

    /// `PATCH orders/{id}` with `{ "status": ... }`
    pub async fn update_order_status(
        &self,
        id: i64,
        status: OrderStatus,
    ) -> Result<Order, Error> {
        debug!(id, %status, "updating order status");
        self.patch(&format!("orders/{id}"), &StatusPatch { status })
            .await
    }
}
