// Product endpoints

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{QueryBuilder, with_query};

/// Sale unit for a product.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum SaleUnit {
    Kilogram,
    Piece,
    Box,
}

#[derive(Debug, Clone, Default)]
pub struct ProductFilter {
    pub search: Option<String>,
    pub category_id: Option<i64>,
    pub active: Option<bool>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl ProductFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("search", self.search.as_ref())
            .opt("category_id", self.category_id)
            .opt("active", self.active)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub category_id: i64,
    pub unit: SaleUnit,
    pub price: f64,
    pub active: bool,
    pub image_id: Option<i64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCreateUpdate {
    pub name: String,
    pub category_id: i64,
    pub unit: SaleUnit,
    pub price: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<i64>,
}

impl ApiClient {
    /// `GET products`
    pub async fn list_products(&self, filter: &ProductFilter) -> Result<Paginated<Product>, Error> {
        self.get(&with_query("products", &filter.to_query())).await
    }

    /// `GET products/{id}`
    pub async fn get_product(&self, id: i64) -> Result<Product, Error> {
        self.get(&format!("products/{id}")).await
    }

    /// `POST products`
    pub async fn create_product(&self, body: &ProductCreateUpdate) -> Result<Product, Error> {
        self.post("products", body).await
    }

    /// `PUT products/{id}`
    pub async fn update_product(
        &self,
        id: i64,
        body: &ProductCreateUpdate,
    ) -> Result<Product, Error> {
        self.put(&format!("products/{id}"), body).await
    }

    /// `DELETE products/{id}`
    pub async fn delete_product(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("products/{id}")).await
    }
}
