// Category endpoints
//
// A category's image is an uploaded-file reference: callers upload first,
// then pass the resulting descriptor id as `image_id`.

use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::Paginated;
use crate::query::{QueryBuilder, with_query};
use crate::upload::UploadedFile;

#[derive(Debug, Clone, Default)]
pub struct CategoryFilter {
    pub search: Option<String>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl CategoryFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("search", self.search.as_ref())
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub image_id: Option<i64>,
    #[serde(default)]
    pub image: Option<UploadedFile>,
    pub product_count: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CategoryCreateUpdate {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<i64>,
}

impl ApiClient {
    /// `GET categories`
    pub async fn list_categories(
        &self,
        filter: &CategoryFilter,
    ) -> Result<Paginated<Category>, Error> {
        self.get(&with_query("categories", &filter.to_query())).await
    }

    /// `GET categories/{id}`
    pub async fn get_category(&self, id: i64) -> Result<Category, Error> {
        self.get(&format!("categories/{id}")).await
    }

    /// `POST categories`
    pub async fn create_category(&self, body: &CategoryCreateUpdate) -> Result<Category, Error> {
        self.post("categories", body).await
    }

    /// `PUT categories/{id}`
    pub async fn update_category(
        &self,
        id: i64,
        body: &CategoryCreateUpdate,
    ) -> Result<Category, Error> {
        self.put(&format!("categories/{id}"), body).await
    }

    /// `DELETE categories/{id}`
    pub async fn delete_category(&self, id: i64) -> Result<(), Error> {
        self.delete(&format!("categories/{id}")).await
    }
}
