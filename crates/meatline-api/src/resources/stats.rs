// Statistics endpoints
//
// Dates on this family go over the wire as calendar dates (`YYYY-MM-DD`),
// not full timestamps. The backend buckets by branch-local day and rejects
// timestamp-formatted values, so every builder here passes
// `DateFormat::CalendarDate` explicitly.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::query::{DateFormat, QueryBuilder, with_query};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Granularity {
    Daily,
    Weekly,
    Monthly,
}

#[derive(Debug, Clone, Default)]
pub struct StatsFilter {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub granularity: Option<Granularity>,
}

impl StatsFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.date("from", self.from, DateFormat::CalendarDate)
            .date("to", self.to, DateFormat::CalendarDate)
            .opt("granularity", self.granularity);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesPoint {
    pub date: NaiveDate,
    pub total: f64,
    pub order_count: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalesSummary {
    pub total_sales: f64,
    pub order_count: u32,
    pub average_order: f64,
    #[serde(default)]
    pub series: Vec<SalesPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopProduct {
    pub product_id: i64,
    pub name: String,
    pub quantity_kg: f64,
    pub revenue: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebtPoint {
    pub date: NaiveDate,
    pub total_debt: f64,
}

impl ApiClient {
    /// `GET stats/sales-summary`
    pub async fn sales_summary(&self, filter: &StatsFilter) -> Result<SalesSummary, Error> {
        self.get(&with_query("stats/sales-summary", &filter.to_query()))
            .await
    }

    /// `GET stats/top-products`
    pub async fn top_products(&self, filter: &StatsFilter) -> Result<Vec<TopProduct>, Error> {
        self.get(&with_query("stats/top-products", &filter.to_query()))
            .await
    }

    /// `GET stats/customer-debts`
    pub async fn customer_debt_series(
        &self,
        filter: &StatsFilter,
    ) -> Result<Vec<DebtPoint>, Error> {
        self.get(&with_query("stats/customer-debts", &filter.to_query()))
            .await
    }
}
