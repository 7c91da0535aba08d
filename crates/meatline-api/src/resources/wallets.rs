// Wallet endpoints
//
// The listing metadata reports total debt across the whole filter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::client::ApiClient;
use crate::error::Error;
use crate::page::{Paginated, PaginatedWith};
use crate::query::{DateFormat, QueryBuilder, with_query};

#[derive(Debug, Clone, Default)]
pub struct WalletFilter {
    pub search: Option<String>,
    pub min_debt: Option<f64>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl WalletFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("search", self.search.as_ref())
            .opt("min_debt", self.min_debt)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wallet {
    pub id: i64,
    pub customer_id: i64,
    pub customer_name: Option<String>,
    pub balance: f64,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalletMetadata {
    pub total_debt: f64,
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display, strum::EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Payment,
    Charge,
    Adjustment,
}

#[derive(Debug, Clone, Default)]
pub struct WalletTransactionFilter {
    pub kind: Option<TransactionKind>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub page: Option<u32>,
    pub page_size: Option<u32>,
}

impl WalletTransactionFilter {
    pub fn to_query(&self) -> String {
        let mut q = QueryBuilder::new();
        q.opt("type", self.kind)
            .date("from", self.from, DateFormat::Iso8601)
            .date("to", self.to, DateFormat::Iso8601)
            .opt("page", self.page)
            .opt("page-size", self.page_size);
        q.finish()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletTransaction {
    pub id: i64,
    pub wallet_id: i64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub amount: f64,
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ApiClient {
    /// `GET wallets`
    pub async fn list_wallets(
        &self,
        filter: &WalletFilter,
    ) -> Result<PaginatedWith<Wallet, WalletMetadata>, Error> {
        self.get(&with_query("wallets", &filter.to_query())).await
    }

    /// `GET wallets/{id}/transactions`
    pub async fn list_wallet_transactions(
        &self,
        wallet_id: i64,
        filter: &WalletTransactionFilter,
    ) -> Result<Paginated<WalletTransaction>, Error> {
        self.get(&with_query(
            &format!("wallets/{wallet_id}/transactions"),
            &filter.to_query(),
        ))
        .await
    }
}
