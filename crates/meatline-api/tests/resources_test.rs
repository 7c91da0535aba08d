#![allow(clippy::unwrap_used)]
// Integration tests for resource filters and list envelopes.

use std::sync::Arc;

use chrono::TimeZone;
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use meatline_api::resources::checks::{CheckFilter, CheckStatus};
use meatline_api::resources::customers::{BehaviorTag, CustomerFilter};
use meatline_api::resources::stats::StatsFilter;
use meatline_api::resources::wallets::WalletFilter;
use meatline_api::{ApiClient, NoAuth};

async fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start().await;
    let client = ApiClient::new(&server.uri(), "main", Arc::new(NoAuth)).unwrap();
    (server, client)
}

// ── Checks: the canonical filter scenario ───────────────────────────

#[tokio::test]
async fn test_check_filter_query_encoding() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/checks"))
        .and(query_param("status", "CLEARED"))
        .and(query_param("amount_min", "1000"))
        .and(query_param("page-size", "20"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 1,
            "data": [{
                "id": 9,
                "customer_id": 3,
                "bank": "Ziraat",
                "number": "000412",
                "amount": 15000.0,
                "status": "CLEARED",
                "due_at": "2024-07-01T00:00:00Z",
                "cleared_at": "2024-07-02T09:15:00Z"
            }],
            "metadata": { "total_amount": 15000.0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = CheckFilter {
        status: Some(CheckStatus::Cleared),
        amount_min: Some(1000),
        page_size: Some(20),
        ..CheckFilter::default()
    };
    let page = client.list_checks(&filter).await.unwrap();

    assert_eq!(page.count, 1);
    assert_eq!(page.data[0].status, CheckStatus::Cleared);
    assert!((page.metadata.total_amount - 15000.0).abs() < f64::EPSILON);

    // Defined fields only: no stray keys besides the three set above.
    let requests = server.received_requests().await.unwrap();
    let query: Vec<(String, String)> = requests[0].url.query_pairs().into_owned().collect();
    assert_eq!(query.len(), 3);
}

// ── Customers: repeated-key behavior tags ───────────────────────────

#[tokio::test]
async fn test_behavior_tags_repeat_the_key() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0,
            "data": []
        })))
        .mount(&server)
        .await;

    let filter = CustomerFilter {
        behaviors: Some(vec![BehaviorTag::Loyal, BehaviorTag::LatePayer]),
        ..CustomerFilter::default()
    };
    client.list_customers(&filter).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let behaviors: Vec<String> = requests[0]
        .url
        .query_pairs()
        .filter(|(k, _)| k == "behavior")
        .map(|(_, v)| v.into_owned())
        .collect();
    assert_eq!(behaviors, vec!["LOYAL", "LATE_PAYER"]);
}

// ── Stats: calendar-date wire format ────────────────────────────────

#[tokio::test]
async fn test_stats_dates_go_out_as_calendar_days() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/stats/sales-summary"))
        .and(query_param("from", "2024-06-01"))
        .and(query_param("to", "2024-06-30"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "total_sales": 184_250.0,
            "order_count": 312,
            "average_order": 590.5,
            "series": [
                { "date": "2024-06-01", "total": 6100.0, "order_count": 11 }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = StatsFilter {
        from: Some(chrono::Utc.with_ymd_and_hms(2024, 6, 1, 14, 45, 9).unwrap()),
        to: Some(chrono::Utc.with_ymd_and_hms(2024, 6, 30, 23, 59, 59).unwrap()),
        granularity: None,
    };
    let summary = client.sales_summary(&filter).await.unwrap();

    assert_eq!(summary.order_count, 312);
    assert_eq!(summary.series.len(), 1);
}

// ── Customers: timestamp wire format on the default path ────────────

#[tokio::test]
async fn test_customer_dates_go_out_as_timestamps() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .and(query_param("created_from", "2024-06-01T00:00:00.000Z"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 0,
            "data": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let filter = CustomerFilter {
        created_from: Some(chrono::Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
        ..CustomerFilter::default()
    };
    client.list_customers(&filter).await.unwrap();
}

// ── Wallets: metadata aggregate ─────────────────────────────────────

#[tokio::test]
async fn test_wallet_listing_carries_total_debt() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/wallets"))
        .and(query_param("min_debt", "500"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 2,
            "data": [
                { "id": 1, "customer_id": 10, "customer_name": "A", "balance": -800.0, "updated_at": null },
                { "id": 2, "customer_id": 11, "customer_name": "B", "balance": -650.0, "updated_at": null }
            ],
            "metadata": { "total_debt": 1450.0 }
        })))
        .mount(&server)
        .await;

    let filter = WalletFilter {
        min_debt: Some(500.0),
        ..WalletFilter::default()
    };
    let page = client.list_wallets(&filter).await.unwrap();

    assert_eq!(page.count, 2);
    assert!((page.metadata.total_debt - 1450.0).abs() < f64::EPSILON);
}

// ── Envelope echo fields ────────────────────────────────────────────

#[tokio::test]
async fn test_page_echo_fields_are_optional() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/customers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "count": 45,
            "data": [],
            "page": 3,
            "page_size": 20
        })))
        .mount(&server)
        .await;

    let page = client
        .list_customers(&CustomerFilter::default())
        .await
        .unwrap();

    assert_eq!(page.count, 45);
    assert_eq!(page.page, Some(3));
    assert_eq!(page.page_size, Some(20));
    assert_eq!(meatline_api::total_pages(page.count, 20), 3);
}
