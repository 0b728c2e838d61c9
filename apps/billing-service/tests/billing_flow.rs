use std::time::Duration;

use scalehouse_billing_service::client::weight_client::WeightServiceClient;
use scalehouse_billing_service::repo::{provider_repo, rate_repo, truck_repo};
use scalehouse_billing_service::schema::SCHEMA;
use scalehouse_billing_service::service::aggregator::compute_bill;
use scalehouse_db::TursoClient;
use scalehouse_billing_core::Rate;

async fn test_db() -> TursoClient {
    TursoClient::connect(":memory:", None, SCHEMA).await.expect("connect")
}

fn unreachable_client() -> WeightServiceClient {
    // Port 1 is never listening; every call exhausts retries fast.
    WeightServiceClient::new("http://127.0.0.1:1".to_string(), Duration::from_millis(200))
}

#[tokio::test]
async fn rate_upload_replaces_table_atomically() {
    let db = test_db().await;
    let conn = db.get_connection().unwrap();

    rate_repo::replace_all(
        &conn,
        &[Rate { product_id: "apples".to_string(), rate: 100, scope: "ALL".to_string() }],
    )
    .await
    .unwrap();
    assert_eq!(rate_repo::list_all(&conn).await.unwrap().len(), 1);

    rate_repo::replace_all(
        &conn,
        &[
            Rate { product_id: "apples".to_string(), rate: 120, scope: "ALL".to_string() },
            Rate { product_id: "oranges".to_string(), rate: 90, scope: "ALL".to_string() },
        ],
    )
    .await
    .unwrap();

    let rates = rate_repo::list_all(&conn).await.unwrap();
    assert_eq!(rates.len(), 2);
    assert!(rates.iter().any(|r| r.product_id == "apples" && r.rate == 120));
}

#[tokio::test]
async fn bill_degrades_to_empty_when_weight_service_unreachable() {
    let db = test_db().await;
    let conn = db.get_connection().unwrap();

    let provider = provider_repo::create(&conn, "Acme Produce").await.unwrap();
    truck_repo::upsert(&conn, "T1", provider.id).await.unwrap();
    rate_repo::replace_all(
        &conn,
        &[Rate { product_id: "apples".to_string(), rate: 100, scope: "ALL".to_string() }],
    )
    .await
    .unwrap();

    let client = unreachable_client();
    let bill = compute_bill(&conn, &client, provider.id, "20260101000000", "20261231235959").await.unwrap();

    assert_eq!(bill.session_count, 0);
    assert_eq!(bill.total, 0);
    assert_eq!(bill.truck_count, 1);
}

#[tokio::test]
async fn bill_rejects_unknown_provider() {
    let db = test_db().await;
    let conn = db.get_connection().unwrap();
    let client = unreachable_client();

    let result = compute_bill(&conn, &client, 999, "20260101000000", "20261231235959").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn truck_assignment_rejects_unknown_provider() {
    let db = test_db().await;
    let conn = db.get_connection().unwrap();

    let result = truck_repo::upsert(&conn, "T1", 999).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn provider_name_must_be_unique() {
    let db = test_db().await;
    let conn = db.get_connection().unwrap();

    provider_repo::create(&conn, "Acme Produce").await.unwrap();
    let result = provider_repo::create(&conn, "Acme Produce").await;
    assert!(result.is_err());
}
