use std::time::Duration;

use axum::extract::Json as JsonExtract;
use axum::routing::post;
use axum::Router;
use scalehouse_db::TursoClient;
use scalehouse_registration_service::client::billing_client::BillingClient;
use scalehouse_registration_service::repo::candidate_repo::{self, NewCandidate};
use scalehouse_registration_service::schema::SCHEMA;
use scalehouse_registration_service::service::approval;
use serde_json::{json, Value};

async fn test_db() -> TursoClient {
    TursoClient::connect(":memory:", None, SCHEMA).await.expect("connect")
}

async fn spawn_mock_billing_server() -> String {
    async fn create_provider(JsonExtract(_body): JsonExtract<Value>) -> axum::Json<Value> {
        axum::Json(json!({ "id": 42 }))
    }

    let app = Router::new().route("/provider", post(create_provider));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn candidate_input(email: &str) -> NewCandidate<'static> {
    NewCandidate {
        company_name: "Acme Produce",
        contact_email: Box::leak(email.to_string().into_boxed_str()),
        phone: None,
        products: Box::leak(vec!["apples".to_string()].into_boxed_slice()),
        truck_count: 3,
        capacity_tons_per_day: 10,
        location: None,
    }
}

#[tokio::test]
async fn approve_provisions_provider_and_flips_status() {
    let db = test_db().await;
    let conn = db.get_connection().unwrap();
    let candidate = candidate_repo::create(&conn, candidate_input("acme@example.com")).await.unwrap();

    let base_url = spawn_mock_billing_server().await;
    let billing_client = BillingClient::new(base_url, Duration::from_secs(5));

    let response = approval::approve(&conn, &billing_client, &candidate.candidate_id).await.unwrap();
    assert_eq!(response.status, "approved");
    assert_eq!(response.provider_id, 42);

    let reloaded = candidate_repo::get_by_id(&conn, &candidate.candidate_id).await.unwrap().unwrap();
    assert_eq!(reloaded.version, 2);
    assert_eq!(reloaded.provider_id, Some(42));
}

#[tokio::test]
async fn reject_requires_pending_status() {
    let db = test_db().await;
    let conn = db.get_connection().unwrap();
    let candidate = candidate_repo::create(&conn, candidate_input("reject@example.com")).await.unwrap();

    let rejected = approval::reject(&conn, &candidate.candidate_id, Some("insufficient capacity")).await.unwrap();
    assert_eq!(rejected.status, "rejected");

    let second = approval::reject(&conn, &candidate.candidate_id, None).await;
    assert!(second.is_err());
}

#[tokio::test]
async fn concurrent_approval_race_has_exactly_one_winner() {
    use std::sync::Arc;

    let db = Arc::new(test_db().await);
    let seed_conn = db.get_connection().unwrap();
    let candidate = candidate_repo::create(&seed_conn, candidate_input("race@example.com")).await.unwrap();
    let candidate_id = candidate.candidate_id.clone();

    let base_url = spawn_mock_billing_server().await;

    let mut handles = Vec::new();
    for _ in 0..10 {
        let db = Arc::clone(&db);
        let candidate_id = candidate_id.clone();
        let base_url = base_url.clone();
        handles.push(tokio::spawn(async move {
            let conn = db.get_connection().unwrap();
            let billing_client = BillingClient::new(base_url, Duration::from_secs(5));
            approval::approve(&conn, &billing_client, &candidate_id).await
        }));
    }

    let mut ok_count = 0;
    let mut err_count = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => ok_count += 1,
            Err(_) => err_count += 1,
        }
    }

    assert_eq!(ok_count, 1);
    assert_eq!(err_count, 9);

    let reloaded = candidate_repo::get_by_id(&seed_conn, &candidate_id).await.unwrap().unwrap();
    assert_eq!(reloaded.status, "approved");
    assert_eq!(reloaded.version, 2);
}

#[tokio::test]
async fn sql_injection_in_status_filter_leaves_table_intact() {
    let db = test_db().await;
    let conn = db.get_connection().unwrap();
    candidate_repo::create(&conn, candidate_input("safe@example.com")).await.unwrap();

    let malicious = "pending'; DROP TABLE candidates; --";
    let (rows, total) = candidate_repo::list(&conn, Some(malicious), None, 20, 0).await.unwrap();
    assert!(rows.is_empty());
    assert_eq!(total, 0);

    let (all_rows, all_total) = candidate_repo::list(&conn, None, None, 20, 0).await.unwrap();
    assert_eq!(all_rows.len(), 1);
    assert_eq!(all_total, 1);
}

#[tokio::test]
async fn product_filter_matches_json_containment() {
    let db = test_db().await;
    let conn = db.get_connection().unwrap();
    candidate_repo::create(&conn, candidate_input("oranges@example.com")).await.unwrap();

    let (matching, _) = candidate_repo::list(&conn, None, Some("apples"), 20, 0).await.unwrap();
    assert_eq!(matching.len(), 1);

    let (not_matching, _) = candidate_repo::list(&conn, None, Some("mangoes"), 20, 0).await.unwrap();
    assert!(not_matching.is_empty());
}
