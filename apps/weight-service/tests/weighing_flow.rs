use scalehouse_db::TursoClient;
use scalehouse_weight_core::Unit;
use scalehouse_weight_service::models::{ContainersInput, WeighRequest};
use scalehouse_weight_service::repo::container_repo;
use scalehouse_weight_service::schema::SCHEMA;
use scalehouse_weight_service::service::weighing::process_weigh;

async fn test_db() -> TursoClient {
    TursoClient::connect(":memory:", None, SCHEMA).await.expect("connect")
}

fn weigh_req(direction: &str, truck: &str, containers: &[&str], weight: i64, force: bool) -> WeighRequest {
    WeighRequest {
        direction: direction.to_string(),
        truck: Some(truck.to_string()),
        containers: ContainersInput::List(containers.iter().map(|s| s.to_string()).collect()),
        weight,
        unit: Unit::Kg,
        produce: Some("apples".to_string()),
        force,
    }
}

#[tokio::test]
async fn in_then_out_computes_net_and_backfills_in() {
    let db = test_db().await;
    let conn = db.get_connection().unwrap();

    container_repo::upsert(&conn, "C1", Some(500), Unit::Kg, false).await.unwrap();
    container_repo::upsert(&conn, "C2", Some(600), Unit::Kg, false).await.unwrap();

    let in_resp = process_weigh(&conn, weigh_req("in", "T1", &["C1", "C2"], 10_000, false)).await.unwrap();
    assert_eq!(in_resp.neto.value(), None);

    let out_resp = process_weigh(&conn, weigh_req("out", "T1", &["C1", "C2"], 4_000, false)).await.unwrap();
    assert_eq!(out_resp.session_id, in_resp.session_id);
    assert_eq!(out_resp.neto.value(), Some(6_000));
    assert_eq!(out_resp.truck_tara, Some(3_400));

    let session = scalehouse_weight_service::repo::transaction_repo::get_by_session(&conn, &in_resp.session_id)
        .await
        .unwrap();
    let backfilled_in = session
        .iter()
        .find(|r| r.direction == scalehouse_weight_core::Direction::In)
        .unwrap();
    assert_eq!(backfilled_in.neto, Some(6_000));
    assert_eq!(backfilled_in.truck_tara, Some(3_400));
}

#[tokio::test]
async fn out_with_unregistered_container_is_rejected() {
    let db = test_db().await;
    let conn = db.get_connection().unwrap();

    process_weigh(&conn, weigh_req("in", "T1", &["C9"], 10_000, false)).await.unwrap();
    let result = process_weigh(&conn, weigh_req("out", "T1", &["C9"], 4_000, false)).await;

    assert!(result.is_err());
    let session_rows =
        scalehouse_weight_service::service::query::list_range(&conn, scalehouse_weight_core::resolve_window(None, None).unwrap(), &[], None, None)
            .await
            .unwrap();
    assert!(session_rows.iter().all(|r| r.direction != scalehouse_weight_core::Direction::Out));
}

#[tokio::test]
async fn duplicate_in_without_force_is_a_sequence_violation() {
    let db = test_db().await;
    let conn = db.get_connection().unwrap();

    process_weigh(&conn, weigh_req("in", "T1", &["C1"], 10_000, false)).await.unwrap();
    let second = process_weigh(&conn, weigh_req("in", "T1", &["C1"], 10_000, false)).await;
    assert!(second.is_err());

    let forced = process_weigh(&conn, weigh_req("in", "T1", &["C1"], 10_000, true)).await;
    assert!(forced.is_ok());
}

#[tokio::test]
async fn standalone_none_transaction_has_no_pairing() {
    let db = test_db().await;
    let conn = db.get_connection().unwrap();

    let resp = process_weigh(&conn, weigh_req("none", "T1", &["C1"], 10_000, false)).await.unwrap();
    assert_eq!(resp.neto.value(), None);

    let rows = scalehouse_weight_service::repo::transaction_repo::get_by_session(&conn, &resp.session_id)
        .await
        .unwrap();
    assert_eq!(rows.len(), 1);
}
