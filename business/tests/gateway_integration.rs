//! `HttpGateway` against a wiremock server.

#![cfg(not(target_arch = "wasm32"))]

use std::time::Duration;

use roster_business::{
    BusinessConfig, GatewayError, GatewayResult, HttpGateway, NotesStatus, PatientGateway,
    PatientListParams, PatientListResponse, PatientStatus,
};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn setup() -> (MockServer, HttpGateway) {
    let _ = env_logger::builder().is_test(true).try_init();
    let server = MockServer::start().await;
    let gateway = HttpGateway::new(&BusinessConfig::new(server.uri()));
    (server, gateway)
}

async fn list(
    gateway: &HttpGateway,
    params: &PatientListParams,
) -> GatewayResult<PatientListResponse> {
    let (tx, rx) = flume::bounded(1);
    gateway.list(
        params,
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );
    tokio::time::timeout(Duration::from_secs(5), rx.recv_async())
        .await
        .expect("list request timed out")
        .expect("callback dropped without a result")
}

async fn delete(gateway: &HttpGateway, id: u64) -> GatewayResult<()> {
    let (tx, rx) = flume::bounded(1);
    gateway.delete(
        id,
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );
    tokio::time::timeout(Duration::from_secs(5), rx.recv_async())
        .await
        .expect("delete request timed out")
        .expect("callback dropped without a result")
}

fn patient_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "status": "Active",
        "date": "2024-03-05",
        "notes_status": "Completed",
        "letters_status": "Not Started",
        "room": "Room 1",
        "location": "North Wing",
        "collabrators": "Dr John Smith"
    })
}

#[tokio::test]
async fn list_sends_query_and_decodes_page() {
    let (server, gateway) = setup().await;

    Mock::given(method("GET"))
        .and(path("/patients"))
        .and(query_param("cursor", "abc"))
        .and(query_param("limit", "10"))
        .and(query_param("status", "In Progress"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [patient_json(1, "Jane Doe"), patient_json(2, "John Roe")],
            "pagination": { "hasNextPage": true, "nextCursor": "def" }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let params = PatientListParams {
        cursor: Some("abc".to_owned()),
        limit: Some(10),
        status: Some(PatientStatus::InProgress),
    };
    let response = list(&gateway, &params).await.expect("list should succeed");

    assert_eq!(response.data.len(), 2);
    assert_eq!(response.data[0].name, "Jane Doe");
    assert_eq!(response.data[1].letters_status, Some(NotesStatus::NotStarted));
    assert!(response.pagination.has_next_page);
    assert_eq!(response.pagination.next_cursor.as_deref(), Some("def"));
}

#[tokio::test]
async fn list_without_params_sends_no_query() {
    let (server, gateway) = setup().await;

    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [],
            "pagination": { "hasNextPage": false }
        })))
        .mount(&server)
        .await;

    let response = list(&gateway, &PatientListParams::default())
        .await
        .expect("list should succeed");
    assert!(response.data.is_empty());

    let requests = server.received_requests().await.expect("recording is enabled");
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url.query(), None);
}

#[tokio::test]
async fn list_server_error_is_status_error() {
    let (server, gateway) = setup().await;

    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let result = list(&gateway, &PatientListParams::default()).await;

    assert_eq!(result, Err(GatewayError::Status(500)));
}

#[tokio::test]
async fn list_malformed_body_is_decode_error() {
    let (server, gateway) = setup().await;

    Mock::given(method("GET"))
        .and(path("/patients"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = list(&gateway, &PatientListParams::default()).await;

    assert!(matches!(result, Err(GatewayError::Decode(_))));
}

#[tokio::test]
async fn delete_hits_patient_path() {
    let (server, gateway) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/patients/42"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    assert_eq!(delete(&gateway, 42).await, Ok(()));
}

#[tokio::test]
async fn delete_not_found_is_status_error() {
    let (server, gateway) = setup().await;

    Mock::given(method("DELETE"))
        .and(path("/patients/7"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert_eq!(delete(&gateway, 7).await, Err(GatewayError::Status(404)));
}

#[tokio::test]
async fn unreachable_server_is_transport_error() {
    let _ = env_logger::builder().is_test(true).try_init();
    // Port 9 (discard) is not listening in test environments.
    let gateway = HttpGateway::new(&BusinessConfig::new("http://127.0.0.1:9"));

    let result = list(&gateway, &PatientListParams::default()).await;

    assert!(matches!(result, Err(GatewayError::Transport(_))));
}
