//! End-to-end checks of the reqwest transport against a mock HTTP server.

use std::sync::Arc;

use certeus::{
    CerteusClient, ClientConfig, ClientError, DeviceKind, EnqueueRequest, ListOptions,
    PublishRequest, ReqwestTransport,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client_for(mock_server: &MockServer) -> CerteusClient {
    CerteusClient::new(ClientConfig::with_base_url(mock_server.uri())).unwrap()
}

fn recorded(mock_server_requests: Option<Vec<Request>>) -> Request {
    let mut requests = mock_server_requests.expect("request recording is enabled");
    assert_eq!(requests.len(), 1);
    requests.remove(0)
}

#[tokio::test]
async fn test_pfs_list_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/pfs/list"))
        .and(query_param("prefix", "pfs://mail/"))
        .and(query_param("recursive", "true"))
        .and(query_param("limit", "5"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "prefix": "pfs://mail/",
            "entries": [{"uri": "pfs://mail/a.eml", "size": 12}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let listing = client
        .pfs_list("pfs://mail/", &ListOptions::default().recursive().with_limit(5))
        .await
        .unwrap();

    assert_eq!(listing.entries.len(), 1);
    assert_eq!(listing.entries[0].size, 12);

    let request = recorded(mock_server.received_requests().await);
    let pairs: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
    assert!(!pairs.iter().any(|(key, _)| key == "mime"));
}

#[tokio::test]
async fn test_publish_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/proofgate/publish"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"pco": {"case_id": "CER-7"}, "policy": {"mode": "strict"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "CONDITIONAL",
            "ledger_ref": null
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut pco = certeus::JsonObject::new();
    pco.insert("case_id".to_string(), json!("CER-7"));
    let mut policy = certeus::JsonObject::new();
    policy.insert("mode".to_string(), json!("strict"));

    let client = client_for(&mock_server);
    let response = client
        .publish(&PublishRequest::new(pco).with_policy(policy))
        .await
        .unwrap();

    assert_eq!(response.status, "CONDITIONAL");
    assert_eq!(response.ledger_ref, Some(None));
}

#[tokio::test]
async fn test_enqueue_then_job_status_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/p2p/enqueue"))
        .and(body_json(json!({"device": "chronosync"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_id": "job 42",
            "status": "QUEUED",
            "eta_hint": "soon"
        })))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v1/p2p/jobs/job%2042"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_id": "job 42",
            "status": "DONE",
            "device": "chronosync"
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let job = client
        .p2p_enqueue(&EnqueueRequest::new(DeviceKind::Chronosync))
        .await
        .unwrap();
    let status = client.p2p_job_status(&job.job_id).await.unwrap();

    assert_eq!(status.job_id, "job 42");
    assert_eq!(status.status, "DONE");
    assert!(status.payload.is_none());
}

#[tokio::test]
async fn test_dequeue_once_sends_no_body_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/p2p/dequeue_once"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "job_id": "job-1",
            "status": "RUNNING",
            "device": "hde",
            "payload": {"k": "v"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let job = client.p2p_dequeue_once().await.unwrap();
    assert_eq!(job.payload.unwrap()["k"], json!("v"));

    let request = recorded(mock_server.received_requests().await);
    assert!(request.body.is_empty());
    assert!(request.headers.get("content-type").is_none());
}

#[tokio::test]
async fn test_transport_echo_default_message_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/p2p/transport/echo"))
        .and(query_param("msg", "synapse"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "a": "synapse", "b": "synapse", "ok": true, "len": 7, "message": "synapse"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let echo = client.transport_echo(None).await.unwrap();
    assert_eq!(echo.message, "synapse");
}

#[tokio::test]
async fn test_server_error_over_http() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/p2p/queue"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.p2p_queue_summary().await.unwrap_err();

    assert!(matches!(err, ClientError::Http { status: 500, ref body } if body == "boom"));
    assert_eq!(err.to_string(), "HTTP 500: boom");
}

#[tokio::test]
async fn test_not_found_is_not_retried() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/pfs/xattrs"))
        .respond_with(ResponseTemplate::new(404).set_body_string(r#"{"detail":"no such object"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.pfs_xattrs("pfs://missing").await.unwrap_err();

    assert_eq!(err.status(), Some(404));
    assert_eq!(err.body(), Some(r#"{"detail":"no such object"}"#));
}

#[tokio::test]
async fn test_shared_reqwest_client_sends_its_own_headers() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/p2p/queue"))
        .and(header("user-agent", "certeus-tests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "depth": 1,
            "by_device": {"hde": 1}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let http_client = reqwest::Client::builder()
        .user_agent("certeus-tests")
        .build()
        .unwrap();
    let transport = ReqwestTransport::from_client(http_client);
    let client = CerteusClient::with_transport(
        ClientConfig::with_base_url(mock_server.uri()),
        Arc::new(transport),
    );

    let summary = client.p2p_queue_summary().await.unwrap();
    assert_eq!(summary.depth, 1);
}

#[tokio::test]
async fn test_connection_failure_is_transport_error() {
    // Nothing listens on port 1
    let client = CerteusClient::new(ClientConfig::with_base_url("http://127.0.0.1:1")).unwrap();
    let err = client.p2p_queue_summary().await.unwrap_err();

    assert!(matches!(err, ClientError::Transport(_)));
    assert_eq!(err.status(), None);
}
