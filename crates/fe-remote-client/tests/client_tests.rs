//! Integration tests for the client against a local mock service.
//!
//! These exercise the full request path: URL construction, query
//! encoding, envelope normalization and the error taxonomy.

use fe_remote_client::{
    CancellationToken, ClientConfig, ClientError, FileEngineClient,
};
use mockito::Matcher;
use serde_json::json;

fn client_for(server: &mockito::ServerGuard) -> FileEngineClient {
    FileEngineClient::new(ClientConfig::new(server.url())).expect("Failed to create client")
}

#[tokio::test]
async fn test_search_sends_input_text_with_empty_body() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/search")
        .match_query(Matcher::UrlEncoded("inputText".into(), "foo".into()))
        .match_body(Matcher::Exact(String::new()))
        .with_status(200)
        .with_body(r#"{"code":20000,"message":"success","data":null}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let data = client.search("foo").await.unwrap();

    assert!(data.is_null());
    mock.assert_async().await;
}

#[tokio::test]
async fn test_search_input_is_url_encoded() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/search")
        .match_query(Matcher::UrlEncoded(
            "inputText".into(),
            "annual report 2024".into(),
        ))
        .with_status(200)
        .with_body(r#"{"code":20000,"message":"success","data":null}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    client.search("annual report 2024").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn test_get_results_sends_page_parameters() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/results")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("pageNum".into(), "2".into()),
            Matcher::UrlEncoded("pageSize".into(), "50".into()),
        ]))
        .with_status(200)
        .with_body(
            json!({
                "code": 20000,
                "message": "success",
                "data": [
                    {"filePath": "/home/demo/notes.txt", "isDir": false},
                    {"filePath": "/home/demo/projects", "isDir": true},
                ],
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = client_for(&server);
    let entries = client.get_results(2, 50).await.unwrap();

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].file_path, "/home/demo/notes.txt");
    assert!(!entries[0].is_dir);
    assert!(entries[1].is_dir);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_success_without_code_resolves_data() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/results")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"data":[]}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let entries = client.get_results(1, 10).await.unwrap();

    assert!(entries.is_empty());
}

#[tokio::test]
async fn test_failure_envelope_rejects_with_full_envelope() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/search")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(r#"{"code":40000,"message":"error: parameters error","data":null}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.search("").await.unwrap_err();

    match err {
        ClientError::Api {
            code,
            message,
            data,
        } => {
            assert_eq!(code, 40000);
            assert_eq!(message.as_deref(), Some("error: parameters error"));
            assert!(data.is_null());
        }
        other => panic!("Expected Api error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_200_rejects_with_status_and_body() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/results")
        .match_query(Matcher::Any)
        .with_status(503)
        .with_body(r#"{"code":40000,"message":"error: Directory too large","data":null}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let err = client.get_results(1, 10).await.unwrap_err();

    match err {
        ClientError::Status { status, body } => {
            assert_eq!(status, 503);
            assert!(body.contains("Directory too large"));
        }
        other => panic!("Expected Status error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_transport_failure_is_not_a_status_error() {
    // Guaranteed-unresolvable host (RFC 2606 reserved TLD), so the
    // request fails before any response exists.
    let client =
        FileEngineClient::new(ClientConfig::new("http://service.invalid")).unwrap();
    let err = client.search("foo").await.unwrap_err();

    assert!(err.is_transport(), "Expected transport error, got {:?}", err);
}

#[tokio::test]
async fn test_download_returns_binary_body() {
    let payload: &[u8] = b"PK\x03\x04 not really a zip";
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/download")
        .match_query(Matcher::UrlEncoded(
            "filePath".into(),
            "/home/demo/projects".into(),
        ))
        .with_status(200)
        .with_header("content-type", "application/octet-stream")
        .with_body(payload)
        .create_async()
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let bytes = client.download("/home/demo/projects", &cancel).await.unwrap();

    assert_eq!(bytes, payload);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_download_honors_cancellation() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/download")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(vec![0u8; 1024 * 1024])
        .create_async()
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let err = client.download("/home/demo/big.bin", &cancel).await.unwrap_err();
    assert!(matches!(err, ClientError::Cancelled));
}

#[tokio::test]
async fn test_download_non_200_rejects() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("GET", "/download")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"code":40000,"message":"error: error request","data":null}"#)
        .create_async()
        .await;

    let client = client_for(&server);
    let cancel = CancellationToken::new();
    let err = client.download("/missing", &cancel).await.unwrap_err();

    match err {
        ClientError::Status { status, .. } => assert_eq!(status, 400),
        other => panic!("Expected Status error, got {:?}", other),
    }
}
