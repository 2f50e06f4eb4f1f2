use std::time::Duration;

use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use nova_apns_push::transport::{ApnsRequest, ApnsTransport, HttpTransport, TransportError};

fn request_for(url: String) -> ApnsRequest {
    ApnsRequest {
        url,
        headers: vec![
            ("authorization".to_string(), "bearer test-token".to_string()),
            ("apns-topic".to_string(), "com.example.app".to_string()),
            ("apns-push-type".to_string(), "alert".to_string()),
            ("content-type".to_string(), "application/json".to_string()),
            ("apns-priority".to_string(), "10".to_string()),
        ],
        body: r#"{"aps":{"alert":{"title":"T","body":"B"},"sound":"default","content-available":1}}"#
            .to_string(),
    }
}

#[tokio::test]
async fn test_posts_headers_and_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/3/device/abcdef01"))
        .and(header("authorization", "bearer test-token"))
        .and(header("apns-topic", "com.example.app"))
        .and(header("content-type", "application/json"))
        .and(body_string_contains("content-available"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("apns-id", "E8E0769F-9B18-4A85-8358-E593BD4C4DB9"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let response = transport
        .execute(request_for(format!("{}/3/device/abcdef01", server.uri())))
        .await
        .unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.body, "");
    assert_eq!(
        response.apns_id.as_deref(),
        Some("E8E0769F-9B18-4A85-8358-E593BD4C4DB9")
    );
}

#[tokio::test]
async fn test_error_response_passes_body_through() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/3/device/expired"))
        .respond_with(ResponseTemplate::new(410).set_body_string(r#"{"reason":"Unregistered"}"#))
        .mount(&server)
        .await;

    let transport = HttpTransport::new().unwrap();
    let response = transport
        .execute(request_for(format!("{}/3/device/expired", server.uri())))
        .await
        .unwrap();

    assert_eq!(response.status, 410);
    assert_eq!(response.body, r#"{"reason":"Unregistered"}"#);
    assert!(response.apns_id.is_none());
}

#[tokio::test]
async fn test_connection_refused_is_a_connect_error() {
    let transport = HttpTransport::new().unwrap();
    let result = transport
        .execute(request_for(
            "http://127.0.0.1:9/3/device/abcdef01".to_string(),
        ))
        .await;

    assert!(matches!(result, Err(TransportError::Connect(_))));
}

#[tokio::test]
async fn test_slow_response_is_a_timeout_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/3/device/slow"))
        .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
        .mount(&server)
        .await;

    let transport = HttpTransport::with_timeout(Duration::from_millis(100)).unwrap();
    let result = transport
        .execute(request_for(format!("{}/3/device/slow", server.uri())))
        .await;

    assert!(matches!(result, Err(TransportError::Timeout(_))));
}
