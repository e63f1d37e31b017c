use std::sync::Arc;
use std::time::Duration;

use rust_decimal::Decimal;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use huobi_api_client::auth::{Credentials, FixedClock};
use huobi_api_client::config::ProxyConfig;
use huobi_api_client::error::HuobiError;
use huobi_api_client::rest::{HuobiClientExt, HuobiRestClient};
use huobi_api_client::types::RequestParams;

// Signature for GET api.huobi.pro /v1/account/accounts with test_key/test_secret
// at 2023-11-14T22:13:20.
const ACCOUNTS_SIGNATURE: &str = "cvSMUlTJlVrsKPpclBb4XcF0o+3y4Tfd9dKCHNOBM+A=";
// Signature for the POST /v1/order/orders/place request in `test_post_sends_query_and_body`.
const PLACE_SIGNATURE: &str = "2ypr94oCYI+f9PLh9RTQx7g4LXaWSFsmCUmmWB/oAm8=";

fn build_client(server: &MockServer) -> HuobiRestClient {
    HuobiRestClient::builder()
        .base_url(server.uri())
        .credentials(Credentials::new("test_key", "test_secret"))
        .clock(Arc::new(FixedClock::from_unix_timestamp(1_700_000_000).unwrap()))
        .build()
        .unwrap()
}

fn json_response(status: u16, body: serde_json::Value) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_json(body)
}

async fn last_request(server: &MockServer) -> wiremock::Request {
    server
        .received_requests()
        .await
        .unwrap()
        .pop()
        .expect("no request received")
}

#[tokio::test]
async fn test_public_get_is_not_signed() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": "ok",
        "ch": "market.btcusdt.trade.detail",
        "ts": 1_700_000_000_000u64,
        "tick": { "id": 1, "data": [] }
    });

    Mock::given(method("GET"))
        .and(path("/market/trade"))
        .and(query_param("symbol", "btcusdt"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = RequestParams::new().with("symbol", "btcusdt");
    let envelope = client.get("/market/trade", Some(&params)).await.unwrap();
    assert_eq!(envelope, response);

    let request = last_request(&server).await;
    assert_eq!(request.url.query(), Some("symbol=btcusdt"));
}

#[tokio::test]
async fn test_public_get_without_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/tickers"))
        .respond_with(json_response(200, serde_json::json!({ "status": "ok", "data": [] })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    client.get("market/tickers/", None).await.unwrap();

    let request = last_request(&server).await;
    assert_eq!(request.url.path(), "/market/tickers");
    assert!(!request.url.as_str().contains("Signature"));
    assert!(!request.url.as_str().contains("AccessKeyId"));
}

#[tokio::test]
async fn test_private_get_signs_request() {
    let server = MockServer::start().await;
    let response = serde_json::json!({
        "status": "ok",
        "data": [{ "id": 100009, "type": "spot", "subtype": "", "state": "working" }]
    });

    Mock::given(method("GET"))
        .and(path("/v1/account/accounts"))
        .and(query_param("AccessKeyId", "test_key"))
        .and(query_param("SignatureMethod", "HmacSHA256"))
        .and(query_param("SignatureVersion", "2"))
        .and(query_param("Timestamp", "2023-11-14T22:13:20"))
        .and(query_param("Signature", ACCOUNTS_SIGNATURE))
        .and(header("content-type", "application/json;charset=utf-8"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let envelope = client.get("/v1/account/accounts", None).await.unwrap();
    assert_eq!(envelope, response);

    // The signature is always the last query parameter.
    let request = last_request(&server).await;
    let query = request.url.query().unwrap();
    assert!(query.ends_with("&Signature=cvSMUlTJlVrsKPpclBb4XcF0o%2B3y4Tfd9dKCHNOBM%2BA%3D"));
    assert!(query.starts_with("AccessKeyId=test_key&SignatureMethod=HmacSHA256"));
    assert!(request.headers.get("user-agent").is_some());
}

#[tokio::test]
async fn test_post_sends_query_and_body() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "status": "ok", "data": "59378" });

    Mock::given(method("POST"))
        .and(path("/v1/order/orders/place"))
        .and(query_param("symbol", "ethusdt"))
        .and(query_param("Signature", PLACE_SIGNATURE))
        .and(body_json(serde_json::json!({
            "AccessKeyId": "test_key",
            "SignatureMethod": "HmacSHA256",
            "SignatureVersion": "2",
            "Timestamp": "2023-11-14T22:13:20",
            "account-id": 100009,
            "amount": "10.1",
            "price": "100.1",
            "symbol": "ethusdt",
            "type": "buy-limit"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(response))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let params = RequestParams::new()
        .with("account-id", 100009u64)
        .with("amount", "10.1".parse::<Decimal>().unwrap())
        .with("price", "100.1".parse::<Decimal>().unwrap())
        .with("symbol", "ethusdt")
        .with("type", "buy-limit");
    let order_id: String = client.post_data("/v1/order/orders/place", Some(&params)).await.unwrap();
    assert_eq!(order_id, "59378");

    // The body keeps insertion order and carries no signature.
    let request = last_request(&server).await;
    let body = String::from_utf8(request.body).unwrap();
    assert!(body.starts_with(r#"{"AccessKeyId":"test_key","SignatureMethod":"HmacSHA256""#));
    assert!(!body.contains("Signature\":"));
}

#[tokio::test]
async fn test_ok_envelope_resolves_with_full_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/common/symbols"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "ok", "data": [1, 2, 3] })),
        )
        .mount(&server)
        .await;

    let client = build_client(&server);
    let envelope = client.get("/v1/common/symbols", None).await.unwrap();
    assert_eq!(envelope, serde_json::json!({ "status": "ok", "data": [1, 2, 3] }));
}

#[tokio::test]
async fn test_status_is_compared_case_insensitively() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/detail"))
        .respond_with(json_response(200, serde_json::json!({ "status": "OK" })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    assert!(client.get("/market/detail", None).await.is_ok());
}

#[tokio::test]
async fn test_error_envelope_maps_to_api_error() {
    let server = MockServer::start().await;
    let response = serde_json::json!({ "status": "error", "err-code": "x" });

    Mock::given(method("GET"))
        .and(path("/v1/account/accounts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(response.clone()))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get("/v1/account/accounts", None).await.unwrap_err();
    assert!(!err.is_transport());
    match err {
        HuobiError::Api(api_error) => {
            assert_eq!(api_error.envelope(), &response);
            assert_eq!(api_error.code(), Some("x"));
        }
        other => panic!("Expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_200_maps_to_transport_error() {
    let server = MockServer::start().await;

    // The body would be a valid envelope; the status code alone decides.
    Mock::given(method("GET"))
        .and(path("/market/depth"))
        .respond_with(json_response(503, serde_json::json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get("/market/depth", None).await.unwrap_err();
    assert!(err.is_transport());
    match err {
        HuobiError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert!(body.contains("ok"));
        }
        other => panic!("Expected HttpStatus error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_other_success_codes_are_rejected() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/order/orders/place"))
        .respond_with(json_response(201, serde_json::json!({ "status": "ok" })))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.post("/v1/order/orders/place", None).await.unwrap_err();
    assert!(matches!(err, HuobiError::HttpStatus { status, .. } if status.as_u16() == 201));
}

#[tokio::test]
async fn test_non_json_body_maps_to_invalid_response() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/trade"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let client = build_client(&server);
    let err = client.get("/market/trade", None).await.unwrap_err();
    assert!(matches!(err, HuobiError::InvalidResponse(_)));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_timeout_maps_to_timeout_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/trade"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "status": "ok" }))
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = HuobiRestClient::builder()
        .base_url(server.uri())
        .credentials(Credentials::new("test_key", "test_secret"))
        .timeout(Duration::from_millis(50))
        .build()
        .unwrap();

    let err = client.get("/market/trade", None).await.unwrap_err();
    assert!(matches!(err, HuobiError::Timeout), "got {err:?}");
}

#[tokio::test]
async fn test_connection_failure_maps_to_transport_error() {
    // Nothing listens on the reserved port 1.
    let client = HuobiRestClient::builder()
        .base_url("http://127.0.0.1:1")
        .credentials(Credentials::new("test_key", "test_secret"))
        .build()
        .unwrap();

    let err = client.get("/market/trade", None).await.unwrap_err();
    assert!(err.is_transport(), "got {err:?}");
}

#[tokio::test]
async fn test_custom_user_agent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/trade"))
        .and(header("user-agent", "huobi-api-client-tests"))
        .respond_with(json_response(200, serde_json::json!({ "status": "ok" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HuobiRestClient::builder()
        .base_url(server.uri())
        .credentials(Credentials::new("test_key", "test_secret"))
        .user_agent("huobi-api-client-tests")
        .build()
        .unwrap();

    client.get("/market/trade", None).await.unwrap();
}

#[tokio::test]
async fn test_request_raw_dispatches_valid_methods() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/order/orders/59378/submitcancel"))
        .respond_with(json_response(200, serde_json::json!({ "status": "ok", "data": "59378" })))
        .expect(1)
        .mount(&server)
        .await;

    let client = build_client(&server);
    let envelope = client
        .request_raw("POST", "/v1/order/orders/59378/submitcancel", None)
        .await
        .unwrap();
    assert_eq!(envelope.data(), Some(&serde_json::json!("59378")));
}

#[tokio::test]
async fn test_requests_go_through_configured_proxy() {
    let proxy = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/market/tickers"))
        .respond_with(json_response(200, serde_json::json!({ "status": "ok" })))
        .expect(1)
        .mount(&proxy)
        .await;

    let addr = proxy.address();
    let client = HuobiRestClient::builder()
        .base_url("http://unreachable.invalid")
        .credentials(Credentials::new("test_key", "test_secret"))
        .proxy(ProxyConfig::new(addr.ip().to_string(), addr.port()))
        .build()
        .unwrap();

    let envelope = client.get("/market/tickers", None).await.unwrap();
    assert_eq!(envelope, serde_json::json!({ "status": "ok" }));

    let request = last_request(&proxy).await;
    assert_eq!(request.url.host_str(), Some("unreachable.invalid"));
}

#[tokio::test]
async fn test_http_status_error_keeps_body_read_failure() {
    // Announce a longer body than is sent, then hang up.
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.unwrap();
        let mut buf = [0u8; 4096];
        let _ = socket.read(&mut buf).await;
        socket
            .write_all(b"HTTP/1.1 503 Service Unavailable\r\ncontent-length: 100\r\n\r\nshort")
            .await
            .unwrap();
    });

    let client = HuobiRestClient::builder()
        .base_url(format!("http://{addr}"))
        .credentials(Credentials::new("test_key", "test_secret"))
        .build()
        .unwrap();

    let err = client.get("/market/trade", None).await.unwrap_err();
    match err {
        HuobiError::HttpStatus { status, body } => {
            assert_eq!(status.as_u16(), 503);
            assert!(body.starts_with("<failed to read response body"), "got {body:?}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}
