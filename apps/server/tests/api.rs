use std::io::Write;

use alzoul_server::{api::app_router, build_state, config::Config};
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
};
use tower::ServiceExt;

const RATES: &str = r#"{
    "baseCurrency": { "code": "SDG", "names": { "ar": "جنيه سوداني", "en": "Sudanese Pound" } },
    "currencies": [
        { "code": "SAR", "names": { "ar": "ريال سعودي", "en": "Saudi Riyal" }, "rate": "780" },
        { "code": "USD", "names": { "ar": "دولار أمريكي", "en": "US Dollar" }, "rate": "3300" }
    ],
    "messaging": { "baseUrl": "https://wa.me", "recipient": "+966578030378" },
    "corridors": [
        { "country": { "ar": "السعودية", "en": "Saudi Arabia" }, "currency": "SAR",
          "deliveryTime": { "ar": "2-4 ساعات", "en": "2-4 hours" }, "feePercent": "2.5" }
    ]
}"#;

fn build_test_router() -> axum::Router {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(RATES.as_bytes()).unwrap();
    let config = Config {
        rates_file: Some(file.path().to_path_buf()),
        ..Config::default()
    };
    let state = build_state(&config).unwrap();
    app_router(state, &config)
}

async fn send(
    app: axum::Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app.oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, json)
}

#[tokio::test]
async fn healthz_responds_ok() {
    let app = build_test_router();
    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn lists_currencies_base_first() {
    let app = build_test_router();
    let (status, json) = send(app, Method::GET, "/api/v1/currencies", None).await;
    assert_eq!(status, StatusCode::OK);
    let codes: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["SDG", "SAR", "USD"]);
    assert_eq!(json[2]["rate"], "3300");
}

#[tokio::test]
async fn converts_through_base() {
    let app = build_test_router();
    let body = serde_json::json!({ "amount": "100", "from": "SAR", "to": "USD" });
    let (status, json) = send(app, Method::POST, "/api/v1/convert", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["displayAmount"], "23.64");
    assert_eq!(json["displayRate"], "0.236364");
    assert_eq!(json["amount"], "100");
}

#[tokio::test]
async fn accepts_numeric_amount() {
    let app = build_test_router();
    let body = serde_json::json!({ "amount": 50, "from": "USD", "to": "SDG" });
    let (status, json) = send(app, Method::POST, "/api/v1/convert", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["displayAmount"], "165000.00");
    assert_eq!(json["convertedAmount"], "165000");
}

#[tokio::test]
async fn rejects_invalid_requests_with_bad_request() {
    let cases = [
        serde_json::json!({ "amount": "-5", "from": "SAR", "to": "USD" }),
        serde_json::json!({ "amount": "abc", "from": "SAR", "to": "USD" }),
        serde_json::json!({ "amount": "10", "from": "SAR", "to": "SAR" }),
        serde_json::json!({ "amount": "10", "from": "SAR", "to": "ZZZ" }),
        serde_json::json!({ "amount": "10", "from": "", "to": "USD" }),
    ];
    for body in cases {
        let app = build_test_router();
        let (status, json) = send(app, Method::POST, "/api/v1/convert", Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body: {}", body);
        assert_eq!(json["code"], 400);
    }
}

#[tokio::test]
async fn share_returns_localized_message_and_link() {
    let app = build_test_router();
    let body = serde_json::json!({ "amount": "100", "from": "SAR", "to": "USD", "language": "en" });
    let (status, json) = send(app, Method::POST, "/api/v1/share", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    let text = json["text"].as_str().unwrap();
    assert!(text.starts_with("Transfer Details:"));
    assert!(text.contains("100 Saudi Riyal"));
    assert!(text.contains("23.64 US Dollar"));
    let uri = json["uri"].as_str().unwrap();
    assert!(uri.starts_with("https://wa.me/966578030378?text=Transfer%20Details"));
}

#[tokio::test]
async fn share_defaults_to_arabic() {
    let app = build_test_router();
    let body = serde_json::json!({ "amount": "2", "from": "SAR", "to": "SDG" });
    let (status, json) = send(app, Method::POST, "/api/v1/share", Some(body)).await;
    assert_eq!(status, StatusCode::OK);
    let text = json["text"].as_str().unwrap();
    assert!(text.starts_with("تفاصيل التحويل:"));
    assert!(text.contains("1560.00 جنيه سوداني"));
}

#[tokio::test]
async fn lists_localized_corridors() {
    let app = build_test_router();
    let (status, json) = send(app, Method::GET, "/api/v1/corridors?lang=en", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json[0]["country"], "Saudi Arabia");
    assert_eq!(json[0]["deliveryTime"], "2-4 hours");
    assert_eq!(json[0]["feePercent"], "2.5");

    let app = build_test_router();
    let (_, json) = send(app, Method::GET, "/api/v1/corridors", None).await;
    assert_eq!(json[0]["country"], "السعودية");
}

#[tokio::test]
async fn share_rejects_unsupported_language_as_json_error() {
    let app = build_test_router();
    let body = serde_json::json!({ "amount": "100", "from": "SAR", "to": "USD", "language": "fr" });
    let (status, json) = send(app, Method::POST, "/api/v1/share", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 400);
    assert!(json["message"].as_str().unwrap().contains("fr"));
}

#[tokio::test]
async fn malformed_bodies_get_json_bad_request() {
    let app = build_test_router();
    let body = serde_json::json!({ "amount": "10", "from": "SAR" });
    let (status, json) = send(app, Method::POST, "/api/v1/convert", Some(body)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 400);

    let app = build_test_router();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/share")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["code"], 400);
}

#[tokio::test]
async fn corridors_reject_unsupported_language() {
    let app = build_test_router();
    let (status, json) = send(app, Method::GET, "/api/v1/corridors?lang=fr", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 400);
}
