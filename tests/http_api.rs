//! End-to-end tests through the HTTP surface.

use serde_json::{json, Value};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

mod common;

use common::{
    employee_json, envelope, start_mock_backend, start_programmable_backend, start_proxy,
    test_config,
};

#[tokio::test]
async fn test_health_endpoint() {
    let (upstream, _) = start_mock_backend(200, "{}").await;
    let (proxy, shutdown) = start_proxy(test_config(upstream)).await;

    let res = reqwest::get(format!("http://{}/health", proxy)).await.unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "ok");

    shutdown.trigger();
}

#[tokio::test]
async fn test_list_employees() {
    let (upstream, _) = start_programmable_backend(|_| async {
        (
            200,
            envelope(json!([
                employee_json("1", "Alice", 100_000),
                employee_json("2", "Bob", 90_000)
            ])),
        )
    })
    .await;
    let (proxy, shutdown) = start_proxy(test_config(upstream)).await;

    let res = reqwest::get(format!("http://{}/v1/employee", proxy))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body.as_array().unwrap().len(), 2);
    assert_eq!(body[0]["name"], "Alice");
    assert_eq!(body[0]["salary"], 100_000);
    assert!(body[0].get("employee_name").is_none());

    shutdown.trigger();
}

#[tokio::test]
async fn test_request_id_is_echoed() {
    let (upstream, _) = start_mock_backend(200, "{\"status\":\"ok\",\"data\":[]}").await;
    let (proxy, shutdown) = start_proxy(test_config(upstream)).await;

    let res = reqwest::Client::new()
        .get(format!("http://{}/v1/employee", proxy))
        .header("x-request-id", "trace-123")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "trace-123");

    shutdown.trigger();
}

#[tokio::test]
async fn test_derived_endpoints() {
    let (upstream, _) = start_programmable_backend(|_| async {
        (
            200,
            envelope(json!([
                employee_json("1", "Alice", 100_000),
                employee_json("2", "Bob", 250_000),
                employee_json("3", "Alicia", 90_000)
            ])),
        )
    })
    .await;
    let (proxy, shutdown) = start_proxy(test_config(upstream)).await;
    let base = format!("http://{}/v1/employee", proxy);

    let max: Value = reqwest::get(format!("{}/highestSalary", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(max, json!(250_000));

    let top: Value = reqwest::get(format!("{}/topTenHighestEarningEmployeeNames", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(top, json!(["Bob", "Alice", "Alicia"]));

    let found: Value = reqwest::get(format!("{}/search/Ali", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(found.as_array().unwrap().len(), 2);

    shutdown.trigger();
}

#[tokio::test]
async fn test_missing_employee_is_404() {
    let (upstream, _) = start_mock_backend(200, "{\"status\":\"ok\",\"data\":null}").await;
    let (proxy, shutdown) = start_proxy(test_config(upstream)).await;

    let res = reqwest::get(format!("http://{}/v1/employee/unknown", proxy))
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], 404);
    assert!(body["message"].as_str().unwrap().contains("unknown"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_encoded_dot_id_is_404() {
    let (upstream, recorder) = start_mock_backend(200, "{\"status\":\"ok\",\"data\":[]}").await;
    let (proxy, shutdown) = start_proxy(test_config(upstream)).await;

    // Raw request line: an HTTP client library would resolve the dot segment itself.
    let mut stream = TcpStream::connect(proxy).await.unwrap();
    stream
        .write_all(b"GET /v1/employee/%2E HTTP/1.1\r\nHost: localhost\r\nConnection: close\r\n\r\n")
        .await
        .unwrap();
    let mut response = String::new();
    stream.read_to_string(&mut response).await.unwrap();

    assert!(response.starts_with("HTTP/1.1 404"), "got {}", response);
    assert_eq!(recorder.count(), 0);

    shutdown.trigger();
}

#[tokio::test]
async fn test_invalid_create_is_400_with_field_errors() {
    let (upstream, recorder) = start_mock_backend(200, "{}").await;
    let (proxy, shutdown) = start_proxy(test_config(upstream)).await;

    let res = reqwest::Client::new()
        .post(format!("http://{}/v1/employee", proxy))
        .json(&json!({
            "name": "Jane",
            "salary": -1000,
            "age": 28,
            "title": "Developer"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["errors"]["salary"], "Salary must be greater than 0");
    assert!(body["errors"].get("name").is_none());
    assert_eq!(recorder.count(), 0);

    shutdown.trigger();
}

#[tokio::test]
async fn test_malformed_create_body_is_400() {
    let (upstream, recorder) = start_mock_backend(200, "{}").await;
    let (proxy, shutdown) = start_proxy(test_config(upstream)).await;

    let res = reqwest::Client::new()
        .post(format!("http://{}/v1/employee", proxy))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 400);
    assert_eq!(recorder.count(), 0);

    shutdown.trigger();
}

#[tokio::test]
async fn test_create_returns_201() {
    let (upstream, _) = start_programmable_backend(|_| async {
        (200, envelope(employee_json("new-1", "Jane Smith", 85_000)))
    })
    .await;
    let (proxy, shutdown) = start_proxy(test_config(upstream)).await;

    let res = reqwest::Client::new()
        .post(format!("http://{}/v1/employee", proxy))
        .json(&json!({
            "name": "Jane Smith",
            "salary": 85_000,
            "age": 28,
            "title": "Senior Developer"
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 201);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], "new-1");

    shutdown.trigger();
}

#[tokio::test]
async fn test_delete_returns_confirmation() {
    let (upstream, _) = start_programmable_backend(|req| async move {
        if req.method == "GET" {
            (200, envelope(employee_json("7", "John Doe", 50_000)))
        } else {
            (200, envelope(json!("Employee John Doe deleted successfully")))
        }
    })
    .await;
    let (proxy, shutdown) = start_proxy(test_config(upstream)).await;

    let res = reqwest::Client::new()
        .delete(format!("http://{}/v1/employee/7", proxy))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!("Employee John Doe deleted successfully"));

    shutdown.trigger();
}

#[tokio::test]
async fn test_upstream_failure_is_500() {
    let (upstream, recorder) = start_mock_backend(503, "{}").await;
    let (proxy, shutdown) = start_proxy(test_config(upstream)).await;

    let res = reqwest::get(format!("http://{}/v1/employee", proxy))
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], 500);
    assert_eq!(recorder.count(), 1);

    shutdown.trigger();
}

#[tokio::test]
async fn test_exhausted_rate_limit_is_500() {
    let (upstream, recorder) = start_mock_backend(429, "Too Many Requests").await;
    let (proxy, shutdown) = start_proxy(test_config(upstream)).await;

    let res = reqwest::get(format!("http://{}/v1/employee/highestSalary", proxy))
        .await
        .unwrap();
    assert_eq!(res.status(), 500);
    assert_eq!(recorder.count(), 3);

    shutdown.trigger();
}
