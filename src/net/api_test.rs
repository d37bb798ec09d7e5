use super::*;
use crate::net::test_support::{MockTransport, TEST_BASE_URL, client};

#[derive(serde::Deserialize, Debug, PartialEq)]
struct Echo {
    ok: bool,
}

#[derive(Serialize)]
struct Page<'a> {
    limit: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    after: Option<&'a str>,
}

#[test]
fn method_names_are_uppercase_verbs() {
    assert_eq!(Method::Get.as_str(), "GET");
    assert_eq!(Method::Post.as_str(), "POST");
    assert_eq!(Method::Put.as_str(), "PUT");
    assert_eq!(Method::Patch.as_str(), "PATCH");
}

#[test]
fn with_base_url_trims_trailing_slash() {
    let api = ApiClient::with_base_url(MockTransport::status(200, "{}"), "http://host/api/v1/");
    assert_eq!(api.base_url(), "http://host/api/v1");
}

#[test]
fn encode_query_skips_absent_fields() {
    let q = encode_query(&Page { limit: 10, after: None }).unwrap();
    assert_eq!(q.as_deref(), Some("limit=10"));
    let q = encode_query(&Page { limit: 5, after: Some("cursor==") }).unwrap();
    assert_eq!(q.as_deref(), Some("limit=5&after=cursor%3D%3D"));
}

#[test]
fn encode_fqn_escapes_path_separators() {
    assert_eq!(encode_fqn("sales/quarterly.kpi"), "sales%2Fquarterly.kpi");
    assert_eq!(encode_fqn("plain_name"), "plain_name");
}

#[tokio::test]
async fn get_builds_url_with_query() {
    let api = client(MockTransport::ok(&serde_json::json!({ "ok": true })));
    let echo: Echo = api.get("/things", Some("limit=1".to_owned())).await.unwrap();
    assert_eq!(echo, Echo { ok: true });

    let req = api.transport().only_request();
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.url, format!("{TEST_BASE_URL}/things?limit=1"));
    assert_eq!(req.body, None);
}

#[tokio::test]
async fn send_json_serializes_body_and_content_type() {
    let api = client(MockTransport::ok(&serde_json::json!({ "ok": false })));
    let echo: Echo = api
        .send_json(Method::Patch, "/things/1", &serde_json::json!([{ "op": "remove", "path": "/a" }]), JSON_PATCH_CONTENT_TYPE)
        .await
        .unwrap();
    assert_eq!(echo, Echo { ok: false });

    let req = api.transport().only_request();
    assert_eq!(req.method, Method::Patch);
    assert_eq!(req.content_type, JSON_PATCH_CONTENT_TYPE);
    assert_eq!(req.body.as_deref(), Some(r#"[{"op":"remove","path":"/a"}]"#));
}

#[tokio::test]
async fn non_success_status_propagates_with_body() {
    let api = client(MockTransport::status(404, r#"{"message":"not found"}"#));
    let err = api.get::<Echo>("/missing", None).await.unwrap_err();
    assert!(matches!(err, ApiError::Status { status: 404, ref body } if body.contains("not found")));
}

#[tokio::test]
async fn transport_failure_propagates_unchanged() {
    let api = client(MockTransport::offline("connection refused"));
    let err = api.get::<Echo>("/things", None).await.unwrap_err();
    assert!(matches!(err, ApiError::Request(ref msg) if msg == "connection refused"));
}

#[tokio::test]
async fn malformed_body_is_parse_error() {
    let api = client(MockTransport::status(200, "not json"));
    let err = api.get::<Echo>("/things", None).await.unwrap_err();
    assert!(matches!(err, ApiError::Parse(_)));
}
