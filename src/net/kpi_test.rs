use super::*;
use crate::net::api::ApiRequest;
use crate::net::test_support::{MockTransport, TEST_BASE_URL, client};
use crate::net::types::{KpiMetricType, KpiTarget};
use serde_json::{Value, json};

const KPI_ID: &str = "7d4c3c2e-9a4b-4a9f-8f3e-1f2f0c8a6b11";

fn kpi_body() -> Value {
    json!({
        "id": KPI_ID,
        "name": "description_coverage",
        "fullyQualifiedName": "description_coverage",
        "displayName": "Description coverage",
        "metricType": "PERCENTAGE",
        "targetDefinition": [{ "name": "completedDescriptionFraction", "value": "0.75" }],
        "startDate": 1_700_000_000_000_i64,
        "endDate": 1_710_000_000_000_i64,
        "version": 0.1
    })
}

fn kpi_result_body() -> Value {
    json!({
        "timestamp": 1_700_000_000_000_i64,
        "kpiFqn": "description_coverage",
        "targetResult": [{ "name": "completedDescriptionFraction", "value": "0.42", "targetMet": false }]
    })
}

fn create_request() -> CreateKpiRequest {
    CreateKpiRequest {
        name: "description_coverage".into(),
        display_name: Some("Description coverage".into()),
        description: "Share of assets with a description".into(),
        data_insight_chart: "PercentageOfEntitiesWithDescriptionByType".into(),
        start_date: 1_700_000_000_000,
        end_date: 1_710_000_000_000,
        target_definition: vec![KpiTarget { name: "completedDescriptionFraction".into(), value: "0.75".into() }],
        metric_type: KpiMetricType::Percentage,
        owner: None,
    }
}

fn assert_request(req: &ApiRequest, method: Method, path_and_query: &str) {
    assert_eq!(req.method, method);
    assert_eq!(req.url, format!("{TEST_BASE_URL}{path_and_query}"));
}

// =============================================================
// Payload pass-through: each wrapper resolves with exactly the body
// =============================================================

#[tokio::test]
async fn list_kpis_returns_page_body() {
    let body = json!({ "data": [kpi_body()], "paging": { "total": 1 } });
    let api = client(MockTransport::ok(&body));

    let page = api.list_kpis(None).await.unwrap();
    assert_eq!(serde_json::to_value(&page).unwrap(), body);
    assert_request(&api.transport().only_request(), Method::Get, "/kpi");
}

#[tokio::test]
async fn list_kpis_forwards_list_params() {
    let api = client(MockTransport::ok(&json!({ "data": [], "paging": { "total": 0 } })));
    let params = ListParams { fields: Some("owner".into()), limit: Some(25), ..ListParams::default() };

    api.list_kpis(Some(&params)).await.unwrap();
    assert_request(&api.transport().only_request(), Method::Get, "/kpi?fields=owner&limit=25");
}

#[tokio::test]
async fn create_kpi_posts_request_and_returns_entity() {
    let api = client(MockTransport::ok(&kpi_body()));

    let kpi = api.create_kpi(&create_request()).await.unwrap();
    assert_eq!(serde_json::to_value(&kpi).unwrap(), kpi_body());

    let req = api.transport().only_request();
    assert_request(&req, Method::Post, "/kpi");
    let sent: Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
    assert_eq!(sent["dataInsightChart"], "PercentageOfEntitiesWithDescriptionByType");
    assert_eq!(sent["metricType"], "PERCENTAGE");
}

#[tokio::test]
async fn put_kpi_uses_put_verb() {
    let api = client(MockTransport::ok(&kpi_body()));

    let kpi = api.put_kpi(&create_request()).await.unwrap();
    assert_eq!(serde_json::to_value(&kpi).unwrap(), kpi_body());
    assert_request(&api.transport().only_request(), Method::Put, "/kpi");
}

#[tokio::test]
async fn patch_kpi_sends_json_patch_to_id_path() {
    let api = client(MockTransport::ok(&kpi_body()));
    let id = Uuid::parse_str(KPI_ID).unwrap();
    let ops = [PatchOperation::Replace { path: "/displayName".into(), value: json!("Coverage") }];

    let kpi = api.patch_kpi(id, &ops).await.unwrap();
    assert_eq!(serde_json::to_value(&kpi).unwrap(), kpi_body());

    let req = api.transport().only_request();
    assert_request(&req, Method::Patch, &format!("/kpi/{KPI_ID}"));
    assert_eq!(req.content_type, JSON_PATCH_CONTENT_TYPE);
    assert_eq!(
        serde_json::from_str::<Value>(req.body.as_deref().unwrap()).unwrap(),
        json!([{ "op": "replace", "path": "/displayName", "value": "Coverage" }])
    );
}

#[tokio::test]
async fn get_kpi_by_name_returns_entity() {
    let api = client(MockTransport::ok(&kpi_body()));

    let kpi = api.get_kpi_by_name("description_coverage", None).await.unwrap();
    assert_eq!(serde_json::to_value(&kpi).unwrap(), kpi_body());
    assert_request(&api.transport().only_request(), Method::Get, "/kpi/name/description_coverage");
}

#[tokio::test]
async fn list_kpi_results_defaults_to_ascending() {
    let body = json!({ "data": [kpi_result_body()], "paging": { "total": 1 } });
    let api = client(MockTransport::ok(&body));

    let page = api
        .list_kpi_results("description_coverage", KpiResultParams { start_ts: 100, end_ts: 200 })
        .await
        .unwrap();
    assert_eq!(serde_json::to_value(&page).unwrap(), body);
    assert_request(
        &api.transport().only_request(),
        Method::Get,
        "/kpi/description_coverage/kpiResult?startTs=100&endTs=200&orderBy=ASC",
    );
}

#[tokio::test]
async fn list_kpi_results_ordered_passes_descending() {
    let api = client(MockTransport::ok(&json!({ "data": [], "paging": { "total": 0 } })));

    api.list_kpi_results_ordered("kpi", KpiResultParams { start_ts: 1, end_ts: 2 }, SortOrder::Desc)
        .await
        .unwrap();
    assert_request(
        &api.transport().only_request(),
        Method::Get,
        "/kpi/kpi/kpiResult?startTs=1&endTs=2&orderBy=DESC",
    );
}

#[tokio::test]
async fn latest_kpi_result_returns_result() {
    let api = client(MockTransport::ok(&kpi_result_body()));

    let result = api.latest_kpi_result("description_coverage").await.unwrap();
    assert_eq!(serde_json::to_value(&result).unwrap(), kpi_result_body());
    assert_request(&api.transport().only_request(), Method::Get, "/kpi/description_coverage/latestKpiResult");
}

// =============================================================
// FQN encoding
// =============================================================

#[tokio::test]
async fn fqn_with_reserved_characters_is_percent_encoded() {
    let api = client(MockTransport::ok(&kpi_body()));
    api.get_kpi_by_name("team/ops kpi?v=1", None).await.unwrap();
    assert_request(&api.transport().only_request(), Method::Get, "/kpi/name/team%2Fops%20kpi%3Fv%3D1");

    let api = client(MockTransport::ok(&kpi_result_body()));
    api.latest_kpi_result("a/b").await.unwrap();
    assert_request(&api.transport().only_request(), Method::Get, "/kpi/a%2Fb/latestKpiResult");
}

// =============================================================
// Error propagation
// =============================================================

#[tokio::test]
async fn http_errors_propagate_unchanged() {
    let api = client(MockTransport::status(409, r#"{"message":"Entity already exists"}"#));
    let err = api.create_kpi(&create_request()).await.unwrap_err();
    assert_eq!(err.status(), Some(409));
    assert_eq!(err.server_message().as_deref(), Some("Entity already exists"));
    assert_eq!(api.transport().requests().len(), 1);
}

#[tokio::test]
async fn transport_errors_propagate_unchanged() {
    let api = client(MockTransport::offline("dns failure"));
    let err = api.latest_kpi_result("kpi").await.unwrap_err();
    assert!(matches!(err, ApiError::Request(ref m) if m == "dns failure"));
}
