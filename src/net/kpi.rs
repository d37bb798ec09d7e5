//! KPI resource wrappers.
//!
//! One function per endpoint, each issuing exactly one request. FQNs are
//! percent-encoded as a single path segment; ids are UUIDs and need no
//! encoding.

#[cfg(test)]
#[path = "kpi_test.rs"]
mod kpi_test;

use serde::Serialize;
use uuid::Uuid;

use super::api::{ApiClient, JSON_CONTENT_TYPE, JSON_PATCH_CONTENT_TYPE, Method, Transport, encode_fqn, encode_query};
use super::error::ApiError;
use super::types::{
    CreateKpiRequest, Kpi, KpiResult, KpiResultParams, ListParams, PagingResponse, PatchOperation, SortOrder,
};

const KPI_PATH: &str = "/kpi";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct KpiResultQuery {
    start_ts: i64,
    end_ts: i64,
    order_by: SortOrder,
}

fn list_query(params: Option<&ListParams>) -> Result<Option<String>, ApiError> {
    Ok(params.map(encode_query).transpose()?.flatten())
}

impl<T: Transport> ApiClient<T> {
    /// `GET /kpi`: one page of KPIs.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode errors.
    pub async fn list_kpis(&self, params: Option<&ListParams>) -> Result<PagingResponse<Kpi>, ApiError> {
        self.get(KPI_PATH, list_query(params)?).await
    }

    /// `POST /kpi`: create a KPI.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode errors.
    pub async fn create_kpi(&self, request: &CreateKpiRequest) -> Result<Kpi, ApiError> {
        self.send_json(Method::Post, KPI_PATH, request, JSON_CONTENT_TYPE).await
    }

    /// `PUT /kpi`: create or replace a KPI by name.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode errors.
    pub async fn put_kpi(&self, request: &CreateKpiRequest) -> Result<Kpi, ApiError> {
        self.send_json(Method::Put, KPI_PATH, request, JSON_CONTENT_TYPE).await
    }

    /// `PATCH /kpi/{id}` with a JSON-Patch document.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode errors.
    pub async fn patch_kpi(&self, id: Uuid, operations: &[PatchOperation]) -> Result<Kpi, ApiError> {
        let path = format!("{KPI_PATH}/{id}");
        self.send_json(Method::Patch, &path, operations, JSON_PATCH_CONTENT_TYPE).await
    }

    /// `GET /kpi/name/{fqn}`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode errors.
    pub async fn get_kpi_by_name(&self, fqn: &str, params: Option<&ListParams>) -> Result<Kpi, ApiError> {
        let path = format!("{KPI_PATH}/name/{}", encode_fqn(fqn));
        self.get(&path, list_query(params)?).await
    }

    /// `GET /kpi/{fqn}/kpiResult` in ascending time order.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode errors.
    pub async fn list_kpi_results(
        &self,
        fqn: &str,
        params: KpiResultParams,
    ) -> Result<PagingResponse<KpiResult>, ApiError> {
        self.list_kpi_results_ordered(fqn, params, SortOrder::default()).await
    }

    /// `GET /kpi/{fqn}/kpiResult` with an explicit ordering.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode errors.
    pub async fn list_kpi_results_ordered(
        &self,
        fqn: &str,
        params: KpiResultParams,
        order_by: SortOrder,
    ) -> Result<PagingResponse<KpiResult>, ApiError> {
        let path = format!("{KPI_PATH}/{}/kpiResult", encode_fqn(fqn));
        let query = KpiResultQuery { start_ts: params.start_ts, end_ts: params.end_ts, order_by };
        self.get(&path, encode_query(&query)?).await
    }

    /// `GET /kpi/{fqn}/latestKpiResult`.
    ///
    /// # Errors
    ///
    /// Propagates transport, status and decode errors.
    pub async fn latest_kpi_result(&self, fqn: &str) -> Result<KpiResult, ApiError> {
        let path = format!("{KPI_PATH}/{}/latestKpiResult", encode_fqn(fqn));
        self.get(&path, None).await
    }
}
