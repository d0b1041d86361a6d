use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    Extension, Json,
};
use serde::Deserialize;
use templefinder_core::FacilityRecord;
use templefinder_search::{
    sort_results, FacilityRepository, SearchError, SearchRequest, SearchResult, SortOrder,
};

use crate::middleware::RequestId;

use super::{map_repository_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Default, Deserialize)]
pub(super) struct SortParams {
    #[serde(default)]
    pub sort: SortOrder,
}

pub(super) async fn list_temples(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Result<Json<ApiResponse<Vec<FacilityRecord>>>, ApiError> {
    let data = state
        .search
        .repository()
        .get_all()
        .map_err(|e| map_repository_error(req_id.0.clone(), &e))?;

    Ok(Json(ApiResponse {
        data,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_temple(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Path(raw_id): Path<String>,
) -> Result<Json<ApiResponse<FacilityRecord>>, ApiError> {
    let Ok(id) = raw_id.parse::<i64>() else {
        return Err(ApiError::new(
            req_id.0,
            "bad_request",
            format!("invalid temple id '{raw_id}'"),
        ));
    };

    let facility = state
        .search
        .repository()
        .get_by_id(id)
        .map_err(|e| map_repository_error(req_id.0.clone(), &e))?
        .ok_or_else(|| ApiError::new(req_id.0.clone(), "not_found", "temple not found"))?;

    Ok(Json(ApiResponse {
        data: facility,
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn search_temples(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    params: Result<Query<SortParams>, QueryRejection>,
    body: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<Vec<SearchResult>>>, ApiError> {
    let Query(params) = params.map_err(|e| {
        ApiError::new(
            req_id.0.clone(),
            "validation_error",
            format!("invalid sort parameter: {}", e.body_text()),
        )
    })?;
    let Json(request) = body.map_err(|e| {
        ApiError::new(
            req_id.0.clone(),
            "validation_error",
            format!("invalid search request: {}", e.body_text()),
        )
    })?;

    let query = request
        .into_query(state.default_radius_miles)
        .map_err(|e| map_search_error(req_id.0.clone(), e))?;

    let mut results = state
        .search
        .search(&query)
        .await
        .map_err(|e| map_search_error(req_id.0.clone(), e))?;

    sort_results(&mut results, params.sort);

    Ok(Json(ApiResponse {
        data: results,
        meta: ResponseMeta::new(req_id.0),
    }))
}

fn map_search_error(request_id: String, error: SearchError) -> ApiError {
    match error {
        SearchError::InvalidQuery(message) => {
            ApiError::new(request_id, "validation_error", message)
        }
        SearchError::LocationNotFound => ApiError::new(
            request_id,
            "location_not_found",
            "could not find that location, check the zip code and try again",
        ),
        SearchError::RepositoryUnavailable(reason) => {
            tracing::error!(%reason, "search failed");
            ApiError::new(request_id, "internal_error", "search failed")
        }
    }
}
