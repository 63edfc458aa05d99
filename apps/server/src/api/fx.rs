use std::sync::Arc;

use crate::{
    error::ApiResult,
    main_lib::AppState,
    models::{ConvertBody, ConvertResponse, CorridorView, LanguageQuery, ShareBody},
};
use alzoul_core::fx::Currency;
use alzoul_core::ShareMessage;
use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    routing::{get, post},
    Json, Router,
};

/// Base currency first, then every quoted currency with its rate.
async fn list_currencies(State(state): State<Arc<AppState>>) -> Json<Vec<Currency>> {
    Json(state.fx_service.list_currencies())
}

async fn list_corridors(
    State(state): State<Arc<AppState>>,
    query: Result<Query<LanguageQuery>, QueryRejection>,
) -> ApiResult<Json<Vec<CorridorView>>> {
    let Query(query) = query?;
    let language = query.language()?;
    let corridors = state
        .fx_service
        .list_corridors()
        .iter()
        .map(|c| CorridorView::localized(c, language))
        .collect();
    Ok(Json(corridors))
}

async fn convert(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ConvertBody>, JsonRejection>,
) -> ApiResult<Json<ConvertResponse>> {
    let Json(body) = body?;
    let request = body.to_request()?;
    let result = state.fx_service.convert(&request)?;
    Ok(Json(ConvertResponse::new(&request, result)))
}

/// Recomputes the conversion and returns the message and chat link for it.
async fn share(
    State(state): State<Arc<AppState>>,
    body: Result<Json<ShareBody>, JsonRejection>,
) -> ApiResult<Json<ShareMessage>> {
    let Json(body) = body?;
    let language = body.language()?;
    let request = body.to_request()?;
    let result = state.fx_service.convert(&request)?;
    let message = state
        .fx_service
        .compose_share_message(&request, &result, language)?;
    Ok(Json(message))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/currencies", get(list_currencies))
        .route("/corridors", get(list_corridors))
        .route("/convert", post(convert))
        .route("/share", post(share))
}
