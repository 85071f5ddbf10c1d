//! HTTP transport for the extraction pipeline.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query as QueryParams, State, rejection::QueryRejection},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use eyre::Result;
use log::{info, warn};
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use crate::Query;
use crate::output::Response;
use crate::pipeline::{self, Options};
use crate::youtube::CaptionProvider;

/// Shared, read-only state for all requests
pub struct AppState<P> {
    pub provider: P,
    pub options: Options,
    pub developer: String,
}

pub fn router<P>(state: AppState<P>) -> Router
where
    P: CaptionProvider + Send + Sync + 'static,
{
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/transcript", get(transcript::<P>))
        .layer(cors)
        .with_state(Arc::new(state))
}

/// Serve the API until the process is stopped
pub async fn serve<P>(listen: &str, state: AppState<P>) -> Result<()>
where
    P: CaptionProvider + Send + Sync + 'static,
{
    let listener = tokio::net::TcpListener::bind(listen).await?;
    info!("Listening on http://{}", listener.local_addr()?);

    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn transcript<P>(
    State(state): State<Arc<AppState<P>>>,
    query: std::result::Result<QueryParams<Query>, QueryRejection>,
) -> impl IntoResponse
where
    P: CaptionProvider + Send + Sync + 'static,
{
    respond(&state, query.map(|QueryParams(query)| query)).await
}

/// Malformed query strings get the generic failure envelope, never axum's plain-text rejection
async fn respond<P>(
    state: &AppState<P>,
    query: std::result::Result<Query, QueryRejection>,
) -> (StatusCode, Json<serde_json::Value>)
where
    P: CaptionProvider,
{
    let response = match query {
        Ok(query) => pipeline::run(&state.provider, &query, &state.options).await,
        Err(rejection) => {
            warn!("Rejected query string: {rejection}");
            Response::Failed
        }
    };
    into_http(&response, &state.developer)
}

fn into_http(response: &Response, developer: &str) -> (StatusCode, Json<serde_json::Value>) {
    let status = StatusCode::from_u16(response.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::to_value(response.body(developer)).unwrap_or_else(|_| {
        json!({
            "success": false,
            "error": crate::output::INTERNAL_ERROR_MESSAGE,
            "developer": developer,
        })
    });
    (status, Json(body))
}
