use actix_web::{web, HttpResponse, Responder};
use tracing::debug;

use crate::algorithm::run_pipeline;
use crate::api_json::{selection_from_pairs, HealthResponse};
use crate::error::RenderError;
use crate::render::dashboard_page;
use crate::server::AppState;

/// GET /
/// Full dashboard page for the selection in the query string.
pub async fn page_handler(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, RenderError> {
    let selection = selection_from_pairs(&query);
    debug!(?selection, "page request");
    let dashboard = run_pipeline(state.table.records(), &selection, state.variant);
    let html = dashboard_page(&state.table.options(), &selection, &dashboard)?;
    Ok(HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(html))
}

/// GET /api/dashboard
/// Same computation as the page, returned as JSON.
pub async fn dashboard_json_handler(
    state: web::Data<AppState>,
    query: web::Query<Vec<(String, String)>>,
) -> impl Responder {
    let selection = selection_from_pairs(&query);
    debug!(?selection, "dashboard request");
    HttpResponse::Ok().json(run_pipeline(state.table.records(), &selection, state.variant))
}

/// GET /api/options
pub async fn options_handler(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.table.options())
}

/// GET /health
pub async fn health_handler(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        rows: state.table.len(),
        source: state.table.source().map(|p| p.display().to_string()),
    })
}
