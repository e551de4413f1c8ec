use actix_web::{web, App, HttpServer};
use tracing::info;

use crate::api_json::handlers::{
    dashboard_json_handler, gauge_svg_handler, health_handler, options_handler, page_handler,
};
use crate::excel::ScoreTable;
use crate::models::Variant;

/// Shared, read-only state handed to every worker.
#[derive(Debug)]
pub struct AppState {
    pub table: ScoreTable,
    pub variant: Variant,
}

impl AppState {
    pub fn new(table: ScoreTable, variant: Variant) -> Self {
        AppState { table, variant }
    }
}

/// Registers every dashboard route. Shared by `run_server` and the tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(page_handler))
        .route("/api/dashboard", web::get().to(dashboard_json_handler))
        .route("/api/options", web::get().to(options_handler))
        .route("/gauge.svg", web::get().to(gauge_svg_handler))
        .route("/health", web::get().to(health_handler));
}

pub async fn run_server(bind_addr: &str, state: AppState) -> std::io::Result<()> {
    let state = web::Data::new(state);
    info!(bind = bind_addr, rows = state.table.len(), "starting dashboard server");
    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind(bind_addr)?
        .run()
        .await
}
