// Library root of the `scoredash` crate.
// Loads a score workbook once and serves the filter + gauge dashboard over it.
pub mod algorithm;
pub mod api_json;
pub mod config;
pub mod error;
pub mod excel;
pub mod logging;
pub mod models;
pub mod render;
pub mod server;

pub use algorithm::run_pipeline;
pub use excel::ScoreTable;
/// Runs the HTTP server (re-exported for `main`)
pub use server::{run_server, AppState};
