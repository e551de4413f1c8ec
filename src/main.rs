// --- Student performance dashboard ---

use scoredash::config::Config;
use scoredash::{logging, run_server, AppState, ScoreTable};
use tracing::error;

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = Config::load();
    logging::init(config.debug);

    let table = match ScoreTable::load(&config.data, config.sheet.as_deref()) {
        Ok(t) => t,
        Err(e) => {
            error!(path = %config.data.display(), "failed to load score workbook: {}", e);
            std::process::exit(1);
        }
    };

    let bind = config.bind_addr();
    println!("Serving dashboard on http://{}", bind);
    run_server(&bind, AppState::new(table, config.variant())).await
}
