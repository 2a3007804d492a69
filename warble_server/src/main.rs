mod error;
mod payload;
mod router;
mod state;
mod util;


use dotenvy::dotenv;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // 1. Initialize logger
    tracing_subscriber::fmt().with_env_filter(util::log_filter()?).compact().init();

    // 2. Setup state and router
    let app = router::app_router()
        .layer(TraceLayer::new_for_http().on_request(()))
        .with_state(AppState::new());

    // 3. Start server
    let addr = util::server_address()?;
    tracing::info!("Server starting at {}", addr);
    axum::Server::bind(&addr).serve(app.into_make_service()).await?;

    Ok(())
}
