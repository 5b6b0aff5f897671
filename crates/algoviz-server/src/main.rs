//! Binary entrypoint for the algoviz HTTP server.
//!
//! Reads configuration from environment variables:
//! - `ALGOVIZ_HOST`: listen address (default: "0.0.0.0")
//! - `ALGOVIZ_PORT`: listen port (default: "3000")
//! - `ALGOVIZ_MAX_ARRAY_LEN`: largest accepted sort input (default: 100)
//! - `ALGOVIZ_MAX_GRID_CELLS`: largest accepted search grid (default: 250000)

use algoviz_server::config::{ServerConfig, SNAPSHOT_VALUE_BUDGET};
use algoviz_server::router::build_router;
use algoviz_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr();

    let app = build_router(AppState::new(config.limits));

    tracing::info!("algoviz server starting on {}", addr);
    tracing::info!(
        "limits: max_array_len={}, max_grid_cells={}",
        config.limits.max_array_len,
        config.limits.max_grid_cells
    );
    let worst_case = config.limits.worst_case_snapshot_values();
    if worst_case > SNAPSHOT_VALUE_BUDGET {
        tracing::warn!(
            worst_case,
            budget = SNAPSHOT_VALUE_BUDGET,
            "max_array_len allows sort traces far larger than the snapshot budget"
        );
    }

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
