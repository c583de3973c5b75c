//! gatekeep gateway demo server.
//!
//! - Loads `gatekeep.yaml` (or the path given as first argument)
//! - Builds the Casbin enforcer from the configured model/policy files
//! - Serves demo routes behind the authz layer, `/healthz` and `/metrics` outside it

use tracing_subscriber::{fmt, EnvFilter};

use gatekeep_gateway::{app_state, config, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "gatekeep.yaml".into());
    let cfg = config::load_from_file(&path)?;

    let state = app_state::AppState::new(cfg).await?;
    let listen = state.cfg().gateway.listen_addr()?;
    let app = router::build_router(state);

    tracing::info!(%listen, "gatekeep-gateway starting");
    let listener = tokio::net::TcpListener::bind(listen).await?;

    axum::serve(listener, app).await?;
    Ok(())
}
