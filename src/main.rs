use sport_stats::{models::AppData, resolve_store_path, router, sync, AppState, Store};
use std::{env, net::SocketAddr};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let store_path = resolve_store_path()?;
    let store = match Store::open(store_path).await {
        Ok(store) => Some(store),
        Err(err) => {
            // Degraded mode: the dashboard stays usable, edits just do not
            // survive a restart.
            error!("persistence disabled: {err}");
            None
        }
    };

    let data = match &store {
        Some(store) => sync::load_from_storage(store).await,
        None => AppData::default(),
    };

    let state = AppState::new(store, data);
    let app = router(state);

    let port = env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
