use mimalloc::MiMalloc;
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    let cfg = &sheetrelay::config::CONFIG;

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cfg.loglevel.clone()));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_level(true)
                .with_target(false),
        )
        .init();

    info!(
        credentials_path = %cfg.credentials_path.display(),
        database_url = %cfg.database_url,
        listen_addr = %cfg.listen_addr,
        loglevel = %cfg.loglevel
    );

    // The client credentials document is the only startup-fatal input.
    let oauth = sheetrelay::google_oauth::ClientCredentials::load(&cfg.credentials_path)?;

    let store = sheetrelay::db::TokenStorage::connect(&cfg.database_url).await?;
    store.init_schema().await?;
    match store.count().await? {
        0 => info!("no stored token sets; waiting for first authorization"),
        n => info!(count = n, "token store loaded"),
    }

    match sheetrelay::service::token_import::load_from_file(&cfg.token_import_path) {
        Ok(entries) if !entries.is_empty() => {
            info!(
                path = %cfg.token_import_path.display(),
                count = entries.len(),
                "importing legacy token sets"
            );
            for (email, tokens) in &entries {
                if let Err(e) = store.put(email, tokens).await {
                    warn!(user = %email, error = %e, "failed to import legacy token set");
                }
            }
        }
        Ok(_) => {}
        Err(e) => {
            warn!(
                path = %cfg.token_import_path.display(),
                error = %e,
                "failed to read legacy token file"
            );
        }
    }

    let state = sheetrelay::router::RelayState::new(store, oauth);
    let app = sheetrelay::router::relay_router(state);

    let listener = TcpListener::bind(cfg.listen_addr.as_str()).await?;
    info!("HTTP server listening on {}", cfg.listen_addr);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
    info!("shutdown signal received");
}
