use crate::db::TokenStorage;
use crate::google_oauth::ClientCredentials;
use crate::handlers::{append, oauth};
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;

/// Shared state handed to every route. Credentials are immutable and the
/// per-user token set is fetched per request, so no route mutates shared
/// credential state.
#[derive(Clone)]
pub struct RelayState {
    pub store: TokenStorage,
    pub client: reqwest::Client,
    pub oauth: Arc<ClientCredentials>,
}

impl RelayState {
    pub fn new(store: TokenStorage, oauth: ClientCredentials) -> Self {
        let client = reqwest::Client::builder()
            .user_agent("sheetrelay/0.1")
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(15))
            .build()
            .expect("FATAL: initialize shared HTTP client failed");
        Self {
            store,
            client,
            oauth: Arc::new(oauth),
        }
    }
}

/// Build the service router: the OAuth flow plus the append route, with
/// any-origin CORS.
pub fn relay_router(state: RelayState) -> Router {
    Router::new()
        .route("/auth", get(oauth::auth_entry))
        .route("/oauth2callback", get(oauth::oauth_callback))
        .route("/append-data-to-existing-sheet", post(append::append_data))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
