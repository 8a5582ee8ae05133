use crate::error::RelayError;
use crate::google_oauth::credentials::TokenSet;
use crate::google_oauth::endpoints::GoogleOauthEndpoints;
use crate::google_oauth::utils::email_from_id_token;
use crate::router::RelayState;
use axum::extract::{Query, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use oauth2::AuthorizationCode;
use serde::Deserialize;
use tracing::{error, info, warn};

#[derive(Debug, Deserialize)]
pub struct AuthCallbackQuery {
    pub code: Option<String>,
}

/// GET /auth -> 302 to Google's OAuth2 consent page.
pub async fn auth_entry(State(state): State<RelayState>) -> Result<impl IntoResponse, RelayError> {
    let auth_url = GoogleOauthEndpoints::build_authorize_url(&state.oauth)?;
    info!("Dispatching OAuth redirect");
    Ok((
        StatusCode::FOUND,
        [(header::LOCATION, auth_url.to_string())],
    ))
}

/// GET /oauth2callback -> exchanges the auth code for tokens, resolves the
/// authenticated identity, and stores the token set under that email.
pub async fn oauth_callback(
    State(state): State<RelayState>,
    Query(query): Query<AuthCallbackQuery>,
) -> Response {
    match complete_authorization(&state, query.code).await {
        Ok(email) => {
            info!(user = %email, "tokens stored for user");
            "Authentication successful! You can now append data to your Google Sheets."
                .into_response()
        }
        Err(err) => {
            error!(error = %err, "error retrieving access token");
            (StatusCode::INTERNAL_SERVER_ERROR, "Authentication failed.").into_response()
        }
    }
}

/// Complete the authorization-code flow. Nothing is persisted unless both the
/// exchange and the identity resolution succeed.
async fn complete_authorization(
    state: &RelayState,
    code: Option<String>,
) -> Result<String, RelayError> {
    let code = code.ok_or_else(|| RelayError::OauthFlow("missing `code` in callback".to_string()))?;

    let token_response = GoogleOauthEndpoints::exchange_authorization_code(
        &state.oauth,
        AuthorizationCode::new(code),
        state.client.clone(),
    )
    .await?;
    let tokens = TokenSet::from_response(&token_response)?;

    let claim_email = || tokens.id_token.as_deref().and_then(email_from_id_token);
    let email =
        match GoogleOauthEndpoints::fetch_userinfo_email(&tokens.access_token, state.client.clone())
            .await
        {
            Ok(Some(email)) => Some(email),
            Ok(None) => claim_email(),
            Err(err) => {
                warn!(error = %err, "userinfo lookup failed; falling back to id_token claim");
                claim_email()
            }
        }
        .ok_or(RelayError::NoEmailResolved)?;

    state.store.put(&email, &tokens).await?;
    Ok(email)
}
