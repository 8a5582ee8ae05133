use crate::error::RelayError;
use crate::google_oauth::endpoints::GoogleTokenResponse;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::info;

/// Client credentials document as downloaded from the Google console
/// (`{"web": {"client_id": ..., "client_secret": ..., "redirect_uris": [...]}}`).
#[derive(Debug, Deserialize)]
struct ClientDocument {
    web: WebClient,
}

#[derive(Debug, Deserialize)]
struct WebClient {
    client_id: String,
    client_secret: String,
    redirect_uris: Vec<String>,
}

/// Immutable OAuth client identity, loaded once at startup.
#[derive(Debug, Clone)]
pub struct ClientCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl ClientCredentials {
    /// Read and parse the credentials document. The first redirect URI wins.
    /// This is the only startup-fatal input.
    pub fn load(path: &Path) -> Result<Self, RelayError> {
        let contents = fs::read_to_string(path)?;
        let doc: ClientDocument = serde_json::from_str(&contents)?;
        let redirect_uri = doc.web.redirect_uris.into_iter().next().ok_or_else(|| {
            RelayError::InvalidClientConfig("credentials document has no redirect_uris".to_string())
        })?;
        info!(path = %path.display(), "client credentials loaded");
        Ok(Self {
            client_id: doc.web.client_id,
            client_secret: doc.web.client_secret,
            redirect_uri,
        })
    }
}

/// Token set issued by Google's token endpoint. Opaque to the relay: stored on
/// successful authorization, replayed on append calls, never refreshed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenSet {
    pub access_token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiry: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_token: Option<String>,
}

impl TokenSet {
    /// Convert a token endpoint response, turning the relative `expires_in`
    /// into an absolute expiry timestamp.
    pub fn from_response(resp: &GoogleTokenResponse) -> Result<Self, RelayError> {
        let mut payload = serde_json::to_value(resp)?;
        if let Some(obj) = payload.as_object_mut()
            && let Some(secs) = obj.get("expires_in").and_then(Value::as_i64)
        {
            let expiry = Utc::now() + Duration::seconds(secs);
            obj.insert("expiry".to_string(), Value::String(expiry.to_rfc3339()));
        }
        Ok(serde_json::from_value(payload)?)
    }
}
