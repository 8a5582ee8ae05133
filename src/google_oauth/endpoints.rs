use crate::config::{
    GOOGLE_AUTH_URL, GOOGLE_TOKEN_URI, GOOGLE_USERINFO_URI, SCOPE_DRIVE, SCOPE_SPREADSHEETS,
};
use crate::error::RelayError;
use crate::google_oauth::credentials::ClientCredentials;

use oauth2::{
    AuthUrl, AuthorizationCode, Client as OAuth2Client, ClientId, ClientSecret, CsrfToken,
    EndpointNotSet, EndpointSet, ExtraTokenFields, RedirectUrl, Scope, StandardRevocableToken,
    StandardTokenResponse, TokenUrl,
    basic::{
        BasicErrorResponse, BasicRevocationErrorResponse, BasicTokenIntrospectionResponse,
        BasicTokenType,
    },
};
use serde::{Deserialize, Serialize};
use tracing::info;
use url::Url;

/// Stateless Google OAuth endpoints.
pub struct GoogleOauthEndpoints;

impl GoogleOauthEndpoints {
    /// Build the consent URL: offline access plus the Sheets and Drive scopes.
    /// Pure function of the static client credentials.
    pub fn build_authorize_url(creds: &ClientCredentials) -> Result<Url, RelayError> {
        let client = build_oauth2_client(creds)?;
        let (auth_url, _csrf_token) = client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new(SCOPE_SPREADSHEETS.to_string()))
            .add_scope(Scope::new(SCOPE_DRIVE.to_string()))
            .add_extra_param("access_type", "offline")
            .url();
        Ok(auth_url)
    }

    /// Exchange an authorization code for a token set via the token endpoint.
    pub async fn exchange_authorization_code(
        creds: &ClientCredentials,
        code: AuthorizationCode,
        http_client: reqwest::Client,
    ) -> Result<GoogleTokenResponse, RelayError> {
        let client = build_oauth2_client(creds)?;
        let token_result: GoogleTokenResponse = client
            .exchange_code(code)
            .request_async(&http_client)
            .await?;
        info!("Authorization code exchanged successfully");
        Ok(token_result)
    }

    /// Resolve the authenticated user's email from the userinfo endpoint.
    pub async fn fetch_userinfo_email(
        access_token: &str,
        http_client: reqwest::Client,
    ) -> Result<Option<String>, RelayError> {
        let resp = http_client
            .get(GOOGLE_USERINFO_URI.as_str())
            .bearer_auth(access_token)
            .header("Accept", "application/json")
            .send()
            .await?
            .error_for_status()?;
        let info: UserInfo = resp.json().await?;
        Ok(info.email)
    }
}

/// Build the Google OAuth2 client from the static client credentials.
fn build_oauth2_client(creds: &ClientCredentials) -> Result<GoogleOauth2Client, RelayError> {
    let client = OAuth2Client::new(ClientId::new(creds.client_id.clone()))
        .set_client_secret(ClientSecret::new(creds.client_secret.clone()))
        .set_auth_uri(AuthUrl::new(GOOGLE_AUTH_URL.as_str().to_string())?)
        .set_token_uri(TokenUrl::new(GOOGLE_TOKEN_URI.as_str().to_string())?)
        .set_redirect_uri(RedirectUrl::new(creds.redirect_uri.clone())?);
    Ok(client)
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GoogleTokenField {
    #[serde(rename = "id_token")]
    pub id_token: Option<String>,
}
impl ExtraTokenFields for GoogleTokenField {}

pub type GoogleTokenResponse = StandardTokenResponse<GoogleTokenField, BasicTokenType>;

pub type GoogleOauth2Client = OAuth2Client<
    BasicErrorResponse,
    GoogleTokenResponse,
    BasicTokenIntrospectionResponse,
    StandardRevocableToken,
    BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;
