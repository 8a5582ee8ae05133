use axum::{Json, http::StatusCode, response::IntoResponse};
use oauth2::basic::BasicErrorResponseType;
use oauth2::reqwest::Error as ReqwestClientError;
use oauth2::{HttpClientError, RequestTokenError, StandardErrorResponse};
use serde::Serialize;
use sqlx::Error as SqlxError;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum RelayError {
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("HTTP request error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] SqlxError),

    #[error("invalid client credentials document: {0}")]
    InvalidClientConfig(String),

    #[error("OAuth2 token request error: {0}")]
    Oauth2Token(String),

    #[error("OAuth2 server error: {error}")]
    Oauth2Server { error: String },

    #[error("OAuth flow error: {0}")]
    OauthFlow(String),

    #[error("no email resolved for the authenticated user")]
    NoEmailResolved,

    #[error("no tokens stored for user {0}")]
    NotAuthenticated(String),

    #[error("{0} is a mandatory field")]
    MissingMandatoryField(String),

    #[error("Upstream error with status: {0}")]
    UpstreamStatus(StatusCode),
}

impl
    From<
        RequestTokenError<
            HttpClientError<ReqwestClientError>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    > for RelayError
{
    fn from(
        e: RequestTokenError<
            HttpClientError<ReqwestClientError>,
            StandardErrorResponse<BasicErrorResponseType>,
        >,
    ) -> Self {
        match e {
            RequestTokenError::ServerResponse(err) => RelayError::Oauth2Server {
                error: err.error().to_string(),
            },
            RequestTokenError::Request(req_e) => {
                RelayError::Oauth2Token(format!("request failed: {}", req_e))
            }
            RequestTokenError::Parse(parse_err, _body) => RelayError::Json(parse_err.into_inner()),
            RequestTokenError::Other(s) => RelayError::Oauth2Token(s),
        }
    }
}

impl IntoResponse for RelayError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            RelayError::NotAuthenticated(user) => (
                StatusCode::BAD_REQUEST,
                format!("No tokens found for user {user}. Please authenticate first."),
            ),
            RelayError::MissingMandatoryField(field) => (
                StatusCode::BAD_REQUEST,
                format!("{field} is a mandatory field."),
            ),
            RelayError::Reqwest(_) | RelayError::UpstreamStatus(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to append data to the Google Sheet.".to_string(),
            ),
            RelayError::Oauth2Token(_)
            | RelayError::Oauth2Server { .. }
            | RelayError::OauthFlow(_)
            | RelayError::NoEmailResolved => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Authentication failed.".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "An internal server error occurred.".to_string(),
            ),
        };
        (status, Json(ApiMessage { message })).into_response()
    }
}

/// Standardized API response body for messages and errors.
#[derive(Serialize)]
pub struct ApiMessage {
    pub message: String,
}
