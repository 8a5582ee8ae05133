use figment::{Figment, providers::Env};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::LazyLock;
use url::Url;

pub static GOOGLE_AUTH_URL: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://accounts.google.com/o/oauth2/v2/auth").expect("static URL")
});

pub static GOOGLE_TOKEN_URI: LazyLock<Url> =
    LazyLock::new(|| Url::parse("https://oauth2.googleapis.com/token").expect("static URL"));

pub static GOOGLE_USERINFO_URI: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://www.googleapis.com/oauth2/v2/userinfo").expect("static URL")
});

/// Base for the Sheets values API; spreadsheet id and range are appended per call.
pub static SHEETS_API_BASE: LazyLock<Url> = LazyLock::new(|| {
    Url::parse("https://sheets.googleapis.com/v4/spreadsheets/").expect("static URL")
});

pub const SCOPE_SPREADSHEETS: &str = "https://www.googleapis.com/auth/spreadsheets";
pub const SCOPE_DRIVE: &str = "https://www.googleapis.com/auth/drive";

/// Rows land under the header row of the first tab; headers are never written.
pub const APPEND_RANGE: &str = "Sheet1!A2";

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Google client credentials document (`{"web": {...}}`); startup-fatal if unreadable.
    pub credentials_path: PathBuf,
    pub database_url: String,
    /// Original-format `tokens.json` to import on startup; absence is normal.
    pub token_import_path: PathBuf,
    pub listen_addr: String,
    pub loglevel: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials_path: PathBuf::from("credentials.json"),
            database_url: "sqlite:tokens.sqlite".to_string(),
            token_import_path: PathBuf::from("tokens.json"),
            listen_addr: "0.0.0.0:3000".to_string(),
            loglevel: "info".to_string(),
        }
    }
}

pub static CONFIG: LazyLock<Config> = LazyLock::new(|| {
    Figment::new()
        .merge(Env::prefixed("RELAY_"))
        .extract()
        .expect("FATAL: invalid RELAY_* environment configuration")
});
