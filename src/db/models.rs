use crate::google_oauth::credentials::TokenSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DbTokenRow {
    pub id: i64,
    pub email: String,
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expiry: Option<DateTime<Utc>>,
    pub scope: Option<String>,
    pub token_type: Option<String>,
    pub id_token: Option<String>,
}

impl From<DbTokenRow> for TokenSet {
    fn from(row: DbTokenRow) -> Self {
        TokenSet {
            access_token: row.access_token,
            refresh_token: row.refresh_token,
            expiry: row.expiry,
            scope: row.scope,
            token_type: row.token_type,
            id_token: row.id_token,
        }
    }
}
