use crate::db::models::DbTokenRow;
use crate::db::schema::SQLITE_INIT;
use crate::error::RelayError;
use crate::google_oauth::credentials::TokenSet;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};
use std::str::FromStr;
use tracing::info;

pub type SqlitePool = Pool<Sqlite>;

/// Durable mapping from user email to stored token set.
///
/// Writes go through single-statement upserts, so the in-memory view handed to
/// callers never diverges from the durable copy and concurrent authorization
/// completions cannot lose each other's updates.
#[derive(Clone)]
pub struct TokenStorage {
    pool: SqlitePool,
}

impl TokenStorage {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn connect(database_url: &str) -> Result<Self, RelayError> {
        let connect_opts = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(connect_opts).await?;
        Ok(Self::new(pool))
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Initialize the schema by executing the bundled DDL. Cold start with no
    /// prior rows is a normal condition.
    pub async fn init_schema(&self) -> Result<(), RelayError> {
        // execute multiple statements safely (SQLite supports multi-commands but sqlx::query doesn't)
        for stmt in SQLITE_INIT.split(';') {
            let s = stmt.trim();
            if s.is_empty() {
                continue;
            }
            sqlx::query(s).execute(&self.pool).await?;
        }
        info!("token storage schema initialized");
        Ok(())
    }

    /// Fetch the token set stored for the given email, if any.
    pub async fn get(&self, email: &str) -> Result<Option<TokenSet>, RelayError> {
        let row = sqlx::query(
            r#"SELECT id, email, access_token, refresh_token, expiry, scope, token_type, id_token
               FROM tokens WHERE email = ?"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| Self::row_to_model(r).map(TokenSet::from))
            .transpose()
    }

    /// Insert or overwrite the token set for the given email. The upsert is a
    /// single statement; a failure leaves the previous entry intact.
    pub async fn put(&self, email: &str, tokens: &TokenSet) -> Result<(), RelayError> {
        let expiry = tokens.expiry.map(|e| e.to_rfc3339());
        sqlx::query(
            r#"
            INSERT INTO tokens (
                email, access_token, refresh_token, expiry, scope, token_type, id_token
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(email) DO UPDATE SET
                access_token=excluded.access_token,
                refresh_token=excluded.refresh_token,
                expiry=excluded.expiry,
                scope=excluded.scope,
                token_type=excluded.token_type,
                id_token=excluded.id_token
            "#,
        )
        .bind(email)
        .bind(&tokens.access_token)
        .bind(&tokens.refresh_token)
        .bind(expiry)
        .bind(&tokens.scope)
        .bind(&tokens.token_type)
        .bind(&tokens.id_token)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Number of stored token sets; used for the startup log line.
    pub async fn count(&self) -> Result<i64, RelayError> {
        let rec: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tokens")
            .fetch_one(&self.pool)
            .await?;
        Ok(rec.0)
    }

    fn row_to_model(row: SqliteRow) -> Result<DbTokenRow, RelayError> {
        let id: i64 = row.try_get("id")?;
        let email: String = row.try_get("email")?;
        let access_token: String = row.try_get("access_token")?;
        let refresh_token: Option<String> = row.try_get("refresh_token")?;
        let expiry_str: Option<String> = row.try_get("expiry")?;
        let scope: Option<String> = row.try_get("scope")?;
        let token_type: Option<String> = row.try_get("token_type")?;
        let id_token: Option<String> = row.try_get("id_token")?;

        let expiry: Option<DateTime<Utc>> = expiry_str
            .map(|s| {
                chrono::DateTime::parse_from_rfc3339(&s)
                    .map(|dt| dt.with_timezone(&Utc))
                    .map_err(|e| sqlx::Error::Decode(Box::new(e)))
            })
            .transpose()?;

        Ok(DbTokenRow {
            id,
            email,
            access_token,
            refresh_token,
            expiry,
            scope,
            token_type,
            id_token,
        })
    }
}
