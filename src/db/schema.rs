//! SQL DDL for initializing the token storage.
//! SQLite-first design; can be adapted for other RDBMS.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT
/// - `email` UNIQUE (one token set per authenticated user)
/// - Remaining columns mirrored from `TokenSet`
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS tokens (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL UNIQUE,
    access_token TEXT NOT NULL,
    refresh_token TEXT NULL,
    expiry TEXT NULL, -- RFC3339
    scope TEXT NULL,
    token_type TEXT NULL,
    id_token TEXT NULL
);
"#;
