use crate::error::RelayError;
use crate::google_oauth::credentials::TokenSet;
use serde_json::Value;
use std::{fs, path::Path};
use tracing::{info, warn};

/// Load an original-format `tokens.json` (`{email: token set, ...}`) so token
/// sets issued by an earlier deployment survive the move to the database.
/// A missing file is a normal cold start; malformed entries are skipped.
pub fn load_from_file(path: &Path) -> Result<Vec<(String, TokenSet)>, RelayError> {
    if !path.exists() {
        info!(path = %path.display(), "legacy token file not found; skipping import");
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(path)?;
    let document: Value = serde_json::from_str(&contents)?;
    let Some(entries) = document.as_object() else {
        warn!(path = %path.display(), "legacy token file is not an object; skipping import");
        return Ok(Vec::new());
    };

    let loaded: Vec<(String, TokenSet)> = entries
        .iter()
        .filter_map(|(email, payload)| {
            match serde_json::from_value::<TokenSet>(payload.clone()) {
                Ok(tokens) => Some((email.clone(), tokens)),
                Err(e) => {
                    warn!(user = %email, error = %e, "skipping malformed legacy token entry");
                    None
                }
            }
        })
        .collect();

    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::atomic::{AtomicU64, Ordering};

    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

    fn temp_file(contents: &str) -> std::path::PathBuf {
        let counter = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        let mut path = env::temp_dir();
        path.push(format!(
            "sheetrelay-test-tokens-{}-{}.json",
            std::process::id(),
            counter
        ));
        fs::write(&path, contents).expect("failed to write temp token file");
        path
    }

    #[test]
    fn imports_entries_keyed_by_email() {
        let path = temp_file(
            r#"{
                "a@x.com": {"access_token": "at-a", "refresh_token": "rt-a"},
                "b@x.com": {"access_token": "at-b"}
            }"#,
        );
        let mut loaded = load_from_file(&path).unwrap();
        loaded.sort_by(|(a, _), (b, _)| a.cmp(b));
        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].0, "a@x.com");
        assert_eq!(loaded[0].1.access_token, "at-a");
        assert_eq!(loaded[1].1.refresh_token, None);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn malformed_entries_are_skipped() {
        let path = temp_file(
            r#"{
                "good@x.com": {"access_token": "at"},
                "bad@x.com": {"refresh_token": "rt-only"}
            }"#,
        );
        let loaded = load_from_file(&path).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].0, "good@x.com");
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn missing_file_is_empty() {
        let mut path = env::temp_dir();
        path.push("sheetrelay-test-tokens-does-not-exist.json");
        assert!(load_from_file(&path).unwrap().is_empty());
    }
}
