use base64::Engine;
use serde_json::Value;

/// Pull the `email` claim out of an OIDC id_token without verifying the
/// signature. Fallback identity source only: the token arrived straight from
/// Google's token endpoint over TLS.
pub fn email_from_id_token(id_token: &str) -> Option<String> {
    let payload_b64 = id_token.split('.').nth(1)?;
    let decoded = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload_b64)
        .ok()?;
    let payload: Value = serde_json::from_slice(&decoded).ok()?;
    payload
        .get("email")
        .and_then(|e| e.as_str())
        .map(str::to_owned)
}
