use crate::config::{APPEND_RANGE, SHEETS_API_BASE};
use crate::error::RelayError;
use serde_json::{Value, json};
use tracing::error;

pub struct SheetsApi;

impl SheetsApi {
    /// Append a single row under the header row of the first sheet tab.
    /// RAW input semantics; the supplied token scopes the call. Not idempotent,
    /// so the call is never retried here.
    pub async fn append_row(
        client: reqwest::Client,
        token: impl AsRef<str>,
        spreadsheet_id: &str,
        row: &[Value],
    ) -> Result<(), RelayError> {
        let url =
            SHEETS_API_BASE.join(&format!("{spreadsheet_id}/values/{APPEND_RANGE}:append"))?;

        let resp = client
            .post(url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(token.as_ref())
            .json(&json!({ "values": [row] }))
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            error!("Sheets append failed with status {}", status);
            return Err(RelayError::UpstreamStatus(status));
        }
        Ok(())
    }
}
