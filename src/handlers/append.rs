use crate::api::sheets_api::SheetsApi;
use crate::error::{ApiMessage, RelayError};
use crate::router::RelayState;
use crate::service::row_builder::build_row;
use crate::types::append::AppendRequest;
use axum::{Json, extract::State};
use tracing::info;

/// POST /append-data-to-existing-sheet
///
/// Identity check, then validation, then exactly one upstream append under the
/// requesting user's stored token set. No step past the first failure runs, so
/// validation errors never cost a network call.
pub async fn append_data(
    State(state): State<RelayState>,
    Json(req): Json<AppendRequest>,
) -> Result<Json<ApiMessage>, RelayError> {
    let Some(user_email) = req.user_email.as_deref() else {
        return Err(RelayError::NotAuthenticated("unknown".to_string()));
    };
    let Some(tokens) = state.store.get(user_email).await? else {
        return Err(RelayError::NotAuthenticated(user_email.to_string()));
    };

    let row = build_row(&req.data, &req.additional_fields_order)?;

    SheetsApi::append_row(
        state.client.clone(),
        &tokens.access_token,
        &req.spreadsheet_id,
        &row,
    )
    .await?;

    info!(user = %user_email, spreadsheet = %req.spreadsheet_id, "data appended to the sheet");
    Ok(Json(ApiMessage {
        message: "Data appended successfully to the Google Sheet!".to_string(),
    }))
}
