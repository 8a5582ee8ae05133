use serde::Deserialize;
use serde_json::{Map, Value};

/// Inbound payload for the append route. Field names mirror the public API;
/// the whole value lives for one request only.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppendRequest {
    pub spreadsheet_id: String,
    pub data: Map<String, Value>,
    #[serde(default)]
    pub additional_fields_order: Vec<String>,
    #[serde(default)]
    pub user_email: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_camel_case_payload() {
        let req: AppendRequest = serde_json::from_str(
            r#"{
                "spreadsheetId": "sheet-1",
                "data": {"name": "A"},
                "additionalFieldsOrder": ["additional_col1"],
                "userEmail": "a@x.com"
            }"#,
        )
        .unwrap();
        assert_eq!(req.spreadsheet_id, "sheet-1");
        assert_eq!(req.additional_fields_order, vec!["additional_col1"]);
        assert_eq!(req.user_email.as_deref(), Some("a@x.com"));
    }

    #[test]
    fn order_and_email_are_optional() {
        let req: AppendRequest =
            serde_json::from_str(r#"{"spreadsheetId": "sheet-1", "data": {}}"#).unwrap();
        assert!(req.additional_fields_order.is_empty());
        assert!(req.user_email.is_none());
    }
}
