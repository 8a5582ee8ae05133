use crate::error::RelayError;
use serde_json::{Map, Value};

pub const MANDATORY_FIELDS: [&str; 3] = ["name", "email", "phone"];
pub const ADDITIONAL_FIELD_PREFIX: &str = "additional_col";

/// Build the row to append: the three mandatory fields in fixed order, then
/// the caller's additional columns in the order given. First missing mandatory
/// field wins; additional entries that don't match the prefix or have no
/// defined value are silently skipped.
pub fn build_row(
    data: &Map<String, Value>,
    additional_order: &[String],
) -> Result<Vec<Value>, RelayError> {
    let mut row = Vec::with_capacity(MANDATORY_FIELDS.len() + additional_order.len());

    for field in MANDATORY_FIELDS {
        match data.get(field) {
            Some(value) if !value.is_null() => row.push(value.clone()),
            _ => return Err(RelayError::MissingMandatoryField(field.to_string())),
        }
    }

    for field in additional_order {
        if !field.starts_with(ADDITIONAL_FIELD_PREFIX) {
            continue;
        }
        if let Some(value) = data.get(field)
            && !value.is_null()
        {
            row.push(value.clone());
        }
    }

    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn data(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    fn order(fields: &[&str]) -> Vec<String> {
        fields.iter().map(|f| f.to_string()).collect()
    }

    #[test]
    fn mandatory_fields_lead_in_fixed_order() {
        let data = data(json!({
            "phone": "123", "email": "a@x.com", "name": "A", "additional_col1": "x"
        }));
        let row = build_row(&data, &order(&["additional_col1"])).unwrap();
        assert_eq!(row, vec![json!("A"), json!("a@x.com"), json!("123"), json!("x")]);
    }

    #[test]
    fn undefined_additional_column_is_skipped() {
        let data = data(json!({
            "name": "A", "email": "a@x.com", "phone": "123", "additional_col1": "x"
        }));
        let row = build_row(&data, &order(&["additional_col2"])).unwrap();
        assert_eq!(row, vec![json!("A"), json!("a@x.com"), json!("123")]);
    }

    #[test]
    fn additional_columns_follow_caller_order() {
        let data = data(json!({
            "name": "A", "email": "a@x.com", "phone": "123",
            "additional_col1": "one", "additional_col2": "two", "other_field": "no"
        }));
        let row = build_row(
            &data,
            &order(&["additional_col2", "other_field", "additional_col1"]),
        )
        .unwrap();
        assert_eq!(
            row,
            vec![
                json!("A"),
                json!("a@x.com"),
                json!("123"),
                json!("two"),
                json!("one")
            ]
        );
    }

    #[test]
    fn non_prefixed_names_never_appear() {
        let data = data(json!({
            "name": "A", "email": "a@x.com", "phone": "123", "extra": "no"
        }));
        let row = build_row(&data, &order(&["extra"])).unwrap();
        assert_eq!(row.len(), 3);
    }

    fn expect_missing(data: &Map<String, Value>, expected: &str) {
        match build_row(data, &[]) {
            Err(RelayError::MissingMandatoryField(field)) => assert_eq!(field, expected),
            other => panic!("expected missing-field error, got {other:?}"),
        }
    }

    #[test]
    fn first_missing_mandatory_field_wins() {
        expect_missing(&data(json!({"email": "a@x.com", "phone": "123"})), "name");
        // name present but email and phone both missing: email is reported first
        expect_missing(&data(json!({"name": "A"})), "email");
    }

    #[test]
    fn null_counts_as_undefined() {
        let with_null_col = data(json!({
            "name": "A", "email": "a@x.com", "phone": "123", "additional_col1": null
        }));
        let row = build_row(&with_null_col, &order(&["additional_col1"])).unwrap();
        assert_eq!(row.len(), 3);

        expect_missing(
            &data(json!({"name": "A", "email": "a@x.com", "phone": null})),
            "phone",
        );
    }

    #[test]
    fn non_string_scalars_pass_through() {
        let data = data(json!({
            "name": "A", "email": "a@x.com", "phone": 123, "additional_col1": true
        }));
        let row = build_row(&data, &order(&["additional_col1"])).unwrap();
        assert_eq!(row, vec![json!("A"), json!("a@x.com"), json!(123), json!(true)]);
    }
}
