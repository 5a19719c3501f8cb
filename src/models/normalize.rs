// ============================================================================
// NORMALIZATION - Identifier coercion and lenient scalar decoding
// ============================================================================
// The backend seeds its tables from CSV, so the same column can come back as
// a JSON number on one row and a string on the next. Joins and filters in the
// client compare identifiers as strings only.
// ============================================================================

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a JSON scalar the way the browser's `String(value)` would
pub fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(i.to_string())
            } else if let Some(u) = n.as_u64() {
                Some(u.to_string())
            } else {
                n.as_f64().map(|f| {
                    if f.is_finite() && f.fract() == 0.0 && f.abs() < 1e15 {
                        format!("{}", f as i64)
                    } else {
                        f.to_string()
                    }
                })
            }
        }
        other => Some(other.to_string()),
    }
}

/// Coerce the given identifier fields of every row to strings in place.
/// Missing and null fields are left untouched.
pub fn normalize_ids(rows: &mut [Value], id_fields: &[&str]) {
    for row in rows.iter_mut() {
        let Some(object) = row.as_object_mut() else {
            continue;
        };
        for field in id_fields {
            if let Some(value) = object.get_mut(*field) {
                if value.is_string() || value.is_null() {
                    continue;
                }
                if let Some(text) = scalar_to_string(value) {
                    *value = Value::String(text);
                }
            }
        }
    }
}

/// serde helper: any scalar (or null) into a plain String, null becomes ""
pub fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string).unwrap_or_default())
}

/// serde helper: any scalar into Some(String), null into None
pub fn optional_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(scalar_to_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn numeric_and_string_ids_both_end_up_as_strings() {
        let mut rows = vec![
            json!({"student_id": 7, "name": "Kim"}),
            json!({"student_id": "8", "name": "Lee"}),
            json!({"student_id": 9.0, "name": "Park"}),
        ];
        normalize_ids(&mut rows, &["student_id"]);

        let ids: Vec<&str> = rows.iter().map(|r| r["student_id"].as_str().unwrap()).collect();
        assert_eq!(ids, vec!["7", "8", "9"]);
        assert!(rows.iter().all(|r| r["student_id"].is_string()));
    }

    #[test]
    fn only_named_fields_are_touched() {
        let mut rows = vec![json!({"section_id": 2, "student_id": 3, "count": 4})];
        normalize_ids(&mut rows, &["section_id", "student_id"]);
        assert_eq!(rows[0]["section_id"], json!("2"));
        assert_eq!(rows[0]["student_id"], json!("3"));
        assert_eq!(rows[0]["count"], json!(4));
    }

    #[test]
    fn null_and_missing_ids_stay_as_they_are() {
        let mut rows = vec![json!({"attendance_id": null}), json!("not an object")];
        normalize_ids(&mut rows, &["attendance_id", "save_version"]);
        assert_eq!(rows[0]["attendance_id"], Value::Null);
        assert!(rows[0].get("save_version").is_none());
        assert_eq!(rows[1], json!("not an object"));
    }

    #[test]
    fn scalars_render_like_the_browser() {
        assert_eq!(scalar_to_string(&json!(1.5)), Some("1.5".to_string()));
        assert_eq!(scalar_to_string(&json!(true)), Some("true".to_string()));
        assert_eq!(scalar_to_string(&json!(null)), None);
        assert_eq!(scalar_to_string(&json!("01012345678")), Some("01012345678".to_string()));
    }
}
