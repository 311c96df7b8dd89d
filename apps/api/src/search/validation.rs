//! Request validation for `POST /api/search`.
//!
//! Works on the raw JSON value so that every offending field is reported,
//! instead of stopping at the first serde error.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::SearchQueryInput;

pub const PROMPT_REQUIRED_MESSAGE: &str = "Please describe your project or requirements";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

/// One field-level problem, e.g. `{"path": ["skills", 1], "code": "invalid_type", ...}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub path: Vec<PathSegment>,
    pub code: String,
    pub message: String,
}

impl FieldError {
    fn invalid_type(path: Vec<PathSegment>, expected: &str, received: &Value) -> Self {
        FieldError {
            path,
            code: "invalid_type".to_string(),
            message: format!("Expected {expected}, received {}", type_name(received)),
        }
    }

    fn required(field: &str) -> Self {
        FieldError {
            path: vec![field.into()],
            code: "invalid_type".to_string(),
            message: "Required".to_string(),
        }
    }

    /// A body that could not be parsed as JSON at all.
    pub fn malformed_body(detail: impl Into<String>) -> Self {
        FieldError {
            path: vec![],
            code: "invalid_json".to_string(),
            message: detail.into(),
        }
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Validates a search request body. Unknown fields are ignored; `null` is
/// accepted for every optional field.
pub fn validate_search_query(body: &Value) -> Result<SearchQueryInput, Vec<FieldError>> {
    let Some(obj) = body.as_object() else {
        return Err(vec![FieldError::invalid_type(vec![], "object", body)]);
    };

    let mut errors = Vec::new();

    let prompt = match obj.get("prompt") {
        None => {
            errors.push(FieldError::required("prompt"));
            String::new()
        }
        Some(Value::String(p)) if p.is_empty() => {
            errors.push(FieldError {
                path: vec!["prompt".into()],
                code: "too_small".to_string(),
                message: PROMPT_REQUIRED_MESSAGE.to_string(),
            });
            String::new()
        }
        Some(Value::String(p)) => p.clone(),
        Some(other) => {
            errors.push(FieldError::invalid_type(vec!["prompt".into()], "string", other));
            String::new()
        }
    };

    let skills = optional_string_array(obj, "skills", &mut errors);
    let location = optional_string(obj, "location", &mut errors);
    let experience = optional_string(obj, "experience", &mut errors);
    let project_date = optional_string(obj, "projectDate", &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(SearchQueryInput {
        prompt,
        skills,
        location,
        experience,
        project_date,
    })
}

fn optional_string(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<String> {
    match obj.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s.clone()),
        Some(other) => {
            errors.push(FieldError::invalid_type(vec![field.into()], "string", other));
            None
        }
    }
}

fn optional_string_array(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
) -> Option<Vec<String>> {
    match obj.get(field) {
        None | Some(Value::Null) => None,
        Some(Value::Array(items)) => {
            let mut out = Vec::with_capacity(items.len());
            for (i, item) in items.iter().enumerate() {
                match item {
                    Value::String(s) => out.push(s.clone()),
                    other => errors.push(FieldError::invalid_type(
                        vec![field.into(), PathSegment::Index(i)],
                        "string",
                        other,
                    )),
                }
            }
            Some(out)
        }
        Some(other) => {
            errors.push(FieldError::invalid_type(vec![field.into()], "array", other));
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_full_query() {
        let body = json!({
            "prompt": "Need a fintech dashboard",
            "skills": ["React", "Python"],
            "location": "US",
            "experience": "mid",
            "projectDate": "2024-01"
        });
        let q = validate_search_query(&body).unwrap();
        assert_eq!(q.prompt, "Need a fintech dashboard");
        assert_eq!(q.skill_filter(), ["React", "Python"]);
        assert_eq!(q.project_date.as_deref(), Some("2024-01"));
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let body = json!({
            "prompt": "x",
            "filters": {"category": ["fintech"], "technical": ["react"], "location": null}
        });
        assert!(validate_search_query(&body).is_ok());
    }

    #[test]
    fn test_nulls_accepted_for_optionals() {
        let body = json!({"prompt": "x", "skills": null, "location": null});
        let q = validate_search_query(&body).unwrap();
        assert!(q.skills.is_none());
        assert!(q.location.is_none());
    }

    #[test]
    fn test_empty_prompt_rejected() {
        let errs = validate_search_query(&json!({"prompt": ""})).unwrap_err();
        assert_eq!(errs.len(), 1);
        assert_eq!(errs[0].path, vec![PathSegment::from("prompt")]);
        assert_eq!(errs[0].message, PROMPT_REQUIRED_MESSAGE);
    }

    #[test]
    fn test_whitespace_prompt_accepted_verbatim() {
        let input = validate_search_query(&json!({"prompt": "   "})).unwrap();
        assert_eq!(input.prompt, "   ");
    }

    #[test]
    fn test_missing_prompt_rejected() {
        let errs = validate_search_query(&json!({})).unwrap_err();
        assert_eq!(errs[0].message, "Required");
    }

    #[test]
    fn test_all_errors_collected() {
        let body = json!({"prompt": 5, "skills": ["ok", 3], "location": true});
        let errs = validate_search_query(&body).unwrap_err();
        assert_eq!(errs.len(), 3);
        assert_eq!(
            errs[1].path,
            vec![PathSegment::from("skills"), PathSegment::Index(1)]
        );
        assert_eq!(errs[2].message, "Expected string, received boolean");
    }

    #[test]
    fn test_non_object_body_rejected() {
        let errs = validate_search_query(&json!([1, 2])).unwrap_err();
        assert!(errs[0].path.is_empty());
        assert_eq!(errs[0].message, "Expected object, received array");
    }

    #[test]
    fn test_path_serializes_mixed() {
        let err = FieldError::invalid_type(
            vec!["skills".into(), PathSegment::Index(0)],
            "string",
            &json!(1),
        );
        let v = serde_json::to_value(&err).unwrap();
        assert_eq!(v["path"], json!(["skills", 0]));
    }
}
