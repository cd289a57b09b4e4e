use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use thiserror::Error;

/// Raised when a form payload cannot be bound into a string parameter value
#[derive(Debug, Error)]
#[error("cannot bind payload into a string parameter value: {source}")]
pub struct BindError {
    #[from]
    source: serde_json::Error,
}

/// Concrete name/value pair handed to a build run. Produced on demand from a
/// definition, never stored; `value` is absent when a definition carries no
/// default and no input was submitted.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ParamValue {
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ParamValue {
    pub fn new(name: impl Into<String>, value: Option<String>, description: Option<String>) -> Self {
        Self {
            name: name.into(),
            value,
            description,
        }
    }

    /// Bind a submitted form payload, `{"name": ..., "value": ...}`, into a value
    pub fn bind_json(payload: &JsonValue) -> Result<ParamValue, BindError> {
        let value: ParamValue = serde_json::from_value(payload.clone())?;
        Ok(value)
    }

    /// Strip surrounding whitespace in place; a missing value becomes empty
    pub fn do_trim(&mut self) {
        let v = self.value.take().unwrap_or_default();
        self.value = Some(v.trim().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn trim_strips_surrounding_whitespace() {
        let mut value = ParamValue::new("BRANCH", Some("  main  ".to_string()), None);
        value.do_trim();
        assert_eq!(value.value.as_deref(), Some("main"));
    }

    #[test]
    fn trim_turns_missing_value_into_empty() {
        let mut value = ParamValue::new("BRANCH", None, None);
        value.do_trim();
        assert_eq!(value.value.as_deref(), Some(""));
    }

    #[test]
    fn bind_json_maps_name_and_value() -> Result<(), BindError> {
        let payload = json!({"name": "TAG", "value": "v2"});
        let value = ParamValue::bind_json(&payload)?;
        assert_eq!(value.name, "TAG");
        assert_eq!(value.value.as_deref(), Some("v2"));
        assert_eq!(value.description, None);
        Ok(())
    }

    #[test]
    fn bind_json_tolerates_missing_value() -> Result<(), BindError> {
        let payload = json!({"name": "TAG"});
        let value = ParamValue::bind_json(&payload)?;
        assert_eq!(value.value, None);
        Ok(())
    }

    #[test]
    fn bind_json_rejects_wrong_shape() {
        assert!(ParamValue::bind_json(&json!("just a string")).is_err());
        assert!(ParamValue::bind_json(&json!({"value": "no name"})).is_err());
        assert!(ParamValue::bind_json(&json!({"name": "N", "value": 42})).is_err());
    }
}
