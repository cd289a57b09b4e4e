use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use super::value::{BindError, ParamValue};

/// Declaration of a single string-valued build parameter.
///
/// `name` and `trim` are fixed once the definition exists; only the default
/// can be replaced later. Trimming happens when a value is materialized for a
/// build, the stored default is never rewritten.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ParamDef {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    default: Option<String>,
    #[serde(default)]
    trim: bool,
}

impl ParamDef {
    pub fn new(name: impl Into<String>, default: Option<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            default,
            trim: false,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn default_value(&self) -> Option<&str> {
        self.default.as_deref()
    }

    /// Replaces the stored default as-is; no trimming is applied here
    pub fn set_default_value(&mut self, default: Option<String>) {
        self.default = default;
    }

    pub fn is_trim(&self) -> bool {
        self.trim
    }

    /// Default as a build would see it: trimmed when `trim` is set (a missing
    /// default trims to the empty string), the raw stored default otherwise
    pub fn default_value_for_build(&self) -> Option<String> {
        if self.trim {
            Some(self.default.as_deref().unwrap_or_default().trim().to_string())
        } else {
            self.default.clone()
        }
    }

    /// Materialize the stored default into a concrete value
    pub fn default_parameter_value(&self) -> ParamValue {
        let mut value = ParamValue::new(self.name.clone(), self.default.clone(), self.description.clone());
        if self.trim {
            value.do_trim();
        }
        value
    }

    /// Materialize a caller-supplied raw string into a concrete value
    pub fn create_value(&self, raw: &str) -> ParamValue {
        let mut value = ParamValue::new(self.name.clone(), Some(raw.to_string()), self.description.clone());
        if self.trim {
            value.do_trim();
        }
        value
    }

    /// Bind a submitted form payload into a concrete value. The payload's
    /// description is overwritten with the definition's own.
    pub fn create_value_from_json(&self, payload: &JsonValue) -> Result<ParamValue, BindError> {
        let mut value = ParamValue::bind_json(payload)?;
        if self.trim {
            value.do_trim();
        }
        value.description = self.description.clone();
        Ok(value)
    }

    /// New definition carrying `candidate` as its default, when `candidate` is
    /// a string; the receiver unchanged otherwise. The copy does not keep the
    /// trim flag.
    pub fn copy_with_default_value(&self, candidate: &JsonValue) -> ParamDef {
        match candidate.as_str() {
            Some(s) => ParamDef {
                name: self.name.clone(),
                description: self.description.clone(),
                default: Some(s.to_string()),
                trim: false,
            },
            None => self.clone(),
        }
    }
}
