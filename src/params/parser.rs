use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use super::definition::ParamDef;
use crate::registry;

/// ParamSet and ParamEntry with Serialize + Deserialize so we can read & write YAML
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ParamSet {
    pub name: Option<String>,
    #[serde(default)]
    pub command: Option<String>,
    pub parameters: Vec<ParamEntry>,
}

/// One file entry: the declared kind plus the definition fields themselves
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ParamEntry {
    #[serde(default = "default_kind", rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub def: ParamDef,
}

fn default_kind() -> String {
    "string".to_string()
}

/// Load YAML file into ParamSet
pub fn load_param_file(path: &Path) -> anyhow::Result<ParamSet> {
    let content = std::fs::read_to_string(path).with_context(|| format!("failed to read {:?}", path))?;
    let set: ParamSet = serde_yaml::from_str(&content).with_context(|| format!("failed to parse YAML {:?}", path))?;
    Ok(set)
}

/// Validate a set: non-empty unique names, kinds known to the registry
pub fn validate_params(set: &ParamSet) -> anyhow::Result<()> {
    let mut names = HashSet::new();
    for entry in &set.parameters {
        let name = entry.def.name();
        if name.is_empty() {
            anyhow::bail!("parameter with empty name");
        }
        if !names.insert(name.to_string()) {
            anyhow::bail!("duplicate parameter name '{}'", name);
        }
        if registry::lookup(&entry.kind).is_none() {
            anyhow::bail!("parameter '{}' has unknown type '{}'", name, entry.kind);
        }
    }
    Ok(())
}

/// Helper: validate a parameter file path (for main)
pub fn validate_param_file(path: &Path) -> anyhow::Result<()> {
    let set = load_param_file(path)?;
    validate_params(&set)?;
    for entry in &set.parameters {
        if let Some(kind) = registry::lookup(&entry.kind) {
            println!("  {}: {} ({})", entry.def.name(), kind.display_name(), kind.help_file());
        }
    }
    println!(
        "Parameter set '{}' validated",
        set.name.clone().unwrap_or_else(|| "<unnamed>".to_string())
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(yaml: &str) -> ParamSet {
        serde_yaml::from_str(yaml).expect("fixture parses")
    }

    #[test]
    fn parses_a_full_entry() {
        let set = parse(
            r#"
name: nightly-build
command: "deploy --branch {{params.BRANCH}}"
parameters:
  - name: BRANCH
    type: stringParam
    description: branch to build
    default: "  main  "
    trim: true
"#,
        );
        assert_eq!(set.name.as_deref(), Some("nightly-build"));
        let entry = &set.parameters[0];
        assert_eq!(entry.kind, "stringParam");
        assert_eq!(entry.def.name(), "BRANCH");
        assert_eq!(entry.def.default_value(), Some("  main  "));
        assert!(entry.def.is_trim());
        assert!(validate_params(&set).is_ok());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let set = parse("parameters:\n  - name: TAG\n");
        let entry = &set.parameters[0];
        assert_eq!(entry.kind, "string");
        assert_eq!(entry.def.description(), None);
        assert_eq!(entry.def.default_value(), None);
        assert!(!entry.def.is_trim());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let set = parse("parameters:\n  - name: TAG\n  - name: TAG\n");
        let err = validate_params(&set).unwrap_err();
        assert!(err.to_string().contains("duplicate parameter name 'TAG'"));
    }

    #[test]
    fn empty_names_are_rejected() {
        let set = parse("parameters:\n  - name: \"\"\n");
        assert!(validate_params(&set).is_err());
    }

    #[test]
    fn unknown_kinds_are_rejected() {
        let set = parse("parameters:\n  - name: TAG\n    type: boolean\n");
        let err = validate_params(&set).unwrap_err();
        assert!(err.to_string().contains("unknown type 'boolean'"));
    }
}
