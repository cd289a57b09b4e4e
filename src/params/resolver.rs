use crate::params::parser::{load_param_file, validate_params, ParamSet};
use crate::params::value::ParamValue;
use crate::util::{create_run_dir, substitute_params, timestamp, write_artifact};
use anyhow::Context;
use chrono::Utc;
use serde_json::{json, Value as JsonValue};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::info;

/// Public entry used by main.rs: materialize every parameter of the set,
/// taking submitted overrides where present, and record the result as a run
/// artifact.
pub fn resolve_params(path: &Path, overrides_path: Option<&Path>) -> anyhow::Result<()> {
    let set = load_param_file(path)?;
    validate_params(&set)?;

    info!("Resolving parameters: {:?}", set.name);

    let overrides = match overrides_path {
        Some(p) => {
            let content =
                std::fs::read_to_string(p).with_context(|| format!("failed to read overrides {:?}", p))?;
            parse_overrides(&content)?
        }
        None => HashMap::new(),
    };

    let values = resolve_values(&set, &overrides)?;

    // create run dir for artifacts
    let base = Path::new(".rustyparam");
    let run_dir = create_run_dir(base)?;
    std::fs::write(run_dir.join("params.yaml"), serde_yaml::to_string(&set)?)?;

    let resolved = json!({
        "set": &set.name,
        "resolved_at": Utc::now().to_rfc3339(),
        "parameters": &values,
    });
    write_artifact(&run_dir, &format!("resolved_{}.json", timestamp()), &resolved.to_string())?;

    for value in &values {
        println!("{} = {}", value.name, value.value.as_deref().unwrap_or(""));
    }

    if let Some(template) = &set.command {
        let value_map: HashMap<String, String> = values
            .iter()
            .map(|v| (v.name.clone(), v.value.clone().unwrap_or_default()))
            .collect();
        println!("Command: {}", substitute_params(template, &value_map));
    }

    info!("Parameters resolved into {:?}", run_dir);
    Ok(())
}

/// Defaults-only helper for main.rs: print what a build would be offered
pub fn show_defaults(path: &Path) -> anyhow::Result<()> {
    let set = load_param_file(path)?;
    validate_params(&set)?;
    for entry in &set.parameters {
        println!(
            "{} = {}",
            entry.def.name(),
            entry.def.default_value_for_build().unwrap_or_default()
        );
    }
    Ok(())
}

/// One value per definition: the bound override payload if one was submitted,
/// the stored default otherwise
pub fn resolve_values(set: &ParamSet, overrides: &HashMap<String, JsonValue>) -> anyhow::Result<Vec<ParamValue>> {
    let names: HashSet<&str> = set.parameters.iter().map(|e| e.def.name()).collect();
    for name in overrides.keys() {
        if !names.contains(name.as_str()) {
            anyhow::bail!("override for unknown parameter '{}'", name);
        }
    }

    let mut values = Vec::new();
    for entry in &set.parameters {
        let def = &entry.def;
        let value = match overrides.get(def.name()) {
            Some(payload) => def
                .create_value_from_json(payload)
                .with_context(|| format!("failed to bind override for '{}'", def.name()))?,
            None => def.default_parameter_value(),
        };
        values.push(value);
    }
    Ok(values)
}

/// Parse the overrides document: a JSON array of {"name", "value"} payloads
pub fn parse_overrides(content: &str) -> anyhow::Result<HashMap<String, JsonValue>> {
    let payloads: Vec<JsonValue> =
        serde_json::from_str(content).context("overrides must be a JSON array of payloads")?;
    let mut map = HashMap::new();
    for payload in payloads {
        let name = payload
            .get("name")
            .and_then(JsonValue::as_str)
            .ok_or_else(|| anyhow::anyhow!("override payload missing a string 'name'"))?
            .to_string();
        if map.insert(name.clone(), payload).is_some() {
            anyhow::bail!("duplicate override for parameter '{}'", name);
        }
    }
    Ok(map)
}
