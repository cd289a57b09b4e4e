use chrono::Utc;
use regex::Regex;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use uuid::Uuid;

/// Simple substitution: replace {{params.NAME}} with resolved parameter values
pub fn substitute_params(template: &str, values: &HashMap<String, String>) -> String {
    let mut s = template.to_string();

    for (name, value) in values {
        let p1 = format!("{{{{params.{}}}}}", name);
        let p2 = format!("{{{{params.{} }}}}", name);
        s = s.replace(&p1, value);
        s = s.replace(&p2, value);
    }

    // Strip any remaining {{...}} so raw placeholders never reach a shell
    let re = Regex::new(r"\{\{.*?\}\}").unwrap();
    s = re.replace_all(&s, "").to_string();

    s
}

/// Create a run directory and return it
pub fn create_run_dir(base: &Path) -> anyhow::Result<std::path::PathBuf> {
    let run_id = Uuid::new_v4().to_string();
    let dir = base.join("runs").join(run_id);
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

pub fn write_artifact(dir: &Path, name: &str, content: &str) -> anyhow::Result<()> {
    let path = dir.join(name);
    fs::write(path, content)?;
    Ok(())
}

pub fn timestamp() -> String {
    // Format: YYYY-MM-DD_HH-MM-SS
    Utc::now().format("%Y-%m-%d_%H-%M-%S").to_string()
}
