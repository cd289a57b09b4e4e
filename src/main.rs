mod cli;
mod params;
mod registry;
mod util;

use anyhow::Context;
use tracing_subscriber::{fmt, prelude::*};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .init();

    let opts = cli::get_opts();
    match opts.subcommand.as_str() {
        "resolve" => {
            let path = std::path::Path::new(&opts.path);
            let overrides = opts.overrides.as_deref().map(std::path::Path::new);
            params::resolve_params(path, overrides).context("parameter resolution failed")?;
        }
        "defaults" => {
            params::show_defaults(std::path::Path::new(&opts.path))?;
        }
        "validate" => {
            params::validate_param_file(std::path::Path::new(&opts.path))?;
        }
        other => {
            eprintln!("Unknown subcommand: {} (supported: defaults, resolve, validate)", other);
        }
    }

    Ok(())
}
