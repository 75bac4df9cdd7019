use anyhow::{Context, Result};
use revscript::config::Config;
use revscript::ops::MigrationScript;
use revscript::{RenderContext, render_migration_module, render_template_vars};
use std::path::Path;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Complete Python migration module
    #[default]
    Python,
    /// Template variables as a JSON object
    Json,
}

/// Load a serialized migration script; `.json` files are read as JSON,
/// anything else as YAML.
pub fn load_script(path: &Path) -> Result<MigrationScript> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read operations file {}", path.display()))?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let script = if is_json {
        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse JSON operations file {}", path.display()))?
    } else {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse YAML operations file {}", path.display()))?
    };
    Ok(script)
}

pub fn cmd_render(
    config: &Config,
    ops_file: &str,
    format: OutputFormat,
    output: Option<&str>,
) -> Result<()> {
    let script = load_script(Path::new(ops_file))?;
    debug!(
        "Loaded {} upgrade and {} downgrade containers",
        script.upgrade_ops.len(),
        script.downgrade_ops.len()
    );

    let mut ctx = RenderContext::new(config.render.clone());
    let vars = render_template_vars(&mut ctx, &script)
        .with_context(|| format!("Failed to render {}", ops_file))?;

    let rendered = match format {
        OutputFormat::Python => render_migration_module(&script, &vars),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&vars)?;
            json.push('\n');
            json
        }
    };

    match output {
        Some(path) => {
            std::fs::write(path, &rendered)
                .with_context(|| format!("Failed to write output file {}", path))?;
            info!("Wrote migration script to {}", path);
        }
        None => print!("{}", rendered),
    }
    Ok(())
}
