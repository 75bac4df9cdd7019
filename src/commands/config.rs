use anyhow::Result;
use revscript::config::Config;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ConfigFormat {
    Yaml,
    Json,
}

/// Print the resolved configuration
pub fn cmd_config(config: &Config, format: ConfigFormat) -> Result<()> {
    let text = match format {
        ConfigFormat::Yaml => serde_yaml::to_string(config)?,
        ConfigFormat::Json => {
            let mut json = serde_json::to_string_pretty(config)?;
            json.push('\n');
            json
        }
    };
    print!("{}", text);
    Ok(())
}
