mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use revscript::config::{self, ConfigBuilder, ConfigInput, RenderArgs};
use revscript::constants::CONFIG_FILENAME;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = CONFIG_FILENAME, global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for revscript render
#[derive(Parser, Debug)]
pub struct RenderCommandArgs {
    /// Serialized migration script (YAML, or JSON with a .json extension)
    pub ops_file: String,

    /// Output format
    #[arg(long, value_enum, default_value = "python")]
    pub format: commands::OutputFormat,

    /// Write output to a file instead of stdout
    #[arg(long, short = 'o')]
    pub output: Option<String>,

    #[command(flatten)]
    pub render_args: RenderArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a serialized operation tree into a Python migration script
    Render(RenderCommandArgs),

    /// Show the resolved configuration
    Config {
        /// Output format
        #[arg(long, value_enum, default_value = "yaml")]
        format: commands::ConfigFormat,

        #[command(flatten)]
        render_args: RenderArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(&cli);
    run_main(cli)
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    // stdout carries the generated script
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn resolve_config(config_file: &str, render_args: &RenderArgs) -> Result<config::Config> {
    let file_config = config::load_config(config_file)?;
    let cli_config = ConfigInput {
        render: Some(render_args.clone().into()),
    };

    ConfigBuilder::new()
        .with_file(file_config)
        .with_cli_args(cli_config)
        .resolve()
}

fn run_main(cli: Cli) -> Result<()> {
    match &cli.command {
        Commands::Render(args) => {
            let config = resolve_config(&cli.config_file, &args.render_args)?;
            commands::cmd_render(&config, &args.ops_file, args.format, args.output.as_deref())
        }
        Commands::Config {
            format,
            render_args,
        } => {
            let config = resolve_config(&cli.config_file, render_args)?;
            commands::cmd_config(&config, *format)
        }
    }
}
