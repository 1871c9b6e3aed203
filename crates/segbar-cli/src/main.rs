use std::fs::OpenOptions;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use segbar_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "segbar")]
#[command(
    author,
    version,
    about = "A segmented control with a spring-animated highlight for the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Configuration file (defaults to ~/.config/segbar/config.toml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive demo
    Run,
    /// Print one settled frame as plain text
    Render {
        /// Row width in cells
        #[arg(short = 'w', long, default_value_t = 60)]
        width: u16,
        /// Selected segment (defaults to control.initial_index)
        #[arg(short = 'i', long)]
        index: Option<usize>,
        /// Lay the row out right to left (overrides control.is_rtl)
        #[arg(long, conflicts_with = "ltr")]
        rtl: bool,
        /// Lay the row out left to right (overrides control.is_rtl)
        #[arg(long)]
        ltr: bool,
        /// Cells kept free on both sides (defaults to control.container_margin)
        #[arg(short = 'm', long)]
        margin: Option<u16>,
    },
    /// Print what assistive technology would announce for each segment
    Describe {
        /// Selected segment (defaults to control.initial_index)
        #[arg(short = 'i', long)]
        index: Option<usize>,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(short = 'f', long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.unwrap_or_else(AppConfig::config_path);

    if let Some(Commands::InitConfig { force }) = cli.command {
        init_logging(&AppConfig::default(), false)?;
        return commands::init_config::run(&config_path, force).await;
    }

    // Load configuration
    let config = AppConfig::load_from(&config_path)?;
    config.validate()?;

    // The TUI owns the terminal, so its logs go to a file
    let to_file = matches!(cli.command, Some(Commands::Run) | None);
    init_logging(&config, to_file)?;
    let config = Arc::new(config);

    match cli.command {
        Some(Commands::Run) | None => commands::run::run(config).await,
        Some(Commands::Render {
            width,
            index,
            rtl,
            ltr,
            margin,
        }) => {
            let direction = match (rtl, ltr) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            commands::render::run(&config, width, index, direction, margin).await
        }
        Some(Commands::Describe { index, json }) => {
            commands::describe::run(&config, index, json).await
        }
        Some(Commands::InitConfig { .. }) => Ok(()),
    }
}

/// Install the subscriber; `RUST_LOG` wins over `general.log_level`
fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));
    let registry = tracing_subscriber::registry().with(filter);

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    }

    Ok(())
}
