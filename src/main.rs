use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use neon_snake::app::App;
use neon_snake::commentary::{CommentaryProvider, ScriptedCommentator};
use neon_snake::{GameConfig, GameController};

#[derive(Parser)]
#[command(name = "neon-snake")]
#[command(version, about = "Terminal snake with obstacle levels and a snarky commentator")]
struct Cli {
    /// YAML file overriding the default game constants
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board side length
    #[arg(long)]
    board_size: Option<u16>,

    /// Tick interval at the start of a round, in milliseconds
    #[arg(long)]
    initial_speed: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Game-over commentator
    #[arg(long, value_enum, default_value = "scripted")]
    commentary: CommentaryMode,

    /// Artificial commentator delay, in milliseconds
    #[arg(long, default_value = "600")]
    commentary_latency: u64,

    /// Seconds to wait for the commentator before giving up
    #[arg(long, default_value = "10")]
    commentary_timeout: u64,

    /// Where to write logs; the terminal is taken by the game
    #[arg(long, default_value = "neon-snake.log")]
    log_file: PathBuf,
}

#[derive(Clone, Copy, ValueEnum)]
enum CommentaryMode {
    /// Built-in offline roasts
    Scripted,
    /// No commentator
    Off,
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "neon_snake=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = match &cli.config {
        Some(path) => GameConfig::from_yaml_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(size) = cli.board_size {
        config.board_size = size;
    }
    if let Some(speed) = cli.initial_speed {
        config.initial_speed_ms = speed;
    }
    config.validate().context("Invalid game configuration")?;
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let config = load_config(&cli)?;
    tracing::info!(?config, "starting neon-snake");

    let commentator: Option<Arc<dyn CommentaryProvider>> = match cli.commentary {
        CommentaryMode::Scripted => Some(Arc::new(ScriptedCommentator::with_latency(
            Duration::from_millis(cli.commentary_latency),
        ))),
        CommentaryMode::Off => None,
    };

    let (controller, commentary) = GameController::new(config, commentator, cli.seed);
    let controller =
        controller.with_commentary_timeout(Duration::from_secs(cli.commentary_timeout));
    App::new(controller, commentary).run().await
}
