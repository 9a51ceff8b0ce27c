//! Console entry point for the Game of Life simulation

use anyhow::{Context, Result};
use clap::Parser;
use game_of_life_console::{
    config::{CliOverrides, Settings},
    driver::GameSession,
    utils::ColorOutput,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "game_of_life_console")]
#[command(about = "Interactive console Game of Life")]
#[command(version = "0.1.0")]
struct Cli {
    /// Configuration file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grid rows (with --cols, skips the interactive prompts)
    #[arg(long)]
    rows: Option<i64>,

    /// Grid columns (with --rows, skips the interactive prompts)
    #[arg(long)]
    cols: Option<i64>,

    /// Generations per game (overrides config)
    #[arg(short, long)]
    generations: Option<usize>,

    /// RNG seed for reproducible grids (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut settings = match &cli.config {
        Some(path) if path.exists() => Settings::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        Some(path) => {
            println!(
                "{}",
                ColorOutput::warning(&format!(
                    "Config file {} not found, using defaults",
                    path.display()
                ))
            );
            Settings::default()
        }
        None => Settings::default(),
    };

    let cli_overrides = CliOverrides {
        generations: cli.generations,
        seed: cli.seed,
    };
    settings.merge_with_cli(&cli_overrides);

    settings
        .validate()
        .context("Configuration validation failed")?;

    let session = match (cli.rows, cli.cols) {
        (Some(rows), Some(cols)) => GameSession::with_dimensions(settings, rows, cols),
        (None, None) => GameSession::new(settings),
        _ => anyhow::bail!("--rows and --cols must be given together"),
    };

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(&mut stdin.lock(), &mut stdout.lock())
}
