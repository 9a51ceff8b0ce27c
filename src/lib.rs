//! Interactive Console Game of Life
//!
//! This library simulates Conway's Game of Life on a bounded, non-toroidal
//! grid and drives an interactive console loop: prompt for dimensions, print
//! a fixed number of generations, offer a restart.

pub mod config;
pub mod driver;
pub mod engine;
pub mod utils;

pub use config::Settings;
pub use driver::GameSession;
pub use engine::{Grid, LifeRules};

use anyhow::Result;

/// Run an interactive session on the process's standard streams
pub fn run_console(settings: Settings) -> Result<()> {
    let session = GameSession::new(settings);
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    session.run(&mut stdin.lock(), &mut stdout.lock())
}
