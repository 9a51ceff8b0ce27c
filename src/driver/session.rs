//! The interactive game loop

use crate::config::Settings;
use crate::driver::input::{prompt_integer, prompt_line};
use crate::engine::{Grid, LifeRules};
use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{BufRead, Write};

/// Drives the outer loop: prompt for dimensions, seed a fresh grid, print
/// the configured number of generations, offer a restart.
pub struct GameSession {
    settings: Settings,
    fixed_dimensions: Option<(i64, i64)>,
}

impl GameSession {
    /// Create a fully interactive session
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            fixed_dimensions: None,
        }
    }

    /// Create a session that runs one game with the given dimensions,
    /// skipping the dimension and restart prompts
    pub fn with_dimensions(settings: Settings, rows: i64, cols: i64) -> Self {
        Self {
            settings,
            fixed_dimensions: Some((rows, cols)),
        }
    }

    pub fn run<R: BufRead, W: Write>(&self, reader: &mut R, writer: &mut W) -> Result<()> {
        loop {
            let (rows, cols) = match self.fixed_dimensions {
                Some(dimensions) => dimensions,
                None => (
                    prompt_integer(reader, writer, "Enter the number of rows: ")?,
                    prompt_integer(reader, writer, "Enter the number of columns: ")?,
                ),
            };
            writeln!(writer).context("Failed to write output")?;

            self.play_game(rows, cols, writer)?;

            if self.fixed_dimensions.is_some() {
                return Ok(());
            }

            let answer = prompt_line(reader, writer, "Do you want to restart the game? (y/n): ")?;
            if !matches!(answer.trim(), "y" | "Y") {
                return Ok(());
            }
            writeln!(writer).context("Failed to write output")?;
        }
    }

    /// One game: a brand-new randomized grid, printed and stepped for the
    /// configured number of generations. Restarts never reuse a grid.
    fn play_game<W: Write>(&self, rows: i64, cols: i64, writer: &mut W) -> Result<()> {
        let mut rng = match self.settings.simulation.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut grid = Grid::random(
            rows,
            cols,
            &mut rng,
            self.settings.simulation.alive_probability,
        );

        for generation in 1..=self.settings.simulation.generations {
            writeln!(writer, "Generation {}:", generation).context("Failed to write output")?;
            write!(writer, "{}", grid).context("Failed to write output")?;
            writeln!(writer).context("Failed to write output")?;

            grid = LifeRules::step(&grid);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn seeded_settings() -> Settings {
        let mut settings = Settings::default();
        settings.simulation.seed = Some(0x5EED);
        settings
    }

    fn run_session(session: &GameSession, input: &str) -> String {
        let mut reader = Cursor::new(input.to_string());
        let mut output = Vec::new();
        session.run(&mut reader, &mut output).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_single_game_transcript() {
        let session = GameSession::new(seeded_settings());
        let output = run_session(&session, "3\n4\nn\n");

        assert!(output.contains("Enter the number of rows: "));
        assert!(output.contains("Enter the number of columns: "));
        for generation in 1..=10 {
            assert!(output.contains(&format!("Generation {}:", generation)));
        }
        assert!(!output.contains("Generation 11:"));
        assert!(output.contains("Do you want to restart the game? (y/n): "));

        // Each generation block renders 3 rows of 4 tokens
        let grid_lines: Vec<&str> = output
            .lines()
            .filter(|line| line.starts_with('+') || line.starts_with('-'))
            .collect();
        assert_eq!(grid_lines.len(), 30);
        for line in grid_lines {
            assert_eq!(line.split(' ').count(), 4);
        }
    }

    #[test]
    fn test_restart_plays_second_game() {
        let session = GameSession::new(seeded_settings());
        let output = run_session(&session, "2\n2\ny\n3\n3\nN\n");

        assert_eq!(output.matches("Generation 1:").count(), 2);
        assert_eq!(output.matches("Do you want to restart the game?").count(), 2);
        assert_eq!(output.matches("Enter the number of rows: ").count(), 2);
    }

    #[test]
    fn test_anything_but_y_terminates() {
        let session = GameSession::new(seeded_settings());
        let output = run_session(&session, "2\n2\nmaybe\n");
        assert_eq!(output.matches("Generation 1:").count(), 1);
    }

    #[test]
    fn test_invalid_dimension_input_reprompts() {
        let session = GameSession::new(seeded_settings());
        let output = run_session(&session, "three\n3\n4\nn\n");
        assert!(output.contains("Invalid input. Please enter a valid integer value."));
        assert!(output.contains("Generation 10:"));
    }

    #[test]
    fn test_negative_dimensions_run_as_empty_grid() {
        let session = GameSession::new(seeded_settings());
        let output = run_session(&session, "-5\n4\nn\n");

        assert!(output.contains("Generation 10:"));
        assert!(!output.contains('+'));
        assert!(!output.contains('-'));
    }

    #[test]
    fn test_fixed_dimensions_skip_prompts() {
        let session = GameSession::with_dimensions(seeded_settings(), 4, 5);
        let output = run_session(&session, "");

        assert!(!output.contains("Enter the number of rows"));
        assert!(!output.contains("Do you want to restart the game?"));
        assert!(output.contains("Generation 10:"));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let session = GameSession::with_dimensions(seeded_settings(), 6, 6);
        let first = run_session(&session, "");
        let second = run_session(&session, "");
        assert_eq!(first, second);
    }

    #[test]
    fn test_generations_setting_respected() {
        let mut settings = seeded_settings();
        settings.simulation.generations = 3;
        let session = GameSession::with_dimensions(settings, 2, 2);
        let output = run_session(&session, "");

        assert!(output.contains("Generation 3:"));
        assert!(!output.contains("Generation 4:"));
    }
}
