//! Configuration management for the console Game of Life simulation

pub mod settings;

pub use settings::{CliOverrides, Settings, SimulationConfig};
