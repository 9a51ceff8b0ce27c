//! Game of Life core functionality

pub mod grid;
pub mod rules;

pub use grid::Grid;
pub use rules::LifeRules;
