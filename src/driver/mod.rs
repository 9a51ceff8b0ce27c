//! Interactive console driver for the simulation

pub mod input;
pub mod session;

pub use input::{prompt_integer, prompt_line, InputError};
pub use session::GameSession;
