//! Command-line interface module.

mod args;
pub mod generate;
pub mod serve;
pub mod validate;

pub use args::{Cli, Commands, ValidateArgs};
