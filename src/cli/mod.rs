pub mod commands;
pub mod handlers;

pub use commands::{AiAction, Cli, Commands, SortArg};
