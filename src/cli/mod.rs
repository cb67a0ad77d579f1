pub mod commands;
pub mod handlers;
pub mod output;

pub use commands::{CheckArgs, CliArgs, Commands, SchemaArgs};
pub use handlers::{handle_check, handle_schema};
pub use output::{OutputFormat, OutputFormatter};
