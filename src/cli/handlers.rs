//! Subcommand handlers
//!
//! Each handler runs one subcommand end to end and returns the process exit
//! code: 0 for success, 1 when validation found problems, 2 when the env file
//! could not be loaded or parsed.

use crate::cli::commands::{CheckArgs, SchemaArgs};
use crate::cli::output::OutputFormatter;
use crate::loader;
use crate::options::LoadOptions;
use std::path::PathBuf;
use tracing::{debug, error, info};

/// Validates the current process environment against an annotated env file
pub fn handle_check(args: &CheckArgs) -> i32 {
    let options = load_options(&args.path);
    info!(
        "Checking environment against {}",
        options.env_path.display()
    );

    let schema = match loader::load(&options) {
        Ok(schema) => schema,
        Err(e) => {
            error!("Failed to load env schema: {}", e);
            return 2;
        }
    };

    let report = schema.validate_process_env();

    let formatter = OutputFormatter::new(args.format.into());
    let output = match formatter.format_report(&report) {
        Ok(output) => output,
        Err(e) => {
            error!("Failed to format output: {}", e);
            return 2;
        }
    };
    println!("{}", output);

    if report.is_valid() {
        0
    } else {
        1
    }
}

/// Prints the schema parsed from an annotated env file
pub fn handle_schema(args: &SchemaArgs) -> i32 {
    let options = load_options(&args.path);

    let rules = match loader::load_rules(&options) {
        Ok(rules) => rules,
        Err(e) => {
            error!("Failed to parse env file: {}", e);
            return 2;
        }
    };
    debug!("Schema declares {} variables", rules.len());

    let formatter = OutputFormatter::new(args.format.into());
    match formatter.format_schema(&rules) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(e) => {
            error!("Failed to format output: {}", e);
            2
        }
    }
}

fn load_options(path: &Option<PathBuf>) -> LoadOptions {
    match path {
        Some(path) => LoadOptions::new().with_env_path(path),
        None => LoadOptions::default(),
    }
}
