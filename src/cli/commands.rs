use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Type-tagged env file parser and pre-start environment validator
#[derive(Parser, Debug)]
#[command(
    name = "envtag",
    about = "Type-tagged env file parser and pre-start environment validator",
    version,
    author,
    long_about = "envtag reads an annotated env file in which `// type` comments declare \
                  the expected type of the variable on the following line, builds a \
                  validation schema from those annotations, and checks the current \
                  environment against it before an application starts."
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(long, global = true, value_name = "LEVEL", help = "Set logging level")]
    pub log_level: Option<String>,

    #[arg(short = 'v', long, global = true, help = "Verbose output (debug logging)")]
    pub verbose: bool,

    #[arg(
        short = 'q',
        long,
        global = true,
        conflicts_with = "verbose",
        help = "Quiet mode - suppress non-error output"
    )]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(
        about = "Validate the current environment against an annotated env file",
        long_about = "Parses the annotated env file, compiles its validation schema, and \
                      checks every declared variable against the current process \
                      environment. Exits 0 when all checks pass, 1 when any variable \
                      fails, 2 when the file cannot be loaded or parsed.\n\n\
                      Examples:\n  \
                      envtag check\n  \
                      envtag check .env.example\n  \
                      envtag check --format json"
    )]
    Check(CheckArgs),

    #[command(
        about = "Print the validation schema parsed from an annotated env file",
        long_about = "Parses the annotated env file and prints the declared variables with \
                      their validation rules, without checking any environment.\n\n\
                      Examples:\n  \
                      envtag schema\n  \
                      envtag schema .env.example --format yaml"
    )]
    Schema(SchemaArgs),
}

#[derive(Parser, Debug, Clone)]
pub struct CheckArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the annotated env file (defaults to .env)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(Parser, Debug, Clone)]
pub struct SchemaArgs {
    #[arg(
        value_name = "PATH",
        help = "Path to the annotated env file (defaults to .env)"
    )]
    pub path: Option<PathBuf>,

    #[arg(
        short = 'f',
        long,
        value_enum,
        default_value = "human",
        help = "Output format"
    )]
    pub format: OutputFormatArg,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormatArg {
    Json,
    Yaml,
    Human,
}

impl From<OutputFormatArg> for super::output::OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Json => super::output::OutputFormat::Json,
            OutputFormatArg::Yaml => super::output::OutputFormat::Yaml,
            OutputFormatArg::Human => super::output::OutputFormat::Human,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_args_verify() {
        // Verify that CLI structure is valid
        CliArgs::command().debug_assert();
    }

    #[test]
    fn test_default_check_args() {
        let args = CliArgs::parse_from(["envtag", "check"]);
        match args.command {
            Commands::Check(check_args) => {
                assert_eq!(check_args.format, OutputFormatArg::Human);
                assert!(check_args.path.is_none());
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_check_with_path() {
        let args = CliArgs::parse_from(["envtag", "check", ".env.example"]);
        match args.command {
            Commands::Check(check_args) => {
                assert_eq!(check_args.path, Some(PathBuf::from(".env.example")));
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_check_with_format() {
        let args = CliArgs::parse_from(["envtag", "check", "--format", "json"]);
        match args.command {
            Commands::Check(check_args) => {
                assert_eq!(check_args.format, OutputFormatArg::Json);
            }
            _ => panic!("Expected Check command"),
        }
    }

    #[test]
    fn test_schema_command() {
        let args = CliArgs::parse_from(["envtag", "schema", "-f", "yaml", "conf/.env"]);
        match args.command {
            Commands::Schema(schema_args) => {
                assert_eq!(schema_args.format, OutputFormatArg::Yaml);
                assert_eq!(schema_args.path, Some(PathBuf::from("conf/.env")));
            }
            _ => panic!("Expected Schema command"),
        }
    }

    #[test]
    fn test_global_verbose_flag() {
        let args = CliArgs::parse_from(["envtag", "-v", "check"]);
        assert!(args.verbose);
        assert!(!args.quiet);
    }

    #[test]
    fn test_global_quiet_flag() {
        let args = CliArgs::parse_from(["envtag", "-q", "check"]);
        assert!(!args.verbose);
        assert!(args.quiet);
    }

    #[test]
    fn test_log_level_flag() {
        let args = CliArgs::parse_from(["envtag", "--log-level", "debug", "check"]);
        assert_eq!(args.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_format_arg_conversion() {
        use super::super::output::OutputFormat;

        assert_eq!(OutputFormat::from(OutputFormatArg::Json), OutputFormat::Json);
        assert_eq!(OutputFormat::from(OutputFormatArg::Yaml), OutputFormat::Yaml);
        assert_eq!(
            OutputFormat::from(OutputFormatArg::Human),
            OutputFormat::Human
        );
    }
}
