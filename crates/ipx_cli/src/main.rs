//! ipxgen CLI: parameter validation and Verilog generation for IP-XACT models.
//!
//! Provides `ipxgen validate` for checking the parameters of a component
//! model and `ipxgen generate` for writing the Verilog module of a component
//! or design.

#![warn(missing_docs)]

mod generate;
mod model;
mod pipeline;
mod validate;

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// ipxgen: IP-XACT parameter validation and Verilog generation.
#[derive(Parser, Debug)]
#[command(name = "ipxgen", version, about = "IP-XACT Verilog generator")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Enable verbose (debug-level) output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Control colored output.
    #[arg(long, global = true, value_enum, default_value_t = ColorChoice::Auto)]
    pub color: ColorChoice,

    /// Path to a custom `ipxgen.toml` file, or the directory holding it.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Validate the parameters of a component model.
    Validate(ValidateArgs),
    /// Generate the Verilog module of a component or design model.
    Generate(GenerateArgs),
}

/// Arguments for the `ipxgen validate` subcommand.
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// JSON component model to validate.
    pub component: PathBuf,

    /// Output format for diagnostics.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,

    /// Context named in messages (default: `component <vlnv>`).
    #[arg(long)]
    pub context: Option<String>,

    /// Violation names to suppress (e.g., `--allow value-id`).
    #[arg(long, num_args = 1..)]
    pub allow: Vec<String>,
}

/// Arguments for the `ipxgen generate` subcommand.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// JSON component or design model.
    pub model: PathBuf,

    /// Treat the model as a design rather than a single component.
    #[arg(long)]
    pub design: bool,

    /// Output directory (default: `generator.output` from the configuration).
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Controls whether colored output is produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ColorChoice {
    /// Detect from terminal capabilities.
    Auto,
    /// Always produce colored output.
    Always,
    /// Never produce colored output.
    Never,
}

/// Diagnostic output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Global settings derived from CLI flags.
pub struct GlobalArgs {
    /// Whether to suppress non-error output.
    pub quiet: bool,
    /// Whether to print verbose/debug information.
    pub verbose: bool,
    /// Whether to use colored output.
    pub color: bool,
    /// Optional path to a custom config file or directory.
    pub config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let color = match cli.color {
        ColorChoice::Auto => std::io::stderr().is_terminal(),
        ColorChoice::Always => true,
        ColorChoice::Never => false,
    };

    let global = GlobalArgs {
        quiet: cli.quiet,
        verbose: cli.verbose,
        color,
        config: cli.config,
    };
    pipeline::init_logging(&global);

    let result = match cli.command {
        Command::Validate(ref args) => validate::run(args, &global),
        Command::Generate(ref args) => generate::run(args, &global),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_validate_default() {
        let cli = Cli::parse_from(["ipxgen", "validate", "uart.json"]);
        match cli.command {
            Command::Validate(ref args) => {
                assert_eq!(args.component, PathBuf::from("uart.json"));
                assert_eq!(args.format, ReportFormat::Text);
                assert!(args.context.is_none());
                assert!(args.allow.is_empty());
            }
            _ => panic!("expected Validate command"),
        }
    }

    #[test]
    fn parse_validate_with_args() {
        let cli = Cli::parse_from([
            "ipxgen",
            "validate",
            "uart.json",
            "--format",
            "json",
            "--context",
            "design soc",
            "--allow",
            "value-id",
            "vector",
        ]);
        match cli.command {
            Command::Validate(ref args) => {
                assert_eq!(args.format, ReportFormat::Json);
                assert_eq!(args.context.as_deref(), Some("design soc"));
                assert_eq!(args.allow, vec!["value-id", "vector"]);
            }
            _ => panic!("expected Validate command"),
        }
    }

    #[test]
    fn parse_generate_default() {
        let cli = Cli::parse_from(["ipxgen", "generate", "soc.json"]);
        match cli.command {
            Command::Generate(ref args) => {
                assert_eq!(args.model, PathBuf::from("soc.json"));
                assert!(!args.design);
                assert!(args.output.is_none());
            }
            _ => panic!("expected Generate command"),
        }
    }

    #[test]
    fn parse_generate_design() {
        let cli = Cli::parse_from(["ipxgen", "generate", "soc.json", "--design", "-o", "rtl"]);
        match cli.command {
            Command::Generate(ref args) => {
                assert!(args.design);
                assert_eq!(args.output, Some(PathBuf::from("rtl")));
            }
            _ => panic!("expected Generate command"),
        }
    }

    #[test]
    fn parse_global_flags() {
        let cli = Cli::parse_from(["ipxgen", "--quiet", "--color", "never", "validate", "a.json"]);
        assert!(cli.quiet);
        assert!(!cli.verbose);
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn parse_global_flags_after_subcommand() {
        let cli = Cli::parse_from(["ipxgen", "generate", "a.json", "--verbose", "--color", "always"]);
        assert!(cli.verbose);
        assert_eq!(cli.color, ColorChoice::Always);
    }

    #[test]
    fn parse_config_path() {
        let cli = Cli::parse_from(["ipxgen", "--config", "/path/to/ipxgen.toml", "validate", "a.json"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/ipxgen.toml")));
    }

    #[test]
    fn cli_definition_is_consistent() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
