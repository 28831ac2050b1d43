//! CLI argument parsing for epwrap

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::invocation::Request;

/// Output format for --dry-run
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// One argument per line (default)
    Text,
    /// JSON object for machine parsing
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "epwrap")]
#[command(version)]
#[command(about = "Run javac with Error Prone, adapting the command line to the JDK version", long_about = None)]
pub struct Cli {
    /// Enable debug tracing output to stderr
    #[arg(long = "debug")]
    pub debug: bool,

    /// Print the compiler command line instead of executing it
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// Output format for --dry-run
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// TOML file overriding the built-in flags and constants
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Java runtime used to query the version (and run Error Prone on old JDKs)
    #[arg(value_name = "JAVA")]
    pub runtime: String,

    /// javac executable
    #[arg(value_name = "JAVAC")]
    pub compiler: String,

    /// Error Prone jar or classpath
    #[arg(value_name = "ERROR_PRONE")]
    pub tool: String,

    /// Arguments passed on to the compiler, verbatim
    #[arg(
        value_name = "JAVAC_ARGS",
        trailing_var_arg = true,
        allow_hyphen_values = true
    )]
    pub javac_args: Vec<String>,
}

/// Options that consume the following argument as their value
const OPTIONS_WITH_VALUE: &[&str] = &["--format", "--config"];

/// Number of positionals before the compiler arguments
const POSITIONALS: usize = 3;

/// Index of the first compiler argument in `args` (`args[0]` is the binary)
///
/// epwrap options are only recognized in front of `<JAVA>`. Everything after
/// `<ERROR_PRONE>` belongs to the compiler, including `-h`, `--version` or a
/// literal `--`.
fn javac_args_start(args: &[OsString]) -> usize {
    let mut i = 1;
    while let Some(arg) = args.get(i).and_then(|a| a.to_str()) {
        if arg == "--" {
            i += 1;
            break;
        }
        if !arg.starts_with('-') || arg == "-" {
            break;
        }
        i += if OPTIONS_WITH_VALUE.contains(&arg) { 2 } else { 1 };
    }
    (i + POSITIONALS).min(args.len())
}

impl Cli {
    /// Parse `std::env::args_os()`, exiting with usage on error
    pub fn parse_args() -> Self {
        Self::try_parse_args(std::env::args_os()).unwrap_or_else(|e| e.exit())
    }

    /// Parse epwrap options and positionals with clap, then take the compiler
    /// arguments untouched
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let tail = args.split_off(javac_args_start(&args));

        let mut cli = Self::try_parse_from(args)?;
        cli.javac_args = tail
            .into_iter()
            .map(|arg| {
                arg.into_string().map_err(|arg| {
                    Self::command().error(
                        ErrorKind::InvalidUtf8,
                        format!("compiler argument is not valid UTF-8: {:?}", arg),
                    )
                })
            })
            .collect::<Result<_, _>>()?;
        Ok(cli)
    }

    /// Paths and compiler arguments as an adapter request
    pub fn request(&self) -> Request {
        Request {
            runtime: self.runtime.clone(),
            compiler: self.compiler.clone(),
            tool: self.tool.clone(),
            javac_args: self.javac_args.clone(),
        }
    }
}
