//! j2pc CLI - a command-line front end for the J-to-P source translator.
//!
//! This is the main entry point for the `j2pc` binary. It uses clap for
//! argument parsing and dispatches to the `translate`/`check`/`init`
//! command handlers; `translate` and `check` drive `j2p_drv::Session` —
//! the single pure-function entry point the core exposes (spec §1, §6).

mod commands;
mod config;
mod error;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    check::{run_check, CheckArgs},
    init::{run_init, InitArgs},
    translate::{run_translate, TranslateArgs},
};
use config::{Config, EmitKind};
use error::{CliError, Result};
use j2p_drv::Options;

/// j2pc - translate a small class-based source language into an
/// indentation-sensitive, dynamically-typed target language.
#[derive(Parser, Debug)]
#[command(name = "j2pc")]
#[command(author = "j2pc contributors")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Source-to-source translator CLI", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug-level) logging
    #[arg(short, long, global = true, env = "J2PC_VERBOSE")]
    verbose: bool,

    /// Path to a j2pc.toml configuration file
    #[arg(short, long, global = true, env = "J2PC_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "J2PC_NO_COLOR")]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Translate a source file, emitting target text (or tokens/AST)
    Translate(TranslateCommand),

    /// Parse a source file and report diagnostics without emitting
    Check(CheckCommand),

    /// Scaffold a new project directory with an example source file
    /// and a j2pc.toml config
    Init(InitCommand),
}

#[derive(Parser, Debug)]
struct TranslateCommand {
    /// Source file to translate
    input: PathBuf,

    /// Write output here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// What to print: tokens, ast, or the emitted source (default)
    #[arg(short, long, value_enum)]
    emit: Option<EmitKind>,

    /// Halt on the first diagnostic instead of accumulating warnings
    #[arg(long)]
    fatal: bool,

    /// Accumulate diagnostics and keep translating on a best-effort basis
    #[arg(long, conflicts_with = "fatal")]
    no_fatal: bool,

    /// Prefix emitted names of `private` members with an underscore
    #[arg(long)]
    private: bool,
}

#[derive(Parser, Debug)]
struct CheckCommand {
    /// Source file to check
    input: PathBuf,

    /// Halt on the first diagnostic instead of accumulating warnings
    #[arg(long)]
    fatal: bool,

    /// Accumulate diagnostics and keep parsing on a best-effort basis
    #[arg(long, conflicts_with = "fatal")]
    no_fatal: bool,
}

#[derive(Parser, Debug)]
struct InitCommand {
    /// Directory to initialize (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing example file / config instead of leaving it
    #[arg(short, long)]
    force: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;

    execute_command(cli.command, config)
}

fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| CliError::Config(format!("failed to initialize logging: {e}")))?;

    Ok(())
}

fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Translate(args) => execute_translate(args, config),
        Commands::Check(args) => execute_check(args, config),
        Commands::Init(args) => execute_init(args),
    }
}

fn execute_translate(args: TranslateCommand, config: Config) -> Result<()> {
    let options = Options {
        fatal: resolve_fatal(args.fatal, args.no_fatal, config.fatal),
        private: args.private || config.private,
    };
    let translate_args = TranslateArgs {
        input: args.input,
        output: args.output,
        options,
        emit: args.emit.unwrap_or(config.emit),
    };
    run_translate(translate_args)
}

fn execute_check(args: CheckCommand, config: Config) -> Result<()> {
    let options = Options {
        fatal: resolve_fatal(args.fatal, args.no_fatal, config.fatal),
        private: config.private,
    };
    let check_args = CheckArgs {
        input: args.input,
        options,
    };
    run_check(check_args)
}

fn execute_init(args: InitCommand) -> Result<()> {
    run_init(InitArgs {
        path: args.path,
        force: args.force,
    })
}

/// CLI flags override the config file; absent either, the config file's
/// (or its default's) value stands.
fn resolve_fatal(fatal_flag: bool, no_fatal_flag: bool, config_fatal: bool) -> bool {
    if fatal_flag {
        true
    } else if no_fatal_flag {
        false
    } else {
        config_fatal
    }
}
