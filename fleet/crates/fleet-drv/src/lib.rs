//! fleet-drv - Driver for the `fleet` executable.
//!
//! The driver wires the pipeline together: source string in, lexer, tree
//! builder, evaluator against a prelude-seeded root environment, value (or
//! error) out. Three modes:
//!
//! - `fleet --version` prints a version banner;
//! - `fleet -c <code>` evaluates code and prints the resulting value;
//! - `fleet -t <code>` stops after tree building and prints the tree.
//!
//! Results and domain errors go to stdout (errors as `Error: <kind>: …`,
//! with exit code 1); only setup failures use stderr. Set `RUST_LOG=debug`
//! to trace the pipeline phases.

use std::process::ExitCode;
use std::rc::Rc;

use clap::Parser as ClapParser;
use tracing::debug;

use fleet_eval::{Evaluator, Value};
use fleet_par::{parse, Expr};
use fleet_util::Error;

const USAGE: &str = "Usage: fleet [--version] [-c code] [-t code]";

/// Command line arguments for the `fleet` binary.
///
/// Clap's built-in help and version flags are disabled: the usage line and
/// banner formats are part of the driver's contract, including where they
/// go (stdout) and the exit codes they produce.
#[derive(Debug, ClapParser)]
#[command(name = "fleet", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Print the interpreter version and exit.
    #[arg(long)]
    version: bool,

    /// Evaluate the given code and print the resulting value.
    #[arg(short = 'c', value_name = "code")]
    code: Option<String>,

    /// Build the given code into an expression tree and print it.
    #[arg(short = 't', value_name = "code")]
    tree: Option<String>,
}

/// Entry point for the binary. Returns the process exit code; an `Err`
/// means setup failed before any Fleet code was touched.
pub fn run() -> anyhow::Result<ExitCode> {
    init_tracing()?;

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(_) => {
            println!("{}", USAGE);
            return Ok(ExitCode::FAILURE);
        }
    };

    let code = match (cli.version, &cli.code, &cli.tree) {
        (true, None, None) => {
            println!("Fleet v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        (false, Some(code), None) => run_code(code),
        (false, None, Some(code)) => run_tree(code),
        _ => {
            println!("{}", USAGE);
            ExitCode::FAILURE
        }
    };
    Ok(code)
}

fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize logging: {error}"))
}

/// Lexes, builds, and evaluates `code` against a fresh prelude.
pub fn eval_source(code: &str) -> Result<Rc<Value>, Error> {
    let tree = build_tree(code)?;
    debug!("expression tree built, evaluating");
    let mut evaluator = Evaluator::with_prelude();
    let value = evaluator.evaluate(&tree)?;
    debug!("evaluation finished");
    Ok(value)
}

/// Lexes and builds `code`, stopping before evaluation.
pub fn build_tree(code: &str) -> Result<Rc<Expr>, Error> {
    debug!(bytes = code.len(), "lexing and building");
    Ok(parse(code)?)
}

fn run_code(code: &str) -> ExitCode {
    match eval_source(code) {
        Ok(value) => {
            println!("{}", value);
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}

fn run_tree(code: &str) -> ExitCode {
    match build_tree(code) {
        Ok(tree) => {
            println!("{}", tree);
            ExitCode::SUCCESS
        }
        Err(error) => {
            println!("Error: {}", error);
            ExitCode::FAILURE
        }
    }
}
