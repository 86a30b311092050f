use std::process::ExitCode;

use clap::{ArgAction, Parser};
use tracing_subscriber::EnvFilter;
use yaml::Collision;

mod convert;
mod error;
mod utils;

use error::Result;
use utils::{long_flags, read_input, write_output};

/// Overridable at build time, e.g. `JSON2YAML_VERSION=v1.2.3 cargo build`.
const VERSION: &str = match option_env!("JSON2YAML_VERSION") {
    Some(version) => version,
    None => env!("CARGO_PKG_VERSION"),
};

const LOG_ENV: &str = "JSON2YAML_LOG";

// Boolean flags also take an explicit `=true` / `=false`, as Go's flag
// package allows.
#[derive(Parser)]
#[command(name = "json2yaml")]
#[command(about = "Convert JSON on stdin to YAML on stdout, or YAML to JSON with -yaml2json", long_about = None)]
#[command(disable_version_flag = true)]
struct Cli {
    /// Print the version and exit
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_value_t = false, default_missing_value = "true")]
    version: bool,

    /// Read YAML and write JSON
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_value_t = false, default_missing_value = "true")]
    yaml2json: bool,

    /// With -yaml2json, fail when two keys of a mapping become the same string
    #[arg(long, action = ArgAction::Set, num_args = 0..=1, require_equals = true, default_value_t = false, default_missing_value = "true")]
    strict_keys: bool,
}

impl Cli {
    fn collision(&self) -> Collision {
        if self.strict_keys {
            Collision::Reject
        } else {
            Collision::LastWins
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    if cli.version {
        println!("{VERSION}");
        return Ok(());
    }

    let input = read_input()?;
    tracing::debug!(bytes = input.len(), yaml2json = cli.yaml2json, "read stdin");

    // Nothing reaches stdout until the conversion has fully succeeded.
    let output = if cli.yaml2json {
        convert::yaml_to_json(input, cli.collision())?.into_string()
    } else {
        convert::json_to_yaml(input)?.into_string()
    };

    write_output(&output)
}

fn main() -> ExitCode {
    init_tracing();

    let cli = Cli::parse_from(long_flags(std::env::args_os()));

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
