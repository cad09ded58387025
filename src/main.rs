//! Named Paths CLI
//!
//! Usage:
//!   named-paths --paths <FILE> [OPTIONS] [NAME] [KEY=VALUE]...
//!
//! Options:
//!   -p, --paths <FILE>         Path table file (TOML format)
//!   -i, --ignore-extra-params  Drop parameters that fill no placeholder
//!   -s, --strict               Fail on unknown names instead of printing an empty path
//!   -l, --list                 List registered names and templates
//!   -h, --help                 Print help

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use named_paths::{Params, PathTable};

#[derive(Parser)]
#[command(name = "named-paths")]
#[command(about = "Resolve named URL path templates")]
struct Cli {
    /// Path table file (TOML format)
    #[arg(short, long)]
    paths: PathBuf,

    /// Drop parameters that fill no placeholder instead of adding a query string
    #[arg(short, long)]
    ignore_extra_params: bool,

    /// Fail on unknown names instead of printing an empty path
    #[arg(short, long)]
    strict: bool,

    /// List registered names and templates
    #[arg(short, long)]
    list: bool,

    /// Name of the path to resolve
    #[arg(required_unless_present = "list")]
    name: Option<String>,

    /// Parameters as KEY=VALUE pairs
    #[arg(value_parser = parse_param)]
    params: Vec<(String, String)>,
}

fn parse_param(arg: &str) -> Result<(String, String), String> {
    arg.split_once('=')
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", arg))
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let table = match PathTable::from_file(&cli.paths) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error loading path table '{}': {}", cli.paths.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let registry = table.into_registry();
    if cli.ignore_extra_params {
        registry.set_ignore_extra_params(true);
    }

    if cli.list {
        for name in registry.names() {
            if let Some(template) = registry.template(&name) {
                println!("{}\t{}", name, template);
            }
        }
        return ExitCode::SUCCESS;
    }

    let Some(name) = cli.name else {
        eprintln!("Error: a path name is required");
        return ExitCode::FAILURE;
    };

    // No KEY=VALUE arguments means no parameters at all, not an empty set
    let params: Option<Params> = if cli.params.is_empty() {
        None
    } else {
        Some(cli.params.into_iter().collect())
    };

    if cli.strict {
        match registry.resolve_strict(&name, params.as_ref()) {
            Ok(path) => println!("{}", path),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("{}", registry.resolve(&name, params.as_ref()));
    }

    ExitCode::SUCCESS
}
