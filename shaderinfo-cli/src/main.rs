//! Command-line interface for shaderinfo
//! Lists the `layout(...)` declarations of a GLSL shader, after inlining its includes.
//!
//! Usage:
//!   shaderinfo `<path>` [--format `<format>`] [--config `<file>`] [--include-keyword `<kw>`] [-v...]
//!
//! Configuration is layered: built-in defaults, then `shaderinfo.toml` in the working
//! directory if present, then the `--config` file, then command-line flags.

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use shaderinfo_babel::FormatRegistry;
use shaderinfo_config::{Loader, ShaderInfoConfig};
use shaderinfo_parser::shader::ShaderInfo;
use std::process;

const USAGE: &str = "Usage: shaderinfo <shader file>";

fn build_cli() -> Command {
    Command::new("shaderinfo")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Lists the layout declarations of a GLSL shader")
        .arg(
            Arg::new("path")
                .help("Path to the shader file")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format (text, json, yaml)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("include-keyword")
                .long("include-keyword")
                .help("Keyword marking include lines (default: #include)"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (-v info, -vv debug, -vvv trace)")
                .action(ArgAction::Count),
        )
}

fn main() {
    let matches = build_cli().try_get_matches().unwrap_or_else(|err| {
        if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) {
            err.exit();
        }
        eprintln!("{}", USAGE);
        eprintln!("{}", err);
        process::exit(1);
    });

    let config = load_config(&matches).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        process::exit(1);
    });
    init_logging(&config, matches.get_count("verbose"));

    let registry = FormatRegistry::with_defaults();
    if registry.get(&config.output.format).is_err() {
        eprintln!("Unknown format '{}'", config.output.format);
        eprintln!("\nAvailable formats:");
        for format in registry.formats() {
            eprintln!("  {} - {}", format.name(), format.description());
        }
        process::exit(1);
    }

    let path = matches
        .get_one::<String>("path")
        .expect("path is a required argument");
    handle_execute_command(&config, &registry, path);
}

fn load_config(matches: &ArgMatches) -> Result<ShaderInfoConfig, shaderinfo_config::Error> {
    let mut loader = Loader::new().with_local_file();

    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(keyword) = matches.get_one::<String>("include-keyword") {
        loader = loader.set_override("loader.include_keyword", keyword.as_str())?;
    }

    loader.build()
}

/// `RUST_LOG` wins over `-v`, which wins over the configured level
fn init_logging(config: &ShaderInfoConfig, verbose: u8) {
    let level = match verbose {
        0 => config.logging.level,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

/// Load, parse and print
///
/// Load and parse failures have already been logged by the library and exit successfully
/// with no output.
fn handle_execute_command(config: &ShaderInfoConfig, registry: &FormatRegistry, path: &str) {
    let source = match config.loader.source_loader().load(path) {
        Ok(source) => source,
        Err(_) => return,
    };

    let mut info = ShaderInfo::new();
    if info.parse(&source).is_err() {
        return;
    }

    let formatted = registry
        .serialize(info.layouts(), &config.output.format)
        .unwrap_or_else(|e| {
            eprintln!("Error formatting layouts: {}", e);
            process::exit(1);
        });

    print!("{}", formatted);
}
