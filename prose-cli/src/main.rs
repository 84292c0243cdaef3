//! Command-line interface for prose
//!
//! Usage:
//!   prose realise `<path>` [--to `<format>`] [--config `<file>`] [--debug]   - Realise a JSON tree
//!   prose formats                                                          - List output formats
//!   prose serve [--address `<addr>`] [--config `<file>`]                     - Run the TCP service
//!
//! Logging goes to stderr and is controlled with `RUST_LOG`.

use clap::{Arg, ArgAction, ArgMatches, Command};
use prose::Realiser;
use prose_babel::{Format, FormatRegistry};
use prose_config::{ConfigError, Loader, ProseConfig};
use prose_core::Element;
use prose_server::{RealiserHandler, Server};
use std::path::PathBuf;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

/// Picked up from the working directory when no `--config` is given
const LOCAL_CONFIG: &str = "prose.toml";

#[derive(Debug, Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("{path} is not a valid element tree: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Setup(#[from] prose::SetupError),
    #[error(transparent)]
    Pipeline(#[from] prose_core::PipelineError),
    #[error("nothing could be realised")]
    Unrealisable,
    #[error(transparent)]
    Server(#[from] prose_server::ServerError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let matches = build_cli().get_matches();
    let result = match matches.subcommand() {
        Some(("realise", sub)) => handle_realise_command(sub),
        Some(("formats", _)) => {
            handle_formats_command();
            Ok(())
        }
        Some(("serve", sub)) => handle_serve_command(sub),
        _ => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn build_cli() -> Command {
    let config_arg = Arg::new("config")
        .long("config")
        .short('c')
        .value_name("FILE")
        .help("TOML file layered over the built-in defaults");

    Command::new("prose")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Surface realisation: turn annotated element trees into text")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("realise")
                .about("Realise a JSON element tree and print the result")
                .arg(
                    Arg::new("path")
                        .help("Path to the JSON tree")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("to")
                        .long("to")
                        .short('t')
                        .help("Output format (see `prose formats`), or 'none' for plain text"),
                )
                .arg(config_arg.clone())
                .arg(
                    Arg::new("debug")
                        .long("debug")
                        .help("Print a tree dump after every stage to stderr")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("formats").about("List the available output formats"))
        .subcommand(
            Command::new("serve")
                .about("Serve realisation requests over TCP")
                .arg(
                    Arg::new("address")
                        .long("address")
                        .short('a')
                        .help("Address to listen on, e.g. 127.0.0.1:50007"),
                )
                .arg(config_arg),
        )
}

fn load_config(matches: &ArgMatches) -> Loader {
    match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    }
}

/// Handle the realise command
fn handle_realise_command(matches: &ArgMatches) -> Result<(), CliError> {
    let mut loader = load_config(matches);
    if let Some(format) = matches.get_one::<String>("to") {
        loader = loader.set_override("formatting.default_format", format.as_str())?;
    }
    if matches.get_flag("debug") {
        loader = loader.set_override("pipeline.debug", true)?;
    }
    let config: ProseConfig = loader.build()?;
    let realiser = Realiser::from_config(&config)?;

    let path = PathBuf::from(
        matches
            .get_one::<String>("path")
            .map(String::as_str)
            .unwrap_or_default(),
    );
    let source = std::fs::read_to_string(&path).map_err(|source| CliError::Read {
        path: path.clone(),
        source,
    })?;
    let element =
        Element::from_json(&source).map_err(|source| CliError::Parse { path, source })?;

    if element.category().is_document() {
        let realisation = realiser.realise(element)?;
        for step in &realisation.trace {
            eprintln!("== {} ==\n{}", step.stage, step.dump);
        }
        print!("{}", realisation.text);
    } else {
        let text = realiser
            .realise_sentence(element)
            .ok_or(CliError::Unrealisable)?;
        println!("{}", text);
    }
    Ok(())
}

/// Handle the formats command
fn handle_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available formats:\n");
    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}

/// Handle the serve command
fn handle_serve_command(matches: &ArgMatches) -> Result<(), CliError> {
    let mut loader = load_config(matches);
    if let Some(address) = matches.get_one::<String>("address") {
        loader = loader.set_override("server.address", address.as_str())?;
    }
    let config = loader.build()?;
    let pipeline = Realiser::from_config(&config)?.into_pipeline();
    let server = Server::new(RealiserHandler::new(pipeline), &config.server);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(async {
        let listener = tokio::net::TcpListener::bind(&config.server.address).await?;
        server
            .serve(listener, async {
                let _ = tokio::signal::ctrl_c().await;
            })
            .await?;
        Ok::<(), CliError>(())
    })
}
