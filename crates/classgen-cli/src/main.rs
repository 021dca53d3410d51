//! classgen: generate class sources from a JSON object model.
//!
//! ```bash
//! # render every class node, printing the id -> source map as JSON
//! classgen generate --request model.json
//!
//! # read the request from stdin and write the map to a file
//! cat model.json | classgen generate --output sources.json
//!
//! # validate and resolve only
//! classgen check --request model.json
//! ```

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use classgen::{Config, prelude::GenerationRequest};
use serde::Serialize;
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
    process::ExitCode,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "classgen",
    author,
    version,
    about = "Generate class sources from an object model"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate, resolve and render every class node
    Generate(GenerateCmd),

    /// Validate and resolve only, printing a summary
    Check(RequestArgs),
}

#[derive(Args)]
struct RequestArgs {
    /// JSON request file; `-` reads stdin
    #[arg(long, short, default_value = "-")]
    request: PathBuf,
}

#[derive(Args)]
struct GenerateCmd {
    #[command(flatten)]
    input: RequestArgs,

    /// TOML file naming the template skeletons
    #[arg(long, short, env = "CLASSGEN_CONFIG")]
    config: Option<PathBuf>,

    /// Where to write the id -> source JSON map; stdout when omitted
    #[arg(long, short)]
    output: Option<PathBuf>,
}

///
/// CheckSummary
///

#[derive(Serialize)]
struct CheckSummary {
    target: String,
    classes: Vec<String>,
    packages: Vec<String>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Generate(cmd) => generate(&cmd),
        Commands::Check(args) => check(&args),
    }
}

fn generate(cmd: &GenerateCmd) -> Result<()> {
    let request = read_request(&cmd.input.request)?;
    let config = match &cmd.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let sources = classgen::generate(&request, &config)?;
    let json = serde_json::to_string_pretty(&sources)?;

    match &cmd.output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("failed to write output '{}'", path.display()))?;
            debug!(path = %path.display(), classes = sources.len(), "output written");
        }
        None => println!("{json}"),
    }

    Ok(())
}

fn check(args: &RequestArgs) -> Result<()> {
    let request = read_request(&args.request)?;
    let model = classgen::check(&request)?;

    let summary = CheckSummary {
        target: model.target.to_string(),
        classes: model
            .classes
            .iter()
            .map(|class| match &class.package_path {
                Some(path) => format!("{path}{}{}", model.target.package_separator(), class.name),
                None => class.name.clone(),
            })
            .collect(),
        packages: model
            .packages
            .iter()
            .filter_map(|package| package.path.clone())
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&summary)?);

    Ok(())
}

fn read_request(path: &Path) -> Result<GenerationRequest> {
    let text = if path == Path::new("-") {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("failed to read request from stdin")?;
        text
    } else {
        fs::read_to_string(path)
            .with_context(|| format!("failed to read request '{}'", path.display()))?
    };

    serde_json::from_str(&text).context("request is not a valid classgen request")
}
