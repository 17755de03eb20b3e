//! `accessible`: inspect object schemas and drive generated accessors.
//!
//! Usage:
//!   accessible inspect --schema blog.toml
//!   accessible run --schema blog.toml --script steps.json
//!
//! Schemas are TOML files of `[[types]]` tables; scripts are JSON lists of
//! `create` and `call` steps (see `accessible_cli::Script`).

use accessible_cli::{Runner, Script, describe};
use accessible_dispatch::{ObjectGraph, TypeRegistry};
use accessible_model::SchemaFile;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "accessible")]
#[command(about = "Metadata-driven accessors for declared object types")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the accessors generated for every type in a schema file
    Inspect {
        /// Path to the TOML schema file
        #[arg(short, long)]
        schema: PathBuf,
    },
    /// Run a JSON script of create/call steps
    Run {
        /// Path to the TOML schema file
        #[arg(short, long)]
        schema: PathBuf,

        /// Path to the JSON script
        #[arg(long)]
        script: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    match args.command {
        Command::Inspect { schema } => {
            let registry = load_registry(&schema)?;
            print!("{}", describe(&registry));
        }
        Command::Run { schema, script } => {
            let registry = load_registry(&schema)?;
            let contents = std::fs::read_to_string(&script)
                .with_context(|| format!("failed to read script {}", script.display()))?;
            let script = Script::from_json_str(&contents)
                .with_context(|| format!("failed to parse script {}", script.display()))?;

            info!(steps = script.steps.len(), "Running script");
            let mut runner = Runner::new(ObjectGraph::new(Arc::new(registry)));
            for step in &script.steps {
                let output = runner.step(step)?;
                println!("{output}");
            }
        }
    }

    Ok(())
}

fn load_registry(path: &Path) -> Result<TypeRegistry> {
    let file = SchemaFile::load_from(path)
        .with_context(|| format!("failed to load schema {}", path.display()))?;
    TypeRegistry::from_schema_file(file).context("failed to register schema types")
}
