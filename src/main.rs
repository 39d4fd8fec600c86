use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;
use std::io;
use std::path::PathBuf;

use planmatter::{candidate_dirs, run, HookPayload, Outcome, Schema};

#[derive(Parser)]
#[command(
    name = "planmatter",
    version,
    about = "PostToolUse hook that keeps front matter synchronized in plan files",
    long_about = "planmatter reads a tool-call payload as JSON on stdin and, when the \
                  payload describes a write to a markdown file inside a tracked plan \
                  directory, injects or updates the file's front matter metadata block."
)]
struct Cli {
    /// Metadata schema variant to apply
    #[arg(long, value_enum, default_value = "plan")]
    schema: SchemaKind,

    /// Override the tracked plan directory (highest priority)
    #[arg(long, value_name = "DIR")]
    plans_dir: Option<PathBuf>,
}

/// Deployed schema variants
#[derive(ValueEnum, Debug, Clone, Copy)]
enum SchemaKind {
    /// project_path, session_id, status
    Plan,
    /// created, modified, project_path, session_id, status
    Timestamped,
}

impl SchemaKind {
    fn schema(self) -> &'static Schema {
        match self {
            SchemaKind::Plan => Schema::plan(),
            SchemaKind::Timestamped => Schema::timestamped(),
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    // A payload that is not parseable JSON is the only fatal condition.
    let payload =
        HookPayload::from_reader(io::stdin().lock()).context("failed to parse hook payload")?;

    let override_dir = cli
        .plans_dir
        .or_else(|| std::env::var_os("PLANS_DIR").map(PathBuf::from));
    let plan_dirs = candidate_dirs(override_dir.as_deref());

    // Out-of-scope payloads and failed mutations both exit successfully;
    // the mutator has already logged any failure.
    if let Outcome::Updated(path) = run(&payload, &plan_dirs, cli.schema.schema()) {
        let name = path.file_name().unwrap_or(path.as_os_str());
        info!("Injected metadata into {}", name.to_string_lossy());
    }

    Ok(())
}
