//! Hook orchestration: payload in, at most one file mutation out.

use crate::core::{Context, Schema};
use crate::hook::payload::HookPayload;
use crate::hook::scope::{expand_tilde, is_plan_file, normalize};
use crate::io::apply;
use log::debug;
use std::path::PathBuf;

/// What a single invocation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Out of scope; nothing was attempted. Not an error.
    Skipped,
    /// The plan file was rewritten.
    Updated(PathBuf),
    /// The plan file was in scope but could not be rewritten.
    Failed(PathBuf),
}

/// Apply the hook to one payload.
///
/// Scope mismatches (wrong tool, missing path, foreign directory, wrong
/// extension) are silent no-ops. Mutation failures have already been
/// reported by the mutator; the caller decides whether to surface them,
/// and the process exits successfully either way.
pub fn run(payload: &HookPayload, plan_dirs: &[PathBuf], schema: &Schema) -> Outcome {
    if !payload.is_write_tool() {
        debug!("ignoring tool {:?}", payload.tool_name);
        return Outcome::Skipped;
    }

    if payload.tool_input.file_path.is_empty() {
        return Outcome::Skipped;
    }
    let path = normalize(&expand_tilde(payload.tool_input.file_path.as_ref()));

    if !is_plan_file(&path, plan_dirs) {
        debug!("{} is not a tracked plan file", path.display());
        return Outcome::Skipped;
    }

    let current = Context::new(&payload.cwd, &payload.session_id);
    if apply(&path, &current, schema) {
        Outcome::Updated(path)
    } else {
        Outcome::Failed(path)
    }
}
