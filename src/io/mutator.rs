//! The file mutator: read, decode, merge, encode, write.

use crate::core::{compute, decode, encode, Context, Schema};
use crate::error::Result;
use log::error;
use std::fs;
use std::path::Path;

/// Inject or update front matter metadata in the plan file at `path`.
///
/// Performs exactly one read and, if the read succeeds, exactly one write.
/// I/O failures are reported on the diagnostic channel and surface as
/// `false`; they never propagate, since the host must not treat a failed
/// annotation as a reason to fail the user's original edit.
pub fn apply(path: &Path, current: &Context, schema: &Schema) -> bool {
    match rewrite(path, current, schema) {
        Ok(()) => true,
        Err(err) => {
            error!("failed to update {}: {}", path.display(), err);
            false
        }
    }
}

fn rewrite(path: &Path, current: &Context, schema: &Schema) -> Result<()> {
    let content = fs::read_to_string(path)?;

    let (existing, body) = decode(&content);
    let merged = compute(existing.as_ref(), current, schema);
    let block = encode(&merged, schema);

    fs::write(path, format!("{}\n{}", block, body.trim_start()))?;
    Ok(())
}
