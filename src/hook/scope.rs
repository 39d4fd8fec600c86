//! Target selection: which files this hook is allowed to touch.
//!
//! A file is in scope only when it lives under one of the candidate plan
//! roots and carries the markdown extension. Containment is tested on
//! path components, never on string prefixes, so `/a/plans-archive` is
//! not inside `/a/plans`.

use std::path::{Component, Path, PathBuf};

/// Resolve the ordered list of plan directories handled by this hook.
///
/// Priority: the explicit override (CLI flag or `PLANS_DIR`, resolved by
/// the caller), then `~/.agent-plans/plans`, then the legacy
/// `~/.claude/plans`. Duplicates after normalization are removed keeping
/// the first occurrence.
pub fn candidate_dirs(override_dir: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(dir) = override_dir {
        candidates.push(expand_tilde(dir));
    }
    if let Some(home) = dirs::home_dir() {
        candidates.push(home.join(".agent-plans").join("plans"));
        candidates.push(home.join(".claude").join("plans"));
    }
    dedup_normalized(candidates)
}

/// True when `path` belongs to one of `plan_dirs` and is a markdown file.
pub fn is_plan_file(path: &Path, plan_dirs: &[PathBuf]) -> bool {
    is_markdown(path) && is_contained(path, plan_dirs)
}

pub fn is_markdown(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case("md"))
        .unwrap_or(false)
}

fn is_contained(path: &Path, plan_dirs: &[PathBuf]) -> bool {
    let path = normalize(path);
    plan_dirs.iter().any(|dir| path.starts_with(dir))
}

/// Expand a leading `~` to the user's home directory.
pub fn expand_tilde(path: &Path) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return path.to_path_buf();
    };
    if path == Path::new("~") {
        return home;
    }
    match path.strip_prefix("~") {
        Ok(rest) => home.join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Lexically normalize a path: drop `.` components and resolve `..`
/// against the preceding component. No filesystem access, so paths that
/// do not exist yet normalize the same way as paths that do.
pub fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push(component.as_os_str());
                }
            }
            _ => normalized.push(component.as_os_str()),
        }
    }
    normalized
}

pub(crate) fn dedup_normalized(candidates: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut unique: Vec<PathBuf> = Vec::new();
    for candidate in candidates {
        let candidate = normalize(&candidate);
        if !unique.contains(&candidate) {
            unique.push(candidate);
        }
    }
    unique
}
