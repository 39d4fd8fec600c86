//! planmatter: keep YAML front matter synchronized in plan markdown files
//!
//! This library backs a PostToolUse hook binary: whenever a file-editing
//! tool finishes writing to a tracked plan directory, the hook injects or
//! updates a small fenced metadata block at the top of the document while
//! leaving the body untouched.
//!
//! # Features
//!
//! - **Permissive front matter codec** that round-trips scalar string
//!   fields and degrades malformed blocks to "no front matter" instead of
//!   erroring
//! - **Schema-driven merge policy** with per-field preserve-or-overwrite
//!   rules; the 3-field and 5-field deployment variants are tables, not
//!   code paths
//! - **Idempotent rewrites**: re-running the hook on its own output with
//!   the same context produces byte-identical metadata
//! - **Strict target selection** with true-subpath containment and
//!   case-insensitive extension matching
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use planmatter::{apply, Context, Schema};
//! use std::path::Path;
//!
//! let current = Context::new("/home/user/projects/demo", "session123");
//! let updated = apply(
//!     Path::new("/home/user/.agent-plans/plans/demo.md"),
//!     &current,
//!     Schema::plan(),
//! );
//! assert!(updated);
//! ```
//!
//! # Architecture
//!
//! - [`core`]: pure domain logic (codec, schemas, merge policy)
//! - [`io`]: the file mutator that rewrites plan documents in place
//! - [`hook`]: the invocation boundary (payload parsing, scope filtering,
//!   orchestration)
//! - [`error`]: library error types

// Public API exports
pub use error::{PlanMatterError, Result};

// Core types
pub use crate::core::{compute, decode, encode, Context, Fields, Schema};

// IO types
pub use io::apply;

// Hook types
pub use hook::{candidate_dirs, is_plan_file, run, HookPayload, Outcome};

// Internal modules
pub mod core;
pub mod error;
pub mod hook;
pub mod io;
