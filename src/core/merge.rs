//! Merge policy: computing the metadata state that should be written.

use crate::core::frontmatter::Fields;
use crate::core::schema::{Policy, Schema};
use chrono::Utc;

/// Values supplied by the current invocation.
///
/// The timestamp is computed once at construction so that every field fed
/// from it within a single merge agrees to the second (a freshly created
/// document gets `created == modified`).
#[derive(Debug, Clone)]
pub struct Context {
    pub project_path: String,
    pub session_id: String,
    pub timestamp: String,
}

impl Context {
    /// Build a context stamped with the current UTC time.
    pub fn new(project_path: impl Into<String>, session_id: impl Into<String>) -> Self {
        Self::with_timestamp(
            project_path,
            session_id,
            Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string(),
        )
    }

    /// Build a context with an explicit timestamp.
    pub fn with_timestamp(
        project_path: impl Into<String>,
        session_id: impl Into<String>,
        timestamp: impl Into<String>,
    ) -> Self {
        Self {
            project_path: project_path.into(),
            session_id: session_id.into(),
            timestamp: timestamp.into(),
        }
    }
}

/// Compute the metadata map to write for `schema`, merging the existing
/// block (if any) with the current invocation's values.
///
/// Overwrite-always fields take the context value unconditionally.
/// Preserve-if-present fields keep a non-empty existing value and fall
/// back to their default rule otherwise. All inputs are defaulted, so
/// there is no error case.
pub fn compute(existing: Option<&Fields>, current: &Context, schema: &Schema) -> Fields {
    let mut merged = Fields::new();
    for spec in schema.fields() {
        let value = match spec.policy {
            Policy::Overwrite(source) => source.value(current).to_string(),
            Policy::Preserve(rule) => existing
                .and_then(|fields| fields.get(spec.key))
                .filter(|value| !value.is_empty())
                .cloned()
                .unwrap_or_else(|| rule.render(current)),
        };
        merged.insert(spec.key.to_string(), value);
    }
    merged
}
