//! Metadata schemas modeled as data.
//!
//! The two deployed hook variants differ only in their field set: the plan
//! schema carries three fields, the timestamped schema adds a creation and
//! a modification timestamp. Both are expressed as an ordered list of
//! [`FieldSpec`] entries driving one generic merge function, so a new
//! variant is a new table, not a new code path.

use crate::core::merge::Context;

/// Which value from the invocation context feeds an overwrite-always field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    /// The working directory of the project being edited.
    ProjectPath,
    /// The editing session identifier.
    SessionId,
    /// The timestamp computed once per invocation.
    Timestamp,
}

/// Default rule for a preserve-if-present field whose existing value is
/// missing or empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultRule {
    /// A fixed literal, e.g. `todo` for a fresh status.
    Literal(&'static str),
    /// The invocation timestamp, e.g. for a first-time `created` field.
    Timestamp,
}

/// Per-field preservation policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Always replaced with the current invocation's value.
    Overwrite(Source),
    /// Kept from the existing block when set, defaulted otherwise.
    Preserve(DefaultRule),
}

/// One recognized field: its key, merge policy, and quoting behavior.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub key: &'static str,
    pub policy: Policy,
    /// Plain fields are never quoted on output, even when the value
    /// contains the separator character.
    pub plain: bool,
}

/// An ordered set of recognized fields. Keys outside the schema are
/// dropped on rewrite.
#[derive(Debug, Clone, Copy)]
pub struct Schema {
    name: &'static str,
    fields: &'static [FieldSpec],
}

const PLAN_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "project_path",
        policy: Policy::Overwrite(Source::ProjectPath),
        plain: false,
    },
    FieldSpec {
        key: "session_id",
        policy: Policy::Overwrite(Source::SessionId),
        plain: false,
    },
    FieldSpec {
        key: "status",
        policy: Policy::Preserve(DefaultRule::Literal("todo")),
        plain: true,
    },
];

const TIMESTAMPED_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "created",
        policy: Policy::Preserve(DefaultRule::Timestamp),
        plain: false,
    },
    FieldSpec {
        key: "modified",
        policy: Policy::Overwrite(Source::Timestamp),
        plain: false,
    },
    FieldSpec {
        key: "project_path",
        policy: Policy::Overwrite(Source::ProjectPath),
        plain: false,
    },
    FieldSpec {
        key: "session_id",
        policy: Policy::Overwrite(Source::SessionId),
        plain: false,
    },
    FieldSpec {
        key: "status",
        policy: Policy::Preserve(DefaultRule::Literal("todo")),
        plain: true,
    },
];

static PLAN: Schema = Schema {
    name: "plan",
    fields: PLAN_FIELDS,
};

static TIMESTAMPED: Schema = Schema {
    name: "timestamped",
    fields: TIMESTAMPED_FIELDS,
};

impl Schema {
    /// The 3-field schema: `project_path`, `session_id`, `status`.
    pub fn plan() -> &'static Schema {
        &PLAN
    }

    /// The 5-field schema: `created`, `modified`, `project_path`,
    /// `session_id`, `status`.
    pub fn timestamped() -> &'static Schema {
        &TIMESTAMPED
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Recognized fields in canonical output order.
    pub fn fields(&self) -> &'static [FieldSpec] {
        self.fields
    }
}

impl Source {
    pub fn value<'a>(&self, current: &'a Context) -> &'a str {
        match self {
            Source::ProjectPath => &current.project_path,
            Source::SessionId => &current.session_id,
            Source::Timestamp => &current.timestamp,
        }
    }
}

impl DefaultRule {
    pub fn render(&self, current: &Context) -> String {
        match self {
            DefaultRule::Literal(value) => (*value).to_string(),
            DefaultRule::Timestamp => current.timestamp.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_schema_order() {
        let keys: Vec<_> = Schema::plan().fields().iter().map(|f| f.key).collect();
        assert_eq!(keys, ["project_path", "session_id", "status"]);
    }

    #[test]
    fn timestamped_schema_order() {
        let keys: Vec<_> = Schema::timestamped().fields().iter().map(|f| f.key).collect();
        assert_eq!(
            keys,
            ["created", "modified", "project_path", "session_id", "status"]
        );
    }

    #[test]
    fn status_is_the_only_plain_field() {
        for schema in [Schema::plan(), Schema::timestamped()] {
            for spec in schema.fields() {
                assert_eq!(spec.plain, spec.key == "status", "field {}", spec.key);
            }
        }
    }
}
