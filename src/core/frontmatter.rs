//! Front matter codec: splitting documents into (metadata, body) and
//! rendering metadata back into a fenced block.
//!
//! The codec is deliberately not a general YAML parser. Plan metadata is a
//! flat set of scalar string fields, and anything the parser does not
//! understand degrades to "no front matter" rather than an error, so a
//! half-written or hand-mangled plan file is never rejected.

use crate::core::schema::Schema;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

/// Scalar front matter fields keyed by name.
///
/// Insertion order in the source document is irrelevant; output order is
/// always the schema order, so a plain ordered map suffices.
pub type Fields = BTreeMap<String, String>;

/// The fence line delimiting a front matter block.
pub const FENCE: &str = "---";

fn fence_region() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?s)\A---\n(.*?)\n---\n?").expect("front matter fence regex")
    })
}

/// Split `content` into an optional front matter block and the body.
///
/// Returns `(None, content)` when the document does not begin with a fence
/// or the fence region is unterminated. Within a matched region, blank
/// lines and lines without a `:` separator are skipped; later duplicate
/// keys win.
pub fn decode(content: &str) -> (Option<Fields>, &str) {
    if !content.starts_with(FENCE) {
        return (None, content);
    }

    let captures = match fence_region().captures(content) {
        Some(c) => c,
        None => return (None, content),
    };

    let region = captures.get(1).map(|m| m.as_str()).unwrap_or_default();
    let body = &content[captures.get(0).map(|m| m.end()).unwrap_or(0)..];

    let mut fields = Fields::new();
    for line in region.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        fields.insert(key.trim().to_string(), unquote(value.trim()).to_string());
    }

    (Some(fields), body)
}

/// Render `fields` into a fenced block in schema order.
///
/// Keys absent from the map or with an empty value are omitted. A value
/// containing `:` is wrapped in double quotes unless the schema marks the
/// field as plain (the `status` field stays unquoted so other tooling can
/// grep for literal states). The encoder emits no trailing newline; the
/// caller joins the block and the body with exactly one.
pub fn encode(fields: &Fields, schema: &Schema) -> String {
    let mut lines = vec![FENCE.to_string()];
    for spec in schema.fields() {
        let Some(value) = fields.get(spec.key) else {
            continue;
        };
        if value.is_empty() {
            continue;
        }
        if value.contains(':') && !spec.plain {
            lines.push(format!("{}: \"{}\"", spec.key, value));
        } else {
            lines.push(format!("{}: {}", spec.key, value));
        }
    }
    lines.push(FENCE.to_string());
    lines.join("\n")
}

/// Strip exactly one layer of matching quotes bounding the whole value.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}
