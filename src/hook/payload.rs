//! The PostToolUse invocation payload.
//!
//! The host delivers a JSON record on stdin after every tool call. Only
//! four pieces matter here: the tool name, the target file path, the
//! session id, and the working directory. Everything else is ignored.

use crate::error::Result;
use serde::Deserialize;
use std::io::Read;

/// Tool names that produce a whole-file write or an in-place edit.
const WRITE_TOOLS: &[&str] = &["Write", "Edit"];

#[derive(Debug, Clone, Deserialize)]
pub struct HookPayload {
    #[serde(default)]
    pub tool_name: String,

    #[serde(default)]
    pub tool_input: ToolInput,

    #[serde(default = "unknown_session")]
    pub session_id: String,

    #[serde(default)]
    pub cwd: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default)]
    pub file_path: String,
}

fn unknown_session() -> String {
    "unknown".to_string()
}

impl HookPayload {
    /// Parse a payload from a JSON stream (normally stdin).
    pub fn from_reader(mut reader: impl Read) -> Result<Self> {
        let mut raw = String::new();
        reader.read_to_string(&mut raw)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Whether the triggering tool rewrote file contents.
    pub fn is_write_tool(&self) -> bool {
        WRITE_TOOLS.contains(&self.tool_name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_payload() {
        let json = r#"{
            "tool_name": "Write",
            "tool_input": {"file_path": "/tmp/plan.md", "content": "irrelevant"},
            "session_id": "session123",
            "cwd": "/test/project",
            "hook_event_name": "PostToolUse"
        }"#;
        let payload = HookPayload::from_reader(json.as_bytes()).unwrap();
        assert_eq!(payload.tool_name, "Write");
        assert_eq!(payload.tool_input.file_path, "/tmp/plan.md");
        assert_eq!(payload.session_id, "session123");
        assert_eq!(payload.cwd, "/test/project");
    }

    #[test]
    fn missing_fields_are_defaulted() {
        let payload = HookPayload::from_reader("{}".as_bytes()).unwrap();
        assert_eq!(payload.tool_name, "");
        assert_eq!(payload.tool_input.file_path, "");
        assert_eq!(payload.session_id, "unknown");
        assert_eq!(payload.cwd, "");
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(HookPayload::from_reader("not json".as_bytes()).is_err());
    }

    #[test]
    fn only_write_and_edit_count_as_write_tools() {
        for (name, expected) in [
            ("Write", true),
            ("Edit", true),
            ("Read", false),
            ("Bash", false),
            ("", false),
        ] {
            let json = format!(r#"{{"tool_name": "{}"}}"#, name);
            let payload = HookPayload::from_reader(json.as_bytes()).unwrap();
            assert_eq!(payload.is_write_tool(), expected, "tool {}", name);
        }
    }
}
