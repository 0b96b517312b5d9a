//! Hook payload and the tool request it describes.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use std::path::Path;

use super::error::GuardError;

// ============================================================================
// Raw Payload
// ============================================================================

/// The PreToolUse payload as sent by the agent.
///
/// Only the fields the guard needs are decoded; everything else
/// (`session_id`, `transcript_path`, ...) is ignored. The fields are kept
/// loosely typed: their shape only matters for the tools that get checked.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HookInput {
    /// Name of the tool about to run.
    #[serde(default)]
    pub tool_name: Value,

    /// Tool arguments, shape depends on `tool_name`.
    #[serde(default)]
    pub tool_input: Value,

    /// Working directory of the agent session.
    #[serde(default)]
    pub cwd: Value,
}

impl HookInput {
    /// The tool name; non-string names are rendered as JSON.
    pub fn tool_name(&self) -> String {
        match &self.tool_name {
            Value::String(name) => name.clone(),
            Value::Null => String::new(),
            other => other.to_string(),
        }
    }

    /// The `cwd` hint, if it is a non-empty string.
    pub fn cwd(&self) -> Option<&Path> {
        self.cwd.as_str().filter(|cwd| !cwd.is_empty()).map(Path::new)
    }

    /// Decode `tool_input` into the request matching `tool_name`.
    pub fn to_request(&self) -> Result<ToolRequest, GuardError> {
        match &self.tool_name {
            Value::String(name) => ToolRequest::from_parts(name, &self.tool_input),
            _ => Ok(ToolRequest::Other(self.tool_name())),
        }
    }
}

// ============================================================================
// Typed Request
// ============================================================================

/// Arguments of the `Write`, `Edit` and `MultiEdit` tools.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FileTarget {
    #[serde(default)]
    pub file_path: Option<String>,
}

/// Arguments of the `NotebookEdit` tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NotebookTarget {
    #[serde(default)]
    pub notebook_path: Option<String>,
}

/// One pending tool invocation, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolRequest {
    WriteFile(FileTarget),
    EditFile(FileTarget),
    MultiEdit(FileTarget),
    EditNotebook(NotebookTarget),
    /// Any tool that does not modify files; never inspected.
    Other(String),
}

impl ToolRequest {
    /// Build the request for `tool_name` from its raw arguments.
    ///
    /// `tool_input` is only inspected for the file-modifying tools; a
    /// missing or `null` value counts as an empty object.
    pub fn from_parts(tool_name: &str, tool_input: &Value) -> Result<Self, GuardError> {
        let request = match tool_name {
            "Write" => Self::WriteFile(decode(tool_name, tool_input)?),
            "Edit" => Self::EditFile(decode(tool_name, tool_input)?),
            "MultiEdit" => Self::MultiEdit(decode(tool_name, tool_input)?),
            "NotebookEdit" => Self::EditNotebook(decode(tool_name, tool_input)?),
            other => Self::Other(other.to_string()),
        };
        Ok(request)
    }

    /// The tool name this request was decoded from.
    pub fn tool_name(&self) -> &str {
        match self {
            Self::WriteFile(_) => "Write",
            Self::EditFile(_) => "Edit",
            Self::MultiEdit(_) => "MultiEdit",
            Self::EditNotebook(_) => "NotebookEdit",
            Self::Other(name) => name,
        }
    }

    /// The path the operation would modify, if any.
    ///
    /// Empty strings count as absent.
    pub fn target_path(&self) -> Option<&str> {
        let path = match self {
            Self::WriteFile(target) | Self::EditFile(target) | Self::MultiEdit(target) => {
                target.file_path.as_deref()
            }
            Self::EditNotebook(target) => target.notebook_path.as_deref(),
            Self::Other(_) => None,
        };
        path.filter(|path| !path.is_empty())
    }
}

fn decode<T: DeserializeOwned>(tool_name: &str, tool_input: &Value) -> Result<T, GuardError> {
    let tool_input = match tool_input {
        Value::Null => Value::Object(Map::new()),
        other => other.clone(),
    };
    serde_json::from_value(tool_input).map_err(|e| GuardError::invalid_tool_input(tool_name, e))
}
