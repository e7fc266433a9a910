use serde::{Deserialize, Serialize};

/// One input declared by a workflow version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputDeclaration {
  pub name: String,
  /// Declared type, e.g. "string", "integer", "boolean".
  pub type_name: String,
  #[serde(default)]
  pub required: bool,
  /// Default value declared by the version itself, if any.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub default: Option<serde_json::Value>,
}

/// One field of the derived input schema.
///
/// Fields form an ordered sequence; order carries meaning for rendering and
/// for form-key stability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedInput {
  pub name: String,
  pub type_name: String,
  pub required: bool,
  /// Value to pre-fill, from the configuration binding or the declaration.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub initial_value: Option<serde_json::Value>,
}
