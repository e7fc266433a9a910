use serde::{Deserialize, Serialize};

/// Unique identifier of a created workflow execution.
///
/// Returned by a successful submission; its presence is the only success
/// signal the form relies on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ExecutionId {
  pub project: String,
  pub domain: String,
  pub name: String,
}
