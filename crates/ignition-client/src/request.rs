//! Request and response shapes for the launch API.

use std::collections::HashMap;

use ignition_model::{ConfigurationId, ExecutionId, Scope, VersionId};
use serde::{Deserialize, Serialize};

/// Sort order for scoped version listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
  /// Newest first, by creation time.
  NewestFirst,
}

/// How to look up workflow versions.
///
/// A point lookup goes through the same list call as a scoped listing,
/// mirroring the API surface.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VersionQuery {
  /// The most recent versions within a scope.
  Scoped {
    scope: Scope,
    limit: u32,
    sort: SortOrder,
  },
  /// Exactly one version.
  Exact { id: VersionId },
}

/// How to look up launch configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConfigurationQuery {
  /// Configurations bound to one workflow version: exact match on the
  /// workflow name and version string.
  Compatible {
    scope: Scope,
    workflow_name: String,
    workflow_version: String,
    limit: u32,
  },
  /// Exactly one configuration.
  Exact { id: ConfigurationId },
}

/// A page of listed entities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityList<T> {
  pub entities: Vec<T>,
}

impl<T> EntityList<T> {
  pub fn empty() -> Self {
    Self {
      entities: Vec::new(),
    }
  }
}

/// Request to create a workflow execution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitRequest {
  pub scope: Scope,
  pub configuration: ConfigurationId,
  pub inputs: HashMap<String, serde_json::Value>,
}

/// Response from a submission.
///
/// The id is optional at the wire level; the form treats its absence as a
/// contract violation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmitResponse {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<ExecutionId>,
}
