use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::version::VersionId;

/// Identifies a predefined launch configuration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConfigurationId {
  pub project: String,
  pub domain: String,
  pub name: String,
}

impl ConfigurationId {
  pub fn new(
    project: impl Into<String>,
    domain: impl Into<String>,
    name: impl Into<String>,
  ) -> Self {
    Self {
      project: project.into(),
      domain: domain.into(),
      name: name.into(),
    }
  }
}

/// Fully describes a predefined launch configuration.
///
/// Listings return full records directly; no separate detail fetch exists
/// for configurations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfigurationRecord {
  pub id: ConfigurationId,
  /// The workflow version this configuration is bound to.
  pub workflow_version: VersionId,
  /// Default input value bindings supplied by the configuration.
  #[serde(default)]
  pub default_inputs: HashMap<String, serde_json::Value>,
}
