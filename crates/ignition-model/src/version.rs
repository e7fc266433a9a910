use serde::{Deserialize, Serialize};

use crate::input::InputDeclaration;
use crate::scope::Scope;

/// Identifies one version of a workflow within a [`Scope`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VersionId {
  pub project: String,
  pub domain: String,
  pub name: String,
  pub version: String,
}

impl VersionId {
  pub fn new(scope: &Scope, version: impl Into<String>) -> Self {
    Self {
      project: scope.project.clone(),
      domain: scope.domain.clone(),
      name: scope.name.clone(),
      version: version.into(),
    }
  }

  /// The scope this version belongs to.
  pub fn scope(&self) -> Scope {
    Scope {
      project: self.project.clone(),
      domain: self.domain.clone(),
      name: self.name.clone(),
    }
  }
}

/// Summary entry returned by version listings.
///
/// Listings do not carry input declarations; a [`VersionRecord`] must be
/// fetched individually once a version is selected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionSummary {
  pub id: VersionId,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created_at: Option<String>,
}

/// Full specification of one workflow version, including its declared inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionRecord {
  pub id: VersionId,
  #[serde(default)]
  pub inputs: Vec<InputDeclaration>,
}
