use serde::{Deserialize, Serialize};

/// Immutable identity of the workflow family being launched.
///
/// Supplied by the caller when the form is created and never mutated by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
  pub project: String,
  pub domain: String,
  pub name: String,
}

impl Scope {
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
