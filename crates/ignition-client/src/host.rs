//! Host-side collaborators: navigation and the input-rendering capability.

use std::collections::HashMap;

use ignition_model::ExecutionId;

/// Navigation collaborator.
///
/// Called once with the new execution id when a submission succeeds;
/// fire-and-forget, the terminal transition of the form.
pub trait Navigator: Send + Sync {
  fn execution_detail(&self, id: &ExecutionId);
}

/// The input-rendering collaborator.
///
/// Owns field-level validation and the literal values the user entered. The
/// host attaches one after the input section mounts; the form depends only
/// on this contract.
pub trait FormInputs: Send + Sync {
  /// Validate all fields, returning whether the form may be submitted.
  fn validate(&self) -> bool;

  /// Current values keyed by input name.
  fn values(&self) -> HashMap<String, serde_json::Value>;
}
