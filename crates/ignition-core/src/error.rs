//! Form errors.

use ignition_client::ClientError;

/// Contract violations and failed submissions raised by the launch form.
///
/// Loader fetch failures are not errors here; they land in the affected
/// loader's failed state without touching sibling loaders. The contract
/// variants mark positions the state machine should structurally never
/// reach and are reported loudly rather than defaulted.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FormError {
  /// Configuration loading was invoked with no version selected.
  #[error("no workflow version selected")]
  NoVersionSelected,

  /// Submission was invoked with no launch configuration selected.
  #[error("attempting to launch with no launch configuration selected")]
  NoConfigurationSelected,

  /// Submission was invoked before the input-rendering capability was
  /// attached.
  #[error("form inputs capability is not attached")]
  InputsUnavailable,

  /// The submission response did not include an execution id.
  #[error("submission response did not include a new execution id")]
  MissingExecutionId,

  /// A configuration fetch failed.
  #[error("failed to load launch configurations")]
  Fetch {
    #[source]
    source: ClientError,
  },

  /// The submission request itself failed.
  #[error("launch submission failed")]
  Submission {
    #[source]
    source: ClientError,
  },
}
