//! Client errors.

/// Errors surfaced by the launch API client.
///
/// Cloneable so a loader can hold its failed state as a plain value for the
/// host to display.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ClientError {
  /// Transport-level failure (connection, timeout, serialization).
  #[error("transport error: {message}")]
  Transport { message: String },

  /// The API answered with a non-success status.
  #[error("request failed with status {code}: {message}")]
  Status { code: u16, message: String },
}
