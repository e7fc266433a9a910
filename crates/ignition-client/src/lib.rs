//! Capability contracts consumed by the ignition launch form.
//!
//! The form depends on these interfaces only; transports, routing, and input
//! rendering are owned by the host.

mod client;
mod error;
mod host;
mod request;

pub use client::LaunchClient;
pub use error::ClientError;
pub use host::{FormInputs, Navigator};
pub use request::{
  ConfigurationQuery, EntityList, SortOrder, SubmitRequest, SubmitResponse, VersionQuery,
};
