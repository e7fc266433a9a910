//! Data model for the ignition launch form.
//!
//! These types describe the entities the form loads and submits: workflow
//! scopes, version summaries and records, launch configurations, and the
//! derived input schema.

mod configuration;
mod execution;
mod input;
mod scope;
mod version;

pub use configuration::{ConfigurationId, ConfigurationRecord};
pub use execution::ExecutionId;
pub use input::{InputDeclaration, ParsedInput};
pub use scope::Scope;
pub use version::{VersionId, VersionRecord, VersionSummary};
