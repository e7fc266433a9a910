//! Cascading loaders and form state for launching workflow executions.
//!
//! The [`LaunchForm`] orchestrator owns selection state for a workflow
//! version and a launch configuration, loads candidates for both through
//! keyed, stale-suppressed loaders, derives the typed input schema from the
//! selected pair, and drives the submission lifecycle.

mod cache;
mod configurations;
mod error;
mod form;
mod loader;
mod merge;
mod schema;
mod versions;

pub use cache::InputValueCache;
pub use configurations::{CONFIGURATION_LIST_LIMIT, fetch_configurations};
pub use error::FormError;
pub use form::{FormSnapshot, InitialParameters, LaunchForm, SubmitOutcome};
pub use loader::{Generation, LoadState, Loader};
pub use merge::merge_unique_by;
pub use schema::{derive_inputs, form_key};
pub use versions::{VERSION_LIST_LIMIT, fetch_versions};
