//! Launch API client contract.

use async_trait::async_trait;
use ignition_model::{ConfigurationRecord, VersionId, VersionRecord, VersionSummary};

use crate::error::ClientError;
use crate::request::{
  ConfigurationQuery, EntityList, SubmitRequest, SubmitResponse, VersionQuery,
};

/// The transport client the launch form consumes.
#[async_trait]
pub trait LaunchClient: Send + Sync {
  /// List workflow versions matching a query.
  async fn list_versions(
    &self,
    query: VersionQuery,
  ) -> Result<EntityList<VersionSummary>, ClientError>;

  /// Fetch the full specification of one version.
  ///
  /// Listings return summaries only, so this runs once a version has been
  /// selected.
  async fn fetch_version_detail(&self, id: &VersionId) -> Result<VersionRecord, ClientError>;

  /// List launch configurations matching a query.
  async fn list_configurations(
    &self,
    query: ConfigurationQuery,
  ) -> Result<EntityList<ConfigurationRecord>, ClientError>;

  /// Create a workflow execution.
  async fn submit(&self, request: SubmitRequest) -> Result<SubmitResponse, ClientError>;
}
