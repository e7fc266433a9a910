//! Launch configuration candidates for a selected version.

use ignition_client::{ConfigurationQuery, EntityList, LaunchClient};
use ignition_model::{ConfigurationId, ConfigurationRecord, VersionId};

use crate::error::FormError;
use crate::merge::merge_unique_by;

/// Page size for the compatible-configuration listing.
pub const CONFIGURATION_LIST_LIMIT: u32 = 10;

/// Fetch launch configurations compatible with `version`, merged with the
/// preferred configuration when one is named.
///
/// The compatible listing filters on exact workflow name and version string
/// and runs concurrently with the optional preferred point lookup; a failure
/// in either fails the whole fetch. The merge is keyed by configuration
/// identity, general-list-first.
///
/// Callers gate activation on a selected version; invoking this without one
/// is a contract violation surfaced as [`FormError::NoVersionSelected`].
pub async fn fetch_configurations<C>(
  client: &C,
  version: Option<&VersionId>,
  preferred: Option<&ConfigurationId>,
) -> Result<Vec<ConfigurationRecord>, FormError>
where
  C: LaunchClient + ?Sized,
{
  let Some(version) = version else {
    return Err(FormError::NoVersionSelected);
  };

  let listing = client.list_configurations(ConfigurationQuery::Compatible {
    scope: version.scope(),
    workflow_name: version.name.clone(),
    workflow_version: version.version.clone(),
    limit: CONFIGURATION_LIST_LIMIT,
  });

  let preferred_lookup = async {
    match preferred {
      Some(id) => {
        client
          .list_configurations(ConfigurationQuery::Exact { id: id.clone() })
          .await
      }
      None => Ok(EntityList::empty()),
    }
  };

  let (listed, preferred) =
    tokio::try_join!(listing, preferred_lookup).map_err(|source| FormError::Fetch { source })?;

  Ok(merge_unique_by(
    listed.entities,
    preferred.entities,
    |record| record.id.clone(),
  ))
}
