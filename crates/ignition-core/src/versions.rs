//! Version candidates: a scoped listing merged with an optional preferred
//! version.

use ignition_client::{ClientError, EntityList, LaunchClient, SortOrder, VersionQuery};
use ignition_model::{Scope, VersionId, VersionSummary};

use crate::merge::merge_unique_by;

/// Page size for the scoped version listing.
pub const VERSION_LIST_LIMIT: u32 = 10;

/// Fetch candidate versions of `scope`, newest first, merged with the
/// preferred version when one is named.
///
/// The scoped listing and the preferred point lookup run concurrently and
/// the merge waits for both; a failure in either fails the whole fetch, no
/// partial results. With no preferred id the second branch resolves empty
/// without a network call. The merge is keyed by version string,
/// general-list-first, so a preferred version already present in the listing
/// is not duplicated.
pub async fn fetch_versions<C>(
  client: &C,
  scope: &Scope,
  preferred: Option<&VersionId>,
) -> Result<Vec<VersionSummary>, ClientError>
where
  C: LaunchClient + ?Sized,
{
  let listing = client.list_versions(VersionQuery::Scoped {
    scope: scope.clone(),
    limit: VERSION_LIST_LIMIT,
    sort: SortOrder::NewestFirst,
  });

  let preferred_lookup = async {
    match preferred {
      Some(id) => {
        client
          .list_versions(VersionQuery::Exact { id: id.clone() })
          .await
      }
      None => Ok(EntityList::empty()),
    }
  };

  let (listed, preferred) = tokio::try_join!(listing, preferred_lookup)?;

  Ok(merge_unique_by(
    listed.entities,
    preferred.entities,
    |summary| summary.id.version.clone(),
  ))
}
