//! De-duplicating merge of entity listings.

use std::collections::HashSet;
use std::hash::Hash;

/// Merge two ordered sequences into one, de-duplicated by key.
///
/// Every item of `first` is kept in order, followed by the items of `second`
/// whose key has not been seen yet. The first occurrence wins for each key.
/// Used to merge a general candidate listing with an optionally fetched
/// preferred entity so the preferred entity is guaranteed present without
/// being duplicated.
pub fn merge_unique_by<T, K, F>(first: Vec<T>, second: Vec<T>, mut key: F) -> Vec<T>
where
  K: Eq + Hash,
  F: FnMut(&T) -> K,
{
  let mut seen = HashSet::new();
  let mut merged = Vec::with_capacity(first.len() + second.len());
  for item in first.into_iter().chain(second) {
    if seen.insert(key(&item)) {
      merged.push(item);
    }
  }
  merged
}
