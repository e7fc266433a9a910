//! User-entered input values that survive schema re-derivation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use serde_json::Value;

/// Keyed store of the last-known user-entered value per field.
///
/// Seeded once at construction from caller-supplied initial values. Entries
/// are never evicted when the schema changes shape, so a field reappearing
/// after disappearing gets its prior value back. Cheap to clone; clones
/// share the same store.
#[derive(Debug, Clone, Default)]
pub struct InputValueCache {
  values: Arc<RwLock<HashMap<String, Value>>>,
}

impl InputValueCache {
  pub fn new() -> Self {
    Self::default()
  }

  /// Build a cache pre-seeded with initial values.
  pub fn seeded(initial: HashMap<String, Value>) -> Self {
    Self {
      values: Arc::new(RwLock::new(initial)),
    }
  }

  /// Last-known value for a field.
  pub fn get(&self, name: &str) -> Option<Value> {
    self.values.read().unwrap().get(name).cloned()
  }

  /// Record a user-entered value.
  pub fn set(&self, name: impl Into<String>, value: Value) {
    self.values.write().unwrap().insert(name.into(), value);
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  #[test]
  fn seeded_values_are_readable() {
    let cache = InputValueCache::seeded(HashMap::from([("x".to_string(), json!(42))]));
    assert_eq!(cache.get("x"), Some(json!(42)));
    assert_eq!(cache.get("y"), None);
  }

  #[test]
  fn set_overwrites_and_persists() {
    let cache = InputValueCache::new();
    cache.set("x", json!("first"));
    cache.set("x", json!("second"));
    assert_eq!(cache.get("x"), Some(json!("second")));
  }

  #[test]
  fn clones_share_the_store() {
    let cache = InputValueCache::new();
    let handle = cache.clone();
    handle.set("x", json!(true));
    assert_eq!(cache.get("x"), Some(json!(true)));
  }
}
