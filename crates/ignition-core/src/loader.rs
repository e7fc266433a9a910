//! Keyed, re-triggerable load state with stale-response suppression.
//!
//! Each loader tracks the key of its most recent request and a generation
//! counter. A fetch captures a [`Generation`] before suspending and applies
//! its result through [`Loader::finish`], which accepts it only while that
//! generation is still current. A request superseded by a newer key can
//! never overwrite newer state: last-key-wins, not last-response-wins.

use ignition_client::ClientError;

/// Loading state exposed to the host for one fetchable value.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T, E = ClientError> {
  /// No fetch has been requested yet.
  NotStarted,
  /// A fetch is in flight.
  Loading,
  /// The most recent fetch completed.
  Loaded(T),
  /// The most recent fetch failed.
  Failed(E),
}

impl<T, E> LoadState<T, E> {
  pub fn is_loading(&self) -> bool {
    matches!(self, LoadState::Loading)
  }

  pub fn has_loaded(&self) -> bool {
    matches!(self, LoadState::Loaded(_))
  }

  /// The loaded value, if any.
  pub fn value(&self) -> Option<&T> {
    match self {
      LoadState::Loaded(value) => Some(value),
      _ => None,
    }
  }

  /// The failure, if any.
  pub fn error(&self) -> Option<&E> {
    match self {
      LoadState::Failed(error) => Some(error),
      _ => None,
    }
  }
}

/// Ticket identifying one begun fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Generation(u64);

/// A keyed loader.
///
/// `K` is the structured input the fetch is keyed by; re-triggering with an
/// unchanged key is the caller's no-op signal (see [`Loader::is_current`]),
/// which also means a failed fetch is not retried until a dependent input
/// changes.
#[derive(Debug)]
pub struct Loader<K, T, E = ClientError> {
  key: Option<K>,
  generation: u64,
  state: LoadState<T, E>,
}

impl<K, T, E> Loader<K, T, E> {
  pub fn new() -> Self {
    Self {
      key: None,
      generation: 0,
      state: LoadState::NotStarted,
    }
  }

  /// Begin a fetch for `key`, superseding any in-flight fetch.
  pub fn begin(&mut self, key: K) -> Generation {
    self.generation += 1;
    self.key = Some(key);
    self.state = LoadState::Loading;
    Generation(self.generation)
  }

  /// Apply a completed fetch.
  ///
  /// Returns `false` and leaves the state untouched when `generation` has
  /// been superseded by a newer [`begin`](Self::begin) or
  /// [`reset`](Self::reset).
  pub fn finish(&mut self, generation: Generation, result: Result<T, E>) -> bool {
    if generation.0 != self.generation {
      return false;
    }
    self.state = match result {
      Ok(value) => LoadState::Loaded(value),
      Err(error) => LoadState::Failed(error),
    };
    true
  }

  /// Drop any loaded value and supersede any in-flight fetch.
  pub fn reset(&mut self) {
    self.generation += 1;
    self.key = None;
    self.state = LoadState::NotStarted;
  }

  /// Whether `key` is already the loader's current request key.
  pub fn is_current(&self, key: &K) -> bool
  where
    K: PartialEq,
  {
    self.key.as_ref() == Some(key)
  }

  /// Whether a fetch for `key` is already underway or has succeeded.
  ///
  /// A failed fetch does not settle its key: re-triggering with the same
  /// key retries it. Nothing retries automatically; this is the explicit
  /// retry path owned by the caller.
  pub fn is_settled(&self, key: &K) -> bool
  where
    K: PartialEq,
  {
    self.is_current(key) && !matches!(self.state, LoadState::Failed(_))
  }

  /// Key of the most recent request, if any.
  pub fn key(&self) -> Option<&K> {
    self.key.as_ref()
  }

  pub fn state(&self) -> &LoadState<T, E> {
    &self.state
  }
}

impl<K, T, E> Default for Loader<K, T, E> {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn transport(message: &str) -> ClientError {
    ClientError::Transport {
      message: message.to_string(),
    }
  }

  #[test]
  fn current_result_is_applied() {
    let mut loader: Loader<&str, u32> = Loader::new();
    let generation = loader.begin("k1");
    assert!(loader.state().is_loading());

    assert!(loader.finish(generation, Ok(7)));
    assert_eq!(loader.state().value(), Some(&7));
  }

  #[test]
  fn superseded_result_is_discarded() {
    let mut loader: Loader<&str, u32> = Loader::new();
    let stale = loader.begin("k1");
    let current = loader.begin("k2");

    assert!(!loader.finish(stale, Ok(1)));
    assert!(loader.state().is_loading());

    assert!(loader.finish(current, Ok(2)));
    assert_eq!(loader.state().value(), Some(&2));

    // a second completion of the stale request changes nothing either
    assert!(!loader.finish(stale, Ok(1)));
    assert_eq!(loader.state().value(), Some(&2));
  }

  #[test]
  fn reset_supersedes_in_flight_fetch() {
    let mut loader: Loader<&str, u32> = Loader::new();
    let generation = loader.begin("k1");
    loader.reset();

    assert!(!loader.finish(generation, Ok(1)));
    assert_eq!(*loader.state(), LoadState::NotStarted);
    assert_eq!(loader.key(), None);
  }

  #[test]
  fn failure_lands_in_failed_state() {
    let mut loader: Loader<&str, u32> = Loader::new();
    let generation = loader.begin("k1");

    assert!(loader.finish(generation, Err(transport("boom"))));
    assert_eq!(loader.state().error(), Some(&transport("boom")));
    assert!(loader.is_current(&"k1"));
  }

  #[test]
  fn failed_key_is_not_settled() {
    let mut loader: Loader<&str, u32> = Loader::new();
    let generation = loader.begin("k1");
    assert!(loader.is_settled(&"k1"));

    loader.finish(generation, Err(transport("boom")));
    // same key may be retried after a failure
    assert!(!loader.is_settled(&"k1"));

    let retry = loader.begin("k1");
    assert!(loader.is_settled(&"k1"));
    assert!(loader.finish(retry, Ok(9)));
    assert_eq!(loader.state().value(), Some(&9));
    assert!(loader.is_settled(&"k1"));
  }

  #[test]
  fn is_current_tracks_latest_key() {
    let mut loader: Loader<&str, u32> = Loader::new();
    assert!(!loader.is_current(&"k1"));

    loader.begin("k1");
    assert!(loader.is_current(&"k1"));

    loader.begin("k2");
    assert!(!loader.is_current(&"k1"));
    assert!(loader.is_current(&"k2"));
  }
}
