//! The launch form orchestrator.
//!
//! Owns selection state for the workflow version and launch configuration,
//! the keyed loaders behind them, the derived input schema and form key,
//! error visibility, and the submission lifecycle. Each public method is a
//! discrete state-transition handler; derived values (schema, form key) are
//! recomputed from their declared inputs whenever those change, never on
//! their own.
//!
//! The interior lock is never held across an await. Every fetch captures a
//! loader generation before suspending and applies its result through the
//! loader, so a response belonging to a superseded request is discarded.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use ignition_client::{FormInputs, LaunchClient, Navigator, SubmitRequest};
use ignition_model::{
  ConfigurationId, ConfigurationRecord, ExecutionId, ParsedInput, Scope, VersionId,
  VersionRecord, VersionSummary,
};
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::cache::InputValueCache;
use crate::configurations::fetch_configurations;
use crate::error::FormError;
use crate::loader::{LoadState, Loader};
use crate::schema::{derive_inputs, form_key};
use crate::versions::fetch_versions;

/// Caller-supplied parameters that pre-select and pre-fill the form.
#[derive(Debug, Clone, Default)]
pub struct InitialParameters {
  /// Version to surface in the candidate list even when it is not among the
  /// most recent entries.
  pub version: Option<VersionId>,
  /// Configuration to surface in the candidate list.
  pub configuration: Option<ConfigurationId>,
  /// Initial input values, seeded into the value cache once.
  pub values: HashMap<String, Value>,
}

/// Outcome of a submit attempt that did not hit an error.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
  /// The execution was created and navigation has been triggered.
  Launched(ExecutionId),
  /// Local validation failed; errors are now shown, nothing was sent.
  ValidationFailed,
  /// A submission for the same form key is already in flight; no second
  /// request was issued.
  AlreadyPending,
  /// The form key changed while the request was in flight; the result was
  /// discarded and no navigation happened.
  Superseded,
}

/// Everything the host needs to render the form, captured at one instant.
#[derive(Debug, Clone)]
pub struct FormSnapshot {
  pub versions: LoadState<Vec<VersionSummary>>,
  pub version_detail: LoadState<VersionRecord>,
  pub configurations: LoadState<Vec<ConfigurationRecord>>,
  pub selected_version: Option<VersionSummary>,
  pub selected_configuration: Option<ConfigurationRecord>,
  /// Ordered input schema derived from the selected pair.
  pub inputs: Vec<ParsedInput>,
  /// Content key of the current schema; empty until both selections exist.
  /// A change signals the rendering layer to re-mount the input section.
  pub form_key: String,
  /// Whether validation errors should be displayed.
  pub show_errors: bool,
  pub submission: LoadState<ExecutionId, FormError>,
}

impl FormSnapshot {
  /// Combined readiness of everything the input section depends on: the
  /// full version record and the configuration listing.
  pub fn input_loading(&self) -> LoadState<()> {
    if let Some(error) = self
      .version_detail
      .error()
      .or_else(|| self.configurations.error())
    {
      return LoadState::Failed(error.clone());
    }
    if self.version_detail.is_loading() || self.configurations.is_loading() {
      return LoadState::Loading;
    }
    if self.version_detail.has_loaded() && self.configurations.has_loaded() {
      return LoadState::Loaded(());
    }
    LoadState::NotStarted
  }
}

type VersionsKey = (Scope, Option<VersionId>);
type ConfigurationsKey = (VersionId, Option<ConfigurationId>);

struct FormState {
  versions: Loader<VersionsKey, Vec<VersionSummary>>,
  version_detail: Loader<VersionId, VersionRecord>,
  configurations: Loader<ConfigurationsKey, Vec<ConfigurationRecord>>,
  selected_version: Option<VersionSummary>,
  selected_configuration: Option<ConfigurationRecord>,
  inputs: Vec<ParsedInput>,
  form_key: String,
  show_errors: bool,
  submission: Loader<String, ExecutionId, FormError>,
  inputs_handle: Option<Arc<dyn FormInputs>>,
}

impl FormState {
  fn new() -> Self {
    Self {
      versions: Loader::new(),
      version_detail: Loader::new(),
      configurations: Loader::new(),
      selected_version: None,
      selected_configuration: None,
      inputs: Vec::new(),
      form_key: String::new(),
      show_errors: false,
      submission: Loader::new(),
      inputs_handle: None,
    }
  }

  /// Record a version selection.
  ///
  /// Clears the configuration selection in the same transition: a
  /// configuration belonging to another version is invalid, and the field
  /// group is about to change. Supersedes any in-flight detail or
  /// configuration fetch for the previous version.
  fn apply_version_selection(&mut self, version: VersionSummary) {
    self.selected_configuration = None;
    self.configurations.reset();
    self.version_detail.reset();
    self.selected_version = Some(version);
    self.recompute_schema();
  }

  /// Recompute the derived schema and form key.
  ///
  /// The key stays the empty sentinel until both a version and a
  /// configuration are selected. Whenever the key changes, previously shown
  /// validation errors are hidden until the next submit attempt.
  fn recompute_schema(&mut self) {
    self.inputs = derive_inputs(
      self.version_detail.state().value(),
      self.selected_configuration.as_ref(),
    );
    let key = if self.selected_version.is_some() && self.selected_configuration.is_some() {
      form_key(&self.inputs)
    } else {
      String::new()
    };
    if key != self.form_key {
      self.show_errors = false;
      self.form_key = key;
    }
  }
}

/// Form state for launching one workflow.
///
/// Cheap to share behind an [`Arc`]; all methods take `&self` so the host
/// may drive selections and loads concurrently. Construction takes the
/// immutable [`Scope`] plus [`InitialParameters`];
/// [`load_versions`](Self::load_versions) starts the cascade.
pub struct LaunchForm<C, N> {
  client: Arc<C>,
  navigator: Arc<N>,
  scope: Scope,
  preferred_version: Option<VersionId>,
  preferred_configuration: Option<ConfigurationId>,
  value_cache: InputValueCache,
  state: Mutex<FormState>,
  on_close: Box<dyn Fn() + Send + Sync>,
}

impl<C, N> LaunchForm<C, N>
where
  C: LaunchClient,
  N: Navigator,
{
  pub fn new(
    scope: Scope,
    initial: InitialParameters,
    client: Arc<C>,
    navigator: Arc<N>,
    on_close: impl Fn() + Send + Sync + 'static,
  ) -> Self {
    Self {
      client,
      navigator,
      scope,
      preferred_version: initial.version,
      preferred_configuration: initial.configuration,
      value_cache: InputValueCache::seeded(initial.values),
      state: Mutex::new(FormState::new()),
      on_close: Box::new(on_close),
    }
  }

  /// Name of the workflow family this form launches.
  pub fn workflow_name(&self) -> &str {
    &self.scope.name
  }

  /// Shared handle to the user-entered value cache, for pre-filling fields.
  pub fn value_cache(&self) -> InputValueCache {
    self.value_cache.clone()
  }

  /// Attach the input-rendering capability once its section has mounted.
  pub fn attach_inputs(&self, inputs: Arc<dyn FormInputs>) {
    self.state.lock().unwrap().inputs_handle = Some(inputs);
  }

  /// Capture the current state for rendering.
  pub fn snapshot(&self) -> FormSnapshot {
    let state = self.state.lock().unwrap();
    FormSnapshot {
      versions: state.versions.state().clone(),
      version_detail: state.version_detail.state().clone(),
      configurations: state.configurations.state().clone(),
      selected_version: state.selected_version.clone(),
      selected_configuration: state.selected_configuration.clone(),
      inputs: state.inputs.clone(),
      form_key: state.form_key.clone(),
      show_errors: state.show_errors,
      submission: state.submission.state().clone(),
    }
  }

  /// Delegate to the caller-supplied close handler.
  pub fn cancel(&self) {
    (self.on_close)();
  }

  /// Load candidate versions and auto-select a default.
  ///
  /// The fetch is keyed on (scope, preferred version); re-running with
  /// unchanged inputs is a no-op once a load is underway or complete, which
  /// also makes the auto-select fire at most once per distinct listing. A
  /// failed listing does not settle its key, so calling again after a
  /// failure retries the fetch. On a successful completion with no version
  /// selected yet, the first merged entry is selected and the dependent
  /// loads cascade.
  pub async fn load_versions(&self) {
    let generation = {
      let mut state = self.state.lock().unwrap();
      let key = (self.scope.clone(), self.preferred_version.clone());
      if state.versions.is_settled(&key) {
        return;
      }
      state.versions.begin(key)
    };

    let result = fetch_versions(
      self.client.as_ref(),
      &self.scope,
      self.preferred_version.as_ref(),
    )
    .await;

    let auto_selected = {
      let mut state = self.state.lock().unwrap();
      match result {
        Ok(versions) => {
          if !state.versions.finish(generation, Ok(versions)) {
            warn!(
              workflow = %self.scope.name,
              "discarding superseded version listing response"
            );
            return;
          }
          if state.selected_version.is_some() {
            false
          } else {
            let first = state
              .versions
              .state()
              .value()
              .and_then(|listing| listing.first().cloned());
            match first {
              Some(first) => {
                info!(
                  workflow = %self.scope.name,
                  version = %first.id.version,
                  "auto-selecting first workflow version"
                );
                state.apply_version_selection(first);
                true
              }
              None => false,
            }
          }
        }
        Err(err) => {
          if state.versions.finish(generation, Err(err.clone())) {
            error!(
              workflow = %self.scope.name,
              error = %err,
              "failed to load workflow versions"
            );
          }
          false
        }
      }
    };

    if auto_selected {
      self.refresh_dependents().await;
    }
  }

  /// Select a workflow version.
  ///
  /// Clears any configuration selection synchronously, then reloads the
  /// version detail and the compatible configuration listing.
  pub async fn select_version(&self, version: VersionSummary) {
    {
      let mut state = self.state.lock().unwrap();
      info!(
        workflow = %self.scope.name,
        version = %version.id.version,
        "workflow version selected"
      );
      state.apply_version_selection(version);
    }
    self.refresh_dependents().await;
  }

  /// Select a launch configuration. Re-derives the schema.
  pub fn select_configuration(&self, configuration: ConfigurationRecord) {
    let mut state = self.state.lock().unwrap();
    info!(
      workflow = %self.scope.name,
      configuration = %configuration.id.name,
      "launch configuration selected"
    );
    state.selected_configuration = Some(configuration);
    state.recompute_schema();
  }

  /// Reload everything that depends on the selected version: the full
  /// version record and the compatible configuration listing, concurrently.
  async fn refresh_dependents(&self) {
    let (_, _) = tokio::join!(self.load_version_detail(), self.load_configurations());
  }

  /// Fetch the full record of the selected version and re-derive the schema.
  async fn load_version_detail(&self) {
    let (id, generation) = {
      let mut state = self.state.lock().unwrap();
      let Some(selected) = state.selected_version.clone() else {
        return;
      };
      let id = selected.id;
      if state.version_detail.is_settled(&id) {
        return;
      }
      let generation = state.version_detail.begin(id.clone());
      (id, generation)
    };

    let result = self.client.fetch_version_detail(&id).await;

    let mut state = self.state.lock().unwrap();
    match result {
      Ok(record) => {
        if state.version_detail.finish(generation, Ok(record)) {
          info!(
            workflow = %self.scope.name,
            version = %id.version,
            "workflow version detail loaded"
          );
          state.recompute_schema();
        } else {
          warn!(
            workflow = %self.scope.name,
            version = %id.version,
            "discarding superseded version detail response"
          );
        }
      }
      Err(err) => {
        if state.version_detail.finish(generation, Err(err.clone())) {
          error!(
            workflow = %self.scope.name,
            version = %id.version,
            error = %err,
            "failed to load workflow version detail"
          );
        }
      }
    }
  }

  /// Load launch configurations compatible with the selected version and
  /// auto-select the one named after the workflow, when present.
  ///
  /// Intentionally no first-item fallback: configurations carry no recency
  /// ordering, unlike versions. Invoking with no version selected is a
  /// contract violation.
  pub async fn load_configurations(&self) -> Result<(), FormError> {
    let (version, generation) = {
      let mut state = self.state.lock().unwrap();
      let Some(selected) = state.selected_version.clone() else {
        return Err(FormError::NoVersionSelected);
      };
      let key = (selected.id.clone(), self.preferred_configuration.clone());
      if state.configurations.is_settled(&key) {
        return Ok(());
      }
      let generation = state.configurations.begin(key);
      (selected.id, generation)
    };

    let result = fetch_configurations(
      self.client.as_ref(),
      Some(&version),
      self.preferred_configuration.as_ref(),
    )
    .await;

    let mut state = self.state.lock().unwrap();
    match result {
      Ok(records) => {
        if !state.configurations.finish(generation, Ok(records)) {
          warn!(
            workflow = %self.scope.name,
            version = %version.version,
            "discarding superseded configuration listing response"
          );
          return Ok(());
        }
        if state.selected_configuration.is_none() {
          let named_after_workflow = state
            .configurations
            .state()
            .value()
            .and_then(|records| {
              records
                .iter()
                .find(|record| record.id.name == self.scope.name)
            })
            .cloned();
          if let Some(record) = named_after_workflow {
            info!(
              workflow = %self.scope.name,
              configuration = %record.id.name,
              "auto-selecting launch configuration"
            );
            state.selected_configuration = Some(record);
          }
        }
        state.recompute_schema();
        Ok(())
      }
      Err(FormError::Fetch { source }) => {
        if state.configurations.finish(generation, Err(source.clone())) {
          error!(
            workflow = %self.scope.name,
            version = %version.version,
            error = %source,
            "failed to load launch configurations"
          );
        }
        Ok(())
      }
      Err(other) => Err(other),
    }
  }

  /// Submit the form, creating a workflow execution.
  ///
  /// User-invoked only; nothing submits automatically. Every attempt turns
  /// on error display first; when local validation fails no request is
  /// issued and the outcome says so. Contract violations (no configuration
  /// selected, no inputs capability attached, a response without an
  /// execution id) are loud errors. At most one submission is in flight per
  /// form key. On success the navigator is handed the new execution id.
  #[instrument(name = "launch_submit", skip(self), fields(workflow = %self.scope.name))]
  pub async fn submit(&self) -> Result<SubmitOutcome, FormError> {
    let (request, generation) = {
      let mut state = self.state.lock().unwrap();
      state.show_errors = true;

      let inputs = state
        .inputs_handle
        .clone()
        .ok_or(FormError::InputsUnavailable)?;
      let configuration = state
        .selected_configuration
        .clone()
        .ok_or(FormError::NoConfigurationSelected)?;

      // Validate before anything is sent; a failed validation is a normal
      // outcome, not an error.
      if !inputs.validate() {
        info!("validation failed, not submitting");
        return Ok(SubmitOutcome::ValidationFailed);
      }

      let key = state.form_key.clone();
      if state.submission.is_current(&key) && state.submission.state().is_loading() {
        warn!("submission already in flight for this form");
        return Ok(SubmitOutcome::AlreadyPending);
      }

      let request = SubmitRequest {
        scope: self.scope.clone(),
        configuration: configuration.id,
        inputs: inputs.values(),
      };
      let generation = state.submission.begin(key);
      (request, generation)
    };

    info!("submitting launch request");
    let result = self.client.submit(request).await;

    let mut state = self.state.lock().unwrap();
    match result {
      Ok(response) => {
        let Some(id) = response.id else {
          let err = FormError::MissingExecutionId;
          state.submission.finish(generation, Err(err.clone()));
          error!(error = %err, "launch submission rejected");
          return Err(err);
        };
        if !state.submission.finish(generation, Ok(id.clone())) {
          warn!("discarding superseded submission response");
          return Ok(SubmitOutcome::Superseded);
        }
        info!(execution = %id.name, "workflow execution created");
        self.navigator.execution_detail(&id);
        Ok(SubmitOutcome::Launched(id))
      }
      Err(source) => {
        let err = FormError::Submission { source };
        if state.submission.finish(generation, Err(err.clone())) {
          error!(error = %err, "launch submission failed");
        }
        Err(err)
      }
    }
  }
}
