//! Input schema derivation and the derived form key.

use ignition_model::{ConfigurationRecord, ParsedInput, VersionRecord};

/// Derive the ordered input schema from a fully loaded version record and a
/// selected configuration.
///
/// Pure: each input declared by the version becomes one field, in
/// declaration order. A default bound by the configuration wins over the
/// declaration's own default. Inputs the version does not declare are never
/// invented. Either argument missing yields an empty schema.
pub fn derive_inputs(
  version: Option<&VersionRecord>,
  configuration: Option<&ConfigurationRecord>,
) -> Vec<ParsedInput> {
  let (Some(version), Some(configuration)) = (version, configuration) else {
    return Vec::new();
  };

  version
    .inputs
    .iter()
    .map(|declared| {
      let initial_value = configuration
        .default_inputs
        .get(&declared.name)
        .cloned()
        .or_else(|| declared.default.clone());
      ParsedInput {
        name: declared.name.clone(),
        type_name: declared.type_name.clone(),
        required: declared.required,
        initial_value,
      }
    })
    .collect()
}

/// Content-addressed key over the ordered field composition.
///
/// Two schemas with the same ordered (name, type) sequence produce the same
/// key; any change in composition or order produces a different one. Values
/// and flags do not participate, only the field shape does. The empty-until-
/// both-selected sentinel is owned by the orchestrator, not computed here.
pub fn form_key(inputs: &[ParsedInput]) -> String {
  let composition: Vec<(&str, &str)> = inputs
    .iter()
    .map(|input| (input.name.as_str(), input.type_name.as_str()))
    .collect();
  serde_json::to_string(&composition).unwrap_or_default()
}
