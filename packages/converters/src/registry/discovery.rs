//! Start-up discovery that turns a plugin manifest into a sealed registry.

use std::sync::Arc;

use serde::Deserialize;

use super::core::{RegistrationEntry, Registry};
use super::descriptor::{TypeCatalog, TypeDescriptor};
use crate::config::validate_view_identifier;
use crate::error::{DiscoveryError, DiscoveryResult};
use crate::value::{ControlValue, EditorConfig};
use crate::view::ViewId;

/// Registration metadata for one view identifier.
#[derive(Debug, Clone)]
pub struct Candidate {
    view: ViewId,
    value_type: TypeDescriptor,
    config_type: Option<TypeDescriptor>,
}

impl Candidate {
    /// Create a candidate from a type descriptor.
    ///
    /// The descriptor is not checked here; discovery rejects it if it lacks
    /// the value capability.
    #[must_use]
    pub fn new(view: impl Into<ViewId>, value_type: TypeDescriptor) -> Self {
        Self {
            view: view.into(),
            value_type,
            config_type: None,
        }
    }

    /// Create a candidate for a typed value without config.
    #[must_use]
    pub fn value<V: ControlValue>(view: impl Into<ViewId>) -> Self {
        Self::new(view, TypeDescriptor::value::<V>())
    }

    /// Create a candidate for a typed value with a typed config.
    #[must_use]
    pub fn with_config<V: ControlValue, C: EditorConfig>(view: impl Into<ViewId>) -> Self {
        Self::value::<V>(view).with_config_type(TypeDescriptor::config::<C>())
    }

    /// Attach a config type descriptor.
    #[must_use]
    pub fn with_config_type(mut self, config_type: TypeDescriptor) -> Self {
        self.config_type = Some(config_type);
        self
    }

    /// The view identifier this candidate claims.
    #[must_use]
    pub fn view(&self) -> &ViewId {
        &self.view
    }
}

/// YAML form of a manifest.
#[derive(Debug, Deserialize)]
struct ManifestFile {
    #[serde(default)]
    converters: Vec<ManifestRecord>,
}

#[derive(Debug, Deserialize)]
struct ManifestRecord {
    view: String,
    value: String,
    #[serde(default)]
    config: Option<String>,
}

/// Ordered list of candidates consumed by [`discover`].
#[derive(Debug, Clone, Default)]
pub struct PluginManifest {
    candidates: Vec<Candidate>,
}

impl PluginManifest {
    /// Create an empty manifest.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a candidate.
    pub fn push(&mut self, candidate: Candidate) -> &mut Self {
        self.candidates.push(candidate);
        self
    }

    /// Add a typed value registration.
    pub fn register<V: ControlValue>(&mut self, view: impl Into<ViewId>) -> &mut Self {
        self.push(Candidate::value::<V>(view))
    }

    /// Add a typed value registration with a typed config.
    pub fn register_with_config<V: ControlValue, C: EditorConfig>(
        &mut self,
        view: impl Into<ViewId>,
    ) -> &mut Self {
        self.push(Candidate::with_config::<V, C>(view))
    }

    /// Parse a YAML manifest, resolving type names against a catalog.
    ///
    /// # Errors
    /// Returns `Yaml` on malformed input and `UnknownType` when a record names
    /// a type missing from the catalog.
    pub fn from_yaml(yaml: &str, catalog: &TypeCatalog) -> DiscoveryResult<Self> {
        let file: ManifestFile = serde_yaml::from_str(yaml)?;
        let mut manifest = Self::new();

        for record in file.converters {
            let resolve = |type_name: &str| {
                catalog
                    .get(type_name)
                    .cloned()
                    .ok_or_else(|| DiscoveryError::UnknownType {
                        view: record.view.clone(),
                        type_name: type_name.to_string(),
                    })
            };

            let mut candidate = Candidate::new(record.view.as_str(), resolve(&record.value)?);
            if let Some(config) = record.config.as_deref() {
                candidate = candidate.with_config_type(resolve(config)?);
            }
            manifest.push(candidate);
        }

        Ok(manifest)
    }

    /// The candidates in manifest order.
    #[must_use]
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Whether the manifest is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl Extend<Candidate> for PluginManifest {
    fn extend<I: IntoIterator<Item = Candidate>>(&mut self, iter: I) {
        self.candidates.extend(iter);
    }
}

impl FromIterator<Candidate> for PluginManifest {
    fn from_iter<I: IntoIterator<Item = Candidate>>(iter: I) -> Self {
        Self {
            candidates: iter.into_iter().collect(),
        }
    }
}

/// Validate a candidate and build its registration entry.
///
/// The wrapper factory is built here, once per view identifier.
fn build_entry(candidate: &Candidate) -> DiscoveryResult<RegistrationEntry> {
    let view = &candidate.view;
    validate_view_identifier(view.as_str())?;

    let value = candidate.value_type.value_ctor().ok_or_else(|| {
        DiscoveryError::MissingValueCapability {
            view: view.to_string(),
            type_name: candidate.value_type.name().to_string(),
        }
    })?;

    let config = candidate
        .config_type
        .as_ref()
        .map(|config_type| {
            config_type
                .config_ctor()
                .map(|ctor| (config_type.clone(), ctor))
                .ok_or_else(|| DiscoveryError::MissingConfigCapability {
                    view: view.to_string(),
                    type_name: config_type.name().to_string(),
                })
        })
        .transpose()?;

    Ok(RegistrationEntry::assemble(
        view.clone(),
        candidate.value_type.clone(),
        value,
        config,
    ))
}

/// Populate and seal a registry from a manifest.
///
/// Runs once at start-up. Any invalid candidate aborts discovery, so no
/// half-populated registry is ever handed out.
///
/// # Errors
/// Returns the first `DiscoveryError` found, in manifest order.
pub fn discover(manifest: &PluginManifest) -> DiscoveryResult<Arc<Registry>> {
    let mut registry = Registry::new();

    for candidate in manifest.candidates() {
        let entry = build_entry(candidate).inspect_err(|err| {
            tracing::error!(error = %err, view = %candidate.view, "Invalid converter registration");
        })?;

        tracing::debug!(
            view = %entry.view(),
            value_type = entry.value_type().name(),
            config_type = entry.config_type().map(TypeDescriptor::name),
            "Registered converter"
        );
        registry.register(entry).inspect_err(|err| {
            tracing::error!(
                error = %err,
                view = %candidate.view,
                "Conflicting converter registration"
            );
        })?;
    }

    registry.seal();
    tracing::info!(views = registry.len(), "Converter discovery complete");

    Ok(Arc::new(registry))
}
