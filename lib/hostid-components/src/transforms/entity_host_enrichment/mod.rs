use hostid_config::{deser::PermissiveBool, GenericConfiguration};
use hostid_env::{host::KEY_ENTITY_HOST, HostIdProvider, HostIdentifier, ResolutionContext};
use hostid_error::{ErrorContext as _, GenericError};
use serde::Deserialize;
use serde_with::serde_as;
use tracing::debug;

use super::{SynchronousTransform, SynchronousTransformBuilder};
use crate::data_model::{Event, Logs, Metrics, Resource, Traces};

#[serde_as]
#[derive(Deserialize)]
struct EntityHostEnrichmentSettings {
    /// Whether or not to attach the host identifier to telemetry.
    #[serde_as(as = "PermissiveBool")]
    #[serde(default)]
    metadata: bool,
}

/// Entity host enrichment synchronous transform.
///
/// Enriches every resource in trace, metric, and log batches with a `dt.entity.host` attribute if one is not already
/// present. The host identifier is resolved once, when the transform is built, from the configured host identity
/// provider.
///
/// Enrichment is disabled by default, and is enabled by setting `metadata` to `true`.
pub struct EntityHostEnrichmentConfiguration<P> {
    metadata: bool,
    host_id_provider: P,
    resolution_context: ResolutionContext,
}

impl<P> EntityHostEnrichmentConfiguration<P> {
    /// Creates a new `EntityHostEnrichmentConfiguration` with the given host identity provider.
    ///
    /// Enrichment is disabled until enabled with [`with_metadata`][Self::with_metadata].
    pub fn from_host_id_provider(host_id_provider: P) -> Self {
        Self {
            metadata: false,
            host_id_provider,
            resolution_context: ResolutionContext::default(),
        }
    }

    /// Creates a new `EntityHostEnrichmentConfiguration` from the given configuration and host identity provider.
    ///
    /// # Errors
    ///
    /// If the `metadata` setting is present but not a boolean, an error is returned.
    pub fn from_configuration(config: &GenericConfiguration, host_id_provider: P) -> Result<Self, GenericError> {
        let settings = config
            .as_typed::<EntityHostEnrichmentSettings>()
            .error_context("Failed to parse entity host enrichment configuration.")?;

        Ok(Self::from_host_id_provider(host_id_provider).with_metadata(settings.metadata))
    }

    /// Sets whether or not to attach the host identifier to telemetry.
    pub fn with_metadata(mut self, metadata: bool) -> Self {
        self.metadata = metadata;
        self
    }

    /// Sets the resolution context passed to the host identity provider when the transform is built.
    pub fn with_resolution_context(mut self, resolution_context: ResolutionContext) -> Self {
        self.resolution_context = resolution_context;
        self
    }

    /// Returns `true` if the host identifier will be attached to telemetry.
    pub const fn metadata(&self) -> bool {
        self.metadata
    }
}

impl<P> SynchronousTransformBuilder for EntityHostEnrichmentConfiguration<P>
where
    P: HostIdProvider,
{
    fn build(&self) -> Result<Box<dyn SynchronousTransform + Send>, GenericError> {
        let host_id = if self.metadata {
            self.host_id_provider.get_host_id(&self.resolution_context)
        } else {
            debug!("Entity host enrichment disabled.");
            HostIdentifier::empty()
        };

        Ok(Box::new(EntityHostEnrichment::new(host_id)))
    }
}

/// Attaches a host identifier to resources that do not already carry one.
pub struct EntityHostEnrichment {
    host_id: HostIdentifier,
}

impl EntityHostEnrichment {
    /// Creates a new `EntityHostEnrichment` that attaches the given host identifier.
    ///
    /// An empty host identifier turns every operation into a no-op.
    pub fn new(host_id: HostIdentifier) -> Self {
        Self { host_id }
    }

    /// Returns the host identifier this transform attaches.
    pub fn host_id(&self) -> &HostIdentifier {
        &self.host_id
    }

    fn enrich_resource(&self, resource: &mut Resource) {
        if !resource.contains_attribute(KEY_ENTITY_HOST) {
            resource.insert_attribute(KEY_ENTITY_HOST, self.host_id.as_str());
        }
    }

    /// Enriches every resource in the given traces.
    pub fn transform_traces(&self, traces: &mut Traces) {
        if self.host_id.is_empty() {
            return;
        }

        for resource_spans in &mut traces.resource_spans {
            self.enrich_resource(&mut resource_spans.resource);
        }
    }

    /// Enriches every resource in the given metrics.
    pub fn transform_metrics(&self, metrics: &mut Metrics) {
        if self.host_id.is_empty() {
            return;
        }

        for resource_metrics in &mut metrics.resource_metrics {
            self.enrich_resource(&mut resource_metrics.resource);
        }
    }

    /// Enriches every resource in the given logs.
    pub fn transform_logs(&self, logs: &mut Logs) {
        if self.host_id.is_empty() {
            return;
        }

        for resource_logs in &mut logs.resource_logs {
            self.enrich_resource(&mut resource_logs.resource);
        }
    }

    /// Enriches every resource in the given event.
    pub fn transform_event(&self, event: &mut Event) {
        match event {
            Event::Traces(traces) => self.transform_traces(traces),
            Event::Metrics(metrics) => self.transform_metrics(metrics),
            Event::Logs(logs) => self.transform_logs(logs),
        }
    }
}

impl SynchronousTransform for EntityHostEnrichment {
    fn transform_buffer(&self, events: &mut [Event]) {
        for event in events {
            self.transform_event(event);
        }
    }

    fn mutates_data(&self) -> bool {
        true
    }
}
