use std::fmt::Write as _;

use hostid_components::{
    data_model::{
        Event, LogRecord, Logs, Metric, Metrics, Resource, ResourceLogs, ResourceMetrics, ResourceSpans, Span, Traces,
    },
    transforms::{EntityHostEnrichmentConfiguration, SynchronousTransformBuilder as _},
};
use hostid_config::GenericConfiguration;
use hostid_env::{
    host::{validate_host_id, CandidatePaths, HostIdResolver},
    HostIdProvider, HostIdentifier, ResolutionContext,
};
use hostid_error::{ErrorContext as _, GenericError};
use tracing::debug;

use crate::config::{CheckConfig, ResolveConfig};

/// Entrypoint for the `resolve` command.
///
/// Probes the process-wide resolver unless candidate paths were given, in which case a dedicated resolver probes only
/// those paths.
pub fn handle_resolve_command(config: &ResolveConfig) -> HostIdentifier {
    let mut context = ResolutionContext::default();
    if let Some(host_id) = &config.host_id_override {
        context = context.with_host_id_override(host_id.as_str());
    }

    if config.properties_paths.is_empty() && config.ruxit_paths.is_empty() {
        return HostIdResolver::global().get_host_id(&context);
    }

    let mut paths = CandidatePaths::default();
    if !config.properties_paths.is_empty() {
        paths = paths.with_properties_paths(config.properties_paths.iter().cloned());
    }
    if !config.ruxit_paths.is_empty() {
        paths = paths.with_ruxit_paths(config.ruxit_paths.iter().cloned());
    }
    debug!(?paths, "Probing user-supplied candidate paths.");

    HostIdResolver::new(paths).get_host_id(&context)
}

/// Entrypoint for the `check` command.
///
/// Returns `"valid"` for a valid host identifier, or the reason it is invalid.
pub fn handle_check_command(config: &CheckConfig) -> Result<&'static str, String> {
    validate_host_id(&config.candidate).map(|()| "valid")
}

/// Entrypoint for the `enrich` command.
///
/// Builds the entity host enrichment transform from the given configuration, runs it over a sample batch holding one
/// of each signal, and renders the resulting resource attributes.
pub fn handle_enrich_command<P>(configuration: &GenericConfiguration, host_id_provider: P) -> Result<String, GenericError>
where
    P: HostIdProvider,
{
    let enrichment_config = EntityHostEnrichmentConfiguration::from_configuration(configuration, host_id_provider)?;
    if !enrichment_config.metadata() {
        debug!("Enrichment is disabled. Set `metadata: true` (or `HOSTID_METADATA=true`) to enable it.");
    }

    let transform = enrichment_config
        .build()
        .error_context("Failed to build entity host enrichment transform.")?;

    let mut events = sample_events();
    transform.transform_buffer(&mut events);

    Ok(render_events(&events))
}

fn sample_resource(service_name: &str) -> Resource {
    [("service.name", service_name)].into_iter().collect()
}

fn sample_events() -> Vec<Event> {
    vec![
        Event::Traces(Traces {
            resource_spans: vec![ResourceSpans {
                resource: sample_resource("checkout"),
                spans: vec![Span {
                    name: "GET /cart".to_string(),
                }],
            }],
        }),
        Event::Metrics(Metrics {
            resource_metrics: vec![ResourceMetrics {
                resource: sample_resource("checkout"),
                metrics: vec![Metric {
                    name: "http.server.duration".to_string(),
                }],
            }],
        }),
        Event::Logs(Logs {
            resource_logs: vec![ResourceLogs {
                resource: sample_resource("checkout"),
                log_records: vec![LogRecord {
                    body: "cart loaded".to_string(),
                }],
            }],
        }),
    ]
}

fn render_events(events: &[Event]) -> String {
    let mut output = String::new();
    for event in events {
        let signal = match event {
            Event::Traces(_) => "traces",
            Event::Metrics(_) => "metrics",
            Event::Logs(_) => "logs",
        };

        for resource in event.resources() {
            let _ = writeln!(output, "{}:", signal);
            for (key, value) in resource.attributes() {
                let _ = writeln!(output, "  {}: {}", key, value);
            }
        }
    }
    output
}
