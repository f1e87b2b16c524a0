//! Telemetry data model.
//!
//! Every signal is a batch of resource groups: the telemetry items emitted by one resource, alongside that
//! [`Resource`]. Only resource attributes are modeled in detail, since that is where host identity is
//! attached.

mod resource;
pub use self::resource::{AttributeValue, Resource};

/// A span.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Span {
    /// Span name.
    pub name: String,
}

/// Spans emitted by a single resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceSpans {
    /// Resource that emitted the spans.
    pub resource: Resource,

    /// Spans.
    pub spans: Vec<Span>,
}

/// A batch of traces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Traces {
    /// Spans, grouped by resource.
    pub resource_spans: Vec<ResourceSpans>,
}

/// A metric.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metric {
    /// Metric name.
    pub name: String,
}

/// Metrics emitted by a single resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceMetrics {
    /// Resource that emitted the metrics.
    pub resource: Resource,

    /// Metrics.
    pub metrics: Vec<Metric>,
}

/// A batch of metrics.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Metrics {
    /// Metrics, grouped by resource.
    pub resource_metrics: Vec<ResourceMetrics>,
}

/// A log record.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LogRecord {
    /// Log body.
    pub body: String,
}

/// Log records emitted by a single resource.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResourceLogs {
    /// Resource that emitted the log records.
    pub resource: Resource,

    /// Log records.
    pub log_records: Vec<LogRecord>,
}

/// A batch of logs.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Logs {
    /// Log records, grouped by resource.
    pub resource_logs: Vec<ResourceLogs>,
}

/// A telemetry event.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// A batch of traces.
    Traces(Traces),

    /// A batch of metrics.
    Metrics(Metrics),

    /// A batch of logs.
    Logs(Logs),
}

impl Event {
    /// Returns the resources of every resource group in this event.
    pub fn resources(&self) -> Vec<&Resource> {
        match self {
            Event::Traces(traces) => traces.resource_spans.iter().map(|rs| &rs.resource).collect(),
            Event::Metrics(metrics) => metrics.resource_metrics.iter().map(|rm| &rm.resource).collect(),
            Event::Logs(logs) => logs.resource_logs.iter().map(|rl| &rl.resource).collect(),
        }
    }
}
