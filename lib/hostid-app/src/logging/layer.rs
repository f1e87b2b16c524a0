use std::{fmt, str::FromStr as _, sync::OnceLock};

use chrono::{
    format::{DelayedFormat, Item, StrftimeItems},
    Utc,
};
use chrono_tz::Tz;
use tracing::{field, Event, Subscriber};
use tracing_subscriber::{
    field::VisitOutput,
    fmt::{format::Writer, FmtContext, FormatEvent, FormatFields, Layer, MakeWriter},
    layer,
    registry::LookupSpan,
    Layer as _,
};

use super::LoggingConfiguration;

pub(crate) fn build_formatting_layer<S, W>(
    app_name: &str, config: &LoggingConfiguration, writer: W,
) -> Box<dyn layer::Layer<S> + Send + Sync>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'writer> MakeWriter<'writer> + Send + Sync + 'static,
{
    if config.log_format_json {
        Layer::new()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(writer)
            .boxed()
    } else {
        Layer::new()
            .event_format(AgentLikeFormatter::new(app_name))
            .with_writer(writer)
            .boxed()
    }
}

/// Formats events as `<time> | <APP> | <LEVEL> | (<file>:<line>) | key:"value",... | message`.
pub(crate) struct AgentLikeFormatter {
    app_name: String,
}

impl AgentLikeFormatter {
    /// Creates a new `AgentLikeFormatter`.
    ///
    /// The application name is normalized so that "hostid-probe" or "Host ID Probe" both become "HOSTIDPROBE".
    pub(crate) fn new(app_name: &str) -> Self {
        let app_name = app_name.to_uppercase().replace(['-', ' '], "");

        Self { app_name }
    }
}

impl<S, N> FormatEvent<S, N> for AgentLikeFormatter
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(&self, _ctx: &FmtContext<'_, S, N>, mut writer: Writer<'_>, event: &Event<'_>) -> fmt::Result {
        let metadata = event.metadata();

        write!(
            writer,
            "{} | {} | {} | ",
            get_delayed_format_now(),
            self.app_name,
            metadata.level()
        )?;

        match (metadata.file(), metadata.line()) {
            (Some(file), Some(line)) => write!(writer, "({}:{})", file, line)?,
            _ => write!(writer, "(unknown:0)")?,
        }

        let mut visitor = AgentLikeFieldVisitor::new(writer.by_ref());
        event.record(&mut visitor);
        visitor.finish()?;

        writeln!(writer)
    }
}

/// Writes structured fields as `key:"value"` pairs separated by commas, followed by the message.
///
/// The first write error is kept and returned from [`finish`][VisitOutput::finish]; every write after it is skipped.
struct AgentLikeFieldVisitor<'writer> {
    writer: Writer<'writer>,
    fields_written: usize,
    message: String,
    last_result: fmt::Result,
}

impl<'writer> AgentLikeFieldVisitor<'writer> {
    fn new(writer: Writer<'writer>) -> Self {
        Self {
            writer,
            fields_written: 0,
            message: String::new(),
            last_result: Ok(()),
        }
    }

    fn try_write(&mut self, field: &field::Field, f: impl FnOnce(&mut dyn fmt::Write) -> fmt::Result) {
        if self.last_result.is_err() {
            return;
        }

        if field.name() == "message" {
            // The message always comes last, so hold on to it until `finish`.
            self.last_result = f(&mut self.message);
            return;
        }

        let delimiter = if self.fields_written == 0 { " | " } else { "," };
        self.last_result = write!(self.writer, "{}{}:", delimiter, field.name());
        if self.last_result.is_err() {
            return;
        }

        self.last_result = f(&mut self.writer);
        if self.last_result.is_ok() {
            self.fields_written += 1;
        }
    }
}

impl field::Visit for AgentLikeFieldVisitor<'_> {
    fn record_debug(&mut self, field: &field::Field, value: &dyn fmt::Debug) {
        self.try_write(field, |w| {
            if field.name() == "message" {
                write!(w, "{:?}", value)
            } else {
                write!(w, "\"{:?}\"", value)
            }
        });
    }

    fn record_str(&mut self, field: &field::Field, value: &str) {
        self.try_write(field, |w| {
            if field.name() == "message" {
                w.write_str(value)
            } else {
                write!(w, "\"{}\"", value)
            }
        });
    }

    fn record_i64(&mut self, field: &field::Field, value: i64) {
        self.try_write(field, |w| write!(w, "{}", value));
    }

    fn record_u64(&mut self, field: &field::Field, value: u64) {
        self.try_write(field, |w| write!(w, "{}", value));
    }

    fn record_f64(&mut self, field: &field::Field, value: f64) {
        self.try_write(field, |w| write!(w, "{}", value));
    }

    fn record_bool(&mut self, field: &field::Field, value: bool) {
        self.try_write(field, |w| write!(w, "{}", value));
    }
}

impl VisitOutput<fmt::Result> for AgentLikeFieldVisitor<'_> {
    fn finish(mut self) -> fmt::Result {
        self.last_result?;

        if !self.message.is_empty() {
            write!(self.writer, " | {}", self.message)
        } else {
            Ok(())
        }
    }
}

/// Gets a delayed formatter for the current time, in the system's timezone.
fn get_delayed_format_now() -> DelayedFormat<impl Iterator<Item = &'static Item<'static>> + Clone> {
    // Falls back to UTC if the system timezone can't be detected.
    static SYSTEM_TZ: OnceLock<Tz> = OnceLock::new();
    let system_tz = SYSTEM_TZ.get_or_init(|| {
        iana_time_zone::get_timezone()
            .ok()
            .and_then(|raw_tz| Tz::from_str(&raw_tz).ok())
            .unwrap_or(Tz::UTC)
    });

    // `2024-12-31 23:59:59 UTC`
    static FORMAT_ITEMS: OnceLock<Vec<Item<'static>>> = OnceLock::new();
    let format_items = FORMAT_ITEMS.get_or_init(|| StrftimeItems::new("%Y-%m-%d %H:%M:%S %Z").collect());

    Utc::now().with_timezone(system_tz).format_with_items(format_items.iter())
}
