use hostid_config::{deser::PermissiveBool, GenericConfiguration};
use hostid_error::{generic_error, ErrorContext as _, GenericError};
use serde::Deserialize;
use serde_with::serde_as;
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

fn default_log_level() -> LogLevel {
    LevelFilter::INFO.into()
}

const fn default_true() -> bool {
    true
}

/// Logging configuration.
///
/// Read from the top level of the configuration:
///
/// - `log_level`: filtering directives, in `tracing_subscriber::EnvFilter` syntax (default: `info`)
/// - `log_format_json`: whether to emit JSON instead of the human-readable format (default: `false`)
/// - `log_to_console`: whether to write logs to standard error (default: `true`)
#[serde_as]
#[derive(Deserialize)]
pub struct LoggingConfiguration {
    #[serde(default = "default_log_level")]
    pub(crate) log_level: LogLevel,

    #[serde_as(as = "PermissiveBool")]
    #[serde(default)]
    pub(crate) log_format_json: bool,

    #[serde_as(as = "PermissiveBool")]
    #[serde(default = "default_true")]
    pub(crate) log_to_console: bool,
}

impl LoggingConfiguration {
    /// Creates a new `LoggingConfiguration` instance from the given configuration.
    ///
    /// # Errors
    ///
    /// If the configuration cannot be deserialized as `LoggingConfiguration`, an error is returned.
    pub fn from_configuration(config: &GenericConfiguration) -> Result<Self, GenericError> {
        let logging_config = config.as_typed()?;
        Ok(logging_config)
    }

    /// Overrides the log level filtering directives.
    ///
    /// # Errors
    ///
    /// If the directives are empty or cannot be parsed, an error is returned.
    pub fn with_log_level(mut self, directives: &str) -> Result<Self, GenericError> {
        self.log_level = LogLevel::try_from(directives.to_string())?;
        Ok(self)
    }
}

impl Default for LoggingConfiguration {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format_json: false,
            log_to_console: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(try_from = "String")]
pub(crate) struct LogLevel(EnvFilter);

impl LogLevel {
    pub fn as_env_filter(&self) -> EnvFilter {
        self.0.clone()
    }
}

impl From<LevelFilter> for LogLevel {
    fn from(level: LevelFilter) -> Self {
        Self(EnvFilter::default().add_directive(level.into()))
    }
}

impl TryFrom<String> for LogLevel {
    type Error = GenericError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value.is_empty() {
            return Err(generic_error!("Log level cannot be empty."));
        }

        EnvFilter::builder()
            .parse(value)
            .map(Self)
            .error_context("Failed to parse valid log level.")
    }
}
