//! Logging.

use hostid_error::GenericError;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt as _, util::SubscriberInitExt as _, Layer};

mod config;
pub use self::config::LoggingConfiguration;

mod layer;
use self::layer::build_formatting_layer;

/// Keeps the background log writers alive.
///
/// Dropping the guard flushes any pending log lines, so it must be held until the application is about to exit.
#[derive(Default)]
pub struct LoggingGuard {
    worker_guards: Vec<WorkerGuard>,
}

impl LoggingGuard {
    fn add_worker_guard(&mut self, guard: WorkerGuard) {
        self.worker_guards.push(guard);
    }
}

/// Logs a message to standard error and exits the process with a non-zero exit code.
pub fn fatal_and_exit(message: String) {
    eprintln!("FATAL: {}", message);
    std::process::exit(1);
}

/// Initializes the logging subsystem for `tracing`.
///
/// Log lines are written to standard error, filtered by the configured log level, in either JSON or the
/// human-readable format (`<time> | <APP> | <LEVEL> | (<file>:<line>) | <fields> | <message>`). `app_name` is used as
/// the application column of the human-readable format.
///
/// Returns a [`LoggingGuard`] which must be held until the application is about to shutdown, ensuring that any
/// pending logs are flushed before the application exits.
///
/// # Errors
///
/// If the logging subsystem was already initialized, an error will be returned.
pub fn initialize_logging(app_name: &str, config: &LoggingConfiguration) -> Result<LoggingGuard, GenericError> {
    let mut configured_layers = Vec::new();
    let mut logging_guard = LoggingGuard::default();

    if config.log_to_console {
        // Standard output is reserved for command output.
        let (nb_stderr, guard) = tracing_appender::non_blocking(std::io::stderr());
        logging_guard.add_worker_guard(guard);

        configured_layers.push(build_formatting_layer(app_name, config, nb_stderr));
    }

    tracing_subscriber::registry()
        .with(configured_layers.with_filter(config.log_level.as_env_filter()))
        .try_init()?;

    Ok(logging_guard)
}
