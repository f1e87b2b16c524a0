//! Error primitives shared by the host identity crates.
//!
//! Library code defines typed errors (via `snafu`) where callers need to match on the failure. Application code works
//! with [`GenericError`], which can wrap any error and carry a chain of context.
#![deny(warnings)]
#![deny(missing_docs)]

use std::fmt::Display;

/// An opaque error type that can wrap any other error, along with context.
pub type GenericError = anyhow::Error;

/// Constructs a [`GenericError`].
///
/// Accepts a string literal, a format string with arguments (same rules as `std::format!`), or a single value that
/// implements `Debug` and `Display`. When given a value that implements `std::error::Error`, its source chain is
/// preserved.
#[macro_export]
macro_rules! generic_error {
    ($msg:literal $(,)?) => { $crate::_anyhow!($msg) };
    ($err:expr $(,)?) => { $crate::_anyhow!($err) };
    ($fmt:expr, $($arg:tt)*) => { $crate::_anyhow!($fmt, $($arg)*) };
}

#[doc(hidden)]
pub use anyhow::anyhow as _anyhow;

pub(crate) mod private {
    pub trait Sealed {}

    impl<T, E> Sealed for Result<T, E> {}
}

// `anyhow::Context` is wrapped so its extension methods don't collide with `snafu::ResultExt` in modules that use both.
/// Extension methods for attaching context to the error side of a `Result`.
pub trait ErrorContext<T, E>: private::Sealed {
    /// Wraps the error value with additional context.
    fn error_context<C>(self, context: C) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static;

    /// Wraps the error value with additional context, evaluated only if an error occurred.
    fn with_error_context<C, F>(self, f: F) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C;
}

impl<T, E> ErrorContext<T, E> for Result<T, E>
where
    Result<T, E>: anyhow::Context<T, E>,
{
    fn error_context<C>(self, context: C) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static,
    {
        <Self as anyhow::Context<T, E>>::context(self, context)
    }

    fn with_error_context<C, F>(self, context: F) -> Result<T, GenericError>
    where
        C: Display + Send + Sync + 'static,
        F: FnOnce() -> C,
    {
        <Self as anyhow::Context<T, E>>::with_context(self, context)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn generic_error_from_format_string() {
        let path = "/var/lib/dynatrace/enrichment/dt_metadata.properties";
        let err = generic_error!("failed to read {}", path);
        assert_eq!(err.to_string(), format!("failed to read {}", path));
    }

    #[test]
    fn error_context_wraps_source() {
        let result: Result<(), io::Error> = Err(io::Error::new(io::ErrorKind::NotFound, "missing"));
        let err = result.error_context("Failed to load configuration.").unwrap_err();

        assert_eq!(err.to_string(), "Failed to load configuration.");
        assert_eq!(err.root_cause().to_string(), "missing");
    }

    #[test]
    fn with_error_context_is_lazy_on_success() {
        let result: Result<u8, io::Error> = Ok(7);
        let value = result
            .with_error_context(|| -> String { panic!("context should not be evaluated") })
            .unwrap();
        assert_eq!(value, 7);
    }
}
