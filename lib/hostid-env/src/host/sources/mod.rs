//! Readers for the files that carry host identity.
//!
//! Each reader returns `Ok` with an empty string when the file was readable but held no usable value, and
//! [`SourceError`] when the file could not be read at all. Both outcomes mean "try the next candidate" to the resolver.

use std::path::PathBuf;

use snafu::Snafu;

mod properties;
pub use self::properties::{find_property, read_property, PROPERTIES_SUFFIX};

mod ruxit;
pub use self::ruxit::read_first_line_id;

/// Error reading a host identity source.
#[derive(Debug, Snafu)]
#[snafu(context(suffix(false)), visibility(pub(crate)))]
pub enum SourceError {
    /// The file is missing, could not be opened, or could not be read.
    #[snafu(display("failed to read '{}': {}", path.display(), source))]
    NotFoundOrUnreadable {
        /// Path of the file that could not be read.
        path: PathBuf,

        /// Error source.
        source: std::io::Error,
    },
}
