//! Host identity.
//!
//! A host identifier has the form `HOST-<hex>`. It is looked up, in priority order, from:
//!
//! - enrichment properties files (`dt.entity.host=HOST-...`), which may redirect once to another properties file
//! - `ruxithost.id` files, whose first line holds the bare hexadecimal token
//!
//! The first non-empty value found is validated and becomes the host identifier for the lifetime of the process. See
//! [`HostIdResolver`] for the exact policy.

use std::{fmt, sync::Arc};

mod paths;
pub use self::paths::{CandidatePaths, DEFAULT_PROPERTIES_PATHS, DEFAULT_RUXIT_PATHS};

pub mod providers;

mod resolver;
pub use self::resolver::{initialize_host_id, resolve_host_id, HostIdResolver};

pub mod sources;

mod validate;
pub use self::validate::{is_valid_host_id, validate_host_id};

/// Resource attribute key, and properties file key, that carries the host identifier.
pub const KEY_ENTITY_HOST: &str = "dt.entity.host";

/// Prefix shared by every host identifier.
pub const HOST_ID_PREFIX: &str = "HOST-";

/// A host identifier.
///
/// An empty identifier means the host identity could not be resolved. That is a normal outcome, not an error: callers
/// are expected to check [`is_empty`][Self::is_empty] and skip whatever they would have done with the value.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct HostIdentifier(String);

impl HostIdentifier {
    /// Returns the unresolved (empty) host identifier.
    pub const fn empty() -> Self {
        Self(String::new())
    }

    /// Returns `true` if the host identity is unresolved.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if this identifier is syntactically valid.
    ///
    /// Identifiers produced by [`HostIdResolver`] from files are always valid or empty. Identifiers supplied through
    /// [`ResolutionContext::with_host_id_override`] are taken as-is and may not be.
    pub fn is_valid(&self) -> bool {
        is_valid_host_id(&self.0)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the identifier, returning the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for HostIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for HostIdentifier {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for HostIdentifier {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for HostIdentifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Per-call resolution context.
///
/// Production callers pass [`ResolutionContext::default()`]. Tests and embedding callers can pin the result of a single
/// resolution call with [`with_host_id_override`][Self::with_host_id_override], which bypasses file probing and the
/// process-wide cache entirely.
#[derive(Clone, Debug, Default)]
pub struct ResolutionContext {
    host_id_override: Option<HostIdentifier>,
}

impl ResolutionContext {
    /// Sets the host identifier to return for calls made with this context.
    ///
    /// The value is returned verbatim: it is not validated, and it does not populate any cache.
    pub fn with_host_id_override<H>(mut self, host_id: H) -> Self
    where
        H: Into<HostIdentifier>,
    {
        self.host_id_override = Some(host_id.into());
        self
    }

    /// Returns the host identifier override, if one was set.
    pub fn host_id_override(&self) -> Option<&HostIdentifier> {
        self.host_id_override.as_ref()
    }
}

/// Resolves the identifier of the host the process is running on.
pub trait HostIdProvider {
    /// Gets the host identifier for the given context.
    ///
    /// Never fails: an unresolvable host identity is reported as [`HostIdentifier::empty`].
    fn get_host_id(&self, context: &ResolutionContext) -> HostIdentifier;
}

impl<P> HostIdProvider for Arc<P>
where
    P: HostIdProvider + ?Sized,
{
    fn get_host_id(&self, context: &ResolutionContext) -> HostIdentifier {
        (**self).get_host_id(context)
    }
}

impl<P> HostIdProvider for &P
where
    P: HostIdProvider + ?Sized,
{
    fn get_host_id(&self, context: &ResolutionContext) -> HostIdentifier {
        (**self).get_host_id(context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_identifier() {
        let host_id = HostIdentifier::empty();
        assert!(host_id.is_empty());
        assert!(!host_id.is_valid());
        assert_eq!(host_id.to_string(), "");
        assert_eq!(host_id, HostIdentifier::default());
    }

    #[test]
    fn identifier_accessors() {
        let host_id = HostIdentifier::from("HOST-AAF98EFF909EE3F6");
        assert!(!host_id.is_empty());
        assert!(host_id.is_valid());
        assert_eq!(host_id.as_str(), "HOST-AAF98EFF909EE3F6");
        assert_eq!(host_id.clone().into_string(), "HOST-AAF98EFF909EE3F6");
    }

    #[test]
    fn context_override() {
        assert!(ResolutionContext::default().host_id_override().is_none());

        let context = ResolutionContext::default().with_host_id_override("not-a-host-id");
        assert_eq!(
            context.host_id_override().map(HostIdentifier::as_str),
            Some("not-a-host-id")
        );
    }
}
