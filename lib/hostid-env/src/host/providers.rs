//! Host identity provider implementations.

use hostid_config::GenericConfiguration;
use hostid_error::GenericError;

use super::{HostIdProvider, HostIdentifier, ResolutionContext};

/// Host identity provider based on a fixed host identifier.
///
/// Useful when embedding the enrichment into a process that already knows its host identity, and in tests. Per-call
/// overrides in the [`ResolutionContext`] still take precedence, matching [`HostIdResolver`][super::HostIdResolver].
#[derive(Clone, Debug)]
pub struct FixedHostIdProvider {
    host_id: HostIdentifier,
}

impl FixedHostIdProvider {
    /// Creates a new `FixedHostIdProvider` that always returns the given host identifier.
    pub fn new<H>(host_id: H) -> Self
    where
        H: Into<HostIdentifier>,
    {
        Self {
            host_id: host_id.into(),
        }
    }

    /// Creates a new `FixedHostIdProvider` from the given configuration.
    ///
    /// Depends on the host identifier existing in the given configuration under the `host_id` key. The value is not
    /// validated.
    ///
    /// # Errors
    ///
    /// If the host identifier is not specified in the configuration, an error is returned.
    pub fn from_configuration(config: &GenericConfiguration) -> Result<Self, GenericError> {
        let host_id = config.get_typed::<String>("host_id")?;

        Ok(Self::new(host_id))
    }
}

impl HostIdProvider for FixedHostIdProvider {
    fn get_host_id(&self, context: &ResolutionContext) -> HostIdentifier {
        match context.host_id_override() {
            Some(host_id) => host_id.clone(),
            None => self.host_id.clone(),
        }
    }
}
