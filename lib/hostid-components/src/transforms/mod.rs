//! Transform implementations.

use hostid_error::GenericError;

use crate::data_model::Event;

mod entity_host_enrichment;
pub use self::entity_host_enrichment::{EntityHostEnrichment, EntityHostEnrichmentConfiguration};

/// A synchronous transform.
///
/// Synchronous transforms modify events in place, and are run inline by whatever is moving the events along.
pub trait SynchronousTransform {
    /// Transforms the given events in place.
    fn transform_buffer(&self, events: &mut [Event]);

    /// Returns `true` if this transform modifies the events it is given.
    fn mutates_data(&self) -> bool {
        false
    }
}

/// A synchronous transform builder.
pub trait SynchronousTransformBuilder {
    /// Builds an instance of the synchronous transform.
    ///
    /// # Errors
    ///
    /// If the synchronous transform cannot be built for any reason, an error is returned.
    fn build(&self) -> Result<Box<dyn SynchronousTransform + Send>, GenericError>;
}
