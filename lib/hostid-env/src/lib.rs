//! Helpers for querying environment-specific data.
//!
//! Telemetry emitted from a monitored host should carry the identity that the locally installed agent assigned to that
//! host, rather than whatever hostname the process reports for itself. This crate discovers that identity from the
//! files the agent leaves behind on the host, and exposes it through [`HostIdProvider`].
#![deny(warnings)]
#![deny(missing_docs)]

pub mod host;

pub use self::host::{HostIdProvider, HostIdentifier, ResolutionContext};
