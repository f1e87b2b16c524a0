//! Telemetry data model and the components that operate on it.
#![deny(warnings)]
#![deny(missing_docs)]

pub mod data_model;
pub mod transforms;
