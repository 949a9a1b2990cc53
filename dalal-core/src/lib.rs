//! dalal-core
//!
//! Core traits and values shared across the dalal workspace.
//!
//! - `connector`: the `DalalConnector` trait and capability provider traits.
//! - `registry`: the ticker registry, including the built-in NIFTY 50 table.
//! - `metrics`: price-change arithmetic and range formatting.
#![warn(missing_docs)]

/// Connector capability traits and the primary `DalalConnector` interface.
pub mod connector;
pub mod metrics;
pub mod registry;

pub use connector::DalalConnector;
pub use registry::{RegistryEntry, TickerRegistry};

pub use dalal_types::*;
