//! Core types for the snmpsim device simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the unsigned 32-bit SMI value types a simulated agent serves, the
//! textual property store modifiers are configured from, and the error
//! types raised while reading that configuration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod properties;
pub mod value;

pub use error::{ConfigError, PropertyError};
pub use properties::ModifierProperties;
pub use value::{Counter32, Gauge32, TimeTicks, Unsigned32, UnsignedInteger32, UNSIGNED32_MAX};
