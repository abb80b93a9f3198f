//! snmpsim: plausibly moving SNMP counters and gauges for device simulators.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the snmpsim sub-crates. For most users, adding `snmpsim` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use snmpsim::prelude::*;
//!
//! // ifInOctets: a counter that grows by 0..=1500 per poll.
//! let props: ModifierProperties = [("minimumStep", "0"), ("maximumStep", "1500")]
//!     .into_iter()
//!     .collect();
//! let modifier = Counter32Modifier::from_properties(&props).unwrap();
//!
//! let mut if_in_octets = SimulatedVariable::new(modifier, Counter32(0), 7);
//! let before = if_in_octets.value().raw();
//! let after = if_in_octets.advance(10).raw();
//! assert!(after >= before && after <= 15_000);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `snmpsim-core` | SMI value types, properties, errors |
//! | [`modifier`] | `snmpsim-modifier` | Modifier trait, bounded-step algorithm, simulated variables |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types, properties and errors (`snmpsim-core`).
pub use snmpsim_core as types;

/// Modifiers and simulated variables (`snmpsim-modifier`).
///
/// The [`modifier::VariableModifier`] trait is the extension point for
/// custom value behaviour.
pub use snmpsim_modifier as modifier;

/// Common imports for typical snmpsim usage.
///
/// ```rust
/// use snmpsim::prelude::*;
/// ```
pub mod prelude {
    // Value types and configuration
    pub use snmpsim_core::{
        Counter32, Gauge32, ModifierProperties, TimeTicks, Unsigned32, UnsignedInteger32,
    };

    // Errors
    pub use snmpsim_core::{ConfigError, PropertyError};

    // Modifiers
    pub use snmpsim_modifier::{
        BoundedStep, Counter32Modifier, Gauge32Modifier, IntegerModifier, SimulatedVariable,
        TimeTicksModifier, UnsignedInteger32Modifier, VariableModifier,
    };
}
