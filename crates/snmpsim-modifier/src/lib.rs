//! Bounded-step modifiers for simulated SNMP variables.
//!
//! A device simulator serves counters and gauges that should move
//! between polls. This crate provides:
//!
//! - [`VariableModifier`]: the stateless per-tick transformation trait.
//! - [`BoundedStep`]: validated bounds and the step/wrap/clamp algorithm.
//! - [`IntegerModifier`]: the generic modifier for unsigned 32-bit kinds,
//!   with per-kind aliases such as [`Counter32Modifier`].
//! - [`SimulatedVariable`]: a variable that owns its modifier and a
//!   seeded RNG and advances one tick at a time.
//!
//! # Example
//!
//! ```
//! use snmpsim_core::{Counter32, ModifierProperties, Unsigned32};
//! use snmpsim_modifier::{Counter32Modifier, SimulatedVariable};
//!
//! let props: ModifierProperties = [("minimum", "10"), ("maximum", "20")]
//!     .into_iter()
//!     .collect();
//! let modifier = Counter32Modifier::from_properties(&props).unwrap();
//!
//! let mut var = SimulatedVariable::new(modifier, Counter32(15), 42);
//! for _ in 0..100 {
//!     let v = var.tick().raw();
//!     assert!((10..=20).contains(&v));
//! }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounded;
pub mod integer;
pub mod modifier;
pub mod variable;

pub use bounded::BoundedStep;
pub use integer::{
    Counter32Modifier, Gauge32Modifier, IntegerModifier, TimeTicksModifier,
    UnsignedInteger32Modifier,
};
pub use modifier::VariableModifier;
pub use variable::SimulatedVariable;
