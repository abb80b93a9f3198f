//! Bounded-step modifiers for unsigned 32-bit SMI variables.
//!
//! [`IntegerModifier`] is generic over the variable kind; the kind only
//! decides how the clamped raw value is wrapped on the way out. The
//! per-kind aliases ([`Counter32Modifier`], [`Gauge32Modifier`], ...)
//! are what device configurations normally instantiate.

use std::fmt;
use std::marker::PhantomData;

use rand::{Rng, RngCore};
use snmpsim_core::{
    ConfigError, Counter32, Gauge32, ModifierProperties, TimeTicks, Unsigned32,
    UnsignedInteger32,
};

use crate::bounded::BoundedStep;
use crate::modifier::VariableModifier;

/// Steps an unsigned 32-bit variable within configured bounds.
///
/// Constructed from properties via
/// [`from_properties`](IntegerModifier::from_properties); a failed
/// construction leaves nothing to use.
pub struct IntegerModifier<V> {
    bounds: BoundedStep,
    variable: PhantomData<fn() -> V>,
}

/// Modifier for `Counter32` variables.
pub type Counter32Modifier = IntegerModifier<Counter32>;
/// Modifier for `Gauge32` variables.
pub type Gauge32Modifier = IntegerModifier<Gauge32>;
/// Modifier for `TimeTicks` variables.
pub type TimeTicksModifier = IntegerModifier<TimeTicks>;
/// Modifier for `Unsigned32` variables.
pub type UnsignedInteger32Modifier = IntegerModifier<UnsignedInteger32>;

impl<V: Unsigned32> IntegerModifier<V> {
    /// Wrap already-validated bounds.
    pub fn new(bounds: BoundedStep) -> Self {
        Self {
            bounds,
            variable: PhantomData,
        }
    }

    /// Build from the `minimum`, `maximum`, `minimumStep` and
    /// `maximumStep` properties.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a value is not an integer or a bound
    /// falls outside `[0, 2^32 - 1]`.
    pub fn from_properties(properties: &ModifierProperties) -> Result<Self, ConfigError> {
        Ok(Self::new(BoundedStep::from_properties(properties)?))
    }

    /// The bounds and step range in effect.
    pub fn bounds(&self) -> &BoundedStep {
        &self.bounds
    }

    /// Next value for an arbitrary integer `current` and a fixed draw on
    /// `[0, 1)`.
    pub fn next_variable(&self, current: i64, draw: f64) -> V {
        let next = self.bounds.next_value(current, draw);
        // clamped into [minimum, maximum], both of which lie in 0..=u32::MAX
        V::from_raw(next as u32)
    }
}

impl<V: Unsigned32> VariableModifier for IntegerModifier<V> {
    type Variable = V;

    fn name(&self) -> &str {
        V::KIND
    }

    fn modify(&self, variable: &V, rng: &mut dyn RngCore) -> V {
        let draw: f64 = rng.random();
        self.next_variable(i64::from(variable.raw()), draw)
    }
}

impl<V: Unsigned32> Default for IntegerModifier<V> {
    fn default() -> Self {
        Self::new(BoundedStep::default())
    }
}

impl<V> Clone for IntegerModifier<V> {
    fn clone(&self) -> Self {
        Self {
            bounds: self.bounds,
            variable: PhantomData,
        }
    }
}

impl<V: Unsigned32> fmt::Debug for IntegerModifier<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegerModifier")
            .field("kind", &V::KIND)
            .field("bounds", &self.bounds)
            .finish()
    }
}
