//! The [`VariableModifier`] trait.
//!
//! Modifiers are stateless operators applied once per poll or tick to
//! produce the next reported value of a simulated variable. All
//! randomness is injected by the caller, so a modifier can be shared
//! across threads while each variable keeps its own generator.

use std::sync::Arc;

use rand::RngCore;
use snmpsim_core::Unsigned32;

/// A stateless transformation producing the next value of a variable.
///
/// # Contract
///
/// - `modify()` is total: it never fails and always returns a valid
///   value for [`Self::Variable`].
/// - `&self`: modifiers hold no mutable state after construction.
/// - Given the same variable and the same RNG state, `modify()` returns
///   the same value and consumes the same number of draws.
///
/// # Object safety
///
/// This trait is object-safe for a fixed variable type, e.g.
/// `Box<dyn VariableModifier<Variable = Counter32>>`.
///
/// # Examples
///
/// A modifier that leaves the value unchanged:
///
/// ```
/// use rand::RngCore;
/// use snmpsim_core::Gauge32;
/// use snmpsim_modifier::VariableModifier;
///
/// struct Frozen;
///
/// impl VariableModifier for Frozen {
///     type Variable = Gauge32;
///
///     fn name(&self) -> &str { "frozen" }
///
///     fn modify(&self, variable: &Gauge32, _rng: &mut dyn RngCore) -> Gauge32 {
///         *variable
///     }
/// }
///
/// let mut rng = rand::rng();
/// assert_eq!(Frozen.modify(&Gauge32(7), &mut rng), Gauge32(7));
/// ```
pub trait VariableModifier: Send + Sync {
    /// The variable representation this modifier produces.
    type Variable: Unsigned32;

    /// Human-readable name for diagnostics.
    fn name(&self) -> &str;

    /// Produce the next value of `variable`, drawing from `rng`.
    fn modify(&self, variable: &Self::Variable, rng: &mut dyn RngCore) -> Self::Variable;
}

impl<M: VariableModifier + ?Sized> VariableModifier for Box<M> {
    type Variable = M::Variable;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn modify(&self, variable: &Self::Variable, rng: &mut dyn RngCore) -> Self::Variable {
        (**self).modify(variable, rng)
    }
}

impl<M: VariableModifier + ?Sized> VariableModifier for Arc<M> {
    type Variable = M::Variable;

    fn name(&self) -> &str {
        (**self).name()
    }

    fn modify(&self, variable: &Self::Variable, rng: &mut dyn RngCore) -> Self::Variable {
        (**self).modify(variable, rng)
    }
}
