//! A simulated variable driven by one modifier.
//!
//! [`SimulatedVariable`] is the owning loop for a single polled value:
//! it stores the current value, applies its modifier once per tick and
//! keeps an instance-local seeded ChaCha8 RNG. Identical
//! `(modifier, initial value, seed)` triples replay identical sequences,
//! and independent variables never share a generator.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::modifier::VariableModifier;

/// One simulated variable and the modifier that moves it.
#[derive(Debug)]
pub struct SimulatedVariable<M: VariableModifier> {
    modifier: M,
    value: M::Variable,
    rng: ChaCha8Rng,
    ticks: u64,
}

impl<M: VariableModifier> SimulatedVariable<M> {
    /// Create a variable holding `initial`, with its RNG seeded from `seed`.
    pub fn new(modifier: M, initial: M::Variable, seed: u64) -> Self {
        Self {
            modifier,
            value: initial,
            rng: ChaCha8Rng::seed_from_u64(seed),
            ticks: 0,
        }
    }

    /// The current value, as a poll would report it.
    pub fn value(&self) -> M::Variable {
        self.value
    }

    /// Overwrite the current value (e.g. an SNMP SET).
    ///
    /// The next tick steps from here; an out-of-range value restarts
    /// from the modifier's minimum.
    pub fn set_value(&mut self, value: M::Variable) {
        self.value = value;
    }

    /// The modifier driving this variable.
    pub fn modifier(&self) -> &M {
        &self.modifier
    }

    /// Number of completed ticks.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Apply the modifier once, store and return the new value.
    pub fn tick(&mut self) -> M::Variable {
        self.value = self.modifier.modify(&self.value, &mut self.rng);
        self.ticks += 1;
        self.value
    }

    /// Tick `n` times and return the final value.
    pub fn advance(&mut self, n: u64) -> M::Variable {
        for _ in 0..n {
            self.tick();
        }
        self.value
    }
}
