//! The bounded step-and-wraparound algorithm.
//!
//! [`BoundedStep`] holds the validated bounds and step range of one
//! modifier and computes the next value from the current one and a
//! single uniform draw. It knows nothing about SMI types or RNGs, which
//! keeps it a pure function of `(config, current, draw)`.
//!
//! Arithmetic is done in `i64` with two's-complement wrapping so that
//! unusual step ranges (negative, inverted, or near `i64::MAX`) behave
//! like fixed-width long arithmetic instead of panicking.

use snmpsim_core::{ConfigError, ModifierProperties, UNSIGNED32_MAX};
use tracing::{debug, trace, warn};

/// Property key for the lower bound.
pub const KEY_MINIMUM: &str = "minimum";
/// Property key for the upper bound.
pub const KEY_MAXIMUM: &str = "maximum";
/// Property key for the smallest step.
pub const KEY_MINIMUM_STEP: &str = "minimumStep";
/// Property key for the largest step.
pub const KEY_MAXIMUM_STEP: &str = "maximumStep";

/// Lower bound used when `minimum` is not configured.
pub const DEFAULT_MINIMUM: i64 = 0;
/// Upper bound used when `maximum` is not configured.
pub const DEFAULT_MAXIMUM: i64 = UNSIGNED32_MAX;
/// Smallest step used when `minimumStep` is not configured.
pub const DEFAULT_MINIMUM_STEP: i64 = 0;
/// Largest step used when `maximumStep` is not configured.
pub const DEFAULT_MAXIMUM_STEP: i64 = 1;

/// Validated bounds and step range for a bounded unsigned 32-bit variable.
///
/// Only the bounds are range-checked. `minimum <= maximum` and the
/// relation between the step limits are accepted as configured; the
/// final clamp in [`next_value`](Self::next_value) keeps results
/// inside `[minimum, maximum]` whenever that interval is non-empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundedStep {
    minimum: i64,
    maximum: i64,
    minimum_step: i64,
    maximum_step: i64,
}

impl Default for BoundedStep {
    fn default() -> Self {
        Self {
            minimum: DEFAULT_MINIMUM,
            maximum: DEFAULT_MAXIMUM,
            minimum_step: DEFAULT_MINIMUM_STEP,
            maximum_step: DEFAULT_MAXIMUM_STEP,
        }
    }
}

impl BoundedStep {
    /// Build from explicit values, validating the bounds.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidConfiguration`] if either bound is negative
    /// or exceeds `2^32 - 1`. The first violated check is reported.
    pub fn new(
        minimum: i64,
        maximum: i64,
        minimum_step: i64,
        maximum_step: i64,
    ) -> Result<Self, ConfigError> {
        if minimum < 0 {
            return Err(ConfigError::invalid("minimum should not be negative"));
        }
        if maximum < 0 {
            return Err(ConfigError::invalid("maximum should not be negative"));
        }
        if minimum > UNSIGNED32_MAX {
            return Err(ConfigError::invalid(
                "minimum should not exceed 2^32-1 (4294967295 decimal)",
            ));
        }
        if maximum > UNSIGNED32_MAX {
            return Err(ConfigError::invalid(
                "maximum should not exceed 2^32-1 (4294967295 decimal)",
            ));
        }

        if minimum > maximum {
            warn!(minimum, maximum, "minimum exceeds maximum; every value will clamp");
        }
        if minimum_step > maximum_step {
            warn!(minimum_step, maximum_step, "minimumStep exceeds maximumStep");
        }

        Ok(Self {
            minimum,
            maximum,
            minimum_step,
            maximum_step,
        })
    }

    /// Read `minimum`, `maximum`, `minimumStep` and `maximumStep` from
    /// `properties`, substituting defaults for absent keys.
    ///
    /// All four keys are parsed before any bound is checked, so a
    /// malformed value is reported even when a bound is also out of range.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::InvalidProperty`] if a present value is not an integer.
    /// - [`ConfigError::InvalidConfiguration`] as for [`new`](Self::new).
    pub fn from_properties(properties: &ModifierProperties) -> Result<Self, ConfigError> {
        let minimum = properties.get_long_or(KEY_MINIMUM, DEFAULT_MINIMUM)?;
        let maximum = properties.get_long_or(KEY_MAXIMUM, DEFAULT_MAXIMUM)?;
        let minimum_step = properties.get_long_or(KEY_MINIMUM_STEP, DEFAULT_MINIMUM_STEP)?;
        let maximum_step = properties.get_long_or(KEY_MAXIMUM_STEP, DEFAULT_MAXIMUM_STEP)?;

        let bounds = Self::new(minimum, maximum, minimum_step, maximum_step)?;
        debug!(
            minimum,
            maximum,
            minimum_step,
            maximum_step,
            "bounded step modifier configured"
        );
        Ok(bounds)
    }

    /// Lowest value the variable may take.
    pub fn minimum(&self) -> i64 {
        self.minimum
    }

    /// Highest value the variable may take.
    pub fn maximum(&self) -> i64 {
        self.maximum
    }

    /// Smallest step applied per modification.
    pub fn minimum_step(&self) -> i64 {
        self.minimum_step
    }

    /// Largest step applied per modification.
    pub fn maximum_step(&self) -> i64 {
        self.maximum_step
    }

    /// Map a uniform draw on `[0, 1)` to a step in
    /// `[minimum_step, maximum_step]`.
    pub fn step_for(&self, draw: f64) -> i64 {
        let span = self.maximum_step.wrapping_sub(self.minimum_step);
        round_half_up(draw * span as f64).wrapping_add(self.minimum_step)
    }

    /// Compute the next value from `current` and one uniform draw.
    ///
    /// `current` may be any integer. Values outside `[minimum, maximum]`
    /// restart from `minimum` before stepping. A step that overshoots the
    /// remaining headroom wraps to `minimum + (step - headroom - 1)`, and
    /// the result is then clamped into `[minimum, maximum]`.
    pub fn next_value(&self, current: i64, draw: f64) -> i64 {
        let working = if current < self.minimum || current > self.maximum {
            self.minimum
        } else {
            current
        };

        let step = self.step_for(draw);
        let headroom = self.maximum.wrapping_sub(working);

        let next = if step.wrapping_abs() > headroom.wrapping_abs() {
            let wrapped = self
                .minimum
                .wrapping_add(step.wrapping_sub(headroom).wrapping_sub(1));
            trace!(working, step, headroom, wrapped, "step overshoots maximum; wrapping");
            wrapped
        } else {
            working.wrapping_add(step)
        };

        if next < self.minimum {
            self.minimum
        } else if next > self.maximum {
            self.maximum
        } else {
            next
        }
    }
}

/// Round half up (`floor(x + 0.5)`) without the precision loss of
/// adding 0.5 first. NaN maps to 0; out-of-range values saturate.
fn round_half_up(x: f64) -> i64 {
    let floor = x.floor();
    let rounded = if x - floor >= 0.5 { floor + 1.0 } else { floor };
    rounded as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds(min: i64, max: i64, min_step: i64, max_step: i64) -> BoundedStep {
        BoundedStep::new(min, max, min_step, max_step).unwrap()
    }

    // ---------------------------------------------------------------
    // Validation
    // ---------------------------------------------------------------

    #[test]
    fn defaults_match_documented_values() {
        let b = BoundedStep::default();
        assert_eq!(b.minimum(), 0);
        assert_eq!(b.maximum(), 4_294_967_295);
        assert_eq!(b.minimum_step(), 0);
        assert_eq!(b.maximum_step(), 1);
    }

    #[test]
    fn empty_properties_yield_defaults() {
        let b = BoundedStep::from_properties(&ModifierProperties::new()).unwrap();
        assert_eq!(b, BoundedStep::default());
    }

    #[test]
    fn negative_minimum_rejected() {
        let err = BoundedStep::new(-1, 10, 0, 1).unwrap_err();
        assert_eq!(err, ConfigError::invalid("minimum should not be negative"));
    }

    #[test]
    fn negative_maximum_rejected() {
        let err = BoundedStep::new(0, -5, 0, 1).unwrap_err();
        assert!(err.to_string().contains("maximum should not be negative"));
    }

    #[test]
    fn bounds_above_u32_rejected() {
        let err = BoundedStep::new(UNSIGNED32_MAX + 1, UNSIGNED32_MAX, 0, 1).unwrap_err();
        assert!(err.to_string().contains("minimum should not exceed"));
        let err = BoundedStep::new(0, UNSIGNED32_MAX + 1, 0, 1).unwrap_err();
        assert!(err.to_string().contains("maximum should not exceed"));
    }

    #[test]
    fn first_violation_is_reported() {
        let err = BoundedStep::new(-1, -1, 0, 1).unwrap_err();
        assert!(err.to_string().contains("minimum"));
    }

    #[test]
    fn inverted_bounds_and_steps_accepted() {
        let b = bounds(10, 5, 3, -3);
        assert_eq!(b.minimum(), 10);
        assert_eq!(b.maximum(), 5);
    }

    #[test]
    fn extreme_bounds_accepted() {
        let b = bounds(UNSIGNED32_MAX, UNSIGNED32_MAX, i64::MIN, i64::MAX);
        assert_eq!(b.minimum(), b.maximum());
    }

    // ---------------------------------------------------------------
    // Step draw
    // ---------------------------------------------------------------

    #[test]
    fn round_half_up_matches_long_rounding() {
        assert_eq!(round_half_up(2.5), 3);
        assert_eq!(round_half_up(-2.5), -2);
        assert_eq!(round_half_up(2.4999), 2);
        assert_eq!(round_half_up(0.49999999999999994), 0);
        assert_eq!(round_half_up(f64::NAN), 0);
        assert_eq!(round_half_up(f64::INFINITY), i64::MAX);
        assert_eq!(round_half_up(f64::NEG_INFINITY), i64::MIN);
    }

    #[test]
    fn step_spans_configured_range() {
        let b = bounds(0, 100, 2, 6);
        assert_eq!(b.step_for(0.0), 2);
        assert_eq!(b.step_for(0.5), 4);
        assert_eq!(b.step_for(0.999_999), 6);
    }

    #[test]
    fn inverted_step_range_steps_downward() {
        let b = bounds(0, 100, 5, 1);
        assert_eq!(b.step_for(0.0), 5);
        assert_eq!(b.step_for(0.999_999), 1);
    }

    // ---------------------------------------------------------------
    // Next value
    // ---------------------------------------------------------------

    #[test]
    fn overshoot_wraps_from_minimum() {
        let b = bounds(0, 10, 5, 5);
        assert_eq!(b.next_value(8, 0.3), 2);
    }

    #[test]
    fn step_within_headroom_adds() {
        let b = bounds(0, 10, 5, 5);
        assert_eq!(b.next_value(3, 0.7), 8);
    }

    #[test]
    fn zero_step_is_stationary() {
        let b = bounds(0, 10, 0, 0);
        for v in 0..=10 {
            assert_eq!(b.next_value(v, 0.5), v);
        }
    }

    #[test]
    fn out_of_range_restarts_at_minimum() {
        let b = bounds(5, 10, 1, 1);
        assert_eq!(b.next_value(4, 0.0), 6);
        assert_eq!(b.next_value(11, 0.0), 6);
        assert_eq!(b.next_value(i64::MIN, 0.0), 6);
        assert_eq!(b.next_value(i64::MAX, 0.0), 6);
    }

    #[test]
    fn default_counter_increments_and_wraps_at_max() {
        let b = BoundedStep::default();
        assert_eq!(b.next_value(41, 0.9), 42);
        assert_eq!(b.next_value(41, 0.1), 41);
        assert_eq!(b.next_value(UNSIGNED32_MAX, 0.9), 0);
    }

    #[test]
    fn wrap_result_below_minimum_is_clamped() {
        // headroom 0, step -3: |-3| > 0 so 5 + (-3 - 0 - 1) = 1, clamped to 5
        let b = bounds(5, 10, -3, -3);
        assert_eq!(b.next_value(10, 0.0), 5);
    }

    #[test]
    fn large_step_clamps_at_maximum() {
        // headroom 10, step 1000: wraps to 0 + 989, clamped to 10
        let b = bounds(0, 10, 1000, 1000);
        assert_eq!(b.next_value(0, 0.0), 10);
    }

    #[test]
    fn inverted_bounds_clamp_to_minimum_or_maximum() {
        let b = bounds(10, 5, 0, 0);
        // working = 10, headroom = -5, step 0 -> 10, above maximum -> 5
        assert_eq!(b.next_value(7, 0.0), 5);
    }

    #[test]
    fn extreme_steps_do_not_panic() {
        let b = bounds(0, UNSIGNED32_MAX, i64::MIN, i64::MAX);
        for draw in [0.0, 0.25, 0.5, 0.999_999] {
            let v = b.next_value(123, draw);
            assert!((0..=UNSIGNED32_MAX).contains(&v));
        }
    }

    fn arb_bounds() -> impl Strategy<Value = BoundedStep> {
        (0..=UNSIGNED32_MAX, 0..=UNSIGNED32_MAX, any::<i64>(), any::<i64>()).prop_map(
            |(a, b, s1, s2)| {
                let (min, max) = if a <= b { (a, b) } else { (b, a) };
                bounds(min, max, s1, s2)
            },
        )
    }

    proptest! {
        #[test]
        fn result_always_within_bounds(
            b in arb_bounds(),
            current in any::<i64>(),
            draw in 0.0f64..1.0,
        ) {
            let next = b.next_value(current, draw);
            prop_assert!(next >= b.minimum() && next <= b.maximum());
        }

        #[test]
        fn out_of_range_behaves_like_minimum(
            b in arb_bounds(),
            offset in 1i64..1_000_000,
            draw in 0.0f64..1.0,
        ) {
            let from_min = b.next_value(b.minimum(), draw);
            prop_assert_eq!(b.next_value(b.minimum() - offset, draw), from_min);
            prop_assert_eq!(b.next_value(b.maximum() + offset, draw), from_min);
        }

        #[test]
        fn same_inputs_same_output(
            b in arb_bounds(),
            current in any::<i64>(),
            draw in 0.0f64..1.0,
        ) {
            prop_assert_eq!(b.next_value(current, draw), b.next_value(current, draw));
        }

        #[test]
        fn step_stays_in_ordered_range(
            lo in -1_000_000i64..1_000_000,
            width in 0i64..1_000_000,
            draw in 0.0f64..1.0,
        ) {
            let b = bounds(0, 10, lo, lo + width);
            let step = b.step_for(draw);
            prop_assert!(step >= lo && step <= lo + width);
        }
    }
}
