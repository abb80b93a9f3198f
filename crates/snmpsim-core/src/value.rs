//! Unsigned 32-bit SMI value types and the [`Unsigned32`] trait.
//!
//! Each SMI kind is a distinct newtype over `u32` so a modifier built
//! for counters cannot accidentally be fed a gauge. Modifiers are
//! generic over [`Unsigned32`] and never inspect which kind they hold.

use std::fmt;

/// Largest value representable by an unsigned 32-bit SMI type, widened
/// to `i64` for bound arithmetic.
pub const UNSIGNED32_MAX: i64 = u32::MAX as i64;

/// An unsigned 32-bit variable representation.
///
/// Implementors supply construction from a raw value and access to the
/// current raw value; nothing else is required by the modifiers.
pub trait Unsigned32: Copy + fmt::Debug + Send + Sync + 'static {
    /// SMI type name, used for modifier names and diagnostics.
    const KIND: &'static str;

    /// Construct an instance from a raw unsigned 32-bit value.
    fn from_raw(raw: u32) -> Self;

    /// The current raw value.
    fn raw(&self) -> u32;
}

macro_rules! unsigned32_type {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(pub u32);

        impl Unsigned32 for $name {
            const KIND: &'static str = $kind;

            fn from_raw(raw: u32) -> Self {
                Self(raw)
            }

            fn raw(&self) -> u32 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(v: u32) -> Self {
                Self(v)
            }
        }

        impl From<$name> for u32 {
            fn from(v: $name) -> Self {
                v.0
            }
        }
    };
}

unsigned32_type!(
    /// Counter32: a monotonically reported counter that wraps at 2^32.
    Counter32,
    "Counter32"
);

unsigned32_type!(
    /// Gauge32: a non-wrapping level that may rise and fall.
    Gauge32,
    "Gauge32"
);

unsigned32_type!(
    /// TimeTicks: hundredths of a second since some epoch.
    TimeTicks,
    "TimeTicks"
);

unsigned32_type!(
    /// Unsigned32: a plain unsigned integer, encoded like Gauge32.
    UnsignedInteger32,
    "Unsigned32"
);
