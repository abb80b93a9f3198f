//! Benchmark profiles for the snmpsim device simulator.
//!
//! - [`interface_table`]: a device's interface counters, one octet
//!   counter per interface, all sharing one modifier configuration.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::Arc;

use snmpsim_core::{ConfigError, Counter32, ModifierProperties};
use snmpsim_modifier::{Counter32Modifier, SimulatedVariable};

/// Octet counters for `interfaces` interfaces stepping 0..=125_000 per
/// tick (about 1 Gbit/s at one tick per second).
///
/// Variable `i` is seeded with `seed + i` and starts at `i * 1000`.
pub fn interface_table(
    interfaces: u32,
    seed: u64,
) -> Result<Vec<SimulatedVariable<Arc<Counter32Modifier>>>, ConfigError> {
    let props: ModifierProperties = [("minimumStep", "0"), ("maximumStep", "125000")]
        .into_iter()
        .collect();
    let modifier = Arc::new(Counter32Modifier::from_properties(&props)?);

    Ok((0..interfaces)
        .map(|i| {
            SimulatedVariable::new(
                Arc::clone(&modifier),
                Counter32(i.wrapping_mul(1000)),
                seed.wrapping_add(u64::from(i)),
            )
        })
        .collect())
}
