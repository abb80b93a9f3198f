//! Test utilities and RNG doubles for snmpsim development.
//!
//! Provides [`FixedDraw`], an [`RngCore`] whose uniform `f64` draws are
//! a chosen constant, [`SequenceDraw`] for scripted draw sequences, and
//! the [`props`] fixture for building property sets inline.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::RngCore;
use snmpsim_core::ModifierProperties;

/// Build a [`ModifierProperties`] from `(key, value)` pairs.
pub fn props(pairs: &[(&str, &str)]) -> ModifierProperties {
    pairs.iter().copied().collect()
}

/// Encode `draw` so that a 53-bit multiply-based `f64` sample taken from
/// the returned word reproduces it. Exact for multiples of `2^-53`.
fn encode_draw(draw: f64) -> u64 {
    assert!(
        (0.0..1.0).contains(&draw),
        "draw must lie in [0, 1), got {draw}"
    );
    ((draw * (1u64 << 53) as f64) as u64) << 11
}

/// An RNG whose every `f64` draw is the same fixed value.
///
/// Word-level output is the constant encoding of that draw; tests should
/// only rely on the `f64` samples.
#[derive(Clone, Debug)]
pub struct FixedDraw {
    word: u64,
}

impl FixedDraw {
    /// Every `rng.random::<f64>()` will return `draw`. Panics unless
    /// `draw` lies in `[0, 1)`.
    pub fn new(draw: f64) -> Self {
        Self {
            word: encode_draw(draw),
        }
    }
}

impl RngCore for FixedDraw {
    fn next_u32(&mut self) -> u32 {
        (self.word >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.word
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.word.to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// An RNG replaying a scripted sequence of `f64` draws, cycling when
/// exhausted.
#[derive(Clone, Debug)]
pub struct SequenceDraw {
    words: Vec<u64>,
    next: usize,
}

impl SequenceDraw {
    /// Panics if `draws` is empty or any draw lies outside `[0, 1)`.
    pub fn new(draws: &[f64]) -> Self {
        assert!(!draws.is_empty(), "SequenceDraw needs at least one draw");
        Self {
            words: draws.iter().copied().map(encode_draw).collect(),
            next: 0,
        }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RngCore for SequenceDraw {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let word = self.words[self.next % self.words.len()];
        self.next += 1;
        word
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = self.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn fixed_draw_reproduces_value() {
        for draw in [0.0, 0.25, 0.5, 0.75] {
            let mut rng = FixedDraw::new(draw);
            let sample: f64 = rng.random();
            assert_eq!(sample, draw);
        }
    }

    #[test]
    fn sequence_draw_cycles() {
        let mut rng = SequenceDraw::new(&[0.0, 0.5]);
        let samples: Vec<f64> = (0..4).map(|_| rng.random()).collect();
        assert_eq!(samples, [0.0, 0.5, 0.0, 0.5]);
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    #[should_panic(expected = "draw must lie in [0, 1)")]
    fn rejects_draw_of_one() {
        let _ = FixedDraw::new(1.0);
    }

    #[test]
    fn props_fixture_builds_in_order() {
        let p = props(&[("minimum", "1"), ("maximum", "2")]);
        let keys: Vec<&str> = p.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["minimum", "maximum"]);
    }
}
