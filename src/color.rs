//! Palette generation for box overlays.
//!
//! Produces an unbounded color sequence where every new color keeps a
//! minimum RGB distance from all earlier ones. The required distance
//! shrinks as the palette grows, so rejection sampling always makes
//! progress. The sequence is fully determined by an explicit seed and can
//! be restarted with [`ColorSequence::reset`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

/// Packing constant (~√3/2) in the shrinking distance threshold.
const PACKING: f64 = 0.8660;

/// Seed colors emitted before any sampling happens.
const PRIMARIES: [Rgb; 3] = [
    Rgb {
        r: 0.999,
        g: 0.0,
        b: 0.0,
    },
    Rgb {
        r: 0.0,
        g: 0.999,
        b: 0.0,
    },
    Rgb {
        r: 0.0,
        g: 0.0,
        b: 0.999,
    },
];

/// One RGB color with unit-interval channels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Rgb {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Rgb {
    /// `#rrggbb` form used by display consumers.
    pub fn to_hex(self) -> String {
        let quantize = |c: f64| ((c * 256.0) as i64).clamp(0, 255) as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            quantize(self.r),
            quantize(self.g),
            quantize(self.b)
        )
    }

    fn distance(self, other: Rgb) -> f64 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        (dr * dr + dg * dg + db * db).sqrt()
    }
}

/// Unbounded, reproducible color stream.
///
/// Three fixed primaries come first; every later color is rejection
/// sampled until it clears the current minimum distance to the whole
/// palette so far.
#[derive(Clone, Debug)]
pub struct ColorSequence {
    seed: u64,
    rng: StdRng,
    past: Vec<Rgb>,
}

impl ColorSequence {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
            past: Vec::new(),
        }
    }

    /// Restart the sequence; the same colors will be produced again.
    pub fn reset(&mut self) {
        self.rng = StdRng::seed_from_u64(self.seed);
        self.past.clear();
    }

    /// Minimum distance a new color must keep from every earlier one.
    /// Shrinks as the palette grows.
    fn min_distance(&self) -> f64 {
        (PACKING / (self.past.len() as f64 + 1.0) / std::f64::consts::PI).sqrt()
    }
}

impl Iterator for ColorSequence {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        if self.past.len() < PRIMARIES.len() {
            let color = PRIMARIES[self.past.len()];
            self.past.push(color);
            return Some(color);
        }
        loop {
            let candidate = Rgb {
                r: self.rng.gen(),
                g: self.rng.gen(),
                b: self.rng.gen(),
            };
            let threshold = self.min_distance();
            if self
                .past
                .iter()
                .all(|&c| c.distance(candidate) >= threshold)
            {
                self.past.push(candidate);
                return Some(candidate);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_the_three_primaries() {
        let colors: Vec<Rgb> = ColorSequence::new(0).take(3).collect();
        assert_eq!(colors, PRIMARIES.to_vec());
    }

    #[test]
    fn same_seed_same_sequence() {
        let a: Vec<Rgb> = ColorSequence::new(7).take(12).collect();
        let b: Vec<Rgb> = ColorSequence::new(7).take(12).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_diverge_after_the_primaries() {
        let a: Vec<Rgb> = ColorSequence::new(1).take(10).collect();
        let b: Vec<Rgb> = ColorSequence::new(2).take(10).collect();
        assert_eq!(a[..3], b[..3]);
        assert_ne!(a[3..], b[3..]);
    }

    #[test]
    fn reset_restarts_the_sequence() {
        let mut seq = ColorSequence::new(3);
        let first: Vec<Rgb> = seq.by_ref().take(8).collect();
        seq.reset();
        let again: Vec<Rgb> = seq.take(8).collect();
        assert_eq!(first, again);
    }

    #[test]
    fn sampled_colors_keep_their_acceptance_distance() {
        let colors: Vec<Rgb> = ColorSequence::new(0).take(24).collect();
        for k in PRIMARIES.len()..colors.len() {
            // Threshold in force when color k was accepted.
            let threshold = (PACKING / (k as f64 + 1.0) / std::f64::consts::PI).sqrt();
            for earlier in &colors[..k] {
                assert!(
                    earlier.distance(colors[k]) >= threshold - 1e-12,
                    "color {k} violates its acceptance distance"
                );
            }
        }
    }

    #[test]
    fn hex_formatting_clamps_channels() {
        assert_eq!(PRIMARIES[0].to_hex(), "#ff0000");
        let black = Rgb {
            r: 0.0,
            g: 0.0,
            b: 0.0,
        };
        assert_eq!(black.to_hex(), "#000000");
        let white = Rgb {
            r: 1.0,
            g: 1.0,
            b: 1.0,
        };
        assert_eq!(white.to_hex(), "#ffffff");
    }
}
