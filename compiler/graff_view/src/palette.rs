//! Per-curve colors.
//!
//! Curve `i` gets channel values `(offset + i * stride) % 256`, with the
//! three offsets and three strides drawn from a seeded xorshift generator.
//! The same seed always gives the same colors.

use std::fmt;

/// An opaque 8-bit-per-channel color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl fmt::Display for Rgb {
    /// `#rrggbb`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// A deterministic color sequence.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Palette {
    strides: [u64; 3],
    offsets: [u64; 3],
}

/// Xorshift has a fixed point at zero; mixed into every seed so seed 0 works.
const SEED_MIX: u64 = 0x2545_f491_4f6c_dd1d;

impl Palette {
    pub fn new(seed: u64) -> Self {
        let mut state = seed ^ SEED_MIX;
        if state == 0 {
            state = SEED_MIX;
        }
        let mut draw = || xorshift(&mut state) & 0x7fff_ffff;
        let strides = [draw(), draw(), draw()];
        let offsets = [draw(), draw(), draw()];
        Palette { strides, offsets }
    }

    /// Color of the `index`-th curve.
    pub fn color(&self, index: usize) -> Rgb {
        let i = index as u64;
        let channel = |c: usize| {
            let value = self.offsets[c].wrapping_add(i.wrapping_mul(self.strides[c]));
            (value % 256) as u8
        };
        Rgb {
            r: channel(0),
            g: channel(1),
            b: channel(2),
        }
    }
}

fn xorshift(state: &mut u64) -> u64 {
    *state ^= *state << 13;
    *state ^= *state >> 7;
    *state ^= *state << 17;
    *state
}

#[cfg(test)]
mod tests;
