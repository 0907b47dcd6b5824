//! # Deterministic Random Generators
//!
//! Two generators whose output sequences are part of the cave format:
//!
//! - [`GdRandom`] is MT19937 seeded and range-reduced exactly like GLib's
//!   `GRand`, which existing caves were rendered with.
//! - [`C64Random`] is the byte generator of the C64 engine, used by
//!   `RandomFillC64` objects so imported caves look the same as on the C64.
//!
//! Changing either recurrence changes every cave that uses random fills or
//! mazes, and invalidates recorded replays.

use rand::{RngCore, SeedableRng};

const N: usize = 624;
const M: usize = 397;
const MATRIX_A: u32 = 0x9908_b0df;
const UPPER_MASK: u32 = 0x8000_0000;
const LOWER_MASK: u32 = 0x7fff_ffff;
const TEMPERING_MASK_B: u32 = 0x9d2c_5680;
const TEMPERING_MASK_C: u32 = 0xefc6_0000;

/// Mersenne twister with GLib-compatible seeding and range reduction.
///
/// # Examples
///
/// ```
/// use bdcave::GdRandom;
///
/// let mut a = GdRandom::new(42);
/// let mut b = GdRandom::new(42);
/// assert_eq!(a.next_u32(), b.next_u32());
///
/// let roll = a.rand_int_range(0, 256);
/// assert!((0..256).contains(&roll));
/// ```
#[derive(Clone)]
pub struct GdRandom {
    mt: [u32; N],
    mti: usize,
}

impl GdRandom {
    /// Creates a generator from a seed.
    pub fn new(seed: u32) -> Self {
        let mut random = Self { mt: [0; N], mti: N };
        random.set_seed(seed);
        random
    }

    /// Restarts the sequence from `seed`.
    pub fn set_seed(&mut self, seed: u32) {
        self.mt[0] = seed;
        for i in 1..N {
            let prev = self.mt[i - 1];
            self.mt[i] = 1_812_433_253u32
                .wrapping_mul(prev ^ (prev >> 30))
                .wrapping_add(i as u32);
        }
        self.mti = N;
    }

    fn generate_words(&mut self) {
        let mag01 = [0u32, MATRIX_A];
        for kk in 0..N - M {
            let y = (self.mt[kk] & UPPER_MASK) | (self.mt[kk + 1] & LOWER_MASK);
            self.mt[kk] = self.mt[kk + M] ^ (y >> 1) ^ mag01[(y & 1) as usize];
        }
        for kk in N - M..N - 1 {
            let y = (self.mt[kk] & UPPER_MASK) | (self.mt[kk + 1] & LOWER_MASK);
            self.mt[kk] = self.mt[kk + M - N] ^ (y >> 1) ^ mag01[(y & 1) as usize];
        }
        let y = (self.mt[N - 1] & UPPER_MASK) | (self.mt[0] & LOWER_MASK);
        self.mt[N - 1] = self.mt[M - 1] ^ (y >> 1) ^ mag01[(y & 1) as usize];
        self.mti = 0;
    }

    /// Next 32-bit value of the sequence.
    pub fn next_u32(&mut self) -> u32 {
        if self.mti >= N {
            self.generate_words();
        }
        let mut y = self.mt[self.mti];
        self.mti += 1;

        y ^= y >> 11;
        y ^= (y << 7) & TEMPERING_MASK_B;
        y ^= (y << 15) & TEMPERING_MASK_C;
        y ^= y >> 18;
        y
    }

    /// Uniform value in `begin..end`.
    ///
    /// Values above the largest multiple of the range width that fits in 32
    /// bits are rejected and redrawn, then the draw is reduced with `%`. An
    /// empty or inverted range returns `begin` without consuming a value.
    pub fn rand_int_range(&mut self, begin: i32, end: i32) -> i32 {
        if end <= begin {
            return begin;
        }
        let dist = end.wrapping_sub(begin) as u32;

        let maxvalue = if dist <= 0x8000_0000 {
            // 2^32 - 1 - (2^32 % dist), without 64-bit arithmetic
            let mut leftover = (0x8000_0000u32 % dist) * 2;
            if leftover >= dist {
                leftover -= dist;
            }
            0xffff_ffff - leftover
        } else {
            dist - 1
        };

        let mut value = self.next_u32();
        while value > maxvalue {
            value = self.next_u32();
        }
        begin.wrapping_add((value % dist) as i32)
    }

    /// Next value in `0..n`, or 0 when `n` is 0.
    pub fn next_in_range(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        if n > i32::MAX as u32 {
            // Same reduction as rand_int_range, for widths it cannot express.
            let maxvalue = n - 1;
            let mut value = self.next_u32();
            while value > maxvalue {
                value = self.next_u32();
            }
            return value;
        }
        self.rand_int_range(0, n as i32) as u32
    }
}

impl std::fmt::Debug for GdRandom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GdRandom").field("mti", &self.mti).finish_non_exhaustive()
    }
}

impl RngCore for GdRandom {
    fn next_u32(&mut self) -> u32 {
        GdRandom::next_u32(self)
    }

    fn next_u64(&mut self) -> u64 {
        let low = GdRandom::next_u32(self) as u64;
        let high = GdRandom::next_u32(self) as u64;
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = GdRandom::next_u32(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for GdRandom {
    /// Little-endian 32-bit seed.
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

/// The cave generator of the C64 engine.
///
/// Two 8-bit registers, each step mixing one into the other with carries.
/// Output is one byte per call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct C64Random {
    seed1: u32,
    seed2: u32,
}

impl C64Random {
    /// Creates a generator; the high byte of `seed` goes to the first register
    /// and the low byte to the second.
    pub fn new(seed: i32) -> Self {
        let mut random = Self { seed1: 0, seed2: 0 };
        random.set_seed(seed);
        random
    }

    pub fn set_seed(&mut self, seed: i32) {
        self.seed1 = (seed / 256).rem_euclid(256) as u32;
        self.seed2 = seed.rem_euclid(256) as u32;
    }

    /// Next byte of the sequence.
    pub fn next_byte(&mut self) -> u8 {
        let temp_rand_1 = (self.seed1 & 0x0001) << 7;
        let temp_rand_2 = (self.seed2 >> 1) & 0x007f;

        let mut result = self.seed2 + ((self.seed2 & 0x0001) << 7);
        let mut carry = result >> 8;
        result &= 0x00ff;
        result = result + carry + 0x13;
        carry = result >> 8;
        self.seed2 = result & 0x00ff;

        result = self.seed1 + carry + temp_rand_1;
        carry = result >> 8;
        result &= 0x00ff;
        result = result + carry + temp_rand_2;
        self.seed1 = result & 0x00ff;

        self.seed1 as u8
    }
}
