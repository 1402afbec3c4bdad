/// Small deterministic generator used wherever the scene needs "random" values.
///
/// Every effect seeds its own instance from a quantized timestamp so identical inputs
/// always replay the same sequence.
#[derive(Clone, Copy, Debug)]
pub struct Rng64 {
    state: u64,
}

impl Rng64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    pub fn next_u64(&mut self) -> u64 {
        // SplitMix64
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }

    pub fn next_f64_01(&mut self) -> f64 {
        // 53 bits of precision.
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform integer in `lo..=hi`; returns `lo` for an empty range.
    pub fn range_i32(&mut self, lo: i32, hi: i32) -> i32 {
        if hi <= lo {
            return lo;
        }
        let span = (i64::from(hi) - i64::from(lo) + 1) as u64;
        lo + (self.next_u64() % span) as i32
    }

    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64_01() < probability
    }
}

/// Uniform value in `[-1, 1)` for lattice point `x` of the stream `seed`.
pub fn noise_signed(seed: u64, x: u64) -> f64 {
    let mut rng = Rng64::new(seed ^ x.wrapping_mul(0xD6E8_FEB8_6659_FD93));
    rng.next_f64_01() * 2.0 - 1.0
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Clamp that maps NaN to the lower bound and never panics.
///
/// Bounds may come in either order. A NaN bound collapses onto the other one; with both
/// bounds NaN the result is `0.0`.
pub fn clamp_finite(v: f64, lo: f64, hi: f64) -> f64 {
    let (lo, hi) = match (lo.is_nan(), hi.is_nan()) {
        (false, false) if lo <= hi => (lo, hi),
        (false, false) => (hi, lo),
        (true, false) => (hi, hi),
        (false, true) => (lo, lo),
        (true, true) => return 0.0,
    };
    if v.is_nan() { lo } else { v.clamp(lo, hi) }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
