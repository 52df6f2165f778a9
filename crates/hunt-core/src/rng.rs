/// Deterministic RNG helpers.
///
/// Small and dependency-free so tie-break jitter and world generation can be replayed from a
/// seed. It is **not** cryptographic.

pub trait DeterministicRng {
    fn next_u64(&mut self) -> u64;

    /// Uniform in `[0, 1)` with 53 bits of precision.
    fn next_f64_unit(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform in `0..bound`. Returns 0 when `bound` is 0.
    fn next_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        // Multiply-shift range reduction; bias is negligible for grid-sized bounds.
        ((self.next_u64() as u128 * bound as u128) >> 64) as u64
    }

    /// Uniform in `lo..=hi`. Swapped bounds are normalised.
    fn next_in_range(&mut self, lo: u32, hi: u32) -> u32 {
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        lo + self.next_below(u64::from(hi - lo) + 1) as u32
    }
}

impl<R: DeterministicRng + ?Sized> DeterministicRng for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }
}

/// SplitMix64: good seeding RNG and small deterministic generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    fn step(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E3779B97F4A7C15);
        mix64(self.state)
    }
}

impl DeterministicRng for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.step()
    }
}

pub fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^ (x >> 31)
}

/// Seed for one agent's stream (`stream` separates e.g. search jitter from fallback jitter).
pub fn derive_seed(global_seed: u64, agent_id: u64, stream: u64) -> u64 {
    let x = global_seed ^ mix64(agent_id.wrapping_add(0x9E3779B97F4A7C15)) ^ mix64(stream);
    mix64(x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_floats_stay_in_half_open_range() {
        let mut rng = SplitMix64::new(7);
        for _ in 0..1000 {
            let x = rng.next_f64_unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn ranges_are_inclusive_and_normalised() {
        let mut rng = SplitMix64::new(11);
        let mut seen = [false; 3];
        for _ in 0..200 {
            let v = rng.next_in_range(6, 4);
            assert!((4..=6).contains(&v));
            seen[(v - 4) as usize] = true;
        }
        assert_eq!(seen, [true; 3]);
        assert_eq!(rng.next_below(0), 0);
    }

    #[test]
    fn derived_seeds_differ_per_agent_and_stream() {
        assert_ne!(derive_seed(1, 1, 0), derive_seed(1, 2, 0));
        assert_ne!(derive_seed(1, 1, 0), derive_seed(1, 1, 1));
        assert_eq!(derive_seed(9, 3, 2), derive_seed(9, 3, 2));
    }
}
