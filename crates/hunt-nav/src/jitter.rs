use hunt_core::DeterministicRng;

/// Small non-negative perturbation used to break ties between equally scored candidates.
///
/// A zero magnitude disables jitter and draws nothing from the RNG, which keeps tests exact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jitter {
    magnitude: f64,
}

impl Jitter {
    pub fn new(magnitude: f64) -> Self {
        Self {
            magnitude: magnitude.max(0.0),
        }
    }

    /// Uniform in `[0, magnitude)`.
    pub fn sample<R: DeterministicRng + ?Sized>(&self, rng: &mut R) -> f64 {
        if self.magnitude == 0.0 {
            return 0.0;
        }
        rng.next_f64_unit() * self.magnitude
    }
}
