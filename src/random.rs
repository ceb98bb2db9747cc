use std::time::{SystemTime, UNIX_EPOCH};

/// A source of uniformly distributed random numbers.
///
/// Components that need randomness own an implementation of this trait instead of reaching for a
/// process-wide generator. That way, unit tests can inject a seeded or scripted source and get
/// reproducible results.
pub trait RandomSource {
    /// Returns the next random number. The result must be in the range [0.0, 1.0).
    fn next_f32(&mut self) -> f32;
}

/// A small seeded random number generator (xorshift32). It is not cryptographically secure, but
/// it is fast and more than good enough to pick positions on a canvas.
#[derive(Clone, Debug)]
pub struct XorShiftRandom {
    state: u32,
}

impl XorShiftRandom {
    /// Constructs a new `XorShiftRandom` with the given `seed`. Two generators with the same seed
    /// will produce the same sequence.
    pub fn new(seed: u32) -> Self {
        // Xorshift gets stuck on 0 forever
        Self { state: seed.max(1) }
    }

    /// Constructs a new `XorShiftRandom` that is seeded with the current system time.
    pub fn from_time() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos() ^ elapsed.as_secs() as u32)
            .unwrap_or(0);
        Self::new(nanos)
    }

    fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }
}

impl RandomSource for XorShiftRandom {
    fn next_f32(&mut self) -> f32 {
        // Use the upper 24 bits: that is exactly the precision of an f32 mantissa, so the result
        // can never be rounded up to 1.0
        (self.next_u32() >> 8) as f32 / (1u32 << 24) as f32
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_range() {
        let mut random = XorShiftRandom::new(12345);
        for _counter in 0..10_000 {
            let value = random.next_f32();
            assert!(value >= 0.0 && value < 1.0);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut random1 = XorShiftRandom::new(77);
        let mut random2 = XorShiftRandom::new(77);
        for _counter in 0..100 {
            assert_eq!(random1.next_f32(), random2.next_f32());
        }
    }

    #[test]
    fn test_zero_seed() {
        // A zero seed must not produce a stream of zeros
        let mut random = XorShiftRandom::new(0);
        assert!((0..10).any(|_| random.next_f32() > 0.0));
    }

    #[test]
    fn test_spread() {
        // Not a real statistical test, but both halves should be hit plenty of times
        let mut random = XorShiftRandom::new(2020);
        let low_count = (0..1000).filter(|_| random.next_f32() < 0.5).count();
        assert!(low_count > 400 && low_count < 600);
    }
}
