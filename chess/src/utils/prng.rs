/// Seeded xorshift generator for reproducible random playouts
pub struct PRNG {
    s: (u64, u64, u64, u64),
}

impl PRNG {
    pub const fn new(seed: u64) -> Self {
        let s0 = seed;
        let s1 = seed.wrapping_mul(2);
        let s2 = seed.wrapping_div(5);
        let s3 = seed.wrapping_add(seed.wrapping_div(2));

        PRNG {
            s: (s0, s1, s2, s3),
        }
    }

    #[inline]
    pub const fn random_u64(&mut self) -> u64 {
        let t = self.s.1 << 17;
        self.s.2 ^= self.s.0;
        self.s.3 ^= self.s.1;
        self.s.1 ^= self.s.2;
        self.s.0 ^= self.s.3;
        self.s.2 ^= t;
        self.s.3 = self.s.3.rotate_left(45);

        self.s.0
    }

    /// A number in `0..bound`, or 0 when `bound` is 0
    #[inline]
    pub const fn random_below(&mut self, bound: u64) -> u64 {
        if bound == 0 {
            return 0;
        }
        self.random_u64() % bound
    }
}

impl Default for PRNG {
    fn default() -> Self {
        PRNG::new(0x6B51FF299F6A3AEE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prng_sequence() {
        let mut prng = PRNG::new(12345);
        let first_sequence = (0..5).map(|_| prng.random_u64()).collect::<Vec<_>>();

        let mut prng = PRNG::new(12345);
        let second_sequence = (0..5).map(|_| prng.random_u64()).collect::<Vec<_>>();

        assert_eq!(first_sequence, second_sequence);
    }

    #[test]
    fn test_default_seed() {
        let mut prng1 = PRNG::default();
        let mut prng2 = PRNG::default();

        assert_eq!(prng1.random_u64(), prng2.random_u64());
    }

    #[test]
    fn test_random_below_stays_in_range() {
        let mut prng = PRNG::default();
        let mut seen = [false; 20];

        for _ in 0..2000 {
            let n = prng.random_below(20);
            assert!(n < 20);
            seen[n as usize] = true;
        }

        assert!(seen.iter().all(|&s| s), "every value should come up: {seen:?}");
        assert_eq!(prng.random_below(0), 0);
    }
}
