use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

/// Random source handed to the samplers.
///
/// Seeded from the OS for normal use, or from a fixed seed for reproducible
/// puzzles and test fixtures.
#[derive(Debug, Clone)]
pub struct PuzzleRng {
    seed: u64,
    inner: Xoshiro256StarStar,
}

impl PuzzleRng {
    /// Create a generator seeded from the operating system
    pub fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Fallback: use a static counter if getrandom fails
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let counter = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = counter.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    /// Create a generator that always yields the same sequence for `seed`
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            inner: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    /// The seed this generator started from
    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl Default for PuzzleRng {
    fn default() -> Self {
        Self::new()
    }
}

impl RngCore for PuzzleRng {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.inner.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.inner.try_fill_bytes(dest)
    }
}
