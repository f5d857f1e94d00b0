use rand::{rngs::SmallRng, SeedableRng};

/// Random source owned by a single strategy. Seeded for reproducible runs,
/// otherwise drawn from OS entropy.
#[derive(Debug, Clone)]
pub struct MaybeSeededRng {
    rng: SmallRng,
}

impl MaybeSeededRng {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            SmallRng::seed_from_u64(seed)
        } else {
            SmallRng::from_os_rng()
        };

        Self { rng }
    }

    pub fn get_rng(&mut self) -> &mut SmallRng {
        &mut self.rng
    }
}
