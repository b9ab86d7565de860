use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::engine::RandomSource;

/// Процессный источник случайности (`thread_rng`), им играют обычные партии.
#[derive(Clone, Debug, Default)]
pub struct SystemRng;

impl RandomSource for SystemRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut rand::thread_rng());
    }
}

/// Детерминированный RNG для тестов и реплея.
/// Позволяет воспроизводить одни и те же раздачи при одинаковом seed.
#[derive(Clone, Debug)]
pub struct DeterministicRng {
    inner: StdRng,
}

impl DeterministicRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for DeterministicRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        slice.shuffle(&mut self.inner);
    }
}

/// RNG, выбранный конфигурацией во время выполнения: системный или сидированный.
#[derive(Clone, Debug)]
pub enum ConfiguredRng {
    System(SystemRng),
    Seeded(DeterministicRng),
}

impl RandomSource for ConfiguredRng {
    fn shuffle<T>(&mut self, slice: &mut [T]) {
        match self {
            ConfiguredRng::System(rng) => rng.shuffle(slice),
            ConfiguredRng::Seeded(rng) => rng.shuffle(slice),
        }
    }
}
