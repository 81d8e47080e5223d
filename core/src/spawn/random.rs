use rand::prelude::*;

use super::*;

/// Seeded spawner: every empty cell is equally likely, and the spawned
/// value is 4 on a 1-in-10 roll, 2 otherwise.
#[derive(Clone, Debug)]
pub struct RandomSpawner {
    rng: SmallRng,
}

impl RandomSpawner {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl SpawnPolicy for RandomSpawner {
    fn choose_slot(&mut self, empty_count: usize) -> usize {
        self.rng.random_range(0..empty_count)
    }

    fn choose_value(&mut self) -> Value {
        if self.rng.random_range(0..10) == 1 { 4 } else { 2 }
    }
}
