use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Hands out deterministic RNG streams derived from one master seed
#[derive(Resource, Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    master_seed: u64,
}

impl RngManager {
    pub fn new(seed: u64) -> Self {
        Self { master_seed: seed }
    }

    /// Uses `seed` when given, otherwise draws a master seed from entropy.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::new(seed),
            None => {
                let seed = rand::random();
                warn!("No seed provided, using entropy seed {}", seed);
                Self::new(seed)
            }
        }
    }

    pub fn master_seed(&self) -> u64 {
        self.master_seed
    }

    // Get a new RNG for a stream by hashing its name with master seed
    pub fn get_rng(&self, name: &str) -> ChaCha8Rng {
        let mut hasher = DefaultHasher::new();
        self.master_seed.hash(&mut hasher);
        name.hash(&mut hasher);
        ChaCha8Rng::seed_from_u64(hasher.finish())
    }
}

/// Per-agent random source consumed by the motion rules.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct AgentRng(pub ChaCha8Rng);

impl AgentRng {
    pub fn new(rng: ChaCha8Rng) -> Self {
        Self(rng)
    }
}
