//! Body resources

use bevy::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Random source for body placement and particle scattering.
///
/// Seeded from the config when a seed is given so layouts are reproducible.
#[derive(Resource)]
pub struct PlacementRng(pub ChaCha8Rng);

impl PlacementRng {
    pub fn seeded(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }

    pub fn from_seed_option(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self(ChaCha8Rng::from_entropy()),
        }
    }
}

impl Default for PlacementRng {
    fn default() -> Self {
        Self::from_seed_option(None)
    }
}
