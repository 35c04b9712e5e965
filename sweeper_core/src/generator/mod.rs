use crate::*;
use serde::{Deserialize, Serialize};
use rand::prelude::*;
pub use random::*;

mod random;

/// Uniform integer draws in `[0, bound)`. `bound` is never zero.
pub trait UniformSource {
    fn below(&mut self, bound: usize) -> usize;
}

impl UniformSource for SmallRng {
    fn below(&mut self, bound: usize) -> usize {
        self.random_range(0..bound)
    }
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    fn below(&mut self, bound: usize) -> usize {
        (**self).below(bound)
    }
}

/// How mines get scattered. Every strategy is uniform over all tiles, none of them protects the first click.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Rejection sampling while density is at most one half, shuffle above.
    #[default]
    Auto,
    /// Draw random coordinates until enough distinct ones have been hit.
    Rejection,
    /// Partial Fisher-Yates shuffle over every tile index.
    Shuffle,
}

impl Placement {
    /// The concrete strategy used for `config`, never `Auto`.
    pub const fn resolve(self, config: &GameConfig) -> Self {
        match self {
            Self::Auto if config.mines as u32 * 2 <= config.total_tiles() as u32 => Self::Rejection,
            Self::Auto => Self::Shuffle,
            other => other,
        }
    }
}

impl MineLayout {
    /// Places `config.mines` mines using `source`. The config must be valid.
    pub fn generate(config: GameConfig, source: &mut impl UniformSource) -> Result<Self> {
        config.validate()?;

        let strategy = config.placement.resolve(&config);
        log::debug!(
            "Placing {} mines on {}x{} with {:?}",
            config.mines,
            config.width,
            config.height,
            strategy
        );

        let layout = match strategy {
            Placement::Rejection | Placement::Auto => RejectionSampler.place(config, source),
            Placement::Shuffle => ShuffleSampler.place(config, source),
        };

        // double check mine count
        if layout.mine_count() != config.mines {
            log::warn!(
                "Generated layout count mismatch, actual: {}, requested: {}",
                layout.mine_count(),
                config.mines
            );
        }
        Ok(layout)
    }

    /// Same as [`MineLayout::generate`] with a `SmallRng` seeded from `seed`.
    pub fn generate_seeded(config: GameConfig, seed: u64) -> Result<Self> {
        let mut rng = SmallRng::seed_from_u64(seed);
        Self::generate(config, &mut rng)
    }
}

/// Strategy that fills an empty mine mask.
pub trait MineSampler {
    fn place(self, config: GameConfig, source: &mut impl UniformSource) -> MineLayout;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_picks_rejection_for_sparse_boards() {
        let config = GameConfig::new(10, 10, 50).unwrap();
        assert_eq!(Placement::Auto.resolve(&config), Placement::Rejection);
    }

    #[test]
    fn auto_picks_shuffle_for_dense_boards() {
        let config = GameConfig::new(10, 10, 51).unwrap();
        assert_eq!(Placement::Auto.resolve(&config), Placement::Shuffle);
    }

    #[test]
    fn explicit_strategy_is_kept() {
        let config = GameConfig::new(10, 10, 99).unwrap();
        assert_eq!(Placement::Rejection.resolve(&config), Placement::Rejection);
    }

    #[test]
    fn generate_places_exact_count_for_all_strategies() {
        for placement in [Placement::Auto, Placement::Rejection, Placement::Shuffle] {
            for mines in [0, 1, 10, 40, 63, 64] {
                let config = GameConfig::new(8, 8, mines).unwrap().with_placement(placement);
                for seed in 0..8 {
                    let layout = MineLayout::generate_seeded(config, seed).unwrap();
                    let counted = layout.mine_mask.iter().filter(|&&m| m).count();
                    assert_eq!(counted, usize::from(mines), "{placement:?} seed {seed}");
                    assert_eq!(layout.mine_count(), mines);
                    assert_eq!(layout.size(), (8, 8));
                }
            }
        }
    }

    #[test]
    fn generate_is_deterministic_per_seed() {
        let config = GameConfig::new(16, 16, 40).unwrap();
        let a = MineLayout::generate_seeded(config, 7).unwrap();
        let b = MineLayout::generate_seeded(config, 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn generate_rejects_invalid_config() {
        let config = GameConfig::new_unchecked(2, 2, 5);
        assert!(matches!(
            MineLayout::generate_seeded(config, 0),
            Err(GameError::TooManyMines { .. })
        ));
    }

    #[test]
    fn generate_handles_non_square_boards() {
        let config = GameConfig::new(30, 3, 45).unwrap();
        let layout = MineLayout::generate_seeded(config, 3).unwrap();
        assert_eq!(layout.size(), (30, 3));
        assert_eq!(layout.mine_count(), 45);
    }
}
