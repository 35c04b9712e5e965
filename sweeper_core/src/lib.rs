//! Rule engine for Minesweeper: mine placement, adjacency counts, and the
//! reveal/flag/chord operations that drive a single game.
//!
//! ```
//! use sweeper_core::{GameConfig, GridEngine};
//!
//! let config = GameConfig::new(9, 9, 10).unwrap();
//! let mut engine = GridEngine::new_game(config, 42).unwrap();
//! let hit_mine = engine.reveal((4, 4), true).unwrap();
//! if !hit_mine && engine.is_cleared() {
//!     // every safe tile is open
//! }
//! ```
#![no_std]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use engine::*;
pub use error::*;
pub use generator::*;
pub use tile::*;
#[cfg(feature = "std")]
pub use timer::*;
pub use types::*;

mod engine;
mod error;
mod generator;
mod tile;
#[cfg(feature = "std")]
mod timer;
mod types;

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
    #[serde(default)]
    pub placement: Placement,
}

impl GameConfig {
    pub const fn new_unchecked(width: Coord, height: Coord, mines: CellCount) -> Self {
        Self {
            width,
            height,
            mines,
            placement: Placement::Auto,
        }
    }

    pub fn new(width: Coord, height: Coord, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(width, height, mines);
        config.validate()?;
        Ok(config)
    }

    /// Parses a config such as `{"width": 9, "height": 9, "mines": 10}`.
    pub fn from_json(json: &str) -> Result<Self> {
        use alloc::string::ToString;

        let config: Self =
            serde_json::from_str(json).map_err(|err| GameError::InvalidConfig(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub const fn with_placement(mut self, placement: Placement) -> Self {
        self.placement = placement;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::EmptyBoard {
                width: self.width,
                height: self.height,
            });
        }

        let capacity = self.total_tiles();
        if self.mines > capacity {
            return Err(GameError::TooManyMines {
                requested: self.mines,
                capacity,
            });
        }

        Ok(())
    }

    pub const fn size(&self) -> Coord2 {
        (self.width, self.height)
    }

    pub const fn total_tiles(&self) -> CellCount {
        mult(self.width, self.height)
    }

    pub const fn safe_tiles(&self) -> CellCount {
        self.total_tiles().saturating_sub(self.mines)
    }
}

/// Where the mines are. Fixed once generated.
#[derive(Clone, Debug, PartialEq)]
pub struct MineLayout {
    mine_mask: Array2<bool>,
    mine_count: CellCount,
}

impl MineLayout {
    /// `mine_mask` is indexed `[y, x]`.
    pub(crate) fn from_mine_mask(mine_mask: Array2<bool>) -> Self {
        let mine_count = mine_mask
            .iter()
            .filter(|&&is_mine| is_mine)
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX);
        Self {
            mine_mask,
            mine_count,
        }
    }

    /// Layout with mines exactly at `mine_coords`, duplicates collapse.
    pub fn from_mine_coords(width: Coord, height: Coord, mine_coords: &[Coord2]) -> Result<Self> {
        GameConfig::new_unchecked(width, height, 0).validate()?;
        let mut mine_mask: Array2<bool> = Array2::default((width, height).to_nd_index());

        for &coords in mine_coords {
            if coords.0 >= width || coords.1 >= height {
                return Err(GameError::InvalidCoords {
                    coords,
                    width,
                    height,
                });
            }
            mine_mask[coords.to_nd_index()] = true;
        }

        Ok(Self::from_mine_mask(mine_mask))
    }

    pub fn game_config(&self) -> GameConfig {
        let (width, height) = self.size();
        GameConfig::new_unchecked(width, height, self.mine_count)
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let (width, height) = self.size();
        if coords.0 < width && coords.1 < height {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords {
                coords,
                width,
                height,
            })
        }
    }

    /// `(width, height)`
    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.mine_mask.dim();
        // dimensions come from a `Coord2`, they always fit
        (cols as Coord, rows as Coord)
    }

    pub fn total_tiles(&self) -> CellCount {
        let (width, height) = self.size();
        mult(width, height)
    }

    pub fn safe_tile_count(&self) -> CellCount {
        self.total_tiles() - self.mine_count
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn contains_mine(&self, coords: Coord2) -> bool {
        self[coords]
    }

    pub fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most eight neighbours
        self.iter_neighbors(coords).filter(|&pos| self[pos]).count() as u8
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        NeighborIter::new(coords, self.size())
    }
}

impl Index<Coord2> for MineLayout {
    type Output = bool;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.mine_mask[coords.to_nd_index()]
    }
}
