use alloc::vec::Vec;
use core::num::Saturating;
use ndarray::{Array2, ArrayView2};

use crate::*;

/// Owns the grid of a single game and resolves reveal, flag and chord actions against it.
///
/// Structure is fixed at creation; only tile states and the counters change afterwards. Starting a new game means
/// building a new engine.
#[derive(Clone, Debug, PartialEq)]
pub struct GridEngine {
    mine_layout: MineLayout,
    grid: Array2<Tile>,
    cleared_tiles: Saturating<CellCount>,
    flagged_count: Saturating<CellCount>,
}

impl GridEngine {
    /// Builds every tile from `mine_layout`, adjacency counts are computed once here.
    pub fn new(mine_layout: MineLayout) -> Self {
        let grid = Array2::from_shape_fn(mine_layout.size().to_nd_index(), |(y, x)| {
            // the shape was built from `Coord`s
            let coords = (x as Coord, y as Coord);
            Tile::new(
                coords,
                mine_layout.contains_mine(coords),
                mine_layout.adjacent_mine_count(coords),
            )
        });

        Self {
            mine_layout,
            grid,
            cleared_tiles: Saturating(0),
            flagged_count: Saturating(0),
        }
    }

    /// Fresh game with mines scattered by a `SmallRng` seeded from `seed`.
    pub fn new_game(config: GameConfig, seed: u64) -> Result<Self> {
        let engine = Self::new(MineLayout::generate_seeded(config, seed)?);
        log::debug!(
            "New game {}x{} with {} mines, seed {}",
            config.width,
            config.height,
            config.mines,
            seed
        );
        Ok(engine)
    }

    /// Fresh game with mines scattered by `source`.
    pub fn new_game_with(config: GameConfig, source: &mut impl UniformSource) -> Result<Self> {
        let engine = Self::new(MineLayout::generate(config, source)?);
        log::debug!(
            "New game {}x{} with {} mines",
            config.width,
            config.height,
            config.mines
        );
        Ok(engine)
    }

    pub fn width(&self) -> Coord {
        self.mine_layout.size().0
    }

    pub fn height(&self) -> Coord {
        self.mine_layout.size().1
    }

    /// `(width, height)`
    pub fn size(&self) -> Coord2 {
        self.mine_layout.size()
    }

    pub fn game_config(&self) -> GameConfig {
        self.mine_layout.game_config()
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_layout.mine_count()
    }

    /// Safe tiles revealed so far, never decreases.
    pub fn cleared_tiles(&self) -> CellCount {
        self.cleared_tiles.0
    }

    pub fn safe_tile_count(&self) -> CellCount {
        self.mine_layout.safe_tile_count()
    }

    /// Whether every safe tile is revealed. The engine keeps no win state, this is only a query.
    pub fn is_cleared(&self) -> bool {
        self.cleared_tiles() == self.safe_tile_count()
    }

    pub fn flagged_count(&self) -> CellCount {
        self.flagged_count.0
    }

    /// Mines minus flags, negative when the player over-flags.
    pub fn mines_left(&self) -> isize {
        (self.mine_count() as isize) - (self.flagged_count() as isize)
    }

    pub fn tile_at(&self, coords: Coord2) -> Result<&Tile> {
        let coords = self.mine_layout.validate_coords(coords)?;
        Ok(&self.grid[coords.to_nd_index()])
    }

    /// Read-only view of all tiles, `height` rows of `width` tiles, indexed `[y, x]`.
    pub fn grid(&self) -> ArrayView2<'_, Tile> {
        self.grid.view()
    }

    /// A revealed, non-zero tile whose flagged neighbours match its count.
    pub fn can_chord_reveal_at(&self, coords: Coord2) -> bool {
        let Some(tile) = self.grid.get(coords.to_nd_index()) else {
            return false;
        };

        tile.state().is_revealed()
            && tile.adjacent_mines() != 0
            && tile.adjacent_mines() == self.count_flagged_neighbors(coords)
    }

    /// Reveals the tile at `coords`, returns `true` when a mine was uncovered.
    ///
    /// A user click on an already revealed tile chords instead: when its flagged neighbours match its count, every
    /// hidden neighbour gets revealed in neighbour order, stopping at the first mine. Revealing a zero tile opens the
    /// whole connected zero region and its border. Flagged tiles are never touched.
    pub fn reveal(&mut self, coords: Coord2, is_user_click: bool) -> Result<bool> {
        let coords = self.mine_layout.validate_coords(coords)?;

        if is_user_click {
            log::debug!("Reveal at {:?}", coords);
            if self.can_chord_reveal_at(coords) {
                return Ok(self.chord_reveal(coords));
            }
        }

        Ok(self.reveal_tile(coords))
    }

    /// Flips a tile between hidden and flagged, revealed tiles are left alone.
    pub fn toggle_flag(&mut self, coords: Coord2) -> Result<()> {
        use TileState::*;

        let coords = self.mine_layout.validate_coords(coords)?;
        let tile = &mut self.grid[coords.to_nd_index()];

        match tile.state() {
            Hidden => {
                tile.set_state(Flagged);
                self.flagged_count += 1;
            }
            Flagged => {
                tile.set_state(Hidden);
                self.flagged_count -= 1;
            }
            Revealed => {}
        }
        Ok(())
    }

    fn chord_reveal(&mut self, coords: Coord2) -> bool {
        log::debug!("Chord reveal at {:?}", coords);
        for pos in self.mine_layout.iter_neighbors(coords) {
            if self.grid[pos.to_nd_index()].state().is_hidden() && self.reveal_tile(pos) {
                return true;
            }
        }
        false
    }

    /// Reveals a hidden tile and floods zero regions with an explicit stack.
    fn reveal_tile(&mut self, coords: Coord2) -> bool {
        let tile = &mut self.grid[coords.to_nd_index()];
        if !tile.state().is_hidden() {
            return false;
        }

        tile.set_state(TileState::Revealed);
        if tile.has_mine() {
            log::debug!("Mine triggered at {:?}", coords);
            return true;
        }

        self.cleared_tiles += 1;
        if tile.adjacent_mines() != 0 {
            return false;
        }

        let mut pending: Vec<Coord2> = self.hidden_neighbors(coords).collect();
        log::trace!(
            "Starting flood-fill from {:?}, initial neighbors: {:?}",
            coords,
            pending
        );

        while let Some(visit_coords) = pending.pop() {
            let tile = &mut self.grid[visit_coords.to_nd_index()];
            if !tile.state().is_hidden() {
                continue;
            }

            // neighbours of a zero tile are never mines
            debug_assert!(!tile.has_mine());
            tile.set_state(TileState::Revealed);
            self.cleared_tiles += 1;
            let visit_count = tile.adjacent_mines();
            log::trace!(
                "Flood revealed tile at {:?}, mine count: {}",
                visit_coords,
                visit_count
            );

            if visit_count == 0 {
                pending.extend(self.hidden_neighbors(visit_coords));
            }
        }

        false
    }

    fn hidden_neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + '_ {
        self.mine_layout
            .iter_neighbors(coords)
            .filter(|&pos| self.grid[pos.to_nd_index()].state().is_hidden())
    }

    fn count_flagged_neighbors(&self, coords: Coord2) -> u8 {
        // at most eight neighbours
        self.mine_layout
            .iter_neighbors(coords)
            .filter(|&pos| self.grid[pos.to_nd_index()].state().is_flagged())
            .count() as u8
    }
}
