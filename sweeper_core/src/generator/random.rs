use super::*;
use alloc::vec::Vec;

/// Draws random coordinates and keeps the ones not already mined. Unbounded in theory, fine for sparse boards.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct RejectionSampler;

impl MineSampler for RejectionSampler {
    fn place(self, config: GameConfig, source: &mut impl UniformSource) -> MineLayout {
        let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());
        let mut mines_placed: CellCount = 0;
        let mut draws: usize = 0;

        while mines_placed < config.mines {
            let x = source.below(config.width.into()) as Coord;
            let y = source.below(config.height.into()) as Coord;
            draws += 1;

            let tile = &mut mines[(x, y).to_nd_index()];
            if !*tile {
                *tile = true;
                mines_placed += 1;
            }
        }

        log::trace!("Rejection sampling took {} draws for {} mines", draws, mines_placed);
        MineLayout::from_mine_mask(mines)
    }
}

/// Partial Fisher-Yates over all tile indices, exactly one draw per mine.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct ShuffleSampler;

impl MineSampler for ShuffleSampler {
    fn place(self, config: GameConfig, source: &mut impl UniformSource) -> MineLayout {
        let total = usize::from(config.total_tiles());
        let mut indices: Vec<usize> = (0..total).collect();
        let mut mines: Array2<bool> = Array2::default(config.size().to_nd_index());
        let width = usize::from(config.width);

        for i in 0..usize::from(config.mines) {
            let pick = i + source.below(total - i);
            indices.swap(i, pick);

            let index = indices[i];
            // row-major, so the flat index splits into (y, x)
            mines[[index / width, index % width]] = true;
        }

        MineLayout::from_mine_mask(mines)
    }
}
