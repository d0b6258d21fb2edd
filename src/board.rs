use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Rectangular grid of tiles with immutable-update discipline: every mutating
/// operation returns a new `Board` and leaves the original untouched, so the
/// controller can hold the previous snapshot without aliasing worries.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Board {
    pub(crate) tiles: Array2<Tile>,
}

impl Board {
    /// Builds a fresh board, calling `fill` once per cell.
    pub fn from_fn<F: FnMut() -> Tile>(size: Coord2, mut fill: F) -> Self {
        let dim = (usize::from(size.0), usize::from(size.1));
        Self {
            tiles: Array2::from_shape_fn(dim, |_| fill()),
        }
    }

    /// Board size as `(height, width)`.
    pub fn size(&self) -> Coord2 {
        let dim = self.tiles.dim();
        (
            dim.0.try_into().expect("height fits in a Coord"),
            dim.1.try_into().expect("width fits in a Coord"),
        )
    }

    pub fn total_tiles(&self) -> CellCount {
        let size = self.size();
        area(size.0, size.1)
    }

    pub fn in_bounds(&self, location: Coord2) -> bool {
        let size = self.size();
        location.0 < size.0 && location.1 < size.1
    }

    pub fn validate(&self, location: Coord2) -> Result<Coord2> {
        if self.in_bounds(location) {
            Ok(location)
        } else {
            Err(GameError::OutOfBounds)
        }
    }

    pub fn tile(&self, location: Coord2) -> Result<Tile> {
        let location = self.validate(location)?;
        Ok(self.tiles[location.to_nd_index()])
    }

    /// Returns a new board equal to this one except at `location`.
    pub fn with_tile(&self, location: Coord2, tile: Tile) -> Result<Board> {
        let location = self.validate(location)?;
        let mut tiles = self.tiles.clone();
        tiles[location.to_nd_index()] = tile;
        Ok(Board { tiles })
    }

    /// Applies `transform` to every cell, returning a new board. The board
    /// passed to the closure is the pre-transform one, so reads during the
    /// pass are stable.
    pub fn map<F>(&self, transform: F) -> Board
    where
        F: Fn(Tile, Coord2, &Board) -> Tile,
    {
        let tiles = Array2::from_shape_fn(self.tiles.raw_dim(), |(row, col)| {
            let location = (row as Coord, col as Coord);
            transform(self.tiles[[row, col]], location, self)
        });
        Board { tiles }
    }

    /// In-bounds neighbors of `location` over the given direction set.
    pub fn neighbors(&self, directions: DirectionSet, location: Coord2) -> NeighborIter {
        NeighborIter::new(directions, location, self.size())
    }

    pub fn iter_tiles(&self) -> impl Iterator<Item = (Coord2, Tile)> + '_ {
        self.tiles
            .indexed_iter()
            .map(|((row, col), &tile)| ((row as Coord, col as Coord), tile))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_board(size: Coord2) -> Board {
        Board::from_fn(size, Tile::default)
    }

    #[test]
    fn with_tile_leaves_the_original_unchanged() {
        let board = empty_board((3, 3));

        let updated = board.with_tile((1, 1), Tile::hidden(TileKind::Bomb)).unwrap();

        assert_eq!(board.tile((1, 1)).unwrap().kind, TileKind::Empty);
        assert_eq!(updated.tile((1, 1)).unwrap().kind, TileKind::Bomb);
    }

    #[test]
    fn tile_rejects_out_of_bounds_locations() {
        let board = empty_board((3, 4));

        assert_eq!(board.tile((3, 0)), Err(GameError::OutOfBounds));
        assert_eq!(board.tile((0, 4)), Err(GameError::OutOfBounds));
        assert!(board.tile((2, 3)).is_ok());
    }

    #[test]
    fn map_reads_from_the_pre_transform_board() {
        let board = empty_board((1, 3))
            .with_tile((0, 2), Tile::hidden(TileKind::Gold))
            .unwrap();

        // Copy each tile's right neighbor; with read stability the gold moves
        // exactly one step instead of smearing across the row.
        let shifted = board.map(|tile, location, source| {
            match source.tile((location.0, location.1 + 1)) {
                Ok(right) => right,
                Err(_) => tile,
            }
        });

        assert_eq!(shifted.tile((0, 1)).unwrap().kind, TileKind::Gold);
        assert_eq!(shifted.tile((0, 0)).unwrap().kind, TileKind::Empty);
    }

    #[test]
    fn corner_neighbor_counts_match_the_direction_set() {
        let board = empty_board((5, 5));

        assert_eq!(board.neighbors(DirectionSet::All, (0, 0)).count(), 3);
        assert_eq!(board.neighbors(DirectionSet::All, (2, 2)).count(), 8);
        assert_eq!(board.neighbors(DirectionSet::Orthogonal, (0, 2)).count(), 3);
    }

    #[test]
    fn iter_tiles_walks_every_cell() {
        let board = empty_board((4, 6));

        assert_eq!(board.iter_tiles().count(), 24);
        assert_eq!(board.total_tiles(), 24);
    }
}
