use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::*;
pub use weighted::*;

mod weighted;

/// Generates the board for one level as a strict pipeline of passes, each
/// consuming the previous pass's board: base fill, home placement, special
/// placements, level-conditional mechanics, hint annotation, initial reveal.
pub fn generate<R: Rng + ?Sized>(size: Coord2, level: Level, rng: &mut R) -> Result<Board> {
    let size = (size.0.max(1), size.1.max(1));
    let config = level_config(level);
    let table = WeightedTable::new(config.weights.iter().copied())?;

    let board = Board::from_fn(size, || Tile::hidden(table.pick(rng)));

    let home = random_location(size, rng);
    let board = board.with_tile(home, Tile::hidden(TileKind::Home))?;
    log::debug!("Placed home at {home:?}");

    let board = place_special(&board, TileKind::Telescope, rng)?;
    let board = place_special(&board, TileKind::Door, rng)?;

    let board = if config.locks {
        let board = mark_tiles(&board, LOCKED_TILE_QUANTITY, rng, |tile| Tile {
            locked: true,
            ..tile
        })?;
        place_special(&board, TileKind::Key, rng)?
    } else {
        board
    };

    let board = if config.infection {
        let board = mark_tiles(&board, INFECTED_TILE_QUANTITY, rng, |tile| Tile {
            infected: true,
            ..tile
        })?;
        place_special(&board, TileKind::Microscope, rng)?
    } else {
        board
    };

    let board = annotate_hints(&board);

    // open the starting region so the player does not begin blind
    reveal_from(&board, home)
}

/// Seeded convenience wrapper for deterministic generation.
pub fn generate_seeded(size: Coord2, level: Level, seed: u64) -> Result<Board> {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate(size, level, &mut rng)
}

fn random_location<R: Rng + ?Sized>(size: Coord2, rng: &mut R) -> Coord2 {
    (rng.random_range(0..size.0), rng.random_range(0..size.1))
}

/// Drops one tile of `kind` at a uniformly random location. Later placements
/// win: an earlier special tile at the same spot is overwritten, with no
/// retry. This can occasionally delete a previously placed special.
fn place_special<R: Rng + ?Sized>(board: &Board, kind: TileKind, rng: &mut R) -> Result<Board> {
    let location = random_location(board.size(), rng);
    log::debug!("Placed {kind:?} at {location:?}");
    board.with_tile(location, Tile::hidden(kind))
}

/// Marks `quantity` uniformly random tiles, sampling with replacement:
/// duplicate draws re-mark the same tile redundantly.
fn mark_tiles<R, F>(board: &Board, quantity: CellCount, rng: &mut R, mark: F) -> Result<Board>
where
    R: Rng + ?Sized,
    F: Fn(Tile) -> Tile,
{
    let mut board = board.clone();
    for _ in 0..quantity {
        let location = random_location(board.size(), rng);
        let tile = board.tile(location)?;
        board = board.with_tile(location, mark(tile))?;
    }
    Ok(board)
}

/// Turns empty tiles with a nonzero weighted neighbor score into hints
/// carrying the net score plus the raw positive/dangerous split.
fn annotate_hints(board: &Board) -> Board {
    board.map(|tile, location, source| {
        if tile.kind != TileKind::Empty {
            return tile;
        }

        let counts = count_neighbor_kinds(source, location);
        if counts.positive == 0 && counts.dangerous == 0 {
            return tile;
        }

        Tile {
            kind: TileKind::Hint(counts.net()),
            neighbors: Some(counts),
            ..tile
        }
    })
}

fn count_neighbor_kinds(board: &Board, location: Coord2) -> NeighborCounts {
    let mut counts = NeighborCounts {
        positive: 0,
        dangerous: 0,
    };
    for neighbor in board.neighbors(DirectionSet::All, location) {
        let kind = board.tiles[neighbor.to_nd_index()].kind;
        if kind.is_dangerous() {
            counts.dangerous += 1;
        } else if kind.is_positive() {
            counts.positive += 1;
        }
    }
    counts
}
