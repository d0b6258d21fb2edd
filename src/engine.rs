use alloc::collections::VecDeque;
use alloc::vec::Vec;
use hashbrown::HashSet;

use crate::*;

/// Connected region reachable from `origin` by expanding only through tiles
/// accepted by `eligible`, over the orthogonal neighbor relation. The region
/// is empty when the origin itself is ineligible or out of bounds.
///
/// The traversal is decoupled from category rules: callers inject whatever
/// passability predicate the current mechanic needs.
pub fn flood_region<F>(board: &Board, origin: Coord2, eligible: F) -> Vec<Coord2>
where
    F: Fn(Tile) -> bool,
{
    let mut region = Vec::new();
    if !board.in_bounds(origin) || !eligible(board.tiles[origin.to_nd_index()]) {
        return region;
    }

    let mut visited: HashSet<Coord2> = HashSet::new();
    visited.insert(origin);
    let mut to_visit = VecDeque::from([origin]);

    while let Some(location) = to_visit.pop_front() {
        region.push(location);

        for neighbor in board.neighbors(DirectionSet::Orthogonal, location) {
            if visited.insert(neighbor) && eligible(board.tiles[neighbor.to_nd_index()]) {
                to_visit.push_back(neighbor);
            }
        }
    }

    log::trace!("Flood from {origin:?} reached {} tiles", region.len());
    region
}

/// Reveals the clicked tile and its connected expandable region. The origin is
/// revealed even when it cannot expand (clicking a bomb reveals the bomb);
/// revealing clears the origin's flag. All other tile fields are preserved,
/// and `revealed` only ever flips hidden tiles on.
pub fn reveal_from(board: &Board, origin: Coord2) -> Result<Board> {
    board.validate(origin)?;

    let region = flood_region(board, origin, Tile::expands);

    let mut next = board.clone();
    for location in region {
        next.tiles[location.to_nd_index()].revealed = true;
    }

    let origin_tile = &mut next.tiles[origin.to_nd_index()];
    origin_tile.revealed = true;
    origin_tile.flagged = false;

    Ok(next)
}

/// Flags or unflags an unrevealed tile. Revealed tiles cannot be flagged; the
/// board is returned unchanged.
pub fn toggle_flag(board: &Board, location: Coord2, flagged: bool) -> Result<Board> {
    let tile = board.tile(location)?;
    if tile.revealed {
        return Ok(board.clone());
    }
    board.with_tile(location, Tile { flagged, ..tile })
}
