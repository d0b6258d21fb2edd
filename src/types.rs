/// Single coordinate axis used for board rows, columns, and sizes.
pub type Coord = u8;

/// Count type used for tile totals and placement quantities.
pub type CellCount = u16;

/// Grid location as `(row, col)`; board sizes are `(height, width)`.
pub type Coord2 = (Coord, Coord);

/// Game level, counted from zero.
pub type Level = u8;

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn area(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

const ORTHOGONAL_DISPLACEMENTS: [(isize, isize); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

const ALL_DISPLACEMENTS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Which neighborhood an iteration walks: the 4 orthogonal tiles or all 8.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DirectionSet {
    Orthogonal,
    All,
}

impl DirectionSet {
    const fn displacements(self) -> &'static [(isize, isize)] {
        match self {
            Self::Orthogonal => &ORTHOGONAL_DISPLACEMENTS,
            Self::All => &ALL_DISPLACEMENTS,
        }
    }
}

/// Applies `delta` to `coords`, returning a value only when it remains in bounds.
fn apply_delta(coords: Coord2, delta: (isize, isize), bounds: Coord2) -> Option<Coord2> {
    let (row, col) = coords;
    let (drow, dcol) = delta;
    let (max_row, max_col) = bounds;

    let next_row = row.checked_add_signed(drow.try_into().ok()?)?;
    if next_row >= max_row {
        return None;
    }

    let next_col = col.checked_add_signed(dcol.try_into().ok()?)?;
    if next_col >= max_col {
        return None;
    }

    Some((next_row, next_col))
}

/// Iterates the in-bounds neighbors of a location, yielding 2 to 8 results
/// depending on the direction set and how close the center sits to an edge.
#[derive(Debug)]
pub struct NeighborIter {
    center: Coord2,
    bounds: Coord2,
    directions: &'static [(isize, isize)],
    index: u8,
}

impl NeighborIter {
    pub(crate) fn new(directions: DirectionSet, center: Coord2, bounds: Coord2) -> Self {
        Self {
            center,
            bounds,
            directions: directions.displacements(),
            index: 0,
        }
    }
}

impl Iterator for NeighborIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if usize::from(self.index) >= self.directions.len() {
                return None;
            }

            let next_item =
                apply_delta(self.center, self.directions[self.index as usize], self.bounds);
            self.index += 1;

            if next_item.is_some() {
                return next_item;
            }
        }
    }
}
