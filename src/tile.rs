use core::fmt;
use serde::{Deserialize, Serialize};

/// Closed set of tile contents. An empty tile whose weighted neighbor score
/// is nonzero carries the net score as a `Hint` instead of staying blank.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Empty,
    Hint(i8),
    Bomb,
    Gold,
    Heart,
    Door,
    Telescope,
    Key,
    Germ,
    Microscope,
    Soap,
    Home,
}

impl TileKind {
    /// Dangerous kinds subtract from a neighboring hint score.
    pub const fn is_dangerous(self) -> bool {
        matches!(self, Self::Bomb)
    }

    /// Positive kinds add to a neighboring hint score.
    pub const fn is_positive(self) -> bool {
        matches!(self, Self::Gold | Self::Heart | Self::Door)
    }
}

/// Display glyphs for renderers and log text.
impl fmt::Display for TileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Hint(value) => write!(f, "{value}"),
            Self::Bomb => f.write_str("💣"),
            Self::Gold => f.write_str("💰"),
            Self::Heart => f.write_str("♥️"),
            Self::Door => f.write_str("🚪"),
            Self::Telescope => f.write_str("🔭"),
            Self::Key => f.write_str("🗝️"),
            Self::Germ => f.write_str("🦠"),
            Self::Microscope => f.write_str("🔬"),
            Self::Soap => f.write_str("🧼"),
            Self::Home => f.write_str("🏠"),
        }
    }
}

/// Raw split of the 8-neighborhood hint computation, kept for display.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NeighborCounts {
    pub positive: u8,
    pub dangerous: u8,
}

impl NeighborCounts {
    pub const fn net(self) -> i8 {
        self.positive as i8 - self.dangerous as i8
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
    pub revealed: bool,
    pub flagged: bool,
    pub locked: bool,
    pub infected: bool,
    pub neighbors: Option<NeighborCounts>,
}

impl Tile {
    pub const fn hidden(kind: TileKind) -> Self {
        Self {
            kind,
            revealed: false,
            flagged: false,
            locked: false,
            infected: false,
            neighbors: None,
        }
    }

    /// Whether the flood fill may expand through this tile. Numeric hints are
    /// passable like blanks; locked and infected tiles are impassable
    /// regardless of their kind.
    pub const fn expands(self) -> bool {
        !self.locked
            && !self.infected
            && matches!(
                self.kind,
                TileKind::Empty | TileKind::Hint(_) | TileKind::Home
            )
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::hidden(TileKind::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn blank_hint_and_home_tiles_expand() {
        assert!(Tile::hidden(TileKind::Empty).expands());
        assert!(Tile::hidden(TileKind::Home).expands());
        assert!(Tile::hidden(TileKind::Hint(2)).expands());
        assert!(!Tile::hidden(TileKind::Bomb).expands());
        assert!(!Tile::hidden(TileKind::Gold).expands());
    }

    #[test]
    fn locked_or_infected_tiles_never_expand() {
        let locked = Tile {
            locked: true,
            ..Tile::hidden(TileKind::Empty)
        };
        let infected = Tile {
            infected: true,
            ..Tile::hidden(TileKind::Empty)
        };

        assert!(!locked.expands());
        assert!(!infected.expands());
    }

    #[test]
    fn net_score_subtracts_dangerous_neighbors() {
        let counts = NeighborCounts {
            positive: 2,
            dangerous: 3,
        };

        assert_eq!(counts.net(), -1);
    }

    #[test]
    fn hint_displays_its_net_value() {
        assert_eq!(TileKind::Hint(-2).to_string(), "-2");
        assert_eq!(TileKind::Empty.to_string(), "");
    }
}
