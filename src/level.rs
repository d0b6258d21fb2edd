use crate::*;

/// Reaching this level wins the run.
pub const LEVEL_CEILING: Level = 9;

/// Tiles marked `locked` on lock-enabled levels.
pub const LOCKED_TILE_QUANTITY: CellCount = 10;

/// Tiles marked `infected` on infection-enabled levels.
pub const INFECTED_TILE_QUANTITY: CellCount = 20;

/// Everything generation needs to know about one level: the tile weight table
/// and which board-wide mechanics are active.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LevelConfig {
    pub weights: &'static [(TileKind, u32)],
    pub locks: bool,
    pub infection: bool,
}

const DEFAULT_WEIGHTS: &[(TileKind, u32)] = &[
    (TileKind::Bomb, 20),
    (TileKind::Gold, 20),
    (TileKind::Heart, 2),
    (TileKind::Empty, 58),
];

const DEFAULT_CONFIG: LevelConfig = LevelConfig {
    weights: DEFAULT_WEIGHTS,
    locks: false,
    infection: false,
};

/// Per-level table. Weights drift toward hazards as the player descends;
/// locks arrive on level 3 and germs on level 5.
const LEVEL_TABLE: [LevelConfig; 9] = [
    // 0
    DEFAULT_CONFIG,
    // 1
    LevelConfig {
        weights: &[
            (TileKind::Bomb, 22),
            (TileKind::Gold, 20),
            (TileKind::Heart, 2),
            (TileKind::Empty, 56),
        ],
        locks: false,
        infection: false,
    },
    // 2
    LevelConfig {
        weights: &[
            (TileKind::Bomb, 24),
            (TileKind::Gold, 18),
            (TileKind::Heart, 3),
            (TileKind::Empty, 55),
        ],
        locks: false,
        infection: false,
    },
    // 3
    LevelConfig {
        weights: &[
            (TileKind::Bomb, 24),
            (TileKind::Gold, 18),
            (TileKind::Heart, 3),
            (TileKind::Empty, 55),
        ],
        locks: true,
        infection: false,
    },
    // 4
    LevelConfig {
        weights: &[
            (TileKind::Bomb, 26),
            (TileKind::Gold, 18),
            (TileKind::Heart, 3),
            (TileKind::Empty, 53),
        ],
        locks: true,
        infection: false,
    },
    // 5
    LevelConfig {
        weights: &[
            (TileKind::Bomb, 26),
            (TileKind::Gold, 16),
            (TileKind::Heart, 3),
            (TileKind::Germ, 4),
            (TileKind::Empty, 51),
        ],
        locks: false,
        infection: true,
    },
    // 6
    LevelConfig {
        weights: &[
            (TileKind::Bomb, 28),
            (TileKind::Gold, 16),
            (TileKind::Heart, 4),
            (TileKind::Germ, 4),
            (TileKind::Empty, 48),
        ],
        locks: true,
        infection: true,
    },
    // 7
    LevelConfig {
        weights: &[
            (TileKind::Bomb, 30),
            (TileKind::Gold, 14),
            (TileKind::Heart, 4),
            (TileKind::Germ, 6),
            (TileKind::Empty, 46),
        ],
        locks: true,
        infection: true,
    },
    // 8
    LevelConfig {
        weights: &[
            (TileKind::Bomb, 32),
            (TileKind::Gold, 14),
            (TileKind::Heart, 4),
            (TileKind::Germ, 6),
            (TileKind::Empty, 44),
        ],
        locks: true,
        infection: true,
    },
];

/// Looks up the configuration for `level`. Unmapped levels fall back to the
/// default table and activate neither mechanic; the fallback is policy, not
/// an error.
pub fn level_config(level: Level) -> LevelConfig {
    match LEVEL_TABLE.get(usize::from(level)) {
        Some(&config) => config,
        None => {
            log::debug!("No table entry for level {level}, using default config");
            DEFAULT_CONFIG
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_zero_uses_the_base_weights() {
        let config = level_config(0);

        assert_eq!(config.weights, DEFAULT_WEIGHTS);
        assert!(!config.locks);
        assert!(!config.infection);
    }

    #[test]
    fn unmapped_levels_fall_back_to_the_default() {
        assert_eq!(level_config(42), DEFAULT_CONFIG);
    }

    #[test]
    fn mechanics_activate_on_their_mapped_levels() {
        assert!(level_config(3).locks);
        assert!(!level_config(3).infection);
        assert!(level_config(5).infection);
        assert!(!level_config(5).locks);
        assert!(level_config(8).locks && level_config(8).infection);
    }

    #[test]
    fn every_mapped_level_has_a_nonzero_weight_total() {
        for level in 0..LEVEL_CEILING {
            let total: u32 = level_config(level)
                .weights
                .iter()
                .map(|&(_, weight)| weight)
                .sum();
            assert!(total > 0, "level {level} has a zero-sum weight table");
        }
    }
}
