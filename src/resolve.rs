use alloc::borrow::ToOwned;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;
use rand::Rng;

use crate::*;

/// Result of resolving one click on the board.
#[derive(Clone, Debug, PartialEq)]
pub struct ClickOutcome {
    pub board: Board,
    pub inventory: Inventory,
    pub log: Vec<String>,
    pub level_delta: u8,
}

/// Result of using an inventory item.
#[derive(Clone, Debug, PartialEq)]
pub struct UseOutcome {
    pub board: Board,
    pub inventory: Inventory,
    pub log: Vec<String>,
}

/// Per-category click effect: inventory deltas, grid-wide mutations, and the
/// log line reported to the player.
#[derive(Copy, Clone, Debug)]
struct CategoryEffect {
    grants: Option<(TileKind, bool)>,
    heart_cost: u32,
    unlocks_all: bool,
    message: Option<&'static str>,
}

const NO_EFFECT: CategoryEffect = CategoryEffect {
    grants: None,
    heart_cost: 0,
    unlocks_all: false,
    message: None,
};

fn category_effect(kind: TileKind) -> CategoryEffect {
    use TileKind::*;

    match kind {
        Gold => CategoryEffect {
            grants: Some((Gold, false)),
            message: Some("You found a pile of gold."),
            ..NO_EFFECT
        },
        Bomb => CategoryEffect {
            heart_cost: 1,
            message: Some("A bomb goes off in your face."),
            ..NO_EFFECT
        },
        Heart => CategoryEffect {
            grants: Some((Heart, false)),
            message: Some("You tuck away a spare heart."),
            ..NO_EFFECT
        },
        Telescope => CategoryEffect {
            grants: Some((Telescope, true)),
            message: Some("You found a telescope."),
            ..NO_EFFECT
        },
        Key => CategoryEffect {
            unlocks_all: true,
            message: Some("The key turns and every lock on this floor springs open."),
            ..NO_EFFECT
        },
        Soap => CategoryEffect {
            grants: Some((Soap, false)),
            message: Some("You found a bar of soap."),
            ..NO_EFFECT
        },
        Microscope => CategoryEffect {
            grants: Some((Microscope, false)),
            message: Some("You found a microscope."),
            ..NO_EFFECT
        },
        Germ => CategoryEffect {
            grants: Some((Germ, false)),
            message: Some("You prod a germ colony with your bare hands."),
            ..NO_EFFECT
        },
        Door => CategoryEffect {
            message: Some("You uncover a door."),
            ..NO_EFFECT
        },
        Empty | Hint(_) | Home => NO_EFFECT,
    }
}

/// Resolves one click. Soft no-ops (locked tiles, already-revealed non-door
/// tiles) return the input snapshots unchanged with an empty log; they are
/// not errors. A click on a revealed door advances the level and regenerates
/// the whole board at the same dimensions.
pub fn resolve_click<R: Rng + ?Sized>(
    board: &Board,
    inventory: &Inventory,
    level: Level,
    location: Coord2,
    rng: &mut R,
) -> Result<ClickOutcome> {
    let tile = board.tile(location)?;
    let mut inventory = inventory.clone();
    let mut log = Vec::new();

    if tile.revealed {
        if tile.kind == TileKind::Door {
            // the door only fires once it has been uncovered by an earlier
            // click
            let next_level = level.saturating_add(1);
            let board = generate(board.size(), next_level, rng)?;
            log.push(format!("You open the door and descend to level {next_level}."));
            return Ok(ClickOutcome {
                board,
                inventory,
                log,
                level_delta: 1,
            });
        }
        return Ok(ClickOutcome {
            board: board.clone(),
            inventory,
            log,
            level_delta: 0,
        });
    }

    if tile.locked {
        return Ok(ClickOutcome {
            board: board.clone(),
            inventory,
            log,
            level_delta: 0,
        });
    }

    // The infection check precedes category effects. Disinfection is an
    // inventory-gated effect at click time; the tile's infected flag itself
    // is never cleared.
    if tile.infected {
        if inventory.consume(TileKind::Soap) {
            log.push("You scrub off the germs with a bar of soap.".to_owned());
        } else {
            inventory.add(TileKind::Germ, false);
            log.push("Germs crawl up your arm.".to_owned());
        }
    }

    let effect = category_effect(tile.kind);
    if let Some((kind, useable)) = effect.grants {
        inventory.add(kind, useable);
    }
    for _ in 0..effect.heart_cost {
        inventory.consume(TileKind::Heart);
    }
    let board = if effect.unlocks_all {
        board.map(|tile, _, _| Tile {
            locked: false,
            ..tile
        })
    } else {
        board.clone()
    };
    if let Some(message) = effect.message {
        log.push(message.to_owned());
    }

    let board = reveal_from(&board, location)?;

    Ok(ClickOutcome {
        board,
        inventory,
        log,
        level_delta: 0,
    })
}

/// Uses an item from the inventory, independent of any board click. Only
/// useable items with a charge left do anything; everything else is a silent
/// no-op. The telescope opens a uniformly random unrevealed empty or hint
/// tile and keeps its charge when no such tile remains.
pub fn use_item<R: Rng + ?Sized>(
    board: &Board,
    inventory: &Inventory,
    kind: TileKind,
    rng: &mut R,
) -> Result<UseOutcome> {
    let mut inventory = inventory.clone();
    let mut log = Vec::new();

    if !inventory.is_useable(kind) || inventory.count(kind) == 0 {
        return Ok(UseOutcome {
            board: board.clone(),
            inventory,
            log,
        });
    }

    match kind {
        TileKind::Telescope => {
            let candidates: Vec<Coord2> = board
                .iter_tiles()
                .filter(|&(_, tile)| {
                    !tile.revealed && matches!(tile.kind, TileKind::Empty | TileKind::Hint(_))
                })
                .map(|(location, _)| location)
                .collect();

            if candidates.is_empty() {
                return Ok(UseOutcome {
                    board: board.clone(),
                    inventory,
                    log,
                });
            }

            let target = candidates[rng.random_range(0..candidates.len())];
            let board = reveal_from(board, target)?;
            inventory.consume(TileKind::Telescope);
            log.push("You scan the field through the telescope and spot a clearing.".to_owned());

            Ok(UseOutcome {
                board,
                inventory,
                log,
            })
        }
        _ => Ok(UseOutcome {
            board: board.clone(),
            inventory,
            log,
        }),
    }
}
