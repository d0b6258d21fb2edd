//! Board generation and reveal engine for a Minesweeper-family dungeon
//! crawler: weighted tile sampling, a layered generation pipeline,
//! constrained flood-fill reveal, and click-driven interaction resolution.
//!
//! Rendering, theming, and input wiring live in the embedding app. This crate
//! deals only in immutable snapshots: every operation takes a [`Board`] (and
//! usually an [`Inventory`]) and returns new values, leaving its inputs
//! untouched, so the controller can store whichever snapshot it likes.

#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use engine::*;
pub use error::*;
pub use generator::*;
pub use inventory::*;
pub use level::*;
pub use resolve::*;
pub use tile::*;
pub use types::*;

mod board;
mod engine;
mod error;
mod generator;
mod inventory;
mod level;
mod resolve;
mod tile;
mod types;

/// Valid transitions:
/// - InProgress -> Won
/// - InProgress -> Lost
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    /// Indicates the run has ended and no moves can be made anymore.
    pub const fn is_final(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }
}

/// Derives the terminal condition from core state. The surrounding controller
/// owns the decision of when to check; this crate only produces the values.
pub fn game_status(level: Level, inventory: &Inventory) -> GameStatus {
    if inventory.count(TileKind::Heart) == 0 {
        GameStatus::Lost
    } else if level >= LEVEL_CEILING {
        GameStatus::Won
    } else {
        GameStatus::InProgress
    }
}
