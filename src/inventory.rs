use alloc::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::*;

/// One inventory line: how many of an item the player holds and whether the
/// item supports an explicit use action (telescopes do, passive counters like
/// gold do not).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemEntry {
    pub count: u32,
    pub useable: bool,
}

/// Items collected during a run. Entries are created lazily on first
/// acquisition; germ exposure is tracked as the `Germ` entry's count.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inventory {
    items: BTreeMap<TileKind, ItemEntry>,
}

impl Inventory {
    pub const STARTING_HEARTS: u32 = 3;

    pub fn new() -> Self {
        Self::default()
    }

    /// Inventory a fresh run starts with.
    pub fn starting() -> Self {
        let mut inventory = Self::new();
        for _ in 0..Self::STARTING_HEARTS {
            inventory.add(TileKind::Heart, false);
        }
        inventory
    }

    pub fn count(&self, kind: TileKind) -> u32 {
        self.items.get(&kind).map_or(0, |entry| entry.count)
    }

    pub fn is_useable(&self, kind: TileKind) -> bool {
        self.items.get(&kind).is_some_and(|entry| entry.useable)
    }

    /// Adds one item, creating the entry on first acquisition.
    pub fn add(&mut self, kind: TileKind, useable: bool) {
        let entry = self
            .items
            .entry(kind)
            .or_insert(ItemEntry { count: 0, useable });
        entry.count += 1;
    }

    /// Removes one item if any is held; reports whether one was consumed.
    pub fn consume(&mut self, kind: TileKind) -> bool {
        match self.items.get_mut(&kind) {
            Some(entry) if entry.count > 0 => {
                entry.count -= 1;
                true
            }
            _ => false,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (TileKind, ItemEntry)> + '_ {
        self.items.iter().map(|(&kind, &entry)| (kind, entry))
    }
}
