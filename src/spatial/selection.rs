//! Set of selected tiles with toggle semantics
//!
//! Insertion order is remembered only so iteration is stable between calls.
//! Equality and export ordering treat the selection as a plain set.

use std::collections::HashSet;

use crate::spatial::geometry::TileCoordinate;

/// Selected tiles of one image/grid configuration
#[derive(Debug, Clone, Default)]
pub struct Selection {
    order: Vec<TileCoordinate>,
    members: HashSet<TileCoordinate>,
}

impl Selection {
    /// Empty selection
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of a tile
    ///
    /// Returns `true` when the tile is selected afterwards. Toggling the same
    /// tile twice leaves the set unchanged.
    pub fn toggle(&mut self, tile: TileCoordinate) -> bool {
        if self.members.remove(&tile) {
            self.order.retain(|&selected| selected != tile);
            false
        } else {
            self.members.insert(tile);
            self.order.push(tile);
            true
        }
    }

    /// Add a tile if it is not already selected, returning whether it was added
    pub fn insert(&mut self, tile: TileCoordinate) -> bool {
        let added = self.members.insert(tile);
        if added {
            self.order.push(tile);
        }
        added
    }

    /// Deselect everything
    pub fn clear(&mut self) {
        self.order.clear();
        self.members.clear();
    }

    /// Whether the tile is selected
    pub fn contains(&self, tile: TileCoordinate) -> bool {
        self.members.contains(&tile)
    }

    /// Number of selected tiles
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether nothing is selected
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Selected tiles in insertion order
    pub fn iter(&self) -> impl Iterator<Item = TileCoordinate> + '_ {
        self.order.iter().copied()
    }

    /// Selected tiles in raster order: by row, then by column
    pub fn sorted(&self) -> Vec<TileCoordinate> {
        let mut tiles = self.order.clone();
        tiles.sort_unstable_by_key(|tile| tile.raster_key());
        tiles
    }
}

impl PartialEq for Selection {
    fn eq(&self, other: &Self) -> bool {
        self.members == other.members
    }
}

impl Eq for Selection {}

impl FromIterator<TileCoordinate> for Selection {
    fn from_iter<I: IntoIterator<Item = TileCoordinate>>(iter: I) -> Self {
        let mut selection = Self::new();
        selection.extend(iter);
        selection
    }
}

impl Extend<TileCoordinate> for Selection {
    fn extend<I: IntoIterator<Item = TileCoordinate>>(&mut self, iter: I) {
        for tile in iter {
            self.insert(tile);
        }
    }
}
