//! Read-only views of a tile world.
//!
//! Lighting and the wall layer never own world storage; they query it through
//! these traits so any backing store (chunked, streamed, in-memory) can be used.

use crate::kind::{Tile, TileKind};

/// Foreground tile queries and world dimensions.
pub trait TileGridView {
    /// World width in tiles.
    fn width(&self) -> usize;

    /// World height in tiles. Row 0 is the top of the world.
    fn height(&self) -> usize;

    /// Tile at `(x, y)`. Callers only pass in-bounds coordinates.
    fn tile(&self, x: usize, y: usize) -> Tile;

    /// Bounds-checked lookup with signed coordinates.
    fn tile_checked(&self, x: i32, y: i32) -> Option<Tile> {
        if self.in_bounds(x, y) {
            Some(self.tile(x as usize, y as usize))
        } else {
            None
        }
    }

    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width() && (y as usize) < self.height()
    }
}

/// Per-column terrain surface height.
pub trait SurfaceProfile {
    /// Surface row for `column`, `None` when the profile has no entry.
    fn height_at(&self, column: usize) -> Option<i32>;
}

/// Background wall kind per tile.
pub trait WallGridView {
    /// Stored wall kind at `(x, y)`; `Air` means no wall.
    fn wall(&self, x: usize, y: usize) -> TileKind;
}

/// Everything the lighting engine needs from a world.
pub trait WorldView: TileGridView + SurfaceProfile {
    /// Surface row for `column`, falling back to one third of the world height.
    fn surface_or_default(&self, column: usize) -> i32 {
        self.height_at(column)
            .unwrap_or((self.height() / 3) as i32)
    }
}

impl<T: TileGridView + SurfaceProfile + ?Sized> WorldView for T {}

impl<T: TileGridView + ?Sized> TileGridView for &T {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn tile(&self, x: usize, y: usize) -> Tile {
        (**self).tile(x, y)
    }
}

impl<T: SurfaceProfile + ?Sized> SurfaceProfile for &T {
    fn height_at(&self, column: usize) -> Option<i32> {
        (**self).height_at(column)
    }
}

impl<T: WallGridView + ?Sized> WallGridView for &T {
    fn wall(&self, x: usize, y: usize) -> TileKind {
        (**self).wall(x, y)
    }
}

impl SurfaceProfile for [i32] {
    fn height_at(&self, column: usize) -> Option<i32> {
        self.get(column).copied()
    }
}

impl SurfaceProfile for Vec<i32> {
    fn height_at(&self, column: usize) -> Option<i32> {
        self.get(column).copied()
    }
}
