//! In-memory tile world with foreground tiles, background walls, and a surface profile.
//!
//! [`TileWorld`] is the reference implementation of the view traits. Reads outside
//! the world return Air; writes outside the world are ignored with a warning log.

use thiserror::Error;

use crate::kind::{Tile, TileKind};
use crate::view::{SurfaceProfile, TileGridView, WallGridView};

/// Errors raised while building a [`TileWorld`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TileError {
    /// Width or height is zero.
    #[error("world dimensions must be non-zero, got {width}x{height}")]
    ZeroSize { width: usize, height: usize },
    /// An ASCII layout row has a different length than the first row.
    #[error("layout row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// An ASCII layout contains a character that maps to no tile kind.
    #[error("unknown tile glyph {glyph:?} at ({x}, {y})")]
    UnknownGlyph { glyph: char, x: usize, y: usize },
    /// A surface profile does not have one entry per column.
    #[error("surface profile has {found} columns, world has {expected}")]
    SurfaceLength { expected: usize, found: usize },
}

/// Dense row-major tile world.
#[derive(Clone, Debug)]
pub struct TileWorld {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    walls: Vec<TileKind>,
    surface: Vec<i32>,
}

impl TileWorld {
    /// Creates an all-air world with no walls and an empty surface profile.
    pub fn new(width: usize, height: usize) -> Result<Self, TileError> {
        if width == 0 || height == 0 {
            return Err(TileError::ZeroSize { width, height });
        }
        Ok(Self {
            width,
            height,
            tiles: vec![Tile::AIR; width * height],
            walls: vec![TileKind::Air; width * height],
            surface: Vec::new(),
        })
    }

    /// Parses an ASCII layout, one line per row, one glyph per tile.
    ///
    /// Blank leading/trailing lines and surrounding whitespace are ignored. The
    /// surface profile is derived from the first non-air tile in each column.
    pub fn from_ascii(layout: &str) -> Result<Self, TileError> {
        let rows: Vec<&str> = layout
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let width = rows.first().map_or(0, |r| r.chars().count());
        let mut world = Self::new(width, rows.len())?;

        for (y, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(TileError::RaggedRow {
                    row: y,
                    expected: width,
                    found,
                });
            }
            for (x, glyph) in row.chars().enumerate() {
                let kind =
                    TileKind::from_glyph(glyph).ok_or(TileError::UnknownGlyph { glyph, x, y })?;
                world.tiles[y * width + x] = Tile::new(kind);
            }
        }

        world.surface = world.derive_surface();
        Ok(world)
    }

    fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Returns the tile at `(x, y)`, Air when out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Tile {
        self.tile_checked(x, y).unwrap_or(Tile::AIR)
    }

    /// Sets the foreground tile at `(x, y)`.
    pub fn set(&mut self, x: i32, y: i32, kind: TileKind) {
        if !self.in_bounds(x, y) {
            tracing::warn!("TileWorld::set out of bounds: ({}, {})", x, y);
            return;
        }
        let idx = self.index(x as usize, y as usize);
        self.tiles[idx] = Tile::new(kind);
    }

    /// Sets the background wall at `(x, y)`.
    pub fn set_wall(&mut self, x: i32, y: i32, kind: TileKind) {
        if !self.in_bounds(x, y) {
            tracing::warn!("TileWorld::set_wall out of bounds: ({}, {})", x, y);
            return;
        }
        let idx = self.index(x as usize, y as usize);
        self.walls[idx] = kind;
    }

    /// Fills the inclusive rectangle `[x0, x1] x [y0, y1]`, clipped to the world.
    pub fn fill(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, kind: TileKind) {
        for y in y0.max(0)..=y1.min(self.height as i32 - 1) {
            for x in x0.max(0)..=x1.min(self.width as i32 - 1) {
                self.set(x, y, kind);
            }
        }
    }

    /// Replaces the surface profile. Must have exactly one entry per column.
    pub fn set_surface(&mut self, surface: Vec<i32>) -> Result<(), TileError> {
        if surface.len() != self.width {
            return Err(TileError::SurfaceLength {
                expected: self.width,
                found: surface.len(),
            });
        }
        self.surface = surface;
        Ok(())
    }

    /// Drops the surface profile so every column uses the height fallback.
    pub fn clear_surface(&mut self) {
        self.surface.clear();
    }

    /// First non-air row per column (`height` for all-air columns).
    pub fn derive_surface(&self) -> Vec<i32> {
        (0..self.width)
            .map(|x| {
                (0..self.height)
                    .find(|&y| !self.tiles[self.index(x, y)].is_air())
                    .unwrap_or(self.height) as i32
            })
            .collect()
    }

    /// Surface profile as stored.
    pub fn surface(&self) -> &[i32] {
        &self.surface
    }

    /// Renders the foreground back to the ASCII layout format.
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for row in self.tiles.chunks(self.width) {
            out.extend(row.iter().map(|t| t.kind.glyph()));
            out.push('\n');
        }
        out
    }
}

impl TileGridView for TileWorld {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn tile(&self, x: usize, y: usize) -> Tile {
        self.tiles[self.index(x, y)]
    }
}

impl SurfaceProfile for TileWorld {
    fn height_at(&self, column: usize) -> Option<i32> {
        self.surface.get(column).copied()
    }
}

impl WallGridView for TileWorld {
    fn wall(&self, x: usize, y: usize) -> TileKind {
        self.walls
            .get(self.index(x, y))
            .copied()
            .unwrap_or(TileKind::Air)
    }
}
