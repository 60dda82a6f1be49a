//! Wall atlas bookkeeping and deterministic variant choice.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashSet;
use umbra_tiles::TileKind;

use crate::params::WallParams;

/// Axis-aligned rectangle in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    pub fn left(&self) -> i32 {
        self.x
    }

    pub fn top(&self) -> i32 {
        self.y
    }

    /// Exclusive right edge.
    pub fn right(&self) -> i32 {
        self.x + self.width as i32
    }

    /// Exclusive bottom edge.
    pub fn bottom(&self) -> i32 {
        self.y + self.height as i32
    }
}

/// Wall kinds that have a dedicated multi-cell atlas loaded.
///
/// Atlas kinds are tinted with a neutral gray and sample one random cell;
/// everything else is drawn with its fallback color over a plain texture.
#[derive(Clone, Debug, Default)]
pub struct WallAtlas {
    kinds: FxHashSet<TileKind>,
}

impl WallAtlas {
    /// The four kinds shipped with atlases: stone, sand, snow and dirt.
    pub fn standard() -> Self {
        [TileKind::Stone, TileKind::Sand, TileKind::Snow, TileKind::Dirt]
            .into_iter()
            .collect()
    }

    /// Registers an atlas for `kind`.
    pub fn insert(&mut self, kind: TileKind) -> bool {
        self.kinds.insert(kind)
    }

    /// Drops the atlas for `kind`, e.g. after its texture failed to load.
    pub fn remove(&mut self, kind: TileKind) -> bool {
        self.kinds.remove(&kind)
    }

    pub fn contains(&self, kind: TileKind) -> bool {
        self.kinds.contains(&kind)
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}

impl FromIterator<TileKind> for WallAtlas {
    fn from_iter<I: IntoIterator<Item = TileKind>>(iter: I) -> Self {
        Self {
            kinds: iter.into_iter().collect(),
        }
    }
}

/// Atlas cell used for the wall at tile `(x, y)`.
///
/// The choice depends only on the coordinates, so walls do not flicker
/// between frames.
pub fn variant_rect(x: i32, y: i32, params: &WallParams) -> PixelRect {
    let seed = (x as i64 * 1000 + y as i64) as u64;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let grid = params.atlas_grid.max(1);
    let col = rng.random_range(0..grid);
    let row = rng.random_range(0..grid);
    let cell = params.atlas_cell;
    PixelRect::new((col * cell) as i32, (row * cell) as i32, cell, cell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_atlas() {
        let atlas = WallAtlas::standard();
        assert_eq!(atlas.len(), 4);
        assert!(atlas.contains(TileKind::Dirt));
        assert!(!atlas.contains(TileKind::Marble));
    }

    #[test]
    fn test_atlas_insert_remove() {
        let mut atlas = WallAtlas::default();
        assert!(atlas.is_empty());
        assert!(atlas.insert(TileKind::Marble));
        assert!(!atlas.insert(TileKind::Marble));
        assert!(atlas.remove(TileKind::Marble));
        assert!(!atlas.contains(TileKind::Marble));
    }

    #[test]
    fn test_variant_is_deterministic() {
        let p = WallParams::default();
        for (x, y) in [(0, 0), (7, 3), (-4, 120), (999, 999)] {
            assert_eq!(variant_rect(x, y, &p), variant_rect(x, y, &p));
        }
    }

    #[test]
    fn test_variant_stays_inside_atlas() {
        let p = WallParams::default();
        for x in 0..30 {
            for y in 0..30 {
                let r = variant_rect(x, y, &p);
                assert_eq!((r.width, r.height), (16, 16));
                assert!(r.x % 16 == 0 && (0..48).contains(&r.x), "{r:?}");
                assert!(r.y % 16 == 0 && (0..48).contains(&r.y), "{r:?}");
            }
        }
    }

    #[test]
    fn test_variants_differ_across_tiles() {
        let p = WallParams::default();
        let distinct: FxHashSet<PixelRect> = (0..40).map(|x| variant_rect(x, 5, &p)).collect();
        assert!(distinct.len() > 1);
    }

    #[test]
    fn test_rect_edges() {
        let r = PixelRect::new(-8, 4, 20, 10);
        assert_eq!((r.left(), r.top(), r.right(), r.bottom()), (-8, 4, 12, 14));
    }
}
