//! Biome classification seam for wall selection.

use serde::{Deserialize, Serialize};
use umbra_tiles::WorldView;

/// Coarse biome of a tile, as far as background walls care.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Biome {
    Forest,
    Snow,
    Jungle,
    Desert,
    Underground,
    Default,
}

/// Answers which biome a tile belongs to.
pub trait BiomeLookup {
    fn biome_at(&self, x: usize, y: usize) -> Biome;
}

impl<F: Fn(usize, usize) -> Biome> BiomeLookup for F {
    fn biome_at(&self, x: usize, y: usize) -> Biome {
        self(x, y)
    }
}

/// Splits the world into three vertical sections (Forest, Desert, Snow) above
/// ground and reports Underground more than `height / 8` rows below the surface.
#[derive(Clone, Debug)]
pub struct SectionBiomes {
    width: usize,
    height: usize,
    surface: Vec<i32>,
}

impl SectionBiomes {
    /// Captures the dimensions and surface profile of `world`.
    pub fn from_world<W: WorldView + ?Sized>(world: &W) -> Self {
        let surface = (0..world.width())
            .map(|x| world.surface_or_default(x))
            .collect();
        Self {
            width: world.width(),
            height: world.height(),
            surface,
        }
    }
}

impl BiomeLookup for SectionBiomes {
    fn biome_at(&self, x: usize, y: usize) -> Biome {
        let surface = self
            .surface
            .get(x)
            .copied()
            .unwrap_or((self.height / 3) as i32);
        if y as i32 > surface + (self.height / 8) as i32 {
            return Biome::Underground;
        }

        let section = (self.width / 3).max(1);
        match x / section {
            0 => Biome::Forest,
            1 => Biome::Desert,
            2 => Biome::Snow,
            _ => Biome::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_tiles::TileWorld;

    #[test]
    fn test_sections_and_underground() {
        let mut world = TileWorld::new(10, 80).unwrap();
        world.set_surface(vec![20; 10]).unwrap();
        let biomes = SectionBiomes::from_world(&world);

        assert_eq!(biomes.biome_at(0, 5), Biome::Forest);
        assert_eq!(biomes.biome_at(4, 5), Biome::Desert);
        assert_eq!(biomes.biome_at(7, 30), Biome::Snow);
        assert_eq!(biomes.biome_at(9, 5), Biome::Default);
        // height / 8 = 10 rows of grace below the surface.
        assert_eq!(biomes.biome_at(0, 30), Biome::Forest);
        assert_eq!(biomes.biome_at(0, 31), Biome::Underground);
    }

    #[test]
    fn test_narrow_world_does_not_divide_by_zero() {
        let world = TileWorld::new(2, 9).unwrap();
        let biomes = SectionBiomes::from_world(&world);
        assert_eq!(biomes.biome_at(0, 0), Biome::Forest);
        assert_eq!(biomes.biome_at(1, 0), Biome::Desert);
    }

    #[test]
    fn test_closure_lookup() {
        let lookup = |x: usize, _y: usize| if x < 5 { Biome::Jungle } else { Biome::Snow };
        assert_eq!(lookup.biome_at(2, 0), Biome::Jungle);
        assert_eq!(lookup.biome_at(7, 0), Biome::Snow);
    }
}
