//! Which wall kind shows behind a tile.

use umbra_tiles::{TileKind, WallGridView, WorldView};

use crate::biome::{Biome, BiomeLookup};

/// Wall kind to draw at `(x, y)`.
///
/// Behind solid foreground the stored wall always wins. Behind air the biome
/// decides, with everything deeper than a quarter of the world height showing
/// stone. Without a biome lookup the stored wall is used everywhere.
pub fn select_wall_kind<W>(world: &W, biomes: Option<&dyn BiomeLookup>, x: usize, y: usize) -> TileKind
where
    W: WorldView + WallGridView + ?Sized,
{
    let stored = world.wall(x, y);
    if !world.tile(x, y).is_air() {
        return stored;
    }
    let Some(biomes) = biomes else {
        return stored;
    };

    let depth = y as i32 - world.surface_or_default(x);
    if depth > (world.height() / 4) as i32 {
        return TileKind::Stone;
    }

    match biomes.biome_at(x, y) {
        Biome::Desert => TileKind::Sand,
        Biome::Snow => TileKind::Snow,
        Biome::Forest | Biome::Jungle => TileKind::Dirt,
        Biome::Underground => TileKind::Stone,
        Biome::Default => stored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_tiles::TileWorld;

    fn world() -> TileWorld {
        let mut w = TileWorld::new(6, 40).unwrap();
        w.set_surface(vec![10; 6]).unwrap();
        for x in 0..6 {
            for y in 0..40 {
                w.set_wall(x, y, TileKind::Marble);
            }
        }
        w
    }

    #[test]
    fn test_solid_foreground_keeps_stored_wall() {
        let mut w = world();
        w.set(1, 12, TileKind::Dirt);
        let desert = |_: usize, _: usize| Biome::Desert;
        assert_eq!(select_wall_kind(&w, Some(&desert), 1, 12), TileKind::Marble);
    }

    #[test]
    fn test_biome_walls_behind_air() {
        let w = world();
        let cases = [
            (Biome::Desert, TileKind::Sand),
            (Biome::Snow, TileKind::Snow),
            (Biome::Forest, TileKind::Dirt),
            (Biome::Jungle, TileKind::Dirt),
            (Biome::Underground, TileKind::Stone),
            (Biome::Default, TileKind::Marble),
        ];
        for (biome, expected) in cases {
            let lookup = move |_: usize, _: usize| biome;
            assert_eq!(select_wall_kind(&w, Some(&lookup), 2, 12), expected, "{biome:?}");
        }
    }

    #[test]
    fn test_deep_caves_are_stone() {
        let w = world();
        let desert = |_: usize, _: usize| Biome::Desert;
        // height / 4 = 10; depth 10 still follows the biome.
        assert_eq!(select_wall_kind(&w, Some(&desert), 0, 20), TileKind::Sand);
        assert_eq!(select_wall_kind(&w, Some(&desert), 0, 21), TileKind::Stone);
    }

    #[test]
    fn test_no_lookup_uses_stored_wall() {
        let w = world();
        assert_eq!(select_wall_kind(&w, None, 3, 30), TileKind::Marble);
    }
}
