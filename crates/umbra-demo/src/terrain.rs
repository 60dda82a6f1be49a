//! Small noise-based world for the demo.

use noise::{NoiseFn, Simplex};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use umbra_config::WorldConfig;
use umbra_tiles::{TileError, TileGridView, TileKind, TileWorld};

/// Rows of dirt between the grass line and stone.
const DIRT_DEPTH: i32 = 4;

/// Surface row per column: a fBm ridge around `surface_level * height`.
fn surface_profile(config: &WorldConfig, noise: &Simplex) -> Vec<i32> {
    let base = config.surface_level as f64 * config.height as f64;
    let max_row = config.height as i32 - 2;
    (0..config.width)
        .map(|x| {
            let mut total = 0.0;
            let mut frequency = config.surface_frequency;
            let mut amplitude = config.surface_amplitude;
            for _ in 0..3 {
                total += noise.get([x as f64 * frequency, 0.0]) * amplitude;
                frequency *= 2.0;
                amplitude *= 0.5;
            }
            ((base + total).round() as i32).clamp(1, max_row.max(1))
        })
        .collect()
}

/// Top tile of a column by world third, matching the section biome split.
fn top_kind(x: usize, width: usize) -> TileKind {
    match x / (width / 3).max(1) {
        0 => TileKind::Grass,
        1 => TileKind::Sand,
        2 => TileKind::Snow,
        _ => TileKind::Grass,
    }
}

fn ore_for(roll: f64) -> Option<TileKind> {
    match roll {
        r if r < 0.010 => Some(TileKind::Coal),
        r if r < 0.016 => Some(TileKind::CopperOre),
        r if r < 0.020 => Some(TileKind::IronOre),
        r if r < 0.022 => Some(TileKind::SilverOre),
        r if r < 0.023 => Some(TileKind::GoldOre),
        r if r < 0.0235 => Some(TileKind::Diamond),
        _ => None,
    }
}

/// Generates terrain, caves, ores, a pond and background walls.
pub fn generate(config: &WorldConfig) -> Result<TileWorld, TileError> {
    let mut world = TileWorld::new(config.width, config.height)?;
    let surface_noise = Simplex::new(config.seed);
    let cave_noise = Simplex::new(config.seed.wrapping_add(0xCAFE));
    let mut rng = ChaCha8Rng::seed_from_u64(config.seed as u64);

    let surface = surface_profile(config, &surface_noise);
    let height = config.height as i32;

    for (x, &top) in surface.iter().enumerate() {
        let xi = x as i32;
        for y in top..height {
            let depth = y - top;
            let kind = if depth == 0 {
                top_kind(x, config.width)
            } else if depth <= DIRT_DEPTH {
                TileKind::Dirt
            } else {
                ore_for(rng.random::<f64>()).unwrap_or(TileKind::Stone)
            };
            world.set(xi, y, kind);

            if depth > 0 {
                let wall = if depth <= DIRT_DEPTH { TileKind::Dirt } else { TileKind::Stone };
                world.set_wall(xi, y, wall);
            }

            if depth > DIRT_DEPTH + 2 {
                let n = cave_noise.get([x as f64 * 0.08, y as f64 * 0.12]);
                if n > config.cave_threshold {
                    world.set(xi, y, TileKind::Air);
                }
            }
        }
    }

    dig_pond(&mut world, &surface);
    world.set_surface(surface)?;

    tracing::debug!(
        "Generated {}x{} world (seed {})",
        config.width,
        config.height,
        config.seed
    );
    Ok(world)
}

/// Turns the top two tiles around the lowest point of the left third into water.
fn dig_pond(world: &mut TileWorld, surface: &[i32]) {
    let third = (surface.len() / 3).max(1);
    let Some((center, _)) = surface
        .iter()
        .enumerate()
        .take(third)
        .max_by_key(|&(_, &row)| row)
    else {
        return;
    };
    let lo = center.saturating_sub(2);
    let hi = (center + 2).min(surface.len() - 1);
    for x in lo..=hi {
        let top = surface[x];
        world.fill(x as i32, top, x as i32, top + 1, TileKind::Water);
    }
}

/// First air tile at least `min_depth` rows under the surface near the middle column.
pub fn find_cave(world: &TileWorld, surface: &[i32], min_depth: i32) -> Option<(i32, i32)> {
    let width = surface.len() as i32;
    let mid = width / 2;
    (0..width)
        .flat_map(|offset| [mid + offset, mid - offset])
        .filter(|x| (0..width).contains(x))
        .find_map(|x| {
            let top = surface[x as usize];
            (top + min_depth..top + min_depth * 4)
                .find(|&y| world.tile_checked(x, y).is_some_and(|t| t.is_air()))
                .map(|y| (x, y))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use umbra_tiles::WallGridView;

    #[test]
    fn test_generation_is_deterministic() {
        let config = WorldConfig::default();
        let a = generate(&config).unwrap();
        let b = generate(&config).unwrap();
        assert_eq!(a.to_ascii(), b.to_ascii());
    }

    #[test]
    fn test_surface_matches_tiles() {
        let config = WorldConfig::default();
        let world = generate(&config).unwrap();
        assert_eq!(world.surface().len(), config.width);
        for (x, &top) in world.surface().iter().enumerate() {
            assert!(world.tile(x, (top - 1) as usize).is_air(), "column {x}");
            assert!(!world.tile(x, top as usize).is_air(), "column {x}");
        }
    }

    #[test]
    fn test_walls_start_below_surface() {
        let config = WorldConfig::default();
        let world = generate(&config).unwrap();
        let top = world.surface()[10] as usize;
        assert_eq!(world.wall(10, top), TileKind::Air);
        assert_eq!(world.wall(10, top + 1), TileKind::Dirt);
        assert_eq!(world.wall(10, config.height - 1), TileKind::Stone);
    }

    #[test]
    fn test_zero_size_is_an_error() {
        let config = WorldConfig {
            width: 0,
            ..Default::default()
        };
        assert!(generate(&config).is_err());
    }
}
