//! Terminal demo: generates a small world, lights it, places a torch in a cave,
//! and prints a shade map plus a summary of the background wall draw list.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI flags.
//! Run with `cargo run -p umbra-demo -- --seed 7 --recompute once`.

mod terrain;

use std::process::ExitCode;

use clap::Parser;
use glam::Vec2;
use rustc_hash::FxHashMap;
use tracing::{info, warn};
use umbra_config::{CliArgs, Config};
use umbra_lighting::LightingSystem;
use umbra_tiles::{Color, TileGridView, TileKind, TileWorld};
use umbra_walls::{PixelRect, SectionBiomes, WallAtlas, WallLayer, WallScene, WallSprite};

/// Shade ramp from darkest to brightest.
const RAMP: &[u8] = b" .:-=+*#%@";

fn shade_glyph(level: f32) -> char {
    let idx = (level.clamp(0.0, 1.0) * (RAMP.len() - 1) as f32).round() as usize;
    RAMP[idx] as char
}

fn print_shade_map(world: &TileWorld, lighting: &LightingSystem, torch: Option<(i32, i32)>) {
    for y in 0..world.height() as i32 {
        let row: String = (0..world.width() as i32)
            .map(|x| {
                if torch == Some((x, y)) {
                    'T'
                } else {
                    shade_glyph(lighting.light_level(x, y))
                }
            })
            .collect();
        println!("{row}");
    }
}

fn print_wall_summary(sprites: &[WallSprite]) {
    let mut by_kind: FxHashMap<TileKind, (usize, u64)> = FxHashMap::default();
    for sprite in sprites {
        let entry = by_kind.entry(sprite.kind).or_default();
        entry.0 += 1;
        entry.1 += sprite.tint.r as u64;
    }

    let mut kinds: Vec<_> = by_kind.into_iter().collect();
    kinds.sort_by_key(|(kind, _)| *kind);

    println!("{} wall sprites", sprites.len());
    for (kind, (count, red)) in kinds {
        println!("  {kind:?}: {count} (mean red tint {})", red / count as u64);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let world = terrain::generate(&config.world)?;
    info!(
        "World {}x{} ready, lighting {}",
        world.width(),
        world.height(),
        if config.lighting.enabled { "on" } else { "off" }
    );

    let mut lighting = LightingSystem::new(config.lighting.clone(), world.width(), world.height());
    lighting.recalculate_lighting(&world);
    if let Some(stats) = lighting.last_stats() {
        info!(
            "Sky pass: {} seeds, {} diffused in {:.2?}",
            stats.sky.seeds, stats.sky.accepted, stats.elapsed
        );
    }

    let torch = terrain::find_cave(&world, world.surface(), 8);
    match torch {
        Some((x, y)) => {
            let tile = config.lighting.tile_size;
            let position = Vec2::new((x as f32 + 0.5) * tile, (y as f32 + 0.5) * tile);
            let id = lighting.add_light_source(&world, position, config.world.torch_intensity, Color::YELLOW);
            info!("Placed torch {id:?} at tile ({x}, {y})");
        }
        None => warn!("No cave found for the torch"),
    }

    if config.debug.print_light_map {
        print_shade_map(&world, &lighting, torch);
    }

    let biomes = SectionBiomes::from_world(&world);
    let layer = WallLayer::new(config.walls.clone(), WallAtlas::standard());
    let scene = WallScene::new(&world)
        .with_biomes(&biomes)
        .with_lighting(&lighting);
    let size = config.walls.wall_size;
    let view = PixelRect::new(0, 0, world.width() as u32 * size, world.height() as u32 * size);
    let sprites = layer.collect(&scene, view);
    print_wall_summary(&sprites);

    Ok(())
}

fn main() -> ExitCode {
    let args = CliArgs::parse();

    // Resolve config directory
    let config_dir = args.config.clone().unwrap_or_else(|| {
        dirs::config_dir()
            .map(|dir| dir.join("umbra"))
            .unwrap_or_else(|| ".umbra".into())
    });

    // Load or create config, then apply CLI overrides
    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    let log_dir = config_dir.join("logs");
    umbra_log::init_logging(Some(&log_dir), cfg!(debug_assertions), Some(&config));

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Demo failed: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shade_ramp_ends() {
        assert_eq!(shade_glyph(0.0), ' ');
        assert_eq!(shade_glyph(0.01), ' ');
        assert_eq!(shade_glyph(1.0), '@');
        assert_eq!(shade_glyph(7.0), '@');
    }

    #[test]
    fn test_demo_pipeline_runs() {
        let mut config = Config::default();
        config.world.width = 30;
        config.world.height = 24;
        config.debug.print_light_map = false;
        assert!(run(&config).is_ok());
    }
}
