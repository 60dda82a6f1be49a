//! Wall brightness, tint, and the optional surface fade.

use noise::{NoiseFn, Simplex};
use umbra_lighting::{LightingParams, LightingSystem, depth_light};
use umbra_tiles::{Color, TileKind, WorldView};

use crate::atlas::WallAtlas;
use crate::params::{SurfaceFadeParams, WallParams};

/// Brightness of the wall at `(x, y)`.
///
/// Walls behind air follow the depth model, dimmed by `cave_factor`. Walls
/// behind solid tiles follow the light map, dimmed by `solid_factor` and
/// floored at `min_solid_brightness`.
pub fn wall_brightness<W: WorldView + ?Sized>(
    world: &W,
    lighting: Option<&LightingSystem>,
    lighting_params: &LightingParams,
    params: &WallParams,
    x: usize,
    y: usize,
) -> f32 {
    if world.tile(x, y).is_air() {
        return depth_light(world, x as i32, y as i32, lighting_params) * params.cave_factor;
    }
    match lighting {
        Some(system) => {
            let level = system.light_level(x as i32, y as i32);
            (level * params.solid_factor).max(params.min_solid_brightness)
        }
        None => params.unlit_brightness,
    }
}

/// Draw tint for a wall of `kind` at `brightness`.
///
/// Atlas kinds get a neutral gray so the texture keeps its own colors; others
/// scale their fallback wall color (white when they have none).
pub fn wall_tint(kind: TileKind, brightness: f32, atlas: &WallAtlas) -> Color {
    if atlas.contains(kind) {
        Color::gray(brightness)
    } else {
        kind.wall_color().unwrap_or(Color::WHITE).scale(brightness)
    }
}

/// Noise-modulated alpha for walls near the surface.
pub struct SurfaceFade {
    noise: Simplex,
    params: SurfaceFadeParams,
}

impl SurfaceFade {
    pub fn new(params: SurfaceFadeParams) -> Self {
        Self {
            noise: Simplex::new(params.seed),
            params,
        }
    }

    pub fn params(&self) -> &SurfaceFadeParams {
        &self.params
    }

    /// Normalized fBm in `[-1, 1]`.
    fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut max = 0.0;
        let mut frequency = self.params.frequency;
        let mut amplitude = 1.0;

        for _ in 0..self.params.octaves.max(1) {
            total += self.noise.get([x * frequency, y * frequency]) * amplitude;
            max += amplitude;
            frequency *= 2.0;
            amplitude *= self.params.persistence;
        }

        total / max
    }

    /// Alpha factor in `[0, 1]` for the wall at `(x, y)`; 1.0 means fully opaque.
    ///
    /// Always 1.0 when disabled or when the column has no surface.
    pub fn alpha<W: WorldView + ?Sized>(&self, world: &W, x: usize, y: usize) -> f32 {
        if !self.params.enabled {
            return 1.0;
        }
        let Some(surface) = world.height_at(x) else {
            return 1.0;
        };

        let above = surface - y as i32;
        if above <= self.params.threshold {
            return 1.0;
        }

        let noise = self.sample(x as f64, y as f64) as f32;
        let height_factor = ((above - self.params.threshold) as f32 / self.params.span).min(1.0);
        let base = 1.0 - height_factor * self.params.strength;
        let modulation = (noise + 1.0) * 0.5;
        (base * (0.5 + modulation * 0.5)).clamp(0.0, 1.0)
    }
}
