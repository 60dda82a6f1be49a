//! Wall layer tunables.

use serde::{Deserialize, Serialize};

/// Tunables for wall selection, shading, and the optional surface fade.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WallParams {
    /// Edge of a wall sprite in pixels; also the tile size used for view culling.
    pub wall_size: u32,
    /// Edge of one atlas cell in pixels.
    pub atlas_cell: u32,
    /// Atlas cells per row and per column.
    pub atlas_grid: u32,
    /// Brightness multiplier for walls behind air (caves and sky).
    pub cave_factor: f32,
    /// Brightness multiplier for walls behind solid tiles.
    pub solid_factor: f32,
    /// Lower bound for walls behind solid tiles.
    pub min_solid_brightness: f32,
    /// Brightness behind solid tiles when no lighting system is available.
    pub unlit_brightness: f32,
    /// Pick walls from biomes instead of the stored wall kind.
    pub use_biomes: bool,
    pub fade: SurfaceFadeParams,
}

impl Default for WallParams {
    fn default() -> Self {
        Self {
            wall_size: 16,
            atlas_cell: 16,
            atlas_grid: 3,
            cave_factor: 0.4,
            solid_factor: 0.6,
            min_solid_brightness: 0.1,
            unlit_brightness: 0.4,
            use_biomes: true,
            fade: SurfaceFadeParams::default(),
        }
    }
}

/// Noise-modulated transparency for walls near and above the surface.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SurfaceFadeParams {
    pub enabled: bool,
    pub seed: u32,
    pub frequency: f64,
    pub octaves: u32,
    pub persistence: f64,
    /// Fade applies where `surface - y` exceeds this (negative means below ground).
    pub threshold: i32,
    /// Rows over which the fade ramps to its strongest.
    pub span: f32,
    /// Largest alpha reduction before noise modulation.
    pub strength: f32,
}

impl Default for SurfaceFadeParams {
    fn default() -> Self {
        Self {
            enabled: false,
            seed: 0,
            frequency: 0.05,
            octaves: 3,
            persistence: 0.5,
            threshold: -80,
            span: 50.0,
            strength: 0.7,
        }
    }
}
