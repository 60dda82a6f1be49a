//! Depth-based ambient falloff below the terrain surface.
//!
//! Light stays at full strength for the first `height / 32` rows below the
//! surface, then fades linearly to the ambient floor at `height / 6` rows.

use umbra_tiles::WorldView;

use crate::params::LightingParams;

/// Intensity for a tile `depth` rows below the surface of a world `world_height` tall.
pub fn fade_for_depth(depth: i32, world_height: usize, params: &LightingParams) -> f32 {
    if depth <= 0 {
        return params.max_light;
    }

    let fade_start = (world_height / 32) as i32;
    let fade_end = (world_height / 6) as i32;

    if depth < fade_start {
        return params.max_light;
    }
    if depth >= fade_end {
        return params.ambient_light;
    }

    let t = (depth - fade_start) as f32 / (fade_end - fade_start) as f32;
    params.max_light * (1.0 - t) + params.ambient_light * t
}

/// Ambient intensity at `(x, y)` from its depth below the column's surface.
///
/// Columns outside the world and rows above the top edge are fully lit.
pub fn depth_light<W: WorldView + ?Sized>(world: &W, x: i32, y: i32, params: &LightingParams) -> f32 {
    if x < 0 || x as usize >= world.width() || y < 0 {
        return params.max_light;
    }
    let surface = world.surface_or_default(x as usize);
    fade_for_depth(y - surface, world.height(), params)
}
