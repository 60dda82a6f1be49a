//! Point lights: radius-bounded sources with linear falloff and ray-cast occlusion.
//!
//! A source lights every tile within `intensity * radius_scale` whole tiles whose line
//! of sight to the source tile is clear of opaque tiles. Contributions
//! max-combine with whatever the map already holds.

use glam::Vec2;
use umbra_tiles::{Color, TileGridView};

use crate::light_map::LightMap;
use crate::params::LightingParams;

/// Stable handle for a registered [`LightSource`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LightSourceId(pub u32);

/// A placed light such as a torch.
#[derive(Clone, Debug, PartialEq)]
pub struct LightSource {
    pub id: LightSourceId,
    /// Position in sub-tile units (pixels).
    pub position: Vec2,
    /// Brightness at the source tile; also scales the radius.
    pub intensity: f32,
    /// Carried for renderers; the light map itself is scalar.
    pub color: Color,
    /// Inactive sources are skipped by the lighting pass.
    pub active: bool,
}

impl LightSource {
    /// Tile containing the source, truncating toward zero.
    pub fn tile(&self, tile_size: f32) -> (i32, i32) {
        let t = self.position / tile_size;
        (t.x as i32, t.y as i32)
    }

    /// Radius of effect in whole tiles.
    pub fn radius(&self, radius_scale: f32) -> i32 {
        (self.intensity * radius_scale) as i32
    }
}

/// Returns `true` if an opaque tile lies strictly between `from` and `to`.
///
/// Walks a 4-connected line (each step moves along exactly one axis), so a ray
/// cannot slip diagonally between two opaque tiles that touch at a corner.
/// The endpoints themselves are not tested, and tiles outside the grid never block.
/// The walk runs from `to` back toward `from` and ends once the line has left the grid.
pub fn is_light_blocked<G: TileGridView + ?Sized>(grid: &G, from: (i32, i32), to: (i32, i32)) -> bool {
    let (fx, fy) = (i64::from(from.0), i64::from(from.1));
    let (tx, ty) = (i64::from(to.0), i64::from(to.1));
    let (w, h) = (grid.width() as i64, grid.height() as i64);
    let dx = (fx - tx).abs();
    let dy = (fy - ty).abs();
    let x_inc = if fx > tx { 1 } else { -1 };
    let y_inc = if fy > ty { 1 } else { -1 };
    let steps = 1 + dx + dy;

    let (mut x, mut y) = (tx, ty);
    let mut error = dx - dy;
    let mut entered = false;

    for step in 0..steps {
        let inside = (0..w).contains(&x) && (0..h).contains(&y);
        if inside {
            entered = true;
            if step != 0 && step != steps - 1 {
                let tile = grid.tile(x as usize, y as usize);
                if !tile.is_air() && tile.kind.is_opaque() {
                    return true;
                }
            }
        } else if entered {
            // The walk is monotone on both axes, so it cannot come back.
            break;
        }

        if error > 0 {
            x += x_inc;
            error -= 2 * dy;
        } else {
            y += y_inc;
            error += 2 * dx;
        }
    }

    false
}

/// Falloff at `distance` tiles from a source: linear from `intensity` to zero at `radius`.
pub fn falloff(intensity: f32, distance: f32, radius: f32, max_light: f32) -> f32 {
    (intensity * (1.0 - distance / radius)).clamp(0.0, max_light)
}

/// Applies one source to `map`. Returns how many tiles it brightened.
pub fn apply_point_light<G: TileGridView + ?Sized>(
    source: &LightSource,
    map: &mut LightMap,
    grid: &G,
    params: &LightingParams,
) -> usize {
    let reach = source.radius(params.radius_scale);
    if reach <= 0 {
        tracing::trace!("Skipping light {:?}: radius {reach}", source.id);
        return 0;
    }

    let (lx, ly) = source.tile(params.tile_size);
    let x0 = lx.saturating_sub(reach).max(0);
    let y0 = ly.saturating_sub(reach).max(0);
    let x1 = lx.saturating_add(reach).min(map.width() as i32 - 1);
    let y1 = ly.saturating_add(reach).min(map.height() as i32 - 1);

    let radius = reach as f32;
    let center = Vec2::new(lx as f32, ly as f32);
    let mut lit = 0;

    for y in y0..=y1 {
        for x in x0..=x1 {
            let distance = Vec2::new(x as f32, y as f32).distance(center);
            if distance > radius {
                continue;
            }
            let local = falloff(source.intensity, distance, radius, params.max_light);
            if is_light_blocked(grid, (lx, ly), (x, y)) {
                continue;
            }
            if map.raise(x as usize, y as usize, local) {
                lit += 1;
            }
        }
    }

    tracing::trace!(
        "Light {:?} at tile ({lx}, {ly}) radius {reach} brightened {lit} tiles",
        source.id
    );
    lit
}
