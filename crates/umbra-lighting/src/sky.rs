//! Sky light: breadth-first diffusion inward from surface-exposed tiles.
//!
//! Every non-air tile with an air or out-of-world neighbour is seeded with its
//! depth light. Light then spreads one layer per hop, scaled by the neighbour's
//! material decay and by `1 - layer / layer_cap`. A cell first reached at
//! `layer_cap` hops is forced dark unless it is a seed. Each cell is finalized at most once per pass, on the
//! first arrival that clears the acceptance threshold.

use std::collections::VecDeque;

use umbra_tiles::{TileGridView, WorldView};

use crate::depth::depth_light;
use crate::light_map::LightMap;
use crate::params::LightingParams;

/// The four axis-aligned neighbour offsets.
const NEIGHBORS_4: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// One pending diffusion step.
#[derive(Clone, Copy, Debug)]
struct Spread {
    x: usize,
    y: usize,
    intensity: f32,
    layer: u32,
}

/// Counters from one sky pass.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SkyStats {
    /// Exposed tiles that seeded the queue.
    pub seeds: usize,
    /// Neighbour cells raised by diffusion.
    pub accepted: usize,
    /// Cells closed off by the layer cap.
    pub cutoff: usize,
}

/// Returns `true` if the non-air tile at `(x, y)` touches air or the world edge.
pub fn is_exposed<G: TileGridView + ?Sized>(grid: &G, x: usize, y: usize) -> bool {
    NEIGHBORS_4.iter().any(|&(dx, dy)| {
        match grid.tile_checked(x as i32 + dx, y as i32 + dy) {
            Some(tile) => tile.is_air(),
            None => true,
        }
    })
}

/// Runs one full sky pass over `world`, max-combining into `map`.
///
/// `map` must have the world's dimensions.
pub fn propagate_sky<W: WorldView + ?Sized>(
    world: &W,
    map: &mut LightMap,
    params: &LightingParams,
) -> SkyStats {
    let (w, h) = (world.width(), world.height());
    debug_assert_eq!((map.width(), map.height()), (w, h));

    let mut stats = SkyStats::default();
    let mut queue = VecDeque::new();
    let mut visited = vec![false; w * h];
    let mut seeded = vec![false; w * h];

    // Seeds are queued in column order.
    for x in 0..w {
        for y in 0..h {
            if world.tile(x, y).is_air() || !is_exposed(world, x, y) {
                continue;
            }
            let initial = depth_light(world, x as i32, y as i32, params);
            map.raise(x, y, initial);
            seeded[y * w + x] = true;
            queue.push_back(Spread {
                x,
                y,
                intensity: initial,
                layer: 0,
            });
            stats.seeds += 1;
        }
    }

    let cap = params.layer_cap;

    while let Some(Spread {
        x,
        y,
        intensity,
        layer,
    }) = queue.pop_front()
    {
        for (dx, dy) in NEIGHBORS_4 {
            let Some(neighbor) = world.tile_checked(x as i32 + dx, y as i32 + dy) else {
                continue;
            };
            let (nx, ny) = ((x as i32 + dx) as usize, (y as i32 + dy) as usize);
            let idx = ny * w + nx;
            if visited[idx] {
                continue;
            }

            let next_layer = layer + 1;
            if next_layer >= cap {
                if !seeded[idx] {
                    map.set(nx, ny, 0.0);
                }
                visited[idx] = true;
                stats.cutoff += 1;
                continue;
            }

            let layer_factor = 1.0 - next_layer as f32 / cap as f32;
            let candidate = intensity * params.decay.for_kind(neighbor.kind) * layer_factor;

            if candidate > params.min_propagated && candidate > map.value(nx, ny) {
                map.raise(nx, ny, candidate);
                visited[idx] = true;
                stats.accepted += 1;
                queue.push_back(Spread {
                    x: nx,
                    y: ny,
                    intensity: candidate,
                    layer: next_layer,
                });
            }
        }
    }

    stats
}
