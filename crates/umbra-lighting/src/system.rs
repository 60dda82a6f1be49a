//! The lighting facade: owns the light map and source list, runs recompute
//! passes, and serves per-tile reads to renderers.

use std::time::{Duration, Instant};

use glam::Vec2;
use umbra_tiles::{Color, WorldView};

use crate::light_map::LightMap;
use crate::params::{LightingParams, RecomputePolicy};
use crate::point::{LightSource, LightSourceId, apply_point_light};
use crate::sky::{SkyStats, propagate_sky};

/// Whether a pass has completed since the system was created or re-attached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightingState {
    Uninitialized,
    Initialized,
}

/// Counters from the most recent full pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PassStats {
    pub sky: SkyStats,
    /// Active sources applied.
    pub point_sources: usize,
    /// Cells raised by point lights.
    pub point_tiles: usize,
    pub elapsed: Duration,
}

/// Per-tile lighting for one world.
///
/// Reads never fail: out-of-range coordinates and a detached map degrade to
/// the ambient level, and disabled lighting reads as full bright.
#[derive(Debug)]
pub struct LightingSystem {
    params: LightingParams,
    enabled: bool,
    map: Option<LightMap>,
    sources: Vec<LightSource>,
    next_id: u32,
    state: LightingState,
    last_stats: Option<PassStats>,
}

impl LightingSystem {
    /// Creates a system with a map for a `width x height` world.
    ///
    /// No light is computed until [`recalculate_lighting`](Self::recalculate_lighting).
    pub fn new(params: LightingParams, width: usize, height: usize) -> Self {
        let mut system = Self::detached(params);
        system.attach(width, height);
        system
    }

    /// Creates a system without a map. Reads return constants until [`attach`](Self::attach).
    pub fn detached(params: LightingParams) -> Self {
        Self {
            enabled: params.enabled,
            params,
            map: None,
            sources: Vec::new(),
            next_id: 0,
            state: LightingState::Uninitialized,
            last_stats: None,
        }
    }

    /// Allocates a fresh ambient map. The next recompute always runs.
    pub fn attach(&mut self, width: usize, height: usize) {
        self.map = Some(LightMap::new(width, height, self.params.ambient_light));
        self.state = LightingState::Uninitialized;
    }

    pub fn params(&self) -> &LightingParams {
        &self.params
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_initialized(&self) -> bool {
        self.state == LightingState::Initialized
    }

    pub fn state(&self) -> LightingState {
        self.state
    }

    pub fn light_map(&self) -> Option<&LightMap> {
        self.map.as_ref()
    }

    pub fn last_stats(&self) -> Option<&PassStats> {
        self.last_stats.as_ref()
    }

    pub fn light_source_count(&self) -> usize {
        self.sources.len()
    }

    pub fn light_sources(&self) -> &[LightSource] {
        &self.sources
    }

    /// Light intensity at `(x, y)`.
    pub fn light_level(&self, x: i32, y: i32) -> f32 {
        if !self.enabled {
            return self.params.max_light;
        }
        self.map
            .as_ref()
            .and_then(|map| map.get(x, y))
            .unwrap_or(self.params.ambient_light)
    }

    /// Gray level for `(x, y)`, from black at zero to white at full light.
    pub fn light_color(&self, x: i32, y: i32) -> Color {
        if !self.enabled {
            return Color::WHITE;
        }
        let level = self.light_level(x, y).clamp(0.0, 1.0);
        Color::BLACK.lerp(Color::WHITE, level)
    }

    /// Runs a full pass: reset, sky diffusion, then every active source.
    ///
    /// No-op while disabled or detached, and under [`RecomputePolicy::Once`]
    /// after the first completed pass.
    pub fn recalculate_lighting<W: WorldView + ?Sized>(&mut self, world: &W) {
        if !self.enabled {
            return;
        }
        if self.params.recompute == RecomputePolicy::Once && self.is_initialized() {
            tracing::trace!("Lighting already computed, skipping recompute");
            return;
        }
        let Some(map) = self.map.as_mut() else {
            tracing::trace!("No light map attached, skipping recompute");
            return;
        };

        let (w, h) = (world.width(), world.height());
        if (map.width(), map.height()) != (w, h) {
            tracing::debug!(
                "Resizing light map {}x{} -> {w}x{h}",
                map.width(),
                map.height()
            );
            *map = LightMap::new(w, h, self.params.ambient_light);
        }

        let start = Instant::now();
        map.reset();
        let sky = propagate_sky(world, map, &self.params);

        let mut stats = PassStats {
            sky,
            ..Default::default()
        };
        for source in self.sources.iter().filter(|s| s.active) {
            stats.point_tiles += apply_point_light(source, map, world, &self.params);
            stats.point_sources += 1;
        }
        stats.elapsed = start.elapsed();

        tracing::debug!(
            "Lighting pass {w}x{h}: {} seeds, {} diffused, {} cut off, {} sources lit {} tiles in {:.2?}",
            stats.sky.seeds,
            stats.sky.accepted,
            stats.sky.cutoff,
            stats.point_sources,
            stats.point_tiles,
            stats.elapsed
        );

        self.state = LightingState::Initialized;
        self.last_stats = Some(stats);
    }

    /// Enables or disables lighting. Enabling recomputes.
    pub fn set_enabled<W: WorldView + ?Sized>(&mut self, enabled: bool, world: &W) {
        self.enabled = enabled;
        if enabled {
            self.recalculate_lighting(world);
        }
    }

    /// Registers a source at `position` (pixels) and recomputes when enabled.
    pub fn add_light_source<W: WorldView + ?Sized>(
        &mut self,
        world: &W,
        position: Vec2,
        intensity: f32,
        color: Color,
    ) -> LightSourceId {
        let id = LightSourceId(self.next_id);
        self.next_id += 1;
        self.sources.push(LightSource {
            id,
            position,
            intensity,
            color,
            active: true,
        });
        tracing::trace!("Added light {id:?} at {position} intensity {intensity}");
        self.recalculate_lighting(world);
        id
    }

    /// Removes the source nearest to `position` if it lies within one tile.
    ///
    /// Recomputes when something was removed and lighting is enabled.
    pub fn remove_light_source<W: WorldView + ?Sized>(
        &mut self,
        world: &W,
        position: Vec2,
    ) -> Option<LightSource> {
        let reach = self.params.tile_size;
        let (index, _) = self
            .sources
            .iter()
            .enumerate()
            .map(|(i, s)| (i, s.position.distance(position)))
            .filter(|&(_, d)| d < reach)
            .min_by(|a, b| a.1.total_cmp(&b.1))?;

        let removed = self.sources.swap_remove(index);
        tracing::trace!("Removed light {:?}", removed.id);
        self.recalculate_lighting(world);
        Some(removed)
    }

    /// Turns a source on or off. Returns `false` for an unknown id.
    pub fn set_source_active<W: WorldView + ?Sized>(
        &mut self,
        world: &W,
        id: LightSourceId,
        active: bool,
    ) -> bool {
        let Some(source) = self.sources.iter_mut().find(|s| s.id == id) else {
            return false;
        };
        if source.active != active {
            source.active = active;
            self.recalculate_lighting(world);
        }
        true
    }

    /// Notifies the system that the tile at `(x, y)` changed.
    pub fn on_tile_changed<W: WorldView + ?Sized>(&mut self, world: &W, x: i32, y: i32) {
        tracing::trace!("Tile changed at ({x}, {y})");
        self.recalculate_lighting(world);
    }
}
