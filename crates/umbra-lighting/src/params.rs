//! Lighting tunables.

use serde::{Deserialize, Serialize};
use umbra_tiles::{TileKind, Transparency};

/// When a requested recompute actually runs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecomputePolicy {
    /// Compute on the first request only; later requests are ignored.
    Once,
    /// Every request runs a full pass.
    #[default]
    OnDemand,
}

/// Sky-light decay multiplier per transparency class.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecayTable {
    pub air: f32,
    pub opaque: f32,
    pub liquid: f32,
}

impl DecayTable {
    pub fn for_kind(&self, kind: TileKind) -> f32 {
        match kind.transparency() {
            Transparency::Transparent => self.air,
            Transparency::Opaque => self.opaque,
            Transparency::Liquid => self.liquid,
        }
    }
}

impl Default for DecayTable {
    fn default() -> Self {
        Self {
            air: 0.9,
            opaque: 0.75,
            liquid: 0.85,
        }
    }
}

/// Tunables for the whole lighting pipeline.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LightingParams {
    /// Whether lighting starts enabled. Disabled lighting reads as full bright.
    pub enabled: bool,
    /// Floor intensity representing total darkness.
    pub ambient_light: f32,
    /// Full brightness.
    pub max_light: f32,
    /// Sky diffusion stops at this many breadth-first layers.
    pub layer_cap: u32,
    /// Diffused values must exceed this to be accepted.
    pub min_propagated: f32,
    /// Per-material sky decay.
    pub decay: DecayTable,
    /// Point-light radius in tiles per unit of intensity.
    pub radius_scale: f32,
    /// Size of a tile in source-position units (pixels).
    pub tile_size: f32,
    /// Recompute behavior of the facade.
    pub recompute: RecomputePolicy,
}

impl Default for LightingParams {
    fn default() -> Self {
        Self {
            enabled: true,
            ambient_light: 0.01,
            max_light: 1.0,
            layer_cap: 6,
            min_propagated: 0.01,
            decay: DecayTable::default(),
            radius_scale: 10.0,
            tile_size: 16.0,
            recompute: RecomputePolicy::OnDemand,
        }
    }
}
