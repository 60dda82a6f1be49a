//! Per-tile lighting for 2D tile worlds: depth falloff below the surface,
//! breadth-first sky diffusion, and occluded point lights, behind the
//! [`LightingSystem`] facade.

pub mod depth;
pub mod light_map;
mod params;
pub mod point;
pub mod sky;
mod system;

pub use depth::{depth_light, fade_for_depth};
pub use light_map::LightMap;
pub use params::{DecayTable, LightingParams, RecomputePolicy};
pub use point::{LightSource, LightSourceId, apply_point_light, falloff, is_light_blocked};
pub use sky::{SkyStats, is_exposed, propagate_sky};
pub use system::{LightingState, LightingSystem, PassStats};
