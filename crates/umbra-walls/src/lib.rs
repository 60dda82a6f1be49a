//! Background wall layer: picks the wall kind behind each tile, shades it from
//! the lighting system, and emits a draw list for the renderer.

mod atlas;
pub mod biome;
mod layer;
mod params;
pub mod select;
pub mod shade;

pub use atlas::{PixelRect, WallAtlas, variant_rect};
pub use biome::{Biome, BiomeLookup, SectionBiomes};
pub use layer::{WallLayer, WallScene, WallSprite};
pub use params::{SurfaceFadeParams, WallParams};
pub use select::select_wall_kind;
pub use shade::{SurfaceFade, wall_brightness, wall_tint};
