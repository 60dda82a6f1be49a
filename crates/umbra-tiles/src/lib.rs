//! Tile kinds, colors, and the read-only world views consumed by lighting and walls.

pub mod color;
pub mod kind;
pub mod view;
pub mod world;

pub use color::Color;
pub use kind::{KindProps, Tile, TileKind, Transparency};
pub use view::{SurfaceProfile, TileGridView, WallGridView, WorldView};
pub use world::{TileError, TileWorld};
