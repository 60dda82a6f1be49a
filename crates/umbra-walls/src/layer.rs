//! Builds the background wall draw list for a view rectangle.

use umbra_lighting::{LightingParams, LightingSystem};
use umbra_tiles::{Color, TileKind, WallGridView, WorldView};

use crate::atlas::{PixelRect, WallAtlas, variant_rect};
use crate::biome::BiomeLookup;
use crate::params::WallParams;
use crate::select::select_wall_kind;
use crate::shade::{SurfaceFade, wall_brightness, wall_tint};

/// One wall quad for the renderer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WallSprite {
    /// Tile coordinates of the wall.
    pub tile: (usize, usize),
    /// Destination in world pixels.
    pub dest: PixelRect,
    /// Atlas cell to sample, `None` to draw the whole plain texture.
    pub source: Option<PixelRect>,
    pub tint: Color,
    pub kind: TileKind,
}

/// Everything the wall layer reads from the rest of the game.
pub struct WallScene<'a, W: ?Sized> {
    pub world: &'a W,
    pub biomes: Option<&'a dyn BiomeLookup>,
    pub lighting: Option<&'a LightingSystem>,
}

impl<'a, W: ?Sized> WallScene<'a, W> {
    /// A scene with no biome lookup and no lighting.
    pub fn new(world: &'a W) -> Self {
        Self {
            world,
            biomes: None,
            lighting: None,
        }
    }

    pub fn with_biomes(mut self, biomes: &'a dyn BiomeLookup) -> Self {
        self.biomes = Some(biomes);
        self
    }

    pub fn with_lighting(mut self, lighting: &'a LightingSystem) -> Self {
        self.lighting = Some(lighting);
        self
    }
}

/// Background wall layer.
pub struct WallLayer {
    params: WallParams,
    atlas: WallAtlas,
    fade: SurfaceFade,
}

impl WallLayer {
    pub fn new(params: WallParams, atlas: WallAtlas) -> Self {
        let fade = SurfaceFade::new(params.fade.clone());
        Self {
            params,
            atlas,
            fade,
        }
    }

    pub fn params(&self) -> &WallParams {
        &self.params
    }

    pub fn atlas(&self) -> &WallAtlas {
        &self.atlas
    }

    pub fn atlas_mut(&mut self) -> &mut WallAtlas {
        &mut self.atlas
    }

    /// Inclusive tile range covered by `view` (pixels), with a small margin,
    /// clipped to the world. `None` when the view misses the world entirely.
    pub fn visible_tiles(
        &self,
        view: PixelRect,
        width: usize,
        height: usize,
    ) -> Option<((usize, usize), (usize, usize))> {
        let size = self.params.wall_size.max(1) as i32;
        let x0 = ((view.left() - 2) / size).max(0);
        let y0 = ((view.top() - 2) / size).max(0);
        let x1 = ((view.right() + 2) / size + 1).min(width as i32 - 1);
        let y1 = ((view.bottom() + 2) / size + 1).min(height as i32 - 1);
        if x0 > x1 || y0 > y1 {
            return None;
        }
        Some(((x0 as usize, y0 as usize), (x1 as usize, y1 as usize)))
    }

    /// Wall sprite for one tile, or `None` where no wall is drawn.
    pub fn sprite_at<W>(
        &self,
        scene: &WallScene<'_, W>,
        lighting_params: &LightingParams,
        x: usize,
        y: usize,
    ) -> Option<WallSprite>
    where
        W: WorldView + WallGridView + ?Sized,
    {
        let world = scene.world;
        if world.wall(x, y).is_air() {
            return None;
        }
        let biomes = if self.params.use_biomes { scene.biomes } else { None };
        let kind = select_wall_kind(world, biomes, x, y);
        if kind.is_air() {
            return None;
        }

        let brightness = wall_brightness(world, scene.lighting, lighting_params, &self.params, x, y);
        let mut tint = wall_tint(kind, brightness, &self.atlas);
        let alpha = self.fade.alpha(world, x, y);
        if alpha < 1.0 {
            tint.a = (255.0 * alpha) as u8;
        }

        let size = self.params.wall_size;
        let dest = PixelRect::new(x as i32 * size as i32, y as i32 * size as i32, size, size);
        let source = self
            .atlas
            .contains(kind)
            .then(|| variant_rect(x as i32, y as i32, &self.params));

        Some(WallSprite {
            tile: (x, y),
            dest,
            source,
            tint,
            kind,
        })
    }

    /// Wall sprites visible in `view` (pixels), column by column.
    pub fn collect<W>(&self, scene: &WallScene<'_, W>, view: PixelRect) -> Vec<WallSprite>
    where
        W: WorldView + WallGridView + ?Sized,
    {
        let world = scene.world;
        let Some(((x0, y0), (x1, y1))) = self.visible_tiles(view, world.width(), world.height()) else {
            return Vec::new();
        };

        let defaults = LightingParams::default();
        let lighting_params = scene.lighting.map_or(&defaults, |l| l.params());

        let mut sprites = Vec::with_capacity((x1 - x0 + 1) * (y1 - y0 + 1));
        for x in x0..=x1 {
            for y in y0..=y1 {
                if let Some(sprite) = self.sprite_at(scene, lighting_params, x, y) {
                    sprites.push(sprite);
                }
            }
        }

        tracing::trace!(
            "Collected {} wall sprites for tiles ({x0}, {y0})..=({x1}, {y1})",
            sprites.len()
        );
        sprites
    }
}
