//! Closed set of tile kinds with a static property table.
//!
//! Every kind maps to a [`KindProps`] row describing how light interacts with it
//! and which fallback color its background wall uses. Air is discriminant 0 so
//! that zeroed tile memory represents empty space.

use serde::{Deserialize, Serialize};

use crate::color::Color;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// How light passes through a tile kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transparency {
    /// Empty space.
    Transparent,
    /// Semi-transparent liquid (water).
    Liquid,
    /// Blocks point-light rays and decays sky light heavily.
    Opaque,
}

/// Tile and wall kinds. Walls reuse the same enumeration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[repr(u8)]
pub enum TileKind {
    #[default]
    Air = 0,
    Dirt = 1,
    Grass = 2,
    Stone = 3,
    Sand = 4,
    Snow = 5,
    JungleGrass = 6,
    Water = 7,
    Lava = 8,
    CopperOre = 9,
    IronOre = 10,
    GoldOre = 11,
    SilverOre = 12,
    Coal = 13,
    Diamond = 14,
    Marble = 15,
}

/// Static properties of a [`TileKind`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KindProps {
    /// Light interaction class.
    pub transparency: Transparency,
    /// Color used when a background wall of this kind has no dedicated atlas.
    pub wall_color: Option<Color>,
    /// Character used by ASCII world layouts.
    pub glyph: char,
}

const fn props(transparency: Transparency, wall_color: Option<Color>, glyph: char) -> KindProps {
    KindProps {
        transparency,
        wall_color,
        glyph,
    }
}

use Transparency::{Liquid, Opaque, Transparent};

/// Indexed by `TileKind as usize`.
const PROPS: [KindProps; TileKind::COUNT] = [
    props(Transparent, None, '.'),
    props(Opaque, Some(Color::BROWN), 'd'),
    props(Opaque, None, 'g'),
    props(Opaque, Some(Color::GRAY), '#'),
    props(Opaque, Some(Color::YELLOW), 's'),
    props(Opaque, Some(Color::LIGHT_BLUE), '*'),
    props(Opaque, None, 'j'),
    props(Liquid, None, '~'),
    props(Opaque, None, 'l'),
    props(Opaque, None, 'c'),
    props(Opaque, None, 'i'),
    props(Opaque, None, 'o'),
    props(Opaque, None, 'v'),
    props(Opaque, None, 'k'),
    props(Opaque, None, 'D'),
    props(Opaque, None, 'm'),
];

// ---------------------------------------------------------------------------
// TileKind
// ---------------------------------------------------------------------------

impl TileKind {
    /// Number of kinds.
    pub const COUNT: usize = 16;

    /// Every kind in discriminant order.
    pub const ALL: [TileKind; Self::COUNT] = [
        TileKind::Air,
        TileKind::Dirt,
        TileKind::Grass,
        TileKind::Stone,
        TileKind::Sand,
        TileKind::Snow,
        TileKind::JungleGrass,
        TileKind::Water,
        TileKind::Lava,
        TileKind::CopperOre,
        TileKind::IronOre,
        TileKind::GoldOre,
        TileKind::SilverOre,
        TileKind::Coal,
        TileKind::Diamond,
        TileKind::Marble,
    ];

    /// Property row for this kind.
    pub fn props(self) -> &'static KindProps {
        &PROPS[self as usize]
    }

    pub fn transparency(self) -> Transparency {
        self.props().transparency
    }

    pub fn is_air(self) -> bool {
        self == TileKind::Air
    }

    /// Opaque kinds hard-block point-light rays. Air and water are not opaque.
    pub fn is_opaque(self) -> bool {
        self.transparency() == Transparency::Opaque
    }

    pub fn wall_color(self) -> Option<Color> {
        self.props().wall_color
    }

    pub fn glyph(self) -> char {
        self.props().glyph
    }

    /// Reverse glyph lookup for ASCII layouts.
    pub fn from_glyph(glyph: char) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.glyph() == glyph)
    }

    /// Decodes a raw discriminant, `None` for unknown values.
    pub fn from_u8(raw: u8) -> Option<Self> {
        Self::ALL.get(raw as usize).copied()
    }
}

/// A foreground tile cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub kind: TileKind,
}

impl Tile {
    pub const AIR: Self = Self { kind: TileKind::Air };

    pub const fn new(kind: TileKind) -> Self {
        Self { kind }
    }

    pub fn is_air(self) -> bool {
        self.kind.is_air()
    }
}

impl From<TileKind> for Tile {
    fn from(kind: TileKind) -> Self {
        Self::new(kind)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
