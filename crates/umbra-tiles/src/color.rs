//! 8-bit RGBA color used for light tints and wall fallback colors.

use serde::{Deserialize, Serialize};

/// Straight (non-premultiplied) 8-bit RGBA color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const GRAY: Self = Self::rgb(128, 128, 128);
    pub const YELLOW: Self = Self::rgb(255, 255, 0);
    pub const LIGHT_BLUE: Self = Self::rgb(173, 216, 230);
    pub const BROWN: Self = Self::rgb(139, 69, 19);

    /// Opaque color from its three channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Per-channel linear interpolation (alpha included), `t` clamped to `[0, 1]`.
    pub fn lerp(self, other: Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Self {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }

    /// Scales the color channels by `factor` and forces full opacity.
    ///
    /// Channels truncate toward zero, so `WHITE.scale(0.5)` is `(127, 127, 127)`.
    pub fn scale(self, factor: f32) -> Self {
        let f = factor.clamp(0.0, 1.0);
        let ch = |c: u8| (c as f32 * f) as u8;
        Self::rgb(ch(self.r), ch(self.g), ch(self.b))
    }

    /// Gray level `255 * brightness`, opaque.
    pub fn gray(brightness: f32) -> Self {
        Self::WHITE.scale(brightness)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}
