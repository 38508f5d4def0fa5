//! Foundational color type used by window and container models.
//!
//! Colors are stored as three 8-bit channels. Hue/saturation/brightness
//! input is converted on construction, so every `Color` is plain RGB.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Midpoint of an 8-bit channel
pub const RGB_MID: u8 = 127;

/// Maximum value of an 8-bit channel
pub const RGB_MAX: u8 = 255;

/// Opaque RGB color with 8-bit channels
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(RGB_MAX, RGB_MAX, RGB_MAX);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from hue, saturation and brightness components.
    ///
    /// `hue` wraps around (only its fractional part is used); `saturation`
    /// and `brightness` are expected in `[0, 1]`.
    pub fn from_hsb(hue: f32, saturation: f32, brightness: f32) -> Self {
        let scale = |v: f32| (v * 255.0 + 0.5).clamp(0.0, 255.0) as u8;

        if saturation == 0.0 {
            let v = scale(brightness);
            return Self::new(v, v, v);
        }

        let h = (hue - hue.floor()) * 6.0;
        let f = h - h.floor();
        let p = brightness * (1.0 - saturation);
        let q = brightness * (1.0 - saturation * f);
        let t = brightness * (1.0 - saturation * (1.0 - f));

        let (r, g, b) = match h as u32 {
            0 => (brightness, t, p),
            1 => (q, brightness, p),
            2 => (p, brightness, t),
            3 => (p, q, brightness),
            4 => (t, p, brightness),
            _ => (brightness, p, q),
        };
        Self::new(scale(r), scale(g), scale(b))
    }

    /// Channels as an array, in `[r, g, b]` order
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Build a color from a `[r, g, b]` array
    pub fn from_channels([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }

    /// CSS-style hex string, e.g. `#1e90ff`
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to GTK RGBA
    #[cfg(feature = "gtk")]
    pub fn to_gdk_rgba(&self) -> gdk4::RGBA {
        gdk4::RGBA::new(
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
            1.0,
        )
    }

    /// Create from GTK RGBA, dropping the alpha channel
    #[cfg(feature = "gtk")]
    pub fn from_gdk_rgba(rgba: &gdk4::RGBA) -> Self {
        let scale = |v: f32| (v * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::new(scale(rgba.red()), scale(rgba.green()), scale(rgba.blue()))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}
