//! Random and contrasting colors

use rand::Rng;

use crate::constants::DEFAULT_CONTRAST_GAP;
use crate::error::{BuildError, Result};
use crate::random::random_float_with;
use winforge_types::{Color, RGB_MID};

/// Color with every channel uniform in `[0, 255]`
pub fn random_color() -> Color {
    random_color_with(&mut rand::thread_rng())
}

pub fn random_color_with<R: Rng + ?Sized>(rng: &mut R) -> Color {
    Color::new(rng.gen(), rng.gen(), rng.gen())
}

/// Random color at least `brightness_floor` bright.
///
/// Hue is uniform in `[0, 1)`, brightness uniform in `[brightness_floor, 1)`
/// and saturation is `1 - brightness`, so brighter picks are paler.
pub fn random_color_with_floor(brightness_floor: f32) -> Result<Color> {
    random_color_with_floor_with(&mut rand::thread_rng(), brightness_floor)
}

pub fn random_color_with_floor_with<R: Rng + ?Sized>(rng: &mut R, brightness_floor: f32) -> Result<Color> {
    if !(0.0..=1.0).contains(&brightness_floor) {
        return Err(BuildError::invalid_argument(
            "brightness_floor",
            format!("must be between 0 and 1, got {}", brightness_floor),
        ));
    }
    let hue = random_float_with(rng, 0.0, 1.0)?;
    // A floor of exactly 1 leaves an empty range; brightness is then 1.
    let brightness = if brightness_floor < 1.0 {
        random_float_with(rng, brightness_floor, 1.0)?
    } else {
        1.0
    };
    let saturation = 1.0 - brightness;
    Ok(Color::from_hsb(hue, saturation, brightness))
}

/// Color pushed away from `color` by the default gap of 100 per channel
pub fn contrasting_color(color: Color) -> Color {
    contrasting_color_with_gap(color, DEFAULT_CONTRAST_GAP)
}

/// Push each channel `gap` away from the midpoint.
///
/// Channels below 127 go up (capped at 255), channels at or above it go
/// down (floored at 0). A heuristic, not a perceptual distance.
pub fn contrasting_color_with_gap(color: Color, gap: u8) -> Color {
    let shift = |channel: u8| {
        if channel < RGB_MID {
            channel.saturating_add(gap)
        } else {
            channel.saturating_sub(gap)
        }
    };
    Color::from_channels(color.channels().map(shift))
}
