//! Per-pixel colour operations shared by the fill engine and the drawing tools.
//!
//! Bitmaps handled by this crate are 8-bit RGB or RGBA. The [`ColorPixel`]
//! trait gives both formats a common view: the three colour channels, a
//! luminance value, an opaque fill colour and coverage blending.

use crate::definitions::Clamp;
use image::{Pixel, Rgb, Rgba};

/// Luminance of an RGB triple using the ITU-R BT.601 weights, in 14-bit
/// fixed point with rounding.
///
/// # Examples
/// ```
/// use plancolor::color::luminance;
///
/// assert_eq!(luminance([255, 255, 255]), 255);
/// assert_eq!(luminance([0, 0, 0]), 0);
/// assert_eq!(luminance([255, 0, 0]), 76);
/// ```
pub fn luminance(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb.map(u32::from);
    ((r * 4899 + g * 9617 + b * 1868 + 8192) >> 14) as u8
}

/// Chebyshev distance between two colours: the largest absolute
/// per-channel difference.
pub fn channel_distance(a: [u8; 3], b: [u8; 3]) -> u8 {
    a.iter()
        .zip(b.iter())
        .map(|(p, q)| p.abs_diff(*q))
        .max()
        .unwrap_or(0)
}

/// Converts a tolerance percentage in `0..=100` into the largest per-channel
/// difference it allows. Values above 100 saturate.
///
/// # Examples
/// ```
/// use plancolor::color::tolerance_to_channel_delta;
///
/// assert_eq!(tolerance_to_channel_delta(0), 0);
/// assert_eq!(tolerance_to_channel_delta(30), 77);
/// assert_eq!(tolerance_to_channel_delta(100), 255);
/// ```
pub fn tolerance_to_channel_delta(tolerance: u8) -> u8 {
    let tolerance = u32::from(tolerance.min(100));
    ((tolerance * 255 + 50) / 100) as u8
}

/// 8-bit colour pixels that can be filled and drawn on.
pub trait ColorPixel: Pixel<Subpixel = u8> + PartialEq + 'static {
    /// The red, green and blue channels.
    fn rgb(&self) -> [u8; 3];

    /// The pixel written by a fill with the given colour. Pixels with an
    /// alpha channel become fully opaque.
    fn opaque(color: Rgb<u8>) -> Self;

    /// Mixes `color` into this pixel, weighting it by `coverage` in `0.0..=1.0`.
    fn blend_rgb(&mut self, color: Rgb<u8>, coverage: f32);

    /// Luminance of this pixel, see [`luminance`].
    fn luminance(&self) -> u8 {
        luminance(self.rgb())
    }
}

fn mix(under: u8, over: u8, coverage: f32) -> u8 {
    <u8 as Clamp<f32>>::clamp(under as f32 * (1.0 - coverage) + over as f32 * coverage + 0.5)
}

impl ColorPixel for Rgb<u8> {
    fn rgb(&self) -> [u8; 3] {
        self.0
    }

    fn opaque(color: Rgb<u8>) -> Self {
        color
    }

    fn blend_rgb(&mut self, color: Rgb<u8>, coverage: f32) {
        let coverage = coverage.clamp(0.0, 1.0);
        for (c, o) in self.0.iter_mut().zip(color.0) {
            *c = mix(*c, o, coverage);
        }
    }
}

impl ColorPixel for Rgba<u8> {
    fn rgb(&self) -> [u8; 3] {
        [self.0[0], self.0[1], self.0[2]]
    }

    fn opaque(color: Rgb<u8>) -> Self {
        color.to_rgba()
    }

    fn blend_rgb(&mut self, color: Rgb<u8>, coverage: f32) {
        let coverage = coverage.clamp(0.0, 1.0);
        for (c, o) in self.0[..3].iter_mut().zip(color.0) {
            *c = mix(*c, o, coverage);
        }
        self.0[3] = mix(self.0[3], u8::MAX, coverage);
    }
}
