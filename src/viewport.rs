//! Mapping between page pixels and the zoomed view a user clicks on.

use image::imageops::{resize, FilterType};
use image::RgbImage;

/// Smallest zoom, in percent.
pub const MIN_ZOOM: u32 = 50;

/// Largest zoom, in percent.
pub const MAX_ZOOM: u32 = 300;

/// How a page is shown: a zoom percentage, with the scaled page centred in
/// the widget that displays it.
///
/// # Examples
/// ```
/// use plancolor::viewport::Viewport;
///
/// let view = Viewport::new(200);
/// assert_eq!(view.scaled_size((100, 50)), (200, 100));
///
/// // A 300x100 widget leaves 50 pixels either side of the page.
/// assert_eq!(view.to_image_coords((51, 10), (300, 100), (100, 50)), Some((0, 5)));
/// assert_eq!(view.to_image_coords((49, 10), (300, 100), (100, 50)), None);
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Viewport {
    zoom: u32,
}

impl Default for Viewport {
    fn default() -> Self {
        Viewport { zoom: 100 }
    }
}

impl Viewport {
    /// A viewport at `zoom` percent, clamped to [`MIN_ZOOM`]`..=`[`MAX_ZOOM`].
    pub fn new(zoom: u32) -> Viewport {
        Viewport {
            zoom: zoom.clamp(MIN_ZOOM, MAX_ZOOM),
        }
    }

    /// Zoom in percent.
    pub fn zoom(&self) -> u32 {
        self.zoom
    }

    /// Changes the zoom, clamping it to the supported range.
    pub fn set_zoom(&mut self, zoom: u32) {
        *self = Viewport::new(zoom);
    }

    fn scale(&self) -> f64 {
        self.zoom as f64 / 100.0
    }

    /// Size of a page of `image_size` once zoomed, truncated to whole pixels.
    pub fn scaled_size(&self, image_size: (u32, u32)) -> (u32, u32) {
        let scale = self.scale();
        (
            (image_size.0 as f64 * scale) as u32,
            (image_size.1 as f64 * scale) as u32,
        )
    }

    /// Converts a click at `click` in a widget of `widget_size`, which shows
    /// a page of `image_size` centred at this zoom, to page coordinates.
    ///
    /// Returns `None` for clicks that miss the page.
    pub fn to_image_coords(
        &self,
        click: (i32, i32),
        widget_size: (u32, u32),
        image_size: (u32, u32),
    ) -> Option<(u32, u32)> {
        let scaled = self.scaled_size(image_size);
        let offset_x = widget_size.0.saturating_sub(scaled.0) / 2;
        let offset_y = widget_size.1.saturating_sub(scaled.1) / 2;

        let scale = self.scale();
        let x = ((click.0 as f64 - offset_x as f64) / scale).floor();
        let y = ((click.1 as f64 - offset_y as f64) / scale).floor();

        if x < 0.0 || y < 0.0 || x >= image_size.0 as f64 || y >= image_size.1 as f64 {
            return None;
        }
        Some((x as u32, y as u32))
    }

    /// Renders `page` at this zoom with Lanczos resampling.
    pub fn render(&self, page: &RgbImage) -> RgbImage {
        let (width, height) = self.scaled_size(page.dimensions());
        if (width, height) == page.dimensions() {
            return page.clone();
        }
        resize(page, width.max(1), height.max(1), FilterType::Lanczos3)
    }
}
