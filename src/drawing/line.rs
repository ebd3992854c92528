use crate::color::ColorPixel;
use crate::definitions::Image;
use crate::rect::Rect;
use image::Rgb;

/// Draws a line segment of the given width on a new copy of an image.
///
/// See [`draw_thick_line_segment_mut`].
#[must_use = "the function does not modify the original image"]
pub fn draw_thick_line_segment<P: ColorPixel>(
    image: &Image<P>,
    start: (f32, f32),
    end: (f32, f32),
    width: f32,
    color: Rgb<u8>,
    opacity: f32,
) -> Image<P> {
    let mut out = image.clone();
    draw_thick_line_segment_mut(&mut out, start, end, width, color, opacity);
    out
}

/// Draws as much of a thick line segment as lies inside the image bounds,
/// returning the number of pixels painted.
///
/// A pixel is painted if its centre lies within `width / 2` of the segment,
/// which gives the stroke round caps. Widths below one pixel are drawn one
/// pixel wide. Each painted pixel is blended with `color` at `opacity`,
/// a weight in `0.0..=1.0`.
///
/// # Examples
/// ```
/// # extern crate image;
/// # #[macro_use]
/// # extern crate plancolor;
/// # fn main() {
/// use image::{Rgb, RgbImage};
/// use plancolor::drawing::draw_thick_line_segment_mut;
///
/// let mut image = RgbImage::new(5, 3);
/// let painted = draw_thick_line_segment_mut(
///     &mut image, (1.0, 1.0), (3.0, 1.0), 1.0, Rgb([255, 255, 255]), 1.0);
///
/// assert_eq!(painted, 3);
/// assert_pixels_eq!(image, rgb_image!(
///     [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0];
///     [0, 0, 0], [255, 255, 255], [255, 255, 255], [255, 255, 255], [0, 0, 0];
///     [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0], [0, 0, 0]));
/// # }
/// ```
pub fn draw_thick_line_segment_mut<P: ColorPixel>(
    image: &mut Image<P>,
    start: (f32, f32),
    end: (f32, f32),
    width: f32,
    color: Rgb<u8>,
    opacity: f32,
) -> usize {
    let radius = width.max(1.0) / 2.0;
    let (image_width, image_height) = image.dimensions();
    if image_width == 0 || image_height == 0 {
        return 0;
    }

    let left = (start.0.min(end.0) - radius).floor();
    let right = (start.0.max(end.0) + radius).ceil();
    let top = (start.1.min(end.1) - radius).floor();
    let bottom = (start.1.max(end.1) + radius).ceil();
    if !(left.is_finite() && right.is_finite() && top.is_finite() && bottom.is_finite()) {
        return 0;
    }

    // Clipped to one pixel beyond the page so far-off strokes stay in range.
    let clip_x = |v: f32| v.clamp(-1.0, image_width as f32) as i32;
    let clip_y = |v: f32| v.clamp(-1.0, image_height as f32) as i32;
    let image_bounds = Rect::at(0, 0).of_size(image_width, image_height);
    let stroke_bounds = Rect::from_corners(
        (clip_x(left), clip_y(top)),
        (clip_x(right), clip_y(bottom)),
    );
    let Some(area) = image_bounds.intersect(stroke_bounds) else {
        return 0;
    };

    let mut painted = 0;
    for y in area.top()..=area.bottom() {
        for x in area.left()..=area.right() {
            if distance_to_segment((x as f32, y as f32), start, end) <= radius as f64 {
                image
                    .get_pixel_mut(x as u32, y as u32)
                    .blend_rgb(color, opacity);
                painted += 1;
            }
        }
    }
    painted
}

/// Euclidean distance from `p` to the closest point of the segment `a`-`b`.
///
/// Computed in `f64`, which stays pixel accurate for endpoints far off the page.
fn distance_to_segment(p: (f32, f32), a: (f32, f32), b: (f32, f32)) -> f64 {
    let (p, a, b) = (widen(p), widen(a), widen(b));
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let length_squared = dx * dx + dy * dy;
    let t = if length_squared == 0.0 {
        0.0
    } else {
        (((p.0 - a.0) * dx + (p.1 - a.1) * dy) / length_squared).clamp(0.0, 1.0)
    };
    let (cx, cy) = (a.0 + t * dx, a.1 + t * dy);
    ((p.0 - cx).powi(2) + (p.1 - cy).powi(2)).sqrt()
}

fn widen(p: (f32, f32)) -> (f64, f64) {
    (p.0 as f64, p.1 as f64)
}
