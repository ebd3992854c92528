use crate::color::ColorPixel;
use crate::definitions::Image;
use crate::rect::Rect;
use image::Rgb;

/// Draws the outline of a rectangle on a new copy of an image.
///
/// See [`draw_hollow_rect_mut`].
#[must_use = "the function does not modify the original image"]
pub fn draw_hollow_rect<P: ColorPixel>(
    image: &Image<P>,
    rect: Rect,
    thickness: u32,
    color: Rgb<u8>,
) -> Image<P> {
    let mut out = image.clone();
    draw_hollow_rect_mut(&mut out, rect, thickness, color);
    out
}

/// Draws as much of the outline of a rectangle as lies inside the image
/// bounds, returning the number of pixels painted.
///
/// The outline is `thickness` pixels wide and grows inward from the edges of
/// `rect`. A thickness of zero is drawn as one. Outline pixels are set to the
/// opaque `color`.
///
/// # Examples
/// ```
/// # extern crate image;
/// # #[macro_use]
/// # extern crate plancolor;
/// # fn main() {
/// use image::{Rgb, RgbImage};
/// use plancolor::drawing::draw_hollow_rect_mut;
/// use plancolor::rect::Rect;
///
/// let mut image = RgbImage::new(4, 4);
/// let painted = draw_hollow_rect_mut(&mut image, Rect::at(0, 0).of_size(4, 4), 1, Rgb([9, 9, 9]));
///
/// assert_eq!(painted, 12);
/// assert_eq!(image.get_pixel(3, 0), &Rgb([9, 9, 9]));
/// assert_eq!(image.get_pixel(1, 1), &Rgb([0, 0, 0]));
/// # }
/// ```
pub fn draw_hollow_rect_mut<P: ColorPixel>(
    image: &mut Image<P>,
    rect: Rect,
    thickness: u32,
    color: Rgb<u8>,
) -> usize {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return 0;
    }
    let Some(visible) = Rect::at(0, 0).of_size(width, height).intersect(rect) else {
        return 0;
    };

    let thickness = thickness.max(1) as i64;
    let pixel = P::opaque(color);
    let on_outline = |x: i32, y: i32| {
        (x as i64 - rect.left() as i64) < thickness
            || (rect.right() as i64 - x as i64) < thickness
            || (y as i64 - rect.top() as i64) < thickness
            || (rect.bottom() as i64 - y as i64) < thickness
    };

    let mut painted = 0;
    for y in visible.top()..=visible.bottom() {
        for x in visible.left()..=visible.right() {
            if on_outline(x, y) {
                image.put_pixel(x as u32, y as u32, pixel);
                painted += 1;
            }
        }
    }
    painted
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage, RgbImage};

    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    fn outline(width: u32, height: u32, inside: impl Fn(u32, u32) -> bool) -> RgbImage {
        RgbImage::from_fn(width, height, |x, y| {
            if inside(x, y) {
                RED
            } else {
                Rgb([0, 0, 0])
            }
        })
    }

    #[test]
    fn test_thick_outline_grows_inward() {
        let image = RgbImage::new(8, 8);
        let out = draw_hollow_rect(&image, Rect::at(1, 1).of_size(6, 6), 2, RED);
        let expected = outline(8, 8, |x, y| {
            let inner = (3..=4).contains(&x) && (3..=4).contains(&y);
            (1..=6).contains(&x) && (1..=6).contains(&y) && !inner
        });
        assert_pixels_eq!(out, expected);
    }

    #[test]
    fn test_thickness_covering_rect_fills_it() {
        let mut image = RgbImage::new(3, 3);
        let painted = draw_hollow_rect_mut(&mut image, Rect::at(0, 0).of_size(3, 3), 5, RED);
        assert_eq!(painted, 9);
    }

    #[test]
    fn test_partially_visible_rect() {
        let mut image = RgbImage::new(4, 4);
        let painted = draw_hollow_rect_mut(&mut image, Rect::at(-2, 1).of_size(4, 10), 1, RED);
        // Only the right edge (x = 1) and the top edge (y = 1) are visible.
        let expected = outline(4, 4, |x, y| (x == 1 && y >= 1) || (y == 1 && x <= 1));
        assert_pixels_eq!(image, expected);
        assert_eq!(painted, 4);
    }

    #[test]
    fn test_rect_outside_image() {
        let mut image = RgbImage::new(4, 4);
        let painted = draw_hollow_rect_mut(&mut image, Rect::at(10, 10).of_size(3, 3), 1, RED);
        assert_eq!(painted, 0);
    }

    #[test]
    fn test_outline_is_opaque() {
        let image = RgbaImage::from_pixel(2, 2, Rgba([0, 0, 0, 0]));
        let out = draw_hollow_rect(&image, Rect::at(0, 0).of_size(2, 2), 1, RED);
        assert_pixels_eq!(out, RgbaImage::from_pixel(2, 2, Rgba([255, 0, 0, 255])));
    }
}
