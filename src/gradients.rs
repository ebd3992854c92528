//! Functions for computing gradients of image intensities.
//!
//! The fill engine only needs one scalar per pixel: how sharply the
//! luminance changes there. That is the Euclidean norm of the horizontal
//! and vertical Sobel responses, saturated to 8 bits.

use crate::color::ColorPixel;
use crate::definitions::{Clamp, Image};
use crate::filter::{filter3x3, Kernel};
use image::{GrayImage, Luma};
use itertools::izip;

/// Sobel kernel for detecting vertical gradients.
///
/// Used by the [`vertical_sobel`] function.
#[rustfmt::skip]
pub static VERTICAL_SOBEL: Kernel<'static, i32> = Kernel {
    data: &[-1, -2, -1,
             0,  0,  0,
             1,  2,  1],
    width: 3,
    height: 3,
};

/// Sobel kernel for detecting horizontal gradients.
///
/// Used by the [`horizontal_sobel`] function.
#[rustfmt::skip]
pub static HORIZONTAL_SOBEL: Kernel<'static, i32> = Kernel {
    data: &[-1, 0, 1,
            -2, 0, 2,
            -1, 0, 1],
    width: 3,
    height: 3,
};

/// Convolves an image with the [`HORIZONTAL_SOBEL`] kernel to detect
/// horizontal gradients.
pub fn horizontal_sobel(image: &GrayImage) -> Image<Luma<i16>> {
    filter3x3(image, HORIZONTAL_SOBEL.data)
}

/// Convolves an image with the [`VERTICAL_SOBEL`] kernel to detect
/// vertical gradients.
pub fn vertical_sobel(image: &GrayImage) -> Image<Luma<i16>> {
    filter3x3(image, VERTICAL_SOBEL.data)
}

/// Returns the luminance of every pixel of a colour image.
pub fn luminance_image<P: ColorPixel>(image: &Image<P>) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut out = GrayImage::new(width, height);
    for (p, q) in image.pixels().zip(out.pixels_mut()) {
        *q = Luma([p.luminance()]);
    }
    out
}

/// Returns the magnitude of the Sobel gradient at every pixel of a grayscale
/// image, truncated toward zero and saturated at 255.
///
/// # Examples
/// ```
/// # extern crate image;
/// # #[macro_use]
/// # extern crate plancolor;
/// # fn main() {
/// use plancolor::gradients::sobel_gradient_magnitude;
///
/// // A vertical step edge. Both columns see the step within their 3x3
/// // neighbourhood; the response of 4 * 50 = 200 fits in 8 bits.
/// let image = gray_image!(
///     0, 50;
///     0, 50);
///
/// let expected = gray_image!(
///     200, 200;
///     200, 200);
///
/// assert_pixels_eq!(sobel_gradient_magnitude(&image), expected);
/// # }
/// ```
pub fn sobel_gradient_magnitude(image: &GrayImage) -> GrayImage {
    let horizontal = horizontal_sobel(image);
    let vertical = vertical_sobel(image);

    let (width, height) = image.dimensions();
    let mut out = GrayImage::new(width, height);

    for (h, v, p) in izip!(horizontal.pixels(), vertical.pixels(), out.pixels_mut()) {
        let (h, v) = (h[0] as f32, v[0] as f32);
        *p = Luma([<u8 as Clamp<f32>>::clamp((h * h + v * v).sqrt())]);
    }

    out
}

/// Luminance followed by [`sobel_gradient_magnitude`].
pub fn color_gradient_magnitude<P: ColorPixel>(image: &Image<P>) -> GrayImage {
    sobel_gradient_magnitude(&luminance_image(image))
}
