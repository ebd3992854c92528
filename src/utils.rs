//! Utils for testing and debugging.

use image::{GenericImageView, Pixel};
use std::fmt::Write;

/// Helper for defining greyscale images.
///
/// Columns are separated by commas and rows by semi-colons.
/// By default a subpixel type of `u8` is used but this can be
/// overridden, as shown in the examples.
///
/// # Examples
/// ```
/// # extern crate image;
/// # #[macro_use]
/// # extern crate plancolor;
/// # fn main() {
/// use image::{GrayImage, Luma};
///
/// // An empty grayscale image with pixel type Luma<u8>
/// let empty = gray_image!();
/// assert_eq!(empty, GrayImage::new(0, 0));
///
/// // A single pixel grayscale image with pixel type Luma<i16>
/// let single_pixel = gray_image!(type: i16, -4);
/// assert_eq!(single_pixel.get_pixel(0, 0), &Luma([-4i16]));
///
/// // A 2 x 3 grayscale image with pixel type Luma<u8>
/// let image = gray_image!(
///     1, 2, 3;
///     4, 5, 6);
/// assert_eq!(image.dimensions(), (3, 2));
/// assert_eq!(image.get_pixel(2, 1), &Luma([6u8]));
/// # }
/// ```
#[macro_export]
macro_rules! gray_image {
    // Empty image with default channel type u8
    () => {
        $crate::gray_image!(type: u8)
    };
    // Empty image with the given channel type
    (type: $channel_type:ty) => {
        {
            ::image::ImageBuffer::<::image::Luma<$channel_type>, Vec<$channel_type>>::new(0, 0)
        }
    };
    // Non-empty image of given channel type
    (type: $channel_type:ty, $( $( $x: expr ),*);*) => {
        {
            let nested_array = [ $( [ $($x),* ] ),* ];
            let height = nested_array.len() as u32;
            let width = nested_array[0].len() as u32;

            let flat_array: Vec<$channel_type> = nested_array.iter()
                .flat_map(|row| row.iter())
                .cloned()
                .collect();

            ::image::ImageBuffer::<::image::Luma<$channel_type>, Vec<$channel_type>>::from_raw(width, height, flat_array)
                .unwrap()
        }
    };
    // Non-empty image of default channel type u8
    ($( $( $x: expr ),*);*) => {
        $crate::gray_image!(type: u8, $( $( $x ),*);*)
    }
}

/// Helper for defining RGB images.
///
/// Pixels are delineated by square brackets, columns are
/// separated by commas and rows are separated by semi-colons.
///
/// # Examples
/// ```
/// # extern crate image;
/// # #[macro_use]
/// # extern crate plancolor;
/// # fn main() {
/// use image::Rgb;
///
/// let image = rgb_image!(
///     [1, 2, 3], [4, 5, 6];
///     [7, 8, 9], [10, 11, 12]);
/// assert_eq!(image.dimensions(), (2, 2));
/// assert_eq!(image.get_pixel(1, 1), &Rgb([10u8, 11, 12]));
/// # }
/// ```
#[macro_export]
macro_rules! rgb_image {
    ($( $( [$r: expr, $g: expr, $b: expr]),*);*) => {
        {
            let nested_array = [ $( [ $( [$r, $g, $b] ),* ] ),* ];
            let height = nested_array.len() as u32;
            let width = nested_array[0].len() as u32;

            let flat_array: Vec<u8> = nested_array.iter()
                .flat_map(|row| row.iter().flat_map(|p| p.iter()))
                .cloned()
                .collect();

            ::image::RgbImage::from_raw(width, height, flat_array).unwrap()
        }
    }
}

/// Helper for defining RGBA images. Same layout as [`rgb_image!`] with
/// four values per pixel.
#[macro_export]
macro_rules! rgba_image {
    ($( $( [$r: expr, $g: expr, $b: expr, $a: expr]),*);*) => {
        {
            let nested_array = [ $( [ $( [$r, $g, $b, $a] ),* ] ),* ];
            let height = nested_array.len() as u32;
            let width = nested_array[0].len() as u32;

            let flat_array: Vec<u8> = nested_array.iter()
                .flat_map(|row| row.iter().flat_map(|p| p.iter()))
                .cloned()
                .collect();

            ::image::RgbaImage::from_raw(width, height, flat_array).unwrap()
        }
    }
}

/// Panics if any pixels differ between the two input images.
#[macro_export]
macro_rules! assert_pixels_eq {
    ($actual:expr, $expected:expr) => {{
        let actual_dim = ::image::GenericImageView::dimensions(&$actual);
        let expected_dim = ::image::GenericImageView::dimensions(&$expected);
        if actual_dim != expected_dim {
            panic!(
                "dimensions do not match. actual: {:?}, expected: {:?}",
                actual_dim, expected_dim
            )
        }
        let diffs = $crate::utils::pixel_diffs(&$actual, &$expected);
        if !diffs.is_empty() {
            panic!("{}", $crate::utils::describe_pixel_diffs(&diffs))
        }
    }};
}

/// A pixel position with its value in the actual and the expected image.
pub type Diff<P> = ((u32, u32), P, P);

/// Returns the positions and values of all pixels that differ between two
/// images of equal size.
pub fn pixel_diffs<I, J, P>(actual: &I, expected: &J) -> Vec<Diff<P>>
where
    P: Pixel + PartialEq,
    I: GenericImageView<Pixel = P>,
    J: GenericImageView<Pixel = P>,
{
    actual
        .pixels()
        .zip(expected.pixels())
        .filter(|(p, q)| p.2 != q.2)
        .map(|(p, q)| ((p.0, p.1), p.2, q.2))
        .collect()
}

/// Formats the first few differences found by [`pixel_diffs`].
pub fn describe_pixel_diffs<P: Pixel + std::fmt::Debug>(diffs: &[Diff<P>]) -> String {
    let mut err = format!("{} pixels do not match.", diffs.len());
    for ((x, y), actual, expected) in diffs.iter().take(5) {
        let _ = write!(
            err,
            "\nlocation: ({}, {}), actual: {:?}, expected: {:?}",
            x, y, actual, expected
        );
    }
    err
}

#[cfg(test)]
mod tests {
    use image::{Luma, Rgb, Rgba};

    #[test]
    fn test_gray_image_layout() {
        let image = gray_image!(type: i16,
            1, 2;
            3, -4);
        assert_eq!(image.get_pixel(1, 1), &Luma([-4i16]));
        assert_eq!(image.get_pixel(0, 1), &Luma([3i16]));
    }

    #[test]
    fn test_rgba_image_layout() {
        let image = rgba_image!([1, 2, 3, 4], [5, 6, 7, 8]);
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.get_pixel(1, 0), &Rgba([5u8, 6, 7, 8]));
    }

    #[test]
    fn test_assert_pixels_eq_passes_for_equal_images() {
        let a = rgb_image!([1, 2, 3]);
        let b = rgb_image!([1, 2, 3]);
        assert_pixels_eq!(a, b);
    }

    #[test]
    #[should_panic(expected = "1 pixels do not match")]
    fn test_assert_pixels_eq_reports_diffs() {
        let a = rgb_image!([1, 2, 3], [0, 0, 0]);
        let mut b = a.clone();
        b.put_pixel(1, 0, Rgb([9, 9, 9]));
        assert_pixels_eq!(a, b);
    }
}
