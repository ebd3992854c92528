//! Owned 8-bit colour bitmaps in either three- or four-channel layout.

use crate::error::{Error, Result};
use crate::fill::{edge_aware_fill_mut, FillOptions, FillOutcome};
use image::{DynamicImage, Rgb, RgbImage, RgbaImage};

/// A rasterised page as handed over by a host application: row-major 8-bit
/// samples with three (RGB) or four (RGBA) channels per pixel.
///
/// # Examples
/// ```
/// use image::Rgb;
/// use plancolor::bitmap::Bitmap;
/// use plancolor::fill::FillOptions;
///
/// let mut bitmap = Bitmap::from_raw(2, 1, 4, vec![255; 8]).unwrap();
/// let outcome = bitmap.fill(0, 0, Rgb([0, 0, 255]), &FillOptions::default()).unwrap();
///
/// assert_eq!(outcome.pixel_count(), 2);
/// assert_eq!(bitmap.as_raw(), &[0, 0, 255, 255, 0, 0, 255, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Bitmap {
    /// Three channels per pixel.
    Rgb(RgbImage),
    /// Four channels per pixel, alpha last.
    Rgba(RgbaImage),
}

impl Bitmap {
    /// Wraps raw samples, checking that they describe a non-empty image with
    /// three or four channels.
    pub fn from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<Bitmap> {
        if channels != 3 && channels != 4 {
            return Err(Error::UnsupportedChannelCount(channels));
        }
        if width == 0 || height == 0 {
            return Err(Error::EmptyImage);
        }
        let expected = width as usize * height as usize * channels as usize;
        if data.len() != expected {
            return Err(Error::MalformedBuffer {
                expected,
                actual: data.len(),
            });
        }

        // `from_raw` accepts oversized buffers, so the exact length is checked above.
        Ok(if channels == 3 {
            Bitmap::Rgb(RgbImage::from_raw(width, height, data).expect("buffer length checked"))
        } else {
            Bitmap::Rgba(RgbaImage::from_raw(width, height, data).expect("buffer length checked"))
        })
    }

    /// Width and height in pixels.
    pub fn dimensions(&self) -> (u32, u32) {
        match self {
            Bitmap::Rgb(image) => image.dimensions(),
            Bitmap::Rgba(image) => image.dimensions(),
        }
    }

    /// Samples per pixel, 3 or 4.
    pub fn channel_count(&self) -> u8 {
        match self {
            Bitmap::Rgb(_) => 3,
            Bitmap::Rgba(_) => 4,
        }
    }

    /// The raw samples in row-major order.
    pub fn as_raw(&self) -> &[u8] {
        match self {
            Bitmap::Rgb(image) => image.as_raw(),
            Bitmap::Rgba(image) => image.as_raw(),
        }
    }

    /// Consumes the bitmap, returning its raw samples.
    pub fn into_raw(self) -> Vec<u8> {
        match self {
            Bitmap::Rgb(image) => image.into_raw(),
            Bitmap::Rgba(image) => image.into_raw(),
        }
    }

    /// Runs an edge-aware fill in place. See
    /// [`edge_aware_fill`](crate::fill::edge_aware_fill).
    pub fn fill(
        &mut self,
        x: u32,
        y: u32,
        color: Rgb<u8>,
        options: &FillOptions,
    ) -> Result<FillOutcome> {
        match self {
            Bitmap::Rgb(image) => edge_aware_fill_mut(image, x, y, color, options),
            Bitmap::Rgba(image) => edge_aware_fill_mut(image, x, y, color, options),
        }
    }
}

impl From<DynamicImage> for Bitmap {
    fn from(image: DynamicImage) -> Bitmap {
        if image.color().has_alpha() {
            Bitmap::Rgba(image.into_rgba8())
        } else {
            Bitmap::Rgb(image.into_rgb8())
        }
    }
}

impl From<RgbImage> for Bitmap {
    fn from(image: RgbImage) -> Bitmap {
        Bitmap::Rgb(image)
    }
}

impl From<RgbaImage> for Bitmap {
    fn from(image: RgbaImage) -> Bitmap {
        Bitmap::Rgba(image)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayAlphaImage, GrayImage, LumaA, Rgba};

    #[test]
    fn test_from_raw_rejects_channel_count() {
        assert!(matches!(
            Bitmap::from_raw(1, 1, 1, vec![0]),
            Err(Error::UnsupportedChannelCount(1))
        ));
        assert!(matches!(
            Bitmap::from_raw(1, 1, 5, vec![0; 5]),
            Err(Error::UnsupportedChannelCount(5))
        ));
    }

    #[test]
    fn test_from_raw_rejects_empty() {
        assert!(matches!(
            Bitmap::from_raw(0, 4, 3, vec![]),
            Err(Error::EmptyImage)
        ));
    }

    #[test]
    fn test_from_raw_rejects_wrong_length() {
        assert!(matches!(
            Bitmap::from_raw(2, 2, 3, vec![0; 11]),
            Err(Error::MalformedBuffer {
                expected: 12,
                actual: 11
            })
        ));
        assert!(matches!(
            Bitmap::from_raw(2, 2, 4, vec![0; 17]),
            Err(Error::MalformedBuffer {
                expected: 16,
                actual: 17
            })
        ));
    }

    #[test]
    fn test_from_raw_layouts() {
        let rgb = Bitmap::from_raw(2, 1, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(rgb.channel_count(), 3);
        assert_eq!(rgb.dimensions(), (2, 1));
        let Bitmap::Rgb(image) = &rgb else {
            panic!("expected rgb, got {:?}", rgb);
        };
        assert_eq!(image.get_pixel(1, 0), &Rgb([4, 5, 6]));

        let rgba = Bitmap::from_raw(1, 2, 4, vec![1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(rgba.channel_count(), 4);
        assert_eq!(rgba.into_raw(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_from_dynamic_image() {
        let gray = DynamicImage::ImageLuma8(GrayImage::new(3, 2));
        assert_eq!(Bitmap::from(gray).channel_count(), 3);

        let gray_alpha =
            DynamicImage::ImageLumaA8(GrayAlphaImage::from_pixel(3, 2, LumaA([7, 9])));
        let bitmap = Bitmap::from(gray_alpha);
        assert_eq!(bitmap.channel_count(), 4);
        assert_eq!(&bitmap.as_raw()[..4], &[7, 7, 7, 9]);
    }

    #[test]
    fn test_fill_dispatches_by_layout() {
        let mut rgba = Bitmap::from(RgbaImage::from_pixel(3, 3, Rgba([10, 10, 10, 0])));
        let outcome = rgba
            .fill(1, 1, Rgb([1, 2, 3]), &FillOptions::default())
            .unwrap();
        assert_eq!(outcome.pixel_count(), 9);
        assert_eq!(
            rgba,
            Bitmap::Rgba(RgbaImage::from_pixel(3, 3, Rgba([1, 2, 3, 255])))
        );

        let mut rgb = Bitmap::from(RgbImage::new(2, 2));
        assert!(matches!(
            rgb.fill(2, 0, Rgb([1, 2, 3]), &FillOptions::default()),
            Err(Error::SeedOutOfBounds { .. })
        ));
    }
}
