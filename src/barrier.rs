//! Barrier masks: the pixels a region fill may never enter.

use crate::color::ColorPixel;
use crate::definitions::Image;
use crate::gradients::color_gradient_magnitude;
use image::{GrayImage, Luma};

/// Per-pixel flags marking where the gradient magnitude is strictly greater
/// than a threshold.
///
/// Masks are cheap to rebuild and are derived from the current contents of
/// an image, so they are never cached between fills.
///
/// # Examples
/// ```
/// # extern crate image;
/// # #[macro_use]
/// # extern crate plancolor;
/// # fn main() {
/// use plancolor::barrier::BarrierMask;
///
/// let gradient = gray_image!(
///     0, 50, 51;
///     0, 255, 10);
///
/// let mask = BarrierMask::from_gradient(&gradient, 50);
/// assert!(!mask.is_barrier(1, 0));
/// assert!(mask.is_barrier(2, 0));
/// assert!(mask.is_barrier(1, 1));
/// assert_eq!(mask.count(), 2);
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarrierMask {
    width: u32,
    height: u32,
    barriers: Vec<bool>,
}

impl BarrierMask {
    /// Marks every pixel of `gradient` whose value exceeds `threshold`.
    pub fn from_gradient(gradient: &GrayImage, threshold: u8) -> BarrierMask {
        let (width, height) = gradient.dimensions();
        let barriers = gradient.pixels().map(|p| p[0] > threshold).collect();
        BarrierMask {
            width,
            height,
            barriers,
        }
    }

    /// Width and height of the mask.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether `(x, y)` is a barrier. Points outside the mask are not.
    pub fn is_barrier(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.barriers[self.index(x, y)]
    }

    /// Number of barrier pixels.
    pub fn count(&self) -> usize {
        self.barriers.iter().filter(|b| **b).count()
    }

    /// Renders the mask as an image with barriers white and everything else black.
    pub fn to_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            if self.barriers[self.index(x, y)] {
                Luma([u8::MAX])
            } else {
                Luma([0])
            }
        })
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Computes the barrier mask of a colour image: luminance, Sobel gradient
/// magnitude, then [`BarrierMask::from_gradient`].
pub fn barrier_mask<P: ColorPixel>(image: &Image<P>, threshold: u8) -> BarrierMask {
    BarrierMask::from_gradient(&color_gradient_magnitude(image), threshold)
}
