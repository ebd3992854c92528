//! Correlation of grayscale images with small kernels.

use crate::definitions::{Clamp, Image};
use image::{GrayImage, Luma, Primitive};
use num::Num;

/// A 2D kernel, used to filter images via correlation.
#[derive(Debug, Clone, Copy)]
pub struct Kernel<'a, K> {
    pub(crate) data: &'a [K],
    pub(crate) width: u32,
    pub(crate) height: u32,
}

impl<'a, K: Num + Copy + From<u8> + 'a> Kernel<'a, K> {
    /// Construct a kernel from a slice and its dimensions. The input slice is
    /// in row-major form.
    ///
    /// # Panics
    ///
    /// If `width` or `height` is zero, or `data.len() != width * height`.
    pub fn new(data: &'a [K], width: u32, height: u32) -> Kernel<'a, K> {
        assert!(width > 0 && height > 0, "width and height must be non-zero");
        assert!(
            width as usize * height as usize == data.len(),
            "Invalid kernel len: expecting {}, found {}",
            width * height,
            data.len()
        );
        Kernel {
            data,
            width,
            height,
        }
    }

    /// Width of the kernel.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height of the kernel.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the 2d correlation of an image with this kernel. Intermediate
    /// calculations are performed at type `K`, and each sum is converted to
    /// the output channel type by `f`.
    ///
    /// Locations where the kernel would extend past the image boundary are
    /// handled by treating the image as if its boundary pixels were repeated
    /// indefinitely.
    pub fn filter<T, F>(&self, image: &GrayImage, mut f: F) -> Image<Luma<T>>
    where
        T: Primitive + 'static,
        F: FnMut(K) -> T,
    {
        let (width, height) = image.dimensions();
        let mut out = Image::<Luma<T>>::new(width, height);
        if width == 0 || height == 0 {
            return out;
        }

        let (k_width, k_height) = (self.width as i64, self.height as i64);
        let (w, h) = (width as i64, height as i64);

        for y in 0..h {
            for x in 0..w {
                let mut acc = K::zero();
                for k_y in 0..k_height {
                    let y_p = (y + k_y - k_height / 2).clamp(0, h - 1) as u32;
                    for k_x in 0..k_width {
                        let x_p = (x + k_x - k_width / 2).clamp(0, w - 1) as u32;
                        let weight = self.data[(k_y * k_width + k_x) as usize];
                        acc = acc + weight * K::from(image.get_pixel(x_p, y_p)[0]);
                    }
                }
                out.put_pixel(x as u32, y as u32, Luma([f(acc)]));
            }
        }

        out
    }
}

/// Returns the 2d correlation of an 8bpp grayscale image with a 3x3 row-major
/// kernel, clamping each result to the `i16` range.
///
/// Boundary pixels are repeated past the image edge.
///
/// # Panics
///
/// If `kernel` does not have exactly nine entries.
pub fn filter3x3(image: &GrayImage, kernel: &[i32]) -> Image<Luma<i16>> {
    Kernel::new(kernel, 3, 3).filter(image, <i16 as Clamp<i32>>::clamp)
}
