//! Edge-aware region fill.
//!
//! A fill grows a region outward from a seed pixel, admitting neighbours whose
//! colour is within a tolerance of the seed's original colour, and stops at
//! barrier pixels where the luminance gradient is strong. On scanned street
//! plans this keeps a fill inside the drawn outlines even when the paper
//! colour on both sides of an outline is identical.

use crate::barrier::BarrierMask;
use crate::color::{channel_distance, tolerance_to_channel_delta, ColorPixel};
use crate::definitions::Image;
use crate::error::{Error, Result};
use crate::gradients::color_gradient_magnitude;
use crate::rect::Rect;
use image::{GrayImage, Luma, Rgb};
use log::debug;

/// Default colour tolerance, as a percentage.
pub const DEFAULT_TOLERANCE: u8 = 30;

/// Default gradient magnitude above which a pixel blocks a fill.
pub const DEFAULT_BARRIER_THRESHOLD: u8 = 50;

/// Default gradient magnitude above which a seed is treated as lying on a
/// drawn line.
pub const DEFAULT_SEED_REJECTION_THRESHOLD: u8 = 200;

/// Which neighbours of a pixel a fill may spread to.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Connectivity {
    /// The four horizontally and vertically adjacent pixels.
    #[default]
    Four,
    /// The four adjacent pixels plus the four diagonal ones.
    Eight,
}

impl Connectivity {
    fn offsets(self) -> &'static [(i64, i64)] {
        match self {
            Connectivity::Four => &[(1, 0), (-1, 0), (0, 1), (0, -1)],
            Connectivity::Eight => &[
                (1, 0),
                (-1, 0),
                (0, 1),
                (0, -1),
                (1, 1),
                (1, -1),
                (-1, 1),
                (-1, -1),
            ],
        }
    }
}

/// Parameters of an edge-aware fill.
///
/// # Examples
/// ```
/// use plancolor::fill::{Connectivity, FillOptions};
///
/// let options = FillOptions::default()
///     .with_tolerance(0)
///     .with_connectivity(Connectivity::Eight);
///
/// assert_eq!(options.tolerance, 0);
/// assert_eq!(options.barrier_threshold, 50);
/// assert!(options.validate().is_ok());
/// assert!(options.with_tolerance(101).validate().is_err());
/// ```
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FillOptions {
    /// Maximum colour distance from the seed, as a percentage in `0..=100`.
    ///
    /// This is not a raw channel difference: 30 allows each channel to differ
    /// by up to 77, not 30. Settings stored as raw deltas `d` convert to
    /// roughly `d * 100 / 255`. See
    /// [`tolerance_to_channel_delta`](crate::color::tolerance_to_channel_delta).
    pub tolerance: u8,
    /// Pixels with a gradient magnitude strictly greater than this are barriers.
    pub barrier_threshold: u8,
    /// Seeds with a gradient magnitude strictly greater than this are rejected
    /// as lying on a strong edge.
    pub seed_rejection_threshold: u8,
    /// Neighbourhood used to grow the region.
    pub connectivity: Connectivity,
}

impl Default for FillOptions {
    fn default() -> Self {
        FillOptions {
            tolerance: DEFAULT_TOLERANCE,
            barrier_threshold: DEFAULT_BARRIER_THRESHOLD,
            seed_rejection_threshold: DEFAULT_SEED_REJECTION_THRESHOLD,
            connectivity: Connectivity::Four,
        }
    }
}

impl FillOptions {
    /// Sets the colour tolerance percentage.
    pub fn with_tolerance(mut self, tolerance: u8) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the barrier threshold.
    pub fn with_barrier_threshold(mut self, threshold: u8) -> Self {
        self.barrier_threshold = threshold;
        self
    }

    /// Sets the seed rejection threshold.
    pub fn with_seed_rejection_threshold(mut self, threshold: u8) -> Self {
        self.seed_rejection_threshold = threshold;
        self
    }

    /// Sets the connectivity.
    pub fn with_connectivity(mut self, connectivity: Connectivity) -> Self {
        self.connectivity = connectivity;
        self
    }

    /// Checks that the tolerance is a valid percentage.
    pub fn validate(&self) -> Result<()> {
        if self.tolerance > 100 {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

/// Why a fill did nothing.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// The seed's gradient magnitude exceeds the seed rejection threshold,
    /// i.e. the seed lies on a drawn line.
    StrongEdge {
        /// Gradient magnitude at the seed.
        magnitude: u8,
    },
    /// The seed is itself a barrier pixel, so the region would be empty.
    Barrier {
        /// Gradient magnitude at the seed.
        magnitude: u8,
    },
}

impl Rejection {
    /// Gradient magnitude at the rejected seed.
    pub fn magnitude(&self) -> u8 {
        match *self {
            Rejection::StrongEdge { magnitude } | Rejection::Barrier { magnitude } => magnitude,
        }
    }
}

/// The set of pixels a fill recolours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Region {
    width: u32,
    height: u32,
    members: Vec<bool>,
    pixel_count: usize,
    bounds: Rect,
}

impl Region {
    /// Whether `(x, y)` belongs to the region. Points outside the image do not.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height && self.members[self.index(x, y)]
    }

    /// Number of pixels in the region. Never zero.
    pub fn pixel_count(&self) -> usize {
        self.pixel_count
    }

    /// Smallest rectangle containing every pixel of the region.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Dimensions of the image the region was grown in.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Coordinates of the region's pixels in row-major order.
    pub fn points(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        let width = self.width as usize;
        self.members
            .iter()
            .enumerate()
            .filter(|(_, m)| **m)
            .map(move |(i, _)| ((i % width) as u32, (i / width) as u32))
    }

    /// Renders the region as a mask with members white and everything else black.
    pub fn to_mask_image(&self) -> GrayImage {
        GrayImage::from_fn(self.width, self.height, |x, y| {
            if self.members[self.index(x, y)] {
                Luma([u8::MAX])
            } else {
                Luma([0])
            }
        })
    }

    /// Sets every pixel of the region to `pixel`.
    ///
    /// # Panics
    ///
    /// If `image` does not have the dimensions the region was grown in.
    pub fn paint<P: ColorPixel>(&self, image: &mut Image<P>, pixel: P) {
        assert_eq!(
            image.dimensions(),
            self.dimensions(),
            "region and image dimensions differ"
        );
        for (p, member) in image.pixels_mut().zip(&self.members) {
            if *member {
                *p = pixel;
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }
}

/// Result of growing a region from a seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Growth {
    /// The seed was accepted and the region contains at least the seed.
    Region(Region),
    /// The seed lies on an edge and nothing would be filled.
    Rejected(Rejection),
}

/// Summary of a completed fill.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FillOutcome {
    /// The region was recoloured.
    Filled {
        /// Number of recoloured pixels.
        pixel_count: usize,
        /// Bounding box of the recoloured pixels.
        bounds: Rect,
    },
    /// The bitmap was left unchanged.
    Rejected(Rejection),
}

impl FillOutcome {
    /// Whether any pixel was recoloured.
    pub fn is_filled(&self) -> bool {
        matches!(self, FillOutcome::Filled { .. })
    }

    /// Number of recoloured pixels, zero for a rejected fill.
    pub fn pixel_count(&self) -> usize {
        match *self {
            FillOutcome::Filled { pixel_count, .. } => pixel_count,
            FillOutcome::Rejected(_) => 0,
        }
    }
}

/// Computes the region an edge-aware fill from `(x, y)` would recolour,
/// without modifying the image.
///
/// The barrier mask is derived from the current contents of `image`.
///
/// # Errors
///
/// [`Error::EmptyImage`] for an image without pixels, [`Error::SeedOutOfBounds`]
/// if the seed lies outside it and [`Error::InvalidTolerance`] if
/// `options.tolerance > 100`.
pub fn find_fill_region<P: ColorPixel>(
    image: &Image<P>,
    x: u32,
    y: u32,
    options: &FillOptions,
) -> Result<Growth> {
    check_preconditions(image, x, y, options)?;
    let gradient = color_gradient_magnitude(image);
    Ok(grow_region(image, &gradient, x, y, options))
}

/// Fills the region connected to `(x, y)` with `color`, stopping at strong
/// edges, and returns the result together with a summary.
///
/// Pixels outside the region are copied unchanged. On RGBA images the region
/// becomes fully opaque.
///
/// # Examples
/// ```
/// # extern crate image;
/// # #[macro_use]
/// # extern crate plancolor;
/// # fn main() {
/// use image::Rgb;
/// use plancolor::fill::{edge_aware_fill, FillOptions};
///
/// // A white sheet split by a black vertical line.
/// let image = rgb_image!(
///     [255, 255, 255], [255, 255, 255], [0, 0, 0], [255, 255, 255], [255, 255, 255];
///     [255, 255, 255], [255, 255, 255], [0, 0, 0], [255, 255, 255], [255, 255, 255]);
///
/// let options = FillOptions::default().with_tolerance(0);
/// let (filled, outcome) = edge_aware_fill(&image, 0, 0, Rgb([255, 0, 0]), &options).unwrap();
///
/// // Only the column furthest from the line is clear of the edge response.
/// assert_eq!(outcome.pixel_count(), 2);
/// assert_eq!(filled.get_pixel(0, 1), &Rgb([255, 0, 0]));
/// assert_eq!(filled.get_pixel(4, 1), &Rgb([255, 255, 255]));
/// # }
/// ```
pub fn edge_aware_fill<P: ColorPixel>(
    image: &Image<P>,
    x: u32,
    y: u32,
    color: Rgb<u8>,
    options: &FillOptions,
) -> Result<(Image<P>, FillOutcome)> {
    let mut out = image.clone();
    let outcome = edge_aware_fill_mut(&mut out, x, y, color, options)?;
    Ok((out, outcome))
}

#[doc=generate_mut_doc_comment!("edge_aware_fill")]
///
/// The image is only modified once the whole region is known, so an error
/// or a rejected seed leaves it untouched.
pub fn edge_aware_fill_mut<P: ColorPixel>(
    image: &mut Image<P>,
    x: u32,
    y: u32,
    color: Rgb<u8>,
    options: &FillOptions,
) -> Result<FillOutcome> {
    let outcome = match find_fill_region(image, x, y, options)? {
        Growth::Region(region) => {
            region.paint(image, P::opaque(color));
            FillOutcome::Filled {
                pixel_count: region.pixel_count(),
                bounds: region.bounds(),
            }
        }
        Growth::Rejected(rejection) => FillOutcome::Rejected(rejection),
    };
    debug!("fill at ({}, {}): {:?}", x, y, outcome);
    Ok(outcome)
}

fn check_preconditions<P: ColorPixel>(
    image: &Image<P>,
    x: u32,
    y: u32,
    options: &FillOptions,
) -> Result<()> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(Error::EmptyImage);
    }
    if x >= width || y >= height {
        return Err(Error::SeedOutOfBounds {
            x,
            y,
            width,
            height,
        });
    }
    options.validate()
}

fn grow_region<P: ColorPixel>(
    image: &Image<P>,
    gradient: &GrayImage,
    x: u32,
    y: u32,
    options: &FillOptions,
) -> Growth {
    if log::log_enabled!(log::Level::Debug) {
        let (min, max) = gradient
            .pixels()
            .fold((u8::MAX, 0), |(lo, hi), p| (lo.min(p[0]), hi.max(p[0])));
        debug!("gradient magnitude range {}..={}", min, max);
    }

    let magnitude = gradient.get_pixel(x, y)[0];
    if magnitude > options.seed_rejection_threshold {
        debug!(
            "seed ({}, {}) on a strong edge: magnitude {} > {}",
            x, y, magnitude, options.seed_rejection_threshold
        );
        return Growth::Rejected(Rejection::StrongEdge { magnitude });
    }
    if magnitude > options.barrier_threshold {
        debug!(
            "seed ({}, {}) is a barrier: magnitude {} > {}",
            x, y, magnitude, options.barrier_threshold
        );
        return Growth::Rejected(Rejection::Barrier { magnitude });
    }

    let barriers = BarrierMask::from_gradient(gradient, options.barrier_threshold);
    debug!(
        "{} barrier pixels at threshold {}",
        barriers.count(),
        options.barrier_threshold
    );

    let (width, height) = image.dimensions();
    let seed_color = image.get_pixel(x, y).rgb();
    let delta = tolerance_to_channel_delta(options.tolerance);
    let index = |x: u32, y: u32| y as usize * width as usize + x as usize;

    let mut members = vec![false; width as usize * height as usize];
    let mut pixel_count = 0;
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (x, y, x, y);

    let mut stack = vec![(x, y)];
    members[index(x, y)] = true;

    while let Some((px, py)) = stack.pop() {
        pixel_count += 1;
        min_x = min_x.min(px);
        max_x = max_x.max(px);
        min_y = min_y.min(py);
        max_y = max_y.max(py);

        for &(dx, dy) in options.connectivity.offsets() {
            let (nx, ny) = (px as i64 + dx, py as i64 + dy);
            if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                continue;
            }
            let (nx, ny) = (nx as u32, ny as u32);
            let i = index(nx, ny);
            if members[i] || barriers.is_barrier(nx, ny) {
                continue;
            }
            if channel_distance(image.get_pixel(nx, ny).rgb(), seed_color) > delta {
                continue;
            }
            members[i] = true;
            stack.push((nx, ny));
        }
    }

    let bounds = Rect::from_corners(
        (min_x as i32, min_y as i32),
        (max_x as i32, max_y as i32),
    );

    Growth::Region(Region {
        width,
        height,
        members,
        pixel_count,
        bounds,
    })
}
