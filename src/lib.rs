//! Edge-aware colour filling and annotation of rasterised street plans,
//! built on the [image] crate.
//!
//! The core of the crate is [`fill::edge_aware_fill`], a flood fill that
//! refuses to cross strong luminance edges. Filling a block on a scanned
//! plan therefore stops at the printed outlines even where the paper on
//! both sides has the same colour.
//!
//! Around it sit the pieces a colour-coding tool needs: brush, rectangle and
//! text [annotations](annotation), a per-page editing [session] with bounded
//! [undo history](history), a zoomable [viewport] and PNG page [I/O](io).
//!
//! The crate logs through the [`log`] facade and never installs a logger.
//!
//! [image]: https://github.com/image-rs/image
#![deny(missing_docs)]
#![allow(
    clippy::cast_lossless,
    clippy::too_many_arguments,
    clippy::needless_doctest_main,
    clippy::many_single_char_names
)]

#[macro_use]
mod doc_macros;

#[macro_use]
pub mod utils;
pub mod annotation;
pub mod barrier;
pub mod bitmap;
pub mod color;
pub mod definitions;
pub mod drawing;
pub mod error;
pub mod fill;
pub mod filter;
pub mod gradients;
pub mod history;
pub mod io;
pub mod rect;
pub mod session;
pub mod viewport;

#[cfg(test)]
mod proptest_utils;

pub use crate::error::{Error, Result};
pub use crate::fill::{
    edge_aware_fill, edge_aware_fill_mut, find_fill_region, Connectivity, FillOptions,
    FillOutcome, Rejection,
};
