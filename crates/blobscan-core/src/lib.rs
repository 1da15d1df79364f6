//! blobscan-core - Basic data structures for blob analysis
//!
//! This crate provides the fundamental data structures used by the
//! component labeler:
//!
//! - [`Pix`] / [`PixMut`] - The raster container (immutable / mutable)
//! - [`Box`] - Rectangle regions
//! - [`Moments`] - Raw, central and normalized central image moments
//!
//! Pixel access is bounds-checked and rows are stored contiguously,
//! so row `y - 1` is the previous row whenever `y > 0`.

pub mod box_;
pub mod error;
pub mod pix;

pub use box_::Box;
pub use error::{Error, Result};
pub use pix::moments::Moments;
pub use pix::{Pix, PixMut, PixelDepth};
