//! blobscan - Connected component labeling for Rust
//!
//! Labels the connected foreground regions ("blobs") of a single-channel
//! 8-bit image and reports per-region shape descriptors.
//!
//! # Overview
//!
//! - Two-pass union-find labeling with 8-way (or 4-way) connectivity
//! - Compact labels `1..=n`, numbered in raster order of first encounter
//! - Area, centroid, eccentricity and bounding box per region
//!
//! Image decoding is left to the caller: hand the grayscale bytes to
//! [`Pix::from_bytes`].
//!
//! # Example
//!
//! ```
//! use blobscan::Pix;
//! use blobscan::region::ComponentLabeler;
//!
//! let pix = Pix::from_bytes(3, 3, &[
//!     255, 0, 0,
//!     0, 255, 0,
//!     0, 0, 255,
//! ]).unwrap();
//!
//! let mut labeler = ComponentLabeler::with_max_components(8);
//! labeler.apply(&pix).unwrap();
//! assert_eq!(labeler.component_count(), 1);
//! ```

// Re-export core types (primary data structures used everywhere)
pub use blobscan_core::*;

// Re-export the labeling crate as a module to avoid name conflicts
pub use blobscan_region as region;
