//! blobscan-test - Regression test framework for blobscan
//!
//! This crate provides a small regression harness in the style of a
//! `*_reg` test driver, and fixture builders for binary test images.
//!
//! # Usage
//!
//! ```
//! use blobscan_test::{RegParams, pix_from_pattern};
//!
//! let pix = pix_from_pattern(&[
//!     "##..",
//!     "##.#",
//! ]).unwrap();
//!
//! let mut rp = RegParams::new("doc");
//! rp.compare_values(5.0, pix.count_pixels() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod fixtures;
mod params;

pub use error::{TestError, TestResult};
pub use fixtures::{pix_from_pattern, random_binary_pix};
pub use params::RegParams;
