//! blobscan-region - Connected component labeling and blob statistics
//!
//! This crate provides:
//!
//! - **Component labeling** - Two-pass union-find labeling of 8-bit images
//! - **Blob statistics** - Area, centroid, eccentricity and bounding box per
//!   component, derived from image moments
//! - **Label image helpers** - Sizes, bounds and masks of labeled components
//!
//! # Examples
//!
//! ## Labeling an image
//!
//! ```
//! use blobscan_region::{ComponentLabeler, LabelerOptions};
//! use blobscan_core::{Pix, PixelDepth};
//!
//! let pix = Pix::new(100, 100, PixelDepth::Bit8).unwrap();
//! let mut pix_mut = pix.try_into_mut().unwrap();
//!
//! // Set some pixels to create components
//! pix_mut.set_pixel(10, 10, 255).unwrap();
//! pix_mut.set_pixel(11, 11, 255).unwrap();
//! pix_mut.set_pixel(50, 50, 255).unwrap();
//!
//! let pix: Pix = pix_mut.into();
//!
//! let mut labeler = ComponentLabeler::new(LabelerOptions::new().with_max_components(64));
//! let labeled = labeler.apply(&pix).unwrap();
//! assert_eq!(labeler.component_count(), 2);
//! assert_eq!(labeled.get_pixel(11, 11), Some(1));
//! ```
//!
//! ## Shape statistics
//!
//! ```
//! use blobscan_region::{ComponentLabeler, LabelerOptions};
//! use blobscan_core::Pix;
//!
//! // A horizontal bar: centroid in its middle, maximally elongated
//! let pix = Pix::from_bytes(5, 1, &[1, 1, 1, 1, 1]).unwrap();
//! let mut labeler = ComponentLabeler::new(LabelerOptions::unbounded());
//! labeler.apply(&pix).unwrap();
//!
//! let bar = &labeler.component_properties()[0];
//! assert_eq!(bar.area, 5);
//! assert_eq!(bar.centroid(), (2.0, 0.0));
//! assert!((bar.eccentricity - 1.0).abs() < 1e-9);
//! ```

pub mod conncomp;
pub mod error;
pub mod label;
pub mod stats;
pub mod union_find;

// Re-export core types
pub use blobscan_core;

// Re-export error types
pub use error::{RegionError, RegionResult};

// Re-export conncomp types and functions
pub use conncomp::{ComponentLabeler, ConnectivityType, DEFAULT_MAX_COMPONENTS, LabelerOptions};

// Re-export label functions
pub use label::{
    count_components, extract_component, get_component_bounds_from_labels, get_component_sizes,
    label_connected_components,
};

// Re-export statistics types and functions
pub use stats::{ComponentProperty, blob_centroid, blob_eccentricity, component_properties};

// Re-export union-find types
pub use union_find::{CanonicalLabels, LabelForest, LabelLimit};
