//! Blob shape statistics
//!
//! Area, centroid and eccentricity of each labeled region, derived from
//! the moments of the region's binary mask.

use crate::error::{RegionError, RegionResult};
use crate::label::{extract_component, label_extents};
use blobscan_core::{Box, Moments, Pix};

/// Shape descriptors of one labeled region
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentProperty {
    /// Component label
    pub label: u32,
    /// Number of pixels
    pub area: u32,
    /// Centroid X coordinate (column)
    pub centroid_x: f64,
    /// Centroid Y coordinate (row)
    pub centroid_y: f64,
    /// Ellipse eccentricity in [0, 1]; 0 for circular or zero-spread blobs
    pub eccentricity: f64,
    /// Tight bounding box
    pub bounds: Box,
}

impl ComponentProperty {
    /// Centroid as an `(x, y)` pair.
    pub fn centroid(&self) -> (f64, f64) {
        (self.centroid_x, self.centroid_y)
    }
}

/// Centroid `(m10 / m00, m01 / m00)`, or `None` for an empty mask.
pub fn blob_centroid(moments: &Moments) -> Option<(f64, f64)> {
    moments.centroid()
}

/// Eccentricity of the ellipse with the same second-order moments as the
/// mask.
///
/// The eigenvalues of the normalized covariance matrix are
/// `A +/- B` with `A = (nu20 + nu02) / 2` and
/// `B = sqrt(4 nu11^2 + (nu20 - nu02)^2) / 2`, and the eccentricity is
/// `sqrt(1 - l2 / l1)`. A mask with no spread (`l1 == 0`, e.g. a single
/// pixel) has eccentricity 0.
pub fn blob_eccentricity(moments: &Moments) -> f64 {
    let a = (moments.nu20 + moments.nu02) / 2.0;
    let diff = moments.nu20 - moments.nu02;
    let b = (4.0 * moments.nu11 * moments.nu11 + diff * diff).sqrt() / 2.0;

    let l1 = a + b;
    let l2 = a - b;
    if l1 <= 0.0 {
        return 0.0;
    }
    (1.0 - l2 / l1).clamp(0.0, 1.0).sqrt()
}

/// Compute the shape descriptors of every component in a label image
///
/// # Arguments
///
/// * `labeled` - Labeled image (32-bit)
///
/// # Returns
///
/// One record per distinct nonzero label, in ascending label order.
pub fn component_properties(labeled: &Pix) -> RegionResult<Vec<ComponentProperty>> {
    let extents = label_extents(labeled)?;

    let mut properties = Vec::with_capacity(extents.len());
    for (label, bounds) in extents {
        let mask = extract_component(labeled, label, Some(&bounds))?;
        let moments = mask.moments();
        let (cx, cy) = blob_centroid(&moments).ok_or_else(|| {
            RegionError::InvalidParameters(format!("label {label} has no pixels"))
        })?;

        properties.push(ComponentProperty {
            label,
            area: mask.count_pixels() as u32,
            centroid_x: cx + bounds.x as f64,
            centroid_y: cy + bounds.y as f64,
            eccentricity: blob_eccentricity(&moments),
            bounds,
        });
    }
    Ok(properties)
}

#[cfg(test)]
mod tests {
    use super::*;
    use blobscan_core::PixelDepth;

    fn create_label_image(width: u32, height: u32, pixels: &[(u32, u32, u32)]) -> Pix {
        let mut pm = Pix::new(width, height, PixelDepth::Bit32).unwrap().to_mut();
        for &(x, y, label) in pixels {
            pm.set_pixel(x, y, label).unwrap();
        }
        pm.into()
    }

    fn moments_of(pixels: &[(u32, u32)]) -> Moments {
        let labeled = create_label_image(
            16,
            16,
            &pixels.iter().map(|&(x, y)| (x, y, 1)).collect::<Vec<_>>(),
        );
        extract_component(&labeled, 1, None).unwrap().moments()
    }

    #[test]
    fn test_eccentricity_single_pixel_is_zero() {
        let m = moments_of(&[(3, 3)]);
        assert_eq!(blob_eccentricity(&m), 0.0);
    }

    #[test]
    fn test_eccentricity_square_is_zero() {
        let mut pixels = Vec::new();
        for y in 2..7 {
            for x in 4..9 {
                pixels.push((x, y));
            }
        }
        let e = blob_eccentricity(&moments_of(&pixels));
        assert!(e.abs() < 1e-6, "square eccentricity {e}");
    }

    #[test]
    fn test_eccentricity_line_is_one() {
        let pixels: Vec<_> = (0..10).map(|x| (x, 5)).collect();
        let e = blob_eccentricity(&moments_of(&pixels));
        assert!((e - 1.0).abs() < 1e-9, "line eccentricity {e}");

        let diagonal: Vec<_> = (0..8).map(|i| (i, i)).collect();
        let e = blob_eccentricity(&moments_of(&diagonal));
        assert!((e - 1.0).abs() < 1e-6, "diagonal eccentricity {e}");
    }

    #[test]
    fn test_eccentricity_rectangle_between_bounds() {
        let mut pixels = Vec::new();
        for y in 0..3 {
            for x in 0..9 {
                pixels.push((x, y));
            }
        }
        let e = blob_eccentricity(&moments_of(&pixels));
        assert!(e > 0.5 && e < 1.0, "rectangle eccentricity {e}");
    }

    #[test]
    fn test_eccentricity_empty_moments() {
        assert_eq!(blob_eccentricity(&Moments::default()), 0.0);
        assert_eq!(blob_centroid(&Moments::default()), None);
    }

    #[test]
    fn test_component_properties() {
        // L-shape (label 1) and a single pixel (label 2)
        let labeled = create_label_image(10, 10, &[(0, 0, 1), (2, 0, 1), (1, 1, 1), (7, 8, 2)]);
        let props = component_properties(&labeled).unwrap();

        assert_eq!(props.len(), 2);
        assert_eq!(props[0].label, 1);
        assert_eq!(props[0].area, 3);
        assert!((props[0].centroid_x - 1.0).abs() < 1e-9);
        assert!((props[0].centroid_y - 1.0 / 3.0).abs() < 1e-9);
        assert_eq!(props[0].bounds, Box::new_unchecked(0, 0, 3, 2));

        assert_eq!(props[1].label, 2);
        assert_eq!(props[1].area, 1);
        assert_eq!(props[1].centroid(), (7.0, 8.0));
        assert_eq!(props[1].eccentricity, 0.0);
    }

    #[test]
    fn test_component_properties_sorted_by_label() {
        let labeled = create_label_image(5, 1, &[(0, 0, 9), (2, 0, 4), (4, 0, 6)]);
        let labels: Vec<u32> = component_properties(&labeled)
            .unwrap()
            .iter()
            .map(|p| p.label)
            .collect();
        assert_eq!(labels, vec![4, 6, 9]);
    }
}
