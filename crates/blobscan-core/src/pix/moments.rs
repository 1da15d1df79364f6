//! Image moments of binary masks
//!
//! Raw moments up to second order, the second-order central moments and
//! their scale-normalized versions. Every nonzero pixel contributes with
//! weight 1 at its integer coordinates (x = column, y = row), so the image
//! is treated as a binary mask whatever its depth.

use super::Pix;

/// Image moments of a binary mask
///
/// Central moments are taken about the centroid `(m10 / m00, m01 / m00)`.
/// Normalized central moments follow `nu_pq = mu_pq / m00^(1 + (p + q) / 2)`,
/// which for the second order is `mu_pq / m00^2`.
///
/// All fields are zero for an empty mask.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Moments {
    /// Zeroth moment (pixel count)
    pub m00: f64,
    /// First moment in x
    pub m10: f64,
    /// First moment in y
    pub m01: f64,
    /// Second moment in x (x^2)
    pub m20: f64,
    /// Second moment cross term (xy)
    pub m11: f64,
    /// Second moment in y (y^2)
    pub m02: f64,
    /// Central moment mu20
    pub mu20: f64,
    /// Central moment mu11
    pub mu11: f64,
    /// Central moment mu02
    pub mu02: f64,
    /// Normalized central moment nu20
    pub nu20: f64,
    /// Normalized central moment nu11
    pub nu11: f64,
    /// Normalized central moment nu02
    pub nu02: f64,
}

impl Moments {
    /// Centroid `(x, y)` of the mask, `None` when the mask is empty.
    pub fn centroid(&self) -> Option<(f64, f64)> {
        if self.m00 <= 0.0 {
            return None;
        }
        Some((self.m10 / self.m00, self.m01 / self.m00))
    }
}

impl Pix {
    /// Compute the moments of the nonzero pixels of this image.
    ///
    /// Central moments are accumulated in a second pass over the
    /// centered coordinates rather than derived from the raw moments,
    /// which keeps them accurate far from the origin.
    pub fn moments(&self) -> Moments {
        let mut m = Moments::default();

        for y in 0..self.height() {
            let fy = y as f64;
            for (x, &v) in self.row_data(y).iter().enumerate() {
                if v == 0 {
                    continue;
                }
                let fx = x as f64;
                m.m00 += 1.0;
                m.m10 += fx;
                m.m01 += fy;
                m.m20 += fx * fx;
                m.m11 += fx * fy;
                m.m02 += fy * fy;
            }
        }

        let Some((cx, cy)) = m.centroid() else {
            return m;
        };

        for y in 0..self.height() {
            let dy = y as f64 - cy;
            for (x, &v) in self.row_data(y).iter().enumerate() {
                if v == 0 {
                    continue;
                }
                let dx = x as f64 - cx;
                m.mu20 += dx * dx;
                m.mu11 += dx * dy;
                m.mu02 += dy * dy;
            }
        }

        let norm = m.m00 * m.m00;
        m.nu20 = m.mu20 / norm;
        m.nu11 = m.mu11 / norm;
        m.nu02 = m.mu02 / norm;
        m
    }
}
