//! Measurement functions for masks
//!
//! Pixel counting used by the region statistics.

use super::Pix;

impl Pix {
    /// Count the nonzero pixels of the image.
    ///
    /// Works at any depth; for a 1-bit mask this is the foreground area.
    pub fn count_pixels(&self) -> u64 {
        self.data().iter().filter(|&&v| v != 0).count() as u64
    }
}
