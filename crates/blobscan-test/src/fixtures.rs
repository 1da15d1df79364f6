//! Test image builders
//!
//! Small 8-bit images written as ASCII art, and reproducible random
//! binary images for property-style checks.

use crate::error::{TestError, TestResult};
use blobscan_core::Pix;
use rand::SeedableRng;
use rand::distr::{Bernoulli, Distribution};
use rand::rngs::StdRng;

/// Build an 8-bit image from ASCII art
///
/// Each string is one row. `#` is foreground (255), `.` and `0` are
/// background, and `1`..`9` are foreground pixels with that gray value.
///
/// # Errors
///
/// Returns an error for an empty pattern, rows of different length, or an
/// unknown character.
pub fn pix_from_pattern(rows: &[&str]) -> TestResult<Pix> {
    let width = rows.first().map_or(0, |r| r.chars().count());
    let mut bytes = Vec::with_capacity(width * rows.len());

    for (y, row) in rows.iter().enumerate() {
        let count = row.chars().count();
        if count != width {
            return Err(TestError::RaggedPattern {
                row: y,
                expected: width,
                actual: count,
            });
        }
        for (x, ch) in row.chars().enumerate() {
            let value = match ch {
                '#' => 255,
                '.' => 0,
                '0'..='9' => ch as u8 - b'0',
                _ => return Err(TestError::InvalidPatternChar { ch, x, y }),
            };
            bytes.push(value);
        }
    }

    Ok(Pix::from_bytes(width as u32, rows.len() as u32, &bytes)?)
}

/// Build a reproducible random binary 8-bit image
///
/// Every pixel is independently foreground (255) with probability
/// `density`; the same `seed` always yields the same image.
pub fn random_binary_pix(width: u32, height: u32, density: f64, seed: u64) -> TestResult<Pix> {
    let dist = Bernoulli::new(density)
        .map_err(|e| TestError::InvalidParameter(format!("density {density}: {e}")))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let bytes: Vec<u8> = (0..(width as usize) * (height as usize))
        .map(|_| if dist.sample(&mut rng) { 255 } else { 0 })
        .collect();
    Ok(Pix::from_bytes(width, height, &bytes)?)
}
