//! Label image helpers
//!
//! Functions that read a 32-bit label image (0 = background, positive
//! values = component labels) and summarize or isolate its components.

use crate::conncomp::{ComponentLabeler, LabelerOptions};
use crate::error::{RegionError, RegionResult};
use crate::stats::ComponentProperty;
use blobscan_core::{Box, Pix, PixelDepth};
use std::collections::BTreeMap;

/// Label connected components in one call
///
/// Runs a throwaway [`ComponentLabeler`] and hands back both the label
/// image and the property records.
///
/// # Arguments
///
/// * `pix` - Input image (8-bit, nonzero = foreground)
/// * `options` - Labeling options
pub fn label_connected_components(
    pix: &Pix,
    options: &LabelerOptions,
) -> RegionResult<(Pix, Vec<ComponentProperty>)> {
    let mut labeler = ComponentLabeler::new(options.clone());
    let labeled = labeler.apply(pix)?;
    Ok((labeled, labeler.into_properties()))
}

/// Count the number of connected components
///
/// # Returns
///
/// The number of foreground connected components.
pub fn count_components(pix: &Pix, options: &LabelerOptions) -> RegionResult<usize> {
    let mut labeler = ComponentLabeler::new(options.clone());
    labeler.apply(pix)?;
    Ok(labeler.component_count())
}

fn require_label_image(labeled: &Pix) -> RegionResult<()> {
    if labeled.depth() != PixelDepth::Bit32 {
        return Err(RegionError::UnsupportedDepth {
            expected: "32-bit (labeled image)",
            actual: labeled.depth().bits(),
        });
    }
    Ok(())
}

/// Tight bounding box of every distinct nonzero label, in ascending label
/// order.
pub(crate) fn label_extents(labeled: &Pix) -> RegionResult<BTreeMap<u32, Box>> {
    require_label_image(labeled)?;

    let mut extents: BTreeMap<u32, Box> = BTreeMap::new();
    for y in 0..labeled.height() {
        for (x, &label) in labeled.row_data(y).iter().enumerate() {
            if label == 0 {
                continue;
            }
            let (x, y) = (x as i32, y as i32);
            extents
                .entry(label)
                .and_modify(|b| b.include_point(x, y))
                .or_insert_with(|| Box::from_extent(x, y, x, y));
        }
    }
    Ok(extents)
}

/// Get bounding boxes from a labeled image
///
/// # Returns
///
/// A vector of bounding boxes sorted by label. For the compact label images
/// produced by [`ComponentLabeler`] the index is `label - 1`.
pub fn get_component_bounds_from_labels(labeled: &Pix) -> RegionResult<Vec<Box>> {
    Ok(label_extents(labeled)?.into_values().collect())
}

/// Get pixel count for each component
///
/// # Returns
///
/// A vector of pixel counts sorted by label. For compact label images the
/// index is `label - 1`.
pub fn get_component_sizes(labeled: &Pix) -> RegionResult<Vec<u32>> {
    require_label_image(labeled)?;

    let mut counts: BTreeMap<u32, u32> = BTreeMap::new();
    for &label in labeled.data().iter().filter(|&&l| l != 0) {
        *counts.entry(label).or_insert(0) += 1;
    }
    Ok(counts.into_values().collect())
}

/// Extract a single component from a labeled image
///
/// # Arguments
///
/// * `labeled` - Labeled image (32-bit)
/// * `label` - Label to isolate
/// * `region` - Optional crop rectangle; `None` keeps the full image size
///
/// # Returns
///
/// A 1-bit mask with 1 where `labeled == label`. When `region` is given the
/// mask covers just that rectangle, so mask pixel `(0, 0)` is image pixel
/// `(region.x, region.y)`.
pub fn extract_component(labeled: &Pix, label: u32, region: Option<&Box>) -> RegionResult<Pix> {
    require_label_image(labeled)?;
    if label == 0 {
        return Err(RegionError::InvalidParameters(
            "label 0 is the background".to_string(),
        ));
    }

    let full = Box::new_unchecked(0, 0, labeled.width() as i32, labeled.height() as i32);
    let region = region.copied().unwrap_or(full);
    if region.is_empty()
        || region.x < 0
        || region.y < 0
        || region.right() > full.right()
        || region.bottom() > full.bottom()
    {
        return Err(RegionError::InvalidParameters(format!(
            "crop region {:?} is not inside the {}x{} image",
            region, full.w, full.h
        )));
    }

    let mut mask = Pix::new(region.w as u32, region.h as u32, PixelDepth::Bit1)?.to_mut();
    for my in 0..region.h as u32 {
        let src = labeled.row_data(region.y as u32 + my);
        let src = &src[region.x as usize..region.right() as usize];
        for (dst, &l) in mask.row_data_mut(my).iter_mut().zip(src) {
            *dst = u32::from(l == label);
        }
    }
    Ok(mask.into())
}
