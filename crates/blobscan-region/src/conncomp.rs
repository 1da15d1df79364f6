//! Connected component labeling
//!
//! Two-pass labeling with a union-find table:
//!
//! 1. A forward raster scan gives every foreground pixel a provisional
//!    label, taken from its already-visited (causal) neighbors when it has
//!    any, and records which provisional labels touch.
//! 2. A second raster scan replaces every provisional label with the
//!    compact canonical label of its equivalence class.
//! 3. Each canonical label's mask is reduced to area, centroid and
//!    eccentricity.
//!
//! Canonical labels run from 1 to the component count, numbered in the
//! order the second scan first meets each component.

use crate::error::{RegionError, RegionResult};
use crate::stats::{ComponentProperty, component_properties};
use crate::union_find::{CanonicalLabels, LabelForest, LabelLimit};
use blobscan_core::{Pix, PixMut, PixelDepth};
use log::{debug, warn};

/// Default cap on provisional labels used by [`LabelerOptions::default`].
pub const DEFAULT_MAX_COMPONENTS: u32 = 1 << 16;

/// Connectivity type for component analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

/// Options for connected component labeling
#[derive(Debug, Clone)]
pub struct LabelerOptions {
    /// Cap on provisional labels allocated by the first pass
    pub limit: LabelLimit,
    /// Connectivity type for finding neighbors
    pub connectivity: ConnectivityType,
}

impl Default for LabelerOptions {
    fn default() -> Self {
        Self {
            limit: LabelLimit::Bounded(DEFAULT_MAX_COMPONENTS),
            connectivity: ConnectivityType::EightWay,
        }
    }
}

impl LabelerOptions {
    /// Create new options with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create options that never fail on label count
    pub fn unbounded() -> Self {
        Self::default().with_limit(LabelLimit::Unbounded)
    }

    /// Set the provisional label limit
    pub fn with_limit(mut self, limit: LabelLimit) -> Self {
        self.limit = limit;
        self
    }

    /// Cap the number of provisional labels at `max_components`
    pub fn with_max_components(self, max_components: u32) -> Self {
        self.with_limit(LabelLimit::Bounded(max_components))
    }

    /// Set connectivity type
    pub fn with_connectivity(mut self, connectivity: ConnectivityType) -> Self {
        self.connectivity = connectivity;
        self
    }
}

/// Connected component labeler
///
/// Keeps the property records of the most recent successful
/// [`apply`](ComponentLabeler::apply) call.
///
/// # Examples
///
/// ```
/// use blobscan_core::Pix;
/// use blobscan_region::ComponentLabeler;
///
/// #[rustfmt::skip]
/// let bytes = [
///     255, 255, 0, 0,
///     255, 255, 0, 0,
///       0,   0, 0, 9,
/// ];
/// let pix = Pix::from_bytes(4, 3, &bytes).unwrap();
///
/// let mut labeler = ComponentLabeler::with_max_components(16);
/// let labeled = labeler.apply(&pix).unwrap();
///
/// assert_eq!(labeler.component_count(), 2);
/// assert_eq!(labeled.get_pixel(1, 1), Some(1));
/// assert_eq!(labeled.get_pixel(3, 2), Some(2));
/// assert_eq!(labeler.component_properties()[0].area, 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ComponentLabeler {
    options: LabelerOptions,
    properties: Vec<ComponentProperty>,
}

impl ComponentLabeler {
    /// Create a labeler with the given options
    pub fn new(options: LabelerOptions) -> Self {
        Self {
            options,
            properties: Vec::new(),
        }
    }

    /// Create an 8-connected labeler allowing at most `max_components`
    /// provisional labels
    pub fn with_max_components(max_components: u32) -> Self {
        Self::new(LabelerOptions::new().with_max_components(max_components))
    }

    /// Get the labeling options
    pub fn options(&self) -> &LabelerOptions {
        &self.options
    }

    /// Label the connected foreground regions of an 8-bit image
    ///
    /// # Arguments
    ///
    /// * `pix` - Input image (8-bit, 0 = background, nonzero = foreground)
    ///
    /// # Returns
    ///
    /// A 32-bit label image of the same size. On success the labeler's
    /// property records are replaced by those of this image.
    ///
    /// # Errors
    ///
    /// - [`RegionError::UnsupportedDepth`] if `pix` is not 8-bit
    /// - [`RegionError::LabelOverflow`] if the first pass needs more
    ///   provisional labels than the configured limit
    ///
    /// On error the previous property records are kept.
    pub fn apply(&mut self, pix: &Pix) -> RegionResult<Pix> {
        if pix.depth() != PixelDepth::Bit8 {
            return Err(RegionError::UnsupportedDepth {
                expected: "8-bit",
                actual: pix.depth().bits(),
            });
        }

        let (provisional, forest) = label_first_pass(pix, &self.options).inspect_err(|e| {
            warn!(
                "labeling {}x{} image aborted: {}",
                pix.width(),
                pix.height(),
                e
            )
        })?;
        let (labeled, count) = resolve_labels(provisional, &forest);
        let properties = component_properties(&labeled)?;

        debug!(
            "labeled {}x{} image: {} provisional labels, {} unions, {} components",
            pix.width(),
            pix.height(),
            forest.len(),
            forest.union_count(),
            count
        );
        debug_assert_eq!(properties.len(), count as usize);

        self.properties = properties;
        Ok(labeled)
    }

    /// Number of components found by the most recent successful `apply`
    pub fn component_count(&self) -> usize {
        self.properties.len()
    }

    /// Property records of the most recent successful `apply`, in
    /// ascending label order
    pub fn component_properties(&self) -> &[ComponentProperty] {
        &self.properties
    }

    /// Consume the labeler and take its property records
    pub fn into_properties(self) -> Vec<ComponentProperty> {
        self.properties
    }
}

/// Collect the distinct nonzero labels of the causal neighbors of `(x, y)`
/// into `out`, sorted ascending.
///
/// Only neighbors already visited by a forward raster scan are causal:
/// above-left, above and above-right from row `y - 1`, and left from row
/// `y` (above and left only for 4-way connectivity).
fn causal_neighbors(
    labels: &PixMut,
    x: u32,
    y: u32,
    connectivity: ConnectivityType,
    out: &mut Vec<u32>,
) {
    out.clear();

    if y > 0 {
        let prev = labels.row_data(y - 1);
        let x = x as usize;
        out.push(prev[x]);
        if connectivity == ConnectivityType::EightWay {
            if x > 0 {
                out.push(prev[x - 1]);
            }
            if x + 1 < prev.len() {
                out.push(prev[x + 1]);
            }
        }
    }
    if x > 0 {
        out.push(labels.get_pixel_unchecked(x - 1, y));
    }

    out.retain(|&l| l != 0);
    out.sort_unstable();
    out.dedup();
}

/// First pass: assign provisional labels and record their equivalences.
fn label_first_pass(pix: &Pix, options: &LabelerOptions) -> RegionResult<(PixMut, LabelForest)> {
    let mut labels = pix.create_template(PixelDepth::Bit32);
    let mut forest = LabelForest::new(options.limit);
    let mut neighbors = Vec::with_capacity(4);

    for y in 0..pix.height() {
        for x in 0..pix.width() {
            if pix.get_pixel_unchecked(x, y) == 0 {
                continue;
            }

            causal_neighbors(&labels, x, y, options.connectivity, &mut neighbors);
            let label = match neighbors.split_first() {
                None => forest.make_label()?,
                Some((&min, rest)) => {
                    for &other in rest {
                        forest.union(min, other);
                    }
                    min
                }
            };
            labels.set_pixel_unchecked(x, y, label);
        }
    }

    Ok((labels, forest))
}

/// Second pass: rewrite provisional labels as canonical labels.
///
/// Returns the label image and the number of components.
fn resolve_labels(mut labels: PixMut, forest: &LabelForest) -> (Pix, u32) {
    let mut canonical = CanonicalLabels::new(forest);

    for y in 0..labels.height() {
        for label in labels.row_data_mut(y).iter_mut().filter(|l| **l != 0) {
            *label = canonical.resolve(forest, *label);
        }
    }

    (labels.into(), canonical.count())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(width: u32, height: u32, pixels: &[(u32, u32)]) -> Pix {
        let mut pm = Pix::new(width, height, PixelDepth::Bit8).unwrap().to_mut();
        for &(x, y) in pixels {
            pm.set_pixel(x, y, 1).unwrap();
        }
        pm.into()
    }

    fn labels_of(pix: &Pix) -> Vec<u32> {
        pix.data().to_vec()
    }

    #[test]
    fn test_options_builder() {
        let opts = LabelerOptions::new()
            .with_max_components(10)
            .with_connectivity(ConnectivityType::FourWay);
        assert_eq!(opts.limit, LabelLimit::Bounded(10));
        assert_eq!(opts.connectivity, ConnectivityType::FourWay);

        let opts = LabelerOptions::unbounded();
        assert_eq!(opts.limit, LabelLimit::Unbounded);
        assert_eq!(opts.connectivity, ConnectivityType::EightWay);
    }

    #[test]
    fn test_causal_neighbors_eight_way() {
        let mut labels = Pix::new(3, 2, PixelDepth::Bit32).unwrap().to_mut();
        labels.row_data_mut(0).copy_from_slice(&[5, 3, 5]);
        labels.set_pixel(0, 1, 7).unwrap();

        let mut out = Vec::new();
        causal_neighbors(&labels, 1, 1, ConnectivityType::EightWay, &mut out);
        assert_eq!(out, vec![3, 5, 7]);

        causal_neighbors(&labels, 1, 1, ConnectivityType::FourWay, &mut out);
        assert_eq!(out, vec![3, 7]);

        // Row 0 has no previous row; the right neighbor is never causal.
        causal_neighbors(&labels, 0, 0, ConnectivityType::EightWay, &mut out);
        assert!(out.is_empty());
        causal_neighbors(&labels, 2, 1, ConnectivityType::EightWay, &mut out);
        assert_eq!(out, vec![3, 5]);
    }

    #[test]
    fn test_first_pass_provisional_labels() {
        // Two diagonal strokes that only meet in the last row:
        // 1 . 2
        // . 1 .  <- (1,1) sees 1 and 2 above, unites them
        let pix = create_test_image(3, 2, &[(0, 0), (2, 0), (1, 1)]);
        let (labels, forest) = label_first_pass(&pix, &LabelerOptions::default()).unwrap();
        assert_eq!(labels.row_data(0), &[1, 0, 2]);
        assert_eq!(labels.row_data(1), &[0, 1, 0]);
        assert_eq!(forest.len(), 2);
        assert_eq!(forest.find(2), 1);
    }

    #[test]
    fn test_apply_rejects_wrong_depth() {
        let pix = Pix::new(4, 4, PixelDepth::Bit1).unwrap();
        let mut labeler = ComponentLabeler::default();
        let err = labeler.apply(&pix).unwrap_err();
        assert!(matches!(
            err,
            RegionError::UnsupportedDepth {
                expected: "8-bit",
                actual: 1
            }
        ));

        let pix = Pix::new(4, 4, PixelDepth::Bit32).unwrap();
        assert!(labeler.apply(&pix).is_err());
    }

    #[test]
    fn test_apply_empty_image() {
        let pix = create_test_image(10, 10, &[]);
        let mut labeler = ComponentLabeler::default();
        let labeled = labeler.apply(&pix).unwrap();
        assert_eq!(labeler.component_count(), 0);
        assert!(labeler.component_properties().is_empty());
        assert!(labels_of(&labeled).iter().all(|&l| l == 0));
    }

    #[test]
    fn test_apply_full_image() {
        let pixels: Vec<_> = (0..4).flat_map(|y| (0..5).map(move |x| (x, y))).collect();
        let pix = create_test_image(5, 4, &pixels);
        let mut labeler = ComponentLabeler::default();
        let labeled = labeler.apply(&pix).unwrap();
        assert_eq!(labeler.component_count(), 1);
        assert!(labels_of(&labeled).iter().all(|&l| l == 1));
        assert_eq!(labeler.component_properties()[0].area, 20);
    }

    #[test]
    fn test_canonical_labels_follow_first_encounter() {
        // The right-hand blob starts a row earlier, so it is met first.
        // . . . #
        // # . . #
        let pix = create_test_image(4, 2, &[(3, 0), (3, 1), (0, 1)]);
        let mut labeler = ComponentLabeler::default();
        let labeled = labeler.apply(&pix).unwrap();
        assert_eq!(labeled.get_pixel(3, 0), Some(1));
        assert_eq!(labeled.get_pixel(0, 1), Some(2));
    }

    #[test]
    fn test_four_way_splits_diagonal_contact() {
        let pix = create_test_image(3, 3, &[(0, 0), (1, 1), (2, 2)]);

        let mut eight = ComponentLabeler::default();
        eight.apply(&pix).unwrap();
        assert_eq!(eight.component_count(), 1);

        let mut four = ComponentLabeler::new(
            LabelerOptions::new().with_connectivity(ConnectivityType::FourWay),
        );
        four.apply(&pix).unwrap();
        assert_eq!(four.component_count(), 3);
    }

    #[test]
    fn test_overflow_keeps_previous_properties() {
        let mut labeler = ComponentLabeler::with_max_components(2);

        let two = create_test_image(5, 1, &[(0, 0), (4, 0)]);
        labeler.apply(&two).unwrap();
        assert_eq!(labeler.component_count(), 2);

        let three = create_test_image(5, 1, &[(0, 0), (2, 0), (4, 0)]);
        let err = labeler.apply(&three).unwrap_err();
        assert!(matches!(err, RegionError::LabelOverflow { limit: 2 }));
        assert_eq!(labeler.component_count(), 2);
    }

    #[test]
    fn test_unbounded_never_overflows() {
        // Checkerboard of isolated pixels under 4-way connectivity
        let pixels: Vec<_> = (0..20)
            .flat_map(|y| (0..20).map(move |x| (x, y)))
            .filter(|(x, y)| (x + y) % 2 == 0)
            .collect();
        let pix = create_test_image(20, 20, &pixels);
        let opts = LabelerOptions::unbounded().with_connectivity(ConnectivityType::FourWay);
        let mut labeler = ComponentLabeler::new(opts);
        labeler.apply(&pix).unwrap();
        assert_eq!(labeler.component_count(), 200);
    }

    #[test]
    fn test_limit_counts_provisional_labels() {
        // A "V" shape is one component but needs two provisional labels.
        // # . #
        // . # .
        let pix = create_test_image(3, 2, &[(0, 0), (2, 0), (1, 1)]);
        assert!(ComponentLabeler::with_max_components(1).apply(&pix).is_err());

        let mut labeler = ComponentLabeler::with_max_components(2);
        labeler.apply(&pix).unwrap();
        assert_eq!(labeler.component_count(), 1);
    }
}
