//! Label equivalence tracking
//!
//! [`LabelForest`] is the disjoint-set forest over provisional labels built
//! by the first labeling pass, and [`CanonicalLabels`] maps its roots to the
//! compact labels written by the second pass.
//!
//! Parent entries of 0 mark roots. Unions always hang the numerically
//! larger root under the smaller one, so the root of a class is its
//! smallest provisional label. This is not rank-balanced, but it makes
//! the canonical numbering a pure function of the scan order.

use crate::error::{RegionError, RegionResult};

/// Upper bound on the number of provisional labels one labeling run may
/// allocate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelLimit {
    /// At most this many provisional labels
    Bounded(u32),
    /// Grow without a cap (bounded only by the image size)
    Unbounded,
}

/// Disjoint-set forest over provisional labels.
///
/// Label 0 is the background and never part of the forest; allocated labels
/// are `1..=len()`.
#[derive(Debug, Clone)]
pub struct LabelForest {
    parent: Vec<u32>,
    limit: LabelLimit,
    unions: usize,
}

impl LabelForest {
    /// Create an empty forest with the given allocation limit.
    pub fn new(limit: LabelLimit) -> Self {
        Self {
            parent: vec![0],
            limit,
            unions: 0,
        }
    }

    /// Number of provisional labels allocated so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.parent.len() - 1
    }

    /// Whether no label has been allocated yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of unions that actually merged two classes.
    #[inline]
    pub fn union_count(&self) -> usize {
        self.unions
    }

    /// Allocate the next provisional label as a new singleton class.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::LabelOverflow`] when the allocation would
    /// exceed a [`LabelLimit::Bounded`] limit.
    pub fn make_label(&mut self) -> RegionResult<u32> {
        let next = self.parent.len();
        let exceeded = match self.limit {
            LabelLimit::Bounded(max) => next > max as usize,
            LabelLimit::Unbounded => next > u32::MAX as usize,
        };
        if exceeded {
            let limit = match self.limit {
                LabelLimit::Bounded(max) => max,
                LabelLimit::Unbounded => u32::MAX,
            };
            return Err(RegionError::LabelOverflow { limit });
        }
        self.parent.push(0);
        Ok(next as u32)
    }

    /// Find the root of `label` by following parent links.
    ///
    /// # Panics
    ///
    /// Panics if `label` was never allocated.
    pub fn find(&self, label: u32) -> u32 {
        let mut root = label;
        while self.parent[root as usize] != 0 {
            root = self.parent[root as usize];
        }
        root
    }

    /// Merge the classes of `a` and `b`.
    ///
    /// Returns `true` if the two labels were in different classes.
    pub fn union(&mut self, a: u32, b: u32) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        let (root, child) = if ra < rb { (ra, rb) } else { (rb, ra) };
        self.parent[child as usize] = root;
        self.unions += 1;
        true
    }
}

/// Lazily assigned compact labels for the roots of a [`LabelForest`].
///
/// Canonical labels start at 1 and are handed out in the order roots are
/// first resolved.
#[derive(Debug, Clone)]
pub struct CanonicalLabels {
    by_root: Vec<u32>,
    next: u32,
}

impl CanonicalLabels {
    /// Create an empty mapping sized for `forest`.
    pub fn new(forest: &LabelForest) -> Self {
        Self {
            by_root: vec![0; forest.len() + 1],
            next: 1,
        }
    }

    /// Resolve a provisional label to its canonical label, allocating the
    /// next canonical label if its root has none yet.
    pub fn resolve(&mut self, forest: &LabelForest, provisional: u32) -> u32 {
        let root = forest.find(provisional) as usize;
        if self.by_root[root] == 0 {
            self.by_root[root] = self.next;
            self.next += 1;
        }
        self.by_root[root]
    }

    /// Number of canonical labels handed out.
    #[inline]
    pub fn count(&self) -> u32 {
        self.next - 1
    }
}
