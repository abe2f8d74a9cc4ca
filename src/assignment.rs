//! Label assignments
//!
//! A label assignment maps every sample of a fixed population to an integer cluster id. Any
//! clustering output that can be reduced to such a sequence implements [`AsLabelAssignment`] and
//! can be compared with any other one, independent of the algorithm that produced it.
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1};
use std::borrow::Cow;
use std::iter::FromIterator;

#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

/// Conventional cluster id for samples not assigned to any cluster
///
/// Density based methods like DBSCAN mark outliers with it. It has no special meaning when
/// comparing assignments, all noise samples simply form one more cluster.
pub const NOISE: i64 = -1;

/// Per-sample cluster ids, order aligned with a fixed sample population
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LabelAssignment {
    labels: Array1<i64>,
}

impl LabelAssignment {
    pub fn new(labels: Array1<i64>) -> Self {
        LabelAssignment { labels }
    }

    /// Number of samples
    pub fn nsamples(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn labels(&self) -> ArrayView1<i64> {
        self.labels.view()
    }

    /// Sorted distinct cluster ids
    pub fn clusters(&self) -> Vec<i64> {
        let mut clusters = self.labels.to_vec();
        clusters.sort_unstable();
        clusters.dedup();
        clusters
    }

    /// Number of samples carrying the [`NOISE`] id
    pub fn noise_count(&self) -> usize {
        self.labels.iter().filter(|x| **x == NOISE).count()
    }

    pub fn into_inner(self) -> Array1<i64> {
        self.labels
    }
}

impl From<Array1<i64>> for LabelAssignment {
    fn from(labels: Array1<i64>) -> Self {
        LabelAssignment::new(labels)
    }
}

impl From<Vec<i64>> for LabelAssignment {
    fn from(labels: Vec<i64>) -> Self {
        LabelAssignment::new(Array1::from(labels))
    }
}

impl<C: ClusterId> FromIterator<C> for LabelAssignment {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        LabelAssignment::new(iter.into_iter().map(ClusterId::cluster_id).collect())
    }
}

/// Single cluster label emitted by a clustering algorithm
///
/// Unsigned ids come from centroid and hierarchical methods, `Option<usize>` from DBSCAN-like
/// methods where `None` is noise.
pub trait ClusterId: Copy {
    fn cluster_id(self) -> i64;
}

impl ClusterId for i64 {
    fn cluster_id(self) -> i64 {
        self
    }
}

impl ClusterId for i32 {
    fn cluster_id(self) -> i64 {
        self as i64
    }
}

impl ClusterId for u32 {
    fn cluster_id(self) -> i64 {
        self as i64
    }
}

impl ClusterId for usize {
    fn cluster_id(self) -> i64 {
        self as i64
    }
}

impl ClusterId for Option<usize> {
    fn cluster_id(self) -> i64 {
        self.map(|x| x as i64).unwrap_or(NOISE)
    }
}

impl<'a, C: ClusterId> ClusterId for &'a C {
    fn cluster_id(self) -> i64 {
        (*self).cluster_id()
    }
}

/// Anything that can be reduced to a [`LabelAssignment`]
pub trait AsLabelAssignment {
    fn as_label_assignment(&self) -> Cow<'_, LabelAssignment>;
}

impl AsLabelAssignment for LabelAssignment {
    fn as_label_assignment(&self) -> Cow<'_, LabelAssignment> {
        Cow::Borrowed(self)
    }
}

/// A NdArray of cluster ids, e.g. the output of a fitted clustering model
impl<C: ClusterId, S: Data<Elem = C>> AsLabelAssignment for ArrayBase<S, Ix1> {
    fn as_label_assignment(&self) -> Cow<'_, LabelAssignment> {
        Cow::Owned(self.iter().collect())
    }
}

impl<C: ClusterId> AsLabelAssignment for Vec<C> {
    fn as_label_assignment(&self) -> Cow<'_, LabelAssignment> {
        Cow::Owned(self.iter().collect())
    }
}

impl<C: ClusterId> AsLabelAssignment for [C] {
    fn as_label_assignment(&self) -> Cow<'_, LabelAssignment> {
        Cow::Owned(self.iter().collect())
    }
}

impl<C: ClusterId, const N: usize> AsLabelAssignment for [C; N] {
    fn as_label_assignment(&self) -> Cow<'_, LabelAssignment> {
        Cow::Owned(self.iter().collect())
    }
}

impl<T: AsLabelAssignment + ?Sized> AsLabelAssignment for &T {
    fn as_label_assignment(&self) -> Cow<'_, LabelAssignment> {
        (*self).as_label_assignment()
    }
}
