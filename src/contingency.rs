//! Contingency table of two label assignments
//!
//! All agreement scores in this crate are functions of the contingency table, which counts for
//! every combination of a cluster in the first and a cluster in the second assignment how many
//! samples fall into both. The table does not depend on the numeric value of cluster ids, which
//! makes every derived score invariant under relabeling.
use std::collections::HashMap;
use std::fmt;

use log::debug;
use ndarray::prelude::*;

use crate::assignment::LabelAssignment;
use crate::error::{AgreementError, Degeneracy, Result};

/// Number of unordered pairs which can be drawn from `n` elements
pub(crate) fn comb2(n: usize) -> u128 {
    let n = n as u128;
    n * n.saturating_sub(1) / 2
}

/// Map every label to the position of its cluster in the sorted set of distinct labels
fn map_labels_to_idx(labels: ArrayView1<i64>) -> (Vec<i64>, Vec<usize>) {
    let mut clusters = labels.to_vec();
    clusters.sort_unstable();
    clusters.dedup();

    let set = clusters
        .iter()
        .enumerate()
        .map(|(idx, label)| (*label, idx))
        .collect::<HashMap<_, _>>();

    let indices = labels.iter().map(|label| set[label]).collect();

    (clusters, indices)
}

/// Natural-log entropy of a distribution given by counts summing up to `n`
fn entropy(counts: ArrayView1<usize>, n: usize) -> f64 {
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    let h = counts
        .iter()
        .filter(|x| **x > 0)
        .map(|x| {
            let p = *x as f64 / n;
            -p * p.ln()
        })
        .sum::<f64>();

    h.max(0.0)
}

/// Unordered pairs of samples classified by whether they share a cluster in either assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairConfusion {
    /// Pairs in the same cluster under both assignments
    pub same_both: u128,
    /// Pairs together in the first assignment but split in the second
    pub same_left_only: u128,
    /// Pairs split in the first assignment but together in the second
    pub same_right_only: u128,
    /// Pairs split in both assignments
    pub different_both: u128,
}

impl PairConfusion {
    /// Total number of unordered pairs, `N (N - 1) / 2`
    pub fn total(&self) -> u128 {
        self.same_both + self.same_left_only + self.same_right_only + self.different_both
    }

    /// Pairs on which both assignments agree
    pub fn agreeing(&self) -> u128 {
        self.same_both + self.different_both
    }
}

/// Contingency table for two label assignments
///
/// Rows correspond to the sorted distinct clusters of the first assignment, columns to the ones
/// of the second. Entry `(i, j)` counts the samples in cluster `i` of the first and cluster `j` of
/// the second assignment.
#[derive(Clone, PartialEq)]
pub struct ContingencyTable {
    matrix: Array2<usize>,
    row_labels: Vec<i64>,
    col_labels: Vec<i64>,
    row_sums: Array1<usize>,
    col_sums: Array1<usize>,
}

impl ContingencyTable {
    /// Cross-tabulate two assignments over the same sample population
    ///
    /// Fails with [`AgreementError::IncompatibleAssignments`] if the assignments have a
    /// different number of samples.
    pub fn new(left: &LabelAssignment, right: &LabelAssignment) -> Result<ContingencyTable> {
        if left.nsamples() != right.nsamples() {
            return Err(AgreementError::IncompatibleAssignments {
                left: left.nsamples(),
                right: right.nsamples(),
            });
        }

        let (row_labels, row_idx) = map_labels_to_idx(left.labels());
        let (col_labels, col_idx) = map_labels_to_idx(right.labels());

        let mut matrix = Array2::zeros((row_labels.len(), col_labels.len()));
        for (i, j) in row_idx.into_iter().zip(col_idx.into_iter()) {
            matrix[(i, j)] += 1;
        }

        debug!(
            "contingency table of {} samples with {} x {} clusters",
            left.nsamples(),
            row_labels.len(),
            col_labels.len()
        );

        let row_sums = matrix.sum_axis(Axis(1));
        let col_sums = matrix.sum_axis(Axis(0));

        Ok(ContingencyTable {
            matrix,
            row_labels,
            col_labels,
            row_sums,
            col_sums,
        })
    }

    pub fn n_samples(&self) -> usize {
        self.row_sums.sum()
    }

    pub fn matrix(&self) -> ArrayView2<usize> {
        self.matrix.view()
    }

    /// Distinct clusters of the first assignment, in row order
    pub fn row_labels(&self) -> &[i64] {
        &self.row_labels
    }

    /// Distinct clusters of the second assignment, in column order
    pub fn col_labels(&self) -> &[i64] {
        &self.col_labels
    }

    /// Cluster sizes of the first assignment
    pub fn row_sums(&self) -> ArrayView1<usize> {
        self.row_sums.view()
    }

    /// Cluster sizes of the second assignment
    pub fn col_sums(&self) -> ArrayView1<usize> {
        self.col_sums.view()
    }

    /// Classify all unordered sample pairs by their co-membership in both assignments
    pub fn pair_confusion(&self) -> PairConfusion {
        let same_both = self.matrix.iter().map(|x| comb2(*x)).sum::<u128>();
        let same_left = self.row_sums.iter().map(|x| comb2(*x)).sum::<u128>();
        let same_right = self.col_sums.iter().map(|x| comb2(*x)).sum::<u128>();
        let total = comb2(self.n_samples());

        PairConfusion {
            same_both,
            same_left_only: same_left - same_both,
            same_right_only: same_right - same_both,
            different_both: total + same_both - same_left - same_right,
        }
    }

    /// Entropy of the first assignment in nats
    pub fn entropy_rows(&self) -> f64 {
        entropy(self.row_sums.view(), self.n_samples())
    }

    /// Entropy of the second assignment in nats
    pub fn entropy_cols(&self) -> f64 {
        entropy(self.col_sums.view(), self.n_samples())
    }

    /// Pair counting needs at least two samples
    pub(crate) fn ensure_pairs(&self) -> Result<()> {
        let n = self.n_samples();
        if n < 2 {
            return Err(Degeneracy::NotEnoughSamples(n).into());
        }

        Ok(())
    }

    /// Both assignments must split the samples into at least two clusters
    pub(crate) fn ensure_partitioned(&self, metric: &'static str) -> Result<()> {
        if self.row_labels().len() < 2 || self.col_labels().len() < 2 {
            return Err(Degeneracy::SingleCluster { metric }.into());
        }

        Ok(())
    }
}

/// Print a contingency table
impl fmt::Debug for ContingencyTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = self
            .matrix
            .iter()
            .map(|x| x.to_string().len())
            .chain(self.row_labels.iter().map(|x| x.to_string().len()))
            .chain(self.col_labels.iter().map(|x| x.to_string().len()))
            .max()
            .unwrap_or(1);

        write!(f, "{:>width$} |", "", width = width)?;
        for label in &self.col_labels {
            write!(f, " {:>width$} |", label, width = width)?;
        }
        writeln!(f)?;

        for (label, row) in self.row_labels.iter().zip(self.matrix.outer_iter()) {
            write!(f, "{:>width$} |", label, width = width)?;
            for count in row {
                write!(f, " {:>width$} |", count, width = width)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
