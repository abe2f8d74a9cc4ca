//! Pairwise comparison of many clusterings
//!
//! When several clustering methods are run on the same samples, every pair of their results is
//! compared. A pair which cannot be compared, for example because one method collapsed all
//! samples into one cluster, is recorded with its error and does not stop the comparison of the
//! remaining pairs.
use std::cmp::Ordering;
use std::fmt;

use log::{debug, warn};

use crate::agreement::PairScores;
use crate::assignment::AsLabelAssignment;
use crate::error::{AgreementError, Result};
use crate::hyperparams::AgreementValidParams;

/// Outcome of comparing two named clusterings
#[derive(Debug, Clone, PartialEq)]
pub struct PairReport {
    pub left: String,
    pub right: String,
    pub scores: Result<PairScores>,
}

/// Comparison of all pairs out of a set of clusterings
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AgreementReport {
    pairs: Vec<PairReport>,
}

impl AgreementReport {
    /// All pairs in input order
    pub fn pairs(&self) -> &[PairReport] {
        &self.pairs
    }

    /// Successfully compared pairs, sorted by decreasing adjusted Rand index
    pub fn ranked(&self) -> Vec<(&str, &str, PairScores)> {
        let mut ranked = self
            .pairs
            .iter()
            .filter_map(|pair| match &pair.scores {
                Ok(scores) => Some((pair.left.as_str(), pair.right.as_str(), *scores)),
                Err(_) => None,
            })
            .collect::<Vec<_>>();

        ranked.sort_by(|a, b| {
            b.2.adjusted_rand
                .partial_cmp(&a.2.adjusted_rand)
                .unwrap_or(Ordering::Equal)
        });

        ranked
    }

    /// Pairs which could not be compared
    pub fn failures(&self) -> Vec<(&str, &str, &AgreementError)> {
        self.pairs
            .iter()
            .filter_map(|pair| match &pair.scores {
                Ok(_) => None,
                Err(err) => Some((pair.left.as_str(), pair.right.as_str(), err)),
            })
            .collect()
    }

    /// Scores of the pair `(left, right)` in either order
    pub fn get(&self, left: &str, right: &str) -> Option<&Result<PairScores>> {
        self.pairs
            .iter()
            .find(|pair| {
                (pair.left == left && pair.right == right)
                    || (pair.left == right && pair.right == left)
            })
            .map(|pair| &pair.scores)
    }
}

impl fmt::Display for AgreementReport {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for pair in &self.pairs {
            match &pair.scores {
                Ok(scores) => writeln!(
                    f,
                    "{} vs {}: ARI = {:.4}, AMI = {:.4}",
                    pair.left, pair.right, scores.adjusted_rand, scores.adjusted_mutual_info
                )?,
                Err(err) => writeln!(
                    f,
                    "{} vs {}: not comparable ({})",
                    pair.left, pair.right, err
                )?,
            }
        }

        Ok(())
    }
}

impl AgreementValidParams {
    /// Compare every pair `(i, j)` with `i < j` of the named assignments
    pub fn compare_all<S, A>(&self, assignments: &[(S, A)]) -> AgreementReport
    where
        S: AsRef<str>,
        A: AsLabelAssignment,
    {
        let n = assignments.len();
        let mut pairs = Vec::with_capacity(n * n.saturating_sub(1) / 2);

        for (i, (left, a)) in assignments.iter().enumerate() {
            for (right, b) in assignments.iter().skip(i + 1) {
                let (left, right) = (left.as_ref(), right.as_ref());
                let scores = self.evaluate(a, b);

                match &scores {
                    Ok(scores) => debug!(
                        "{} vs {}: ARI = {}, AMI = {}",
                        left, right, scores.adjusted_rand, scores.adjusted_mutual_info
                    ),
                    Err(err) => warn!("cannot compare {} with {}: {}", left, right, err),
                }

                pairs.push(PairReport {
                    left: left.to_string(),
                    right: right.to_string(),
                    scores,
                });
            }
        }

        AgreementReport { pairs }
    }
}
