//! `linfa-agreement` scores how similar the results of two clustering algorithms are.
//!
//! ## The big picture
//!
//! `linfa-agreement` is a crate in the `linfa` ecosystem, a wider effort to
//! bootstrap a toolkit for classical Machine Learning implemented in pure Rust,
//! kin in spirit to Python's `scikit-learn`.
//!
//! Clustering algorithms like K-Means, DBSCAN, OPTICS or agglomerative clustering assign an
//! integer cluster id to every sample. The numbering is arbitrary: two runs may find the very same
//! clusters under different ids. The scores in this crate only look at how samples are grouped
//! and are therefore invariant to relabeling.
//!
//! ## Current state
//!
//! Right now `linfa-agreement` provides
//! * the [contingency table](ContingencyTable) of two assignments,
//! * the chance-corrected [adjusted Rand index](ContingencyTable::adjusted_rand_score) and
//! [adjusted mutual information](ContingencyTable::adjusted_mutual_info),
//! * Rand index, (normalized) mutual information, homogeneity, completeness, V-measure and the
//! Fowlkes-Mallows index,
//! * an [evaluator](AgreementEvaluator) comparing all pairs out of many clusterings.
//!
//! Noise labels of density based algorithms (`None` in an `Option<usize>` assignment) are
//! mapped to the [`NOISE`] id and treated as one more cluster.
//!
//! ```
//! use linfa_agreement::prelude::*;
//! use ndarray::array;
//!
//! let a = array![0usize, 0, 1, 1];
//! let b = array![0usize, 1, 0, 1];
//!
//! assert_eq!(a.adjusted_rand_score(&b).unwrap(), -0.5);
//! ```

mod agreement;
mod assignment;
mod contingency;
mod emi;
pub mod error;
mod hyperparams;
pub mod param_guard;
pub mod prelude;
mod report;

#[cfg(feature = "benchmarks")]
pub mod benchmarks;

pub use agreement::{AgreementEvaluator, ClusteringAgreement, PairScores};
pub use assignment::{AsLabelAssignment, ClusterId, LabelAssignment, NOISE};
pub use contingency::{ContingencyTable, PairConfusion};
pub use emi::expected_mutual_info;
pub use error::{AgreementError, Degeneracy, Result};
pub use hyperparams::{AgreementParams, AgreementParamsError, AgreementValidParams, AverageMethod};
pub use report::{AgreementReport, PairReport};
