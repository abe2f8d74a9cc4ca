//! Error types in linfa-agreement
//!

use thiserror::Error;

use crate::hyperparams::AgreementParamsError;

pub type Result<T> = std::result::Result<T, AgreementError>;

/// Reason why a score could not be measured on otherwise compatible inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Degeneracy {
    /// Pair counting needs at least two samples
    #[error("at least 2 samples are required, got {0}")]
    NotEnoughSamples(usize),
    /// The normalization (or chance-correction) denominator of `metric` is zero
    #[error("normalizer of {metric} is zero")]
    ZeroNormalizer { metric: &'static str },
    /// One assignment puts all samples into the same cluster (all noise included), which leaves
    /// nothing to correct for chance
    #[error("{metric} is undefined when one assignment is a single cluster")]
    SingleCluster { metric: &'static str },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgreementError {
    #[error("incompatible label assignments with {left} and {right} samples")]
    IncompatibleAssignments { left: usize, right: usize },
    #[error("degenerate input: {0}")]
    DegenerateInput(#[from] Degeneracy),
    #[error("invalid parameter: {0}")]
    InvalidParams(#[from] AgreementParamsError),
}
