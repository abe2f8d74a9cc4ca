use crate::param_guard::ParamGuard;
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};
use thiserror::Error;

/// Mean used to combine the entropies of two assignments into a normalizer
///
/// For any two entropies `Min <= Geometric <= Arithmetic <= Max`.
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AverageMethod {
    Min,
    Geometric,
    Arithmetic,
    Max,
}

impl AverageMethod {
    /// Combine two non-negative entropies
    pub fn mean(&self, h1: f64, h2: f64) -> f64 {
        match self {
            AverageMethod::Min => h1.min(h2),
            AverageMethod::Geometric => (h1 * h2).sqrt(),
            AverageMethod::Arithmetic => (h1 + h2) / 2.0,
            AverageMethod::Max => h1.max(h2),
        }
    }
}

impl Default for AverageMethod {
    fn default() -> Self {
        AverageMethod::Arithmetic
    }
}

#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Debug, PartialEq)]
/// The set of parameters of the [agreement evaluator](crate::AgreementEvaluator).
pub struct AgreementValidParams {
    /// Mean of both entropies normalizing the (adjusted) mutual information
    average_method: AverageMethod,
    /// Weight of homogeneity relative to completeness in the V-measure
    beta: f64,
}

impl AgreementValidParams {
    pub fn average_method(&self) -> AverageMethod {
        self.average_method
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }
}

impl Default for AgreementValidParams {
    fn default() -> Self {
        AgreementValidParams {
            average_method: AverageMethod::Arithmetic,
            beta: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Default)]
/// An helper struct used to construct a set of [valid parameters](AgreementValidParams) for
/// the [agreement evaluator](crate::AgreementEvaluator) (using the builder pattern).
pub struct AgreementParams(AgreementValidParams);

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AgreementParamsError {
    #[error("beta must be finite and greater than 0, got {0}")]
    Beta(f64),
}

impl AgreementParams {
    /// Defaults are provided if optional parameters are not specified:
    /// * `average_method = Arithmetic`
    /// * `beta = 1.0`
    pub fn new() -> Self {
        Self::default()
    }

    /// Change the mean used for normalizing mutual information
    pub fn average_method(mut self, average_method: AverageMethod) -> Self {
        self.0.average_method = average_method;
        self
    }

    /// Change the V-measure weight, values larger than one weight completeness stronger
    pub fn beta(mut self, beta: f64) -> Self {
        self.0.beta = beta;
        self
    }
}

impl ParamGuard for AgreementParams {
    type Checked = AgreementValidParams;
    type Error = AgreementParamsError;

    fn check_ref(&self) -> Result<&Self::Checked, Self::Error> {
        if !self.0.beta.is_finite() || self.0.beta <= 0.0 {
            Err(AgreementParamsError::Beta(self.0.beta))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked, Self::Error> {
        self.check_ref()?;
        Ok(self.0)
    }
}
