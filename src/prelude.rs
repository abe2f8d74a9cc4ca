//! linfa-agreement prelude.
//!
//! This module contains the most used types, type aliases, traits and
//! functions that you can import easily as a group.
//!

#[doc(no_inline)]
pub use crate::error::{AgreementError, Result};

#[doc(no_inline)]
pub use crate::param_guard::ParamGuard;

#[doc(no_inline)]
pub use crate::agreement::{AgreementEvaluator, ClusteringAgreement, PairScores};

#[doc(no_inline)]
pub use crate::assignment::{AsLabelAssignment, LabelAssignment, NOISE};

#[doc(no_inline)]
pub use crate::contingency::ContingencyTable;

#[doc(no_inline)]
pub use crate::hyperparams::AverageMethod;

#[doc(no_inline)]
pub use crate::report::AgreementReport;
