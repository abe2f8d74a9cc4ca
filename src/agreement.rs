//! Agreement between two clusterings
//!
//! Scores compare two label assignments of the same sample population. None of them depends on
//! the numeric values of cluster ids, relabeling either assignment with a bijection leaves the
//! score unchanged. The chance-corrected scores ([`adjusted_rand_score`] and
//! [`adjusted_mutual_info`]) additionally discount the agreement expected from independent random
//! assignments with the same cluster sizes, so that random labelings score around zero.
//!
//! Whenever a normalizer vanishes the score is not defined. Instead of returning NaN or an
//! arbitrary constant, an [`AgreementError::DegenerateInput`] is returned. The same holds for the
//! chance-corrected and normalized scores when either assignment is a single cluster, for
//! example a density based clustering which declared every sample noise.
//!
//! [`adjusted_rand_score`]: ContingencyTable::adjusted_rand_score
//! [`adjusted_mutual_info`]: ContingencyTable::adjusted_mutual_info
use approx::{AbsDiffEq, RelativeEq};
#[cfg(feature = "serde")]
use serde_crate::{Deserialize, Serialize};

use crate::assignment::AsLabelAssignment;
use crate::contingency::{comb2, ContingencyTable};
use crate::emi::expected_mutual_info;
use crate::error::{AgreementError, Degeneracy, Result};
use crate::hyperparams::{AgreementParams, AgreementValidParams, AverageMethod};
use crate::param_guard::ParamGuard;

/// Relative size below which a normalizer counts as zero
const NORMALIZER_TOLERANCE: f64 = 1e-12;

fn ensure_normalizer(value: f64, scale: f64, metric: &'static str) -> Result<f64> {
    if value.abs() <= NORMALIZER_TOLERANCE * scale.abs().max(1.0) {
        Err(Degeneracy::ZeroNormalizer { metric }.into())
    } else {
        Ok(value)
    }
}

impl ContingencyTable {
    /// Fraction of sample pairs on which both assignments agree
    ///
    /// A pair agrees when it is put together in both or separated in both assignments.
    pub fn rand_score(&self) -> Result<f64> {
        self.ensure_pairs()?;
        let pairs = self.pair_confusion();

        Ok(pairs.agreeing() as f64 / pairs.total() as f64)
    }

    /// Rand index corrected for chance
    ///
    /// The raw number of pairs clustered together in both assignments is compared against its
    /// expectation under the hypergeometric model of random labeling with fixed cluster sizes:
    ///
    /// `ARI = (index - expected) / (max - expected)`
    ///
    /// Identical partitions score `1.0`, random ones around `0.0` and worse than random ones
    /// below zero. An assignment with a single cluster leaves no pairs to tell apart and is
    /// rejected, as is a denominator which vanishes because both assignments put every sample in
    /// its own cluster.
    pub fn adjusted_rand_score(&self) -> Result<f64> {
        self.ensure_pairs()?;
        self.ensure_partitioned("adjusted rand index")?;

        let index = self.pair_confusion().same_both as i128;
        let sum_rows = self.row_sums().iter().map(|x| comb2(*x)).sum::<u128>() as i128;
        let sum_cols = self.col_sums().iter().map(|x| comb2(*x)).sum::<u128>() as i128;
        let total = comb2(self.n_samples()) as i128;

        // both parts of the quotient are scaled by 2 * total to stay in integers
        let numerator = 2 * (index * total - sum_rows * sum_cols);
        let denominator = total * (sum_rows + sum_cols) - 2 * sum_rows * sum_cols;

        if denominator == 0 {
            return Err(Degeneracy::ZeroNormalizer {
                metric: "adjusted rand index",
            }
            .into());
        }

        Ok(numerator as f64 / denominator as f64)
    }

    /// Mutual information of both assignments in nats
    pub fn mutual_info(&self) -> f64 {
        let n = self.n_samples() as f64;
        let row_sums = self.row_sums();
        let col_sums = self.col_sums();

        let mi = self
            .matrix()
            .indexed_iter()
            .filter(|(_, nij)| **nij > 0)
            .map(|((i, j), nij)| {
                let nij = *nij as f64;
                let outer = row_sums[i] as f64 * col_sums[j] as f64;
                nij / n * (nij.ln() + n.ln() - outer.ln())
            })
            .sum::<f64>();

        // rounding may leave a tiny negative value
        mi.max(0.0)
    }

    /// Mutual information normalized by a mean of both entropies
    pub fn normalized_mutual_info(&self, average_method: AverageMethod) -> Result<f64> {
        self.ensure_pairs()?;
        self.ensure_partitioned("normalized mutual information")?;
        let normalizer = average_method.mean(self.entropy_rows(), self.entropy_cols());
        let normalizer = ensure_normalizer(normalizer, 1.0, "normalized mutual information")?;

        Ok(self.mutual_info() / normalizer)
    }

    /// Mutual information corrected for chance
    ///
    /// `AMI = (MI - E[MI]) / (mean(H(A), H(B)) - E[MI])`
    ///
    /// where the expectation is taken under the hypergeometric model of random labeling. The
    /// score is `1.0` for identical partitions and close to `0.0` for independent ones. Both
    /// assignments need at least two clusters, a single cluster carries no information.
    pub fn adjusted_mutual_info(&self, average_method: AverageMethod) -> Result<f64> {
        self.ensure_pairs()?;
        self.ensure_partitioned("adjusted mutual information")?;

        let mi = self.mutual_info();
        let emi = expected_mutual_info(self);
        let normalizer = average_method.mean(self.entropy_rows(), self.entropy_cols());

        let denominator =
            ensure_normalizer(normalizer - emi, normalizer, "adjusted mutual information")?;

        Ok((mi - emi) / denominator)
    }

    /// Share of the information about the rows (reference classes) which the columns contain
    ///
    /// A clustering is homogeneous when every cluster contains only members of a single class.
    pub fn homogeneity(&self) -> Result<f64> {
        self.ensure_pairs()?;
        let h_rows = ensure_normalizer(self.entropy_rows(), 1.0, "homogeneity")?;

        Ok(self.mutual_info() / h_rows)
    }

    /// Share of the information about the columns (clusters) which the rows contain
    ///
    /// A clustering is complete when all members of a class end up in the same cluster.
    pub fn completeness(&self) -> Result<f64> {
        self.ensure_pairs()?;
        let h_cols = ensure_normalizer(self.entropy_cols(), 1.0, "completeness")?;

        Ok(self.mutual_info() / h_cols)
    }

    /// Weighted harmonic mean of homogeneity and completeness
    ///
    /// `beta > 1` weights completeness stronger, `beta < 1` homogeneity. Independent
    /// assignments, where both terms are zero, score zero.
    pub fn v_measure(&self, beta: f64) -> Result<f64> {
        let homogeneity = self.homogeneity()?;
        let completeness = self.completeness()?;

        let denominator = beta * homogeneity + completeness;
        if denominator == 0.0 {
            return Ok(0.0);
        }

        Ok((1.0 + beta) * homogeneity * completeness / denominator)
    }

    /// Geometric mean of pairwise precision and recall
    pub fn fowlkes_mallows(&self) -> Result<f64> {
        self.ensure_pairs()?;
        let pairs = self.pair_confusion();

        let same_rows = (pairs.same_both + pairs.same_left_only) as f64;
        let same_cols = (pairs.same_both + pairs.same_right_only) as f64;
        let normalizer = ensure_normalizer((same_rows * same_cols).sqrt(), 1.0, "fowlkes-mallows")?;

        Ok(pairs.same_both as f64 / normalizer)
    }
}

/// Agreement scores between two clusterings
///
/// This trait is implemented for everything which can be reduced to a label assignment. In the
/// asymmetric scores (`homogeneity`, `completeness`, `v_measure`) `self` plays the role of the
/// reference classes.
pub trait ClusteringAgreement {
    /// Cross-tabulate against another assignment
    fn contingency_table<O: AsLabelAssignment + ?Sized>(
        &self,
        other: &O,
    ) -> Result<ContingencyTable>;

    fn rand_score<O: AsLabelAssignment + ?Sized>(&self, other: &O) -> Result<f64> {
        self.contingency_table(other)?.rand_score()
    }

    fn adjusted_rand_score<O: AsLabelAssignment + ?Sized>(&self, other: &O) -> Result<f64> {
        self.contingency_table(other)?.adjusted_rand_score()
    }

    fn mutual_info<O: AsLabelAssignment + ?Sized>(&self, other: &O) -> Result<f64> {
        Ok(self.contingency_table(other)?.mutual_info())
    }

    fn normalized_mutual_info<O: AsLabelAssignment + ?Sized>(
        &self,
        other: &O,
        average_method: AverageMethod,
    ) -> Result<f64> {
        self.contingency_table(other)?
            .normalized_mutual_info(average_method)
    }

    fn adjusted_mutual_info<O: AsLabelAssignment + ?Sized>(
        &self,
        other: &O,
        average_method: AverageMethod,
    ) -> Result<f64> {
        self.contingency_table(other)?
            .adjusted_mutual_info(average_method)
    }

    fn homogeneity<O: AsLabelAssignment + ?Sized>(&self, other: &O) -> Result<f64> {
        self.contingency_table(other)?.homogeneity()
    }

    fn completeness<O: AsLabelAssignment + ?Sized>(&self, other: &O) -> Result<f64> {
        self.contingency_table(other)?.completeness()
    }

    fn v_measure<O: AsLabelAssignment + ?Sized>(&self, other: &O, beta: f64) -> Result<f64> {
        self.contingency_table(other)?.v_measure(beta)
    }

    fn fowlkes_mallows<O: AsLabelAssignment + ?Sized>(&self, other: &O) -> Result<f64> {
        self.contingency_table(other)?.fowlkes_mallows()
    }
}

impl<T: AsLabelAssignment + ?Sized> ClusteringAgreement for T {
    fn contingency_table<O: AsLabelAssignment + ?Sized>(
        &self,
        other: &O,
    ) -> Result<ContingencyTable> {
        ContingencyTable::new(&self.as_label_assignment(), &other.as_label_assignment())
    }
}

/// Chance-corrected agreement of two clusterings
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(crate = "serde_crate")
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PairScores {
    /// Pair counting agreement, see [`ContingencyTable::adjusted_rand_score`]
    pub adjusted_rand: f64,
    /// Information theoretic agreement, see [`ContingencyTable::adjusted_mutual_info`]
    pub adjusted_mutual_info: f64,
}

impl AbsDiffEq for PairScores {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.adjusted_rand.abs_diff_eq(&other.adjusted_rand, epsilon)
            && self
                .adjusted_mutual_info
                .abs_diff_eq(&other.adjusted_mutual_info, epsilon)
    }
}

impl RelativeEq for PairScores {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.adjusted_rand
            .relative_eq(&other.adjusted_rand, epsilon, max_relative)
            && self
                .adjusted_mutual_info
                .relative_eq(&other.adjusted_mutual_info, epsilon, max_relative)
    }
}

/// Evaluator of the agreement between clusterings
///
/// The evaluator is configured with [`AgreementEvaluator::params`], checked and then applied to
/// pairs of label assignments:
///
/// ```
/// use linfa_agreement::prelude::*;
///
/// let kmeans = vec![0usize, 0, 1, 1, 2, 2];
/// let dbscan = vec![Some(1usize), Some(1), Some(0), Some(0), None, None];
///
/// let evaluator = AgreementEvaluator::params().check().unwrap();
/// let scores = evaluator.evaluate(&kmeans, &dbscan).unwrap();
///
/// assert!((scores.adjusted_rand - 1.0).abs() < 1e-12);
/// assert!((scores.adjusted_mutual_info - 1.0).abs() < 1e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AgreementEvaluator;

impl AgreementEvaluator {
    /// Create unchecked parameters with the arithmetic mean and `beta = 1`
    pub fn params() -> AgreementParams {
        AgreementParams::new()
    }
}

impl AgreementValidParams {
    /// Adjusted Rand index of two assignments
    pub fn pair_count_agreement<A, B>(&self, a: &A, b: &B) -> Result<f64>
    where
        A: AsLabelAssignment + ?Sized,
        B: AsLabelAssignment + ?Sized,
    {
        a.adjusted_rand_score(b)
    }

    /// Adjusted mutual information of two assignments, normalized with the configured mean
    pub fn mutual_information_agreement<A, B>(&self, a: &A, b: &B) -> Result<f64>
    where
        A: AsLabelAssignment + ?Sized,
        B: AsLabelAssignment + ?Sized,
    {
        a.adjusted_mutual_info(b, self.average_method())
    }

    /// V-measure of two assignments with the configured weight, `a` being the reference classes
    pub fn v_measure<A, B>(&self, a: &A, b: &B) -> Result<f64>
    where
        A: AsLabelAssignment + ?Sized,
        B: AsLabelAssignment + ?Sized,
    {
        a.v_measure(b, self.beta())
    }

    /// Both chance-corrected scores, computed from a single contingency table
    pub fn evaluate<A, B>(&self, a: &A, b: &B) -> Result<PairScores>
    where
        A: AsLabelAssignment + ?Sized,
        B: AsLabelAssignment + ?Sized,
    {
        let table = a.contingency_table(b)?;

        Ok(PairScores {
            adjusted_rand: table.adjusted_rand_score()?,
            adjusted_mutual_info: table.adjusted_mutual_info(self.average_method())?,
        })
    }
}

/// Performs the checking step and evaluates with the checked parameters
impl AgreementParams {
    pub fn evaluate<A, B>(&self, a: &A, b: &B) -> Result<PairScores>
    where
        A: AsLabelAssignment + ?Sized,
        B: AsLabelAssignment + ?Sized,
    {
        self.check_ref()
            .map_err(AgreementError::from)?
            .evaluate(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::{AgreementEvaluator, ClusteringAgreement, PairScores};
    use crate::assignment::LabelAssignment;
    use crate::error::{AgreementError, Degeneracy};
    use crate::hyperparams::AverageMethod;
    use crate::param_guard::ParamGuard;
    use approx::assert_abs_diff_eq;
    use ndarray::{array, Array1};
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    const METHODS: [AverageMethod; 4] = [
        AverageMethod::Min,
        AverageMethod::Geometric,
        AverageMethod::Arithmetic,
        AverageMethod::Max,
    ];

    fn random_labels(rng: &mut SmallRng, n: usize, k: i64) -> Vec<i64> {
        (0..n).map(|_| rng.gen_range(0..k)).collect()
    }

    #[test]
    fn test_relabeled_halves_agree() {
        let a = vec![0usize, 0, 1, 1];
        let b = vec![1usize, 1, 0, 0];

        assert_eq!(a.adjusted_rand_score(&b).unwrap(), 1.0);
        assert_eq!(a.rand_score(&b).unwrap(), 1.0);
        assert_abs_diff_eq!(
            a.adjusted_mutual_info(&b, AverageMethod::Arithmetic).unwrap(),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_crossed_halves() {
        let a = vec![0usize, 0, 1, 1];
        let b = vec![0usize, 1, 0, 1];

        // no pair is together in both assignments
        assert_eq!(a.contingency_table(&b).unwrap().pair_confusion().same_both, 0);
        assert_eq!(a.adjusted_rand_score(&b).unwrap(), -0.5);
        assert_abs_diff_eq!(a.rand_score(&b).unwrap(), 1.0 / 3.0, epsilon = 1e-15);
        assert_abs_diff_eq!(
            a.adjusted_mutual_info(&b, AverageMethod::Arithmetic).unwrap(),
            -0.5,
            epsilon = 1e-12
        );
        assert_eq!(a.mutual_info(&b).unwrap(), 0.0);
    }

    #[test]
    fn test_reference_values() {
        let a = array![0, 0, 0, 1, 1, 1, 2, 2, 2];
        let b = array![0, 0, 1, 1, 1, 2, 2, 2, 2];
        let table = a.contingency_table(&b).unwrap();

        assert_abs_diff_eq!(table.adjusted_rand_score().unwrap(), 5.0 / 14.0, epsilon = 1e-12);
        assert_abs_diff_eq!(table.rand_score().unwrap(), 0.75, epsilon = 1e-12);
        assert_abs_diff_eq!(table.mutual_info(), 0.6365141682948128, epsilon = 1e-12);
        assert_abs_diff_eq!(
            table.adjusted_mutual_info(AverageMethod::Arithmetic).unwrap(),
            0.4086705097217212,
            epsilon = 1e-10
        );
        assert_abs_diff_eq!(
            table.normalized_mutual_info(AverageMethod::Arithmetic).unwrap(),
            0.5895098274473048,
            epsilon = 1e-12
        );
        assert_abs_diff_eq!(table.homogeneity().unwrap(), 0.579380164285695, epsilon = 1e-12);
        assert_abs_diff_eq!(table.completeness().unwrap(), 0.6, epsilon = 1e-12);
        assert_abs_diff_eq!(table.fowlkes_mallows().unwrap(), 0.5270462766947299, epsilon = 1e-12);
    }

    #[test]
    fn test_noise_is_an_ordinary_cluster() {
        let a = array![1, 1, 0, 0, 2, 2, 2, -1];
        let b = array![Some(0usize), Some(0), Some(0), Some(1), Some(1), Some(2), Some(2), None];
        let table = a.contingency_table(&b).unwrap();

        assert_eq!(table.col_labels(), &[-1, 0, 1, 2]);
        assert_abs_diff_eq!(table.adjusted_rand_score().unwrap(), 31.0 / 115.0, epsilon = 1e-12);
        assert_abs_diff_eq!(
            table.adjusted_mutual_info(AverageMethod::Arithmetic).unwrap(),
            0.31989551577364217,
            epsilon = 1e-10
        );
        assert_abs_diff_eq!(table.fowlkes_mallows().unwrap(), 0.4, epsilon = 1e-12);
    }

    #[test]
    fn test_mismatched_lengths() {
        let a = vec![0usize, 1, 2];
        let b = vec![0usize, 1, 2, 3, 4];
        let evaluator = AgreementEvaluator::params().check_unwrap();

        for res in &[
            evaluator.pair_count_agreement(&a, &b),
            evaluator.mutual_information_agreement(&a, &b),
        ] {
            assert_eq!(
                res.clone().unwrap_err(),
                AgreementError::IncompatibleAssignments { left: 3, right: 5 }
            );
        }
    }

    #[test]
    fn test_single_cluster_on_both_sides() {
        let a = vec![0usize, 0, 0, 0];
        let evaluator = AgreementEvaluator::params().check_unwrap();

        assert!(matches!(
            evaluator.pair_count_agreement(&a, &a),
            Err(AgreementError::DegenerateInput(Degeneracy::SingleCluster { .. }))
        ));
        for method in METHODS.iter() {
            assert!(matches!(
                a.adjusted_mutual_info(&a, *method),
                Err(AgreementError::DegenerateInput(Degeneracy::SingleCluster { .. }))
            ));
        }
        assert!(a.normalized_mutual_info(&a, AverageMethod::Max).is_err());
        assert!(a.homogeneity(&a).is_err());
        assert!(a.fowlkes_mallows(&a).is_ok());
        assert_eq!(a.rand_score(&a).unwrap(), 1.0);
    }

    #[test]
    fn test_singletons_on_both_sides() {
        let a = vec![0usize, 1, 2, 3, 4];
        let b = vec![4usize, 2, 0, 1, 3];

        assert!(matches!(
            a.adjusted_rand_score(&b),
            Err(AgreementError::DegenerateInput(Degeneracy::ZeroNormalizer { .. }))
        ));
        assert!(matches!(
            a.adjusted_mutual_info(&b, AverageMethod::Arithmetic),
            Err(AgreementError::DegenerateInput(Degeneracy::ZeroNormalizer { .. }))
        ));
        assert!(a.fowlkes_mallows(&b).is_err());
    }

    #[test]
    fn test_single_cluster_on_one_side() {
        let a = vec![0usize, 0, 0, 0];
        let b = vec![0usize, 1, 2, 3];

        for (left, right) in &[(&a, &b), (&b, &a)] {
            assert_eq!(
                left.adjusted_rand_score(*right).unwrap_err(),
                AgreementError::DegenerateInput(Degeneracy::SingleCluster {
                    metric: "adjusted rand index"
                })
            );
            for method in METHODS.iter() {
                assert_eq!(
                    left.adjusted_mutual_info(*right, *method).unwrap_err(),
                    AgreementError::DegenerateInput(Degeneracy::SingleCluster {
                        metric: "adjusted mutual information"
                    })
                );
                assert!(left.normalized_mutual_info(*right, *method).is_err());
            }
        }

        // the raw scores stay measurable
        assert_eq!(a.rand_score(&b).unwrap(), 0.0);
        assert_eq!(a.mutual_info(&b).unwrap(), 0.0);
        assert_eq!(b.homogeneity(&a).unwrap(), 0.0);
    }

    #[test]
    fn test_all_noise_is_rejected() {
        let noise = vec![None::<usize>; 6];
        let kmeans = vec![0usize, 0, 1, 1, 2, 2];
        let evaluator = AgreementEvaluator::params().check_unwrap();

        assert!(matches!(
            noise.adjusted_rand_score(&kmeans),
            Err(AgreementError::DegenerateInput(Degeneracy::SingleCluster { .. }))
        ));
        assert!(matches!(
            evaluator.mutual_information_agreement(&noise, &kmeans),
            Err(AgreementError::DegenerateInput(Degeneracy::SingleCluster { .. }))
        ));
        assert!(matches!(
            evaluator.evaluate(&kmeans, &noise),
            Err(AgreementError::DegenerateInput(Degeneracy::SingleCluster { .. }))
        ));
    }

    #[test]
    fn test_not_enough_samples() {
        let a = vec![3usize];
        let empty: Vec<usize> = Vec::new();

        assert_eq!(
            a.adjusted_rand_score(&a).unwrap_err(),
            AgreementError::DegenerateInput(Degeneracy::NotEnoughSamples(1))
        );
        assert_eq!(
            empty
                .adjusted_mutual_info(&empty, AverageMethod::Arithmetic)
                .unwrap_err(),
            AgreementError::DegenerateInput(Degeneracy::NotEnoughSamples(0))
        );
        assert!(a.rand_score(&a).is_err());
    }

    #[test]
    fn test_self_agreement() {
        let mut rng = SmallRng::seed_from_u64(42);
        for k in 2..8 {
            let a = random_labels(&mut rng, 200, k);

            assert_abs_diff_eq!(a.adjusted_rand_score(&a).unwrap(), 1.0, epsilon = 1e-12);
            for method in METHODS.iter() {
                assert_abs_diff_eq!(
                    a.adjusted_mutual_info(&a, *method).unwrap(),
                    1.0,
                    epsilon = 1e-10
                );
                assert_abs_diff_eq!(
                    a.normalized_mutual_info(&a, *method).unwrap(),
                    1.0,
                    epsilon = 1e-10
                );
            }
            assert_abs_diff_eq!(a.v_measure(&a, 1.0).unwrap(), 1.0, epsilon = 1e-10);
            assert_abs_diff_eq!(a.fowlkes_mallows(&a).unwrap(), 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_relabeling_invariance() {
        let mut rng = SmallRng::seed_from_u64(7);
        let permutation = [3i64, -1, 4, 0, 2];

        for _ in 0..10 {
            let a = random_labels(&mut rng, 300, 5);
            let b = random_labels(&mut rng, 300, 4);
            let relabeled = a
                .iter()
                .map(|x| permutation[*x as usize])
                .collect::<Vec<_>>();

            assert_eq!(
                a.adjusted_rand_score(&b).unwrap(),
                relabeled.adjusted_rand_score(&b).unwrap()
            );
            for method in METHODS.iter() {
                assert_abs_diff_eq!(
                    a.adjusted_mutual_info(&b, *method).unwrap(),
                    relabeled.adjusted_mutual_info(&b, *method).unwrap(),
                    epsilon = 1e-12
                );
            }
        }
    }

    #[test]
    fn test_symmetry() {
        let mut rng = SmallRng::seed_from_u64(3);

        for _ in 0..10 {
            let a = random_labels(&mut rng, 250, 3);
            let b = random_labels(&mut rng, 250, 6);

            assert_eq!(
                a.adjusted_rand_score(&b).unwrap(),
                b.adjusted_rand_score(&a).unwrap()
            );
            assert_eq!(a.rand_score(&b).unwrap(), b.rand_score(&a).unwrap());
            for method in METHODS.iter() {
                assert_abs_diff_eq!(
                    a.adjusted_mutual_info(&b, *method).unwrap(),
                    b.adjusted_mutual_info(&a, *method).unwrap(),
                    epsilon = 1e-12
                );
            }
            // homogeneity and completeness swap roles
            assert_abs_diff_eq!(
                a.homogeneity(&b).unwrap(),
                b.completeness(&a).unwrap(),
                epsilon = 1e-12
            );
        }
    }

    #[test]
    fn test_random_assignments_score_near_zero() {
        let mut rng = SmallRng::seed_from_u64(1234);
        let trials = 20;

        let passed = (0..trials)
            .filter(|_| {
                let a = random_labels(&mut rng, 1000, 5);
                let b = random_labels(&mut rng, 1000, 8);
                let scores = AgreementEvaluator::params().evaluate(&a, &b).unwrap();

                scores.adjusted_rand.abs() < 0.1 && scores.adjusted_mutual_info.abs() < 0.1
            })
            .count();

        assert!(passed * 10 >= trials * 9);
    }

    #[test]
    fn test_v_measure() {
        let a = vec![0usize, 0, 1, 2];
        let b = vec![0usize, 0, 1, 1];

        // homogeneity of 2/3 and a complete clustering
        assert_abs_diff_eq!(a.homogeneity(&b).unwrap(), 2.0 / 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.completeness(&b).unwrap(), 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(a.v_measure(&b, 1.0).unwrap(), 0.8, epsilon = 1e-12);
        // a large beta favours completeness
        assert!(a.v_measure(&b, 10.0).unwrap() > 0.95);

        let crossed = vec![0usize, 1, 0, 1];
        assert_eq!(b.v_measure(&crossed, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_evaluator() {
        let a = Array1::from(vec![0usize, 0, 1, 2]);
        let b = LabelAssignment::from(vec![0i64, 0, 1, 1]);

        let evaluator = AgreementEvaluator::params()
            .average_method(AverageMethod::Arithmetic)
            .check()
            .unwrap();
        let scores = evaluator.evaluate(&a, &b).unwrap();

        assert_abs_diff_eq!(
            scores,
            PairScores {
                adjusted_rand: 4.0 / 7.0,
                adjusted_mutual_info: 4.0 / 7.0,
            },
            epsilon = 1e-10
        );
        assert_eq!(
            evaluator.pair_count_agreement(&a, &b).unwrap(),
            scores.adjusted_rand
        );
        assert_eq!(
            evaluator.mutual_information_agreement(&a, &b).unwrap(),
            scores.adjusted_mutual_info
        );
        assert_abs_diff_eq!(evaluator.v_measure(&a, &b).unwrap(), 0.8, epsilon = 1e-12);
    }

    #[test]
    fn test_invalid_params_are_reported() {
        let a = vec![0usize, 0, 1, 1];
        let res = AgreementEvaluator::params().beta(-2.0).evaluate(&a, &a);

        assert!(matches!(res, Err(AgreementError::InvalidParams(_))));
    }
}
