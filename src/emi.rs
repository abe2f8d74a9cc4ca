//! Expected mutual information under random labeling
//!
//! Given fixed cluster sizes `a` and `b` of two assignments over `N` samples, the number of
//! samples shared by cluster `i` and cluster `j` of a random relabeling follows a hypergeometric
//! distribution. The expected mutual information sums the mutual information contribution of every
//! possible overlap weighted by its probability.
use statrs::function::factorial::ln_factorial;

use crate::contingency::ContingencyTable;

fn ln_fact(x: usize) -> f64 {
    ln_factorial(x as u64)
}

/// Expected mutual information (in nats) of two random assignments with the marginals of `table`
pub fn expected_mutual_info(table: &ContingencyTable) -> f64 {
    let n = table.n_samples();
    if n == 0 {
        return 0.0;
    }
    let a = table.row_sums();
    let b = table.col_sums();

    let n_f = n as f64;
    let ln_n = n_f.ln();
    let ln_fact_n = ln_fact(n);

    // constant parts of the log-hypergeometric probability per cluster
    let gln_a = a
        .iter()
        .map(|a| ln_fact(*a) + ln_fact(n - *a))
        .collect::<Vec<_>>();
    let gln_b = b
        .iter()
        .map(|b| ln_fact(*b) + ln_fact(n - *b))
        .collect::<Vec<_>>();

    let mut emi = 0.0;
    for (i, a_i) in a.iter().enumerate() {
        let ln_a = (*a_i as f64).ln();
        for (j, b_j) in b.iter().enumerate() {
            let ln_b = (*b_j as f64).ln();

            // overlaps of zero do not contribute
            let start = 1.max((*a_i + *b_j).saturating_sub(n));
            let end = (*a_i).min(*b_j);

            for nij in start..=end {
                let nij_f = nij as f64;
                let term1 = nij_f / n_f;
                let term2 = ln_n + nij_f.ln() - ln_a - ln_b;
                let gln = gln_a[i] + gln_b[j]
                    - ln_fact_n
                    - ln_fact(nij)
                    - ln_fact(*a_i - nij)
                    - ln_fact(*b_j - nij)
                    - ln_fact(n + nij - *a_i - *b_j);

                emi += term1 * term2 * gln.exp();
            }
        }
    }

    emi
}
