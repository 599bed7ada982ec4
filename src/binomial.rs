//! Precomputed binomial coefficients (§4.3), used by the accumulators to turn
//! "this many candidates remained alongside a clique of this size" into exact
//! k-clique counts without enumerating every clique.

use error_stack::Report;

use crate::error::{EngineError, Result};

/// A Pascal's-triangle table of `C(n, r)` for `n` in `0..=max_n`, stored
/// row-major. Built once per run, sized to the largest value the enumerator
/// can ever ask for (the graph's vertex count).
#[derive(Debug, Clone)]
pub struct Binomial {
    max_n: usize,
    rows: Vec<Vec<u64>>,
}

impl Binomial {
    /// Builds the table for `0..=max_n`, detecting `u64` overflow as it goes
    /// (a row's rightmost nontrivial entries grow fastest).
    pub fn build(max_n: usize) -> Result<Self> {
        let mut rows: Vec<Vec<u64>> = Vec::with_capacity(max_n + 1);
        rows.push(vec![1u64]);
        for n in 1..=max_n {
            let prev = &rows[n - 1];
            let mut row = Vec::with_capacity(n + 1);
            row.push(1u64);
            for r in 1..n {
                let sum = prev[r - 1].checked_add(prev[r]).ok_or_else(|| {
                    Report::new(EngineError::Resource(format!(
                        "binomial coefficient overflow while building table row {n}"
                    )))
                })?;
                row.push(sum);
            }
            row.push(1u64);
            rows.push(row);
        }
        Ok(Self { max_n, rows })
    }

    /// `C(n, r)`, or 0 if `r > n`. Panics if `n` exceeds the table's bound;
    /// callers size the table to the graph's vertex count, so `n` is always
    /// in range for any quantity this crate computes.
    pub fn choose(&self, n: usize, r: usize) -> u64 {
        assert!(n <= self.max_n, "binomial table built for max_n={}, queried n={n}", self.max_n);
        if r > n {
            0
        } else {
            self.rows[n][r]
        }
    }
}
