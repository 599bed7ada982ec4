//! The pivoting enumerator (§4.4) — the recursive procedure, rooted at each
//! vertex of the degeneracy ordering, that walks the "candidates" set and
//! posts combinatorial contributions to the chosen [`Accumulator`].
//!
//! **Pivot chunk shortcut.** At a node `(P, C)`, a pivot `p` is chosen from
//! `C` to maximize `|C ∩ N(p)|`. Let `Y = C ∩ N(p)`. Every clique extending
//! `P` either contains at least one vertex outside `Y ∪ {p}` (handled by
//! individually trying each such vertex, same as plain subset recursion), or
//! is entirely a subset of `Y ∪ {p}`. In the latter case, if `Y` is itself a
//! clique (so is `Y ∪ {p}`, since every member of `Y` is already adjacent to
//! `p`), every one of its subsets combined with `P` is a valid clique and the
//! whole chunk is posted in closed form via [`accumulate_free_set`] instead
//! of being individually recursed — this is the combinatorial speedup the
//! specification calls "the crux". When `Y` is not a clique there is no valid
//! shortcut and every vertex of `C` is tried individually, which is always
//! correct (just short of the speedup).
//!
//! **Near-clique shortcut (`-o`).** Before any of the above, if the entire
//! candidate set `C` is already a clique, the whole node posts in closed form
//! and returns immediately. This subsumes the pivot-chunk case (when `C` is a
//! clique, so is `Y`, and the ordinary path would reach the same closed form
//! through the pivot chunk) — it is purely a shortcut to skip pivot selection
//! in that case, so enabling or disabling it cannot change the totals.

use crate::accumulate::{accumulate_free_set, Accumulator};
use crate::adjacency::{sorted_difference, Adjacency};
use crate::binomial::Binomial;
use crate::error::Result;

/// Runs the enumerator rooted at every vertex of the renamed ordering,
/// posting contributions into `acc`. Each root `v` seeds `C = later(v)`
/// (§4.2/§4.4), so every clique is discovered exactly once, at its unique
/// minimum-rank member.
pub fn run<A: Accumulator>(
    adj: &Adjacency,
    binom: &Binomial,
    acc: &mut A,
    k_max: usize,
    optimize: bool,
) -> Result<()> {
    let mut partial = Vec::with_capacity(k_max.max(1));
    for root in 0..adj.n() as u32 {
        partial.push(root);
        acc.commit(1, &partial)?;
        let candidates = adj.later(root).to_vec();
        recurse(adj, binom, acc, &mut partial, &candidates, k_max, optimize)?;
        partial.pop();
    }
    Ok(())
}

fn recurse<A: Accumulator>(
    adj: &Adjacency,
    binom: &Binomial,
    acc: &mut A,
    partial: &mut Vec<u32>,
    candidates: &[u32],
    k_max: usize,
    optimize: bool,
) -> Result<()> {
    if partial.len() >= k_max || candidates.is_empty() {
        return Ok(());
    }

    if optimize && is_clique(adj, candidates) {
        return accumulate_free_set(acc, binom, partial, candidates, k_max);
    }

    let pivot = choose_pivot(adj, candidates);
    let pivot_neighbors = adj.intersect(candidates, pivot);

    if is_clique(adj, &pivot_neighbors) {
        let chunk = insert_sorted(&pivot_neighbors, pivot);
        accumulate_free_set(acc, binom, partial, &chunk, k_max)?;

        let non_neighbors = sorted_difference(candidates, &chunk);
        let remaining = sorted_difference(candidates, std::slice::from_ref(&pivot));
        iterate_candidates(adj, binom, acc, partial, &non_neighbors, remaining, k_max, optimize)
    } else {
        let remaining = candidates.to_vec();
        iterate_candidates(adj, binom, acc, partial, candidates, remaining, k_max, optimize)
    }
}

/// Tries each vertex in `items` (a fixed ascending-id order) as the next
/// committed vertex, drawing each one's further candidate set from
/// `remaining` (which shrinks as earlier items are tried, so every subset of
/// `items ∪ remaining` is generated exactly once).
fn iterate_candidates<A: Accumulator>(
    adj: &Adjacency,
    binom: &Binomial,
    acc: &mut A,
    partial: &mut Vec<u32>,
    items: &[u32],
    mut remaining: Vec<u32>,
    k_max: usize,
    optimize: bool,
) -> Result<()> {
    for &x in items {
        let next_candidates = adj.intersect(&remaining, x);
        partial.push(x);
        acc.commit(partial.len(), partial)?;
        recurse(adj, binom, acc, partial, &next_candidates, k_max, optimize)?;
        partial.pop();
        remaining = sorted_difference(&remaining, std::slice::from_ref(&x));
    }
    Ok(())
}

fn choose_pivot(adj: &Adjacency, candidates: &[u32]) -> u32 {
    candidates
        .iter()
        .copied()
        .max_by_key(|&p| adj.intersect(candidates, p).len())
        .expect("candidates is nonempty")
}

/// Whether every pair in `set` is adjacent.
fn is_clique(adj: &Adjacency, set: &[u32]) -> bool {
    for i in 0..set.len() {
        for j in (i + 1)..set.len() {
            if !adj.is_adjacent(set[i], set[j]) {
                return false;
            }
        }
    }
    true
}

fn insert_sorted(sorted: &[u32], v: u32) -> Vec<u32> {
    let pos = sorted.partition_point(|&x| x < v);
    let mut out = Vec::with_capacity(sorted.len() + 1);
    out.extend_from_slice(&sorted[..pos]);
    out.push(v);
    out.extend_from_slice(&sorted[pos..]);
    out
}
