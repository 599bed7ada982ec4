//! Degeneracy ordering (§4.2) via bucket-queue peeling (Matula-Beck), the
//! technique `examples/original_source/src/degeneracy_helper.c` implements in
//! `computeDegeneracy`/`computeDegeneracyOrderArray`/
//! `computeDegeneracyOrderArrayVerticesSorted`.
//!
//! Three entry points mirror the original's three functions: [`degeneracy`]
//! (bound only), [`order`] (original vertex ids, insertion-order later/earlier)
//! and [`order_renamed`] (vertices renamed to their rank, later/earlier sorted
//! ascending) — the shape the enumerator in [`crate::enumerate`] consumes.

use crate::graph::Graph;

/// A degeneracy ordering over the original vertex ids.
#[derive(Debug, Clone)]
pub struct Ordering {
    /// `rank[v]` is the position at which `v` was peeled (0 = first).
    pub rank: Vec<u32>,
    /// `order[r]` is the original vertex id peeled at rank `r`.
    pub order: Vec<u32>,
    /// The graph's degeneracy: the maximum, over all peeling steps, of the
    /// degree of the vertex removed at that step.
    pub degeneracy: u32,
    /// `later[v]`: neighbors of `v` with strictly greater rank, in the order
    /// they appear in the graph's adjacency list.
    pub later: Vec<Vec<u32>>,
    /// `earlier[v]`: neighbors of `v` with strictly smaller rank.
    pub earlier: Vec<Vec<u32>>,
}

/// A degeneracy ordering with vertices renamed to their rank: vertex `r`
/// (0-indexed) is the `r`-th vertex peeled. `later`/`earlier` are sorted
/// ascending, enabling binary search and merge-based intersection in the
/// enumerator.
#[derive(Debug, Clone)]
pub struct RenamedOrdering {
    /// Same value as [`Ordering::degeneracy`].
    pub degeneracy: u32,
    /// `original_id[r]` maps a renamed vertex back to its original id, for
    /// reporting results in terms of the caller's ids.
    pub original_id: Vec<u32>,
    /// `later[r]`: renamed neighbors of renamed vertex `r` with greater
    /// renamed id, sorted ascending.
    pub later: Vec<Vec<u32>>,
    /// `earlier[r]`: renamed neighbors of renamed vertex `r` with smaller
    /// renamed id, sorted ascending.
    pub earlier: Vec<Vec<u32>>,
}

/// Peels the graph one minimum-degree vertex at a time, returning the
/// resulting `(rank, order, degeneracy)`. The bucket queue gives O(n + m)
/// total work: each vertex's degree only ever decreases, so it moves down
/// through the bucket array at most `degree(v)` times over the whole run.
fn peel(graph: &Graph) -> (Vec<u32>, Vec<u32>, u32) {
    let n = graph.n();
    if n == 0 {
        return (Vec::new(), Vec::new(), 0);
    }

    let mut degree: Vec<u32> = (0..n as u32).map(|v| graph.neighbors(v).len() as u32).collect();
    let max_degree = degree.iter().copied().max().unwrap_or(0) as usize;

    let mut buckets: Vec<Vec<u32>> = vec![Vec::new(); max_degree + 1];
    let mut position: Vec<usize> = vec![0; n];
    for v in 0..n {
        position[v] = buckets[degree[v] as usize].len();
        buckets[degree[v] as usize].push(v as u32);
    }

    let mut removed = vec![false; n];
    let mut rank = vec![0u32; n];
    let mut order = Vec::with_capacity(n);
    let mut degeneracy = 0u32;
    let mut min_bucket = 0usize;

    for i in 0..n {
        while buckets[min_bucket].is_empty() {
            min_bucket += 1;
        }
        degeneracy = degeneracy.max(min_bucket as u32);

        let v = buckets[min_bucket].pop().expect("non-empty bucket");
        removed[v as usize] = true;
        rank[v as usize] = i as u32;
        order.push(v);

        for &u in graph.neighbors(v) {
            let u = u as usize;
            if removed[u] {
                continue;
            }
            let old_degree = degree[u] as usize;
            let pos = position[u];
            let last = buckets[old_degree].len() - 1;
            buckets[old_degree].swap(pos, last);
            let moved = buckets[old_degree][pos];
            position[moved as usize] = pos;
            buckets[old_degree].pop();

            let new_degree = old_degree - 1;
            degree[u] = new_degree as u32;
            position[u] = buckets[new_degree].len();
            buckets[new_degree].push(u as u32);

            if new_degree < min_bucket {
                min_bucket = new_degree;
            }
        }
    }

    (rank, order, degeneracy)
}

/// Returns only the graph's degeneracy, the bound used to size the search
/// tree's depth in [`crate::enumerate`]. Cheaper than [`order`] when the
/// ordering itself is not needed.
pub fn degeneracy(graph: &Graph) -> u32 {
    peel(graph).2
}

/// Computes the degeneracy ordering, keeping original vertex ids.
pub fn order(graph: &Graph) -> Ordering {
    let n = graph.n();
    let (rank, order, degeneracy) = peel(graph);

    let mut later = vec![Vec::new(); n];
    let mut earlier = vec![Vec::new(); n];
    for v in 0..n {
        for &u in graph.neighbors(v as u32) {
            if rank[u as usize] > rank[v] {
                later[v].push(u);
            } else {
                earlier[v].push(u);
            }
        }
    }

    Ordering {
        rank,
        order,
        degeneracy,
        later,
        earlier,
    }
}

/// Computes the degeneracy ordering, renaming each vertex to its rank and
/// sorting `later`/`earlier` ascending.
pub fn order_renamed(graph: &Graph) -> RenamedOrdering {
    let plain = order(graph);
    let n = plain.rank.len();

    let mut later: Vec<Vec<u32>> = vec![Vec::new(); n];
    let mut earlier: Vec<Vec<u32>> = vec![Vec::new(); n];
    for v in 0..n {
        let rv = plain.rank[v];
        later[rv as usize] = plain.later[v].iter().map(|&u| plain.rank[u as usize]).collect();
        earlier[rv as usize] = plain.earlier[v].iter().map(|&u| plain.rank[u as usize]).collect();
        later[rv as usize].sort_unstable();
        earlier[rv as usize].sort_unstable();
    }

    RenamedOrdering {
        degeneracy: plain.degeneracy,
        original_id: plain.order,
        later,
        earlier,
    }
}
