//! Full neighbor lists and membership bitsets over the renamed vertex space
//! (§4.4 "Neighborhood intersections"): `later`/`earlier` merged into one
//! sorted list per vertex for merge-based set intersection, plus a
//! [`FixedBitSet`] per vertex for O(1) adjacency queries, the bitset use the
//! specification allows ("Implementations may additionally use a bitset when
//! the current C fits comfortably"). `later` lists are kept unmerged too,
//! since the enumerator's root-level candidate set is `later(v)` alone
//! (§4.2/§4.4): seeding it from the merged list would re-derive every clique
//! once per member instead of once at its unique minimum-rank root.
use fixedbitset::FixedBitSet;

use crate::ordering::RenamedOrdering;

/// Full (both-directions) adjacency over the renamed `[0, n)` vertex space,
/// plus each vertex's `later`-only neighbor list.
pub struct Adjacency {
    n: usize,
    sorted: Vec<Vec<u32>>,
    later: Vec<Vec<u32>>,
    bits: Vec<FixedBitSet>,
}

impl Adjacency {
    /// Builds from a renamed degeneracy ordering by merging each vertex's
    /// `later` and `earlier` lists for full adjacency, while keeping `later`
    /// on its own for root-level candidate seeding.
    pub fn from_renamed(ordering: &RenamedOrdering) -> Self {
        let n = ordering.later.len();
        let mut sorted = Vec::with_capacity(n);
        let mut bits = Vec::with_capacity(n);
        for v in 0..n {
            let mut merged = Vec::with_capacity(ordering.later[v].len() + ordering.earlier[v].len());
            merged.extend_from_slice(&ordering.later[v]);
            merged.extend_from_slice(&ordering.earlier[v]);
            merged.sort_unstable();

            let mut bitset = FixedBitSet::with_capacity(n);
            for &u in &merged {
                bitset.insert(u as usize);
            }
            sorted.push(merged);
            bits.push(bitset);
        }
        Self {
            n,
            sorted,
            later: ordering.later.clone(),
            bits,
        }
    }

    /// Vertex count in the renamed space.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Sorted full neighbor list of renamed vertex `v`.
    pub fn neighbors(&self, v: u32) -> &[u32] {
        &self.sorted[v as usize]
    }

    /// Sorted neighbors of `v` with strictly greater renamed id — the
    /// root-level candidate set `later(v)` of §4.2/§4.4.
    pub fn later(&self, v: u32) -> &[u32] {
        &self.later[v as usize]
    }

    /// O(1) adjacency test.
    pub fn is_adjacent(&self, v: u32, u: u32) -> bool {
        self.bits[v as usize].contains(u as usize)
    }

    /// Sorted intersection of `candidates` (already sorted ascending) with
    /// `v`'s full neighbor list, via linear merge.
    pub fn intersect(&self, candidates: &[u32], v: u32) -> Vec<u32> {
        merge_intersect(candidates, &self.sorted[v as usize])
    }
}

fn merge_intersect(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len().min(b.len()));
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => i += 1,
            std::cmp::Ordering::Greater => j += 1,
            std::cmp::Ordering::Equal => {
                out.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    out
}

/// Sorted set-difference `a \ b`, both ascending.
pub fn sorted_difference(a: &[u32], b: &[u32]) -> Vec<u32> {
    let mut out = Vec::with_capacity(a.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() {
        if j >= b.len() || a[i] < b[j] {
            out.push(a[i]);
            i += 1;
        } else if a[i] > b[j] {
            j += 1;
        } else {
            i += 1;
            j += 1;
        }
    }
    out
}
