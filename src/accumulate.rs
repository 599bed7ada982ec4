//! Count accumulators (§3 "Count accumulators", §9 "Polymorphism over
//! counting modes"): the three query modes share the pivoting enumerator in
//! [`crate::enumerate`] and differ only in how a node's combinatorial
//! contribution is posted.
//!
//! Every accumulator answers to two events per search-tree node:
//! - [`Accumulator::commit`]: a single new clique, `members`, of size `k` has
//!   just been formed by pushing one vertex onto the partial clique.
//! - [`Accumulator::combinatorial`]: `free` is a known clique (by
//!   construction, either the empty set or a verified near-clique
//!   candidate set); this posts the contribution of every size-`k` clique
//!   formed by `p_members` plus some nonempty subset of `free`.

use hashbrown::HashMap;

use crate::binomial::Binomial;
use crate::error::{EngineError, Result};

/// Shared interface the enumerator drives without knowing which mode it is
/// running in.
pub trait Accumulator {
    /// Records exactly one size-`k` clique equal to `members`.
    fn commit(&mut self, k: usize, members: &[u32]) -> Result<()>;

    /// Records the contribution of cliques `p_members ∪ S` for every nonempty
    /// `S ⊆ free` with `|p_members| + |S| == k`. `free` must itself be a
    /// clique (every pair in it mutually adjacent) for this to be valid.
    fn combinatorial(&mut self, k: usize, p_members: &[u32], free: &[u32], binom: &Binomial) -> Result<()>;
}

fn checked_add(slot: &mut u64, weight: u64, k: usize) -> Result<()> {
    *slot = slot
        .checked_add(weight)
        .ok_or_else(|| error_stack::Report::new(EngineError::Overflow { k }))?;
    Ok(())
}

/// Mode A: `count[k]`, the total number of k-cliques.
#[derive(Debug, Clone)]
pub struct AggregateAccumulator {
    counts: Vec<u64>,
}

impl AggregateAccumulator {
    pub fn new(k_max: usize) -> Self {
        Self {
            counts: vec![0u64; k_max + 1],
        }
    }

    /// `counts()[k]` is the number of k-cliques, for `k` in `0..=k_max`.
    pub fn counts(&self) -> &[u64] {
        &self.counts
    }
}

impl Accumulator for AggregateAccumulator {
    fn commit(&mut self, k: usize, _members: &[u32]) -> Result<()> {
        checked_add(&mut self.counts[k], 1, k)
    }

    fn combinatorial(&mut self, k: usize, p_members: &[u32], free: &[u32], binom: &Binomial) -> Result<()> {
        let t = k - p_members.len();
        let weight = binom.choose(free.len(), t);
        if weight == 0 {
            return Ok(());
        }
        checked_add(&mut self.counts[k], weight, k)
    }
}

/// Mode V: `count[k][v]`, how many k-cliques contain vertex `v`.
#[derive(Debug, Clone)]
pub struct PerVertexAccumulator {
    counts: Vec<Vec<u64>>,
}

impl PerVertexAccumulator {
    pub fn new(n: usize, k_max: usize) -> Self {
        Self {
            counts: vec![vec![0u64; n]; k_max + 1],
        }
    }

    /// `counts()[k][v]` is the number of k-cliques containing `v`.
    pub fn counts(&self) -> &[Vec<u64>] {
        &self.counts
    }
}

impl Accumulator for PerVertexAccumulator {
    fn commit(&mut self, k: usize, members: &[u32]) -> Result<()> {
        for &v in members {
            checked_add(&mut self.counts[k][v as usize], 1, k)?;
        }
        Ok(())
    }

    fn combinatorial(&mut self, k: usize, p_members: &[u32], free: &[u32], binom: &Binomial) -> Result<()> {
        let t = k - p_members.len();
        let h = free.len();
        let w_p = binom.choose(h, t);
        if w_p > 0 {
            for &v in p_members {
                checked_add(&mut self.counts[k][v as usize], w_p, k)?;
            }
        }
        let w_free = binom.choose(h - 1, t - 1);
        if w_free > 0 {
            for &v in free {
                checked_add(&mut self.counts[k][v as usize], w_free, k)?;
            }
        }
        Ok(())
    }
}

/// Mode E: `count[k][(u,v)]`, how many k-cliques contain edge `(u,v)`. Keyed
/// by `(min, max)` pairs in a hash map, since `m ≪ n²` in typical inputs
/// (§9 "Per-edge accumulator").
#[derive(Debug, Clone, Default)]
pub struct PerEdgeAccumulator {
    counts: Vec<HashMap<(u32, u32), u64>>,
}

fn edge_key(a: u32, b: u32) -> (u32, u32) {
    if a < b {
        (a, b)
    } else {
        (b, a)
    }
}

impl PerEdgeAccumulator {
    pub fn new(k_max: usize) -> Self {
        Self {
            counts: vec![HashMap::new(); k_max + 1],
        }
    }

    /// `counts()[k]` maps an edge `(min(u,v), max(u,v))` to the number of
    /// k-cliques containing it.
    pub fn counts(&self) -> &[HashMap<(u32, u32), u64>] {
        &self.counts
    }

    fn bump(&mut self, k: usize, a: u32, b: u32, weight: u64) -> Result<()> {
        if weight == 0 {
            return Ok(());
        }
        let slot = self.counts[k].entry(edge_key(a, b)).or_insert(0);
        let next = slot.checked_add(weight).ok_or_else(|| error_stack::Report::new(EngineError::Overflow { k }))?;
        *slot = next;
        Ok(())
    }
}

impl Accumulator for PerEdgeAccumulator {
    fn commit(&mut self, k: usize, members: &[u32]) -> Result<()> {
        for i in 0..members.len() {
            for j in (i + 1)..members.len() {
                self.bump(k, members[i], members[j], 1)?;
            }
        }
        Ok(())
    }

    fn combinatorial(&mut self, k: usize, p_members: &[u32], free: &[u32], binom: &Binomial) -> Result<()> {
        let t = k - p_members.len();
        let h = free.len();

        let w_pp = binom.choose(h, t);
        if w_pp > 0 {
            for i in 0..p_members.len() {
                for j in (i + 1)..p_members.len() {
                    self.bump(k, p_members[i], p_members[j], w_pp)?;
                }
            }
        }

        let w_pf = binom.choose(h - 1, t - 1);
        if w_pf > 0 {
            for &pv in p_members {
                for &fv in free {
                    self.bump(k, pv, fv, w_pf)?;
                }
            }
        }

        if h >= 2 && t >= 2 {
            let w_ff = binom.choose(h - 2, t - 2);
            if w_ff > 0 {
                for i in 0..free.len() {
                    for j in (i + 1)..free.len() {
                        self.bump(k, free[i], free[j], w_ff)?;
                    }
                }
            }
        }

        Ok(())
    }
}

/// Posts the contribution of `p_members` combined with every nonempty subset
/// of the known-clique set `free`, for every `k` in `(s, k_max]` where
/// `s = p_members.len()`.
pub fn accumulate_free_set<A: Accumulator>(
    acc: &mut A,
    binom: &Binomial,
    p_members: &[u32],
    free: &[u32],
    k_max: usize,
) -> Result<()> {
    let s = p_members.len();
    for t in 1..=free.len() {
        let k = s + t;
        if k > k_max {
            break;
        }
        acc.combinatorial(k, p_members, free, binom)?;
    }
    Ok(())
}
