//! Universal invariants from §8, checked against randomly generated small
//! simple graphs via `proptest`.

use proptest::prelude::*;

use degeneracy_cliques::accumulate::{AggregateAccumulator, Accumulator, PerEdgeAccumulator, PerVertexAccumulator};
use degeneracy_cliques::adjacency::Adjacency;
use degeneracy_cliques::binomial::Binomial;
use degeneracy_cliques::enumerate;
use degeneracy_cliques::graph::{self, Graph};
use degeneracy_cliques::ordering::order_renamed;

fn build_graph(n: usize, present: &[bool]) -> Graph {
    let mut edges = Vec::new();
    let mut idx = 0;
    for u in 0..n {
        for v in (u + 1)..n {
            if present[idx] {
                edges.push((u, v));
            }
            idx += 1;
        }
    }
    let mut text = format!("{n} {}\n", edges.len() * 2);
    for (u, v) in &edges {
        text.push_str(&format!("{u} {v}\n{v} {u}\n"));
    }
    graph::parse(&text).expect("generated graph is well-formed")
}

fn random_small_graph() -> impl Strategy<Value = Graph> {
    (3usize..8).prop_flat_map(|n| {
        let pair_count = n * (n - 1) / 2;
        prop::collection::vec(any::<bool>(), pair_count).prop_map(move |present| build_graph(n, &present))
    })
}

proptest! {
    #[test]
    fn later_neighborhoods_are_bounded_by_degeneracy(g in random_small_graph()) {
        let renamed = order_renamed(&g);
        for later in &renamed.later {
            prop_assert!(later.len() as u32 <= renamed.degeneracy);
        }
    }

    #[test]
    fn later_sizes_sum_to_edge_count(g in random_small_graph()) {
        let renamed = order_renamed(&g);
        let total: usize = renamed.later.iter().map(Vec::len).sum();
        prop_assert_eq!(total, g.m());
    }

    #[test]
    fn aggregate_low_order_counts_match_graph_size(g in random_small_graph()) {
        let renamed = order_renamed(&g);
        let adj = Adjacency::from_renamed(&renamed);
        let k_max = renamed.degeneracy as usize + 1;
        let binom = Binomial::build(k_max + 2).unwrap();
        let mut acc = AggregateAccumulator::new(k_max.max(2));
        enumerate::run(&adj, &binom, &mut acc, k_max.max(2), false).unwrap();
        prop_assert_eq!(acc.counts()[1], g.n() as u64);
        prop_assert_eq!(acc.counts()[2], g.m() as u64);
    }

    #[test]
    fn per_vertex_counts_sum_to_k_times_aggregate(g in random_small_graph()) {
        let renamed = order_renamed(&g);
        let adj = Adjacency::from_renamed(&renamed);
        let k_max = (renamed.degeneracy as usize + 1).max(2);
        let binom = Binomial::build(k_max + 2).unwrap();

        let mut agg = AggregateAccumulator::new(k_max);
        enumerate::run(&adj, &binom, &mut agg, k_max, false).unwrap();

        let mut pv = PerVertexAccumulator::new(g.n(), k_max);
        enumerate::run(&adj, &binom, &mut pv, k_max, false).unwrap();

        for k in 1..=k_max {
            let sum: u64 = pv.counts()[k].iter().sum();
            prop_assert_eq!(sum, k as u64 * agg.counts()[k]);
        }
    }

    #[test]
    fn per_edge_counts_sum_to_c2_times_aggregate(g in random_small_graph()) {
        let renamed = order_renamed(&g);
        let adj = Adjacency::from_renamed(&renamed);
        let k_max = (renamed.degeneracy as usize + 1).max(2);
        let binom = Binomial::build(k_max + 2).unwrap();

        let mut agg = AggregateAccumulator::new(k_max);
        enumerate::run(&adj, &binom, &mut agg, k_max, false).unwrap();

        let mut pe = PerEdgeAccumulator::new(k_max);
        enumerate::run(&adj, &binom, &mut pe, k_max, false).unwrap();

        for k in 2..=k_max {
            let sum: u64 = pe.counts()[k].values().sum();
            prop_assert_eq!(sum, binom.choose(k, 2) * agg.counts()[k]);
        }
    }

    #[test]
    fn optimize_flag_agrees_with_general_path(g in random_small_graph()) {
        let renamed = order_renamed(&g);
        let adj = Adjacency::from_renamed(&renamed);
        let k_max = (renamed.degeneracy as usize + 1).max(2);
        let binom = Binomial::build(k_max + 2).unwrap();

        let mut general = AggregateAccumulator::new(k_max);
        enumerate::run(&adj, &binom, &mut general, k_max, false).unwrap();

        let mut optimized = AggregateAccumulator::new(k_max);
        enumerate::run(&adj, &binom, &mut optimized, k_max, true).unwrap();

        prop_assert_eq!(general.counts(), optimized.counts());
    }
}
