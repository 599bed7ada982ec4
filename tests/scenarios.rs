//! Concrete scenarios from §8: small graphs with known clique counts.

use degeneracy_cliques::accumulate::{AggregateAccumulator, Accumulator};
use degeneracy_cliques::adjacency::Adjacency;
use degeneracy_cliques::binomial::Binomial;
use degeneracy_cliques::enumerate;
use degeneracy_cliques::graph;
use degeneracy_cliques::ordering::order_renamed;

fn aggregate_counts(edge_list: &str, k_max: usize) -> Vec<u64> {
    let g = graph::parse(edge_list).expect("valid graph");
    let renamed = order_renamed(&g);
    let adj = Adjacency::from_renamed(&renamed);
    let binom = Binomial::build(k_max + 2).expect("binomial table");
    let mut acc = AggregateAccumulator::new(k_max);
    enumerate::run(&adj, &binom, &mut acc, k_max, false).expect("enumeration");
    acc.counts().to_vec()
}

#[test]
fn path_p4() {
    let counts = aggregate_counts("4 6\n0 1\n1 0\n1 2\n2 1\n2 3\n3 2\n", 4);
    assert_eq!(counts[3], 0);
    assert_eq!(counts[4], 0);
}

#[test]
fn triangle_k3() {
    let counts = aggregate_counts("3 6\n0 1\n1 0\n1 2\n2 1\n0 2\n2 0\n", 3);
    assert_eq!(counts[3], 1);
}

#[test]
fn k4_complete() {
    let counts = aggregate_counts("4 12\n0 1\n1 0\n0 2\n2 0\n0 3\n3 0\n1 2\n2 1\n1 3\n3 1\n2 3\n3 2\n", 4);
    assert_eq!(counts[3], 4);
    assert_eq!(counts[4], 1);
}

#[test]
fn bowtie_two_triangles_sharing_a_vertex() {
    let counts = aggregate_counts(
        "5 12\n0 1\n1 0\n0 2\n2 0\n1 2\n2 1\n2 3\n3 2\n2 4\n4 2\n3 4\n4 3\n",
        4,
    );
    assert_eq!(counts[3], 2);
    assert_eq!(counts[4], 0);
}

#[test]
fn k5_minus_one_edge() {
    let mut edges = Vec::new();
    for u in 0..5u32 {
        for v in 0..5u32 {
            if u != v && !(u.min(v) == 0 && u.max(v) == 4) {
                edges.push((u, v));
            }
        }
    }
    let mut text = format!("5 {}\n", edges.len());
    for (u, v) in edges {
        text.push_str(&format!("{u} {v}\n"));
    }
    let counts = aggregate_counts(&text, 5);
    assert_eq!(counts[3], 9);
    assert_eq!(counts[4], 3);
    assert_eq!(counts[5], 0);
}

#[test]
fn two_disjoint_triangles() {
    let counts = aggregate_counts(
        "6 12\n0 1\n1 0\n0 2\n2 0\n1 2\n2 1\n3 4\n4 3\n3 5\n5 3\n4 5\n5 4\n",
        3,
    );
    assert_eq!(counts[3], 2);
}

#[test]
fn empty_graph_has_no_cliques_above_two() {
    let counts = aggregate_counts("3 0\n", 4);
    assert_eq!(counts[1], 3);
    assert_eq!(counts[2], 0);
    assert_eq!(counts[3], 0);
    assert_eq!(counts[4], 0);
}

#[test]
fn complete_graph_matches_binomial_coefficients() {
    let n = 6u32;
    let mut edges = Vec::new();
    for u in 0..n {
        for v in 0..n {
            if u != v {
                edges.push((u, v));
            }
        }
    }
    let mut text = format!("{n} {}\n", edges.len());
    for (u, v) in edges {
        text.push_str(&format!("{u} {v}\n"));
    }
    let counts = aggregate_counts(&text, n as usize);
    let binom = Binomial::build(n as usize).unwrap();
    for k in 1..=n as usize {
        assert_eq!(counts[k], binom.choose(n as usize, k));
    }
}
