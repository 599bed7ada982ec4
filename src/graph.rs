//! Graph loader (§4.1): parses an edge list into a symmetric adjacency
//! representation, treated as an I/O adapter per §1 ("only their interfaces
//! are specified").

use std::fs;
use std::path::Path;

use error_stack::{Report, ResultExt};
use hashbrown::HashSet;

use crate::error::{EngineError, Result};

/// An undirected simple graph, stored as sorted, deduplicated adjacency
/// lists indexed by original vertex id (§3 "Graph G").
#[derive(Debug, Clone)]
pub struct Graph {
    n: usize,
    adjacency: Vec<Vec<u32>>,
}

impl Graph {
    /// Builds a graph from a set of (already validated, symmetrized)
    /// directed edges, deduplicating and sorting each vertex's neighbor list.
    fn from_half_edges(n: usize, half_edges: Vec<HashSet<u32>>) -> Self {
        let adjacency = half_edges
            .into_iter()
            .map(|set| {
                let mut v: Vec<u32> = set.into_iter().collect();
                v.sort_unstable();
                v
            })
            .collect();
        Self { n, adjacency }
    }

    /// Number of vertices.
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of undirected edges.
    pub fn m(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Sorted neighbor ids of `v`.
    pub fn neighbors(&self, v: u32) -> &[u32] {
        &self.adjacency[v as usize]
    }
}

/// Parses the ASCII edge-list format described in §6: a header line `n m`
/// followed by `m` (or fewer, if edges were given in one direction only)
/// lines `u v`.
pub fn load(path: &Path) -> Result<Graph> {
    let text = fs::read_to_string(path)
        .change_context(EngineError::Input(format!("cannot read {}", path.display())))?;
    parse(&text)
}

/// Parses graph text directly, bypassing the filesystem. Exposed for tests
/// and benchmarks that want a graph without a file on disk.
pub fn parse(text: &str) -> Result<Graph> {
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| Report::new(EngineError::Input("empty input file".into())))?;
    let mut header_fields = header.split_whitespace();
    let n: usize = parse_field(header_fields.next(), "n")?;
    let _m: usize = parse_field(header_fields.next(), "m")?;

    let mut half_edges: Vec<HashSet<u32>> = vec![HashSet::new(); n];
    let mut seen_directed: HashSet<(u32, u32)> = HashSet::new();

    for line in lines {
        let mut fields = line.split_whitespace();
        let u: u32 = parse_field(fields.next(), "u")?;
        let v: u32 = parse_field(fields.next(), "v")?;

        if u as usize >= n || v as usize >= n {
            return Err(Report::new(EngineError::Input(format!(
                "vertex id out of range: {u} or {v} (n={n})"
            ))));
        }
        if u == v {
            return Err(Report::new(EngineError::Input(format!(
                "self-loop at vertex {u}"
            ))));
        }
        if !seen_directed.insert((u, v)) {
            return Err(Report::new(EngineError::Input(format!(
                "duplicate edge ({u}, {v})"
            ))));
        }

        half_edges[u as usize].insert(v);
        half_edges[v as usize].insert(u);
    }

    Ok(Graph::from_half_edges(n, half_edges))
}

fn parse_field(field: Option<&str>, name: &str) -> Result<u32> {
    field
        .ok_or_else(|| Report::new(EngineError::Input(format!("missing field {name}"))))?
        .parse::<u32>()
        .change_context(EngineError::Input(format!("malformed field {name}")))
}
