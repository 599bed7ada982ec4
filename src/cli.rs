//! Command-line surface (§6), implemented with `clap`'s derive API — the
//! pattern `other_examples/…funkdigen2__src-main.rs.rs` uses for a small,
//! flag-driven graph tool.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Counting mode (§1): aggregate, per-vertex, or per-edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Total k-clique counts.
    A,
    /// k-clique counts containing each vertex.
    V,
    /// k-clique counts containing each edge.
    E,
}

/// Output detail level (§6 `-d`). `examples/original_source` validates
/// `flag_d` against the same `0..=2` range and threads it straight through
/// to `runAndPrintStatsCliques` (whose body is outside the filtered pack,
/// so `2`'s exact behavior isn't recoverable from it); `Files`/`Verbose`
/// here resolve that open question per DESIGN.md ("`-d 2` semantics"): both
/// write files, `Verbose` just logs more along the way. Not itself a
/// `clap::ValueEnum` — §6 fixes `-d`'s values as the literal integers
/// `0|1|2`, so [`Args::data`] stays a plain `u8` like `-k`/`-o` and is
/// translated to this enum after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputDetail {
    /// Stdout only.
    Stdout,
    /// Write per-vertex/per-edge files.
    Files,
    /// Write files, with additional `log::debug!` progress detail.
    Verbose,
}

/// Exact k-clique counting via degeneracy ordering and pivoting.
#[derive(Debug, Parser)]
#[command(name = "degeneracy-cliques", version, about)]
pub struct Args {
    /// Path to the edge-list input file.
    #[arg(short = 'i', long = "input")]
    pub input: PathBuf,

    /// Counting mode: A (aggregate), V (per-vertex), or E (per-edge).
    #[arg(short = 't', long = "type", value_enum)]
    pub mode: Mode,

    /// Maximum clique size K; 0 means "up to degeneracy + 1".
    #[arg(short = 'k', long = "max-k", default_value_t = 0)]
    pub max_k: u32,

    /// Output control: 0 = stdout only, 1 = write files, 2 = files + verbose logging.
    #[arg(short = 'd', long = "data", default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=2))]
    pub data: u8,

    /// Enable the near-clique optimization path.
    #[arg(short = 'o', long = "optimize", default_value_t = 0)]
    pub optimize: u8,
}

impl Args {
    /// Whether `-o` requested the near-clique shortcut.
    pub fn optimize_enabled(&self) -> bool {
        self.optimize != 0
    }

    /// `-d`'s value as [`OutputDetail`]. clap's range validator already
    /// rejects anything outside `0..=2` during parsing, so every value
    /// reaching here is valid.
    pub fn output_detail(&self) -> OutputDetail {
        match self.data {
            0 => OutputDetail::Stdout,
            1 => OutputDetail::Files,
            _ => OutputDetail::Verbose,
        }
    }
}
