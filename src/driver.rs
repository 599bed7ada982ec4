//! Driver (§4.6): load → order → binomial table → enumerate → emit.

use std::path::Path;

use error_stack::Report;
use log::debug;

use crate::accumulate::{AggregateAccumulator, PerEdgeAccumulator, PerVertexAccumulator};
use crate::adjacency::Adjacency;
use crate::binomial::Binomial;
use crate::cli::{Args, Mode, OutputDetail};
use crate::error::{EngineError, Result};
use crate::format;
use crate::graph;
use crate::ordering;

/// Runs the full pipeline for one CLI invocation.
pub fn run(args: &Args) -> Result<()> {
    debug!("New code.");
    debug!("about to call runAndPrint.");

    let g = graph::load(&args.input)?;
    debug!("loaded graph: n={} m={}", g.n(), g.m());

    let renamed = ordering::order_renamed(&g);
    debug!("degeneracy ordering computed: d={}", renamed.degeneracy);

    let k_eff = if args.max_k > 0 {
        args.max_k as usize
    } else {
        renamed.degeneracy as usize + 1
    };
    if k_eff < 1 {
        return Err(Report::new(EngineError::Argument("max clique size must be at least 1".into())));
    }

    let n_max = k_eff.max(renamed.degeneracy as usize + 1) + 2;
    let binom = Binomial::build(n_max)?;
    let adj = Adjacency::from_renamed(&renamed);

    match args.mode {
        Mode::A => {
            let mut acc = AggregateAccumulator::new(k_eff);
            crate::enumerate::run(&adj, &binom, &mut acc, k_eff, args.optimize_enabled())?;
            format::write_aggregate(std::io::stdout(), acc.counts(), k_eff)?;
        }
        Mode::V => {
            let mut acc = PerVertexAccumulator::new(g.n(), k_eff);
            crate::enumerate::run(&adj, &binom, &mut acc, k_eff, args.optimize_enabled())?;
            write_mode_output(args, k_eff, |dir, base| {
                format::write_per_vertex(dir, base, acc.counts(), k_eff, &renamed.original_id)
            })?;
        }
        Mode::E => {
            let mut acc = PerEdgeAccumulator::new(k_eff);
            crate::enumerate::run(&adj, &binom, &mut acc, k_eff, args.optimize_enabled())?;
            write_mode_output(args, k_eff, |dir, base| {
                format::write_per_edge(dir, base, acc.counts(), k_eff, &renamed.original_id)
            })?;
        }
    }

    println!("done");
    Ok(())
}

fn write_mode_output(args: &Args, k_eff: usize, write: impl FnOnce(&Path, &str) -> Result<()>) -> Result<()> {
    match args.output_detail() {
        OutputDetail::Stdout => {
            debug!("mode V/E requested with -d 0: counts computed but no file written (k_max={k_eff})");
            Ok(())
        }
        detail @ (OutputDetail::Files | OutputDetail::Verbose) => {
            if detail == OutputDetail::Verbose {
                debug!("verbose output requested (-d 2): writing files with extra progress logging");
            }
            let dir = args.input.parent().unwrap_or_else(|| Path::new("."));
            let base = format::basename(&args.input);
            write(dir, &base)
        }
    }
}
