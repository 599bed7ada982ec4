//! Output formatter (§4.5, §6): writes aggregate counts to stdout, or
//! per-vertex/per-edge counts to files named from the input's basename.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use error_stack::ResultExt;
use hashbrown::HashMap;

use crate::error::{EngineError, Result};

/// The smallest `k` the engine ever reports (§1: "for each k in [3, K]").
pub const MIN_REPORTED_K: usize = 3;

/// Strips the input path's directory and final extension, per §6's file
/// naming convention.
pub fn basename(path: &Path) -> String {
    path.file_stem().map(|s| s.to_string_lossy().into_owned()).unwrap_or_else(|| "output".to_string())
}

/// Writes the mode-A summary: one `k<TAB>count` line per `k` in
/// `[MIN_REPORTED_K, k_max]`.
pub fn write_aggregate<W: Write>(mut out: W, counts: &[u64], k_max: usize) -> Result<()> {
    for k in MIN_REPORTED_K..=k_max {
        writeln!(out, "{k}\t{}", counts.get(k).copied().unwrap_or(0))
            .change_context(EngineError::Resource("failed writing stdout".into()))?;
    }
    Ok(())
}

/// Writes the mode-V file `<basename>_kcliques_V.txt`: one
/// `k<TAB>vertex<TAB>count` line per nonzero entry, vertices translated back
/// to their original ids.
pub fn write_per_vertex(dir: &Path, base: &str, counts: &[Vec<u64>], k_max: usize, original_id: &[u32]) -> Result<()> {
    let path = dir.join(format!("{base}_kcliques_V.txt"));
    let file = File::create(&path)
        .change_context(EngineError::Resource(format!("cannot create {}", path.display())))?;
    let mut out = io::BufWriter::new(file);
    for k in MIN_REPORTED_K..=k_max.min(counts.len().saturating_sub(1)) {
        for (renamed_v, &count) in counts[k].iter().enumerate() {
            if count == 0 {
                continue;
            }
            let original = original_id[renamed_v];
            writeln!(out, "{k}\t{original}\t{count}")
                .change_context(EngineError::Resource(format!("failed writing {}", path.display())))?;
        }
    }
    Ok(())
}

/// Writes the mode-E file `<basename>_kcliques_E.txt`: one
/// `k<TAB>u,v<TAB>count` line per nonzero entry.
pub fn write_per_edge(
    dir: &Path,
    base: &str,
    counts: &[HashMap<(u32, u32), u64>],
    k_max: usize,
    original_id: &[u32],
) -> Result<()> {
    let path = dir.join(format!("{base}_kcliques_E.txt"));
    let file = File::create(&path)
        .change_context(EngineError::Resource(format!("cannot create {}", path.display())))?;
    let mut out = io::BufWriter::new(file);
    for k in MIN_REPORTED_K..=k_max.min(counts.len().saturating_sub(1)) {
        let mut entries: Vec<_> = counts[k].iter().collect();
        entries.sort_unstable_by_key(|(&(u, v), _)| (original_id[u as usize], original_id[v as usize]));
        for (&(u, v), &count) in entries {
            let (ou, ov) = (original_id[u as usize], original_id[v as usize]);
            writeln!(out, "{k}\t{ou},{ov}\t{count}")
                .change_context(EngineError::Resource(format!("failed writing {}", path.display())))?;
        }
    }
    Ok(())
}
