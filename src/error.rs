//! Error kinds for the engine, following §7 of the specification.
//!
//! Grounded on `petgraph`'s `error-stack` usage (`crates/core/src/error.rs`,
//! `crates/algorithms/src/shortest_paths/bellman_ford/error.rs`): a plain
//! `Context` enum with `Display`, wrapped in `error_stack::Report` at the
//! call site.

use core::fmt;

use error_stack::Context;

/// The four error kinds named in §7: argument, input, resource and overflow.
#[derive(Debug)]
pub enum EngineError {
    /// Wrong number of arguments, invalid flag value, or unknown mode.
    Argument(String),
    /// Unreadable file, malformed line, self-loop, duplicate edge, or an
    /// out-of-range vertex id.
    Input(String),
    /// Allocation failure while sizing a working buffer or table.
    Resource(String),
    /// A count would exceed the chosen counter width (`u64`).
    Overflow {
        /// The clique size `k` whose accumulator overflowed.
        k: usize,
    },
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Argument(msg) => write!(f, "argument error: {msg}"),
            Self::Input(msg) => write!(f, "input error: {msg}"),
            Self::Resource(msg) => write!(f, "resource error: {msg}"),
            Self::Overflow { k } => write!(f, "count overflow at k={k}"),
        }
    }
}

impl Context for EngineError {}

impl EngineError {
    /// The process exit code §7 assigns to this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Argument(_) => 2,
            Self::Input(_) => 3,
            Self::Resource(_) => 4,
            Self::Overflow { .. } => 5,
        }
    }
}

/// Shorthand for the engine's fallible return type.
pub type Result<T> = error_stack::Result<T, EngineError>;
