//! Exact k-clique counting via degeneracy ordering and pivoting, following
//! Jain & Seshadhri's "The Power of Pivoting for Exact Clique Counting"
//! (WSDM 2020).
//!
//! The crate is organized as a one-way pipeline: [`graph`] loads an edge
//! list, [`ordering`] computes a degeneracy ordering, [`adjacency`] exposes
//! it as fast neighbor queries, [`binomial`] precomputes the coefficients
//! the enumerator needs, [`enumerate`] walks the search tree and posts
//! contributions to one of the [`accumulate`] implementations, and
//! [`format`] writes the result. [`driver`] wires all of that together for
//! the [`cli`] surface the binary exposes.

pub mod accumulate;
pub mod adjacency;
pub mod binomial;
pub mod cli;
pub mod driver;
pub mod enumerate;
pub mod error;
pub mod format;
pub mod graph;
pub mod ordering;
