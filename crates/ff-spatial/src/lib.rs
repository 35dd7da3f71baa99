//! `ff-spatial`: neighbor discovery on the simulation plane.
//!
//! # Crate layout
//!
//! | Module    | Contents                                                      |
//! |-----------|---------------------------------------------------------------|
//! | [`index`] | `NeighborIndex` trait, query-radius validation                |
//! | [`scan`]  | `ScanIndex`, O(1) insert, O(n) brute-force query              |
//! | [`rtree`] | `RTreeIndex`, R-tree (via `rstar`), O(log n) insert/relocate  |
//! | [`error`] | `SpatialError`, `SpatialResult<T>`                            |
//!
//! Both indexes answer the same contract and return neighbor ids in
//! ascending `AgentId` order, so swapping one for the other never changes
//! the outcome of a seeded run.  `ScanIndex` is the better choice for the
//! tens-to-hundreds populations this simulation targets; `RTreeIndex` wins
//! once populations grow into the thousands.

pub mod error;
pub mod index;
pub mod rtree;
pub mod scan;

#[cfg(test)]
mod tests;

pub use error::{SpatialError, SpatialResult};
pub use index::NeighborIndex;
pub use rtree::RTreeIndex;
pub use scan::ScanIndex;
