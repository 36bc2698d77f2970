#![forbid(unsafe_code)]

//! Percolation on an N-by-N grid and a Monte Carlo estimate of its threshold.

mod error;
mod grid;
mod percolation;
mod stats;
mod union_find;

pub use error::{Axis, Error, Result};
pub use grid::{Site, SiteGrid};
pub use percolation::{Percolation, TOP};
pub use stats::{mean, stddev, PercolationStats, CONFIDENCE_95};
pub use union_find::UnionFind;
