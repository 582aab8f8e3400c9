//! # pressfit-field
//!
//! The precomputed signed-distance-field grid and its spatial sampler.
//!
//! ## Key Types
//!
//! - [`SdfGrid`] — immutable uniform voxel grid of signed distances,
//!   loaded once at startup and shared read-only afterwards
//! - [`sampler`] — world-point → voxel-index mapping and O(1) distance
//!   lookup (nearest-neighbor, no interpolation)
//!
//! Sampling a point outside the grid's bounding box is a normal outcome,
//! reported as `None` — never an error, and never conflated with a stored
//! distance of zero.

pub mod grid;
pub mod sampler;

pub use grid::SdfGrid;
