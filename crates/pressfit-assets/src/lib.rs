//! # pressfit-assets
//!
//! Asset formats consumed by the collision core, with load-time validation.
//!
//! Two line-oriented text formats:
//! - **SDF** — five header lines (bbox min, bbox max, cell size, resolution,
//!   cell count) followed by whitespace-separated distance values;
//!   `#` starts a trailing comment anywhere
//! - **NOFF** — OFF-style point cloud: header line, counts line, then one
//!   `x y z [nx ny nz]` vertex per line
//!
//! Malformed assets are fatal at load time: the system refuses to start
//! rather than feed garbage (and a later division by zero) to the solver.

pub mod noff;
pub mod point_cloud;
pub mod sdf;

pub use noff::{load_noff, parse_noff};
pub use point_cloud::{PointCloud, SurfacePoint};
pub use sdf::{load_sdf, parse_sdf};
