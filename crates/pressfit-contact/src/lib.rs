//! # pressfit-contact
//!
//! Contact detection and correction for the press-fit puzzle.
//!
//! ## Key Types
//!
//! - [`ContactConfig`] — tunable correction strength, position/orientation
//!   split, and inertia model
//! - [`ContactSolver`] — one-shot impulse-style correction for the single
//!   deepest-penetrating sample point
//! - [`search`] — transforms every candidate surface point into the grid
//!   frame and finds the deepest penetration
//!
//! The solver is deliberately non-iterative: one contact, one correction
//! per query. Multiple simultaneous penetrations are not resolved jointly.

pub mod config;
pub mod search;
pub mod solver;

pub use config::{ContactConfig, InertiaModel};
pub use search::{deepest_penetration, DeepestSample};
pub use solver::{ContactDelta, ContactGeometry, ContactSolver};
