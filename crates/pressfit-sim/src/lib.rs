//! # pressfit-sim
//!
//! The per-tick collision loop and the offloaded evaluation worker.
//!
//! ## Key Types
//!
//! - [`RigidBodyState`] — position + orientation of one body, composed to a
//!   unit-scale world matrix for collision purposes
//! - [`CollisionLoop`] — the `Idle`/`Querying` state machine driven once
//!   per rendered frame; never blocks, applies worker results when they
//!   arrive, watchdog-recovers lost ones
//! - [`CollisionWorker`] — a dedicated background thread owning read-only
//!   copies of the grid and surface points; one query in flight at most
//! - [`protocol`] — the flat numeric messages crossing the worker boundary
//!
//! The render side only ever calls [`CollisionLoop::tick`]; everything else
//! happens on the worker thread.

pub mod body;
pub mod collision_loop;
pub mod protocol;
pub mod worker;

pub use body::RigidBodyState;
pub use collision_loop::{
    CollisionLoop, LoopConfig, LoopState, OrientationUpdate, QueryChannel, TickOutcome,
};
pub use protocol::{CollisionQuery, CollisionResponse};
pub use worker::{CollisionWorker, WorkerState};
