//! Offloaded collision evaluation.
//!
//! One dedicated background thread performs the sampler + solver work so
//! the render thread never blocks. The worker owns its copies of the grid
//! and surface points — moved in at startup, immutable afterwards, no
//! shared mutable state across messages. Communication is two `mpsc`
//! channels; the loop's state machine guarantees at most one query in
//! flight.

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use pressfit_assets::PointCloud;
use pressfit_contact::{deepest_penetration, ContactGeometry, ContactSolver, DeepestSample};
use pressfit_field::{sampler, SdfGrid};
use pressfit_math::{transform_normal, LocalFrame, Mat4, Vec3};
use pressfit_types::{PressfitError, PressfitResult, QueryStatus};
use tracing::{debug, warn};

use crate::collision_loop::QueryChannel;
use crate::protocol::{CollisionQuery, CollisionResponse};

/// Everything the worker needs, owned by the worker task.
///
/// Replaces the mutable-global pattern: the state is constructed on the
/// render side, validated, then moved into the worker thread whole.
pub struct WorkerState {
    grid: SdfGrid,
    cloud: PointCloud,
    solver: ContactSolver,
    /// Distance a sample must fall strictly below to count as a contact.
    contact_threshold: f32,
    /// Static body's frame with cached inverse; refreshed only when the
    /// incoming matrix actually changes.
    static_frame: LocalFrame,
}

impl WorkerState {
    /// Assembles validated worker state.
    pub fn new(
        grid: SdfGrid,
        cloud: PointCloud,
        solver: ContactSolver,
        contact_threshold: f32,
    ) -> PressfitResult<Self> {
        if cloud.is_empty() {
            return Err(PressfitError::InvalidAsset(
                "Surface point cloud is empty; nothing to test".into(),
            ));
        }
        Ok(Self {
            grid,
            cloud,
            solver,
            contact_threshold,
            static_frame: LocalFrame::default(),
        })
    }

    /// Evaluates one query end-to-end: deepest-penetration scan, then the
    /// contact solver if anything penetrates. Pure computation, no I/O.
    pub fn evaluate(&mut self, query: &CollisionQuery) -> CollisionResponse {
        let moving_world = query.moving();
        let static_world = query.statik();

        if self.static_frame.world() != static_world {
            self.static_frame.set_world(static_world);
        }

        let outcome = deepest_penetration(
            &self.cloud,
            moving_world,
            &self.static_frame,
            &self.grid,
            self.contact_threshold,
        );

        let (index, distance, point_world) = match outcome {
            DeepestSample::OutOfBounds => {
                return CollisionResponse::empty(QueryStatus::OutOfBounds)
            }
            DeepestSample::Clear { .. } => {
                return CollisionResponse::empty(QueryStatus::NoCollision)
            }
            DeepestSample::Contact {
                index,
                distance,
                point_world,
            } => (index, distance, point_world),
        };

        let Some(normal) = self.contact_normal(index, point_world, moving_world, static_world)
        else {
            // A contact with no usable normal cannot be corrected; report
            // it as no collision and let the next query retry.
            warn!(index, distance, "contact without a usable normal, skipping");
            return CollisionResponse::empty(QueryStatus::NoCollision);
        };

        let (_, orientation, root_point) = moving_world.to_scale_rotation_translation();
        let delta = self.solver.resolve(
            &ContactGeometry {
                penetration: distance,
                bbox_min: self.grid.min(),
                bbox_max: self.grid.max(),
                contact_point: point_world,
                root_point,
                normal,
            },
            orientation,
        );

        debug!(index, distance, "collision resolved");
        CollisionResponse::collision(delta.position, delta.orientation)
    }

    /// World-space outward normal at the winning sample: the authored
    /// point normal when present, otherwise the field gradient.
    fn contact_normal(
        &self,
        index: usize,
        point_world: Vec3,
        moving_world: Mat4,
        static_world: Mat4,
    ) -> Option<Vec3> {
        let point = &self.cloud.points[index];
        if point.has_normal() {
            let n = transform_normal(point.normal(), moving_world);
            if n.length_squared() > 0.0 {
                return Some(n);
            }
        }

        let local = self.static_frame.to_local(point_world);
        let gradient = sampler::gradient_normal(local, &self.grid)?;
        let n = transform_normal(gradient, static_world);
        (n.length_squared() > 0.0).then_some(n)
    }
}

/// Handle to the running worker thread.
///
/// Dropping the handle closes the query channel; the worker drains and
/// exits, and the thread is joined.
pub struct CollisionWorker {
    query_tx: Sender<CollisionQuery>,
    result_rx: Receiver<CollisionResponse>,
    thread: Option<JoinHandle<()>>,
}

impl CollisionWorker {
    /// Spawns the worker thread, moving the state into it.
    pub fn spawn(mut state: WorkerState) -> PressfitResult<Self> {
        let (query_tx, query_rx) = mpsc::channel::<CollisionQuery>();
        let (result_tx, result_rx) = mpsc::channel::<CollisionResponse>();

        let thread = thread::Builder::new()
            .name("pressfit-collision".into())
            .spawn(move || {
                while let Ok(query) = query_rx.recv() {
                    let response = state.evaluate(&query);
                    if result_tx.send(response).is_err() {
                        break;
                    }
                }
                debug!("collision worker shutting down");
            })?;

        Ok(Self {
            query_tx,
            result_rx,
            thread: Some(thread),
        })
    }
}

impl QueryChannel for CollisionWorker {
    fn send(&self, query: CollisionQuery) -> PressfitResult<()> {
        self.query_tx
            .send(query)
            .map_err(|_| PressfitError::ChannelClosed("collision worker query channel".into()))
    }

    fn try_recv(&self) -> Option<CollisionResponse> {
        match self.result_rx.try_recv() {
            Ok(response) => Some(response),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }
}

impl Drop for CollisionWorker {
    fn drop(&mut self) {
        // Close the query channel so the worker's recv() fails and it exits.
        let (dead_tx, _) = mpsc::channel();
        self.query_tx = dead_tx;
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
    }
}
