//! Per-frame collision loop state machine.
//!
//! Driven once per rendered frame by the render thread. `Idle` dispatches
//! a query when enough ticks have elapsed; `Querying` polls for the result
//! without ever blocking. A watchdog abandons requests whose response
//! never arrives, so a dropped message can never stall the loop forever.

use pressfit_types::{constants, PressfitError, PressfitResult, QueryStatus};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::body::RigidBodyState;
use crate::protocol::{CollisionQuery, CollisionResponse};

/// Transport seam between the loop and the worker.
///
/// `CollisionWorker` is the production implementation; tests substitute a
/// scripted stub.
pub trait QueryChannel {
    /// Dispatches a query to the worker.
    fn send(&self, query: CollisionQuery) -> PressfitResult<()>;

    /// Non-blocking poll for a finished response.
    fn try_recv(&self) -> Option<CollisionResponse>;
}

/// How an orientation correction is folded into the body's orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OrientationUpdate {
    /// Add the delta's components, then renormalize. The default: additive
    /// updates without renormalization denormalize over many frames.
    Normalized,
    /// Raw component-wise add, no renormalization. Behavioral parity with
    /// the additive solver variants.
    Additive,
}

/// Configuration for the collision loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoopConfig {
    /// Queries per second of frames: one query every `fps / rate_divisor`
    /// ticks.
    pub rate_divisor: f32,

    /// Ticks a query may stay unanswered before the watchdog abandons it.
    pub watchdog_ticks: u32,

    /// Runtime toggle: when false, collision results are received and
    /// discarded without touching the transform.
    pub correction_enabled: bool,

    /// Orientation correction mode.
    pub orientation_update: OrientationUpdate,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            rate_divisor: constants::QUERY_RATE_DIVISOR,
            watchdog_ticks: constants::WATCHDOG_TICKS,
            correction_enabled: true,
            orientation_update: OrientationUpdate::Normalized,
        }
    }
}

impl LoopConfig {
    /// Validates the configuration.
    pub fn validate(&self) -> PressfitResult<()> {
        if !self.rate_divisor.is_finite() || self.rate_divisor <= 0.0 {
            return Err(PressfitError::InvalidConfig(format!(
                "Rate divisor must be positive, got {}",
                self.rate_divisor
            )));
        }
        if self.watchdog_ticks == 0 {
            return Err(PressfitError::InvalidConfig(
                "Watchdog budget must be at least one tick".into(),
            ));
        }
        Ok(())
    }
}

/// The loop's two states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No outstanding query.
    Idle,
    /// A query was dispatched and its response is pending.
    Querying,
}

/// What one tick did, for callers that want to observe the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing happened this tick.
    Waiting,
    /// A query was dispatched to the worker.
    Dispatched,
    /// A response arrived with this status; deltas applied when the status
    /// is `Collision` and correction is enabled.
    Resolved(QueryStatus),
    /// The watchdog abandoned an unanswered query.
    TimedOut,
}

/// Per-frame collision loop.
pub struct CollisionLoop {
    config: LoopConfig,
    state: LoopState,
    /// Ticks since the last dispatch while idle.
    frame_counter: u32,
    /// Ticks spent waiting for the outstanding response.
    watchdog_counter: u32,
}

impl CollisionLoop {
    /// Creates a loop from a validated configuration.
    pub fn new(config: LoopConfig) -> PressfitResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            state: LoopState::Idle,
            frame_counter: 0,
            watchdog_counter: 0,
        })
    }

    /// Current state, for observation.
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// The active configuration.
    pub fn config(&self) -> &LoopConfig {
        &self.config
    }

    /// Toggles correction application at runtime.
    pub fn set_correction_enabled(&mut self, enabled: bool) {
        self.config.correction_enabled = enabled;
    }

    /// Advances the loop by one rendered frame.
    ///
    /// `fps` is the current measured frame rate, used to normalize the
    /// dispatch interval. Never blocks.
    pub fn tick(
        &mut self,
        fps: f32,
        moving: &mut RigidBodyState,
        statik: &RigidBodyState,
        channel: &impl QueryChannel,
    ) -> PressfitResult<TickOutcome> {
        match self.state {
            LoopState::Querying => {
                if let Some(response) = channel.try_recv() {
                    self.state = LoopState::Idle;
                    self.watchdog_counter = 0;
                    return Ok(self.handle_response(&response, moving));
                }

                self.watchdog_counter += 1;
                if self.watchdog_counter > self.config.watchdog_ticks {
                    warn!(
                        ticks = self.watchdog_counter,
                        "worker response lost, abandoning query"
                    );
                    self.state = LoopState::Idle;
                    self.watchdog_counter = 0;
                    self.frame_counter = 0;
                    return Ok(TickOutcome::TimedOut);
                }
                Ok(TickOutcome::Waiting)
            }
            LoopState::Idle => {
                self.frame_counter += 1;
                if (self.frame_counter as f32) <= fps / self.config.rate_divisor {
                    return Ok(TickOutcome::Waiting);
                }

                self.frame_counter = 0;
                let query = CollisionQuery::new(moving.world_matrix(), statik.world_matrix());
                channel.send(query)?;
                self.state = LoopState::Querying;
                trace!("collision query dispatched");
                Ok(TickOutcome::Dispatched)
            }
        }
    }

    /// Applies a worker response to the moveable body.
    fn handle_response(
        &mut self,
        response: &CollisionResponse,
        moving: &mut RigidBodyState,
    ) -> TickOutcome {
        let Some(status) = response.status() else {
            warn!(code = response.status, "unknown status code in response");
            return TickOutcome::Waiting;
        };

        if status == QueryStatus::Collision && self.config.correction_enabled {
            // Orientation first: applying position afterwards keeps the
            // just-computed translation from being re-rotated.
            let delta = response.orientation();
            moving.orientation = match self.config.orientation_update {
                OrientationUpdate::Normalized => {
                    (moving.orientation + delta).normalize()
                }
                OrientationUpdate::Additive => moving.orientation + delta,
            };
            moving.position += response.position();
            debug!(?status, "correction applied");
        }

        TickOutcome::Resolved(status)
    }
}
