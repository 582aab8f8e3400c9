//! Tuning constants and simulation defaults.

/// Default global scale applied to the contact correction impulse.
pub const DEFAULT_CORRECTION_SCALING: f32 = 1.0;

/// Default split of the correction between the position and orientation
/// channels. 0.5 halves the positional push.
pub const DEFAULT_CORRECTION_FACTOR: f32 = 0.5;

/// Default penetration threshold (meters). A sample must fall strictly
/// below this distance to count as a contact.
pub const DEFAULT_CONTACT_THRESHOLD: f32 = 0.0;

/// Target frame rate the loop intervals are normalized against.
pub const TARGET_FRAME_RATE: f32 = 144.0;

/// Queries dispatched per second of rendered frames: one query every
/// `fps / QUERY_RATE_DIVISOR` ticks.
pub const QUERY_RATE_DIVISOR: f32 = 50.0;

/// Watchdog budget in ticks before a lost worker response is abandoned.
/// Roughly five seconds at the target frame rate.
pub const WATCHDOG_TICKS: u32 = (TARGET_FRAME_RATE as u32) * 5;

/// Epsilon for floating-point comparisons.
pub const EPSILON: f32 = 1.0e-7;
