//! Shared types for pendsim simulations.
//!
//! This crate defines the plain configuration data exchanged between the
//! integration core and whatever drives it:
//! - Physical parameters of the driven pendulum
//! - Session settings (frame rate, playback speed, plot geometry)
//! - The combined on-disk configuration

mod config;
mod params;
mod settings;

pub use config::*;
pub use params::*;
pub use settings::*;

/// Standard gravity in m/s²
pub const GRAVITY: f64 = 9.80665;

/// Allowed initial angle range in degrees (inclusive)
pub const INITIAL_ANGLE_RANGE_DEG: (f64, f64) = (-90.0, 90.0);

/// Allowed damping coefficient range (inclusive)
pub const DAMPING_RANGE: (f64, f64) = (0.0, 1.0);

/// Upper bound for playback speed; the lower bound is exclusive zero
pub const MAX_PLAYBACK_SPEED: f64 = 3.0;

/// Default frame rate of the external scheduler
pub const DEFAULT_FPS: f64 = 100.0;

/// Default energy units per plot unit
pub const DEFAULT_ENERGY_SCALE: f64 = 50.0;
