//! Numerical integration
//!
//! Provides the fixed-step leapfrog integrator for the driven pendulum
//! together with the shared solver trait and error types.

mod base;
mod leapfrog;

pub use base::*;
pub use leapfrog::{Integrator, PendulumPosition, PendulumState};
