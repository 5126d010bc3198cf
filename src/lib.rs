//! pendsim - parametrically driven, damped pendulum
//!
//! Simulates a pendulum whose suspension point oscillates vertically and
//! derives energy diagnostics from its state, one fixed step at a time.
//!
//! # Architecture
//!
//! - [`solvers`]: the leapfrog [`Integrator`], which owns the two-slot
//!   [`PendulumState`] and advances it by exactly one `dt` per step
//! - [`diagnostics`]: energy estimates and the rolling [`EnergyHistory`]
//!   used for plotting
//! - [`session`]: [`SimulationSession`], a start/pause/restart wrapper for
//!   front ends that call [`SimulationSession::tick`] on a timer
//!
//! Everything is single-threaded and allocation-free per step. Failures are
//! confined to construction ([`PendulumError::InvalidParameter`]).
//!
//! # Example
//!
//! ```rust
//! use pendsim::prelude::*;
//!
//! let params = PendulumParameters::free(1.0, 1.0, 30.0)
//!     .with_drive(0.05, 40.0)
//!     .with_damping(0.1);
//! let mut pendulum = Integrator::new(params, 0.01)?;
//! let mut history = EnergyHistory::new(300);
//!
//! for _ in 0..500 {
//!     pendulum.step();
//!     let energy = pendulum.energy();
//!     history.push(display_sample(energy.total, 300.0, 50.0));
//! }
//!
//! let band = history.normalized(10.0, 290.0);
//! assert_eq!(band.len(), 300);
//! # Ok::<(), PendulumError>(())
//! ```

pub mod diagnostics;
pub mod session;
pub mod solvers;
pub mod validation;

pub use diagnostics::{display_sample, normalize, try_normalize, EnergyHistory, EnergyReport};
pub use pendsim_types::{PendulumParameters, SessionSettings, SimulationConfig, GRAVITY};
pub use session::{Frame, SessionStatus, SimulationSession};
pub use solvers::{Integrator, PendulumError, PendulumPosition, PendulumState, Result, Solver};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::diagnostics::{display_sample, normalize, EnergyHistory, EnergyReport};
    pub use crate::session::{Frame, SessionStatus, SimulationSession};
    pub use crate::solvers::{Integrator, PendulumError, PendulumPosition, Solver};
    pub use pendsim_types::{PendulumParameters, SessionSettings, SimulationConfig};
}
