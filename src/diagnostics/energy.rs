//! Energy diagnostics
//!
//! Two estimates are provided:
//!
//! - [`energy_of`] is the display energy. It takes the angular velocity
//!   from a finite difference of the two stored angle samples and the
//!   height from the last emitted bob position, so its kinetic and
//!   potential parts are staggered by half a step. It is what gets plotted.
//! - [`mechanical_energy`] evaluates the moving-support Lagrangian on the
//!   integrator's own `(φ, φ')` pair at the current time. Use it to check
//!   conservation and dissipation.
//!
//! Both use the source frame where the bob height is `susY + L·cos φ` and
//! `U = m·g·y`.

use pendsim_types::GRAVITY;
use serde::Serialize;

use crate::solvers::{Integrator, PendulumState};

/// Kinetic, potential and total energy in joules
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct EnergyReport {
    pub kinetic: f64,
    pub potential: f64,
    pub total: f64,
}

impl EnergyReport {
    fn new(kinetic: f64, potential: f64) -> Self {
        Self {
            kinetic,
            potential,
            total: kinetic + potential,
        }
    }
}

/// First-order estimate of `|φ'|` from the two stored angle samples
///
/// This is `|φ_1 − φ_0| / dt` over the raw storage slots. It approximates
/// the speed at the midpoint of the last step and is not the leapfrog
/// velocity. Before the first step slot 1 is still zero, so the value is
/// meaningless until [`Solver::step`](crate::Solver::step) has run once.
pub fn angular_velocity_estimate(state: &PendulumState) -> f64 {
    (state.angle_slot(1) - state.angle_slot(0)).abs() / state.dt()
}

/// `U = m·g·ballY`
pub fn potential_energy(pendulum: &Integrator) -> f64 {
    pendulum.params().bob_mass * GRAVITY * pendulum.position().ball_y()
}

/// Display kinetic energy
///
/// ```text
/// T = ½·m·L²·φ'² + m·A·L·ω·sin(ωt)·sin(φ_1) + ½·m·A²·ω²·sin²(ωt)
/// ```
///
/// `φ'` comes from [`angular_velocity_estimate`] and `φ_1` is storage
/// slot 1, which holds the newest angle after odd steps and the previous
/// one after even steps.
pub fn kinetic_energy(pendulum: &Integrator) -> f64 {
    let p = pendulum.params();
    let state = pendulum.state();
    let (m, l, a, w) = (
        p.bob_mass,
        p.suspension_length,
        p.drive_amplitude,
        p.drive_angular_velocity,
    );

    let phi_dot = angular_velocity_estimate(state);
    let drive_phase = (w * state.elapsed_time()).sin();

    let rotation = m * l * l * phi_dot * phi_dot / 2.0;
    let coupling = m * a * l * w * drive_phase * state.angle_slot(1).sin();
    let support = m * a * a * w * w * drive_phase * drive_phase / 2.0;

    rotation + coupling + support
}

/// Display energy of the current state
pub fn energy_of(pendulum: &Integrator) -> EnergyReport {
    EnergyReport::new(kinetic_energy(pendulum), potential_energy(pendulum))
}

/// Energy of the integrator's `(φ_curr, v_curr)` at the current time
///
/// The bob velocity is `(L·cos φ·φ', −A·ω·sin(ωt) − L·sin φ·φ')`, giving
///
/// ```text
/// T = ½·m·(L²·φ'² + 2·A·ω·L·sin(ωt)·sin φ·φ' + A²·ω²·sin²(ωt))
/// U = m·g·(susY(t) + L·cos φ)
/// ```
pub fn mechanical_energy(pendulum: &Integrator) -> EnergyReport {
    let p = pendulum.params();
    let state = pendulum.state();
    let (m, l, a, w) = (
        p.bob_mass,
        p.suspension_length,
        p.drive_amplitude,
        p.drive_angular_velocity,
    );

    let t = state.elapsed_time();
    let phi = state.angle_curr();
    let phi_dot = state.velocity_curr();
    let support_speed = a * w * (w * t).sin();

    let kinetic = 0.5
        * m
        * (l * l * phi_dot * phi_dot
            + 2.0 * support_speed * l * phi.sin() * phi_dot
            + support_speed * support_speed);
    let potential = m * GRAVITY * (pendulum.suspension_y(t) + l * phi.cos());

    EnergyReport::new(kinetic, potential)
}
