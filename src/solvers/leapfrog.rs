//! Leapfrog integrator for the parametrically driven, damped pendulum

use nalgebra::Point2;
use pendsim_types::{PendulumParameters, GRAVITY};
use serde::Serialize;

use super::{PendulumError, Result, Solver};
use crate::diagnostics::{self, EnergyReport};
use crate::validation::{check_physical, check_step_size};

/// Two-slot integration state
///
/// `angle`, `velocity` and `accel` each hold two samples. `parity` selects
/// the slot holding the current value; the other slot holds the previous
/// one and is overwritten by the next step. Stepping flips `parity` instead
/// of moving data.
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumState {
    angle: [f64; 2],
    velocity: [f64; 2],
    accel: [f64; 2],
    parity: usize,
    elapsed_time: f64,
    dt: f64,
}

impl PendulumState {
    fn new(initial_angle: f64, dt: f64) -> Self {
        Self {
            angle: [initial_angle, 0.0],
            velocity: [0.0; 2],
            accel: [0.0; 2],
            parity: 0,
            elapsed_time: 0.0,
            dt,
        }
    }

    fn curr(&self) -> usize {
        self.parity
    }

    fn next(&self) -> usize {
        1 - self.parity
    }

    /// Current angle in radians
    pub fn angle_curr(&self) -> f64 {
        self.angle[self.curr()]
    }

    /// Previous angle in radians
    pub fn angle_prev(&self) -> f64 {
        self.angle[self.next()]
    }

    /// Raw angle storage slot, independent of parity
    pub fn angle_slot(&self, slot: usize) -> f64 {
        self.angle[slot]
    }

    /// Current angular velocity in rad/s
    pub fn velocity_curr(&self) -> f64 {
        self.velocity[self.curr()]
    }

    /// Previous angular velocity in rad/s
    pub fn velocity_prev(&self) -> f64 {
        self.velocity[self.next()]
    }

    /// Acceleration evaluated at the current angle, in rad/s²
    pub fn accel_curr(&self) -> f64 {
        self.accel[self.curr()]
    }

    /// Acceleration evaluated at the previous angle, in rad/s²
    pub fn accel_prev(&self) -> f64 {
        self.accel[self.next()]
    }

    /// Seconds since the start of the run
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    /// Fixed step size in seconds
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Index of the slot holding the current values (0 or 1)
    pub fn parity(&self) -> usize {
        self.parity
    }
}

/// Suspension and bob positions
///
/// `y` follows the source frame: the bob sits at `susY + L·cos φ`, so
/// potential energy is `m·g·y`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PendulumPosition {
    /// Bob position
    pub ball: Point2<f64>,
    /// Suspension point position
    pub suspension: Point2<f64>,
}

impl PendulumPosition {
    pub fn ball_x(&self) -> f64 {
        self.ball.x
    }

    pub fn ball_y(&self) -> f64 {
        self.ball.y
    }

    pub fn sus_x(&self) -> f64 {
        self.suspension.x
    }

    pub fn sus_y(&self) -> f64 {
        self.suspension.y
    }
}

/// Fixed-step leapfrog integrator
///
/// Integrates
///
/// ```text
/// φ'' = −2ζ·φ' + (g/L − (A/L)·ω²·cos(ωt))·sin φ
/// ```
///
/// with a two-stage update: the angle is advanced from the current velocity
/// and acceleration, the acceleration is re-evaluated at the predicted angle,
/// and the velocity is advanced with the average of both accelerations.
///
/// # Characteristics
/// - Order: 2
/// - Stages: 2
/// - Explicit, fixed timestep
/// - Velocity Verlet when `ζ = 0` and `A = 0`, so energy error stays bounded
///
/// # Note
/// The damping term and the drive phase are frozen at the start of the step
/// for both acceleration evaluations. The bob's `y` coordinate is computed
/// from the angle *before* the step while `x` uses the angle after it; the
/// emitted trajectory depends on that one-step lag.
///
/// # Example
/// ```
/// use pendsim::{Integrator, PendulumParameters, Solver};
///
/// let params = PendulumParameters::free(1.0, 1.0, 30.0);
/// let mut pendulum = Integrator::new(params, 0.01).unwrap();
/// for _ in 0..100 {
///     pendulum.step();
/// }
/// let energy = pendulum.energy();
/// assert!(energy.total.is_finite());
/// ```
#[derive(Debug, Clone)]
pub struct Integrator {
    params: PendulumParameters,
    anchor: Point2<f64>,
    state: PendulumState,
    position: PendulumPosition,
    steps: u64,
}

impl Integrator {
    /// Create an integrator with the suspension anchored at the origin
    pub fn new(params: PendulumParameters, dt: f64) -> Result<Self> {
        Self::with_anchor(params, dt, Point2::origin())
    }

    /// Create an integrator with the suspension resting at `anchor`
    pub fn with_anchor(params: PendulumParameters, dt: f64, anchor: Point2<f64>) -> Result<Self> {
        check_step_size(dt)?;
        check_physical(&params)?;
        if !(anchor.x.is_finite() && anchor.y.is_finite()) {
            return Err(PendulumError::InvalidParameter {
                name: "anchor",
                value: if anchor.x.is_finite() { anchor.y } else { anchor.x },
                reason: "must be finite",
            });
        }

        log::debug!(
            "pendulum: L={} A={} w={} zeta={} m={} phi0={}deg dt={}",
            params.suspension_length,
            params.drive_amplitude,
            params.drive_angular_velocity,
            params.damping_coefficient,
            params.bob_mass,
            params.initial_angle_deg,
            dt
        );

        Ok(Self::build(params, dt, anchor))
    }

    fn build(params: PendulumParameters, dt: f64, anchor: Point2<f64>) -> Self {
        let phi0 = params.initial_angle_rad();
        let length = params.suspension_length;
        Self {
            params,
            anchor,
            state: PendulumState::new(phi0, dt),
            position: PendulumPosition {
                ball: Point2::new(anchor.x + length * phi0.sin(), anchor.y + length * phi0.cos()),
                suspension: anchor,
            },
            steps: 0,
        }
    }

    /// Angular acceleration `a(φ, v, t)`
    pub fn acceleration(&self, angle: f64, velocity: f64, t: f64) -> f64 {
        let p = &self.params;
        let l = p.suspension_length;
        let w = p.drive_angular_velocity;

        let restoring = GRAVITY / l - (p.drive_amplitude / l) * w * w * (w * t).cos();
        let damping = -2.0 * p.damping_coefficient * velocity;

        damping + restoring * angle.sin()
    }

    /// Suspension height at time `t`: `y0 + A·cos(ωt)`
    pub fn suspension_y(&self, t: f64) -> f64 {
        self.anchor.y + self.params.drive_amplitude * (self.params.drive_angular_velocity * t).cos()
    }

    /// Physical parameters of this run
    pub fn params(&self) -> &PendulumParameters {
        &self.params
    }

    /// Rest position of the suspension
    pub fn anchor(&self) -> Point2<f64> {
        self.anchor
    }

    /// Read-only view of the integration state
    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    /// Number of completed steps
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Bob and suspension positions as of the last step
    pub fn position(&self) -> PendulumPosition {
        self.position
    }

    /// Display energy (finite-difference velocity, source frame)
    pub fn energy(&self) -> EnergyReport {
        diagnostics::energy_of(self)
    }

    /// Energy of the integrator's own (angle, velocity) pair
    pub fn mechanical_energy(&self) -> EnergyReport {
        diagnostics::mechanical_energy(self)
    }
}

impl Solver for Integrator {
    fn step(&mut self) {
        let dt = self.state.dt;
        let t = self.state.elapsed_time;
        let (i, j) = (self.state.curr(), self.state.next());

        let phi = self.state.angle[i];
        let v = self.state.velocity[i];

        let a_curr = self.acceleration(phi, v, t);
        let phi_next = phi + v * dt + 0.5 * a_curr * dt * dt;
        let a_next = self.acceleration(phi_next, v, t);
        let v_next = v + 0.5 * (a_curr + a_next) * dt;

        self.state.accel[i] = a_curr;
        self.state.angle[j] = phi_next;
        self.state.accel[j] = a_next;
        self.state.velocity[j] = v_next;

        let length = self.params.suspension_length;
        let sus_y = self.suspension_y(t);
        self.position = PendulumPosition {
            ball: Point2::new(self.anchor.x + length * phi_next.sin(), sus_y + length * phi.cos()),
            suspension: Point2::new(self.anchor.x, sus_y),
        };

        self.state.elapsed_time += dt;
        self.state.parity = j;
        self.steps += 1;
    }

    fn reset(&mut self) {
        *self = Self::build(self.params, self.state.dt, self.anchor);
    }

    fn time(&self) -> f64 {
        self.state.elapsed_time
    }

    fn dt(&self) -> f64 {
        self.state.dt
    }

    fn order(&self) -> usize {
        2
    }

    fn stages(&self) -> usize {
        2
    }

    fn is_adaptive(&self) -> bool {
        false
    }

    fn is_explicit(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn thirty_degrees() -> Integrator {
        Integrator::new(PendulumParameters::free(1.0, 1.0, 30.0), 0.01).unwrap()
    }

    #[test]
    fn test_initial_state() {
        let p = thirty_degrees();
        let s = p.state();
        assert_relative_eq!(s.angle_curr(), 30f64.to_radians(), epsilon = 1e-15);
        assert_eq!(s.velocity_curr(), 0.0);
        assert_eq!(s.accel_curr(), 0.0);
        assert_eq!(s.elapsed_time(), 0.0);
        assert_eq!(s.parity(), 0);
        assert_eq!(p.steps(), 0);

        let pos = p.position();
        assert_relative_eq!(pos.ball_x(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(pos.ball_y(), 3f64.sqrt() / 2.0, epsilon = 1e-12);
        assert_eq!(pos.sus_y(), 0.0);
    }

    #[test]
    fn test_single_step_matches_two_stage_formula() {
        let mut p = thirty_degrees();
        let phi0 = 30f64.to_radians();
        let dt = 0.01;

        p.step();

        let a0 = GRAVITY * phi0.sin();
        let phi1 = phi0 + 0.5 * a0 * dt * dt;
        let a1 = GRAVITY * phi1.sin();
        let v1 = 0.5 * (a0 + a1) * dt;

        let s = p.state();
        assert_eq!(s.elapsed_time(), 0.01);
        assert_eq!(s.angle_curr(), phi1);
        assert_eq!(s.angle_prev(), phi0);
        assert_eq!(s.velocity_curr(), v1);
        assert_eq!(s.accel_prev(), a0);
        assert_eq!(s.accel_curr(), a1);
        assert_relative_eq!(phi1 - phi0, 0.000245166, epsilon = 1e-9);
    }

    #[test]
    fn test_parity_flips_each_step() {
        let mut p = thirty_degrees();
        p.step();
        assert_eq!(p.state().parity(), 1);
        p.step();
        assert_eq!(p.state().parity(), 0);
        assert_eq!(p.steps(), 2);
    }

    #[test]
    fn test_ball_y_uses_pre_step_angle() {
        let mut p = thirty_degrees();
        for _ in 0..25 {
            p.step();
        }
        let before = p.state().angle_curr();
        p.step();
        let after = p.state().angle_curr();

        let pos = p.position();
        assert_relative_eq!(pos.ball_x(), after.sin(), epsilon = 1e-15);
        assert_relative_eq!(pos.ball_y(), before.cos(), epsilon = 1e-15);
    }

    #[test]
    fn test_suspension_follows_drive() {
        let params = PendulumParameters::free(1.0, 1.0, 0.0).with_drive(0.2, 10.0);
        let mut p = Integrator::with_anchor(params, 0.01, Point2::new(3.0, 5.0)).unwrap();

        p.step();
        assert_relative_eq!(p.position().sus_y(), 5.2, epsilon = 1e-12);
        assert_eq!(p.position().sus_x(), 3.0);

        p.step();
        assert_relative_eq!(p.position().sus_y(), 5.0 + 0.2 * (0.1f64).cos(), epsilon = 1e-12);
    }

    #[test]
    fn test_upright_rest_is_equilibrium() {
        // sin(0) = 0 cancels the restoring term regardless of the drive
        let params = PendulumParameters::free(1.0, 1.0, 0.0).with_drive(0.1, 50.0);
        let mut p = Integrator::new(params, 0.001).unwrap();
        for _ in 0..1000 {
            p.step();
        }
        assert_eq!(p.state().angle_curr(), 0.0);
        assert_eq!(p.state().velocity_curr(), 0.0);
    }

    #[test]
    fn test_damping_term() {
        let params = PendulumParameters::free(1.0, 1.0, 0.0).with_damping(0.5);
        let p = Integrator::new(params, 0.01).unwrap();
        assert_relative_eq!(p.acceleration(0.0, 2.0, 0.0), -2.0, epsilon = 1e-15);
    }

    #[test]
    fn test_drive_modulates_restoring_term() {
        let params = PendulumParameters::free(2.0, 1.0, 0.0).with_drive(0.5, 4.0);
        let p = Integrator::new(params, 0.01).unwrap();
        let phi: f64 = 0.3;
        let expected = (GRAVITY / 2.0 - 0.25 * 16.0) * phi.sin();
        assert_relative_eq!(p.acceleration(phi, 0.0, 0.0), expected, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_zero_length_and_step() {
        let bad_length = PendulumParameters::free(0.0, 1.0, 30.0);
        assert!(matches!(
            Integrator::new(bad_length, 0.01),
            Err(PendulumError::InvalidParameter { name: "suspension_length", .. })
        ));
        assert!(matches!(
            Integrator::new(PendulumParameters::default(), 0.0),
            Err(PendulumError::InvalidParameter { name: "dt", .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite_anchor() {
        let result = Integrator::with_anchor(
            PendulumParameters::default(),
            0.01,
            Point2::new(f64::NAN, 0.0),
        );
        assert!(matches!(
            result,
            Err(PendulumError::InvalidParameter { name: "anchor", .. })
        ));
    }

    #[test]
    fn test_reset() {
        let mut p = thirty_degrees();
        let fresh = p.clone();
        for _ in 0..10 {
            p.step();
        }
        p.reset();
        assert_eq!(p.state(), fresh.state());
        assert_eq!(p.position(), fresh.position());
        assert_eq!(p.steps(), 0);
    }

    #[test]
    fn test_solver_metadata() {
        let p = thirty_degrees();
        assert_eq!(p.order(), 2);
        assert_eq!(p.stages(), 2);
        assert!(p.is_explicit());
        assert!(!p.is_adaptive());
        assert_eq!(Solver::dt(&p), 0.01);
    }
}
