//! Physical parameters of the driven pendulum.

use serde::{Deserialize, Serialize};

/// Physical parameters for one simulation run.
///
/// Supplied once when an integrator is built and never mutated afterwards.
/// Gravity is not configurable; see [`crate::GRAVITY`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PendulumParameters {
    /// Rod length `L` in metres (> 0)
    pub suspension_length: f64,

    /// Vertical amplitude `A` of the suspension oscillation in metres (≥ 0)
    pub drive_amplitude: f64,

    /// Angular velocity `ω` of the suspension oscillation in rad/s (≥ 0)
    pub drive_angular_velocity: f64,

    /// Linear damping coefficient `ζ`, dimensionless, in [0, 1]
    pub damping_coefficient: f64,

    /// Bob mass `m` in kilograms (> 0)
    pub bob_mass: f64,

    /// Initial deflection in degrees, in [-90, 90]
    pub initial_angle_deg: f64,
}

impl PendulumParameters {
    /// Undriven, undamped pendulum released from `initial_angle_deg`.
    pub fn free(suspension_length: f64, bob_mass: f64, initial_angle_deg: f64) -> Self {
        Self {
            suspension_length,
            bob_mass,
            initial_angle_deg,
            ..Self::default()
        }
    }

    /// Same parameters with a vertical suspension drive.
    pub fn with_drive(mut self, amplitude: f64, angular_velocity: f64) -> Self {
        self.drive_amplitude = amplitude;
        self.drive_angular_velocity = angular_velocity;
        self
    }

    /// Same parameters with linear damping.
    pub fn with_damping(mut self, damping_coefficient: f64) -> Self {
        self.damping_coefficient = damping_coefficient;
        self
    }

    /// Initial angle converted to radians
    pub fn initial_angle_rad(&self) -> f64 {
        self.initial_angle_deg.to_radians()
    }

    /// Whether the suspension point moves at all
    pub fn is_driven(&self) -> bool {
        self.drive_amplitude != 0.0 && self.drive_angular_velocity != 0.0
    }

    /// All fields, paired with their names, in declaration order.
    pub fn named_values(&self) -> [(&'static str, f64); 6] {
        [
            ("suspension_length", self.suspension_length),
            ("drive_amplitude", self.drive_amplitude),
            ("drive_angular_velocity", self.drive_angular_velocity),
            ("damping_coefficient", self.damping_coefficient),
            ("bob_mass", self.bob_mass),
            ("initial_angle_deg", self.initial_angle_deg),
        ]
    }
}

impl Default for PendulumParameters {
    /// Start-up form values: 1 m rod, 1 kg bob released at 30°, no drive,
    /// no damping.
    fn default() -> Self {
        Self {
            suspension_length: 1.0,
            drive_amplitude: 0.0,
            drive_angular_velocity: 0.0,
            damping_coefficient: 0.0,
            bob_mass: 1.0,
            initial_angle_deg: 30.0,
        }
    }
}
