//! Parameter and settings validation
//!
//! Two levels of checking:
//! - [`check_physical`] and [`check_step_size`] guard integrator
//!   construction and reject anything that would make the equation of motion
//!   produce NaN or infinities.
//! - [`validate_parameters`] and [`validate_settings`] apply the input-form
//!   ranges (angle, damping, playback speed, ...) on top of that.

use std::time::Duration;

use pendsim_types::{
    PendulumParameters, SessionSettings, DAMPING_RANGE, INITIAL_ANGLE_RANGE_DEG, MAX_PLAYBACK_SPEED,
};

use crate::solvers::{PendulumError, Result};

fn invalid(name: &'static str, value: f64, reason: &'static str) -> PendulumError {
    PendulumError::InvalidParameter {
        name,
        value,
        reason,
    }
}

fn require(cond: bool, name: &'static str, value: f64, reason: &'static str) -> Result<()> {
    if cond {
        Ok(())
    } else {
        Err(invalid(name, value, reason))
    }
}

/// Fixed step size must be finite and strictly positive
pub fn check_step_size(dt: f64) -> Result<()> {
    require(dt.is_finite(), "dt", dt, "must be finite")?;
    require(dt > 0.0, "dt", dt, "must be greater than 0")
}

/// Minimal domain needed for a well-defined integration
pub fn check_physical(params: &PendulumParameters) -> Result<()> {
    for (name, value) in params.named_values() {
        require(value.is_finite(), name, value, "must be finite")?;
    }
    require(
        params.suspension_length > 0.0,
        "suspension_length",
        params.suspension_length,
        "must be greater than 0",
    )?;
    require(
        params.bob_mass > 0.0,
        "bob_mass",
        params.bob_mass,
        "must be greater than 0",
    )
}

/// Full input-form ranges for physical parameters
pub fn validate_parameters(params: &PendulumParameters) -> Result<()> {
    check_physical(params)?;

    let (angle_lo, angle_hi) = INITIAL_ANGLE_RANGE_DEG;
    require(
        (angle_lo..=angle_hi).contains(&params.initial_angle_deg),
        "initial_angle_deg",
        params.initial_angle_deg,
        "must be between -90 and 90 degrees",
    )?;
    require(
        params.drive_angular_velocity >= 0.0,
        "drive_angular_velocity",
        params.drive_angular_velocity,
        "cannot be negative",
    )?;
    require(
        params.drive_amplitude >= 0.0,
        "drive_amplitude",
        params.drive_amplitude,
        "cannot be negative",
    )?;

    let (damping_lo, damping_hi) = DAMPING_RANGE;
    require(
        (damping_lo..=damping_hi).contains(&params.damping_coefficient),
        "damping_coefficient",
        params.damping_coefficient,
        "must be between 0 and 1",
    )
}

/// Session settings: cadence, playback speed and plot geometry
pub fn validate_settings(settings: &SessionSettings) -> Result<()> {
    require(
        settings.fps.is_finite() && settings.fps > 0.0,
        "fps",
        settings.fps,
        "must be a positive number",
    )?;
    require(
        Duration::try_from_secs_f64(settings.frame_period()).is_ok(),
        "fps",
        settings.fps,
        "frame period does not fit in a duration",
    )?;
    require(
        settings.speed > 0.0 && settings.speed <= MAX_PLAYBACK_SPEED,
        "speed",
        settings.speed,
        "must be greater than 0 and at most 3",
    )?;
    require(
        settings.plot_width > 0,
        "plot_width",
        settings.plot_width as f64,
        "must hold at least one sample",
    )?;
    require(
        settings.plot_height.is_finite() && settings.plot_height > 0.0,
        "plot_height",
        settings.plot_height,
        "must be a positive number",
    )?;
    require(
        settings.plot_margin >= 0.0 && 2.0 * settings.plot_margin < settings.plot_height,
        "plot_margin",
        settings.plot_margin,
        "must be non-negative and leave room inside the plot",
    )?;
    require(
        settings.energy_scale.is_finite() && settings.energy_scale > 0.0,
        "energy_scale",
        settings.energy_scale,
        "must be a positive number",
    )?;
    check_step_size(settings.physical_dt())
}
