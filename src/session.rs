//! Simulation session - owns one run and its start/pause/restart control.
//!
//! The session is what a front end talks to. It validates input, builds a
//! fresh [`Integrator`] and [`EnergyHistory`] on every (re)start, and turns
//! each scheduler tick into one integration step plus the values needed to
//! draw a frame. Scheduling itself stays outside: callers invoke
//! [`SimulationSession::tick`] every [`SimulationSession::frame_interval`].

use std::time::Duration;

use nalgebra::Point2;
use pendsim_types::{PendulumParameters, SessionSettings, SimulationConfig};
use serde::Serialize;

use crate::diagnostics::{display_sample, EnergyHistory, EnergyReport};
use crate::solvers::{Integrator, PendulumPosition, Result, Solver};
use crate::validation::{validate_parameters, validate_settings};

/// Run state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    /// No pendulum has been built yet
    Idle,
    /// Ticks advance the pendulum
    Running,
    /// Ticks are ignored; state is retained
    Paused,
}

/// Everything a renderer needs after one tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Frame {
    /// Simulated time after the step
    pub time: f64,
    pub position: PendulumPosition,
    pub energy: EnergyReport,
    /// Plot value pushed into the history for this frame
    pub sample: f64,
}

/// One simulation run plus its controls
#[derive(Debug, Clone)]
pub struct SimulationSession {
    parameters: PendulumParameters,
    settings: SessionSettings,
    anchor: Point2<f64>,
    pendulum: Option<Integrator>,
    history: EnergyHistory,
    status: SessionStatus,
}

impl SimulationSession {
    /// Create an idle session. Settings are checked here; parameters are
    /// checked when the pendulum is built.
    pub fn new(config: &SimulationConfig) -> Result<Self> {
        validate_settings(&config.settings)?;

        Ok(Self {
            parameters: config.parameters,
            settings: config.settings.clone(),
            anchor: Point2::origin(),
            pendulum: None,
            history: EnergyHistory::new(config.settings.plot_width),
            status: SessionStatus::Idle,
        })
    }

    /// Rest position of the suspension for subsequent runs
    pub fn with_anchor(mut self, anchor: Point2<f64>) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_running(&self) -> bool {
        self.status == SessionStatus::Running
    }

    pub fn parameters(&self) -> &PendulumParameters {
        &self.parameters
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// The current run, if one has been started
    pub fn pendulum(&self) -> Option<&Integrator> {
        self.pendulum.as_ref()
    }

    pub fn history(&self) -> &EnergyHistory {
        &self.history
    }

    /// Simulated time of the current run, zero when idle
    pub fn elapsed_time(&self) -> f64 {
        self.pendulum.as_ref().map_or(0.0, |p| p.time())
    }

    /// Wall-clock time between ticks
    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(self.settings.frame_period())
    }

    /// Start a new run with the current parameters
    pub fn start(&mut self) -> Result<()> {
        self.restart()
    }

    /// Discard the current run and start over with the current parameters
    pub fn restart(&mut self) -> Result<()> {
        self.install(self.parameters)
    }

    /// Replace the parameters and start over
    ///
    /// Invalid parameters are rejected without touching the current run.
    pub fn restart_with(&mut self, parameters: PendulumParameters) -> Result<()> {
        self.install(parameters)
    }

    /// Replace the session settings; they take effect at the next restart
    pub fn set_settings(&mut self, settings: SessionSettings) -> Result<()> {
        validate_settings(&settings)?;
        self.settings = settings;
        Ok(())
    }

    fn install(&mut self, parameters: PendulumParameters) -> Result<()> {
        let dt = self.settings.physical_dt();
        let pendulum = validate_parameters(&parameters)
            .and_then(|_| Integrator::with_anchor(parameters, dt, self.anchor))
            .map_err(|err| {
                log::warn!("Rejected pendulum parameters: {}", err);
                err
            })?;

        self.parameters = parameters;
        self.pendulum = Some(pendulum);
        self.history = EnergyHistory::new(self.settings.plot_width);
        self.status = SessionStatus::Running;

        log::debug!("Session started with dt = {} s", dt);
        Ok(())
    }

    /// Stop advancing on ticks
    pub fn pause(&mut self) {
        if self.status == SessionStatus::Running {
            self.status = SessionStatus::Paused;
            log::debug!("Session paused at t = {} s", self.elapsed_time());
        }
    }

    /// Continue a paused run, or start one if none exists yet
    pub fn resume(&mut self) -> Result<()> {
        match self.status {
            SessionStatus::Running => Ok(()),
            SessionStatus::Paused => {
                self.status = SessionStatus::Running;
                log::debug!("Session resumed at t = {} s", self.elapsed_time());
                Ok(())
            }
            SessionStatus::Idle => self.start(),
        }
    }

    /// Pause when running, resume otherwise
    pub fn toggle(&mut self) -> Result<()> {
        if self.is_running() {
            self.pause();
            Ok(())
        } else {
            self.resume()
        }
    }

    /// Advance one step and record the plotted energy sample
    ///
    /// Returns `None` unless the session is running.
    pub fn tick(&mut self) -> Option<Frame> {
        if self.status != SessionStatus::Running {
            return None;
        }
        let pendulum = self.pendulum.as_mut()?;

        pendulum.step();
        let energy = pendulum.energy();
        let sample = display_sample(
            energy.total,
            self.settings.plot_height,
            self.settings.energy_scale,
        );
        self.history.push(sample);

        Some(Frame {
            time: pendulum.time(),
            position: pendulum.position(),
            energy,
            sample,
        })
    }

    /// History remapped into the plot band `[margin, height − margin]`
    pub fn normalized_history(&self) -> Vec<f64> {
        let margin = self.settings.plot_margin;
        self.history
            .normalized(margin, self.settings.plot_height - margin)
    }
}
