//! Combined configuration as read by the demo driver.

use serde::{Deserialize, Serialize};

use crate::{PendulumParameters, SessionSettings};

/// Everything needed to start a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Physical parameters
    pub parameters: PendulumParameters,

    /// Frame cadence and plot settings
    pub settings: SessionSettings,

    /// Number of frames the headless driver runs before exiting
    pub frames: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            parameters: PendulumParameters::default(),
            settings: SessionSettings::default(),
            frames: 1000,
        }
    }
}
