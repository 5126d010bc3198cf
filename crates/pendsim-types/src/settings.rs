//! Session settings types.

use serde::{Deserialize, Serialize};

use crate::{DEFAULT_ENERGY_SCALE, DEFAULT_FPS};

/// Settings for a running session: frame cadence, playback speed and the
/// geometry of the energy plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    /// Frames per second of the external scheduler
    pub fps: f64,

    /// Simulated seconds per wall-clock second, in (0, 3]
    pub speed: f64,

    /// Energy plot width, in samples (history capacity)
    pub plot_width: usize,

    /// Energy plot height, in display units
    pub plot_height: f64,

    /// Margin kept free at the top and bottom of the plot when rescaling
    pub plot_margin: f64,

    /// Energy units per display unit
    pub energy_scale: f64,

    /// Sleep between frames in the headless driver
    pub realtime: bool,
}

impl SessionSettings {
    /// Physical step size per frame: `speed / fps`
    pub fn physical_dt(&self) -> f64 {
        self.speed / self.fps
    }

    /// Wall-clock seconds between frames
    pub fn frame_period(&self) -> f64 {
        1.0 / self.fps
    }
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            speed: 1.0,
            plot_width: 300,
            plot_height: 300.0,
            plot_margin: 10.0,
            energy_scale: DEFAULT_ENERGY_SCALE,
            realtime: false,
        }
    }
}
