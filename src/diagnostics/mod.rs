//! Diagnostics derived from the integrator state
//!
//! - Energy estimates (display and state-consistent)
//! - Rolling history of plotted samples with range tracking

mod energy;
mod history;

pub use energy::{
    angular_velocity_estimate, energy_of, kinetic_energy, mechanical_energy, potential_energy,
    EnergyReport,
};
pub use history::{display_sample, normalize, try_normalize, EnergyHistory};
