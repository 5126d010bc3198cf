//! Headless pendsim driver
//!
//! Usage: `pendsim [config.json]`
//!
//! Runs a session for `frames` ticks and prints the pendulum and energy
//! trace. Set `RUST_LOG=debug` to see session transitions.

use std::error::Error;
use std::fs;
use std::thread;

use pendsim::{SimulationConfig, SimulationSession};

fn load_config() -> Result<SimulationConfig, Box<dyn Error>> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = fs::read_to_string(&path)
                .map_err(|e| format!("cannot read config `{}`: {}", path, e))?;
            let config: SimulationConfig = serde_json::from_str(&text)
                .map_err(|e| format!("cannot parse config `{}`: {}", path, e))?;
            log::info!("Loaded config from {}", path);
            Ok(config)
        }
        None => Ok(SimulationConfig::default()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let config = load_config()?;
    let mut session = SimulationSession::new(&config)?;
    session.start()?;

    let p = session.parameters();
    println!("pendsim - driven, damped pendulum");
    println!("=================================\n");
    println!(
        "  L = {} m, A = {} m, w = {} rad/s, zeta = {}, m = {} kg, phi0 = {} deg",
        p.suspension_length,
        p.drive_amplitude,
        p.drive_angular_velocity,
        p.damping_coefficient,
        p.bob_mass,
        p.initial_angle_deg
    );
    if !p.is_driven() {
        println!("  suspension fixed, free pendulum");
    }
    println!(
        "  {} frames at {} fps, dt = {} s\n",
        config.frames,
        config.settings.fps,
        config.settings.physical_dt()
    );

    let report_every = (config.settings.fps as usize).max(1);
    let interval = session.frame_interval();

    println!(
        "{:>8} {:>10} {:>10} {:>12} {:>12} {:>12}",
        "t [s]", "ball x", "ball y", "kinetic", "potential", "total"
    );

    for frame_index in 1..=config.frames {
        let Some(frame) = session.tick() else {
            break;
        };

        if frame_index % report_every == 0 {
            println!(
                "{:>8.2} {:>10.4} {:>10.4} {:>12.4} {:>12.4} {:>12.4}",
                frame.time,
                frame.position.ball_x(),
                frame.position.ball_y(),
                frame.energy.kinetic,
                frame.energy.potential,
                frame.energy.total
            );
        }

        if config.settings.realtime {
            thread::sleep(interval);
        }
    }

    let history = session.history();
    if let Some((lo, hi)) = history.range() {
        println!();
        println!("Plot samples retained: {} / {}", history.len(), history.capacity());
        println!("Plot range seen:       [{:.3}, {:.3}]", lo, hi);
    }

    Ok(())
}
