//! Base solver trait and error types

use thiserror::Error;

/// Errors raised by the integration core
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PendulumError {
    /// A physical parameter or step size is outside its domain.
    ///
    /// Raised only at construction time; the caller has to collect new input.
    #[error("Invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Normalization source range is empty (`min == max`).
    ///
    /// Never escapes [`crate::diagnostics::normalize`], which falls back to
    /// the midpoint of the destination range.
    #[error("Cannot normalize {value}: source range is degenerate")]
    DegenerateNormalization { value: f64 },
}

/// Crate-wide result alias
pub type Result<T> = std::result::Result<T, PendulumError>;

/// Core trait for fixed-step integrators
///
/// Stepping is infallible: every failure mode is rejected when the
/// integrator is constructed.
pub trait Solver: Send + Sync {
    /// Advance the state by exactly one fixed step
    fn step(&mut self);

    /// Restore the construction-time state
    fn reset(&mut self);

    /// Elapsed simulated time in seconds
    fn time(&self) -> f64;

    /// Fixed step size in seconds
    fn dt(&self) -> f64;

    /// Order of the method
    fn order(&self) -> usize;

    /// Number of right-hand-side evaluations per step
    fn stages(&self) -> usize;

    /// Is this an adaptive solver?
    fn is_adaptive(&self) -> bool;

    /// Is this an explicit solver?
    fn is_explicit(&self) -> bool;
}
