//! Human-readable summary of a finished SMD fit.
use crate::{optimization::objective_optimizer::Theta, structural::params::ModelParams};
use std::fmt;

/// Snapshot of an estimation run for printing.
///
/// `truth` is only known in Monte Carlo settings; it is shown as `-` when
/// absent.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationReport {
    pub truth: Option<ModelParams>,
    pub initial: Theta,
    pub estimate: ModelParams,
    pub objective_value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
}

impl fmt::Display for EstimationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let estimate = self.estimate.to_theta();
        let truth = self.truth.map(|p| p.to_theta());
        writeln!(f, "{:<10}{:>12}{:>12}{:>12}", "parameter", "true", "initial", "estimate")?;
        for (k, name) in ["gamma", "tau", "sigma"].iter().enumerate() {
            let true_cell = match &truth {
                Some(t) => format!("{:.6}", t[k]),
                None => "-".to_string(),
            };
            let initial_cell = match self.initial.get(k) {
                Some(v) => format!("{v:.6}"),
                None => "-".to_string(),
            };
            writeln!(f, "{name:<10}{true_cell:>12}{initial_cell:>12}{:>12.6}", estimate[k])?;
        }
        writeln!(f, "objective value: {:.6e}", self.objective_value)?;
        writeln!(f, "converged: {} ({})", self.converged, self.status)?;
        write!(f, "iterations: {}", self.iterations)
    }
}
