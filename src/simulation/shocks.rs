//! simulation::shocks — explicit, seeded source of Gaussian income shocks.
//!
//! Purpose
//! -------
//! Supply the `ε = σ·z`, `z ~ N(0, 1)` draws consumed by the SMD objective
//! from a generator that is owned by the caller rather than a process-wide
//! global.
//!
//! Key behaviors
//! -------------
//! - [`ShockPolicy::CommonRandomNumbers`] reseeds the generator from the
//!   stored seed before every draw. Every call therefore sees the same
//!   standard-normal vector `z`, and the simulated moments are a smooth,
//!   deterministic function of θ.
//! - [`ShockPolicy::Fresh`] keeps one persistent stream that advances on
//!   every call; repeated evaluations at the same θ differ by Monte Carlo
//!   noise. [`ShockSource::reseed`] resets the stream.
//!
//! Invariants & assumptions
//! ------------------------
//! - Draws are written in the order of the output buffer, so the layout
//!   (`i·S + s`) is fixed by the caller.
//! - `σ` scales a fixed `z`; with common random numbers the shocks are
//!   linear in `σ`.
//!
//! Conventions
//! -----------
//! - The generator sits behind a `RefCell` so that `&self` objective
//!   methods can draw without exclusive access (single-threaded use).
use crate::structural::errors::ModelError;
use ndarray::{Array1, ArrayViewMut1};
use rand::{SeedableRng, rngs::StdRng};
use rand_distr::{Distribution, StandardNormal};
use std::{cell::RefCell, str::FromStr};

/// Default seed for shock generation.
pub const DEFAULT_SHOCK_SEED: u64 = 42;

/// How the shock stream evolves across objective evaluations.
///
/// Parsing accepts case-insensitive `"CommonRandomNumbers"` (or `"crn"`)
/// and `"Fresh"`; anything else is [`ModelError::InvalidShockPolicy`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ShockPolicy {
    /// Same underlying `z` on every draw.
    #[default]
    CommonRandomNumbers,
    /// Persistent stream; new `z` on every draw.
    Fresh,
}

impl FromStr for ShockPolicy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "commonrandomnumbers" | "crn" => Ok(ShockPolicy::CommonRandomNumbers),
            "fresh" => Ok(ShockPolicy::Fresh),
            _ => Err(ModelError::InvalidShockPolicy { name: s.to_string() }),
        }
    }
}

/// Seeded generator of Gaussian shocks.
#[derive(Debug)]
pub struct ShockSource {
    seed: u64,
    policy: ShockPolicy,
    rng: RefCell<StdRng>,
}

impl ShockSource {
    pub fn new(seed: u64, policy: ShockPolicy) -> Self {
        Self { seed, policy, rng: RefCell::new(StdRng::seed_from_u64(seed)) }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn policy(&self) -> ShockPolicy {
        self.policy
    }

    /// Reset the stream to the start of `seed` and remember it for later
    /// common-random-number draws.
    pub fn reseed(&mut self, seed: u64) {
        self.seed = seed;
        *self.rng.get_mut() = StdRng::seed_from_u64(seed);
    }

    /// Fill `out` with `σ·z`, `z ~ N(0, 1)`.
    ///
    /// Under [`ShockPolicy::CommonRandomNumbers`] the generator restarts from
    /// the stored seed first, so the result depends only on `(seed, σ,
    /// out.len())`.
    pub fn draw_into(&self, sigma: f64, mut out: ArrayViewMut1<f64>) {
        let mut rng = self.rng.borrow_mut();
        if self.policy == ShockPolicy::CommonRandomNumbers {
            *rng = StdRng::seed_from_u64(self.seed);
        }
        for slot in out.iter_mut() {
            let z: f64 = StandardNormal.sample(&mut *rng);
            *slot = sigma * z;
        }
    }

    /// Allocate and return `len` shocks with scale `σ`.
    pub fn draw(&self, len: usize, sigma: f64) -> Array1<f64> {
        let mut out = Array1::zeros(len);
        self.draw_into(sigma, out.view_mut());
        out
    }
}

impl Default for ShockSource {
    fn default() -> Self {
        Self::new(DEFAULT_SHOCK_SEED, ShockPolicy::default())
    }
}
