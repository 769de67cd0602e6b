//! moments — summary statistics matched by the SMD objective.
//!
//! - [`sample`]: mean, population variance, and Pearson correlation over
//!   `ndarray` views, backed by `statrs`.
//! - [`moment_fn`]: the [`MomentFunction`] trait, the Cobb-Douglas moment
//!   vector `(corr(w, c), mean(l), var(c))`, and the squared distance used
//!   as the loss.
pub mod moment_fn;
pub mod sample;

pub use self::moment_fn::{
    CobbDouglasMoments, MOMENT_DIM, MomentFunction, Moments, squared_distance,
    validate_moment_inputs,
};
pub use self::sample::{pearson_correlation, population_variance, sample_mean};
