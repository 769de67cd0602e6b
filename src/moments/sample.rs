//! Sample statistics used as identification targets.
//!
//! Thin wrappers over `statrs::statistics::Statistics` fixing the
//! conventions used by every moment in this crate:
//!
//! - variances and covariances are **population** moments (divisor `n`);
//! - the Pearson correlation is `cov(x, y) / sqrt(var(x)·var(y))`, so the
//!   divisor cancels;
//! - zero spread is not special-cased: a constant series yields `0/0 = NaN`.
use ndarray::ArrayView1;
use statrs::statistics::Statistics;

/// Arithmetic mean; `NaN` for an empty view.
pub fn sample_mean(x: ArrayView1<f64>) -> f64 {
    x.iter().mean()
}

/// Population variance (divisor `n`); `NaN` for an empty view.
pub fn population_variance(x: ArrayView1<f64>) -> f64 {
    x.iter().population_variance()
}

/// Pearson correlation between two equally long series.
///
/// Returns `NaN` when either series has zero spread. Callers must ensure
/// `x.len() == y.len()`.
pub fn pearson_correlation(x: ArrayView1<f64>, y: ArrayView1<f64>) -> f64 {
    let cov = x.iter().population_covariance(y.iter());
    let var_x = x.iter().population_variance();
    let var_y = y.iter().population_variance();
    cov / (var_x * var_y).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Agreement with hand-computed values on small inputs.
    // - NaN propagation on zero-spread series.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Check the population (ddof = 0) convention.
    //
    // Given
    // -----
    // - x = (1, 2, 3, 4).
    //
    // Expect
    // ------
    // - mean 2.5, variance 1.25.
    fn mean_and_population_variance_match_hand_values() {
        // Arrange
        let x = array![1.0, 2.0, 3.0, 4.0];

        // Act / Assert
        assert_relative_eq!(sample_mean(x.view()), 2.5, epsilon = 1e-12);
        assert_relative_eq!(population_variance(x.view()), 1.25, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Perfectly linear relations have correlation ±1.
    //
    // Given
    // -----
    // - y = 2x + 1 and z = −x.
    //
    // Expect
    // ------
    // - corr(x, y) = 1 and corr(x, z) = −1.
    fn correlation_of_linear_relations_is_unit() {
        // Arrange
        let x = array![0.5, 1.0, 2.0, 4.0, 8.0];
        let y = x.mapv(|v| 2.0 * v + 1.0);
        let z = x.mapv(|v| -v);

        // Act / Assert
        assert_relative_eq!(pearson_correlation(x.view(), y.view()), 1.0, epsilon = 1e-12);
        assert_relative_eq!(pearson_correlation(x.view(), z.view()), -1.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Degenerate inputs propagate NaN instead of failing.
    //
    // Given
    // -----
    // - A constant series paired with a varying one.
    //
    // Expect
    // ------
    // - The correlation is NaN.
    fn correlation_with_constant_series_is_nan() {
        // Arrange
        let x = array![3.0, 3.0, 3.0];
        let y = array![1.0, 2.0, 4.0];

        // Act
        let r = pearson_correlation(x.view(), y.view());

        // Assert
        assert!(r.is_nan(), "expected NaN for zero spread, got {r}");
    }
}
