//! Solver for the non-singular form of Kepler's equation.

use crate::{StateError, KEPLER_MAX_ITERS, KEPLER_TOLERANCE};

/// Solves the generalized Kepler equation for the eccentric longitude.
///
/// With non-singular elements the equation reads
///
/// ```text
/// F = L - h sin(F) + k cos(F)
/// ```
///
/// where `L` is the mean longitude (already including any `n * dt`
/// advance) and `(h, k)` is the eccentricity vector. Unlike the classical
/// eccentric-anomaly form, this stays well defined at zero eccentricity.
///
/// The seed is one step of the trivial fixed-point iteration started at
/// `L`; each Newton step applies
///
/// ```text
/// dF = (L - F + h sin(F) - k cos(F)) / (1 - h cos(F) - k sin(F))
/// ```
///
/// For eccentricity below 1 the denominator is strictly positive and the
/// iteration converges quadratically; three or four steps reach the 1e-14
/// radian tolerance for the nearly circular GUST86 orbits.
///
/// # Errors
/// Inputs with `h^2 + k^2 >= 1` are out of contract. They are not detected
/// up front; if the iteration fails to converge within the cap, the solver
/// reports [`StateError::NumericalNonConvergence`] instead of looping
/// forever the way the historical implementations did.
pub(crate) fn solve_eccentric_longitude(
    mean_longitude: f64,
    h: f64,
    k: f64,
) -> Result<f64, StateError> {
    let l = mean_longitude;
    let mut f = l - h * l.sin() + k * l.cos();

    for _ in 0..KEPLER_MAX_ITERS {
        let (sin_f, cos_f) = f.sin_cos();

        let delta = (l - f + h * sin_f - k * cos_f) / (1.0 - h * cos_f - k * sin_f);
        f += delta;

        // A NaN delta fails this comparison and runs to the cap.
        if delta.abs() <= KEPLER_TOLERANCE {
            return Ok(f);
        }
    }

    Err(StateError::NumericalNonConvergence)
}
