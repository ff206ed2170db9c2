//! Reconstruction of rectangular coordinates from non-singular elements.

use crate::{solvers, OrbitalElements, StateError, StateVectors};
use glam::DVec3;
use std::f64::consts::TAU;

/// Converts an element vector into a rectangular state.
///
/// `mu` is the gravitational parameter in AU^3/day^2 and `dt` an optional
/// time offset, in days, from the instant the elements were evaluated at
/// (the façade always passes 0 because it evaluates fresh elements per
/// query). The returned state is in the native uranicentric frame, with
/// position in AU and velocity in AU/day.
///
/// The semi-major axis follows from Kepler's third law,
/// `a = (mu / n^2)^(1/3)`. After solving for the eccentric longitude `F`,
/// the in-plane position and velocity are assembled from the eccentricity
/// vector, then tilted into 3D by the two-parameter `(p, q)` rotation;
/// no classical angles appear at any point, so circular and equatorial
/// orbits need no special cases.
///
/// # Errors
/// Propagates [`StateError::NumericalNonConvergence`] from the Kepler
/// solver; unreachable for elements with eccentricity below 1.
pub(crate) fn elements_to_state(
    mu: f64,
    elements: &OrbitalElements,
    dt: f64,
) -> Result<StateVectors, StateError> {
    let n = elements.n;
    let a = (mu / (n * n)).cbrt();

    let OrbitalElements { h, k, p, q, .. } = *elements;

    let l = (elements.l + n * dt).rem_euclid(TAU);
    let f = solvers::solve_eccentric_longitude(l, h, k)?;
    let (sin_f, cos_f) = f.sin_cos();

    let phi = (1.0 - h * h - k * k).sqrt();
    let psi = 1.0 / (1.0 + phi);

    // In-plane position.
    let dlf = -h * sin_f + k * cos_f;
    let x1 = a * (cos_f - h - psi * dlf * k);
    let y1 = a * (sin_f - k + psi * dlf * h);

    // In-plane velocity, scaled by the rate of the eccentric longitude.
    let rsam1 = -h * cos_f - k * sin_f;
    let hv = a * n / (1.0 + rsam1);
    let vx1 = hv * (-sin_f - psi * rsam1 * k);
    let vy1 = hv * (cos_f + psi * rsam1 * h);

    // Tilt into 3D through the inclination vector.
    let w = 2.0 * (1.0 - p * p - q * q).sqrt();
    let tilt_x = 1.0 - 2.0 * p * p;
    let tilt_y = 1.0 - 2.0 * q * q;
    let cross = 2.0 * p * q;

    let position = DVec3::new(
        x1 * tilt_x + y1 * cross,
        x1 * cross + y1 * tilt_y,
        (-x1 * p + y1 * q) * w,
    );
    let velocity = DVec3::new(
        vx1 * tilt_x + vy1 * cross,
        vx1 * cross + vy1 * tilt_y,
        (-vx1 * p + vy1 * q) * w,
    );

    Ok(StateVectors { position, velocity })
}
