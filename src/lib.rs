//! # GUST86 Uranian Satellite Ephemeris
//! This library crate computes positions and velocities of the five major
//! satellites of Uranus — Miranda, Ariel, Umbriel, Titania and Oberon —
//! from the GUST86 analytic theory by Laskar and Jacobson (1987).
//!
//! Unlike a numerical integrator, an analytic theory evaluates a closed-form
//! perturbation series at any requested instant. There is no accumulated
//! state and no time stepping: every query is an independent, deterministic
//! function of time, which makes the crate suitable for per-frame use in a
//! real-time visualization as well as for batch ephemeris generation.
//!
//! The computation pipeline is:
//! 1. propagate the fixed GUST86 phase angles to the requested time;
//! 2. evaluate the per-satellite perturbation series, producing six
//!    non-singular orbital elements;
//! 3. solve the generalized Kepler equation for the eccentric longitude;
//! 4. reconstruct rectangular coordinates in the uranicentric frame;
//! 5. rotate into the Earth mean equator and equinox of J2000 and rescale
//!    to kilometers and kilometers per second.
//!
//! ## Getting started
//! The main entry point is [`Gust86Orbit`], which binds a [`Satellite`] to
//! its physical constants and exposes the [`Trajectory`] trait:
//!
//! ```rust
//! use gust86::{Gust86Orbit, Satellite, Trajectory};
//!
//! # fn main() {
//! let orbit = Gust86Orbit::new(Satellite::Ariel);
//!
//! // State at the J2000 epoch, in km and km/s.
//! let state = orbit.state(0.0).unwrap();
//!
//! assert!(state.position.length() < orbit.bounding_radius());
//! # }
//! ```
//!
//! Time is measured in TDB seconds since J2000 (JD 2451545.0). The theory's
//! internal epoch, JD 2444239.5, is handled by a fixed offset.

#![warn(missing_docs)]

mod frame;
mod orbit;
mod rectangular;
mod satellite;
mod series;
mod solvers;

pub use orbit::Gust86Orbit;
pub use satellite::Satellite;
pub use series::OrbitalElements;

use glam::DVec3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The maximum number of Newton iterations for the Kepler solver.
///
/// The historical GUST86 implementations iterate without a bound, which is
/// a latent infinite loop for out-of-contract inputs (eccentricity >= 1).
/// For all physically valid GUST86 elements the solver converges in a
/// handful of iterations, so this cap is generous.
const KEPLER_MAX_ITERS: u32 = 50;

/// Convergence tolerance for the Kepler solver, in radians.
const KEPLER_TOLERANCE: f64 = 1e-14;

/// One astronomical unit, in kilometers (IAU 2012).
const AU_KM: f64 = 1.495_978_707e8;

/// One day, in seconds.
const SECONDS_PER_DAY: f64 = 86_400.0;

/// A struct representing a position and velocity at a point in an orbit.
///
/// The position vector is in kilometers and the velocity vector is in
/// kilometers per second, both in the Earth mean equator and equinox of
/// J2000 frame, centered on Uranus.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StateVectors {
    /// The 3D position, in kilometers.
    pub position: DVec3,
    /// The 3D velocity, in kilometers per second.
    pub velocity: DVec3,
}

/// An error to describe why a trajectory query failed.
///
/// A failed query is recoverable: the caller may skip the frame or retry
/// with a different time. No query failure panics or aborts.
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum StateError {
    /// ### The Kepler solver failed to converge within its iteration cap.
    /// For valid GUST86 elements (eccentricity < 1) the Newton iteration
    /// converges in a handful of steps, so in practice this indicates
    /// corrupted elements rather than an unlucky time value.
    NumericalNonConvergence,
}

/// A time-parameterized trajectory around a central body.
///
/// This is the contract the surrounding animation system consumes. The
/// GUST86 theory implements it through [`Gust86Orbit`]; alternative
/// theories (numerical ephemerides, other analytic series) can stand
/// behind the same trait and be swapped freely.
///
/// ```rust
/// use gust86::{Gust86Orbit, Satellite, Trajectory};
///
/// fn accepts_trajectory(t: &impl Trajectory) {
///     assert!(t.period() > 0.0);
/// }
///
/// # fn main() {
/// accepts_trajectory(&Gust86Orbit::new(Satellite::Oberon));
/// # }
/// ```
pub trait Trajectory {
    /// Computes the state vectors at a given time.
    ///
    /// The time is in TDB seconds since J2000. The returned position is in
    /// kilometers and the velocity in kilometers per second.
    ///
    /// # Errors
    /// Returns [`StateError::NumericalNonConvergence`] if the Kepler solver
    /// fails to converge. This cannot happen for the elements produced by
    /// the GUST86 series at finite times.
    fn state(&self, tdb_sec: f64) -> Result<StateVectors, StateError>;

    /// Computes the position at a given time, in kilometers.
    ///
    /// # Errors
    /// Same conditions as [`state`][Trajectory::state].
    fn position(&self, tdb_sec: f64) -> Result<DVec3, StateError> {
        Ok(self.state(tdb_sec)?.position)
    }

    /// Gets the orbital period, in seconds.
    ///
    /// For a perturbation theory this is the period of the mean motion;
    /// the true motion is only approximately periodic.
    fn period(&self) -> f64;

    /// Gets a radius, in kilometers, guaranteed to contain the whole orbit.
    ///
    /// Callers use this for culling; it is a configured constant, not a
    /// value derived from the theory.
    fn bounding_radius(&self) -> f64;
}

#[cfg(test)]
mod tests;
