//! The GUST86 trajectory façade.

use crate::{
    frame, rectangular, series, OrbitalElements, Satellite, StateError, StateVectors, Trajectory,
    SECONDS_PER_DAY,
};
use std::f64::consts::TAU;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Julian date of the GUST86 reference epoch.
const GUST86_EPOCH_JD: f64 = 2_444_239.5;

/// Julian date of the J2000 epoch, the caller's time origin.
const J2000_JD: f64 = 2_451_545.0;

/// Days from the GUST86 reference epoch to J2000.
const EPOCH_OFFSET_DAYS: f64 = J2000_JD - GUST86_EPOCH_JD;

/// A struct representing the GUST86 orbit of one Uranian satellite.
///
/// Construction binds the satellite identity to its fixed physical
/// constants; after that, [`state`][Trajectory::state] is the only
/// operation, and it is a pure function of time. The struct holds no
/// mutable state, so a single instance may be queried from any number of
/// threads concurrently.
///
/// # Example
/// ```
/// use gust86::{Gust86Orbit, Satellite, Trajectory};
///
/// let orbit = Gust86Orbit::new(Satellite::Miranda);
///
/// // Miranda circles Uranus in about 1.4 days.
/// let period_days = orbit.period() / 86_400.0;
/// assert!((period_days - 1.413).abs() < 0.01);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Gust86Orbit {
    satellite: Satellite,
    period: f64,
    bounding_radius: f64,
}

impl Gust86Orbit {
    /// Creates the GUST86 orbit of the given satellite.
    ///
    /// This is total: the closed [`Satellite`] enumeration makes an
    /// unrecognized identity unrepresentable.
    pub fn new(satellite: Satellite) -> Gust86Orbit {
        let period = SECONDS_PER_DAY * TAU / series::mean_motion_frequency(satellite);

        Gust86Orbit {
            satellite,
            period,
            bounding_radius: satellite.bounding_radius(),
        }
    }

    /// Gets the satellite this orbit belongs to.
    #[inline]
    pub fn satellite(&self) -> Satellite {
        self.satellite
    }

    /// Evaluates the orbital elements at a given time, in TDB seconds
    /// since J2000.
    ///
    /// Exposed for diagnostics and testing; most callers want
    /// [`state`][Trajectory::state].
    pub fn elements(&self, tdb_sec: f64) -> OrbitalElements {
        let t = tdb_sec / SECONDS_PER_DAY + EPOCH_OFFSET_DAYS;
        OrbitalElements::at(t, self.satellite)
    }
}

impl Trajectory for Gust86Orbit {
    fn state(&self, tdb_sec: f64) -> Result<StateVectors, StateError> {
        let elements = self.elements(tdb_sec);
        let mu = self.satellite.gravitational_parameter();

        // The elements are already evaluated at the query time, so no
        // further mean-longitude advance is needed.
        let native = rectangular::elements_to_state(mu, &elements, 0.0)?;

        Ok(frame::to_emej2000_km(native))
    }

    #[inline]
    fn period(&self) -> f64 {
        self.period
    }

    #[inline]
    fn bounding_radius(&self) -> f64 {
        self.bounding_radius
    }
}
