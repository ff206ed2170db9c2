//! Rotation into the output frame and unit normalization.

use crate::{StateVectors, AU_KM, SECONDS_PER_DAY};
use glam::{DMat3, DVec3};

/// Rotation from the uranicentric GUST86 frame to the Earth mean equator
/// and equinox of J2000.
///
/// The matrix is a fixed orthonormal constant derived from the published
/// theory; a table-invariant test asserts `R^T R = I`. Stored column-major
/// for glam, written here so each line below is one column.
pub(crate) const URANICENTRIC_TO_EMEJ2000: DMat3 = DMat3::from_cols(
    DVec3::new(
        9.753205572598290957e-1,
        -2.207428547845518695e-1,
        4.733143558215848563e-3,
    ),
    DVec3::new(
        6.194437810676107434e-2,
        2.529905336992995280e-1,
        -9.654836528287313313e-1,
    ),
    DVec3::new(
        2.119261772583629030e-1,
        9.419492459363773150e-1,
        2.604206471702025216e-1,
    ),
);

/// Rotates a native-unit state into EME J2000 and rescales it to
/// kilometers and kilometers per second.
///
/// The input state is in AU and AU/day. Stateless and total.
pub(crate) fn to_emej2000_km(state: StateVectors) -> StateVectors {
    StateVectors {
        position: URANICENTRIC_TO_EMEJ2000 * state.position * AU_KM,
        velocity: URANICENTRIC_TO_EMEJ2000 * state.velocity * (AU_KM / SECONDS_PER_DAY),
    }
}
