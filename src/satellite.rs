#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Gravitational parameters of the satellites' combined Uranus system,
/// in AU^3/day^2, from the GUST86 distribution.
///
/// These differ slightly per satellite because the theory's authors fit
/// each orbit with its own effective central mass.
const GRAVITATIONAL_PARAMETERS: [f64; 5] = [
    1.291892353675174e-8,
    1.291910570526396e-8,
    1.291910102284198e-8,
    1.291942656265575e-8,
    1.291935967091320e-8,
];

/// Conservative bounding radii of the orbits, in kilometers.
///
/// These are configured literals used by callers for render culling, not
/// values derived from the theory. Each comfortably exceeds the satellite's
/// mean orbital radius.
const BOUNDING_RADII: [f64; 5] = [1.4e5, 2.0e5, 2.7e5, 4.4e5, 5.9e5];

/// One of the five major satellites of Uranus covered by GUST86.
///
/// The enumeration is closed: the theory provides series for exactly these
/// five bodies, and every constant table in the crate is indexed by
/// [`index`][Satellite::index].
///
/// # Example
/// ```
/// use gust86::Satellite;
///
/// assert_eq!(Satellite::Miranda.name(), "Miranda");
/// assert_eq!(Satellite::ALL.len(), 5);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Satellite {
    /// Uranus I, the innermost and smallest of the five.
    Miranda,
    /// Uranus II.
    Ariel,
    /// Uranus III.
    Umbriel,
    /// Uranus IV, the largest.
    Titania,
    /// Uranus V, the outermost.
    Oberon,
}

impl Satellite {
    /// All five satellites, in increasing distance from Uranus.
    ///
    /// The order matches the index used by the GUST86 tables.
    pub const ALL: [Satellite; 5] = [
        Satellite::Miranda,
        Satellite::Ariel,
        Satellite::Umbriel,
        Satellite::Titania,
        Satellite::Oberon,
    ];

    /// Gets the GUST86 table index of the satellite, 0 through 4.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Gets the satellite's name.
    pub const fn name(self) -> &'static str {
        match self {
            Satellite::Miranda => "Miranda",
            Satellite::Ariel => "Ariel",
            Satellite::Umbriel => "Umbriel",
            Satellite::Titania => "Titania",
            Satellite::Oberon => "Oberon",
        }
    }

    /// Gets the gravitational parameter of the satellite's orbit,
    /// in AU^3/day^2.
    ///
    /// This is the `mu` in `a = (mu / n^2)^(1/3)`; it represents the mass
    /// of Uranus as fitted by the theory for this particular orbit.
    #[inline]
    pub const fn gravitational_parameter(self) -> f64 {
        GRAVITATIONAL_PARAMETERS[self.index()]
    }

    /// Gets a radius, in kilometers, guaranteed to contain the whole orbit.
    #[inline]
    pub const fn bounding_radius(self) -> f64 {
        BOUNDING_RADII[self.index()]
    }
}
