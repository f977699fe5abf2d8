//! J2000 Keplerian orbital elements for Mercury through Saturn.
//!
//! Mean elements at epoch J2000.0 with linear rates per Julian century,
//! from the standard approximate-positions tables (Standish / JPL). The
//! table is closed: the engine models the seven classical grahas plus the
//! lunar nodes only, so Uranus, Neptune, and Pluto are absent by design.

/// Bodies with a Keplerian element entry.
///
/// Earth is included because every geocentric transform needs the
/// observer's own heliocentric position; it is not an observed chart body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeplerianBody {
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
}

/// All bodies with element entries, in table order.
pub const ALL_KEPLERIAN_BODIES: [KeplerianBody; 6] = [
    KeplerianBody::Mercury,
    KeplerianBody::Venus,
    KeplerianBody::Earth,
    KeplerianBody::Mars,
    KeplerianBody::Jupiter,
    KeplerianBody::Saturn,
];

/// The five planets observed from Earth (everything except Earth itself).
pub const VISIBLE_PLANETS: [KeplerianBody; 5] = [
    KeplerianBody::Mercury,
    KeplerianBody::Venus,
    KeplerianBody::Mars,
    KeplerianBody::Jupiter,
    KeplerianBody::Saturn,
];

impl KeplerianBody {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Earth => "Earth",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
        }
    }
}

/// Mean orbital elements at J2000.0 plus per-century rates.
///
/// Angles in degrees, semi-major axis in AU.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Mean longitude at epoch.
    pub l0: f64,
    /// Mean longitude rate per century.
    pub l1: f64,
    /// Eccentricity at epoch.
    pub e0: f64,
    /// Eccentricity rate per century.
    pub e1: f64,
    /// Inclination at epoch.
    pub i0: f64,
    /// Inclination rate per century.
    pub i1: f64,
    /// Longitude of the ascending node at epoch.
    pub omega0: f64,
    /// Node rate per century.
    pub omega1: f64,
    /// Longitude of perihelion at epoch.
    pub w0: f64,
    /// Perihelion rate per century.
    pub w1: f64,
    /// Semi-major axis (constant).
    pub a: f64,
}

impl KeplerianBody {
    /// Orbital elements for this body.
    #[rustfmt::skip]
    pub const fn elements(self) -> OrbitalElements {
        match self {
            Self::Mercury => OrbitalElements {
                l0: 252.250_84,  l1: 149_474.070_78,
                e0: 0.205_630_69, e1: 0.000_025_27,
                i0: 7.004_87,    i1: -0.005_94,
                omega0: 48.331_67, omega1: -0.125_34,
                w0: 77.456_45,   w1: 1.554_69,
                a: 0.387_098_93,
            },
            Self::Venus => OrbitalElements {
                l0: 181.979_73,  l1: 58_519.213_05,
                e0: 0.006_773_23, e1: -0.000_049_38,
                i0: 3.394_71,    i1: -0.000_79,
                omega0: 76.680_69, omega1: -0.277_69,
                w0: 131.532_98,  w1: 0.008_06,
                a: 0.723_331_99,
            },
            Self::Earth => OrbitalElements {
                l0: 100.464_35,  l1: 35_999.372_06,
                e0: 0.016_710_22, e1: -0.000_038_04,
                i0: 0.000_05,    i1: -0.012_94,
                omega0: -11.260_64, omega1: -0.181_75,
                w0: 102.947_19,  w1: 1.719_46,
                a: 1.000_000_11,
            },
            Self::Mars => OrbitalElements {
                l0: 355.453_32,  l1: 19_141.695_51,
                e0: 0.093_412_33, e1: 0.000_119_02,
                i0: 1.850_61,    i1: -0.006_81,
                omega0: 49.578_54, omega1: -0.292_57,
                w0: 336.040_84,  w1: 1.840_64,
                a: 1.523_662_31,
            },
            Self::Jupiter => OrbitalElements {
                l0: 34.404_38,   l1: 3_036.274_62,
                e0: 0.048_392_66, e1: -0.000_128_80,
                i0: 1.305_30,    i1: -0.001_89,
                omega0: 100.556_15, omega1: 0.390_81,
                w0: 14.753_85,   w1: 0.561_99,
                a: 5.203_363_01,
            },
            Self::Saturn => OrbitalElements {
                l0: 49.944_32,   l1: 1_222.493_62,
                e0: 0.054_150_60, e1: -0.000_367_62,
                i0: 2.484_46,    i1: 0.004_65,
                omega0: 113.715_04, omega1: -0.355_71,
                w0: 92.431_94,   w1: 0.971_35,
                a: 9.537_070_32,
            },
        }
    }
}
