//! The twelve rashis (sidereal zodiac signs).
//!
//! Each rashi spans exactly 30 degrees of the sidereal ecliptic, starting
//! from 0 degrees Mesha.

use crate::util::normalize_360;

/// Width of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// A sidereal zodiac sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rashi {
    Mesha,
    Vrishabha,
    Mithuna,
    Karka,
    Simha,
    Kanya,
    Tula,
    Vrishchika,
    Dhanu,
    Makara,
    Kumbha,
    Meena,
}

/// All twelve rashis in zodiacal order.
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrishchika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    /// Sanskrit name (transliterated).
    pub const fn name(self) -> &'static str {
        match self {
            Rashi::Mesha => "Mesha",
            Rashi::Vrishabha => "Vrishabha",
            Rashi::Mithuna => "Mithuna",
            Rashi::Karka => "Karka",
            Rashi::Simha => "Simha",
            Rashi::Kanya => "Kanya",
            Rashi::Tula => "Tula",
            Rashi::Vrishchika => "Vrishchika",
            Rashi::Dhanu => "Dhanu",
            Rashi::Makara => "Makara",
            Rashi::Kumbha => "Kumbha",
            Rashi::Meena => "Meena",
        }
    }

    /// Western sign name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Rashi::Mesha => "Aries",
            Rashi::Vrishabha => "Taurus",
            Rashi::Mithuna => "Gemini",
            Rashi::Karka => "Cancer",
            Rashi::Simha => "Leo",
            Rashi::Kanya => "Virgo",
            Rashi::Tula => "Libra",
            Rashi::Vrishchika => "Scorpio",
            Rashi::Dhanu => "Sagittarius",
            Rashi::Makara => "Capricorn",
            Rashi::Kumbha => "Aquarius",
            Rashi::Meena => "Pisces",
        }
    }

    /// Devanagari name.
    pub const fn hindi_name(self) -> &'static str {
        match self {
            Rashi::Mesha => "मेष",
            Rashi::Vrishabha => "वृषभ",
            Rashi::Mithuna => "मिथुन",
            Rashi::Karka => "कर्क",
            Rashi::Simha => "सिंह",
            Rashi::Kanya => "कन्या",
            Rashi::Tula => "तुला",
            Rashi::Vrishchika => "वृश्चिक",
            Rashi::Dhanu => "धनु",
            Rashi::Makara => "मकर",
            Rashi::Kumbha => "कुंभ",
            Rashi::Meena => "मीन",
        }
    }

    /// Zero-based zodiacal index, 0..=11.
    pub const fn index(self) -> usize {
        match self {
            Rashi::Mesha => 0,
            Rashi::Vrishabha => 1,
            Rashi::Mithuna => 2,
            Rashi::Karka => 3,
            Rashi::Simha => 4,
            Rashi::Kanya => 5,
            Rashi::Tula => 6,
            Rashi::Vrishchika => 7,
            Rashi::Dhanu => 8,
            Rashi::Makara => 9,
            Rashi::Kumbha => 10,
            Rashi::Meena => 11,
        }
    }

    /// Rashi from a zero-based index, modulo 12.
    pub const fn from_index(index: usize) -> Rashi {
        ALL_RASHIS[index % 12]
    }
}

/// A longitude resolved into its rashi and position within it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RashiInfo {
    /// Which sign the longitude falls in.
    pub rashi: Rashi,
    /// Degrees into the sign, [0, 30).
    pub degree_in_sign: f64,
}

/// Resolve a sidereal longitude into its rashi.
///
/// The longitude is normalized into [0, 360) first, so any finite value
/// is accepted.
pub fn rashi_from_longitude(sidereal_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_deg);
    let index = (lon / RASHI_SPAN) as usize;
    RashiInfo {
        rashi: Rashi::from_index(index),
        degree_in_sign: lon - index as f64 * RASHI_SPAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_mesha() {
        let info = rashi_from_longitude(0.0);
        assert_eq!(info.rashi, Rashi::Mesha);
        assert!(info.degree_in_sign.abs() < 1e-12);
    }

    #[test]
    fn sign_boundaries() {
        assert_eq!(rashi_from_longitude(29.999).rashi, Rashi::Mesha);
        assert_eq!(rashi_from_longitude(30.0).rashi, Rashi::Vrishabha);
        assert_eq!(rashi_from_longitude(359.999).rashi, Rashi::Meena);
    }

    #[test]
    fn wraps_over_360() {
        let info = rashi_from_longitude(390.0);
        assert_eq!(info.rashi, Rashi::Vrishabha);
        assert!(info.degree_in_sign.abs() < 1e-9);
    }

    #[test]
    fn negative_longitude() {
        let info = rashi_from_longitude(-10.0);
        assert_eq!(info.rashi, Rashi::Meena);
        assert!((info.degree_in_sign - 20.0).abs() < 1e-9);
    }

    #[test]
    fn index_round_trip() {
        for (i, rashi) in ALL_RASHIS.iter().enumerate() {
            assert_eq!(rashi.index(), i);
            assert_eq!(Rashi::from_index(i), *rashi);
        }
    }
}
