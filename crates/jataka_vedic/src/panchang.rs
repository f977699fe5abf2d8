//! Panchang angas derived from the Sun-Moon geometry.
//!
//! Tithi and karana divide the Moon-Sun elongation (12 and 6 degree steps
//! respectively), yoga divides the sum of the two longitudes in nakshatra
//! spans. Both longitudes must be in the same zodiacal frame.

use crate::util::normalize_360;

/// Span of one tithi in elongation degrees.
pub const TITHI_SPAN: f64 = 12.0;

/// Span of one karana (half-tithi) in elongation degrees.
pub const KARANA_SPAN: f64 = 6.0;

/// Span of one yoga in summed-longitude degrees.
pub const YOGA_SPAN: f64 = 360.0 / 27.0;

#[rustfmt::skip]
const TITHI_NAMES: [&str; 15] = [
    "Pratipada", "Dwitiya", "Tritiya", "Chaturthi", "Panchami",
    "Shashthi", "Saptami", "Ashtami", "Navami", "Dashami",
    "Ekadashi", "Dwadashi", "Trayodashi", "Chaturdashi", "Purnima/Amavasya",
];

#[rustfmt::skip]
const YOGA_NAMES: [&str; 27] = [
    "Vishkumbha", "Priti", "Ayushman", "Saubhagya", "Shobhana",
    "Atiganda", "Sukarma", "Dhriti", "Shula", "Ganda",
    "Vriddhi", "Dhruva", "Vyaghata", "Harshana", "Vajra",
    "Siddhi", "Vyatipata", "Variyan", "Parigha", "Shiva",
    "Siddha", "Sadhya", "Shubha", "Shukla", "Brahma",
    "Indra", "Vaidhriti",
];

#[rustfmt::skip]
const KARANA_NAMES: [&str; 11] = [
    "Bava", "Balava", "Kaulava", "Taitila", "Gara", "Vanija", "Vishti",
    "Shakuni", "Chatushpada", "Naga", "Kimstughna",
];

/// Lunar fortnight: waxing (Shukla) or waning (Krishna).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paksha {
    Shukla,
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Paksha::Shukla => "Shukla",
            Paksha::Krishna => "Krishna",
        }
    }
}

/// Coarse lunar phase from the Moon-Sun elongation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoonPhase {
    Waxing,
    Waning,
}

impl MoonPhase {
    pub const fn name(self) -> &'static str {
        match self {
            MoonPhase::Waxing => "Waxing",
            MoonPhase::Waning => "Waning",
        }
    }
}

/// A tithi (lunar day), one of 30 per synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TithiInfo {
    /// Zero-based tithi index, 0..=29.
    pub index: usize,
    /// Fortnight the tithi belongs to.
    pub paksha: Paksha,
    /// Traditional name; the shared fifteenth entry covers both Purnima
    /// (index 14) and Amavasya (index 29).
    pub name: &'static str,
}

/// A yoga, one of 27.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YogaInfo {
    /// Zero-based yoga index, 0..=26.
    pub index: usize,
    pub name: &'static str,
}

/// A karana (half-tithi), one of 60 per synodic month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KaranaInfo {
    /// Zero-based karana index, 0..=59.
    pub index: usize,
    pub name: &'static str,
}

/// Tithi from the Moon-Sun elongation: `floor(elongation / 12)`.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let elong = normalize_360(elongation_deg);
    let index = ((elong / TITHI_SPAN) as usize).min(29);
    let paksha = if index < 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    TithiInfo {
        index,
        paksha,
        name: TITHI_NAMES[index % 15],
    }
}

/// Yoga from the sum of Sun and Moon longitudes.
pub fn yoga_from_sum(sum_deg: f64) -> YogaInfo {
    let sum = normalize_360(sum_deg);
    let index = ((sum / YOGA_SPAN) as usize).min(26);
    YogaInfo {
        index,
        name: YOGA_NAMES[index],
    }
}

/// Karana from the Moon-Sun elongation: `floor(elongation / 6)`.
///
/// The first 57 half-tithis cycle through the seven movable karanas; the
/// last three take the fixed karanas in order.
pub fn karana_from_elongation(elongation_deg: f64) -> KaranaInfo {
    let elong = normalize_360(elongation_deg);
    let index = ((elong / KARANA_SPAN) as usize).min(59);
    let name = if index < 57 {
        KARANA_NAMES[index % 7]
    } else {
        KARANA_NAMES[7 + (index - 57)]
    };
    KaranaInfo { index, name }
}

/// Waxing for elongations in [0, 180], waning past opposition.
pub fn moon_phase(elongation_deg: f64) -> MoonPhase {
    if normalize_360(elongation_deg) <= 180.0 {
        MoonPhase::Waxing
    } else {
        MoonPhase::Waning
    }
}
