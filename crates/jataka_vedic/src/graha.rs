//! The nine grahas of jyotisha.
//!
//! Seven visible bodies plus the two lunar nodes (Rahu and Ketu).
//! Chart order follows the traditional listing: Surya, Chandra, Buddh,
//! Shukra, Mangal, Guru, Shani, Rahu, Ketu.

/// A graha (celestial influence) of the Vedic chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Graha {
    /// Sun
    Surya,
    /// Moon
    Chandra,
    /// Mercury
    Buddh,
    /// Venus
    Shukra,
    /// Mars
    Mangal,
    /// Jupiter
    Guru,
    /// Saturn
    Shani,
    /// North lunar node
    Rahu,
    /// South lunar node
    Ketu,
}

/// All nine grahas in chart order.
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Buddh,
    Graha::Shukra,
    Graha::Mangal,
    Graha::Guru,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Vimshottari lord sequence, starting from Ketu.
///
/// Nakshatra lordship and dasha ordering both follow this cycle.
pub const DASHA_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

impl Graha {
    /// Sanskrit name (transliterated).
    pub const fn name(self) -> &'static str {
        match self {
            Graha::Surya => "Surya",
            Graha::Chandra => "Chandra",
            Graha::Buddh => "Buddh",
            Graha::Shukra => "Shukra",
            Graha::Mangal => "Mangal",
            Graha::Guru => "Guru",
            Graha::Shani => "Shani",
            Graha::Rahu => "Rahu",
            Graha::Ketu => "Ketu",
        }
    }

    /// English planet name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Graha::Surya => "Sun",
            Graha::Chandra => "Moon",
            Graha::Buddh => "Mercury",
            Graha::Shukra => "Venus",
            Graha::Mangal => "Mars",
            Graha::Guru => "Jupiter",
            Graha::Shani => "Saturn",
            Graha::Rahu => "Rahu",
            Graha::Ketu => "Ketu",
        }
    }

    /// Devanagari name.
    pub const fn hindi_name(self) -> &'static str {
        match self {
            Graha::Surya => "सूर्य",
            Graha::Chandra => "चंद्र",
            Graha::Buddh => "बुध",
            Graha::Shukra => "शुक्र",
            Graha::Mangal => "मंगल",
            Graha::Guru => "गुरु",
            Graha::Shani => "शनि",
            Graha::Rahu => "राहु",
            Graha::Ketu => "केतु",
        }
    }

    /// Position in chart order, 0..=8.
    pub const fn index(self) -> usize {
        match self {
            Graha::Surya => 0,
            Graha::Chandra => 1,
            Graha::Buddh => 2,
            Graha::Shukra => 3,
            Graha::Mangal => 4,
            Graha::Guru => 5,
            Graha::Shani => 6,
            Graha::Rahu => 7,
            Graha::Ketu => 8,
        }
    }

    /// Vimshottari mahadasha allocation in years.
    pub const fn dasha_years(self) -> f64 {
        match self {
            Graha::Ketu => 7.0,
            Graha::Shukra => 20.0,
            Graha::Surya => 6.0,
            Graha::Chandra => 10.0,
            Graha::Mangal => 7.0,
            Graha::Rahu => 18.0,
            Graha::Guru => 16.0,
            Graha::Shani => 19.0,
            Graha::Buddh => 17.0,
        }
    }
}
