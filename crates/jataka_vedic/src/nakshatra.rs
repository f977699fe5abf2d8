//! The 27 nakshatras (lunar mansions).
//!
//! Equal-division scheme: each nakshatra spans 360/27 = 13°20′ of the
//! sidereal ecliptic and divides into four padas of 3°20′ each. Lordship
//! cycles through the Vimshottari sequence three times around the zodiac.

use crate::graha::{DASHA_SEQUENCE, Graha};
use crate::util::normalize_360;

/// Angular span of one nakshatra in degrees (13°20′).
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Angular span of one pada in degrees (3°20′).
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// A lunar mansion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in zodiacal order starting at 0° Mesha.
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Transliterated Sanskrit name.
    pub const fn name(self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "Ashwini",
            Nakshatra::Bharani => "Bharani",
            Nakshatra::Krittika => "Krittika",
            Nakshatra::Rohini => "Rohini",
            Nakshatra::Mrigashira => "Mrigashira",
            Nakshatra::Ardra => "Ardra",
            Nakshatra::Punarvasu => "Punarvasu",
            Nakshatra::Pushya => "Pushya",
            Nakshatra::Ashlesha => "Ashlesha",
            Nakshatra::Magha => "Magha",
            Nakshatra::PurvaPhalguni => "Purva Phalguni",
            Nakshatra::UttaraPhalguni => "Uttara Phalguni",
            Nakshatra::Hasta => "Hasta",
            Nakshatra::Chitra => "Chitra",
            Nakshatra::Swati => "Swati",
            Nakshatra::Vishakha => "Vishakha",
            Nakshatra::Anuradha => "Anuradha",
            Nakshatra::Jyeshtha => "Jyeshtha",
            Nakshatra::Mula => "Mula",
            Nakshatra::PurvaAshadha => "Purva Ashadha",
            Nakshatra::UttaraAshadha => "Uttara Ashadha",
            Nakshatra::Shravana => "Shravana",
            Nakshatra::Dhanishta => "Dhanishta",
            Nakshatra::Shatabhisha => "Shatabhisha",
            Nakshatra::PurvaBhadrapada => "Purva Bhadrapada",
            Nakshatra::UttaraBhadrapada => "Uttara Bhadrapada",
            Nakshatra::Revati => "Revati",
        }
    }

    /// Devanagari name.
    pub const fn hindi_name(self) -> &'static str {
        match self {
            Nakshatra::Ashwini => "अश्विनी",
            Nakshatra::Bharani => "भरणी",
            Nakshatra::Krittika => "कृत्तिका",
            Nakshatra::Rohini => "रोहिणी",
            Nakshatra::Mrigashira => "मृगशिरा",
            Nakshatra::Ardra => "आर्द्रा",
            Nakshatra::Punarvasu => "पुनर्वसु",
            Nakshatra::Pushya => "पुष्य",
            Nakshatra::Ashlesha => "आश्लेषा",
            Nakshatra::Magha => "मघा",
            Nakshatra::PurvaPhalguni => "पूर्व फाल्गुनी",
            Nakshatra::UttaraPhalguni => "उत्तर फाल्गुनी",
            Nakshatra::Hasta => "हस्त",
            Nakshatra::Chitra => "चित्रा",
            Nakshatra::Swati => "स्वाति",
            Nakshatra::Vishakha => "विशाखा",
            Nakshatra::Anuradha => "अनुराधा",
            Nakshatra::Jyeshtha => "ज्येष्ठा",
            Nakshatra::Mula => "मूल",
            Nakshatra::PurvaAshadha => "पूर्वाषाढ़ा",
            Nakshatra::UttaraAshadha => "उत्तराषाढ़ा",
            Nakshatra::Shravana => "श्रवण",
            Nakshatra::Dhanishta => "धनिष्ठा",
            Nakshatra::Shatabhisha => "शतभिषा",
            Nakshatra::PurvaBhadrapada => "पूर्व भाद्रपद",
            Nakshatra::UttaraBhadrapada => "उत्तर भाद्रपद",
            Nakshatra::Revati => "रेवती",
        }
    }

    /// Zero-based zodiacal index, 0..=26.
    pub fn index(self) -> usize {
        ALL_NAKSHATRAS.iter().position(|n| *n == self).unwrap_or(0)
    }

    /// Nakshatra from a zero-based index, modulo 27.
    pub const fn from_index(index: usize) -> Nakshatra {
        ALL_NAKSHATRAS[index % 27]
    }

    /// Vimshottari lord: the dasha sequence repeats every 9 nakshatras.
    pub fn lord(self) -> Graha {
        DASHA_SEQUENCE[self.index() % 9]
    }
}

/// A longitude resolved into its nakshatra and pada.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NakshatraInfo {
    /// Which nakshatra the longitude falls in.
    pub nakshatra: Nakshatra,
    /// Pada within the nakshatra, 1..=4.
    pub pada: u8,
    /// Degrees into the nakshatra, [0, 13°20′).
    pub degree_in_nakshatra: f64,
}

/// Resolve a sidereal longitude into its nakshatra and pada.
pub fn nakshatra_from_longitude(sidereal_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_deg);
    let index = ((lon / NAKSHATRA_SPAN) as usize).min(26);
    let degree_in_nakshatra = lon - index as f64 * NAKSHATRA_SPAN;
    let pada = ((degree_in_nakshatra / PADA_SPAN) as u8).min(3) + 1;
    NakshatraInfo {
        nakshatra: Nakshatra::from_index(index),
        pada,
        degree_in_nakshatra,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_is_ashwini_pada_one() {
        let info = nakshatra_from_longitude(0.0);
        assert_eq!(info.nakshatra, Nakshatra::Ashwini);
        assert_eq!(info.pada, 1);
    }

    #[test]
    fn bharani_starts_at_13_20() {
        let info = nakshatra_from_longitude(NAKSHATRA_SPAN);
        assert_eq!(info.nakshatra, Nakshatra::Bharani);
        assert!(info.degree_in_nakshatra.abs() < 1e-9);
    }

    #[test]
    fn last_degree_is_revati_pada_four() {
        let info = nakshatra_from_longitude(359.999);
        assert_eq!(info.nakshatra, Nakshatra::Revati);
        assert_eq!(info.pada, 4);
    }

    #[test]
    fn pada_boundaries() {
        assert_eq!(nakshatra_from_longitude(PADA_SPAN - 0.001).pada, 1);
        assert_eq!(nakshatra_from_longitude(PADA_SPAN).pada, 2);
        assert_eq!(nakshatra_from_longitude(2.0 * PADA_SPAN).pada, 3);
        assert_eq!(nakshatra_from_longitude(3.0 * PADA_SPAN).pada, 4);
    }

    #[test]
    fn lords_cycle_three_times() {
        assert_eq!(Nakshatra::Ashwini.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Bharani.lord(), Graha::Shukra);
        assert_eq!(Nakshatra::Magha.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Mula.lord(), Graha::Ketu);
        assert_eq!(Nakshatra::Revati.lord(), Graha::Buddh);
    }

    #[test]
    fn indices_round_trip() {
        for (i, nak) in ALL_NAKSHATRAS.iter().enumerate() {
            assert_eq!(nak.index(), i);
            assert_eq!(Nakshatra::from_index(i), *nak);
        }
    }
}
