//! Current-sky transit positions.
//!
//! A lightweight query needing no birth data: the nine grahas' sidereal
//! sign, degree, and retrograde status at an explicit instant. The caller
//! supplies the instant, so the computation stays deterministic and
//! testable.

use serde::Serialize;

use jataka_core::{
    geocentric_longitude, is_retrograde, moon_position, rahu_longitude_deg, sun_longitude_deg,
};
use jataka_vedic::{Graha, lahiri_ayanamsha_deg, rashi_from_longitude, to_sidereal};

/// One graha's transit placement.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransitRecord {
    pub planet: &'static str,
    pub sign: &'static str,
    /// Degrees into the sign, [0, 30).
    pub degree: f64,
    pub is_retrograde: bool,
}

fn transit(graha: Graha, sidereal: f64, is_retrograde: bool) -> TransitRecord {
    let rashi = rashi_from_longitude(sidereal);
    TransitRecord {
        planet: graha.english_name(),
        sign: rashi.rashi.english_name(),
        degree: rashi.degree_in_sign,
        is_retrograde,
    }
}

/// Sidereal transit positions of all nine grahas at a JD.
pub fn transits_at(jd: f64) -> Vec<TransitRecord> {
    let ayanamsa = lahiri_ayanamsha_deg(jd);

    let mut records = Vec::with_capacity(9);
    records.push(transit(
        Graha::Surya,
        to_sidereal(sun_longitude_deg(jd), ayanamsa),
        false,
    ));
    records.push(transit(
        Graha::Chandra,
        to_sidereal(moon_position(jd).longitude_deg, ayanamsa),
        false,
    ));
    for (body, graha) in crate::kundali::KEPLERIAN_GRAHAS {
        let (Some(tropical), Some(retro)) =
            (geocentric_longitude(body, jd), is_retrograde(body, jd))
        else {
            continue;
        };
        records.push(transit(graha, to_sidereal(tropical, ayanamsa), retro));
    }
    let rahu_sidereal = to_sidereal(rahu_longitude_deg(jd), ayanamsa);
    records.push(transit(Graha::Rahu, rahu_sidereal, true));
    records.push(transit(Graha::Ketu, (rahu_sidereal + 180.0) % 360.0, true));

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    const JD: f64 = 2_460_000.5;

    #[test]
    fn nine_records_in_chart_order() {
        let transits = transits_at(JD);
        let names: Vec<&str> = transits.iter().map(|t| t.planet).collect();
        assert_eq!(
            names,
            [
                "Sun", "Moon", "Mercury", "Venus", "Mars", "Jupiter", "Saturn", "Rahu", "Ketu"
            ]
        );
    }

    #[test]
    fn luminaries_direct_nodes_retrograde() {
        let transits = transits_at(JD);
        assert!(!transits[0].is_retrograde);
        assert!(!transits[1].is_retrograde);
        assert!(transits[7].is_retrograde);
        assert!(transits[8].is_retrograde);
    }

    #[test]
    fn degrees_within_a_sign() {
        for t in transits_at(JD) {
            assert!((0.0..30.0).contains(&t.degree), "{} at {}", t.planet, t.degree);
        }
    }

    #[test]
    fn deterministic_for_a_fixed_instant() {
        assert_eq!(transits_at(JD), transits_at(JD));
    }
}
