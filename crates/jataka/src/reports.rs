//! Standalone daily-panchang and dasha query paths.
//!
//! These answer the lighter queries that need no full chart: the panchang
//! for a calendar date at a place (evaluated at local noon), and the
//! dasha timeline for a birth with the currently running periods picked
//! out against a caller-supplied instant.

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::Serialize;

use jataka_core::{moon_position, sun_longitude_deg};
use jataka_time::calendar_to_jd;
use jataka_vedic::{
    active_dasha_at, lahiri_ayanamsha_deg, nakshatra_from_longitude, rashi_from_longitude,
    to_sidereal, vimshottari_mahadashas,
};

use crate::error::KundaliError;
use crate::kundali::{DashaData, MoonNakshatra, PanchangData, dasha_data, panchang_data};

/// Daily panchang for a date and place.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangReport {
    /// The queried date, `YYYY-MM-DD`.
    pub date: String,
    #[serde(flatten)]
    pub panchang: PanchangData,
    pub moon_sign: &'static str,
    pub sun_sign: &'static str,
    pub ayanamsa: f64,
}

/// Dasha timeline with the periods running at a query instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaReport {
    /// Lord of the running mahadasha, empty when the instant falls
    /// outside the 120-year timeline.
    pub current_mahadasha: String,
    /// Lord of the running antardasha, empty under the same condition.
    pub current_antardasha: String,
    pub dashas: Vec<DashaData>,
}

fn parse_date(date: &str) -> Result<NaiveDate, KundaliError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| KundaliError::InvalidDate(date.to_owned()))
}

/// Panchang for a calendar date, evaluated at 12:00 UT.
pub fn daily_panchang(
    date: &str,
    latitude: f64,
    longitude: f64,
) -> Result<PanchangReport, KundaliError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(KundaliError::LatitudeOutOfRange(latitude));
    }
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(KundaliError::LongitudeOutOfRange(longitude));
    }
    let parsed = parse_date(date)?;

    let jd = calendar_to_jd(parsed.year(), parsed.month(), parsed.day(), 12.0);
    let ayanamsa = lahiri_ayanamsha_deg(jd);
    let sun_sidereal = to_sidereal(sun_longitude_deg(jd), ayanamsa);
    let moon_sidereal = to_sidereal(moon_position(jd).longitude_deg, ayanamsa);

    let moon_nak = nakshatra_from_longitude(moon_sidereal);
    let nakshatra = MoonNakshatra {
        name: moon_nak.nakshatra.name(),
        hindi: moon_nak.nakshatra.hindi_name(),
        lord: moon_nak.nakshatra.lord().english_name(),
        pada: moon_nak.pada,
    };

    Ok(PanchangReport {
        date: date.to_owned(),
        panchang: panchang_data(jd, sun_sidereal, moon_sidereal, latitude, longitude, nakshatra),
        moon_sign: rashi_from_longitude(moon_sidereal).rashi.english_name(),
        sun_sign: rashi_from_longitude(sun_sidereal).rashi.english_name(),
        ayanamsa,
    })
}

/// Dasha timeline for a birth, with the running periods at `query_jd`.
pub fn dasha_report(
    date_of_birth: &str,
    time_of_birth: &str,
    query_jd: f64,
) -> Result<DashaReport, KundaliError> {
    let date = parse_date(date_of_birth)?;
    let time = NaiveTime::parse_from_str(time_of_birth, "%H:%M")
        .map_err(|_| KundaliError::InvalidTime(time_of_birth.to_owned()))?;

    let hour = f64::from(time.hour()) + f64::from(time.minute()) / 60.0;
    let jd = calendar_to_jd(date.year(), date.month(), date.day(), hour);

    let ayanamsa = lahiri_ayanamsha_deg(jd);
    let moon_sidereal = to_sidereal(moon_position(jd).longitude_deg, ayanamsa);
    let mahadashas = vimshottari_mahadashas(jd, moon_sidereal);

    let (current_mahadasha, current_antardasha) = match active_dasha_at(&mahadashas, query_jd) {
        Some((maha, antar)) => (
            maha.graha.english_name().to_owned(),
            antar.graha.english_name().to_owned(),
        ),
        None => (String::new(), String::new()),
    };

    Ok(DashaReport {
        current_mahadasha,
        current_antardasha,
        dashas: dasha_data(&mahadashas),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn panchang_report_shape() {
        let report = daily_panchang("2024-03-15", 28.6, 77.2).unwrap();
        assert_eq!(report.date, "2024-03-15");
        assert!(report.panchang.tithi.index < 30);
        assert!(report.panchang.yoga.index < 27);
        assert!(report.panchang.karana.index < 60);
        assert!(report.ayanamsa > 24.0);
    }

    #[test]
    fn panchang_rejects_bad_inputs() {
        assert!(matches!(
            daily_panchang("15-03-2024", 28.6, 77.2),
            Err(KundaliError::InvalidDate(_))
        ));
        assert!(matches!(
            daily_panchang("2024-03-15", 99.0, 77.2),
            Err(KundaliError::LatitudeOutOfRange(_))
        ));
    }

    #[test]
    fn dasha_report_finds_running_period() {
        // Query one year after birth: inside the first mahadasha's span
        // for any balance of at least six years.
        let birth_jd = calendar_to_jd(1990, 5, 15, 10.5);
        let report = dasha_report("1990-05-15", "10:30", birth_jd + 365.0).unwrap();
        assert_eq!(report.dashas.len(), 9);
        assert!(!report.current_mahadasha.is_empty());
        assert!(!report.current_antardasha.is_empty());
    }

    #[test]
    fn dasha_report_outside_timeline_is_empty() {
        let birth_jd = calendar_to_jd(1990, 5, 15, 10.5);
        let report = dasha_report("1990-05-15", "10:30", birth_jd - 10.0).unwrap();
        assert!(report.current_mahadasha.is_empty());
        assert!(report.current_antardasha.is_empty());
    }

    #[test]
    fn panchang_serializes_flattened() {
        let report = daily_panchang("2024-03-15", 28.6, 77.2).unwrap();
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"tithi\""));
        assert!(json.contains("\"sunrise\""));
        assert!(json.contains("\"moonSign\""));
    }
}
