//! Birth data intake and validation.
//!
//! All validation happens here, before any astronomy runs: a
//! [`BirthMoment`] can only be constructed from well-formed input, so the
//! calculation paths never see a malformed date or an out-of-range
//! coordinate.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::debug;

use jataka_time::{calendar_to_jd, resolve_offset_hours};

use crate::error::KundaliError;

/// Raw birth chart request, as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthInput {
    /// Local calendar date, `YYYY-MM-DD`.
    pub date_of_birth: String,
    /// Local wall-clock time, `HH:MM` 24-hour.
    pub time_of_birth: String,
    /// Geographic latitude, north-positive, [-90, 90].
    pub latitude: f64,
    /// Geographic longitude, east-positive, [-180, 180].
    pub longitude: f64,
    /// IANA timezone identifier; unknown values fall back to IST.
    pub timezone: String,
}

/// A validated birth instant with its place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BirthMoment {
    /// Wall-clock datetime in the birth timezone.
    pub local: NaiveDateTime,
    /// UTC offset resolved for that local instant, decimal hours.
    pub offset_hours: f64,
    pub latitude: f64,
    pub longitude: f64,
}

impl BirthInput {
    /// Validate the request and resolve its timezone.
    pub fn validate(&self) -> Result<BirthMoment, KundaliError> {
        let date = NaiveDate::parse_from_str(&self.date_of_birth, "%Y-%m-%d")
            .map_err(|_| KundaliError::InvalidDate(self.date_of_birth.clone()))?;
        let time = NaiveTime::parse_from_str(&self.time_of_birth, "%H:%M")
            .map_err(|_| KundaliError::InvalidTime(self.time_of_birth.clone()))?;

        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(KundaliError::LatitudeOutOfRange(self.latitude));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(KundaliError::LongitudeOutOfRange(self.longitude));
        }

        let local = date.and_time(time);
        let resolution = resolve_offset_hours(&self.timezone, local);
        debug!(
            zone = %self.timezone,
            offset_hours = resolution.offset_hours(),
            fallback = resolution.is_fallback(),
            "resolved birth timezone"
        );

        Ok(BirthMoment {
            local,
            offset_hours: resolution.offset_hours(),
            latitude: self.latitude,
            longitude: self.longitude,
        })
    }
}

impl BirthMoment {
    /// Julian Day of the birth instant in UT.
    ///
    /// The Julian Day routine accepts decimal hours outside [0, 24), so
    /// the offset subtraction never needs an explicit day rollover.
    pub fn julian_day(&self) -> f64 {
        let date = self.local.date();
        let hour_local =
            f64::from(self.local.hour()) + f64::from(self.local.minute()) / 60.0;
        calendar_to_jd(
            date.year(),
            date.month(),
            date.day(),
            hour_local - self.offset_hours,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input() -> BirthInput {
        BirthInput {
            date_of_birth: "2000-01-01".into(),
            time_of_birth: "00:00".into(),
            latitude: 0.0,
            longitude: 0.0,
            timezone: "UTC".into(),
        }
    }

    #[test]
    fn j2000_midnight_utc() {
        let moment = input().validate().unwrap();
        assert!((moment.julian_day() - 2_451_544.5).abs() < 1e-9);
    }

    #[test]
    fn offset_shifts_the_julian_day() {
        let mut req = input();
        req.timezone = "Asia/Kolkata".into();
        let moment = req.validate().unwrap();
        // 00:00 IST is 18:30 UT the previous day.
        assert!((moment.julian_day() - (2_451_544.5 - 5.5 / 24.0)).abs() < 1e-9);
    }

    #[test]
    fn rejects_malformed_date() {
        let mut req = input();
        req.date_of_birth = "01-01-2000".into();
        assert!(matches!(
            req.validate(),
            Err(KundaliError::InvalidDate(_))
        ));
    }

    #[test]
    fn rejects_impossible_date() {
        let mut req = input();
        req.date_of_birth = "2001-02-29".into();
        assert!(matches!(
            req.validate(),
            Err(KundaliError::InvalidDate(_))
        ));
    }

    #[test]
    fn rejects_malformed_time() {
        let mut req = input();
        req.time_of_birth = "25:00".into();
        assert!(matches!(
            req.validate(),
            Err(KundaliError::InvalidTime(_))
        ));
    }

    #[test]
    fn rejects_out_of_range_coordinates() {
        let mut req = input();
        req.latitude = 95.0;
        assert!(matches!(
            req.validate(),
            Err(KundaliError::LatitudeOutOfRange(_))
        ));

        let mut req = input();
        req.longitude = -200.0;
        assert!(matches!(
            req.validate(),
            Err(KundaliError::LongitudeOutOfRange(_))
        ));
    }

    #[test]
    fn camel_case_wire_names() {
        let req = input();
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains("\"dateOfBirth\""));
        assert!(json.contains("\"timeOfBirth\""));
        assert!(json.contains("\"timezone\""));
    }
}
