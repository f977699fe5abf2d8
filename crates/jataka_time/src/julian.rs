//! Gregorian calendar ↔ Julian Day conversion.
//!
//! Standard arithmetic conversion (Meeus, *Astronomical Algorithms*,
//! Chapter 7): months January/February are counted as months 13/14 of the
//! previous year, and the Gregorian century correction `2 − A + A/4` is
//! applied unconditionally (the engine accepts Gregorian dates only).

/// Julian Date of the J2000.0 epoch (2000 January 1.5 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Convert a Gregorian calendar date plus decimal hours UTC to a Julian Day.
///
/// `hour_utc` is decimal hours and MUST already be in UTC; no timezone math
/// happens here. Fractional, negative, and >24 values are accepted: the
/// `hour / 24` term rolls the day over implicitly, so e.g.
/// `calendar_to_jd(2000, 1, 1, -6.0)` lands on 1999-12-31 18:00 UTC.
pub fn calendar_to_jd(year: i32, month: u32, day: u32, hour_utc: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };

    let a = (y as f64 / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();

    (365.25 * (y as f64 + 4716.0)).floor()
        + (30.6001 * (m as f64 + 1.0)).floor()
        + day as f64
        + b
        - 1524.5
        + hour_utc / 24.0
}

/// Convert a Julian Day back to a Gregorian calendar date.
///
/// Returns `(year, month, day_fraction)` where the integer part of
/// `day_fraction` is the day of month and the fractional part is the time
/// of day. Inverse of [`calendar_to_jd`] (Meeus Ch. 7).
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let z = (jd + 0.5).floor();
    let f = jd + 0.5 - z;

    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };

    (year as i32, month as u32, day)
}

/// Julian centuries since J2000.0: `(JD − 2451545.0) / 36525`.
///
/// Time argument for every periodic/secular series in the engine.
pub fn julian_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}
