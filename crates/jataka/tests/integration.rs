//! End-to-end chart scenarios for the jataka engine.

use jataka::*;
use jataka_time::calendar_to_jd;

fn delhi_birth() -> BirthInput {
    BirthInput {
        date_of_birth: "1990-05-15".into(),
        time_of_birth: "10:30".into(),
        latitude: 28.6139,
        longitude: 77.2090,
        timezone: "Asia/Kolkata".into(),
    }
}

#[test]
fn j2000_epoch_julian_day() {
    let input = BirthInput {
        date_of_birth: "2000-01-01".into(),
        time_of_birth: "00:00".into(),
        latitude: 0.0,
        longitude: 0.0,
        timezone: "UTC".into(),
    };
    let moment = input.validate().unwrap();
    assert!((moment.julian_day() - 2_451_544.5).abs() < 1e-9);
}

#[test]
fn full_chart_is_fully_populated() {
    let result = compute_kundali(&delhi_birth()).unwrap();

    assert_eq!(result.planets.len(), 9);
    assert_eq!(result.houses.len(), 12);
    assert_eq!(result.dashas.len(), 9);
    assert_eq!(result.charts.d1.planets.len(), 9);
    assert_eq!(result.charts.d9.planets.len(), 9);

    for planet in &result.planets {
        assert!((0.0..360.0).contains(&planet.sidereal_longitude));
        assert!((0.0..30.0).contains(&planet.degree));
        assert!((1..=12).contains(&planet.house));
        assert!((1..=4).contains(&planet.nakshatra_pada));
    }
}

#[test]
fn house_signs_are_a_rotation_of_the_zodiac() {
    let result = compute_kundali(&delhi_birth()).unwrap();
    let mut signs: Vec<&str> = result.houses.iter().map(|h| h.sign).collect();
    signs.sort_unstable();
    signs.dedup();
    assert_eq!(signs.len(), 12);
}

#[test]
fn ketu_opposes_rahu_in_every_chart() {
    for (date, time) in [
        ("1975-03-03", "04:15"),
        ("1990-05-15", "10:30"),
        ("2010-11-28", "23:45"),
    ] {
        let result = compute_kundali(&BirthInput {
            date_of_birth: date.into(),
            time_of_birth: time.into(),
            latitude: 19.076,
            longitude: 72.8777,
            timezone: "Asia/Kolkata".into(),
        })
        .unwrap();
        let rahu = &result.planets[7];
        let ketu = &result.planets[8];
        let diff = (ketu.sidereal_longitude - rahu.sidereal_longitude).rem_euclid(360.0);
        assert!((diff - 180.0).abs() < 1e-9, "{date}: {diff}");
        assert!(rahu.is_retrograde && ketu.is_retrograde);
    }
}

#[test]
fn dasha_allocations_total_120_years() {
    let result = compute_kundali(&delhi_birth()).unwrap();
    // The eight full mahadashas plus the first one's tabulated (untruncated)
    // allocation must cover the whole cycle; verify via the lords' order
    // wrapping the fixed sequence.
    let lords: Vec<&str> = result.dashas.iter().map(|d| d.mahadasha).collect();
    let sequence = [
        "Ketu", "Venus", "Sun", "Moon", "Mars", "Rahu", "Jupiter", "Saturn", "Mercury",
    ];
    let start = sequence
        .iter()
        .position(|lord| *lord == lords[0])
        .unwrap();
    for (i, lord) in lords.iter().enumerate() {
        assert_eq!(*lord, sequence[(start + i) % 9]);
    }
}

#[test]
fn dasha_dates_are_iso_and_contiguous() {
    let result = compute_kundali(&delhi_birth()).unwrap();
    for dasha in &result.dashas {
        assert_eq!(dasha.mahadasha_start.len(), 10);
        assert_eq!(dasha.mahadasha_end.len(), 10);
        assert_eq!(dasha.antardashas.len(), 9);
        assert_eq!(dasha.antardashas[0].start, dasha.mahadasha_start);
    }
    for pair in result.dashas.windows(2) {
        assert_eq!(pair[0].mahadasha_end, pair[1].mahadasha_start);
    }
}

#[test]
fn polar_latitude_reports_no_sun_events() {
    // Deep polar winter at 89 degrees north.
    let report = daily_panchang("2024-01-05", 89.0, 0.0).unwrap();
    assert_eq!(report.panchang.sunrise, "No sunrise");
    assert_eq!(report.panchang.sunset, "No sunset");
}

#[test]
fn tropical_latitude_reports_clock_times() {
    let report = daily_panchang("2024-03-15", 28.6, 77.2).unwrap();
    assert_eq!(report.panchang.sunrise.len(), 5);
    assert_eq!(&report.panchang.sunrise[2..3], ":");
    assert_eq!(report.panchang.sunset.len(), 5);
}

#[test]
fn unknown_timezone_still_produces_a_chart() {
    let mut input = delhi_birth();
    input.timezone = "Not/AZone".into();
    let result = compute_kundali(&input).unwrap();
    assert_eq!(result.planets.len(), 9);
}

#[test]
fn byte_identical_reruns() {
    let a = serde_json::to_vec(&compute_kundali(&delhi_birth()).unwrap()).unwrap();
    let b = serde_json::to_vec(&compute_kundali(&delhi_birth()).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn transits_for_explicit_instant() {
    let jd = calendar_to_jd(2024, 6, 1, 0.0);
    let transits = transits_at(jd);
    assert_eq!(transits.len(), 9);
    assert_eq!(transits[0].planet, "Sun");
    assert_eq!(transits[8].planet, "Ketu");
}

#[test]
fn validation_rejects_before_any_math() {
    let mut input = delhi_birth();
    input.date_of_birth = "1990/05/15".into();
    assert!(matches!(
        compute_kundali(&input),
        Err(KundaliError::InvalidDate(_))
    ));

    let mut input = delhi_birth();
    input.latitude = -93.0;
    assert!(matches!(
        compute_kundali(&input),
        Err(KundaliError::LatitudeOutOfRange(_))
    ));
}
