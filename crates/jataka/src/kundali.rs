//! Full birth chart (kundali) assembly.
//!
//! Pulls the tropical longitudes from `jataka_core`, converts them to the
//! sidereal frame, and derives every chart element: lagna, houses, the
//! nine planet records, panchang, the Vimshottari dasha timeline, and the
//! D1/D9 divisional charts. The result serializes to the engine's JSON
//! shape (camelCase field names).

use serde::Serialize;
use tracing::info;

use jataka_core::{
    KeplerianBody, geocentric_longitude, is_retrograde, moon_position, rahu_longitude_deg,
    sun_longitude_deg,
};
use jataka_time::jd_to_calendar;
use jataka_vedic::{
    Graha, Mahadasha, RiseSet, ascendant_tropical_deg, karana_from_elongation,
    lahiri_ayanamsha_deg, moon_phase, nakshatra_from_longitude, rashi_from_longitude, sunrise_sunset,
    tithi_from_elongation, to_sidereal, vimshottari_mahadashas, whole_sign_houses, yoga_from_sum,
};

use crate::error::KundaliError;
use crate::input::BirthInput;

/// One planet's placement in the chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub planet: &'static str,
    pub planet_hindi: &'static str,
    pub tropical_longitude: f64,
    pub sidereal_longitude: f64,
    pub sign: &'static str,
    pub sign_hindi: &'static str,
    /// Degrees into the sign, [0, 30).
    pub degree: f64,
    /// Whole-sign house, 1..=12.
    pub house: u8,
    pub is_retrograde: bool,
    pub nakshatra: &'static str,
    pub nakshatra_pada: u8,
}

/// The ascendant block of the result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LagnaData {
    pub tropical: f64,
    pub sidereal: f64,
    pub sign: &'static str,
    pub sign_hindi: &'static str,
    pub degree: f64,
    pub nakshatra: &'static str,
    pub nakshatra_pada: u8,
}

/// Sign-only summary (Moon sign, Sun sign).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignSummary {
    pub sign: &'static str,
    pub sign_hindi: &'static str,
}

/// The Moon's nakshatra with its Vimshottari lord.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonNakshatra {
    pub name: &'static str,
    pub hindi: &'static str,
    pub lord: &'static str,
    pub pada: u8,
}

/// One whole-sign house.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HouseRecord {
    /// House number, 1..=12.
    pub house: u8,
    pub sign: &'static str,
    pub sign_hindi: &'static str,
    /// Always 0 in the whole-sign system: cusps sit on sign boundaries.
    pub degree: f64,
}

/// A named anga with its slot index (tithi, yoga, karana).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AngaRecord {
    pub name: String,
    pub index: usize,
}

/// The five limbs of the day plus sunrise/sunset and moon phase.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanchangData {
    pub tithi: AngaRecord,
    pub nakshatra: MoonNakshatra,
    pub yoga: AngaRecord,
    pub karana: AngaRecord,
    /// `HH:MM` in UT, or `"No sunrise"` at polar latitudes.
    pub sunrise: String,
    /// `HH:MM` in UT, or `"No sunset"` at polar latitudes.
    pub sunset: String,
    pub moon_phase: &'static str,
}

/// An antardasha with calendar dates.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AntardashaData {
    pub name: &'static str,
    /// `YYYY-MM-DD`.
    pub start: String,
    /// `YYYY-MM-DD`.
    pub end: String,
}

/// A mahadasha with its nine antardashas, calendar-dated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaData {
    pub mahadasha: &'static str,
    pub mahadasha_start: String,
    pub mahadasha_end: String,
    pub antardashas: Vec<AntardashaData>,
}

/// One planet's slot in a divisional chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPlanet {
    pub planet: &'static str,
    /// Zero-based sign index, 0..=11.
    pub sign: u8,
    pub degree: f64,
}

/// A divisional chart (D1 or D9).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DivisionalChart {
    pub name: &'static str,
    pub planets: Vec<ChartPlanet>,
}

/// The two divisional charts the engine produces.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Charts {
    pub d1: DivisionalChart,
    pub d9: DivisionalChart,
}

/// Complete birth chart result.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KundaliResult {
    pub input: BirthInput,
    /// Lahiri ayanamsha at birth, degrees.
    pub ayanamsa: f64,
    pub lagna: LagnaData,
    pub moon_sign: SignSummary,
    pub sun_sign: SignSummary,
    pub moon_nakshatra: MoonNakshatra,
    /// Nine records in chart order: Sun, Moon, Mercury, Venus, Mars,
    /// Jupiter, Saturn, Rahu, Ketu.
    pub planets: Vec<PlanetPosition>,
    pub houses: Vec<HouseRecord>,
    pub panchang: PanchangData,
    /// Nine mahadashas starting at birth.
    pub dashas: Vec<DashaData>,
    pub charts: Charts,
}

/// Compute the full kundali for a validated birth request.
pub fn compute_kundali(input: &BirthInput) -> Result<KundaliResult, KundaliError> {
    let moment = input.validate()?;
    let jd = moment.julian_day();
    info!(jd, lat = moment.latitude, lon = moment.longitude, "computing kundali");
    Ok(kundali_at(jd, moment.latitude, moment.longitude, input.clone()))
}

/// Keplerian planets paired with their grahas, in chart order.
pub(crate) const KEPLERIAN_GRAHAS: [(KeplerianBody, Graha); 5] = [
    (KeplerianBody::Mercury, Graha::Buddh),
    (KeplerianBody::Venus, Graha::Shukra),
    (KeplerianBody::Mars, Graha::Mangal),
    (KeplerianBody::Jupiter, Graha::Guru),
    (KeplerianBody::Saturn, Graha::Shani),
];

fn planet_record(
    graha: Graha,
    tropical: f64,
    sidereal: f64,
    lagna_sign: usize,
    is_retrograde: bool,
) -> PlanetPosition {
    let rashi = rashi_from_longitude(sidereal);
    let nak = nakshatra_from_longitude(sidereal);
    PlanetPosition {
        planet: graha.english_name(),
        planet_hindi: graha.hindi_name(),
        tropical_longitude: tropical,
        sidereal_longitude: sidereal,
        sign: rashi.rashi.english_name(),
        sign_hindi: rashi.rashi.hindi_name(),
        degree: rashi.degree_in_sign,
        house: jataka_vedic::house_of(rashi.rashi.index(), lagna_sign),
        is_retrograde,
        nakshatra: nak.nakshatra.name(),
        nakshatra_pada: nak.pada,
    }
}

fn kundali_at(jd: f64, latitude: f64, longitude: f64, input: BirthInput) -> KundaliResult {
    let ayanamsa = lahiri_ayanamsha_deg(jd);

    // Lagna
    let lagna_tropical = ascendant_tropical_deg(jd, latitude, longitude);
    let lagna_sidereal = to_sidereal(lagna_tropical, ayanamsa);
    let lagna_rashi = rashi_from_longitude(lagna_sidereal);
    let lagna_nak = nakshatra_from_longitude(lagna_sidereal);
    let lagna_sign = lagna_rashi.rashi.index();

    let houses = whole_sign_houses(lagna_sidereal)
        .iter()
        .enumerate()
        .map(|(i, sign_index)| {
            let rashi = jataka_vedic::Rashi::from_index(*sign_index as usize);
            HouseRecord {
                house: i as u8 + 1,
                sign: rashi.english_name(),
                sign_hindi: rashi.hindi_name(),
                degree: 0.0,
            }
        })
        .collect();

    // Luminaries
    let sun_tropical = sun_longitude_deg(jd);
    let sun_sidereal = to_sidereal(sun_tropical, ayanamsa);
    let moon_tropical = moon_position(jd).longitude_deg;
    let moon_sidereal = to_sidereal(moon_tropical, ayanamsa);

    // Nodes
    let rahu_tropical = rahu_longitude_deg(jd);
    let rahu_sidereal = to_sidereal(rahu_tropical, ayanamsa);
    let ketu_tropical = (rahu_tropical + 180.0) % 360.0;
    let ketu_sidereal = (rahu_sidereal + 180.0) % 360.0;

    let mut planets = Vec::with_capacity(9);
    planets.push(planet_record(
        Graha::Surya,
        sun_tropical,
        sun_sidereal,
        lagna_sign,
        false,
    ));
    planets.push(planet_record(
        Graha::Chandra,
        moon_tropical,
        moon_sidereal,
        lagna_sign,
        false,
    ));
    for (body, graha) in KEPLERIAN_GRAHAS {
        let (Some(tropical), Some(retro)) =
            (geocentric_longitude(body, jd), is_retrograde(body, jd))
        else {
            continue;
        };
        planets.push(planet_record(
            graha,
            tropical,
            to_sidereal(tropical, ayanamsa),
            lagna_sign,
            retro,
        ));
    }
    // Shadow points carry retrograde by convention, independent of motion.
    planets.push(planet_record(
        Graha::Rahu,
        rahu_tropical,
        rahu_sidereal,
        lagna_sign,
        true,
    ));
    planets.push(planet_record(
        Graha::Ketu,
        ketu_tropical,
        ketu_sidereal,
        lagna_sign,
        true,
    ));

    // Panchang
    let moon_nak = nakshatra_from_longitude(moon_sidereal);
    let moon_nakshatra = MoonNakshatra {
        name: moon_nak.nakshatra.name(),
        hindi: moon_nak.nakshatra.hindi_name(),
        lord: moon_nak.nakshatra.lord().english_name(),
        pada: moon_nak.pada,
    };
    let panchang = panchang_data(
        jd,
        sun_sidereal,
        moon_sidereal,
        latitude,
        longitude,
        moon_nakshatra.clone(),
    );

    // Dashas
    let dashas = dasha_data(&vimshottari_mahadashas(jd, moon_sidereal));

    // Divisional charts
    let charts = Charts {
        d1: divisional_chart("Rashi (D1)", &planets, jataka_vedic::rashi_chart_position),
        d9: divisional_chart("Navamsa (D9)", &planets, jataka_vedic::navamsa_position),
    };

    KundaliResult {
        input,
        ayanamsa,
        lagna: LagnaData {
            tropical: lagna_tropical,
            sidereal: lagna_sidereal,
            sign: lagna_rashi.rashi.english_name(),
            sign_hindi: lagna_rashi.rashi.hindi_name(),
            degree: lagna_rashi.degree_in_sign,
            nakshatra: lagna_nak.nakshatra.name(),
            nakshatra_pada: lagna_nak.pada,
        },
        moon_sign: sign_summary(moon_sidereal),
        sun_sign: sign_summary(sun_sidereal),
        moon_nakshatra,
        planets,
        houses,
        panchang,
        dashas,
        charts,
    }
}

fn sign_summary(sidereal: f64) -> SignSummary {
    let rashi = rashi_from_longitude(sidereal).rashi;
    SignSummary {
        sign: rashi.english_name(),
        sign_hindi: rashi.hindi_name(),
    }
}

pub(crate) fn panchang_data(
    jd: f64,
    sun_sidereal: f64,
    moon_sidereal: f64,
    latitude: f64,
    longitude: f64,
    nakshatra: MoonNakshatra,
) -> PanchangData {
    let elongation = moon_sidereal - sun_sidereal;
    let tithi = tithi_from_elongation(elongation);
    let yoga = yoga_from_sum(sun_sidereal + moon_sidereal);
    let karana = karana_from_elongation(elongation);
    let (sunrise, sunset) = match sunrise_sunset(jd, latitude, longitude) {
        RiseSet::Event {
            sunrise_hours,
            sunset_hours,
        } => (format_hours(sunrise_hours), format_hours(sunset_hours)),
        RiseSet::NeverRises | RiseSet::NeverSets => {
            ("No sunrise".to_owned(), "No sunset".to_owned())
        }
    };

    PanchangData {
        tithi: AngaRecord {
            name: format!("{} {}", tithi.paksha.name(), tithi.name),
            index: tithi.index,
        },
        nakshatra,
        yoga: AngaRecord {
            name: yoga.name.to_owned(),
            index: yoga.index,
        },
        karana: AngaRecord {
            name: karana.name.to_owned(),
            index: karana.index,
        },
        sunrise,
        sunset,
        moon_phase: moon_phase(elongation).name(),
    }
}

pub(crate) fn dasha_data(mahadashas: &[Mahadasha]) -> Vec<DashaData> {
    mahadashas
        .iter()
        .map(|maha| DashaData {
            mahadasha: maha.graha.english_name(),
            mahadasha_start: iso_date(maha.start_jd),
            mahadasha_end: iso_date(maha.end_jd),
            antardashas: maha
                .antardashas
                .iter()
                .map(|antar| AntardashaData {
                    name: antar.graha.english_name(),
                    start: iso_date(antar.start_jd),
                    end: iso_date(antar.end_jd),
                })
                .collect(),
        })
        .collect()
}

fn divisional_chart(
    name: &'static str,
    planets: &[PlanetPosition],
    position: impl Fn(f64) -> jataka_vedic::VargaPosition,
) -> DivisionalChart {
    DivisionalChart {
        name,
        planets: planets
            .iter()
            .map(|p| {
                let varga = position(p.sidereal_longitude);
                ChartPlanet {
                    planet: p.planet,
                    sign: varga.rashi.index() as u8,
                    degree: varga.degree_in_sign,
                }
            })
            .collect(),
    }
}

/// `YYYY-MM-DD` for a JD, truncating the time of day.
pub(crate) fn iso_date(jd: f64) -> String {
    let (year, month, day_fraction) = jd_to_calendar(jd);
    format!("{year:04}-{month:02}-{day:02}", day = day_fraction as u32)
}

/// `HH:MM`, wrapping decimal hours into a single day.
pub(crate) fn format_hours(hours: f64) -> String {
    let wrapped = hours.rem_euclid(24.0);
    let h = wrapped as u32;
    let m = ((wrapped - f64::from(h)) * 60.0) as u32;
    format!("{h:02}:{m:02}")
}
