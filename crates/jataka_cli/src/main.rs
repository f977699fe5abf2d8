use chrono::{Datelike, Timelike, Utc};
use clap::{Parser, Subcommand};
use serde_json::json;

use jataka::{BirthInput, compute_kundali, daily_panchang, dasha_report, transits_at};
use jataka_time::calendar_to_jd;

#[derive(Parser)]
#[command(name = "jataka", about = "Vedic birth chart (kundali) CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full birth chart: lagna, planets, houses, panchang, dashas, D1/D9
    Kundali {
        /// Birth date (YYYY-MM-DD, local)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, 24-hour, local)
        #[arg(long)]
        time: String,
        /// Latitude in degrees, north-positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east-positive
        #[arg(long)]
        lon: f64,
        /// IANA timezone identifier
        #[arg(long, default_value = "UTC")]
        timezone: String,
    },
    /// Daily panchang for a date and place
    Panchang {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Latitude in degrees, north-positive
        #[arg(long)]
        lat: f64,
        /// Longitude in degrees, east-positive
        #[arg(long)]
        lon: f64,
    },
    /// Current sidereal positions of the nine grahas
    Transits {
        /// Julian Day of the instant; defaults to now
        #[arg(long)]
        jd: Option<f64>,
    },
    /// Vimshottari dasha timeline with the running periods
    Dasha {
        /// Birth date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
        /// Birth time (HH:MM, 24-hour)
        #[arg(long)]
        time: String,
        /// Julian Day of the query instant; defaults to now
        #[arg(long)]
        at: Option<f64>,
    },
}

fn now_jd() -> f64 {
    let now = Utc::now();
    let hour = f64::from(now.hour())
        + f64::from(now.minute()) / 60.0
        + f64::from(now.second()) / 3600.0;
    calendar_to_jd(now.year(), now.month(), now.day(), hour)
}

fn emit(value: &impl serde::Serialize) {
    match serde_json::to_string_pretty(value) {
        Ok(s) => println!("{s}"),
        Err(e) => {
            eprintln!("serialization failed: {e}");
            std::process::exit(1);
        }
    }
}

fn fail(e: impl std::fmt::Display) -> ! {
    eprintln!("{e}");
    std::process::exit(1);
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Kundali {
            date,
            time,
            lat,
            lon,
            timezone,
        } => {
            let input = BirthInput {
                date_of_birth: date,
                time_of_birth: time,
                latitude: lat,
                longitude: lon,
                timezone,
            };
            match compute_kundali(&input) {
                Ok(result) => emit(&result),
                Err(e) => fail(e),
            }
        }

        Commands::Panchang { date, lat, lon } => match daily_panchang(&date, lat, lon) {
            Ok(report) => emit(&report),
            Err(e) => fail(e),
        },

        Commands::Transits { jd } => {
            let jd = jd.unwrap_or_else(now_jd);
            emit(&json!({
                "julianDay": jd,
                "transits": transits_at(jd),
            }));
        }

        Commands::Dasha { date, time, at } => {
            let query_jd = at.unwrap_or_else(now_jd);
            match dasha_report(&date, &time, query_jd) {
                Ok(report) => emit(&report),
                Err(e) => fail(e),
            }
        }
    }
}
