//! Timezone-offset resolution backed by the IANA tz database.
//!
//! Birth times arrive as wall-clock values tagged with an IANA zone
//! identifier. Resolution goes through chrono-tz, so DST and historical
//! offset changes are honored for any identifier the database knows.
//!
//! Unknown identifiers fall back to IST (+5:30), the engine's historical
//! default audience, but never silently: the fallback is marked on the
//! returned value and logged. The bare abbreviation "IST" is not an IANA
//! identifier and lands on the fallback, which carries the same offset.

use chrono::{LocalResult, NaiveDateTime, Offset, TimeZone};
use chrono_tz::Tz;
use tracing::warn;

/// Fallback offset for unknown identifiers: IST, +5:30.
pub const FALLBACK_OFFSET_HOURS: f64 = 5.5;

/// Result of resolving a timezone identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ZoneResolution {
    /// Identifier was found in the tz database; offset applies at the
    /// given local instant.
    Known(f64),
    /// Identifier was unknown; the IST fallback offset is in effect.
    Fallback(f64),
}

impl ZoneResolution {
    /// The UTC offset in decimal hours, regardless of how it was resolved.
    pub const fn offset_hours(self) -> f64 {
        match self {
            Self::Known(h) | Self::Fallback(h) => h,
        }
    }

    /// True when the identifier missed the database.
    pub const fn is_fallback(self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// Resolve a timezone identifier to the UTC offset in effect at `local`.
///
/// `local` is the wall-clock datetime in the named zone; it matters
/// because zones with DST have two offsets over a year. Unknown
/// identifiers resolve to [`FALLBACK_OFFSET_HOURS`] and emit a warning.
pub fn resolve_offset_hours(zone_id: &str, local: NaiveDateTime) -> ZoneResolution {
    let tz: Tz = match zone_id.parse() {
        Ok(tz) => tz,
        Err(_) => {
            warn!(
                zone = zone_id,
                fallback_hours = FALLBACK_OFFSET_HOURS,
                "unknown timezone identifier, falling back to IST offset"
            );
            return ZoneResolution::Fallback(FALLBACK_OFFSET_HOURS);
        }
    };

    let offset = match tz.offset_from_local_datetime(&local) {
        LocalResult::Single(o) => o,
        // Repeated hour at a DST fall-back: take the earlier offset.
        LocalResult::Ambiguous(earlier, _) => earlier,
        // Skipped hour at a DST spring-forward: read the offset from the
        // instant as if it were UTC.
        LocalResult::None => tz.offset_from_utc_datetime(&local),
    };
    ZoneResolution::Known(f64::from(offset.fix().local_minus_utc()) / 3600.0)
}
