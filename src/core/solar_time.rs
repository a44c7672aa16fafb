//! True-solar-time correction for the hour-pillar lookup.
//!
//! Korean civil time runs on the 135°E standard meridian while the
//! peninsula sits near 127°E, so the wall clock leads true solar time by a
//! fixed 32 minutes. Summer-time births carry a further 60 minutes. The
//! subtraction is calendar-aware and may roll the date backward across day,
//! month or year boundaries; the caller applies the result only to the
//! hour pillar, never to the year/month/day pillars.

use crate::domain::model::CivilMoment;
use crate::utils::error::{Result, SajuError};
use chrono::{Datelike, Duration, NaiveDate, Timelike};

/// Gap between the civil standard meridian (135°E) and the true solar
/// meridian of the locale, in minutes.
pub const MERIDIAN_GAP_MINUTES: i64 = 32;

/// Clock advance during a summer-time period, in minutes.
pub const DST_SHIFT_MINUTES: i64 = 60;

/// Convert a civil clock reading to true solar time.
///
/// Pure function of its inputs; never consults a timezone database or the
/// system clock.
pub fn to_true_solar_time(
    year: i32,
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
    dst_applies: bool,
) -> Result<CivilMoment> {
    let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        SajuError::InvalidBirthDate {
            message: format!("{:04}-{:02}-{:02} is not a calendar date", year, month, day),
        }
    })?;
    let clock = date
        .and_hms_opt(hour, minute, 0)
        .ok_or_else(|| SajuError::InvalidBirthDate {
            message: format!("{:02}:{:02} is not a clock time", hour, minute),
        })?;

    let mut offset = MERIDIAN_GAP_MINUTES;
    if dst_applies {
        offset += DST_SHIFT_MINUTES;
    }

    let corrected = clock - Duration::minutes(offset);

    Ok(CivilMoment {
        year: corrected.year(),
        month: corrected.month(),
        day: corrected.day(),
        hour: corrected.hour(),
        minute: corrected.minute(),
    })
}
