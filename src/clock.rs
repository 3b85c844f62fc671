//! Cambodia-local time snapshot and display formatting
//!
//! The guide runs on Siem Reap wall-clock time regardless of where it is
//! hosted. The planner consumes the snapshot's minutes-since-midnight; the
//! day phase drives the frontend's lighting hints.

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Asia::Phnom_Penh;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

const GOLDEN_HOUR_START: u32 = 17 * 60;
const GOLDEN_HOUR_END: u32 = 18 * 60 + 30;
const NIGHT_START: u32 = 5 * 60;

/// Lighting phase of the day in Siem Reap
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayPhase {
    Day,
    Golden,
    Night,
}

/// Current wall-clock reading in Siem Reap
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimeSnapshot {
    pub hour: u32,
    pub minute: u32,
    /// Minutes since local midnight (0-1439)
    pub total_minutes: u32,
    /// e.g. "5:42 PM"
    pub formatted_time: String,
    /// e.g. "Fri, Aug 7"
    pub formatted_date: String,
    pub is_golden_hour: bool,
    pub phase: DayPhase,
}

impl TimeSnapshot {
    /// Snapshot of the current moment in Cambodia
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(Utc::now().with_timezone(&Phnom_Penh))
    }

    /// Snapshot of an arbitrary Cambodia-local instant
    #[must_use]
    pub fn from_datetime(local: DateTime<Tz>) -> Self {
        let hour = local.hour();
        let minute = local.minute();
        let total_minutes = hour * 60 + minute;

        let is_golden_hour =
            total_minutes >= GOLDEN_HOUR_START && total_minutes <= GOLDEN_HOUR_END;
        let is_night = total_minutes < NIGHT_START || total_minutes > GOLDEN_HOUR_END;
        let phase = if is_golden_hour {
            DayPhase::Golden
        } else if is_night {
            DayPhase::Night
        } else {
            DayPhase::Day
        };

        Self {
            hour,
            minute,
            total_minutes,
            formatted_time: local.format("%-I:%M %p").to_string(),
            formatted_date: local.format("%a, %b %-d").to_string(),
            is_golden_hour,
            phase,
        }
    }
}

/// Format a minute count for display: "45m" or "2h 5m".
#[must_use]
pub fn format_minutes(minutes: u32) -> String {
    let h = minutes / 60;
    let m = minutes % 60;

    if h == 0 {
        return format!("{m}m");
    }

    format!("{h}h {m}m")
}

/// Format minutes since midnight as a 12-hour clock reading, e.g. "5:42 PM".
#[must_use]
pub fn format_clock(minutes: u32) -> String {
    let hour24 = (minutes / 60) % 24;
    let minute = minutes % 60;
    let (hour12, period) = match hour24 {
        0 => (12, "AM"),
        1..=11 => (hour24, "AM"),
        12 => (12, "PM"),
        _ => (hour24 - 12, "PM"),
    };
    format!("{hour12}:{minute:02} {period}")
}
