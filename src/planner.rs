//! Smart day-trip planner
//!
//! Greedily orders candidate places into a same-day itinerary by balancing
//! travel distance against each place's ideal visit time, accumulating
//! simulated wall-clock time as the route is built. Single pass, no
//! backtracking: a deliberate "good enough" heuristic, not a TSP solver.
//!
//! The scoring constants are load-bearing for behavioral compatibility
//! with existing plans; do not retune them casually.

use tracing::debug;

use crate::geo;
use crate::models::{DayPlan, Place, PlannedStop};

/// Assumed tuk-tuk travel speed between stops
pub const AVERAGE_SPEED_KM_PER_HOUR: f64 = 25.0;
/// Working pool is capped to the first this-many candidates to bound cost
pub const CANDIDATE_POOL_CAP: usize = 20;
/// Stops per plan unless the caller asks for fewer
pub const DEFAULT_MAX_STOPS: usize = 6;
/// Visit length assumed when a duration string cannot be parsed
pub const DEFAULT_VISIT_MINUTES: u32 = 75;
/// Ideal time assumed when a best-time string cannot be parsed (8:00 AM)
pub const DEFAULT_BEST_TIME_MINUTES: u32 = 480;
/// Minutes of schedule slip that cost one point of score
const SCHEDULE_PENALTY_DIVISOR: f64 = 70.0;
/// Travel minutes that cost one point of score
const TRAVEL_SCORE_DIVISOR: f64 = 45.0;

/// Estimated minutes to spend at a place, from its free-text duration.
///
/// Checked in priority order: a "1-2" range (midpoint, in hours), a number
/// followed by "hour", a number followed by "min". Unparseable text falls
/// back to [`DEFAULT_VISIT_MINUTES`].
#[must_use]
pub fn duration_to_minutes(duration: &str) -> u32 {
    try_duration_to_minutes(duration).unwrap_or_else(|| {
        debug!("unparseable duration {duration:?}, assuming {DEFAULT_VISIT_MINUTES} minutes");
        DEFAULT_VISIT_MINUTES
    })
}

/// Fallible variant of [`duration_to_minutes`] for strict parsing mode.
#[must_use]
pub fn try_duration_to_minutes(duration: &str) -> Option<u32> {
    if let Some((left, right)) = find_range(duration) {
        return Some((((left + right) / 2.0) * 60.0).round() as u32);
    }

    if let Some(hours) = find_number_before_unit(duration, "hour", true) {
        return Some((hours * 60.0).round() as u32);
    }

    if let Some(minutes) = find_number_before_unit(duration, "min", false) {
        return Some(minutes.round() as u32);
    }

    None
}

/// Minutes since midnight for a place's free-text best time.
///
/// Uses the first "H:MM AM/PM" substring (case-insensitive); anything else
/// falls back to [`DEFAULT_BEST_TIME_MINUTES`].
#[must_use]
pub fn best_time_to_minutes(best_time: &str) -> u32 {
    try_best_time_to_minutes(best_time).unwrap_or_else(|| {
        debug!("unparseable best time {best_time:?}, assuming 8:00 AM");
        DEFAULT_BEST_TIME_MINUTES
    })
}

/// Fallible variant of [`best_time_to_minutes`] for strict parsing mode.
#[must_use]
pub fn try_best_time_to_minutes(best_time: &str) -> Option<u32> {
    let bytes = best_time.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let Some((hour, after_hour)) = scan_integer(bytes, i) else {
            i += 1;
            continue;
        };

        if let Some(minutes) = scan_clock_tail(bytes, hour, after_hour) {
            return Some(minutes);
        }

        // No clock pattern here; resume after the digits we consumed
        i = after_hour;
    }

    None
}

/// Rest of the "H:MM AM/PM" pattern once the hour digits are consumed.
fn scan_clock_tail(bytes: &[u8], hour: u32, after_hour: usize) -> Option<u32> {
    let mut j = after_hour;
    if bytes.get(j) != Some(&b':') {
        return None;
    }
    j += 1;

    let (minute, after_minute) = scan_integer(bytes, j)?;
    j = after_minute;
    while bytes.get(j).is_some_and(u8::is_ascii_whitespace) {
        j += 1;
    }

    let marker = bytes.get(j..j + 2)?;
    let is_pm = marker.eq_ignore_ascii_case(b"pm");
    if !is_pm && !marker.eq_ignore_ascii_case(b"am") {
        return None;
    }

    // 12-hour clock to minutes since midnight
    let hour = match (is_pm, hour) {
        (true, h) if h < 12 => h + 12,
        (false, 12) => 0,
        (_, h) => h,
    };
    Some(hour * 60 + minute)
}

/// Two numbers separated by a dash, e.g. the "1-2" of "1-2 hours".
fn find_range(text: &str) -> Option<(f64, f64)> {
    let bytes = text.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let Some((left, after_left)) = scan_number(bytes, i) else {
            i += 1;
            continue;
        };

        let mut j = after_left;
        while bytes.get(j).is_some_and(u8::is_ascii_whitespace) {
            j += 1;
        }
        if bytes.get(j) == Some(&b'-') {
            j += 1;
            while bytes.get(j).is_some_and(u8::is_ascii_whitespace) {
                j += 1;
            }
            if let Some((right, _)) = scan_number(bytes, j) {
                return Some((left, right));
            }
        }

        i = after_left;
    }

    None
}

/// First number immediately followed (modulo whitespace) by `unit`,
/// compared case-insensitively. `decimal` allows a fractional part.
fn find_number_before_unit(text: &str, unit: &str, decimal: bool) -> Option<f64> {
    let bytes = text.as_bytes();
    let unit = unit.as_bytes();
    let mut i = 0;

    while i < bytes.len() {
        let scanned = if decimal {
            scan_number(bytes, i)
        } else {
            scan_integer(bytes, i).map(|(value, end)| (f64::from(value), end))
        };
        let Some((value, after_number)) = scanned else {
            i += 1;
            continue;
        };

        let mut j = after_number;
        while bytes.get(j).is_some_and(u8::is_ascii_whitespace) {
            j += 1;
        }
        if bytes
            .get(j..j + unit.len())
            .is_some_and(|tail| tail.eq_ignore_ascii_case(unit))
        {
            return Some(value);
        }

        // Digits inside a decimal ("1.5 mins" -> 5) are still scan starts
        i += 1;
    }

    None
}

fn scan_integer(bytes: &[u8], start: usize) -> Option<(u32, usize)> {
    let mut end = start;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    if end == start {
        return None;
    }

    // Digits are ASCII, so the slice is valid UTF-8
    let digits = std::str::from_utf8(&bytes[start..end]).ok()?;
    Some((digits.parse().ok()?, end))
}

fn scan_number(bytes: &[u8], start: usize) -> Option<(f64, usize)> {
    let (_, mut end) = scan_integer(bytes, start)?;

    if bytes.get(end) == Some(&b'.') && bytes.get(end + 1).is_some_and(u8::is_ascii_digit) {
        end += 1;
        while bytes.get(end).is_some_and(u8::is_ascii_digit) {
            end += 1;
        }
    }

    let digits = std::str::from_utf8(&bytes[start..end]).ok()?;
    Some((digits.parse().ok()?, end))
}

/// Fail when any candidate carries schedule text the parsers cannot read.
///
/// The builder itself never fails (unparseable text falls back to
/// defaults); this check is the opt-in strict mode for callers that would
/// rather surface bad catalog data than silently plan around it.
pub fn validate_schedule_text(candidates: &[Place]) -> crate::Result<()> {
    let unparseable: Vec<&str> = candidates
        .iter()
        .filter(|place| {
            try_duration_to_minutes(&place.duration).is_none()
                || try_best_time_to_minutes(&place.best_time).is_none()
        })
        .map(|place| place.name.as_str())
        .collect();

    if unparseable.is_empty() {
        Ok(())
    } else {
        Err(crate::GuideError::validation(format!(
            "unparseable schedule text for: {}",
            unparseable.join(", ")
        )))
    }
}

/// Build a same-day itinerary from the candidate places.
///
/// Repeatedly picks the unused candidate with the lowest score from the
/// current position and simulated clock, then advances both. The pool is
/// capped to the first [`CANDIDATE_POOL_CAP`] candidates; ties go to the
/// earlier candidate, so output is deterministic for a fixed input order.
///
/// An empty candidate list yields an empty plan with zero totals: a valid
/// result, not an error.
#[tracing::instrument(level = "debug", skip(candidates), fields(candidates = candidates.len()))]
#[must_use]
pub fn build_day_plan(
    candidates: &[Place],
    current_minutes: u32,
    start_lat: f64,
    start_lng: f64,
    max_stops: usize,
) -> DayPlan {
    let pool = &candidates[..candidates.len().min(CANDIDATE_POOL_CAP)];
    let target = max_stops.min(pool.len());

    let mut stops: Vec<PlannedStop> = Vec::with_capacity(target);
    let mut used = vec![false; pool.len()];
    let mut current_lat = start_lat;
    let mut current_lng = start_lng;
    let mut rolling_minutes = current_minutes;

    while stops.len() < target {
        let mut best: Option<(usize, f64, f64)> = None;

        for (index, place) in pool.iter().enumerate() {
            if used[index] {
                continue;
            }

            let distance_km =
                geo::distance_km(current_lat, current_lng, place.latitude, place.longitude);
            let travel_minutes = distance_km / AVERAGE_SPEED_KM_PER_HOUR * 60.0;
            let ideal_minutes = best_time_to_minutes(&place.best_time);
            let schedule_penalty =
                f64::from(rolling_minutes.abs_diff(ideal_minutes)) / SCHEDULE_PENALTY_DIVISOR;
            let score = distance_km + schedule_penalty + travel_minutes / TRAVEL_SCORE_DIVISOR;

            if best.is_none_or(|(_, best_score, _)| score < best_score) {
                best = Some((index, score, distance_km));
            }
        }

        let Some((index, _, travel_km)) = best else {
            break;
        };
        let winner = &pool[index];

        let travel_minutes = (travel_km / AVERAGE_SPEED_KM_PER_HOUR * 60.0).round() as u32;
        let visit_minutes = duration_to_minutes(&winner.duration);

        stops.push(PlannedStop {
            place: winner.clone(),
            travel_km,
            travel_minutes,
            visit_minutes,
        });

        used[index] = true;
        current_lat = winner.latitude;
        current_lng = winner.longitude;
        rolling_minutes += travel_minutes + visit_minutes;
    }

    debug!("planned {} of {} requested stops", stops.len(), max_stops);
    DayPlan::from_stops(stops)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlaceCategory;
    use rstest::rstest;

    #[rstest]
    #[case("1-2 hours", 90)]
    #[case("1.5 hours", 90)]
    #[case("2 hours", 120)]
    #[case("1 hour", 60)]
    #[case("2.5-3.5 hours", 180)]
    #[case("45 mins", 45)]
    #[case("90 min", 90)]
    #[case("About 2 Hours", 120)]
    #[case("something unparseable", 75)]
    #[case("", 75)]
    fn duration_cases(#[case] text: &str, #[case] expected: u32) {
        assert_eq!(duration_to_minutes(text), expected);
    }

    #[test]
    fn test_range_wins_over_hours() {
        // "1-2 hours" also contains "2 hours"; the range midpoint wins
        assert_eq!(duration_to_minutes("1-2 hours"), 90);
    }

    #[test]
    fn test_try_duration_reports_failure() {
        assert_eq!(try_duration_to_minutes("2 hours"), Some(120));
        assert_eq!(try_duration_to_minutes("ask a local"), None);
    }

    #[rstest]
    #[case("5:00 AM", 300)]
    #[case("5:00 PM", 1020)]
    #[case("12:00 AM", 0)]
    #[case("12:30 PM", 750)]
    #[case("Best at 5:30 pm", 1050)]
    #[case("6:00 AM - 9:00 AM", 360)]
    #[case("whenever", 480)]
    #[case("", 480)]
    fn best_time_cases(#[case] text: &str, #[case] expected: u32) {
        assert_eq!(best_time_to_minutes(text), expected);
    }

    #[test]
    fn test_try_best_time_reports_failure() {
        assert_eq!(try_best_time_to_minutes("7:15 am"), Some(435));
        assert_eq!(try_best_time_to_minutes("sunset"), None);
    }

    #[test]
    fn test_validate_schedule_text_names_offenders() {
        let mut good = Place::sample(1, "Bayon", PlaceCategory::Temple, 13.4413, 103.859);
        good.duration = "1.5 hours".to_string();

        let mut bad = Place::sample(2, "Mystery", PlaceCategory::Nature, 13.4, 103.8);
        bad.best_time = "sunset".to_string();

        assert!(validate_schedule_text(std::slice::from_ref(&good)).is_ok());

        let err = validate_schedule_text(&[good, bad]).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Mystery"));
        assert!(!message.contains("Bayon"));
    }

    // ~1 km of latitude per 0.009 degrees at the equator-ish
    fn place_at(id: u32, lat_offset: f64, best_time: &str, duration: &str) -> Place {
        let mut place = Place::sample(id, &format!("Place {id}"), PlaceCategory::Temple, 13.35, 103.85);
        place.latitude += lat_offset;
        place.best_time = best_time.to_string();
        place.duration = duration.to_string();
        place
    }

    #[test]
    fn test_empty_candidates_is_valid_empty_plan() {
        let plan = build_day_plan(&[], 480, 13.35, 103.85, DEFAULT_MAX_STOPS);
        assert!(plan.is_empty());
        assert_eq!(plan.total_travel_km, 0.0);
        assert_eq!(plan.total_travel_minutes, 0);
        assert_eq!(plan.total_visit_minutes, 0);
    }

    #[test]
    fn test_never_repeats_a_stop() {
        let candidates: Vec<Place> = (0..5)
            .map(|i| place_at(i, f64::from(i) * 0.009, "8:00 AM", "1 hour"))
            .collect();
        let plan = build_day_plan(&candidates, 480, 13.35, 103.85, DEFAULT_MAX_STOPS);

        let mut ids: Vec<u32> = plan.stops.iter().map(|stop| stop.place.id).collect();
        assert_eq!(ids.len(), 5);
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_respects_max_stops() {
        let candidates: Vec<Place> = (0..10)
            .map(|i| place_at(i, f64::from(i) * 0.009, "8:00 AM", "1 hour"))
            .collect();
        let plan = build_day_plan(&candidates, 480, 13.35, 103.85, 3);
        assert_eq!(plan.stops.len(), 3);
    }

    #[test]
    fn test_fewer_candidates_than_max_stops() {
        let candidates = vec![place_at(1, 0.009, "8:00 AM", "1 hour")];
        let plan = build_day_plan(&candidates, 480, 13.35, 103.85, DEFAULT_MAX_STOPS);
        assert_eq!(plan.stops.len(), 1);
    }

    #[test]
    fn test_pool_is_capped_at_twenty() {
        // Candidates past the cap are never considered, even when they
        // would score best: the 25th sits at the start position itself.
        let mut candidates: Vec<Place> = (0..24)
            .map(|i| place_at(i, 0.09 + f64::from(i) * 0.009, "8:00 AM", "1 hour"))
            .collect();
        candidates.push(place_at(24, 0.0, "8:00 AM", "1 hour"));

        let plan = build_day_plan(&candidates, 480, 13.35, 103.85, 25);
        assert_eq!(plan.stops.len(), CANDIDATE_POOL_CAP);
        assert!(plan.stops.iter().all(|stop| stop.place.id < 20));
    }

    #[test]
    fn test_totals_match_stop_sums() {
        let candidates: Vec<Place> = (0..6)
            .map(|i| place_at(i, f64::from(i + 1) * 0.018, "9:00 AM", "1-2 hours"))
            .collect();
        let plan = build_day_plan(&candidates, 540, 13.35, 103.85, DEFAULT_MAX_STOPS);

        let travel_km: f64 = plan.stops.iter().map(|s| s.travel_km).sum();
        let travel_minutes: u32 = plan.stops.iter().map(|s| s.travel_minutes).sum();
        let visit_minutes: u32 = plan.stops.iter().map(|s| s.visit_minutes).sum();
        assert!((plan.total_travel_km - travel_km).abs() < 1e-10);
        assert_eq!(plan.total_travel_minutes, travel_minutes);
        assert_eq!(plan.total_visit_minutes, visit_minutes);
    }

    #[test]
    fn test_ideal_time_beats_equal_distance() {
        // A and B are equally far from the start; at 6:00 AM the morning
        // place has near-zero schedule penalty while the evening place
        // pays |360 - 1080| / 70, so A must come first.
        let morning = place_at(1, 0.009, "6:00 AM", "1 hour");
        let evening = place_at(2, -0.009, "6:00 PM", "2 hours");

        let plan = build_day_plan(&[evening.clone(), morning.clone()], 360, 13.35, 103.85, 2);
        assert_eq!(plan.stops[0].place.id, morning.id);
        assert_eq!(plan.stops[1].place.id, evening.id);
    }

    #[test]
    fn test_rolling_clock_changes_later_picks() {
        // After a long first visit the clock has moved into the evening,
        // so the evening place overtakes a second morning place.
        let first = place_at(1, 0.009, "8:00 AM", "8 hours");
        let morning = place_at(2, 0.018, "8:30 AM", "1 hour");
        let evening = place_at(3, 0.018, "5:00 PM", "1 hour");

        let plan = build_day_plan(&[first, morning, evening], 480, 13.35, 103.85, 3);
        assert_eq!(plan.stops[0].place.id, 1);
        assert_eq!(plan.stops[1].place.id, 3, "evening place should follow the 8-hour visit");
        assert_eq!(plan.stops[2].place.id, 2);
    }

    #[test]
    fn test_ties_go_to_first_candidate() {
        let a = place_at(7, 0.009, "8:00 AM", "1 hour");
        let mut b = a.clone();
        b.id = 8;

        let plan = build_day_plan(&[a, b], 480, 13.35, 103.85, 1);
        assert_eq!(plan.stops[0].place.id, 7);
    }

    #[test]
    fn test_deterministic_for_fixed_input() {
        let candidates: Vec<Place> = (0..8)
            .map(|i| place_at(i, f64::from(i) * 0.013, "10:00 AM", "1 hour"))
            .collect();
        let first = build_day_plan(&candidates, 500, 13.35, 103.85, DEFAULT_MAX_STOPS);
        let second = build_day_plan(&candidates, 500, 13.35, 103.85, DEFAULT_MAX_STOPS);
        assert_eq!(first, second);
    }

    #[test]
    fn test_travel_time_uses_fixed_speed() {
        // One stop ~2 km north of the start: 2 km at 25 km/h is ~4.8 min
        let candidates = vec![place_at(1, 0.018, "8:00 AM", "1 hour")];
        let plan = build_day_plan(&candidates, 480, 13.35, 103.85, 1);

        let stop = &plan.stops[0];
        let expected = (stop.travel_km / AVERAGE_SPEED_KM_PER_HOUR * 60.0).round() as u32;
        assert_eq!(stop.travel_minutes, expected);
        assert!(stop.travel_km > 1.9 && stop.travel_km < 2.1);
    }

    #[test]
    fn test_malformed_text_falls_back_not_fails() {
        let mut odd = place_at(1, 0.009, "dawn-ish", "a while");
        odd.best_time = "whenever you like".to_string();
        let plan = build_day_plan(&[odd], 480, 13.35, 103.85, 1);
        assert_eq!(plan.stops[0].visit_minutes, DEFAULT_VISIT_MINUTES);
    }
}
