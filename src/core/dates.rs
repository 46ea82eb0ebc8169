use chrono::{Duration, NaiveDate};

/// Days between "today" and the assumed departure
pub const DEPARTURE_LEAD_DAYS: i64 = 8;

/// Derive departure and return dates from an extracted duration.
///
/// Departure is a fixed lead time after `today`; the return date is
/// departure plus the trip length.
pub fn trip_dates(today: NaiveDate, duration_days: u32) -> (NaiveDate, NaiveDate) {
    let departure = today + Duration::days(DEPARTURE_LEAD_DAYS);
    let return_date = departure + Duration::days(i64::from(duration_days));
    (departure, return_date)
}
