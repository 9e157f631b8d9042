//! Human-readable elapsed time for ticket wait times
//!
//! Produces phrases such as "less than a minute", "5 minutes" or
//! "about 2 hours", using the thresholds of the widely used `formatDistance`
//! convention. Calendar arithmetic is done in UTC so output does not depend
//! on the host timezone.

use std::fmt;

use jiff::Timestamp;
use jiff::civil::DateTime;
use jiff::tz::TimeZone;

const MINUTES_IN_DAY: i64 = 1440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2520;
const MINUTES_IN_MONTH: i64 = 43200;
const MINUTES_IN_YEAR: i64 = 525600;

/// A bucketed distance between two instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Distance {
    LessThanAMinute,
    Minutes(i64),
    AboutHours(i64),
    Days(i64),
    AboutMonths(i64),
    Months(i64),
    AboutYears(i64),
    OverYears(i64),
    AlmostYears(i64),
}

impl Distance {
    /// Compute the distance between two instants, in either order.
    pub fn between(a: Timestamp, b: Timestamp) -> Self {
        let (earlier, later) = if a <= b { (a, b) } else { (b, a) };

        let seconds = (later.as_millisecond() - earlier.as_millisecond()) / 1000;
        let minutes = round_div(seconds, 60);

        if minutes < 2 {
            return if minutes == 0 {
                Distance::LessThanAMinute
            } else {
                Distance::Minutes(minutes)
            };
        }
        if minutes < 45 {
            return Distance::Minutes(minutes);
        }
        if minutes < 90 {
            return Distance::AboutHours(1);
        }
        if minutes < MINUTES_IN_DAY {
            return Distance::AboutHours(round_div(minutes, 60));
        }
        if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
            return Distance::Days(1);
        }
        if minutes < MINUTES_IN_MONTH {
            return Distance::Days(round_div(minutes, MINUTES_IN_DAY));
        }
        if minutes < MINUTES_IN_MONTH * 2 {
            return Distance::AboutMonths(round_div(minutes, MINUTES_IN_MONTH));
        }

        let months = calendar_months_between(earlier, later);
        if months < 12 {
            return Distance::Months(round_div(minutes, MINUTES_IN_MONTH));
        }

        let months_since_start_of_year = months % 12;
        let years = months / 12;
        if months_since_start_of_year < 3 {
            Distance::AboutYears(years)
        } else if months_since_start_of_year < 9 {
            Distance::OverYears(years)
        } else {
            Distance::AlmostYears(years + 1)
        }
    }

    /// A representative number of minutes for this bucket.
    ///
    /// Later buckets always map to an equal or larger value, so this can be
    /// used to compare two distances.
    pub fn approx_minutes(&self) -> i64 {
        match *self {
            Distance::LessThanAMinute => 0,
            Distance::Minutes(n) => n,
            Distance::AboutHours(n) => n * 60,
            Distance::Days(n) => n * MINUTES_IN_DAY,
            Distance::AboutMonths(n) | Distance::Months(n) => n * MINUTES_IN_MONTH,
            Distance::AboutYears(n) => n * MINUTES_IN_YEAR,
            Distance::OverYears(n) => n * MINUTES_IN_YEAR + 3 * MINUTES_IN_MONTH,
            Distance::AlmostYears(n) => (n - 1) * MINUTES_IN_YEAR + 9 * MINUTES_IN_MONTH,
        }
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Distance::LessThanAMinute => write!(f, "less than a minute"),
            Distance::Minutes(1) => write!(f, "1 minute"),
            Distance::Minutes(n) => write!(f, "{n} minutes"),
            Distance::AboutHours(1) => write!(f, "about 1 hour"),
            Distance::AboutHours(n) => write!(f, "about {n} hours"),
            Distance::Days(1) => write!(f, "1 day"),
            Distance::Days(n) => write!(f, "{n} days"),
            Distance::AboutMonths(1) => write!(f, "about 1 month"),
            Distance::AboutMonths(n) => write!(f, "about {n} months"),
            Distance::Months(1) => write!(f, "1 month"),
            Distance::Months(n) => write!(f, "{n} months"),
            Distance::AboutYears(1) => write!(f, "about 1 year"),
            Distance::AboutYears(n) => write!(f, "about {n} years"),
            Distance::OverYears(1) => write!(f, "over 1 year"),
            Distance::OverYears(n) => write!(f, "over {n} years"),
            Distance::AlmostYears(1) => write!(f, "almost 1 year"),
            Distance::AlmostYears(n) => write!(f, "almost {n} years"),
        }
    }
}

/// Format the time elapsed between `since` and `now`
///
/// # Examples
///
/// ```
/// use jiff::Timestamp;
/// use snackq::formatting::format_distance;
///
/// let opened: Timestamp = "2024-01-15T10:00:00Z".parse().unwrap();
/// let now: Timestamp = "2024-01-15T10:30:00Z".parse().unwrap();
/// assert_eq!(format_distance(opened, now), "30 minutes");
/// ```
pub fn format_distance(since: Timestamp, now: Timestamp) -> String {
    Distance::between(since, now).to_string()
}

/// Integer division rounding half up, for non-negative operands.
fn round_div(value: i64, divisor: i64) -> i64 {
    (value as f64 / divisor as f64).round() as i64
}

/// Whole calendar months from `earlier` to `later` (UTC).
fn calendar_months_between(earlier: Timestamp, later: Timestamp) -> i64 {
    let start = utc_datetime(earlier);
    let end = utc_datetime(later);

    let mut months = (i64::from(end.year()) - i64::from(start.year())) * 12
        + (i64::from(end.month()) - i64::from(start.month()));

    // The final month only counts once its day and time have been reached
    if (end.day(), end.time()) < (start.day(), start.time()) {
        months -= 1;
    }
    months.max(0)
}

fn utc_datetime(ts: Timestamp) -> DateTime {
    ts.to_zoned(TimeZone::UTC).datetime()
}
