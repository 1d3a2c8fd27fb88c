//! Continuous time as a day number plus a fraction of a day.

use std::fmt;

/// Day number of the given calendar date, in the day count used throughout
/// this crate (Plan13's `fnday`).
///
/// January and February are treated as months 13 and 14 of the previous
/// year so that the leap day falls at the end of the counting year. There
/// is no calendar validation: out-of-range months or days flow through the
/// same arithmetic and produce a day number with no calendar meaning.
/// `day` may be 0, which addresses the day before the first of the month.
pub fn day_number(year: i32, month: u32, day: u32) -> i64 {
    let (y, m) = if month < 3 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    (y as f64 * 365.25) as i64 + ((m + 1) as f64 * 30.6001) as i64 + day as i64 - 428
}

/// Inverse of [`day_number`], valid for dates after 1900-03-01.
fn calendar_date(day_number: i64) -> (i32, u32, u32) {
    let dn = day_number + 428;
    let mut year = ((dn as f64 - 122.1) / 365.25) as i64;
    let mut rest = dn - (year as f64 * 365.25) as i64;
    let mut month = (rest as f64 / 30.6001) as i64;
    rest -= (month as f64 * 30.6001) as i64;
    month -= 1;
    if month > 12 {
        month -= 12;
        year += 1;
    }
    (year as i32, month as u32, rest as u32)
}

/// An instant in time: a whole day number plus a fraction of a day.
///
/// The fraction is always kept in `[0, 1)`; arithmetic that pushes it out
/// of that range carries whole days into the day number. Instants are plain
/// values, so advancing one produces a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Instant {
    day: i64,
    fraction: f64,
}

impl Instant {
    /// Builds an instant from a raw day number and fraction, renormalizing
    /// the fraction into `[0, 1)`.
    pub fn new(day: i64, fraction: f64) -> Instant {
        let whole = fraction.floor();
        let mut day = day + whole as i64;
        let mut fraction = fraction - whole;
        // fraction - floor(fraction) can round up to 1.0 for values just
        // below a whole number
        if fraction >= 1.0 {
            day += 1;
            fraction -= 1.0;
        }
        Instant { day, fraction }
    }

    /// Converts a Gregorian calendar timestamp. As with [`day_number`],
    /// out-of-range inputs are not rejected.
    pub fn from_ymd_hms(year: i32, month: u32, day: u32, h: u32, m: u32, s: u32) -> Instant {
        let fraction = (h as f64 + m as f64 / 60.0 + s as f64 / 3600.0) / 24.0;
        Instant::new(day_number(year, month, day), fraction)
    }

    /// The calendar timestamp of this instant, truncated to whole seconds.
    /// Round-trips exactly with [`Instant::from_ymd_hms`].
    pub fn to_ymd_hms(&self) -> (i32, u32, u32, u32, u32, u32) {
        let (year, month, day) = calendar_date(self.day);
        let seconds = ((self.fraction * 86400.0).round() as u32).min(86399);
        (
            year,
            month,
            day,
            seconds / 3600,
            seconds / 60 % 60,
            seconds % 60,
        )
    }

    pub fn day(&self) -> i64 {
        self.day
    }

    pub fn fraction(&self) -> f64 {
        self.fraction
    }

    /// Signed elapsed time from `earlier` to `self`, in days.
    pub fn days_since(&self, earlier: Instant) -> f64 {
        (self.day - earlier.day) as f64 + (self.fraction - earlier.fraction)
    }

    /// Adds a signed number of days, of any magnitude.
    pub fn add_days(&self, delta: f64) -> Instant {
        Instant::new(self.day, self.fraction + delta)
    }

    /// Advances to the next multiple of `interval_days` within the day.
    /// An exactly aligned instant advances by a full interval.
    pub fn round_up(&self, interval_days: f64) -> Instant {
        let increment = interval_days - self.fraction.rem_euclid(interval_days);
        Instant::new(self.day, self.fraction + increment)
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (year, month, day, h, m, s) = self.to_ymd_hms();
        write!(
            f,
            "{:04}-{:02}-{:02} {:02}:{:02}:{:02}",
            year, month, day, h, m, s
        )
    }
}
