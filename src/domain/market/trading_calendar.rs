use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta, Weekday};

/// Calendar days walked back per requested trading day, enough to cover weekends.
const WEEKEND_OVERSHOOT: f64 = 1.4;

const MILLIS_PER_DAY: f64 = 86_400_000.0;

pub fn is_trading_day(date: NaiveDate) -> bool {
    !matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Collects `day_count` consecutive weekdays, starting `day_count * 1.4` days before `now`.
///
/// The last date is wherever the walk lands; it is not pinned to `now`.
/// Returns `None` when the walk would leave the representable date range.
pub fn trading_days(now: NaiveDateTime, day_count: usize) -> Option<Vec<NaiveDate>> {
    let lookback_ms = (day_count as f64 * WEEKEND_OVERSHOOT * MILLIS_PER_DAY) as i64;
    let mut current = now
        .checked_sub_signed(TimeDelta::try_milliseconds(lookback_ms)?)?
        .date();

    let mut dates = Vec::with_capacity(day_count);
    while dates.len() < day_count {
        if is_trading_day(current) {
            dates.push(current);
        }
        current = current.succ_opt()?;
    }
    Some(dates)
}
