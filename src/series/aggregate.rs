use time::{Date, Duration, Month, PrimitiveDateTime};

use crate::foundation::{
    core::Series,
    error::{ChartResult, DataClockError},
};

/// Reduction applied to each bucket.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Aggregation {
    Sum,
    #[default]
    Average,
    Max,
    Min,
}

impl Aggregation {
    /// Reduce one bucket. Empty buckets reduce to 0.
    pub fn reduce(self, values: &[f64]) -> f64 {
        if values.is_empty() {
            return 0.0;
        }
        match self {
            Self::Sum => values.iter().sum(),
            Self::Average => values.iter().sum::<f64>() / values.len() as f64,
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
        }
    }
}

/// Calendar period of one bucket.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationPeriod {
    Day,
    Week,
    Month,
    Year,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AggregationConfig {
    pub period: AggregationPeriod,
    #[serde(default)]
    pub aggregation: Aggregation,
    /// Timestamp of the first hourly sample.
    pub start: PrimitiveDateTime,
}

/// One emitted bucket with its calendar bounds (`end` exclusive).
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Bucket {
    pub start: PrimitiveDateTime,
    pub end: PrimitiveDateTime,
    pub value: f64,
}

/// Bucket hourly samples into calendar periods and reduce each bucket.
///
/// Sample `i` is stamped `start + i hours`. A bucket closes once a stamp reaches its end
/// boundary; the next bucket starts at that boundary. A trailing partial bucket is kept.
pub fn aggregate_time_series(hourly: &[f64], config: AggregationConfig) -> ChartResult<Series> {
    Ok(aggregate_time_series_with_bounds(hourly, config)?
        .into_iter()
        .map(|b| b.value)
        .collect())
}

#[tracing::instrument(skip(hourly), fields(len = hourly.len()))]
pub fn aggregate_time_series_with_bounds(
    hourly: &[f64],
    config: AggregationConfig,
) -> ChartResult<Vec<Bucket>> {
    let mut out = Vec::new();
    let mut bucket_start = config.start;
    let mut bucket_end = period_end(bucket_start, config.period)?;
    let mut current = Vec::<f64>::new();

    let mut idx = 0usize;
    while idx < hourly.len() {
        let stamp = config
            .start
            .checked_add(Duration::hours(idx as i64))
            .ok_or_else(|| DataClockError::validation("hour stamp out of calendar range"))?;

        if stamp < bucket_end {
            current.push(hourly[idx]);
            idx += 1;
            continue;
        }

        if !current.is_empty() {
            out.push(Bucket {
                start: bucket_start,
                end: bucket_end,
                value: config.aggregation.reduce(&current),
            });
            current.clear();
        }
        bucket_start = bucket_end;
        bucket_end = period_end(bucket_start, config.period)?;
    }

    if !current.is_empty() {
        out.push(Bucket {
            start: bucket_start,
            end: bucket_end,
            value: config.aggregation.reduce(&current),
        });
    }

    tracing::debug!(buckets = out.len(), "aggregated time series");
    Ok(out)
}

/// Average/sum/max/min every 4 quarter-hour samples into one hourly sample.
pub fn quarter_to_hourly(values: &[f64], aggregation: Aggregation) -> ChartResult<Series> {
    fixed_chunks(values, 4, "15-minute intervals", aggregation)
}

/// Reduce every 24 hourly samples into one daily sample.
pub fn hourly_to_daily(values: &[f64], aggregation: Aggregation) -> ChartResult<Series> {
    fixed_chunks(values, 24, "hours per day", aggregation)
}

fn fixed_chunks(
    values: &[f64],
    chunk: usize,
    unit: &'static str,
    aggregation: Aggregation,
) -> ChartResult<Series> {
    if values.len() % chunk != 0 {
        return Err(DataClockError::not_divisible(values.len(), chunk, unit));
    }
    Ok(values
        .chunks_exact(chunk)
        .map(|c| aggregation.reduce(c))
        .collect())
}

/// Reduce daily samples into calendar months starting at `start`'s month.
///
/// Each bucket consumes exactly the number of days of its month; a trailing partial
/// month is dropped rather than aggregated.
pub fn daily_to_monthly(
    values: &[f64],
    aggregation: Aggregation,
    start: Option<Date>,
) -> ChartResult<Series> {
    let start = start.ok_or(DataClockError::MissingStartDate)?;

    let mut out = Vec::new();
    let mut pos = 0usize;
    let mut year = start.year();
    let mut month = start.month();

    while pos < values.len() {
        let days = usize::from(days_in_month(year, month));
        if pos + days > values.len() {
            break;
        }
        out.push(aggregation.reduce(&values[pos..pos + days]));
        pos += days;

        if month == Month::December {
            year += 1;
        }
        month = month.next();
    }
    Ok(out)
}

pub(crate) fn days_in_month(year: i32, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if time::util::is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

fn period_end(from: PrimitiveDateTime, period: AggregationPeriod) -> ChartResult<PrimitiveDateTime> {
    let end = match period {
        AggregationPeriod::Day => from.checked_add(Duration::days(1)),
        AggregationPeriod::Week => from.checked_add(Duration::days(7)),
        AggregationPeriod::Month => add_months(from, 1),
        AggregationPeriod::Year => add_months(from, 12),
    };
    end.ok_or_else(|| DataClockError::validation("period end out of calendar range"))
}

/// Calendar month addition that lets an out-of-range day spill into the following
/// month (Jan 31 + 1 month = Mar 2 or Mar 3).
fn add_months(from: PrimitiveDateTime, months: i32) -> Option<PrimitiveDateTime> {
    let total = from.year() * 12 + i32::from(u8::from(from.month())) - 1 + months;
    let year = total.div_euclid(12);
    let month = Month::try_from(u8::try_from(total.rem_euclid(12) + 1).ok()?).ok()?;

    let first = Date::from_calendar_date(year, month, 1).ok()?;
    let date = first.checked_add(Duration::days(i64::from(from.day()) - 1))?;
    Some(PrimitiveDateTime::new(date, from.time()))
}

#[cfg(test)]
#[path = "../../tests/unit/series/aggregate.rs"]
mod tests;
