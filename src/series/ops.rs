use crate::foundation::{
    core::Series,
    error::{ChartResult, DataClockError},
    math::remap,
};

/// Extremes of a series together with the index of their first occurrence.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MinMax {
    pub max_value: f64,
    pub max_index: usize,
    pub min_value: f64,
    pub min_index: usize,
}

/// Single pass min/max scan.
///
/// An empty series yields `max = -inf`, `min = +inf` and zero indices.
pub fn min_max(values: &[f64]) -> MinMax {
    let mut out = MinMax {
        max_value: f64::NEG_INFINITY,
        max_index: 0,
        min_value: f64::INFINITY,
        min_index: 0,
    };

    for (idx, &v) in values.iter().enumerate() {
        if v < out.min_value {
            out.min_value = v;
            out.min_index = idx;
        }
        if v > out.max_value {
            out.max_value = v;
            out.max_index = idx;
        }
    }
    out
}

/// Map the series minimum to 0 and its maximum to 1.
///
/// A constant series has an empty source range, so every output is NaN.
pub fn normalize(values: &[f64]) -> Series {
    let mm = min_max(values);
    values
        .iter()
        .map(|&v| remap(v, mm.min_value, mm.max_value, 0.0, 1.0))
        .collect()
}

/// [`normalize`] followed by a linear map into `[low, high]`.
pub fn remap_series(values: &[f64], low: f64, high: f64) -> Series {
    normalize(values)
        .into_iter()
        .map(|v| remap(v, 0.0, 1.0, low, high))
        .collect()
}

pub fn scale(values: &[f64], factor: f64) -> Series {
    values.iter().map(|v| v * factor).collect()
}

/// Slice `[index * size, (index + 1) * size)`, clipped to the series.
pub fn extract_period(values: &[f64], size: usize, index: usize) -> Series {
    let start = index.saturating_mul(size).min(values.len());
    let end = index
        .saturating_add(1)
        .saturating_mul(size)
        .min(values.len());
    values[start..end].to_vec()
}

/// First 24 samples.
pub fn extract_period_default(values: &[f64]) -> Series {
    extract_period(values, 24, 0)
}

/// Hourly samples of one day.
pub fn day(values: &[f64], day_index: usize) -> Series {
    extract_period(values, 24, day_index)
}

/// Hourly samples of one week.
pub fn week(values: &[f64], week_index: usize) -> Series {
    extract_period(values, 24 * 7, week_index)
}

/// Element-wise sum of equally long series.
///
/// An empty list yields an empty series. See [`add_series!`](crate::add_series!) for the
/// variadic call shape.
pub fn add_series<S: AsRef<[f64]>>(series: &[S]) -> ChartResult<Series> {
    let Some(first) = series.first() else {
        return Ok(Vec::new());
    };
    let len = first.as_ref().len();

    if let Some(bad) = series.iter().find(|s| s.as_ref().len() != len) {
        return Err(DataClockError::length_mismatch(
            "all time series must have the same length",
            len,
            bad.as_ref().len(),
        ));
    }

    let mut out = vec![0.0; len];
    for s in series {
        for (acc, v) in out.iter_mut().zip(s.as_ref()) {
            *acc += v;
        }
    }
    Ok(out)
}

/// Variadic form of [`add_series`](crate::add_series()).
///
/// ```
/// let sum = dataclock::add_series!([1.0, 2.0], [3.0, 4.0], [5.0, 6.0]).unwrap();
/// assert_eq!(sum, vec![9.0, 12.0]);
/// ```
#[macro_export]
macro_rules! add_series {
    ($($series:expr),* $(,)?) => {
        $crate::add_series::<&[f64]>(&[$(::core::convert::AsRef::<[f64]>::as_ref(&$series)),*])
    };
}

/// Rescale several series into `[target_min, target_max]` using one shared range.
///
/// Unlike [`normalize`], relative magnitudes between the series survive. When every
/// value is equal the result is `target_min` everywhere.
pub fn scale_series_group<S: AsRef<[f64]>>(
    series: &[S],
    target_min: f64,
    target_max: f64,
) -> Vec<Series> {
    if series.iter().all(|s| s.as_ref().is_empty()) {
        return Vec::new();
    }

    let (global_min, global_max) = series
        .iter()
        .flat_map(|s| s.as_ref().iter().copied())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });

    if global_min == global_max {
        return series
            .iter()
            .map(|s| vec![target_min; s.as_ref().len()])
            .collect();
    }

    let span = global_max - global_min;
    series
        .iter()
        .map(|s| {
            s.as_ref()
                .iter()
                .map(|&v| ((v - global_min) / span) * (target_max - target_min) + target_min)
                .collect()
        })
        .collect()
}

/// [`scale_series_group`] into `[0, 1]`.
pub fn scale_series_group_unit<S: AsRef<[f64]>>(series: &[S]) -> Vec<Series> {
    scale_series_group(series, 0.0, 1.0)
}

/// Signed `ln(|v| + 1)`, optionally rebased.
///
/// Natural base skips the change-of-base division so `e` stays exact.
pub fn log_transform(value: f64, base: f64) -> f64 {
    if value == 0.0 {
        return 0.0;
    }
    let v = value.signum() * (value.abs() + 1.0).ln();
    if base == std::f64::consts::E {
        v
    } else {
        v / base.ln()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/series/ops.rs"]
mod tests;
