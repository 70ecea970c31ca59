use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn min_max_reports_first_extreme_indices() {
    let mm = min_max(&[3.0, -1.0, 7.0, -1.0, 7.0]);
    assert_eq!(mm.max_value, 7.0);
    assert_eq!(mm.max_index, 2);
    assert_eq!(mm.min_value, -1.0);
    assert_eq!(mm.min_index, 1);
}

#[test]
fn min_max_of_empty_is_inverted_infinities() {
    let mm = min_max(&[]);
    assert_eq!(mm.max_value, f64::NEG_INFINITY);
    assert_eq!(mm.min_value, f64::INFINITY);
    assert_eq!((mm.max_index, mm.min_index), (0, 0));
}

#[test]
fn normalize_spans_unit_range() {
    let out = normalize(&[4.0, 10.0, 7.0, -2.0]);
    let mm = min_max(&out);
    assert_eq!(mm.min_value, 0.0);
    assert_eq!(mm.max_value, 1.0);
    assert!(approx(out[2], 0.75));
}

#[test]
fn normalize_constant_series_is_nan() {
    assert!(normalize(&[5.0, 5.0, 5.0]).iter().all(|v| v.is_nan()));
}

#[test]
fn remap_series_example() {
    let out = remap_series(&[10.0, 20.0, 30.0], 0.0, 100.0);
    assert!(approx(out[0], 0.0));
    assert!(approx(out[1], 50.0));
    assert!(approx(out[2], 100.0));
}

#[test]
fn scale_multiplies() {
    assert_eq!(scale(&[1.0, -2.0, 0.5], 4.0), vec![4.0, -8.0, 2.0]);
}

#[test]
fn extract_period_examples() {
    let v = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    assert_eq!(extract_period(&v, 2, 1), vec![3.0, 4.0]);
    assert_eq!(extract_period(&v, 4, 1), vec![5.0, 6.0]);
    assert!(extract_period(&v, 4, 5).is_empty());
    assert_eq!(extract_period_default(&v), v.to_vec());
}

#[test]
fn day_and_week_slices() {
    let hours: Vec<f64> = (0..24 * 8).map(f64::from).collect();
    assert_eq!(day(&hours, 1)[0], 24.0);
    assert_eq!(day(&hours, 1).len(), 24);
    let w = week(&hours, 1);
    assert_eq!(w.len(), 24);
    assert_eq!(w[0], 168.0);
}

#[test]
fn add_series_variadic_example() {
    let out = crate::add_series!([1.0, 2.0], [3.0, 4.0], [5.0, 6.0]).unwrap();
    assert_eq!(out, vec![9.0, 12.0]);
}

#[test]
fn add_series_list_and_empty() {
    let list = vec![vec![1.0, 2.0], vec![3.0, 4.0]];
    assert_eq!(add_series(&list).unwrap(), vec![4.0, 6.0]);

    let empty: Vec<Vec<f64>> = Vec::new();
    assert!(add_series(&empty).unwrap().is_empty());
    assert!(crate::add_series!().unwrap().is_empty());
}

#[test]
fn add_series_rejects_mismatched_lengths() {
    let err = crate::add_series!([1.0, 2.0], [3.0]).unwrap_err();
    assert!(matches!(
        err,
        DataClockError::LengthMismatch {
            expected: 2,
            actual: 1,
            ..
        }
    ));
}

#[test]
fn scale_series_group_shares_global_range() {
    let out = scale_series_group(&[vec![1.0, 2.0], vec![3.0, 4.0]], 0.0, 10.0);
    assert!(approx(out[0][0], 0.0));
    assert!(approx(out[0][1], 10.0 / 3.0));
    assert!(approx(out[1][0], 20.0 / 3.0));
    assert!(approx(out[1][1], 10.0));
}

#[test]
fn scale_series_group_constant_input_is_target_min() {
    let out = scale_series_group(&[vec![2.0, 2.0], vec![2.0]], 5.0, 9.0);
    assert_eq!(out, vec![vec![5.0, 5.0], vec![5.0]]);
}

#[test]
fn scale_series_group_empty_inputs() {
    let none: Vec<Vec<f64>> = Vec::new();
    assert!(scale_series_group_unit(&none).is_empty());
    assert!(scale_series_group_unit(&[Vec::<f64>::new(), Vec::new()]).is_empty());
}

#[test]
fn log_transform_is_signed_and_rebased() {
    assert_eq!(log_transform(0.0, std::f64::consts::E), 0.0);
    assert!(approx(
        log_transform(std::f64::consts::E - 1.0, std::f64::consts::E),
        1.0
    ));
    assert!(approx(log_transform(-9.0, 10.0), -1.0));
}
