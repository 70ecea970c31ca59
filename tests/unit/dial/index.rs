use std::f64::consts::FRAC_PI_2;

use super::*;

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn four_marks_go_clockwise_from_top() {
    let marks = index_placements(4, 50.0, 10.0);
    assert_eq!(marks.len(), 4);

    let expected = [(0.0, -40.0), (40.0, 0.0), (0.0, 40.0), (-40.0, 0.0)];
    for (mark, (x, y)) in marks.iter().zip(expected) {
        assert!(approx(mark.position.x, x), "{mark:?}");
        assert!(approx(mark.position.y, y), "{mark:?}");
    }
    assert!(approx(marks[1].rotation, FRAC_PI_2));
    assert_eq!(marks[3].index, 3);
}

#[test]
fn zero_count_is_empty() {
    assert!(index_placements(0, 50.0, 0.0).is_empty());
}
