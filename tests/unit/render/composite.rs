use super::*;

#[test]
fn transparent_source_leaves_destination() {
    let dst = [10, 20, 30, 40];
    assert_eq!(blend(dst, [0, 0, 0, 0], BlendMode::Normal), dst);
    assert_eq!(blend(dst, [0, 0, 0, 0], BlendMode::Add), dst);
}

#[test]
fn opaque_source_replaces_destination() {
    let src = [255, 0, 0, 255];
    assert_eq!(blend([0, 0, 0, 255], src, BlendMode::Normal), src);
}

#[test]
fn transparent_destination_returns_source() {
    let src = [100, 110, 120, 200];
    assert_eq!(blend([0, 0, 0, 0], src, BlendMode::Normal), src);
}

#[test]
fn normal_keeps_the_uncovered_share() {
    let dst = [0, 0, 128, 128];
    let src = [128, 0, 0, 128];
    assert_eq!(blend(dst, src, BlendMode::Normal), [128, 0, 64, 192]);
}

#[test]
fn add_sums_and_saturates() {
    assert_eq!(
        blend([200, 10, 0, 128], [100, 10, 5, 200], BlendMode::Add),
        [255, 20, 5, 255]
    );
    assert_eq!(
        blend([0, 0, 128, 128], [128, 0, 0, 128], BlendMode::Add),
        [128, 0, 128, 255]
    );
}

#[test]
fn composite_layer_checks_buffer_shapes() {
    let mut dst = vec![0u8; 8];
    assert!(matches!(
        composite_layer(&mut dst, &[0u8; 4], BlendMode::Normal),
        Err(DataClockError::LengthMismatch { .. })
    ));
    let mut odd = vec![0u8; 6];
    assert!(composite_layer(&mut odd, &[0u8; 6], BlendMode::Normal).is_err());

    composite_layer(&mut dst, &[255, 0, 0, 255, 0, 0, 0, 0], BlendMode::Normal).unwrap();
    assert_eq!(dst, vec![255, 0, 0, 255, 0, 0, 0, 0]);
}

#[test]
fn unpremultiply_restores_straight_colour() {
    assert_eq!(unpremultiply([64, 32, 0, 128]), [128, 64, 0, 128]);
    assert_eq!(unpremultiply([9, 9, 9, 0]), [0, 0, 0, 0]);
    assert_eq!(unpremultiply([255, 255, 255, 255]), [255, 255, 255, 255]);
}
