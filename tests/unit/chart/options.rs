use super::*;

#[test]
fn samples_and_subdivisions_are_clamped() {
    let opts = ChartOptions {
        samples: Some(1),
        subdivisions: Some(50),
        ..ChartOptions::default()
    };
    assert_eq!(opts.clamped_samples(), Some(3));
    assert_eq!(opts.clamped_subdivisions(), Some(10));

    let opts = ChartOptions {
        samples: Some(9000),
        subdivisions: Some(2),
        ..ChartOptions::default()
    };
    assert_eq!(opts.clamped_samples(), Some(5000));
    assert_eq!(opts.clamped_subdivisions(), Some(2));

    assert_eq!(ChartOptions::default().clamped_samples(), None);
}

#[test]
fn ring_selection() {
    assert!(!ChartOptions::default().is_ring());
    assert!(
        ChartOptions {
            center_offset: Some(0.0),
            ..ChartOptions::default()
        }
        .is_ring()
    );
    assert!(
        ChartOptions {
            relative_offset: true,
            ..ChartOptions::default()
        }
        .is_ring()
    );
}

#[test]
fn options_parse_from_sparse_json() {
    let json = r#"{
        "samples": 120,
        "center_offset": 25.0,
        "blend_mode": "add",
        "tint": { "r": 255, "g": 195, "b": 0, "a": 1 },
        "bounding_box": { "x0": -50.0, "y0": -50.0, "x1": 50.0, "y1": 50.0 }
    }"#;
    let opts: ChartOptions = serde_json::from_str(json).unwrap();
    assert_eq!(opts.samples, Some(120));
    assert_eq!(opts.blend_mode, BlendMode::Add);
    assert_eq!(opts.bounding_box.unwrap().width(), 100.0);
    assert!(opts.texture.is_none());
    assert!(!opts.relative_offset);
}
