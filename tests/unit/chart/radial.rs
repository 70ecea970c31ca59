use std::cell::Cell;

use super::*;
use crate::{foundation::error::DataClockError, series::ops::scale_series_group};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-4
}

fn solid_texture() -> Texture {
    Texture::from_premul_rgba8(1, 1, vec![255, 255, 255, 255]).unwrap()
}

struct CountingSource {
    calls: Cell<usize>,
    fail: bool,
}

impl TextureSource for CountingSource {
    fn load(&self, key: &str) -> ChartResult<Texture> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            Err(DataClockError::texture(format!("no texture named {key}")))
        } else {
            Ok(solid_texture())
        }
    }
}

#[test]
fn flat_chart_is_meshed_on_construction() {
    let chart = RadialChart::new(&[1.0, 2.0, 3.0], ChartOptions::default()).unwrap();
    assert_eq!(chart.state(), ChartState::Meshed);
    let mesh = chart.mesh().unwrap();
    assert_eq!(mesh.variant, ShadingVariant::Flat);
    assert!(mesh.texture.is_none());
    assert_eq!(chart.radial_mask(), Some([0.0, 1.0]));
    assert_eq!(chart.pending_texture(), None);
}

#[test]
fn textured_chart_waits_for_its_texture() {
    let opts = ChartOptions {
        texture: Some("gradient.png".to_string()),
        ..ChartOptions::default()
    };
    let mut chart = RadialChart::new(&[1.0, 2.0, 3.0], opts).unwrap();
    assert_eq!(chart.state(), ChartState::GeometryReady);
    assert_eq!(chart.pending_texture(), Some("gradient.png"));
    assert!(chart.mesh().is_none());

    chart.set_radial_mask(0.25, 0.5);
    assert_eq!(chart.radial_mask(), None);

    chart.resolve_texture(Ok(solid_texture())).unwrap();
    assert_eq!(chart.state(), ChartState::Meshed);
    let mesh = chart.mesh().unwrap();
    assert_eq!(mesh.variant, ShadingVariant::Textured);
    assert!(mesh.texture.is_some());
    assert_eq!(mesh.program.fragment, crate::chart::shader::TEXTURED_FRAGMENT_SHADER);
    // Mask set before the mesh existed was dropped.
    assert_eq!(chart.radial_mask(), Some([0.0, 1.0]));

    chart.set_radial_mask(0.25, 0.5);
    assert_eq!(chart.radial_mask(), Some([0.25, 0.5]));
}

#[test]
fn failed_texture_leaves_chart_geometry_only() {
    let opts = ChartOptions {
        texture: Some("missing.png".to_string()),
        ..ChartOptions::default()
    };
    let mut chart = RadialChart::new(&[1.0, 2.0, 3.0], opts).unwrap();
    let err = chart
        .resolve_texture(Err(DataClockError::texture("gone")))
        .unwrap_err();
    assert!(matches!(err, DataClockError::Texture(_)));
    assert_eq!(chart.state(), ChartState::GeometryReady);
    assert!(chart.mesh().is_none());
}

#[test]
fn texture_resolution_happens_once() {
    let opts = ChartOptions {
        texture: Some("t.png".to_string()),
        ..ChartOptions::default()
    };
    let mut chart = RadialChart::new(&[1.0, 2.0, 3.0], opts).unwrap();
    let source = CountingSource {
        calls: Cell::new(0),
        fail: false,
    };
    chart.load_texture(&source).unwrap();
    chart.load_texture(&source).unwrap();
    assert_eq!(source.calls.get(), 1);
    assert_eq!(chart.state(), ChartState::Meshed);

    // A late completion after meshing is ignored.
    chart
        .resolve_texture(Err(DataClockError::texture("late")))
        .unwrap();
    assert_eq!(chart.state(), ChartState::Meshed);
}

#[test]
fn load_texture_propagates_source_errors() {
    let opts = ChartOptions {
        texture: Some("t.png".to_string()),
        ..ChartOptions::default()
    };
    let mut chart = RadialChart::new(&[1.0, 2.0, 3.0], opts).unwrap();
    let source = CountingSource {
        calls: Cell::new(0),
        fail: true,
    };
    assert!(chart.load_texture(&source).is_err());
    assert_eq!(chart.state(), ChartState::GeometryReady);
}

#[test]
fn ring_with_zero_offset_keeps_scaled_radii() {
    let scaled = scale_series_group(&[vec![10.0, 20.0, 30.0, 40.0]], 50.0, 100.0);
    let opts = ChartOptions {
        center_offset: Some(0.0),
        ..ChartOptions::default()
    };
    let chart = RadialChart::new(&scaled[0], opts).unwrap();
    let geom = chart.geometry();

    assert_eq!(geom.kind, GeometryKind::Ring);
    assert_eq!(geom.mesh.vertex_count(), 16);
    assert_eq!(geom.mesh.triangle_count(), 8);
    for (got, want) in geom.outer.iter().zip([50.0, 200.0 / 3.0, 250.0 / 3.0, 100.0]) {
        assert!(approx(*got, want), "{got} != {want}");
    }
    assert!(geom.inner.iter().all(|&r| r == 0.0));
    assert_eq!(geom.attributes.normalized_value.len(), 16);
    assert_eq!(&geom.attributes.normalized_value[..4], &[0.0, 1.0, 1.0, 0.0]);
    assert_eq!(geom.attributes.uv.len(), 32);
}

#[test]
fn relative_offset_follows_outer_contour() {
    let opts = ChartOptions {
        center_offset: Some(5.0),
        relative_offset: true,
        ..ChartOptions::default()
    };
    let chart = RadialChart::new(&[20.0, 30.0, 40.0], opts).unwrap();
    let geom = chart.geometry();
    for (o, i) in geom.outer.iter().zip(&geom.inner) {
        assert!(approx(o - i, 5.0));
    }
}

#[test]
fn sample_and_subdivision_counts_are_clamped() {
    let opts = ChartOptions {
        subdivisions: Some(20),
        ..ChartOptions::default()
    };
    let chart = RadialChart::new(&[1.0, 2.0, 3.0], opts).unwrap();
    // Ten Chaikin passes double the three points ten times.
    assert_eq!(chart.geometry().outer.len(), 3 * 1024);

    let opts = ChartOptions {
        samples: Some(1),
        ..ChartOptions::default()
    };
    let chart = RadialChart::new(&[1.0, 2.0, 3.0, 4.0, 5.0], opts).unwrap();
    assert_eq!(chart.geometry().outer.len(), 3);
}

#[test]
fn explicit_bounding_box_drives_uv() {
    let bounds = BoundingBox::new(-10.0, -10.0, 10.0, 10.0);
    let opts = ChartOptions {
        bounding_box: Some(bounds),
        ..ChartOptions::default()
    };
    let chart = RadialChart::new(&[5.0, 5.0, 5.0, 5.0], opts).unwrap();
    let geom = chart.geometry();
    assert_eq!(geom.bounds, bounds);
    // Fan center maps to the middle of the shared box.
    let (u, v) = geom.attributes.uv_at(0).unwrap();
    assert!(approx(f64::from(u), 0.5) && approx(f64::from(v), 0.5));
}

#[test]
fn auto_bounds_fit_the_mesh() {
    let chart = RadialChart::new(&[5.0, 5.0, 5.0, 5.0], ChartOptions::default()).unwrap();
    let geom = chart.geometry();
    assert!(approx(geom.bounds.x0, -5.0) && approx(geom.bounds.x1, 5.0));
    for uv in geom.attributes.uv.iter() {
        assert!((-1e-5..=1.0 + 1e-5).contains(uv));
    }
}

#[test]
fn fan_attributes_have_one_entry_per_vertex() {
    let chart = RadialChart::new(&[1.0, 2.0, 3.0, 4.0], ChartOptions::default()).unwrap();
    let geom = chart.geometry();
    assert_eq!(geom.kind, GeometryKind::Fan);
    assert_eq!(geom.mesh.vertex_count(), 12);
    assert_eq!(geom.attributes.normalized_value.len(), 12);
    assert_eq!(geom.attributes.value.len(), 12);
    assert_eq!(&geom.attributes.value[..3], &[0.0, 1.0, 2.0]);
    assert!(geom.inner.is_empty());
}

#[test]
fn custom_shader_and_label_are_kept() {
    let opts = ChartOptions {
        label: Some("steps".to_string()),
        shader: Some(crate::chart::options::ShaderSource {
            vertex: Some("v".to_string()),
            fragment: None,
        }),
        blend_mode: BlendMode::Add,
        ..ChartOptions::default()
    };
    let chart = RadialChart::new(&[1.0, 2.0, 3.0], opts).unwrap();
    assert_eq!(chart.label(), Some("steps"));
    let mesh = chart.mesh().unwrap();
    assert_eq!(mesh.program.vertex, "v");
    assert_eq!(mesh.blend_mode, BlendMode::Add);
}
