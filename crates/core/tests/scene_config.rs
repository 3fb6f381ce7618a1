//! Loading scene configs from RON and resolving them end to end
use approx::assert_relative_eq;
use std::time::Duration;
use transparent_view_core::geometry::{INDEX_COUNT, VERTEX_COUNT};
use transparent_view_core::{RgbType, SceneConfig, SceneError, SceneSetup, Vec3};

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[test]
fn test_empty_ron_gives_defaults() {
    let config = SceneConfig::from_ron_str("()").unwrap();
    assert_eq!(config, SceneConfig::default());
}

#[test]
fn test_partial_ron_overrides_only_named_fields() {
    let text = r"
        SceneConfig(
            material: (
                base_color: (0.2, 0.4, 0.6),
                color_space: Linear,
                roughness: 0.8,
            ),
            sun: (intensity_lux: 50000.0),
            animation: (duration_ms: 2000),
        )
    ";
    let config = SceneConfig::from_ron_str(text).unwrap();

    assert_eq!(config.material.base_color, Vec3::new(0.2, 0.4, 0.6));
    assert_eq!(config.material.color_space, RgbType::Linear);
    assert_eq!(config.material.roughness, 0.8);
    // untouched fields keep their defaults
    assert_eq!(config.material.reflectance, 0.5);
    assert_eq!(config.sun.intensity_lux, 50_000.0);
    assert_eq!(config.sun.temperature_kelvin, 5500.0);
    assert_eq!(config.animation.duration_ms, 2000);
    assert_eq!(config.animation.to_degrees, 360.0);
}

#[test]
fn test_written_config_reads_back() {
    let mut config = SceneConfig::default();
    config.sun.direction = Vec3::new(0.0, -1.0, 0.5);
    config.camera.zoom = 2.0;

    let text = config.to_ron_string().unwrap();
    assert!(text.contains("SceneConfig"));
    assert_eq!(SceneConfig::from_ron_str(&text).unwrap(), config);
}

#[test]
fn test_malformed_ron_is_a_parse_error() {
    let err = SceneConfig::from_ron_str("SceneConfig(opaque: maybe)").unwrap_err();
    assert!(matches!(err, SceneError::Parse(_)), "unexpected error: {err}");
}

#[test]
fn test_invalid_values_are_rejected_on_load() {
    let err = SceneConfig::from_ron_str("(material: (metallic: 2.0))").unwrap_err();
    assert!(matches!(
        err,
        SceneError::OutOfRange {
            name: "material.metallic",
            ..
        }
    ));
    assert_eq!(err.to_string(), "material.metallic must be within [0, 1], got 2");

    let err = SceneConfig::from_ron_str("(sun: (direction: (0.0, 0.0, 0.0)))").unwrap_err();
    assert!(matches!(err, SceneError::ZeroDirection { .. }));
}

#[test]
fn test_camera_looking_straight_down_its_up_axis_is_rejected() {
    let mut config = SceneConfig::default();
    config.camera.look_at.eye = [0.0, 5.0, 0.0];
    assert!(matches!(
        SceneSetup::resolve(&config),
        Err(SceneError::ZeroDirection { .. })
    ));
}

#[test]
fn test_resolved_scene_has_everything_the_renderer_needs() {
    let setup = SceneSetup::resolve(&SceneConfig::default()).unwrap();

    assert_eq!(setup.clear_color(), [0.0; 4]);
    assert!(!setup.config().opaque);

    let light = setup.light();
    assert_eq!(light.color.r(), 1.0);
    assert!(light.color.b() < light.color.r());
    assert_relative_eq!(light.direction.length(), 1.0, epsilon = 1e-6);
    assert!(light.cast_shadows);

    assert_relative_eq!(setup.exposure(), 1.0 / 38400.0, max_relative = 1e-4);

    assert_eq!(setup.cube().vertices().len(), VERTEX_COUNT);
    assert_eq!(setup.cube().indices().len(), INDEX_COUNT);

    let (projection, viewport) = setup.projection_for(1080, 1920).unwrap();
    assert_relative_eq!(projection.right, 1080.0 / 1920.0 * 1.5, epsilon = 1e-12);
    assert_eq!(viewport.width, 1080);

    let halfway = setup.sweep_transform(Duration::from_millis(500));
    // half a turn about +Y flips the X axis
    assert_relative_eq!(halfway[0], -1.0, epsilon = 1e-5);
}
