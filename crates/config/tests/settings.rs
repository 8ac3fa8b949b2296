use orbit_view_config::{
    ArrowSettings, Color, ConfigError, Palette, RenderSettings, ScenarioConfig, ShadowConfig,
};

const SCENARIO: &str = r#"
name = "overrides"

[view]
scale_px_per_m = 3.0e-6

[settings]
moon_visual_orbit_radii = 4.0

[settings.palette]
lunar = [1, 2, 3]

[settings.arrow]
max_length_px = 90.0

[central_body]
name = "Earth"
radius_km = 6378.0
color = [0, 0, 255]

[moon]
name = "Moon"
radius_km = 1737.0
color = [200, 200, 200]
position_km = [384400.0, 0.0, 0.0]

[sun]
name = "Sun"
radius_km = 695700.0
color = [255, 255, 0]
position_km = [0.0, 1.496e8, 0.0]

[satellite]
name = "SAT"
position_km = [7000.0, 0.0, 0.0]

[orbit]
semi_major_axis_km = 7000.0
eccentricity = 0.01

[accelerations]
shadow = "penumbra"
"#;

#[test]
fn nested_settings_override_only_what_they_name() {
    let config: ScenarioConfig = toml::from_str(SCENARIO).expect("parse");
    config.validate().expect("valid");

    assert_eq!(config.view.scale_px_per_m, 3.0e-6);
    assert_eq!(config.view.width, 800);
    assert_eq!(config.settings.moon_visual_orbit_radii, 4.0);
    assert_eq!(config.settings.palette.lunar, Color(1, 2, 3));
    assert_eq!(config.settings.palette.solar, Palette::default().solar);
    assert_eq!(config.settings.arrow.max_length_px, 90.0);
    assert_eq!(
        config.settings.arrow.min_length_px,
        RenderSettings::default().arrow.min_length_px
    );
    assert_eq!(config.accelerations.shadow, ShadowConfig::Penumbra);
    assert_eq!(config.moon.body.name, "Moon");
    assert_eq!(config.moon.position_km, [384400.0, 0.0, 0.0]);
}

#[test]
fn validation_rejects_degenerate_views() {
    let mut config: ScenarioConfig = toml::from_str(SCENARIO).expect("parse");
    config.view.zoom = 0.0;
    assert!(config.validate().is_err());

    let mut config: ScenarioConfig = toml::from_str(SCENARIO).expect("parse");
    config.view.width = 0;
    assert!(config.validate().is_err());

    let mut config: ScenarioConfig = toml::from_str(SCENARIO).expect("parse");
    config.central_body.radius_km = -1.0;
    assert!(config.validate().is_err());
}

fn arrow_rejection(edit: impl FnOnce(&mut ArrowSettings)) -> String {
    let mut config: ScenarioConfig = toml::from_str(SCENARIO).expect("parse");
    edit(&mut config.settings.arrow);
    match config.validate() {
        Err(ConfigError::Invalid { reason, .. }) => reason,
        other => panic!("expected invalid arrow settings, got {other:?}"),
    }
}

#[test]
fn validation_rejects_inverted_arrow_bounds() {
    let reason = arrow_rejection(|arrow| {
        arrow.min_length_px = 200.0;
        arrow.max_length_px = 100.0;
    });
    assert!(reason.contains("max_length_px"));
    let reason = arrow_rejection(|arrow| arrow.min_length_px = -1.0);
    assert!(reason.contains("min_length_px"));
    let reason = arrow_rejection(|arrow| arrow.max_length_px = f64::NAN);
    assert!(reason.contains("max_length_px"));
}

#[test]
fn validation_rejects_non_positive_threshold() {
    for threshold in [0.0, -1.0e-10, f64::INFINITY, f64::NAN] {
        let reason = arrow_rejection(|arrow| arrow.threshold_m_s2 = threshold);
        assert!(reason.contains("threshold_m_s2"), "threshold {threshold}");
    }
}

#[test]
fn validation_rejects_non_finite_arrow_lengths() {
    let reason = arrow_rejection(|arrow| arrow.base_length_px = f64::INFINITY);
    assert!(reason.contains("base/decade"));
    let reason = arrow_rejection(|arrow| arrow.decade_length_px = f64::NAN);
    assert!(reason.contains("base/decade"));
}

#[test]
fn default_arrow_settings_pass_check() {
    assert!(ArrowSettings::default().check().is_ok());
}
