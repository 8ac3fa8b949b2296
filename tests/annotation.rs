use orbit_view::ShadowCondition;
use orbit_view::annotation::{
    away_label, components_label, format_sci, hemisphere_label, lit_label, magnitude_label,
};

#[test]
fn scientific_format_matches_printf() {
    assert_eq!(format_sci(1.0e-5, 2), "1.00e-05");
    assert_eq!(format_sci(320.0, 2), "3.20e+02");
    assert_eq!(format_sci(0.0, 2), "0.00e+00");
    assert_eq!(format_sci(-4.5e-8, 2), "-4.50e-08");
    assert_eq!(format_sci(1.0e123, 1), "1.0e+123");
    assert_eq!(format_sci(f64::INFINITY, 2), "inf");
}

#[test]
fn magnitude_and_component_labels() {
    assert_eq!(magnitude_label("Drag", 6.3e-6), "Drag: 6.30e-06 m/s²");
    assert_eq!(
        components_label(-1.5e-3, 2.0e-4),
        "Rad: -1.50e-03 Tan: 2.00e-04"
    );
}

#[test]
fn hemisphere_bands() {
    assert_eq!(hemisphere_label(80.0), "North, high lat (80.0°)");
    assert_eq!(hemisphere_label(-1.0), "South, near equator (-1.0°)");
    assert_eq!(hemisphere_label(45.0), "North (45.0°)");
    assert_eq!(hemisphere_label(-75.5), "South, high lat (-75.5°)");
    assert_eq!(hemisphere_label(2.3), "North (2.3°)");
}

#[test]
fn lighting_and_away_labels() {
    assert_eq!(lit_label(ShadowCondition::DirectSunlight), "Lit: 100%");
    assert_eq!(lit_label(ShadowCondition::Penumbra), "Lit: 50%");
    assert_eq!(lit_label(ShadowCondition::Umbral), "Lit: 0%");
    assert_eq!(away_label((0.70710678, -0.70710678)), "Away:(0.71,-0.71)");
}
