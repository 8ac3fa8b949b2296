use std::f64::consts::PI;

use orbit_view::config::{ArrowSettings, Palette};
use orbit_view::geometry::{
    arrow_head, arrow_length, head_length, label_align, label_origin, pixel_radius,
    screen_direction,
};
use orbit_view::orbits::{EllipseShape, semi_minor_axis};
use orbit_view::palette::{GravitySource, shadow_color};
use orbit_view::{HAlign, ShadowCondition, Viewport};

#[test]
fn pixel_radius_is_monotonic_in_scale_times_zoom() {
    let radius_m = 6_378_137.0;
    let min_px = 4.0;
    let mut previous = 0.0;
    for exponent in -120..=-30 {
        let scale = 10f64.powf(exponent as f64 / 10.0);
        for zoom in [0.25, 1.0, 3.0] {
            let r = pixel_radius(radius_m, scale * zoom, min_px);
            assert!(r >= min_px);
            if zoom == 1.0 {
                assert!(r >= previous, "radius shrank at scale {scale}");
                previous = r;
            }
        }
    }
}

#[test]
fn pixel_radius_substitutes_icon_below_threshold() {
    assert_eq!(pixel_radius(1_000.0, 1.0e-5, 4.0), 4.0);
    assert!((pixel_radius(1.0e6, 1.0e-5, 4.0) - 10.0).abs() < 1e-9);
    assert_eq!(pixel_radius(f64::NAN, 1.0e-5, 4.0), 4.0);
}

#[test]
fn semi_minor_axis_matches_kepler_for_bound_orbits() {
    let a = 7_000_000.0;
    for i in 0..100 {
        let e = i as f64 / 100.0;
        let shape = EllipseShape::new(a, e).expect("bound orbit");
        let expected = a * (1.0 - e * e).sqrt();
        assert!((shape.semi_minor - expected).abs() < 1e-6);
        assert!((semi_minor_axis(a, e) - expected).abs() < 1e-6);
        assert!((shape.focus_offset - a * e).abs() < 1e-6);
    }
    assert!(EllipseShape::new(a, 1.0).is_none());
    assert!(EllipseShape::new(a, -0.1).is_none());
    assert!(EllipseShape::new(0.0, 0.1).is_none());
}

#[test]
fn arrow_length_is_clamped_across_magnitude_range() {
    let arrow = ArrowSettings::default();
    let mut exponent = -10.0;
    while exponent <= 2.0 {
        let len = arrow_length(10f64.powf(exponent), &arrow);
        assert!(
            (arrow.min_length_px..=arrow.max_length_px).contains(&len),
            "length {len} out of range at 1e{exponent}"
        );
        exponent += 0.25;
    }
    assert_eq!(arrow_length(1.0e-10, &arrow), arrow.base_length_px);
    assert_eq!(arrow_length(1.0e2, &arrow), arrow.max_length_px);
    assert_eq!(arrow_length(0.0, &arrow), arrow.min_length_px);
    assert_eq!(arrow_length(1.0e-14, &arrow), arrow.min_length_px);
}

#[test]
fn arrow_length_survives_unchecked_settings() {
    let inverted = ArrowSettings {
        min_length_px: 200.0,
        max_length_px: 100.0,
        ..ArrowSettings::default()
    };
    assert_eq!(arrow_length(1.0e-5, &inverted), 200.0);

    let negative_threshold = ArrowSettings {
        threshold_m_s2: -1.0e-10,
        ..ArrowSettings::default()
    };
    let len = arrow_length(1.0e-5, &negative_threshold);
    assert!(len.is_finite());
    assert_eq!(len, negative_threshold.min_length_px);
}

#[test]
fn label_anchor_flips_at_vertical_midline() {
    assert_eq!(label_align(0.0, 800), HAlign::Left);
    assert_eq!(label_align(399.999, 800), HAlign::Left);
    assert_eq!(label_align(400.0, 800), HAlign::Right);
    assert_eq!(label_align(799.0, 800), HAlign::Right);
    assert_eq!(label_align(320.5, 641), HAlign::Right);

    assert_eq!(label_origin((100.0, 50.0), HAlign::Left, 8.0), (108.0, 50.0));
    assert_eq!(label_origin((100.0, 50.0), HAlign::Right, 8.0), (92.0, 50.0));
}

#[test]
fn arrowhead_barbs_sit_behind_the_tip() {
    let tip = (100.0, 100.0);
    let barbs = arrow_head(tip, (1.0, 0.0), 10.0, PI / 7.0);
    for (from, to) in barbs {
        assert_eq!(from, tip);
        let dx = to.0 - tip.0;
        let dy = to.1 - tip.1;
        assert!(dx < 0.0, "barb must point backwards");
        assert!(((dx * dx + dy * dy).sqrt() - 10.0).abs() < 1e-9);
        assert!((dy.abs().atan2(-dx) - PI / 7.0).abs() < 1e-9);
    }
    assert!((barbs[0].1.1 - 100.0) * (barbs[1].1.1 - 100.0) < 0.0, "barbs on both sides");
}

#[test]
fn arrowhead_shrinks_for_short_arrows() {
    let arrow = ArrowSettings::default();
    let full = head_length(150.0, (800, 600), &arrow);
    assert!((full - 0.015 * 600.0).abs() < 1e-9);
    let short = head_length(12.0, (800, 600), &arrow);
    assert!((short - 4.8).abs() < 1e-9);
}

#[test]
fn screen_direction_flips_y_and_ignores_z() {
    let (x, y) = screen_direction(&[0.0, 2.0, 5.0]).unwrap();
    assert!(x.abs() < 1e-12 && (y + 1.0).abs() < 1e-12);
    assert!(screen_direction(&[0.0, 0.0, 1.0]).is_none());
    assert!(screen_direction(&[f64::NAN, 0.0, 0.0]).is_none());
}

#[test]
fn viewport_projects_model_metres() {
    let viewport = Viewport::new(400.0, 300.0, 0.5, 2.0);
    assert_eq!(viewport.pixels_per_metre(), 1.0);
    assert_eq!(viewport.to_screen(&[20.0, 10.0, 9.9e9]), (420.0, 290.0));
}

#[test]
fn shadow_color_is_pure_per_variant() {
    let palette = Palette::default();
    let variants = [
        ShadowCondition::DirectSunlight,
        ShadowCondition::Penumbra,
        ShadowCondition::Umbral,
    ];
    for shadow in variants {
        let first = shadow_color(shadow, &palette);
        for _ in 0..5 {
            assert_eq!(shadow_color(shadow, &palette), first);
        }
    }
    assert_ne!(
        shadow_color(ShadowCondition::DirectSunlight, &palette),
        shadow_color(ShadowCondition::Umbral, &palette)
    );
    assert_eq!(
        shadow_color(ShadowCondition::Penumbra, &palette),
        palette.srp_penumbra
    );
}

#[test]
fn dominant_gravity_prefers_moon_on_ties() {
    assert_eq!(GravitySource::dominant(1.0e-6, 1.0e-6), GravitySource::Lunar);
    assert_eq!(GravitySource::dominant(1.0e-7, 1.0e-6), GravitySource::Solar);
    assert_eq!(GravitySource::dominant(0.0, 0.0), GravitySource::Lunar);
}
