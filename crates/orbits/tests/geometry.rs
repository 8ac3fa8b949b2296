use orbit_view_orbits::{EllipseShape, latitude_deg, radial_tangential};

#[test]
fn sampled_ellipse_is_closed_and_focus_centred() {
    let shape = EllipseShape::new(10.0, 0.5).expect("bound");
    let points = shape.sample(64);
    assert_eq!(points.len(), 65);
    assert_eq!(points.first(), points.last());
    // Periapsis at +x, apoapsis at -x relative to the focus.
    assert!((points[0].0 - 5.0).abs() < 1e-12);
    assert!((points[32].0 + 15.0).abs() < 1e-9);
    let max_y = points.iter().map(|p| p.1).fold(f64::MIN, f64::max);
    assert!((max_y - shape.semi_minor).abs() < 1e-9);
}

#[test]
fn sample_count_has_a_floor() {
    let shape = EllipseShape::new(1.0, 0.0).expect("circle");
    assert_eq!(shape.sample(0).len(), 4);
}

#[test]
fn latitude_from_position() {
    assert!((latitude_deg(&[1.0, 0.0, 1.0]) - 45.0).abs() < 1e-9);
    assert!((latitude_deg(&[0.0, 0.0, -3.0]) + 90.0).abs() < 1e-9);
    assert_eq!(latitude_deg(&[0.0, 0.0, 0.0]), 0.0);
}

#[test]
fn radial_and_tangential_parts() {
    let (radial, tangential) = radial_tangential(&[2.0, 0.0, 0.0], &[-3.0, 4.0, 0.0]);
    assert!((radial + 3.0).abs() < 1e-12);
    assert!((tangential - 4.0).abs() < 1e-12);

    let (radial, tangential) = radial_tangential(&[0.0, 0.0, 0.0], &[0.0, 3.0, 4.0]);
    assert_eq!(radial, 0.0);
    assert!((tangential - 5.0).abs() < 1e-12);
}
