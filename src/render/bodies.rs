use orbit_view_config::RenderSettings;
use orbit_view_orbits::EllipseShape;

use crate::canvas::{Canvas, CanvasError, Point};
use crate::geometry::{offset_along, pixel_radius, screen_direction};
use crate::scene::{CelestialBody, OrbitParameters, PlacedBody, RasterImage, Satellite, Viewport};

/// Sprite when one is available and large enough on screen, outlined disk otherwise.
fn draw_body_shape<C: Canvas + ?Sized>(
    canvas: &mut C,
    center: Point,
    radius_px: f64,
    body: &CelestialBody,
    image: Option<&RasterImage>,
    settings: &RenderSettings,
) -> Result<(), CanvasError> {
    let diameter = 2.0 * radius_px;
    match image {
        Some(image) if diameter > settings.min_image_px => canvas.image(image, center, diameter),
        _ => {
            canvas.fill_circle(center, radius_px, body.color)?;
            canvas.stroke_circle(center, radius_px, body.outline_color)
        }
    }
}

/// Static Kepler ellipse with the occupied focus on the viewport center.
pub(super) fn draw_orbit<C: Canvas + ?Sized>(
    canvas: &mut C,
    viewport: &Viewport,
    orbit: OrbitParameters,
    settings: &RenderSettings,
) -> Result<(), CanvasError> {
    let Some(shape) = EllipseShape::new(orbit.semi_major_axis_m, orbit.eccentricity) else {
        log::debug!("skipping orbit ellipse for {orbit:?}");
        return Ok(());
    };
    let s = viewport.pixels_per_metre();
    let (cx, cy) = viewport.center;
    let points: Vec<Point> = shape
        .sample(settings.orbit_segments)
        .into_iter()
        .map(|(x, y)| (cx + x * s, cy - y * s))
        .collect();
    canvas.polyline(&points, settings.palette.orbit)
}

pub(super) fn draw_central_body<C: Canvas + ?Sized>(
    canvas: &mut C,
    viewport: &Viewport,
    body: &CelestialBody,
    settings: &RenderSettings,
) -> Result<(), CanvasError> {
    let radius = pixel_radius(
        body.radius_m,
        viewport.pixels_per_metre(),
        settings.min_body_radius_px,
    );
    draw_body_shape(
        canvas,
        viewport.center,
        radius,
        body,
        body.image.as_ref(),
        settings,
    )
}

/// The moon sits along its true direction but at a compressed, fixed distance of
/// `moon_visual_orbit_radii` central-body radii so it stays on screen.
pub(super) fn draw_moon<C: Canvas + ?Sized>(
    canvas: &mut C,
    viewport: &Viewport,
    moon: &PlacedBody,
    image: Option<&RasterImage>,
    central_radius_m: f64,
    settings: &RenderSettings,
) -> Result<(), CanvasError> {
    let s = viewport.pixels_per_metre();
    let dir = screen_direction(&moon.position_m).unwrap_or((1.0, 0.0));
    let distance = settings.moon_visual_orbit_radii * central_radius_m * s;
    let center = offset_along(viewport.center, dir, distance);
    let radius = pixel_radius(moon.body.radius_m, s, settings.min_body_radius_px);
    draw_body_shape(canvas, center, radius, &moon.body, image, settings)
}

/// The sun is pinned near the canvas edge in its true direction.
pub(super) fn draw_sun<C: Canvas + ?Sized>(
    canvas: &mut C,
    viewport: &Viewport,
    sun: &PlacedBody,
    settings: &RenderSettings,
) -> Result<(), CanvasError> {
    let (width, height) = canvas.size();
    let half_side = width.min(height) as f64 / 2.0;
    let dir = screen_direction(&sun.position_m).unwrap_or((1.0, 0.0));
    let center = offset_along(
        viewport.center,
        dir,
        settings.sun_visual_fraction * half_side,
    );
    let radius = pixel_radius(
        sun.body.radius_m,
        viewport.pixels_per_metre(),
        settings.min_body_radius_px,
    )
    .min(settings.max_sun_radius_px);
    draw_body_shape(
        canvas,
        center,
        radius,
        &sun.body,
        sun.body.image.as_ref(),
        settings,
    )
}

pub(super) fn draw_satellite<C: Canvas + ?Sized>(
    canvas: &mut C,
    viewport: &Viewport,
    satellite: &Satellite,
    settings: &RenderSettings,
) -> Result<(), CanvasError> {
    let center = viewport.to_screen(&satellite.position_m);
    let size = satellite.size_px.max(1.0);
    match &satellite.image {
        Some(image) if size >= settings.min_image_px => canvas.image(image, center, size),
        _ => canvas.fill_circle(center, size / 2.0, satellite.color),
    }
}
