use image::{Rgba, RgbaImage};
use orbit_view::assets::{AssetError, load_image, load_optional};

#[test]
fn missing_image_is_reported() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("nope.png");
    match load_image(&path) {
        Err(AssetError::Missing(p)) => assert_eq!(p, path),
        other => panic!("expected Missing, got {other:?}"),
    }
    assert!(load_optional(&path).is_none());
}

#[test]
fn png_sprite_loads_as_rgba() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("moon.png");
    let mut sprite = RgbaImage::from_pixel(4, 2, Rgba([10, 20, 30, 255]));
    sprite.put_pixel(3, 1, Rgba([200, 100, 50, 0]));
    sprite.save(&path).expect("write png");

    let loaded = load_image(&path).expect("decode png");
    assert_eq!((loaded.width, loaded.height), (4, 2));
    assert_eq!(loaded.pixel(0, 0), [10, 20, 30, 255]);
    assert_eq!(loaded.pixel(3, 1), [200, 100, 50, 0]);
    // Out-of-range lookups clamp to the edge.
    assert_eq!(loaded.pixel(40, 40), [200, 100, 50, 0]);
    assert!(load_optional(&path).is_some());
}

#[test]
fn corrupt_file_is_decode_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"definitely not a png").expect("write");
    assert!(matches!(load_image(&path), Err(AssetError::Decode { .. })));
    assert!(load_optional(&path).is_none());
}
