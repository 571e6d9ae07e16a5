use super::*;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RasterImage {
    RasterImage::from_rgba_image(image::RgbaImage::from_pixel(
        width,
        height,
        image::Rgba(rgba),
    ))
}

#[test]
fn canvas_pins_longer_axis_to_max() {
    let wide = texture_canvas_for(30.0, 20.0).unwrap();
    assert_eq!(
        wide,
        Canvas {
            width: 2048,
            height: 1365
        }
    );

    let tall = texture_canvas_for(20.0, 30.0).unwrap();
    assert_eq!(
        tall,
        Canvas {
            width: 1365,
            height: 2048
        }
    );

    let square = texture_canvas_for(12.5, 12.5).unwrap();
    assert_eq!(
        square,
        Canvas {
            width: 2048,
            height: 2048
        }
    );
}

#[test]
fn canvas_shorter_side_matches_rounded_ratio() {
    for &(w, h) in &[(10.0, 7.0), (3.0, 11.0), (100.0, 1.0), (21.0, 29.7), (5.0, 5.01)] {
        let c = texture_canvas_for(w, h).unwrap();
        let ratio: f64 = w / h;
        let short = (2048.0 * ratio.min(1.0 / ratio)).round() as u32;
        assert_eq!(c.width.max(c.height), 2048, "{w}x{h}");
        assert_eq!(c.width.min(c.height), short, "{w}x{h}");
    }
}

#[test]
fn canvas_rejects_degenerate_dimensions() {
    for &(w, h) in &[(0.0, 10.0), (10.0, 0.0), (-1.0, 5.0), (f64::NAN, 2.0), (3.0, f64::INFINITY)] {
        assert!(matches!(
            texture_canvas_for(w, h),
            Err(FrameError::Validation(_))
        ));
    }
}

#[test]
fn zero_border_inner_rect_is_full_canvas() {
    for &(w, h) in &[(30.0, 20.0), (9.0, 40.0), (1.0, 1.0)] {
        let canvas = texture_canvas_for(w, h).unwrap();
        let inner = inner_rect(canvas, border_insets(canvas, w, h, 0.0));
        assert_eq!(inner, canvas.to_rect());
    }
}

#[test]
fn border_insets_are_per_axis() {
    let canvas = texture_canvas_for(30.0, 20.0).unwrap();
    let insets = border_insets(canvas, 30.0, 20.0, 2.0);
    assert!((insets.x - 2048.0 * 2.0 / 30.0).abs() < 1e-9);
    assert!((insets.y - 136.5).abs() < 1e-9);
}

#[test]
fn compose_fills_border_and_content() {
    let img = solid(100, 100, [255, 0, 0, 255]);
    let tex = compose_texture(
        &img,
        ContentBounds::full(100, 100),
        30.0,
        20.0,
        2.0,
        FrameColor::WHITE,
    )
    .unwrap();

    assert_eq!(tex.width(), 2048);
    assert_eq!(tex.height(), 1365);
    assert_eq!(tex.color_space, ColorSpace::Srgb);
    assert_eq!(tex.data.len(), 2048 * 1365 * 4);

    let white = [255, 255, 255, 255];
    let red = [255, 0, 0, 255];
    assert_eq!(tex.pixel(0, 0), white);
    assert_eq!(tex.pixel(2047, 1364), white);
    assert_eq!(tex.pixel(136, 682), white);
    assert_eq!(tex.pixel(137, 682), red);
    assert_eq!(tex.pixel(1024, 135), white);
    assert_eq!(tex.pixel(1024, 137), red);
    assert_eq!(tex.pixel(1024, 682), red);
    assert_eq!(tex.pixel(1911, 682), white);
    assert_eq!(tex.pixel(1910, 682), red);
}

#[test]
fn border_swallowing_canvas_leaves_flat_fill() {
    let img = solid(4, 4, [0, 255, 0, 255]);
    let color = FrameColor::rgb(10, 20, 30);
    let tex = compose_texture(&img, ContentBounds::full(4, 4), 10.0, 10.0, 5.0, color).unwrap();
    assert!(tex.data.chunks_exact(4).all(|p| p == color.to_rgba8()));
}

#[test]
fn empty_bounds_leave_flat_fill() {
    let img = solid(4, 4, [0, 255, 0, 255]);
    let color = FrameColor::rgb(1, 2, 3);
    let tex = compose_texture(&img, ContentBounds::full(0, 0), 10.0, 10.0, 0.0, color).unwrap();
    assert!(tex.data.chunks_exact(4).all(|p| p == color.to_rgba8()));
}

#[test]
fn compose_is_deterministic() {
    let mut raw = image::RgbaImage::new(16, 9);
    for (x, y, p) in raw.enumerate_pixels_mut() {
        *p = image::Rgba([(x * 13) as u8, (y * 29) as u8, 77, ((x + y) * 11) as u8]);
    }
    let img = RasterImage::from_rgba_image(raw);
    let bounds = ContentBounds::full(16, 9);
    let a = compose_texture(&img, bounds, 12.0, 18.0, 1.5, FrameColor::rgb(40, 30, 20)).unwrap();
    let b = compose_texture(&img, bounds, 12.0, 18.0, 1.5, FrameColor::rgb(40, 30, 20)).unwrap();
    assert_eq!(a.canvas, b.canvas);
    assert_eq!(a.data, b.data);
    assert!(a.data.chunks_exact(4).all(|p| p[3] == 255));
}

#[test]
fn negative_border_is_rejected() {
    let img = solid(1, 1, [0, 0, 0, 255]);
    let err = compose_texture(
        &img,
        ContentBounds::full(1, 1),
        10.0,
        10.0,
        -0.5,
        FrameColor::WHITE,
    )
    .unwrap_err();
    assert!(matches!(err, FrameError::Validation(_)));
}

#[test]
fn png_encoding_round_trips_dimensions() {
    let img = solid(3, 3, [9, 8, 7, 255]);
    let tex = compose_texture(&img, ContentBounds::full(3, 3), 4.0, 2.0, 0.0, FrameColor::WHITE)
        .unwrap();
    let png = tex.to_png_bytes().unwrap();
    let back = image::load_from_memory(&png).unwrap();
    assert_eq!(back.width(), 2048);
    assert_eq!(back.height(), 1024);
}
