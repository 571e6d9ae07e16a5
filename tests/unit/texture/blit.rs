use super::*;

fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RasterImage {
    RasterImage::from_rgba_image(image::RgbaImage::from_pixel(
        width,
        height,
        image::Rgba(rgba),
    ))
}

fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
    rgba.repeat((width * height) as usize)
}

fn px(buf: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * width + x) * 4) as usize;
    [buf[i], buf[i + 1], buf[i + 2], buf[i + 3]]
}

#[test]
fn affine_maps_source_corners_onto_destination_corners() {
    let src = ContentBounds {
        x: 10,
        y: 20,
        width: 50,
        height: 25,
    };
    let dst = Rect::new(5.0, 7.0, 105.0, 207.0);
    let a = src_to_dst_affine(src, dst);

    let p0 = a * Point::new(10.0, 20.0);
    let p1 = a * Point::new(60.0, 45.0);
    assert!((p0.x - 5.0).abs() < 1e-9 && (p0.y - 7.0).abs() < 1e-9);
    assert!((p1.x - 105.0).abs() < 1e-9 && (p1.y - 207.0).abs() < 1e-9);
}

#[test]
fn opaque_source_fills_inner_rect_only() {
    let src = solid(4, 4, [255, 0, 0, 255]);
    let mut dst = filled(10, 10, [255, 255, 255, 255]);
    blit_scaled_over(
        &mut dst,
        10,
        10,
        &src,
        ContentBounds::full(4, 4),
        Rect::new(2.0, 3.0, 8.0, 7.0),
    )
    .unwrap();

    assert_eq!(px(&dst, 10, 2, 3), [255, 0, 0, 255]);
    assert_eq!(px(&dst, 10, 7, 6), [255, 0, 0, 255]);
    assert_eq!(px(&dst, 10, 1, 3), [255, 255, 255, 255]);
    assert_eq!(px(&dst, 10, 8, 6), [255, 255, 255, 255]);
    assert_eq!(px(&dst, 10, 4, 2), [255, 255, 255, 255]);
    assert_eq!(px(&dst, 10, 4, 7), [255, 255, 255, 255]);
}

#[test]
fn cropped_region_does_not_bleed_neighbouring_pixels() {
    // Left half blue, right half green; crop to the green half only.
    let mut img = image::RgbaImage::from_pixel(4, 2, image::Rgba([0, 0, 255, 255]));
    for y in 0..2 {
        for x in 2..4 {
            img.put_pixel(x, y, image::Rgba([0, 255, 0, 255]));
        }
    }
    let src = RasterImage::from_rgba_image(img);
    let mut dst = filled(8, 8, [0, 0, 0, 255]);
    blit_scaled_over(
        &mut dst,
        8,
        8,
        &src,
        ContentBounds {
            x: 2,
            y: 0,
            width: 2,
            height: 2,
        },
        Rect::new(0.0, 0.0, 8.0, 8.0),
    )
    .unwrap();

    for y in 0..8 {
        for x in 0..8 {
            assert_eq!(px(&dst, 8, x, y), [0, 255, 0, 255], "({x}, {y})");
        }
    }
}

#[test]
fn transparent_source_pixels_flatten_against_destination() {
    let src = solid(2, 2, [0, 0, 0, 0]);
    let mut dst = filled(4, 4, [12, 34, 56, 255]);
    blit_scaled_over(
        &mut dst,
        4,
        4,
        &src,
        ContentBounds::full(2, 2),
        Rect::new(0.0, 0.0, 4.0, 4.0),
    )
    .unwrap();
    assert!(dst.chunks_exact(4).all(|p| p == [12, 34, 56, 255]));
}

#[test]
fn half_alpha_source_blends_with_destination() {
    let src = solid(1, 1, [255, 0, 0, 128]);
    let mut dst = filled(2, 2, [0, 0, 255, 255]);
    blit_scaled_over(
        &mut dst,
        2,
        2,
        &src,
        ContentBounds::full(1, 1),
        Rect::new(0.0, 0.0, 2.0, 2.0),
    )
    .unwrap();
    let p = px(&dst, 2, 1, 1);
    assert_eq!(p[3], 255);
    assert_eq!(p[0], 128);
    assert_eq!(p[1], 0);
    assert_eq!(p[2], 127);
}

#[test]
fn rejects_mismatched_buffer_and_out_of_range_source() {
    let src = solid(2, 2, [1, 1, 1, 255]);
    let mut short = vec![0u8; 7];
    assert!(
        blit_scaled_over(
            &mut short,
            2,
            1,
            &src,
            ContentBounds::full(2, 2),
            Rect::new(0.0, 0.0, 2.0, 1.0),
        )
        .is_err()
    );

    let mut dst = filled(2, 2, [0, 0, 0, 255]);
    assert!(
        blit_scaled_over(
            &mut dst,
            2,
            2,
            &src,
            ContentBounds::full(3, 2),
            Rect::new(0.0, 0.0, 2.0, 2.0),
        )
        .is_err()
    );
}

#[test]
fn empty_destination_is_a_no_op() {
    let src = solid(2, 2, [9, 9, 9, 255]);
    let mut dst = filled(3, 3, [1, 2, 3, 255]);
    blit_scaled_over(
        &mut dst,
        3,
        3,
        &src,
        ContentBounds::full(2, 2),
        Rect::new(2.0, 2.0, 1.0, 1.0),
    )
    .unwrap();
    assert!(dst.chunks_exact(4).all(|p| p == [1, 2, 3, 255]));
}
