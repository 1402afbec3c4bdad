use super::*;

fn small() -> FrameRGBA {
    FrameRGBA::new(Canvas {
        width: 8,
        height: 4,
    })
}

#[test]
fn draw_image_clips_at_every_edge() {
    let mut f = small();
    let img = PreparedImage::solid(4, 4, [255, 0, 0, 255]);

    f.draw_image(&img, -2, -2, 1.0);
    assert_eq!(f.pixel(0, 0), [255, 0, 0, 255]);
    assert_eq!(f.pixel(1, 1), [255, 0, 0, 255]);
    assert_eq!(f.pixel(2, 0), [0, 0, 0, 0]);
    assert_eq!(f.pixel(0, 2), [0, 0, 0, 0]);

    f.draw_image(&img, 6, 2, 1.0);
    assert_eq!(f.pixel(7, 3), [255, 0, 0, 255]);
    assert_eq!(f.pixel(5, 3), [0, 0, 0, 0]);

    // Entirely off-frame draws are ignored.
    let before = f.clone();
    f.draw_image(&img, 100, 100, 1.0);
    f.draw_image(&img, -4, 0, 1.0);
    assert_eq!(f, before);
}

#[test]
fn draw_image_reads_the_matching_source_pixel() {
    let mut f = small();
    let mut data = vec![0u8; 2 * 1 * 4];
    data[..4].copy_from_slice(&[10, 0, 0, 255]);
    data[4..].copy_from_slice(&[0, 20, 0, 255]);
    let img = PreparedImage {
        width: 2,
        height: 1,
        rgba8_premul: std::sync::Arc::new(data),
    };
    f.draw_image(&img, 3, 1, 1.0);
    assert_eq!(f.pixel(3, 1), [10, 0, 0, 255]);
    assert_eq!(f.pixel(4, 1), [0, 20, 0, 255]);
}

#[test]
fn crop_and_draw_frame_round_trip_a_region() {
    let mut f = small();
    f.set_pixel(2, 1, [1, 2, 3, 255]);
    let patch = f.crop(PixelRect::new(2, 1, 2, 2));
    assert_eq!(patch.pixel(0, 0), [1, 2, 3, 255]);

    let mut g = small();
    g.draw_frame(&patch, 5, 0, 1.0);
    assert_eq!(g.pixel(5, 0), [1, 2, 3, 255]);
}

#[test]
fn fingerprint_tracks_content() {
    let a = small();
    let mut b = small();
    assert_eq!(a.fingerprint(), b.fingerprint());
    b.set_pixel(0, 0, [1, 1, 1, 1]);
    assert_ne!(a.fingerprint(), b.fingerprint());
    b.clear();
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn from_raw_checks_length() {
    assert!(FrameRGBA::from_raw(2, 2, vec![0; 16]).is_ok());
    assert!(FrameRGBA::from_raw(2, 2, vec![0; 15]).is_err());
}

#[test]
fn pixel_clamped_saturates_coordinates() {
    let mut f = small();
    f.set_pixel(7, 3, [9, 9, 9, 255]);
    assert_eq!(f.pixel_clamped(100, 100), [9, 9, 9, 255]);
    assert_eq!(f.pixel_clamped(-5, -5), f.pixel(0, 0));
}
