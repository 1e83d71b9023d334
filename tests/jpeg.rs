//! JPEG codec: delegation, color normalization, failure modes.

use imgconv::{BLACK, ConvertError, Image, Limits, jpeg};

fn solid(w: u32, h: u32, r: u8, g: u8, b: u8) -> Image {
    let mut img = Image::new(w, h, BLACK);
    for y in 0..h {
        for px in img.row_mut(y) {
            px.r = r;
            px.g = g;
            px.b = b;
        }
    }
    img
}

#[test]
fn solid_color_survives_within_tolerance() {
    let img = solid(16, 16, 90, 140, 190);
    let decoded = jpeg::decode(&jpeg::encode(&img).unwrap()).unwrap();

    assert_eq!((decoded.width(), decoded.height()), (16, 16));
    for px in decoded.pixels() {
        // Lossy, but a flat block only wobbles by a few DC steps.
        assert!((i16::from(px.r) - 90).abs() <= 8, "r drifted: {}", px.r);
        assert!((i16::from(px.g) - 140).abs() <= 8, "g drifted: {}", px.g);
        assert!((i16::from(px.b) - 190).abs() <= 8, "b drifted: {}", px.b);
        assert_eq!(px.a, 255);
    }
}

#[test]
fn odd_dimensions_are_preserved() {
    // 13x7 does not align to the 8x8 MCU grid.
    let img = solid(13, 7, 30, 60, 90);
    let decoded = jpeg::decode(&jpeg::encode(&img).unwrap()).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (13, 7));
}

#[test]
fn grayscale_jpeg_replicates_into_rgb() {
    let gray = vec![128u8; 8 * 8];
    let mut data = Vec::new();
    image::codecs::jpeg::JpegEncoder::new(&mut data)
        .encode(&gray, 8, 8, image::ExtendedColorType::L8)
        .unwrap();

    let decoded = jpeg::decode(&data).unwrap();
    assert_eq!((decoded.width(), decoded.height()), (8, 8));
    for px in decoded.pixels() {
        assert_eq!(px.r, px.g);
        assert_eq!(px.g, px.b);
        assert_eq!(px.a, 255);
    }
}

#[test]
fn empty_image_cannot_be_encoded() {
    match jpeg::encode(&Image::empty()).unwrap_err() {
        ConvertError::EmptyImage => {}
        other => panic!("expected EmptyImage, got {other:?}"),
    }
}

#[test]
fn garbage_input_fails_to_decode() {
    assert!(matches!(
        jpeg::decode(b"definitely not a jpeg"),
        Err(ConvertError::Jpeg(_))
    ));
    assert!(jpeg::decode(&[]).is_err());
}

#[test]
fn limits_apply_before_pixels_are_read() {
    let data = jpeg::encode(&solid(32, 32, 1, 2, 3)).unwrap();
    let limits = Limits {
        max_pixels: Some(64),
        ..Limits::default()
    };
    assert!(matches!(
        jpeg::decode_with_limits(&data, &limits),
        Err(ConvertError::LimitExceeded(_))
    ));
}
