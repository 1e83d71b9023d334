#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Whatever decodes must re-encode and decode back to the same pixels.
    if let Ok(img) = imgconv::bmp::decode(data) {
        let reencoded = imgconv::bmp::encode(&img).expect("decoded image re-encodes");
        let img2 = imgconv::bmp::decode(&reencoded).expect("re-encoded BMP decodes");
        assert_eq!(img, img2, "BMP roundtrip pixel mismatch");
    }

    if let Ok(img) = imgconv::ppm::decode(data) {
        let reencoded = imgconv::ppm::encode(&img).expect("decoded image re-encodes");
        let img2 = imgconv::ppm::decode(&reencoded).expect("re-encoded PPM decodes");
        assert_eq!(img, img2, "PPM roundtrip pixel mismatch");
    }
});
