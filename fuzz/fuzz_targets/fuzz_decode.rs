#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Hostile headers must come back as errors, never as panics or
    // unbounded allocations.
    let _ = imgconv::bmp::decode(data);
    let _ = imgconv::ppm::decode(data);
});
