//! End-to-end runs of the imgconv binary.

use std::ffi::OsStr;
use std::process::{Command, Output};

fn run<I, S>(args: I) -> Output
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    Command::new(env!("CARGO_BIN_EXE_imgconv"))
        .args(args)
        .env_remove("RUST_LOG") // keep stderr down to the fixed messages
        .output()
        .expect("failed to spawn imgconv")
}

fn stderr_line(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).trim_end().to_string()
}

/// A 2x2 PPM: red, green / blue, white.
fn sample_ppm() -> Vec<u8> {
    let mut data = b"P6\n2 2\n255\n".to_vec();
    data.extend_from_slice(&[
        255, 0, 0, 0, 255, 0, //
        0, 0, 255, 255, 255, 255,
    ]);
    data
}

#[test]
fn wrong_argument_count_prints_usage() {
    let out = run::<_, &str>([]);
    assert_eq!(out.status.code(), Some(1));
    let line = stderr_line(&out);
    assert!(line.starts_with("Usage: "), "got: {line}");
    assert!(line.ends_with(" <in_file> <out_file>"), "got: {line}");

    let out = run(["a.ppm", "b.bmp", "c.jpg"]);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn unknown_input_format_is_code_2() {
    // Format checks run before any file I/O, so the paths need not exist.
    let out = run(["input.txt", "output.bmp"]);
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(stderr_line(&out), "Unknown format of the input file");
}

#[test]
fn unknown_output_format_is_code_3() {
    let out = run(["input.bmp", "output.txt"]);
    assert_eq!(out.status.code(), Some(3));
    assert_eq!(stderr_line(&out), "Unknown format of the output file");
}

#[test]
fn missing_input_file_is_code_4() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("absent.ppm");
    let output = dir.path().join("out.bmp");
    let out = run([&input, &output]);
    assert_eq!(out.status.code(), Some(4));
    assert_eq!(stderr_line(&out), "Loading failed");
}

#[test]
fn corrupt_input_file_is_code_4() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("junk.bmp");
    std::fs::write(&input, b"BM but nothing else").unwrap();
    let out = run([input.as_path(), dir.path().join("out.ppm").as_path()]);
    assert_eq!(out.status.code(), Some(4));
    assert_eq!(stderr_line(&out), "Loading failed");
}

#[test]
fn unwritable_output_is_code_5() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ppm");
    std::fs::write(&input, sample_ppm()).unwrap();

    // Parent directory does not exist.
    let output = dir.path().join("no_such_dir").join("out.bmp");
    let out = run([&input, &output]);
    assert_eq!(out.status.code(), Some(5));
    assert_eq!(stderr_line(&out), "Saving failed");
}

#[test]
fn successful_conversion_is_code_0() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.ppm");
    let output = dir.path().join("out.bmp");
    std::fs::write(&input, sample_ppm()).unwrap();

    let out = run([&input, &output]);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", stderr_line(&out));
    assert_eq!(out.stdout, b"Successfully converted\n");
    assert!(out.stderr.is_empty());

    // The converted file decodes back to the same four pixels.
    let img = imgconv::load(&output).unwrap();
    assert_eq!((img.width(), img.height()), (2, 2));
    let top = img.row(0);
    assert_eq!((top[0].r, top[0].g, top[0].b), (255, 0, 0));
    assert_eq!((top[1].r, top[1].g, top[1].b), (0, 255, 0));
}
