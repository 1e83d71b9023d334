use std::env;
use std::process::ExitCode;

use imgconv::ImageFormat;

fn main() -> ExitCode {
    env_logger::init();

    let mut args = env::args_os();
    let argv0 = args
        .next()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_else(|| "imgconv".to_owned());
    let (Some(in_file), Some(out_file), None) = (args.next(), args.next(), args.next()) else {
        eprintln!("Usage: {argv0} <in_file> <out_file>");
        return ExitCode::from(1);
    };

    let Some(in_format) = ImageFormat::from_path(&in_file) else {
        eprintln!("Unknown format of the input file");
        return ExitCode::from(2);
    };
    let Some(out_format) = ImageFormat::from_path(&out_file) else {
        eprintln!("Unknown format of the output file");
        return ExitCode::from(3);
    };

    let image = match in_format.load(&in_file) {
        Ok(image) => image,
        Err(err) => {
            log::debug!("load error: {err}");
            eprintln!("Loading failed");
            return ExitCode::from(4);
        }
    };

    if let Err(err) = out_format.save(&out_file, &image) {
        log::debug!("save error: {err}");
        eprintln!("Saving failed");
        return ExitCode::from(5);
    }

    println!("Successfully converted");
    ExitCode::SUCCESS
}
