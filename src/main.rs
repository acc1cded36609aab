use std::io::Write;
use std::process::ExitCode;

use asciify::cli::{Args, USAGE};
use asciify::config::{Config, RenderOptions};
use asciify::renderer;
use asciify::source::FileSource;
use clap::Parser;

/// Exit status for a missing image path.
const EXIT_USAGE: u8 = 1;
/// Exit status for any failure once rendering has started.
const EXIT_FAILURE: u8 = 2;

fn main() -> ExitCode {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .init();

    let Some(path) = args.path.as_deref() else {
        let program = std::env::args().next().unwrap_or_else(|| "asciify".to_string());
        println!("Usage: {} {}", program, USAGE);
        return ExitCode::from(EXIT_USAGE);
    };

    let result = Config::load(args.config.as_deref())
        .map_err(asciify::AsciifyError::from)
        .and_then(|config| {
            RenderOptions::resolve(
                &config,
                args.output_width(),
                args.output_height(),
                args.ascii_gradient.as_deref(),
            )
        })
        .and_then(|options| renderer::render(&FileSource::new(path), &options));

    match result {
        Ok(text) => {
            let mut stdout = std::io::stdout().lock();
            if let Err(e) = stdout.write_all(text.as_bytes()).and_then(|_| stdout.flush()) {
                eprintln!("Error: failed to write output: {}", e);
                return ExitCode::from(EXIT_FAILURE);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
