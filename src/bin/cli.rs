//! This is the command line tool that loads input files (or the standard
//! input) and either compresses or decompresses each one of them.

extern crate clap;
extern crate env_logger;
extern crate log;

use clap::{Arg, ArgAction, Command};
use lzw::decoder::{decode_stream, LzwDecoder};
use lzw::encoder::encode_stream;
use lzw::utils::naming::{
    file_stem, output_name, ENCODED_EXTENSION, STDIN_STEM,
};
use lzw::{Decoder, Error};

use std::io::{self, Read, Write};
use std::{fs::File, thread, time::Instant};

/// The number of files that a single invocation may process.
const MAX_INPUTS: usize = 8;

fn save_file(data: &[u8], path: &str) -> Result<(), Error> {
    let mut f = File::create(path)?;
    f.write_all(data)?;
    log::info!("Wrote {}.", &path);
    Ok(())
}

fn write_stdout(data: &[u8]) -> Result<(), Error> {
    let mut out = io::stdout().lock();
    out.write_all(data)?;
    out.flush()?;
    Ok(())
}

/// A scoped utility struct for measuring and reporting time.
struct Timer {
    start: std::time::Instant,
}

impl Timer {
    fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        let now = Instant::now();
        if let Some(duration) = now.checked_duration_since(self.start) {
            log::info!(
                "Operation completed in {:03} seconds",
                duration.as_secs_f32()
            );
        }
    }
}

/// The options that apply to every input of one invocation.
#[derive(Copy, Clone)]
struct Options {
    is_compress: bool,
    checked: bool,
    to_stdout: bool,
}

/// Encode or decode a single input and write the artifact. Nothing is written
/// if the pass fails.
fn handle_input<R: Read>(
    mut input: R,
    stem: &str,
    opts: Options,
) -> Result<(), Error> {
    let dest = if opts.is_compress && opts.checked {
        let mut data = Vec::new();
        input.read_to_end(&mut data).map_err(Error::Encoding)?;
        let encoded = encode_stream(&data[..])?;
        check_round_trip(stem, &data, &encoded);
        encoded
    } else if opts.is_compress {
        encode_stream(input)?
    } else {
        decode_stream(input)?
    };

    if opts.to_stdout {
        return write_stdout(&dest);
    }
    save_file(&dest, &output_name(stem, opts.is_compress))
}

/// Decode 'encoded' again and report if it matches 'input'.
fn check_round_trip(stem: &str, input: &[u8], encoded: &[u8]) {
    log::info!(
        "{}: compressed from {} to {} bytes.",
        stem,
        input.len(),
        encoded.len()
    );
    let mut decoded = Vec::new();
    match LzwDecoder::new(encoded, &mut decoded).decode() {
        Ok((from, to)) => {
            log::info!("{}: decompressed from {} to {} bytes.", stem, from, to);
            if input == decoded {
                log::info!("{}: correct!", stem);
            } else {
                log::error!("{}: incorrect!", stem);
            }
        }
        Err(err) => log::error!("{}: could not decompress: {}", stem, err),
    }
}

/// Guess the direction from the name the tool was invoked with, so that
/// links named 'encode' and 'decode' behave as such.
fn mode_from_program_name(argv0: &str) -> Option<bool> {
    match file_stem(argv0) {
        "encode" => Some(true),
        "decode" => Some(false),
        _ => None,
    }
}

fn main() {
    let matches = Command::new("CLI")
        .version("1.x")
        .arg(
            Arg::new("checked")
                .long("check")
                .help("Decode the compressed output again to verify it")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("decompress")
                .short('d')
                .long("decompress")
                .help("Decompress the inputs")
                .action(ArgAction::SetTrue)
                .conflicts_with("compress"),
        )
        .arg(
            Arg::new("compress")
                .short('c')
                .long("compress")
                .help("Compress the inputs")
                .conflicts_with("decompress")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Write the results to the standard output")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("INPUT")
                .help("The input files. Reads the standard input if empty")
                .num_args(0..)
                .index(1),
        )
        .get_matches();

    env_logger::builder().format_timestamp(None).init();

    let inputs: Vec<String> = matches
        .get_many::<String>("INPUT")
        .map(|vals| vals.cloned().collect())
        .unwrap_or_default();

    if inputs.len() > MAX_INPUTS {
        log::error!("Too many filenames provided, maximum is {}", MAX_INPUTS);
        std::process::exit(1);
    }

    let argv0 = std::env::args().next().unwrap_or_default();
    let is_compress = if matches.get_flag("compress") {
        true
    } else if matches.get_flag("decompress") {
        false
    } else if let Some(mode) = mode_from_program_name(&argv0) {
        mode
    } else {
        // Try to figure out the direction using the extension.
        inputs.is_empty()
            || inputs.iter().any(|path| !path.ends_with(ENCODED_EXTENSION))
    };

    let opts = Options {
        is_compress,
        checked: matches.get_flag("checked"),
        to_stdout: matches.get_flag("stdout"),
    };
    let verb = if is_compress { "Encoding" } else { "Decoding" };
    let x = Timer::new();

    if inputs.is_empty() {
        log::info!("{} the standard input (Ctrl+D to finish)", verb);
        let res = handle_input(io::stdin().lock(), STDIN_STEM, opts);
        drop(x);
        if let Err(err) = res {
            log::error!("{} {} failed: {}", verb, STDIN_STEM, err);
            std::process::exit(1);
        }
        return;
    }

    // Each input gets its own worker and its own codec state.
    let failures = thread::scope(|s| {
        let workers: Vec<_> = inputs
            .iter()
            .map(|path| {
                s.spawn(move || {
                    let stem = file_stem(path);
                    let res = File::open(path)
                        .map_err(Error::Io)
                        .and_then(|file| handle_input(file, stem, opts));
                    if let Err(err) = &res {
                        log::error!("{} {} failed: {}", verb, path, err);
                    }
                    res.is_ok()
                })
            })
            .collect();

        workers
            .into_iter()
            .map(|w| w.join())
            .filter(|res| !matches!(res, Ok(true)))
            .count()
    });

    drop(x);
    if failures > 0 {
        std::process::exit(1);
    }
}
