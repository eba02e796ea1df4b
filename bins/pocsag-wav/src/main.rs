use clap::Parser;

use std::fs::File;
use std::io::{BufWriter, Read, Write};

use pocsag_audio::{FskModulator, ModemConfig, write_wav};
use pocsag_core::debug;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Bitstream to FSK audio converter",
    long_about = "Reads a raw POCSAG bitstream and writes the 2-level FSK baseband \
as a 16-bit mono WAV file"
)]
struct Args {
    /// Input bitstream file, or - for stdin
    #[arg(short = 'i', long = "input", default_value = "-")]
    input: String,

    /// Output WAV file, or - for stdout
    #[arg(short = 'o', long = "output", default_value = "-")]
    output: String,

    /// Transmission rate in bits per second
    #[arg(short = 'b', long = "baud", default_value_t = 1200)]
    baud: u32,

    /// Output sample rate in Hz
    #[arg(short = 's', long = "sample-rate", default_value_t = 48000)]
    sample_rate: u32,
}

fn read_input(path: &str) -> std::io::Result<Vec<u8>> {
    let mut data = Vec::new();
    if path == "-" {
        std::io::stdin().read_to_end(&mut data)?;
    } else {
        File::open(path)?.read_to_end(&mut data)?;
    }
    Ok(data)
}

fn main() {
    let args = Args::parse();
    let _log_guard = debug::setup_logging_default(None);

    if args.baud == 0 || args.sample_rate == 0 {
        eprintln!("Baud and sample rate must be nonzero");
        std::process::exit(1);
    }

    let stream = match read_input(&args.input) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to read input {}: {}", args.input, e);
            std::process::exit(1);
        }
    };

    let modem = FskModulator::new(ModemConfig {
        baud: args.baud,
        sample_rate: args.sample_rate,
    });
    let samples = modem.modulate(&stream);

    let result = if args.output == "-" {
        let mut out = std::io::stdout();
        write_wav(&mut out, args.sample_rate, &samples).and_then(|_| out.flush())
    } else {
        match File::create(&args.output) {
            Ok(f) => {
                let mut out = BufWriter::new(f);
                write_wav(&mut out, args.sample_rate, &samples).and_then(|_| out.flush())
            }
            Err(e) => Err(e),
        }
    };

    if let Err(e) = result {
        eprintln!("Failed to write output {}: {}", args.output, e);
        std::process::exit(1);
    }

    tracing::info!(
        "converted {} input bytes to {} samples",
        stream.len(),
        samples.len()
    );
}
