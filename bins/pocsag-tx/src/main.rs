use clap::Parser;

use std::fs::File;
use std::io::{BufWriter, Write};

use pocsag_audio::{FskModulator, ModemConfig, write_wav};
use pocsag_config::{OutputFormat, TxConfig, toml_config};
use pocsag_core::{DEFAULT_ADDRESS, debug, encode_transmission};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "POCSAG pager transmitter",
    long_about = "Encodes a text message as a POCSAG transmission and writes the \
bitstream (or its FSK baseband audio) to a file"
)]
struct Args {
    /// TOML config file; command-line flags override its values
    #[arg(short = 'c', long = "config")]
    config: Option<String>,

    /// Receiver address (RIC)
    #[arg(short = 'a', long = "address")]
    address: Option<u32>,

    /// Message text (at most 39 characters)
    #[arg(short = 'm', long = "message")]
    message: Option<String>,

    /// Output file, or - for stdout
    #[arg(short = 'f', long = "output")]
    output: Option<String>,

    /// Write FSK baseband audio (WAV) instead of the raw bitstream
    #[arg(long = "wav")]
    wav: bool,

    /// Transmission rate in bits per second
    #[arg(short = 'b', long = "baud")]
    baud: Option<u32>,

    /// Audio sample rate in Hz
    #[arg(short = 's', long = "sample-rate")]
    sample_rate: Option<u32>,

    /// Verbose log file
    #[arg(long = "log-file")]
    log_file: Option<String>,
}

/// Load configuration file
fn load_config_from_toml(cfg_path: &str) -> TxConfig {
    match toml_config::from_file(cfg_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration from {}: {}", cfg_path, e);
            std::process::exit(1);
        }
    }
}

/// Merge command-line flags over the config file values.
fn build_config(args: &Args) -> TxConfig {
    let mut cfg = match args.config {
        Some(ref path) => load_config_from_toml(path),
        None => TxConfig::new(DEFAULT_ADDRESS, ""),
    };

    if let Some(v) = args.address {
        cfg.address = v;
    }
    if let Some(ref v) = args.message {
        cfg.message = v.clone();
    }
    if let Some(ref v) = args.output {
        cfg.output.file = v.clone();
    }
    if args.wav {
        cfg.output.format = OutputFormat::Wav;
    }
    if let Some(v) = args.baud {
        cfg.modem.baud = v;
    }
    if let Some(v) = args.sample_rate {
        cfg.modem.sample_rate = v;
    }
    if let Some(ref v) = args.log_file {
        cfg.debug_log = Some(v.clone());
    }

    cfg
}

fn open_output(path: &str) -> Box<dyn Write> {
    if path == "-" {
        Box::new(std::io::stdout())
    } else {
        match File::create(path) {
            Ok(f) => Box::new(BufWriter::new(f)),
            Err(e) => {
                eprintln!("Failed to open output file {}: {}", path, e);
                std::process::exit(1);
            }
        }
    }
}

fn main() {
    let args = Args::parse();
    let cfg = build_config(&args);
    let _log_guard = debug::setup_logging_default(cfg.debug_log.clone());

    if let Err(e) = cfg.validate() {
        eprintln!("Invalid transmission: {}", e);
        std::process::exit(1);
    }
    let cfg = cfg.normalized();

    let mut out = open_output(&cfg.output.file);
    let result = match cfg.output.format {
        OutputFormat::Bin => encode_transmission(cfg.address, &cfg.message, &mut out),
        OutputFormat::Wav => {
            let mut stream = Vec::new();
            encode_transmission(cfg.address, &cfg.message, &mut stream)
                .expect("writing to Vec cannot fail");

            let modem = FskModulator::new(ModemConfig {
                baud: cfg.modem.baud,
                sample_rate: cfg.modem.sample_rate,
            });
            write_wav(&mut out, cfg.modem.sample_rate, &modem.modulate(&stream))
        }
    };

    if let Err(e) = result.and_then(|_| out.flush()) {
        eprintln!("Failed to write output: {}", e);
        std::process::exit(1);
    }

    tracing::info!(
        "transmission for address {} written to {}",
        cfg.address,
        cfg.output.file
    );
}
