use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;
use toml::Value;

use super::tx_config::{CfgModem, CfgOutput, OutputFormat, TxConfig};

/// Build `TxConfig` from a TOML configuration file
pub fn from_toml_str(toml_str: &str) -> Result<TxConfig, Box<dyn std::error::Error>> {
    let root: TomlConfigRoot = toml::from_str(toml_str)?;

    // Various sanity checks
    let expected_config_version = "0.1";
    if !root.config_version.eq(expected_config_version) {
        return Err(format!(
            "Unrecognized config_version: {}, expect {}",
            root.config_version, expected_config_version
        )
        .into());
    }
    if !root.extra.is_empty() {
        return Err(format!("Unrecognized top-level fields: {:?}", sorted_keys(&root.extra)).into());
    }
    if let Some(ref modem) = root.modem {
        if !modem.extra.is_empty() {
            return Err(format!("Unrecognized fields in modem: {:?}", sorted_keys(&modem.extra)).into());
        }
    }
    if let Some(ref output) = root.output {
        if !output.extra.is_empty() {
            return Err(format!("Unrecognized fields in output: {:?}", sorted_keys(&output.extra)).into());
        }
    }

    // Build config from required and optional values
    let mut cfg = TxConfig {
        address: root.address,
        message: root.message,
        debug_log: root.debug_log,
        modem: CfgModem::default(),
        output: CfgOutput::default(),
    };

    if let Some(modem) = root.modem {
        apply_modem_patch(&mut cfg.modem, modem);
    }
    if let Some(output) = root.output {
        apply_output_patch(&mut cfg.output, output);
    }

    Ok(cfg)
}

/// Build `TxConfig` from any reader.
pub fn from_reader<R: Read>(reader: R) -> Result<TxConfig, Box<dyn std::error::Error>> {
    let mut contents = String::new();
    let mut reader = BufReader::new(reader);
    reader.read_to_string(&mut contents)?;
    from_toml_str(&contents)
}

/// Build `TxConfig` from a file path.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<TxConfig, Box<dyn std::error::Error>> {
    let f = File::open(path)?;
    let r = BufReader::new(f);
    let cfg = from_reader(r)?;
    Ok(cfg)
}

fn apply_modem_patch(dst: &mut CfgModem, src: ModemDto) {
    if let Some(v) = src.baud {
        dst.baud = v;
    }
    if let Some(v) = src.sample_rate {
        dst.sample_rate = v;
    }
}

fn apply_output_patch(dst: &mut CfgOutput, src: OutputDto) {
    if let Some(v) = src.file {
        dst.file = v;
    }
    if let Some(v) = src.format {
        dst.format = v;
    }
}

fn sorted_keys(map: &HashMap<String, Value>) -> Vec<&str> {
    let mut v: Vec<&str> = map.keys().map(|s| s.as_str()).collect();
    v.sort_unstable();
    v
}

/// ----------------------- DTOs for input shape -----------------------

#[derive(Deserialize)]
struct TomlConfigRoot {
    config_version: String,
    address: u32,
    message: String,
    debug_log: Option<String>,

    #[serde(default)]
    modem: Option<ModemDto>,

    #[serde(default)]
    output: Option<OutputDto>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct ModemDto {
    pub baud: Option<u32>,
    pub sample_rate: Option<u32>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}

#[derive(Deserialize)]
struct OutputDto {
    pub file: Option<String>,
    pub format: Option<OutputFormat>,

    #[serde(flatten)]
    extra: HashMap<String, Value>,
}
