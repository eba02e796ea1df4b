use serde::Deserialize;

use pocsag_core::{DEFAULT_ADDRESS, MAX_MESSAGE_CHARS};

/// Output container for the encoded transmission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum OutputFormat {
    Bin,
    Wav,
}

/// Modem parameters, used when the output format carries audio samples.
#[derive(Debug, Clone, Copy)]
pub struct CfgModem {
    /// Transmission rate in bits per second
    pub baud: u32,
    /// Output sample rate in Hz
    pub sample_rate: u32,
}

impl Default for CfgModem {
    fn default() -> Self {
        Self {
            baud: default_baud(),
            sample_rate: default_sample_rate(),
        }
    }
}

#[inline]
fn default_baud() -> u32 {
    1200
}

#[inline]
fn default_sample_rate() -> u32 {
    48000
}

#[derive(Debug, Clone)]
pub struct CfgOutput {
    pub file: String,
    pub format: OutputFormat,
}

impl Default for CfgOutput {
    fn default() -> Self {
        Self {
            file: "pocsag.bin".to_string(),
            format: OutputFormat::Bin,
        }
    }
}

#[derive(Debug, Clone)]
pub struct TxConfig {
    /// Receiver address (21 bits used on the wire)
    pub address: u32,
    /// Message text, without the terminator
    pub message: String,
    pub debug_log: Option<String>,

    pub modem: CfgModem,
    pub output: CfgOutput,
}

impl TxConfig {
    pub fn new(address: u32, message: &str) -> Self {
        TxConfig {
            address,
            message: message.to_string(),
            debug_log: None,
            modem: CfgModem::default(),
            output: CfgOutput::default(),
        }
    }

    /// Validate that the transmission fields fit the wire format.
    pub fn validate(&self) -> Result<(), &str> {
        if self.message.len() > MAX_MESSAGE_CHARS {
            return Err("message too long: at most 39 characters fit one transmission");
        }
        if self.message.contains('\0') {
            return Err("message must not contain NUL");
        }
        if !self.message.is_ascii() {
            return Err("message must be 7-bit ASCII");
        }

        Ok(())
    }

    /// Remap placeholder values to their working defaults.
    ///
    /// Address 0 is not routable; 1234567 is the conventional default RIC.
    pub fn normalized(mut self) -> Self {
        if self.address == 0 {
            tracing::warn!("address 0 given, substituting default {}", DEFAULT_ADDRESS);
            self.address = DEFAULT_ADDRESS;
        }
        if self.modem.baud == 0 {
            tracing::warn!("baud 0 given, substituting default {}", default_baud());
            self.modem.baud = default_baud();
        }
        if self.modem.sample_rate == 0 {
            tracing::warn!(
                "sample rate 0 given, substituting default {}",
                default_sample_rate()
            );
            self.modem.sample_rate = default_sample_rate();
        }
        self
    }
}
