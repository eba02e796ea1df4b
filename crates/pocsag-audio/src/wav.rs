//! Minimal 16-bit mono PCM WAV output.

use std::io::{self, Write};

const HEADER_LEN: u32 = 44;
const BITS_PER_SAMPLE: u16 = 16;

/// Write `samples` as a complete WAV file: 44-byte canonical header
/// followed by little-endian 16-bit mono PCM data. Both the RIFF and data
/// chunk sizes are computed from the actual sample count.
pub fn write_wav<W: Write>(out: &mut W, sample_rate: u32, samples: &[i16]) -> io::Result<()> {
    let data_len = (samples.len() * 2) as u32;
    let byte_rate = sample_rate * 2;
    let block_align = 2u16;

    out.write_all(b"RIFF")?;
    out.write_all(&(HEADER_LEN - 8 + data_len).to_le_bytes())?;
    out.write_all(b"WAVE")?;

    out.write_all(b"fmt ")?;
    out.write_all(&16u32.to_le_bytes())?; // fmt chunk length
    out.write_all(&1u16.to_le_bytes())?; // PCM
    out.write_all(&1u16.to_le_bytes())?; // mono
    out.write_all(&sample_rate.to_le_bytes())?;
    out.write_all(&byte_rate.to_le_bytes())?;
    out.write_all(&block_align.to_le_bytes())?;
    out.write_all(&BITS_PER_SAMPLE.to_le_bytes())?;

    out.write_all(b"data")?;
    out.write_all(&data_len.to_le_bytes())?;
    for s in samples {
        out.write_all(&s.to_le_bytes())?;
    }

    tracing::debug!(
        "wrote wav: {} samples at {} Hz ({} bytes)",
        samples.len(),
        sample_rate,
        HEADER_LEN + data_len
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wav_bytes(sample_rate: u32, samples: &[i16]) -> Vec<u8> {
        let mut out = Vec::new();
        write_wav(&mut out, sample_rate, samples).unwrap();
        out
    }

    fn field_u32(bytes: &[u8], offset: usize) -> u32 {
        u32::from_le_bytes(bytes[offset..offset + 4].try_into().unwrap())
    }

    fn field_u16(bytes: &[u8], offset: usize) -> u16 {
        u16::from_le_bytes(bytes[offset..offset + 2].try_into().unwrap())
    }

    #[test]
    fn test_header_layout() {
        let out = wav_bytes(48000, &[0i16; 100]);
        assert_eq!(out.len(), 44 + 200);

        assert_eq!(&out[0..4], b"RIFF");
        assert_eq!(field_u32(&out, 4), 36 + 200);
        assert_eq!(&out[8..12], b"WAVE");
        assert_eq!(&out[12..16], b"fmt ");
        assert_eq!(field_u32(&out, 16), 16);
        assert_eq!(field_u16(&out, 20), 1); // PCM
        assert_eq!(field_u16(&out, 22), 1); // channels
        assert_eq!(field_u32(&out, 24), 48000);
        assert_eq!(field_u32(&out, 28), 96000); // byte rate
        assert_eq!(field_u16(&out, 32), 2); // block align
        assert_eq!(field_u16(&out, 34), 16); // bits per sample
        assert_eq!(&out[36..40], b"data");
        assert_eq!(field_u32(&out, 40), 200);
    }

    #[test]
    fn test_samples_are_little_endian() {
        let out = wav_bytes(22050, &[0x1234, -1]);
        assert_eq!(&out[44..], &[0x34, 0x12, 0xFF, 0xFF]);
    }

    #[test]
    fn test_empty_sample_set() {
        let out = wav_bytes(48000, &[]);
        assert_eq!(out.len(), 44);
        assert_eq!(field_u32(&out, 4), 36);
        assert_eq!(field_u32(&out, 40), 0);
    }
}
