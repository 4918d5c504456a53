//! WAV container for raw recorder output.

use crate::domain::{common::entities::app_errors::CoreError, llm::value_objects::InlineMedia};

pub const PCM_SAMPLE_RATE: u32 = 16_000;
pub const PCM_CHANNELS: u16 = 1;
pub const PCM_BITS_PER_SAMPLE: u16 = 16;

const RAW_PCM_MIME_TYPES: [&str; 4] = [
    "audio/pcm",
    "audio/l16",
    "audio/x-raw",
    "application/octet-stream",
];

/// Wraps little-endian PCM samples in a 44-byte RIFF/WAVE header
pub fn pcm_to_wav(pcm: &[u8], sample_rate: u32, channels: u16, bits_per_sample: u16) -> Vec<u8> {
    let block_align = channels * bits_per_sample / 8;
    let byte_rate = sample_rate * u32::from(block_align);
    let data_len = pcm.len() as u32;

    let mut wav = Vec::with_capacity(44 + pcm.len());
    wav.extend_from_slice(b"RIFF");
    wav.extend_from_slice(&(36 + data_len).to_le_bytes());
    wav.extend_from_slice(b"WAVE");
    wav.extend_from_slice(b"fmt ");
    wav.extend_from_slice(&16u32.to_le_bytes());
    wav.extend_from_slice(&1u16.to_le_bytes());
    wav.extend_from_slice(&channels.to_le_bytes());
    wav.extend_from_slice(&sample_rate.to_le_bytes());
    wav.extend_from_slice(&byte_rate.to_le_bytes());
    wav.extend_from_slice(&block_align.to_le_bytes());
    wav.extend_from_slice(&bits_per_sample.to_le_bytes());
    wav.extend_from_slice(b"data");
    wav.extend_from_slice(&data_len.to_le_bytes());
    wav.extend_from_slice(pcm);
    wav
}

/// Makes an uploaded recording acceptable to the multimodal model.
///
/// Encoded audio passes through untouched; raw recorder output (16-bit mono
/// 16 kHz PCM) gets a WAV header.
pub fn prepare_audio(audio: InlineMedia) -> Result<InlineMedia, CoreError> {
    if audio.data.is_empty() {
        return Err(CoreError::Invalid("audio recording is empty".to_string()));
    }

    let mime = audio.mime_type.to_ascii_lowercase();
    let mime = mime.split(';').next().unwrap_or_default().trim();

    if RAW_PCM_MIME_TYPES.contains(&mime) {
        let wav = pcm_to_wav(
            &audio.data,
            PCM_SAMPLE_RATE,
            PCM_CHANNELS,
            PCM_BITS_PER_SAMPLE,
        );
        return Ok(InlineMedia::new("audio/wav", wav));
    }

    let encoded = InlineMedia::new(mime, audio.data);
    if encoded.is_audio() {
        return Ok(encoded);
    }

    Err(CoreError::Invalid(format!(
        "unsupported audio type: {}",
        encoded.mime_type
    )))
}
