use std::path::{Path, PathBuf};

/// Sample rate assumed for compressed containers and for WAV files whose
/// header cannot be read.
pub const FALLBACK_SAMPLE_RATE: u32 = 44_100;

/// Sample rate the provider expects for raw 16-bit PCM of unknown origin.
pub const CANONICAL_SAMPLE_RATE: u32 = 16_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerFormat {
    Mp3,
    Flac,
    Wav,
    Unknown,
}

impl ContainerFormat {
    pub fn from_path(path: &Path) -> Self {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase());

        match extension.as_deref() {
            Some("mp3") => Self::Mp3,
            Some("flac") => Self::Flac,
            Some("wav") => Self::Wav,
            _ => Self::Unknown,
        }
    }

    pub fn encoding(&self) -> AudioEncoding {
        match self {
            Self::Mp3 => AudioEncoding::Mp3,
            Self::Flac => AudioEncoding::Flac,
            Self::Wav | Self::Unknown => AudioEncoding::Linear16,
        }
    }

    /// Rate used when the container does not tell us the real one.
    pub fn default_sample_rate(&self) -> u32 {
        match self {
            Self::Mp3 | Self::Flac | Self::Wav => FALLBACK_SAMPLE_RATE,
            Self::Unknown => CANONICAL_SAMPLE_RATE,
        }
    }

    pub fn extension(&self) -> Option<&'static str> {
        match self {
            Self::Mp3 => Some("mp3"),
            Self::Flac => Some("flac"),
            Self::Wav => Some("wav"),
            Self::Unknown => None,
        }
    }
}

/// Wire encodings understood by the recognition provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioEncoding {
    Linear16,
    Flac,
    Mp3,
}

impl AudioEncoding {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linear16 => "LINEAR16",
            Self::Flac => "FLAC",
            Self::Mp3 => "MP3",
        }
    }
}

/// What we know about an uploaded file before choosing how to transcribe it.
#[derive(Debug, Clone, PartialEq)]
pub struct AudioProfile {
    pub path: PathBuf,
    pub container: ContainerFormat,
    pub sample_rate_hertz: u32,
    /// `None` means unknown, never "short".
    pub duration_secs: Option<f64>,
    pub size_bytes: u64,
}

impl AudioProfile {
    pub fn encoding(&self) -> AudioEncoding {
        self.container.encoding()
    }
}
