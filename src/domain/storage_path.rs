use std::fmt;

use uuid::Uuid;

const STAGED_AUDIO_PREFIX: &str = "audio";

/// Object key inside a staging bucket.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePath(String);

impl StoragePath {
    /// Generates a collision-free key for a staged audio file, keeping the
    /// original base filename as a suffix.
    pub fn staged_audio(filename: &str) -> Self {
        Self(format!(
            "{}/{}_{}",
            STAGED_AUDIO_PREFIX,
            Uuid::new_v4(),
            filename
        ))
    }

    pub fn from_raw(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
