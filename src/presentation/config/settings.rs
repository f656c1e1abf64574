use std::time::Duration;

use config::{Config, ConfigError, Environment as EnvironmentSource, File};
use serde::Deserialize;

use crate::application::services::{DEFAULT_STAGING_BUCKET, TranscriptionOptions};
use crate::domain::StrategyPolicy;

use super::Environment;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub logging: LoggingSettings,
    pub speech: SpeechSettings,
    pub storage: StorageSettings,
    pub transcription: TranscriptionSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub max_upload_mb: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SpeechSettings {
    pub provider: SpeechProviderSetting,
    pub base_url: String,
    pub api_key: Option<String>,
    pub access_token: Option<String>,
    pub poll_interval_ms: u64,
    pub long_running_timeout_secs: u64,
    pub mock_response_delay_ms: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeechProviderSetting {
    Mock,
    Google,
}

impl SpeechProviderSetting {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mock => "mock",
            Self::Google => "google",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageSettings {
    pub provider: StorageProviderSetting,
    pub bucket: String,
    pub local_path: String,
    pub service_account_path: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProviderSetting {
    Local,
    Gcs,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TranscriptionSettings {
    pub default_language: String,
    pub sample_uri: String,
    pub max_sync_duration_secs: f64,
    pub max_unknown_duration_bytes: u64,
}

impl Settings {
    /// Defaults, then `appsettings.{env}.toml` if present, then `APP__*`
    /// environment variables (`APP__SPEECH__PROVIDER=google`).
    pub fn load(environment: Environment) -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(
                EnvironmentSource::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()
    }

    /// Built-in defaults only.
    pub fn defaults() -> Result<Self, ConfigError> {
        Self::builder()?.build()?.try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.max_upload_mb", 64)?
            .set_default("logging.level", "")?
            .set_default("logging.enable_json", false)?
            .set_default("speech.provider", "mock")?
            .set_default(
                "speech.base_url",
                crate::infrastructure::speech::DEFAULT_BASE_URL,
            )?
            .set_default("speech.poll_interval_ms", 2000)?
            .set_default("speech.long_running_timeout_secs", 600)?
            .set_default("speech.mock_response_delay_ms", 0)?
            .set_default("storage.provider", "local")?
            .set_default("storage.bucket", DEFAULT_STAGING_BUCKET)?
            .set_default("storage.local_path", "./staging")?
            .set_default("transcription.default_language", "en-US")?
            .set_default(
                "transcription.sample_uri",
                "gs://cloud-samples-data/speech/brooklyn_bridge.raw",
            )?
            .set_default("transcription.max_sync_duration_secs", 60.0)?
            .set_default("transcription.max_unknown_duration_bytes", 1024 * 1024)
    }

    pub fn transcription_options(&self) -> TranscriptionOptions {
        TranscriptionOptions {
            bucket: self.storage.bucket.clone(),
            policy: StrategyPolicy {
                max_sync_duration_secs: self.transcription.max_sync_duration_secs,
                max_unknown_duration_bytes: self.transcription.max_unknown_duration_bytes,
            },
            long_running_timeout: Duration::from_secs(self.speech.long_running_timeout_secs),
        }
    }
}
