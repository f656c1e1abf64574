use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use speech_relay::application::services::TranscriptionService;
use speech_relay::infrastructure::audio::SymphoniaAudioCodec;
use speech_relay::infrastructure::observability::{TracingConfig, init_tracing};
use speech_relay::infrastructure::speech::SpeechRecognizerFactory;
use speech_relay::infrastructure::storage::StagingStoreFactory;
use speech_relay::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = match std::env::var("APP_ENVIRONMENT") {
        Ok(name) => name.parse::<Environment>()?,
        Err(_) => Environment::default(),
    };

    let settings = Settings::load(environment).context("Failed to load configuration")?;

    init_tracing(
        TracingConfig::new(
            environment.as_str(),
            settings.logging.enable_json,
            &settings.logging.level,
        ),
        settings.server.port,
    );

    // A provider that fails to initialise leaves the service up; requests
    // needing it report "not initialized".
    let recognizer = match SpeechRecognizerFactory::create(&settings.speech) {
        Ok(recognizer) => {
            tracing::info!(
                provider = settings.speech.provider.as_str(),
                "Speech client initialized"
            );
            Some(recognizer)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize speech client");
            None
        }
    };

    let staging_store = match StagingStoreFactory::create(&settings.storage) {
        Ok(store) => {
            tracing::info!(
                scheme = store.scheme(),
                bucket = %settings.storage.bucket,
                "Storage client initialized"
            );
            Some(store)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to initialize storage client");
            None
        }
    };

    let transcription_service = Arc::new(TranscriptionService::new(
        recognizer,
        staging_store,
        Arc::new(SymphoniaAudioCodec),
        settings.transcription_options(),
    ));

    let router = create_router(AppState::new(transcription_service, &settings));

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("Invalid server address")?;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
