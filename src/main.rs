use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, warn};

use voice_relay::{
    create_router, AppState, Config, ConsoleSink, Dispatcher, GeminiClient, HttpTransport,
    Recorder, TranscriptSink, TranscriptionBackend, WavFileBackend,
};

#[derive(Parser)]
#[command(name = "voice-relay", about = "Voice transcription relay")]
struct Cli {
    /// Config file (without extension), as read by the config crate
    #[arg(long, default_value = "config/voice-relay")]
    config: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the relay endpoint
    Serve,
    /// Capture from a WAV file and print the transcription
    Transcribe {
        /// WAV file standing in for the microphone
        file: PathBuf,

        /// Send directly to the transcription API with this key
        #[arg(long)]
        api_key: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = Config::load(&cli.config)?;

    match cli.command {
        Command::Serve => serve(cfg).await,
        Command::Transcribe { file, api_key } => transcribe(cfg, file, api_key).await,
    }
}

async fn serve(cfg: Config) -> Result<()> {
    let upstream = match Config::upstream_api_key() {
        Some(key) => Some(Arc::new(GeminiClient::new(
            &cfg.upstream.api_base,
            &cfg.upstream.model,
            &key,
        )) as Arc<dyn TranscriptionBackend>),
        None => {
            warn!("GEMINI_API_KEY is not set; relay requests will get a configuration error");
            None
        }
    };

    let router = create_router(AppState::new(upstream));

    let addr = format!("{}:{}", cfg.service.http.bind, cfg.service.http.port);
    info!("{} listening on {}", cfg.service.name, addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, router)
        .await
        .context("HTTP server failed")?;

    Ok(())
}

async fn transcribe(cfg: Config, file: PathBuf, api_key: Option<String>) -> Result<()> {
    let mut recorder = Recorder::new(Box::new(WavFileBackend::new(file)));
    let mut sink = ConsoleSink::default();

    // Permission and device failures are alert-class errors.
    if let Err(e) = recorder.start().await {
        sink.alert(&e.to_string());
        return Err(e.into());
    }
    let Some((id, blob)) = recorder.stop().await? else {
        anyhow::bail!("no capture session was active");
    };

    let dispatcher = Dispatcher::new(
        HttpTransport::new(),
        cfg.client.relay_url,
        cfg.upstream.api_base,
        cfg.upstream.model,
        api_key.or(cfg.client.api_key),
    );

    dispatcher.dispatch(id, &blob, &mut sink).await;

    Ok(())
}
