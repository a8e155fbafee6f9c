use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
    pub service: ServiceConfig,
    pub upstream: UpstreamConfig,
    pub client: ClientConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
    pub name: String,
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize)]
pub struct HttpConfig {
    pub bind: String,
    pub port: u16,
}

#[derive(Debug, Deserialize)]
pub struct UpstreamConfig {
    /// Transcription API base URL
    pub api_base: String,
    /// Model targeted by the generateContent call
    pub model: String,
}

#[derive(Debug, Deserialize)]
pub struct ClientConfig {
    /// Relay endpoint the credential-less dispatch path posts to
    pub relay_url: String,
    /// Caller-supplied credential for direct mode (usually unset)
    #[serde(default)]
    pub api_key: Option<String>,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Server-held upstream credential.
    ///
    /// Read from the environment only, so it never lands in a config file.
    /// A blank value counts as unset.
    pub fn upstream_api_key() -> Option<String> {
        std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
    }
}
