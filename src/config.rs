use anyhow::{Context, Result, bail};
use clap::Parser;
use std::env;

/// Centralized application configuration.
/// Combines environment variables and CLI arguments.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub bucket: String,
}

/// Command-line + environment configuration.
#[derive(Parser, Debug)]
#[command(author, version, about = "Document QA backend API")]
pub struct Args {
    /// Host to bind to (overrides RAG_BACKEND_HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to bind to (overrides RAG_BACKEND_PORT)
    #[arg(long)]
    pub port: Option<u16>,

    /// Object-store bucket for document content (overrides RAG_BACKEND_BUCKET)
    #[arg(long)]
    pub bucket: Option<String>,
}

impl AppConfig {
    /// Parse environment variables + CLI args into AppConfig.
    pub fn from_env_and_args() -> Result<Self> {
        let args = Args::parse();

        // --- Environment fallback ---
        let env_host = env::var("RAG_BACKEND_HOST").unwrap_or_else(|_| "0.0.0.0".into());
        let env_port = match env::var("RAG_BACKEND_PORT") {
            Ok(value) => value
                .parse::<u16>()
                .with_context(|| format!("parsing RAG_BACKEND_PORT value `{}`", value))?,
            Err(env::VarError::NotPresent) => 3000,
            Err(err) => return Err(err).context("reading RAG_BACKEND_PORT"),
        };
        let env_bucket = env::var("RAG_BACKEND_BUCKET").ok();

        // --- Merge ---
        let Some(bucket) = args.bucket.or(env_bucket) else {
            bail!("no bucket configured; set RAG_BACKEND_BUCKET or pass --bucket");
        };

        Ok(Self {
            host: args.host.unwrap_or(env_host),
            port: args.port.unwrap_or(env_port),
            bucket,
        })
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
