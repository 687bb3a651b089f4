//! Global flags and the per-invocation client context

use anyhow::Context;
use clap::Args;
use client::ApiClient;
use credential::{CredentialStore, FileCredentialStore, MemoryCredentialStore};
use shared::ClientConfig;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, warn};

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// API base URL (overrides config file and ARMOR_API_URL)
    #[arg(long, global = true)]
    pub url: Option<String>,

    /// Path to a JSON config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Everything a command needs to talk to the server
#[derive(Debug, Clone)]
pub struct AppContext {
    pub client: ApiClient,
    pub json: bool,
}

impl AppContext {
    pub fn from_args(args: &GlobalArgs) -> anyhow::Result<Self> {
        let config = resolve_config(args)?;
        let store = session_store(&config);
        let client = ApiClient::new(&config, store)?;
        debug!(base_url = client.base_url(), "client ready");

        Ok(Self {
            client,
            json: args.json,
        })
    }
}

/// Defaults, then config file, then environment, then flags
pub fn resolve_config(args: &GlobalArgs) -> anyhow::Result<ClientConfig> {
    let config = match &args.config {
        Some(path) => ClientConfig::from_file(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => ClientConfig::default(),
    };

    let mut config = config.with_env()?;
    if let Some(url) = &args.url {
        config = config.with_base_url(url.clone());
    }
    config.validate()?;

    Ok(config)
}

fn session_store(config: &ClientConfig) -> Arc<dyn CredentialStore> {
    match config.session_dir.clone().or_else(FileCredentialStore::default_dir) {
        Some(dir) => Arc::new(FileCredentialStore::new(dir)),
        None => {
            warn!("no cache directory available, login will only last for this process");
            Arc::new(MemoryCredentialStore::new())
        }
    }
}
