use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{anyhow, Context};
use cnft_tree_params::Network;
use config::{Config, Environment, File};
use serde::Deserialize;
use solana_sdk::signature::{read_keypair_file, Keypair};

const CONFIG_FILE_NAME: &str = "cnft-tree.toml";
const ENV_PREFIX: &str = "CNFT";

/// Defaults read from `cnft-tree.toml` and `CNFT_*` environment variables.
/// Command line arguments take precedence.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub rpc_url: Option<String>,
    pub network: Option<Network>,
    pub payer: Option<PathBuf>,
    /// Directory for rolling log files, no file logging when unset.
    pub log_dir: Option<String>,
}

fn locate_config_file() -> String {
    let config_path = env::current_exe()
        .ok()
        .and_then(|exe_path| exe_path.parent().map(|dir| dir.join(CONFIG_FILE_NAME)));
    match config_path {
        Some(config_path) if config_path.exists() => config_path.to_string_lossy().to_string(),
        _ => CONFIG_FILE_NAME.to_string(),
    }
}

pub fn load_settings() -> anyhow::Result<Settings> {
    let _ = dotenvy::dotenv();
    load_settings_from(&locate_config_file())
}

pub fn load_settings_from(config_path: &str) -> anyhow::Result<Settings> {
    let settings = Config::builder()
        .add_source(File::with_name(config_path).required(false))
        .add_source(Environment::with_prefix(ENV_PREFIX))
        .build()
        .with_context(|| format!("failed to load settings from {}", config_path))?;
    settings
        .try_deserialize()
        .context("invalid settings")
}

impl Settings {
    /// An explicit URL wins, then the default endpoint of the chosen network.
    pub fn resolve_rpc_url(&self, rpc_url: Option<&str>, network: Option<Network>) -> String {
        if let Some(rpc_url) = rpc_url.or(self.rpc_url.as_deref()) {
            return rpc_url.to_string();
        }
        network
            .or(self.network)
            .unwrap_or_default()
            .default_endpoint()
            .to_string()
    }

    pub fn resolve_payer_path(&self, payer: Option<PathBuf>) -> anyhow::Result<PathBuf> {
        if let Some(payer) = payer.or_else(|| self.payer.clone()) {
            return Ok(payer);
        }
        let home_dir = dirs::home_dir().ok_or_else(|| anyhow!("could not find home directory"))?;
        Ok(home_dir.join(".config/solana/id.json"))
    }
}

pub fn read_payer(path: &Path) -> anyhow::Result<Keypair> {
    read_keypair_file(path).map_err(|e| anyhow!("failed to read payer keypair {:?}: {}", path, e))
}
