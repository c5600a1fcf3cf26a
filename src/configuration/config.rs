#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

use std::path;

use anyhow::Result;
use dashmap::DashMap;
use once_cell::sync::Lazy;
use strum::EnumIter;
use strum::IntoEnumIterator;
use tokio::fs;

static CONFIG: Lazy<DashMap<String, String>> = Lazy::new(DashMap::new);

#[derive(Clone, Copy, Eq, PartialEq, EnumIter, strum::Display)]
#[strum(serialize_all = "kebab-case")]
pub enum ConfigKey {
    ApiUrl,
    ConfigFile,
    RequestTimeout,
    TokenFile,
}

pub struct Config {}

impl Config {
    pub fn get(key: ConfigKey) -> String {
        if let Some(val) = CONFIG.get(&key.to_string()) {
            return val.to_string();
        }

        return "".to_string();
    }

    pub fn set(key: ConfigKey, value: &str) {
        CONFIG.insert(key.to_string(), value.to_string());
    }

    pub fn default(key: ConfigKey) -> String {
        let cache_dir = dirs::cache_dir().unwrap().join("caseboard");

        let res = match key {
            ConfigKey::ApiUrl => "http://localhost:7777".to_string(),
            ConfigKey::ConfigFile => cache_dir.join("config.toml").to_string_lossy().to_string(),
            ConfigKey::RequestTimeout => "1000".to_string(),
            ConfigKey::TokenFile => cache_dir.join("session.json").to_string_lossy().to_string(),
        };

        return res;
    }

    /// Primes every key with its default, then overrides from the TOML
    /// config file when one exists.
    pub async fn load(config_file: Option<String>) -> Result<()> {
        for key in ConfigKey::iter() {
            Config::set(key, &Config::default(key));
        }

        let config_file =
            config_file.unwrap_or_else(|| return Config::get(ConfigKey::ConfigFile));
        let config_path = path::PathBuf::from(config_file);
        if !config_path.exists() {
            return Ok(());
        }

        let toml_str = fs::read_to_string(config_path).await?;
        let doc = toml_str.parse::<toml_edit::Document>()?;

        for key in ConfigKey::iter() {
            if let Some(val) = doc.get(&key.to_string()) {
                if let Some(str_val) = val.as_str() {
                    Config::set(key, str_val);
                }
            }
        }

        return Ok(());
    }
}
