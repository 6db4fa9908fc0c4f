use crate::errors::{ChatError, ChatResult};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::RwLock,
};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub base_url: String,
    pub poll_interval_secs: u64,
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub top_p: f32,
    pub repeat_penalty: f32,
    pub log_to_file: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            poll_interval_secs: 5,
            max_tokens: 1024,
            temperature: 0.7,
            top_k: 40,
            top_p: 0.9,
            repeat_penalty: 1.1,
            log_to_file: true,
        }
    }
}

static CONFIG: Lazy<RwLock<Config>> = Lazy::new(|| RwLock::new(Config::default()));

pub fn initialize_config() -> ChatResult<()> {
    let config_path = get_config_path()?;
    let config = load_or_create_config(&config_path)?;
    *CONFIG.write().unwrap() = config;
    Ok(())
}

fn load_or_create_config(config_path: &Path) -> ChatResult<Config> {
    if config_path.exists() {
        let config_str = fs::read_to_string(config_path)
            .map_err(|e| ChatError::config_error(format!("Failed to read config file: {}", e)))?;

        let config: Config = serde_json::from_str(&config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to parse config: {}", e)))?;

        validate_config(&config)?;
        Ok(config)
    } else {
        let mut config = Config::default();

        // Env var wins over the stock default on first run
        if let Ok(url) = env::var("PARLEY_BASE_URL") {
            config.base_url = url;
        }

        fs::create_dir_all(config_path.parent().unwrap()).map_err(|e| {
            ChatError::config_error(format!("Failed to create config directory: {}", e))
        })?;

        let config_str = serde_json::to_string_pretty(&config)
            .map_err(|e| ChatError::config_error(format!("Failed to serialize config: {}", e)))?;

        fs::write(config_path, config_str)
            .map_err(|e| ChatError::config_error(format!("Failed to write config file: {}", e)))?;

        Ok(config)
    }
}

fn get_config_path() -> ChatResult<PathBuf> {
    let home_dir = dirs::home_dir()
        .ok_or_else(|| ChatError::config_error("Could not determine home directory"))?;

    Ok(home_dir.join(".config").join("parley").join("config.json"))
}

fn validate_config(config: &Config) -> ChatResult<()> {
    if config.base_url.is_empty() {
        return Err(ChatError::config_error("base_url is required"));
    }

    if config.poll_interval_secs == 0 {
        return Err(ChatError::config_error(
            "poll_interval_secs must be greater than 0",
        ));
    }

    if config.max_tokens == 0 {
        return Err(ChatError::config_error("max_tokens must be greater than 0"));
    }

    if config.temperature < 0.0 || config.temperature > 2.0 {
        return Err(ChatError::config_error(
            "temperature must be between 0.0 and 2.0",
        ));
    }

    if config.top_p <= 0.0 || config.top_p > 1.0 {
        return Err(ChatError::config_error("top_p must be in (0.0, 1.0]"));
    }

    if config.repeat_penalty <= 0.0 {
        return Err(ChatError::config_error(
            "repeat_penalty must be greater than 0",
        ));
    }

    Ok(())
}

pub fn get_config() -> Config {
    CONFIG.read().unwrap().clone()
}
