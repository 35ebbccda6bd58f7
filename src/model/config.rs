use serde::Deserialize;
use std::fs;
use std::path::Path;

const ENV_CONFIG_PATH: &str = "AUTHORLENS_CONFIG_PATH";
const DEFAULT_CONFIG_PATH: &str = "authorlens.yaml";

/// Environment variable overriding the analysis model
const ENV_ANALYSIS_MODEL: &str = "ANALYSIS_MODEL";

/// Default Gemini model used for authorship analysis
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// YAML configuration file structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub model: Option<String>,
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Model identifier sent with every analysis request
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment and config file.
    ///
    /// Resolution order: `ANALYSIS_MODEL` env var, then the config file,
    /// then the built-in default. A missing or invalid file never fails
    /// startup.
    pub fn from_env() -> Self {
        let config_path =
            std::env::var(ENV_CONFIG_PATH).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());

        let file_model = Self::load_config_file(&config_path).and_then(|cf| cf.model);

        let model = std::env::var(ENV_ANALYSIS_MODEL)
            .ok()
            .or(file_model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Self { model }
    }

    /// Load configuration from YAML file
    fn load_config_file(path: &str) -> Option<ConfigFile> {
        let path = Path::new(path);

        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return None;
        }

        match fs::read_to_string(path) {
            Ok(contents) => {
                // Handle empty file
                let contents = contents.trim();
                if contents.is_empty() {
                    tracing::debug!(path = %path.display(), "Config file is empty, using defaults");
                    return Some(ConfigFile::default());
                }

                match serde_yaml::from_str(contents) {
                    Ok(config) => {
                        tracing::info!(path = %path.display(), "Loaded configuration from file");
                        Some(config)
                    }
                    Err(e) => {
                        tracing::warn!(path = %path.display(), error = %e, "Failed to parse config file, using defaults");
                        None
                    }
                }
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Failed to read config file, using defaults");
                None
            }
        }
    }
}
