use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_server")]
    pub server: String,
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,
    #[serde(default)]
    pub show_weekday: bool,

    /// Runtime override for the config/session directory (never persisted).
    #[serde(skip)]
    pub data_dir: Option<PathBuf>,
}

fn default_server() -> String {
    "http://localhost:5000".to_string()
}

fn default_chart_width() -> usize {
    40
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: default_server(),
            chart_width: default_chart_width(),
            show_weekday: false,
            data_dir: None,
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn default_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("punchcard")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".punchcard")
        }
    }

    /// The active configuration directory (override or platform default)
    pub fn dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(Self::default_dir)
    }

    /// Return the full path of the config file
    pub fn config_file(&self) -> PathBuf {
        self.dir().join("punchcard.conf")
    }

    /// Return the full path of the stored session
    pub fn session_file(&self) -> PathBuf {
        self.dir().join("session.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load(dir_override: Option<&str>) -> AppResult<Self> {
        let data_dir = dir_override.map(PathBuf::from);

        let mut cfg = Config {
            data_dir: data_dir.clone(),
            ..Config::default()
        };

        let path = cfg.config_file();
        if path.exists() {
            let content = fs::read_to_string(&path)?;
            cfg = serde_yaml::from_str(&content).map_err(|_| AppError::ConfigLoad)?;
            cfg.data_dir = data_dir;
        }

        Ok(cfg)
    }

    /// Initialize the configuration directory and file
    pub fn init_all(dir_override: Option<&str>, server: Option<String>) -> AppResult<Self> {
        let mut cfg = Config {
            data_dir: dir_override.map(PathBuf::from),
            ..Config::default()
        };

        if let Some(url) = server {
            cfg.server = url;
        }

        fs::create_dir_all(cfg.dir())?;
        cfg.save()?;

        Ok(cfg)
    }

    /// Write the configuration file in YAML form
    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(self.config_file())?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }
}
