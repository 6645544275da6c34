use crate::locpkt_common_rs::packet::core::{LocPacketError, LocResult};
use crate::locpkt_common_rs::utils::log_config::LogLevel;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// 表示形式の上限桁数
pub const MAX_PRECISION: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Invalid output format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}
impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// デコード結果と一緒に生パケットを表示する
    pub show_raw: bool,
    /// 緯度経度の小数点以下桁数
    pub precision: usize,
}
impl Default for OutputConfig {
    fn default() -> Self {
        Self { format: OutputFormat::Text, show_raw: false, precision: 6 }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LocPacketConfig {
    pub logging: LogConfig,
    pub output: OutputConfig,
}

impl LocPacketConfig {
    pub fn log_level(&self) -> LogLevel {
        LogLevel::from_str(&self.logging.level).unwrap_or(LogLevel::Info)
    }
}

pub struct ConfigLoader {
    config_paths: Vec<PathBuf>,
    env_prefix: String,
    load_dotenv: bool,
    /// 利用者が明示したパス（存在しない・解析できない場合はエラー）
    explicit: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_paths: vec![PathBuf::from("locpkt.config.toml"), PathBuf::from("locpkt.config.json")],
            env_prefix: "LOCPKT_".into(),
            load_dotenv: true,
            explicit: false,
        }
    }

    /// `--config` などで明示された1ファイルだけを読む
    pub fn with_explicit_path(path: PathBuf) -> Self {
        Self { config_paths: vec![path], explicit: true, ..Self::new() }
    }

    pub fn with_paths(paths: Vec<PathBuf>) -> Self {
        Self { config_paths: paths, ..Self::new() }
    }

    pub fn with_env_prefix(mut self, prefix: &str) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    pub fn without_dotenv(mut self) -> Self {
        self.load_dotenv = false;
        self
    }

    /// 既定値 → 最初に見つかった設定ファイル → 環境変数 の順で適用する
    pub fn load(&self) -> LocResult<LocPacketConfig> {
        if self.load_dotenv {
            // .env が無いのは正常
            let _ = dotenvy::dotenv();
        }

        let mut config = LocPacketConfig::default();
        for path in &self.config_paths {
            if self.explicit {
                if !path.exists() {
                    return Err(LocPacketError::Config(format!("Config file not found: {}", path.display())));
                }
                config = self.load_from_file(path)?;
                break;
            }
            if path.exists() {
                match self.load_from_file(path) {
                    Ok(file_config) => {
                        config = file_config;
                        break;
                    }
                    Err(e) => eprintln!("Warning: Failed to load config from {:?}: {}", path, e),
                }
            }
        }
        config = self.apply_env_overrides(config)?;
        self.validate_config(&config)?;
        Ok(config)
    }

    pub fn load_from_file(&self, path: &Path) -> LocResult<LocPacketConfig> {
        let content = fs::read_to_string(path)?;
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::from_str(&content)
                .map_err(|e| LocPacketError::Config(format!("Failed to parse JSON config: {}", e))),
            Some("toml") => toml::from_str(&content)
                .map_err(|e| LocPacketError::Config(format!("Failed to parse TOML config: {}", e))),
            _ => Err(LocPacketError::Config("Unsupported config file format".into())),
        }
    }

    fn env_var(&self, key: &str) -> Option<String> {
        env::var(format!("{}{}", self.env_prefix, key)).ok()
    }

    fn apply_env_overrides(&self, mut config: LocPacketConfig) -> LocResult<LocPacketConfig> {
        if let Some(level) = self.env_var("LOG_LEVEL") {
            config.logging.level = level;
        }
        if let Some(format) = self.env_var("OUTPUT_FORMAT") {
            config.output.format = OutputFormat::from_str(&format).map_err(LocPacketError::Config)?;
        }
        if let Some(show_raw) = self.env_var("SHOW_RAW") {
            config.output.show_raw = show_raw
                .parse()
                .map_err(|_| LocPacketError::Config("Invalid show_raw flag in environment variable".into()))?;
        }
        if let Some(precision) = self.env_var("PRECISION") {
            config.output.precision = precision
                .parse()
                .map_err(|_| LocPacketError::Config("Invalid precision in environment variable".into()))?;
        }
        Ok(config)
    }

    fn validate_config(&self, config: &LocPacketConfig) -> LocResult<()> {
        LogLevel::from_str(&config.logging.level).map_err(|_| {
            LocPacketError::Config("Invalid log level. Must be one of: trace, debug, info, warn, error".into())
        })?;
        if config.output.precision > MAX_PRECISION {
            return Err(LocPacketError::Config(format!(
                "Precision must be at most {}",
                MAX_PRECISION
            )));
        }
        Ok(())
    }

    pub fn save_config(&self, config: &LocPacketConfig, path: &Path) -> LocResult<()> {
        let content = match path.extension().and_then(|s| s.to_str()) {
            Some("json") => serde_json::to_string_pretty(config)
                .map_err(|e| LocPacketError::Config(format!("Failed to serialize config to JSON: {}", e)))?,
            Some("toml") => toml::to_string_pretty(config)
                .map_err(|e| LocPacketError::Config(format!("Failed to serialize config to TOML: {}", e)))?,
            _ => return Err(LocPacketError::Config("Unsupported config file format for saving".into())),
        };
        fs::write(path, content)?;
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
