use chrono::Local;
use serde::{Deserialize, Serialize};
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace = 0,
    Debug = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(format!("Invalid log level: {}", s)),
        }
    }

    pub fn to_filter(self) -> log::LevelFilter {
        match self {
            LogLevel::Trace => log::LevelFilter::Trace,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Error => log::LevelFilter::Error,
        }
    }
}

/// 統一ログ行: `[timestamp] [LEVEL] [module] message`
pub fn format_line(level: log::Level, module: &str, message: &str, include_timestamps: bool) -> String {
    let mut parts = Vec::new();
    if include_timestamps {
        parts.push(format!("[{}]", Local::now().format("%Y-%m-%d %H:%M:%S%.3f")));
    }
    parts.push(format!("[{}]", level));
    parts.push(format!("[{}]", module));
    parts.push(message.to_string());
    parts.join(" ")
}

/// env_logger を統一フォーマットで初期化する
///
/// RUST_LOG が設定されていればそちらを優先する。二重初期化はエラーにせず無視する。
pub fn init_logging(level: LogLevel) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level.to_filter());
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }
    builder.format(|buf, record| {
        let line = format_line(
            record.level(),
            record.module_path().unwrap_or("unknown"),
            &record.args().to_string(),
            true,
        );
        writeln!(buf, "{}", line)
    });
    let _ = builder.try_init();
}
