//! 設定・ログ等の共通ユーティリティ

pub mod config_loader;
pub mod log_config;
