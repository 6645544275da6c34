//! パケット処理（レイアウト定義・チェックサム・デコード）

pub mod codec;
pub mod core;
pub mod debug;
pub mod types;
