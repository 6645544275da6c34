//! 位置情報パケット共通ライブラリ

pub mod packet;
pub mod utils;
