/// パケットフォーマットの基盤実装
/// 固定長レイアウトの定数とパケット型共通のtrait

use super::byte_order::PacketFields;
use super::exceptions::DecodeError;
use once_cell::sync::Lazy;

/// 位置パケットの固定長（バイト）
pub const LOCATION_PACKET_SIZE: usize = 12;

/// フレームヘッダ
pub const HEADER_MAGIC: [u8; 2] = [0xAA, 0x55];

pub const TYPE_OFFSET: usize = 2;
pub const LATITUDE_OFFSET: usize = 3;
pub const LONGITUDE_OFFSET: usize = 7;
pub const CHECKSUM_OFFSET: usize = 11;

/// 位置パケットのフィールド構成
pub static LOCATION_PACKET_FIELDS: Lazy<PacketFields> = Lazy::new(|| {
    let mut fields = PacketFields::new();
    fields.add_field("header", 2);
    fields.add_field("type", 1);
    fields.add_field("latitude", 4);
    fields.add_field("longitude", 4);
    fields.add_field("checksum", 1);
    fields
});

/// パケットフォーマットの基本trait
pub trait PacketFormat: Sized {
    /// パケットをバイト列に変換
    fn to_bytes(&self) -> Vec<u8>;

    /// バイト列からパケットを構築
    fn from_bytes(data: &[u8]) -> Result<Self, DecodeError>;

    /// パケットサイズを取得
    fn packet_size() -> usize;

    /// フィールド定義を取得
    fn get_field_definitions() -> &'static PacketFields;
}
