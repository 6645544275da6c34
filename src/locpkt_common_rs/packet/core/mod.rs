//! パケットコア機能
//! チェックサム計算、バイトオーダー変換、エラー処理等のコア機能

pub mod byte_order;
pub mod checksum;
pub mod exceptions;
pub mod format_base;

// 便利な再エクスポート
pub use byte_order::{
    is_host_big_endian, read_f32_le, read_u32_le, write_f32_le, write_u32_le, ByteField,
    PacketFields,
};
pub use checksum::{calc_checksum8, embed_checksum8, verify_checksum8};
pub use exceptions::{DecodeError, LocPacketError, LocResult};
pub use format_base::{
    PacketFormat, CHECKSUM_OFFSET, HEADER_MAGIC, LATITUDE_OFFSET, LOCATION_PACKET_FIELDS,
    LOCATION_PACKET_SIZE, LONGITUDE_OFFSET, TYPE_OFFSET,
};
