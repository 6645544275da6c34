/// Location Packet Rust Implementation
/// 位置情報テレメトリパケット（12バイト固定長）のデコーダと周辺ユーティリティ

pub mod locpkt_common_rs;

// 便利な再エクスポート
pub mod prelude {
    pub use crate::locpkt_common_rs::packet::codec::PacketCodec;
    pub use crate::locpkt_common_rs::packet::core::{DecodeError, PacketFormat};
    pub use crate::locpkt_common_rs::packet::types::{DecodedLocation, LocationType};
}
