/// パケット型定義
pub mod location_packet;

// 再エクスポート
pub use location_packet::{DecodedLocation, LocationType};
