//! 位置パケットのコーデック
//!
//! 状態を持たない純粋関数の集まり。ログ出力などの副作用は呼び出し側の責務。

use crate::locpkt_common_rs::packet::core::{
    calc_checksum8, DecodeError, PacketFormat, LOCATION_PACKET_SIZE,
};
use crate::locpkt_common_rs::packet::types::DecodedLocation;

/// 位置パケットのデコーダ
#[derive(Debug, Clone, Copy, Default)]
pub struct PacketCodec;

impl PacketCodec {
    /// 12バイトのパケットを検証してデコードする
    ///
    /// 長さ、ヘッダ、チェックサム、タイプの順に検証し、最初の失敗で打ち切る。
    pub fn decode(bytes: &[u8]) -> Result<DecodedLocation, DecodeError> {
        DecodedLocation::from_bytes(bytes)
    }

    /// XORチェックサム（フィクスチャ生成とデコード検証で共用）
    pub fn checksum(bytes: &[u8]) -> u8 {
        calc_checksum8(bytes)
    }

    /// テスト・デモ用のエンコード
    pub fn encode(location: &DecodedLocation) -> [u8; LOCATION_PACKET_SIZE] {
        location.to_array()
    }
}
