/// 位置情報パケットのチェックサム計算・検証機能
/// チェックサムは末尾1バイト、先行する全バイトのXOR畳み込み

use super::exceptions::DecodeError;

/// 8ビットXORチェックサムを計算する
///
/// Args:
///     data: チェックサム計算対象のバイト列
///
/// Returns:
///     全バイトのXOR値（空のバイト列は0）
pub fn calc_checksum8(data: &[u8]) -> u8 {
    data.iter().fold(0u8, |acc, &byte| acc ^ byte)
}

/// 末尾バイトに格納されたチェックサムを検証する
///
/// Args:
///     packet: チェックサムを含むバイト列（最終バイトがチェックサム）
///
/// Returns:
///     一致すればOk、不一致なら計算値と格納値を含むエラー
///     （空のバイト列はチェックサムを持たないため長さエラー）
pub fn verify_checksum8(packet: &[u8]) -> Result<(), DecodeError> {
    let Some((&stored, body)) = packet.split_last() else {
        return Err(DecodeError::invalid_length(1, 0));
    };

    let calculated = calc_checksum8(body);
    if calculated != stored {
        return Err(DecodeError::checksum_mismatch(calculated, stored));
    }
    Ok(())
}

/// パケットの最終バイトにチェックサムを埋め込む
///
/// 空のバイト列には何もしない。
pub fn embed_checksum8(packet: &mut [u8]) {
    if let Some((last, body)) = packet.split_last_mut() {
        *last = calc_checksum8(body);
    }
}
