/// 位置情報パケット処理用エラー型定義

use std::error::Error;
use std::fmt;

/// パケットデコードエラー
///
/// デコードは最初に検出した異常で打ち切るため、
/// 結果は常にいずれか1つの理由を持つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    /// パケット長が固定長と異なる
    InvalidLength { expected: usize, actual: usize },
    /// フレームヘッダ（マジック）が 0xAA 0x55 ではない
    InvalidHeader { got: (u8, u8) },
    /// チェックサム不一致（expected は計算値、actual は受信値）
    ChecksumMismatch { expected: u8, actual: u8 },
    /// 未知の位置タイプ
    InvalidType { got: u8 },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::InvalidLength { expected, actual } => {
                write!(f, "データ長が不正です: 期待 {}バイト, 実際 {}バイト", expected, actual)
            }
            DecodeError::InvalidHeader { got } => {
                write!(f, "ヘッダが不正です: 0x{:02X} 0x{:02X}", got.0, got.1)
            }
            DecodeError::ChecksumMismatch { expected, actual } => {
                write!(
                    f,
                    "チェックサム検証に失敗しました。計算値: 0x{:02X}, 受信値: 0x{:02X}",
                    expected, actual
                )
            }
            DecodeError::InvalidType { got } => {
                write!(f, "不正な位置タイプ: 0x{:02X}", got)
            }
        }
    }
}

impl Error for DecodeError {}

/// エラーヘルパー関数
impl DecodeError {
    pub fn invalid_length(expected: usize, actual: usize) -> Self {
        DecodeError::InvalidLength { expected, actual }
    }

    pub fn invalid_header(first: u8, second: u8) -> Self {
        DecodeError::InvalidHeader { got: (first, second) }
    }

    pub fn checksum_mismatch(expected: u8, actual: u8) -> Self {
        DecodeError::ChecksumMismatch { expected, actual }
    }

    pub fn invalid_type(got: u8) -> Self {
        DecodeError::InvalidType { got }
    }
}

/// 位置パケット処理の統合エラー型
#[derive(Debug, Clone, PartialEq)]
pub enum LocPacketError {
    /// パケットデコードエラー
    Decode(DecodeError),
    /// 入力形式エラー（16進文字列の解析失敗など）
    InvalidInput(String),
    /// 設定エラー
    Config(String),
    /// I/O エラー
    Io(String),
}

impl fmt::Display for LocPacketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LocPacketError::Decode(err) => write!(f, "パケット解析エラー: {}", err),
            LocPacketError::InvalidInput(msg) => write!(f, "入力エラー: {}", msg),
            LocPacketError::Config(msg) => write!(f, "設定エラー: {}", msg),
            LocPacketError::Io(msg) => write!(f, "I/Oエラー: {}", msg),
        }
    }
}

impl Error for LocPacketError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            LocPacketError::Decode(err) => Some(err),
            _ => None,
        }
    }
}

// From実装で自動変換をサポート
impl From<DecodeError> for LocPacketError {
    fn from(err: DecodeError) -> Self {
        LocPacketError::Decode(err)
    }
}

impl From<std::io::Error> for LocPacketError {
    fn from(err: std::io::Error) -> Self {
        LocPacketError::Io(err.to_string())
    }
}

impl From<hex::FromHexError> for LocPacketError {
    fn from(err: hex::FromHexError) -> Self {
        LocPacketError::InvalidInput(err.to_string())
    }
}

/// Result型のエイリアス
pub type LocResult<T> = Result<T, LocPacketError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_error_display() {
        let err = DecodeError::invalid_length(12, 5);
        assert_eq!(format!("{}", err), "データ長が不正です: 期待 12バイト, 実際 5バイト");

        let err = DecodeError::invalid_header(0xAB, 0x55);
        assert_eq!(format!("{}", err), "ヘッダが不正です: 0xAB 0x55");

        let err = DecodeError::invalid_type(0x03);
        assert_eq!(format!("{}", err), "不正な位置タイプ: 0x03");
    }

    #[test]
    fn test_checksum_error_display() {
        let err = DecodeError::checksum_mismatch(0xE7, 0x00);
        assert_eq!(
            format!("{}", err),
            "チェックサム検証に失敗しました。計算値: 0xE7, 受信値: 0x00"
        );
    }

    #[test]
    fn test_loc_packet_error_conversion() {
        let decode_err = DecodeError::invalid_type(0x7F);
        let err: LocPacketError = decode_err.into();

        match err {
            LocPacketError::Decode(inner) => assert_eq!(inner, decode_err),
            _ => panic!("Conversion failed"),
        }
    }

    #[test]
    fn test_error_chain() {
        let err = LocPacketError::from(DecodeError::invalid_length(12, 0));
        assert!(err.source().is_some());

        let err = LocPacketError::Config("bad".into());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_hex_error_conversion() {
        let err: LocPacketError = hex::decode("zz").unwrap_err().into();
        assert!(matches!(err, LocPacketError::InvalidInput(_)));
    }
}
