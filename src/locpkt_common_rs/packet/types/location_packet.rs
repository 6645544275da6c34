/// 位置パケット（Type=CURRENT/HOME）実装
///
/// レイアウト（12バイト、パディングなし）:
///   [0..2)  header    0xAA 0x55
///   [2]     type      0x01=現在位置, 0x02=ホーム位置
///   [3..7)  latitude  f32 リトルエンディアン
///   [7..11) longitude f32 リトルエンディアン
///   [11]    checksum  [0..11) のXOR

use crate::locpkt_common_rs::packet::core::{
    calc_checksum8, read_f32_le, write_f32_le, DecodeError, PacketFields, PacketFormat,
    CHECKSUM_OFFSET, HEADER_MAGIC, LATITUDE_OFFSET, LOCATION_PACKET_FIELDS, LOCATION_PACKET_SIZE,
    LONGITUDE_OFFSET, TYPE_OFFSET,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 位置タイプ
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LocationType {
    /// 現在位置
    Current = 0x01,
    /// ホーム位置
    Home = 0x02,
}

impl LocationType {
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0x01 => Some(Self::Current),
            0x02 => Some(Self::Home),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// 表示用ラベル
    pub fn label(self) -> &'static str {
        match self {
            Self::Current => "現在位置",
            Self::Home => "ホーム位置",
        }
    }
}

impl fmt::Display for LocationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for LocationType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "current" | "1" | "0x01" => Ok(Self::Current),
            "home" | "2" | "0x02" => Ok(Self::Home),
            _ => Err(format!("Invalid location type: {}", s)),
        }
    }
}

/// デコード済みの位置情報
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecodedLocation {
    #[serde(rename = "type")]
    pub location_type: LocationType,
    pub latitude: f32,
    pub longitude: f32,
}

impl DecodedLocation {
    pub fn new(location_type: LocationType, latitude: f32, longitude: f32) -> Self {
        Self {
            location_type,
            latitude,
            longitude,
        }
    }

    /// 12バイトのワイヤ表現を生成（チェックサム込み）
    pub fn to_array(&self) -> [u8; LOCATION_PACKET_SIZE] {
        let mut packet = [0u8; LOCATION_PACKET_SIZE];
        packet[..TYPE_OFFSET].copy_from_slice(&HEADER_MAGIC);
        packet[TYPE_OFFSET] = self.location_type.as_u8();
        // オフセットは定数のため書き込み失敗は起こらない
        let written = write_f32_le(self.latitude, &mut packet, LATITUDE_OFFSET)
            && write_f32_le(self.longitude, &mut packet, LONGITUDE_OFFSET);
        debug_assert!(written);
        packet[CHECKSUM_OFFSET] = calc_checksum8(&packet[..CHECKSUM_OFFSET]);
        packet
    }
}

impl PacketFormat for DecodedLocation {
    fn to_bytes(&self) -> Vec<u8> {
        self.to_array().to_vec()
    }

    fn from_bytes(data: &[u8]) -> Result<Self, DecodeError> {
        // 検証順序: 長さ → ヘッダ → チェックサム → タイプ
        if data.len() != LOCATION_PACKET_SIZE {
            return Err(DecodeError::invalid_length(LOCATION_PACKET_SIZE, data.len()));
        }

        if data[..TYPE_OFFSET] != HEADER_MAGIC {
            return Err(DecodeError::invalid_header(data[0], data[1]));
        }

        let calculated = calc_checksum8(&data[..CHECKSUM_OFFSET]);
        let received = data[CHECKSUM_OFFSET];
        if calculated != received {
            return Err(DecodeError::checksum_mismatch(calculated, received));
        }

        let raw_type = data[TYPE_OFFSET];
        let location_type =
            LocationType::from_u8(raw_type).ok_or(DecodeError::invalid_type(raw_type))?;

        // 長さ確認済みのため範囲外にはならない
        let latitude = read_f32_le(data, LATITUDE_OFFSET)
            .ok_or(DecodeError::invalid_length(LOCATION_PACKET_SIZE, data.len()))?;
        let longitude = read_f32_le(data, LONGITUDE_OFFSET)
            .ok_or(DecodeError::invalid_length(LOCATION_PACKET_SIZE, data.len()))?;

        Ok(Self {
            location_type,
            latitude,
            longitude,
        })
    }

    fn packet_size() -> usize {
        LOCATION_PACKET_SIZE
    }

    fn get_field_definitions() -> &'static PacketFields {
        &LOCATION_PACKET_FIELDS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BEIJING_CURRENT: [u8; 12] = [
        0xAA, 0x55, 0x01, 0x04, 0x7E, 0x1F, 0x42, 0x81, 0x14, 0xE9, 0x42, 0xE7,
    ];

    #[test]
    fn test_location_type_from_u8() {
        assert_eq!(LocationType::from_u8(0x01), Some(LocationType::Current));
        assert_eq!(LocationType::from_u8(0x02), Some(LocationType::Home));
        assert_eq!(LocationType::from_u8(0x00), None);
        assert_eq!(LocationType::from_u8(0x03), None);
    }

    #[test]
    fn test_location_type_from_str() {
        assert_eq!("current".parse::<LocationType>(), Ok(LocationType::Current));
        assert_eq!("HOME".parse::<LocationType>(), Ok(LocationType::Home));
        assert!("office".parse::<LocationType>().is_err());
    }

    #[test]
    fn test_from_bytes_known_packet() {
        let location = DecodedLocation::from_bytes(&BEIJING_CURRENT).unwrap();
        assert_eq!(location.location_type, LocationType::Current);
        assert_eq!(location.latitude.to_bits(), 0x421F7E04);
        assert_eq!(location.longitude.to_bits(), 0x42E91481);
    }

    #[test]
    fn test_to_array_reproduces_known_packet() {
        let location = DecodedLocation::new(
            LocationType::Current,
            f32::from_bits(0x421F7E04),
            f32::from_bits(0x42E91481),
        );
        assert_eq!(location.to_array(), BEIJING_CURRENT);
        assert_eq!(location.to_bytes().len(), DecodedLocation::packet_size());
    }

    #[test]
    fn test_header_checked_before_checksum() {
        let mut packet = BEIJING_CURRENT;
        packet[0] = 0x00;
        assert_eq!(
            DecodedLocation::from_bytes(&packet),
            Err(DecodeError::invalid_header(0x00, 0x55))
        );
    }

    #[test]
    fn test_checksum_checked_before_type() {
        let mut packet = BEIJING_CURRENT;
        packet[TYPE_OFFSET] = 0x09;
        assert_eq!(
            DecodedLocation::from_bytes(&packet),
            Err(DecodeError::checksum_mismatch(0xE7 ^ 0x01 ^ 0x09, 0xE7))
        );
    }

    #[test]
    fn test_invalid_type_with_valid_checksum() {
        let mut packet = BEIJING_CURRENT;
        packet[TYPE_OFFSET] = 0x03;
        packet[CHECKSUM_OFFSET] = calc_checksum8(&packet[..CHECKSUM_OFFSET]);
        assert_eq!(
            DecodedLocation::from_bytes(&packet),
            Err(DecodeError::invalid_type(0x03))
        );
    }

    #[test]
    fn test_serialize_json() {
        let location = DecodedLocation::new(LocationType::Home, 1.5, -2.25);
        let json = serde_json::to_value(location).unwrap();
        assert_eq!(json["type"], "home");
        assert_eq!(json["latitude"], 1.5);
        assert_eq!(json["longitude"], -2.25);
    }
}
