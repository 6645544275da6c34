use crate::locpkt_common_rs::packet::core::{
    calc_checksum8, read_u32_le, PacketFormat, CHECKSUM_OFFSET, LOCATION_PACKET_SIZE,
};
use crate::locpkt_common_rs::packet::types::DecodedLocation;
use log::debug;

/// バイト列を "AA 55 01 .." 形式に整形する
pub fn hex_dump(buf: &[u8]) -> String {
    buf.iter()
        .map(|b| format!("{:02X}", b))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Minimal packet debug logger for inspecting raw location packets.
/// - Dumps every layout field as hex
/// - Shows stored vs computed checksum
///
/// Inspection only: never rejects a packet, use `PacketCodec::decode` for validation.
pub struct PacketDebugLogger;

impl PacketDebugLogger {
    pub fn log_packet(buf: &[u8]) {
        debug!("[PacketDebug] raw len={} bytes: {}", buf.len(), hex_dump(buf));
        for line in Self::describe(buf) {
            debug!("[PacketDebug] {}", line);
        }
    }

    /// フィールドごとの説明行を生成する（パケットが短い場合は存在する範囲のみ）
    pub fn describe(buf: &[u8]) -> Vec<String> {
        let mut lines = Vec::new();

        if buf.len() != LOCATION_PACKET_SIZE {
            lines.push(format!(
                "length mismatch: expected {} got {}",
                LOCATION_PACKET_SIZE,
                buf.len()
            ));
        }

        for field in DecodedLocation::get_field_definitions().get_all_fields() {
            let Some(bytes) = field.slice(buf) else {
                lines.push(format!("{}: <missing>", field.name));
                continue;
            };
            match field.length {
                4 => {
                    let word = read_u32_le(buf, field.offset).unwrap_or_default();
                    lines.push(format!(
                        "{}: {} (word=0x{:08X} f32={})",
                        field.name,
                        hex_dump(bytes),
                        word,
                        f32::from_bits(word)
                    ));
                }
                _ => lines.push(format!("{}: {}", field.name, hex_dump(bytes))),
            }
        }

        // チェックサム位置が確定するのは固定長のときだけ
        if buf.len() == LOCATION_PACKET_SIZE {
            let stored = buf[CHECKSUM_OFFSET];
            let computed = calc_checksum8(&buf[..CHECKSUM_OFFSET]);
            lines.push(format!(
                "checksum stored=0x{:02X} computed=0x{:02X} ok={}",
                stored,
                computed,
                stored == computed
            ));
        }

        lines
    }
}
