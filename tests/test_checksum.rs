use locpkt_rust::locpkt_common_rs::packet::codec::PacketCodec;
use locpkt_rust::locpkt_common_rs::packet::core::checksum::{calc_checksum8, embed_checksum8, verify_checksum8};
use locpkt_rust::locpkt_common_rs::packet::core::DecodeError;

#[test]
fn test_calc_checksum8_basic() {
    let data = vec![0x12, 0x34, 0x56, 0x78];
    assert_eq!(calc_checksum8(&data), 0x08);
}

#[test]
fn test_calc_checksum8_empty() {
    let data: Vec<u8> = vec![];

    // Empty data should have checksum 0
    assert_eq!(calc_checksum8(&data), 0);
}

#[test]
fn test_calc_checksum8_order_independent() {
    let forward = [0xAA, 0x55, 0x02, 0x10, 0x20];
    let mut reversed = forward;
    reversed.reverse();
    assert_eq!(calc_checksum8(&forward), calc_checksum8(&reversed));
}

#[test]
fn test_codec_checksum_matches_core() {
    let data = [0xAA, 0x55, 0x01, 0x04, 0x7E, 0x1F, 0x42, 0x81, 0x14, 0xE9, 0x42];
    assert_eq!(PacketCodec::checksum(&data), calc_checksum8(&data));
    assert_eq!(PacketCodec::checksum(&data), 0xE7);
}

#[test]
fn test_embed_and_verify_checksum() {
    let mut data = vec![0x12, 0x34, 0x56, 0x78, 0x00]; // Last byte for checksum

    embed_checksum8(&mut data);

    assert!(verify_checksum8(&data).is_ok());
}

#[test]
fn test_verify_invalid_checksum() {
    let mut data = vec![0x12, 0x34, 0x56, 0x78, 0x00];
    embed_checksum8(&mut data);

    // Corrupt the data
    data[0] = 0xFF;

    assert_eq!(
        verify_checksum8(&data),
        Err(DecodeError::checksum_mismatch(0xFF ^ 0x34 ^ 0x56 ^ 0x78, 0x08))
    );
}

#[test]
fn test_checksum_different_sizes() {
    let sizes = vec![1, 2, 11, 16, 64, 256];

    for size in sizes {
        let mut data: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();
        data.push(0); // Space for checksum

        embed_checksum8(&mut data);
        assert!(verify_checksum8(&data).is_ok(), "Failed for size {}", size);
    }
}
