//! Tests for the byte order module

extern crate std;

use std::io::Cursor;
use byteorder::{LittleEndian, BigEndian, WriteBytesExt};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler, LittleEndianHandler, BigEndianHandler};

#[test]
fn test_byte_order_detection_little_endian() {
    let result = ByteOrder::detect(b'I');
    std::assert!(result.is_ok());
    std::assert_eq!(result.unwrap(), ByteOrder::LittleEndian);
}

#[test]
fn test_byte_order_detection_big_endian() {
    let result = ByteOrder::detect(b'M');
    std::assert!(result.is_ok());
    std::assert_eq!(result.unwrap(), ByteOrder::BigEndian);
}

#[test]
fn test_byte_order_detection_invalid() {
    let result = ByteOrder::detect(b'X');
    std::assert!(result.is_err());
}

#[test]
fn test_little_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_u16::<LittleEndian>(0x1234).unwrap();
    buffer.write_u32::<LittleEndian>(0x12345678).unwrap();
    buffer.write_u64::<LittleEndian>(0x1234567890ABCDEF).unwrap();
    let mut cursor = Cursor::new(buffer);

    let handler = LittleEndianHandler;

    std::assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
    std::assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
    std::assert_eq!(handler.read_uint(&mut cursor, 8).unwrap(), 0x1234567890ABCDEF);
}

#[test]
fn test_big_endian_handler() {
    let mut buffer = Vec::new();
    buffer.write_u16::<BigEndian>(0x1234).unwrap();
    buffer.write_u32::<BigEndian>(0x12345678).unwrap();
    buffer.write_u64::<BigEndian>(0x1234567890ABCDEF).unwrap();
    let mut cursor = Cursor::new(buffer);

    let handler = BigEndianHandler;

    std::assert_eq!(handler.read_u16(&mut cursor).unwrap(), 0x1234);
    std::assert_eq!(handler.read_u32(&mut cursor).unwrap(), 0x12345678);
    std::assert_eq!(handler.read_uint(&mut cursor, 8).unwrap(), 0x1234567890ABCDEF);
}

#[test]
fn test_endianness_symmetry() {
    // The same bytes reversed must decode to the same value under the
    // opposite byte order, for every supported width
    let bytes = [0x01u8, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF];

    for length in [1usize, 2, 4, 8] {
        let forward: Vec<u8> = bytes[..length].to_vec();
        let mut reversed = forward.clone();
        reversed.reverse();

        let be = BigEndianHandler
            .read_uint(&mut Cursor::new(forward), length)
            .unwrap();
        let le = LittleEndianHandler
            .read_uint(&mut Cursor::new(reversed), length)
            .unwrap();

        std::assert_eq!(be, le, "length {}", length);
    }
}

#[test]
fn test_sign_extension() {
    // 0xFFFF is -1 when sign-extended, 65535 when not
    let handler = BigEndianHandler;

    let signed = handler.read_int(&mut Cursor::new(vec![0xFF, 0xFF]), 2).unwrap();
    std::assert_eq!(signed, -1);

    let unsigned = handler.read_uint(&mut Cursor::new(vec![0xFF, 0xFF]), 2).unwrap();
    std::assert_eq!(unsigned, 65535);
}
