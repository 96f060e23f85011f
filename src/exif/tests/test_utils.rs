use byteorder::{LittleEndian, WriteBytesExt};

/// Wraps a TIFF region in a JPEG SOI+APP1/Exif segment
pub fn wrap_in_exif_segment(tiff: &[u8]) -> Vec<u8> {
    let mut buffer = Vec::new();

    buffer.extend_from_slice(&[0xFF, 0xD8, 0xFF, 0xE1]); // SOI + APP1
    let length = (tiff.len() + 8) as u16; // length field counts itself
    buffer.extend_from_slice(&length.to_be_bytes());
    buffer.extend_from_slice(b"Exif\0\0");
    buffer.extend_from_slice(tiff);

    buffer
}

/// Creates a little-endian TIFF region with one IFD holding
/// ImageWidth=800 and ImageLength=600
pub fn build_minimal_tiff() -> Vec<u8> {
    let mut buffer = Vec::new();

    // TIFF header (little-endian)
    buffer.extend_from_slice(&[0x49, 0x49]); // "II"
    buffer.write_u16::<LittleEndian>(42).unwrap();
    buffer.write_u32::<LittleEndian>(8).unwrap(); // First IFD offset

    // IFD at offset 8 with two entries
    buffer.write_u16::<LittleEndian>(2).unwrap();

    // Entry 1: ImageWidth (tag 0x100)
    buffer.write_u16::<LittleEndian>(0x100).unwrap();
    buffer.write_u16::<LittleEndian>(4).unwrap(); // LONG
    buffer.write_u32::<LittleEndian>(1).unwrap();
    buffer.write_u32::<LittleEndian>(800).unwrap();

    // Entry 2: ImageLength (tag 0x101)
    buffer.write_u16::<LittleEndian>(0x101).unwrap();
    buffer.write_u16::<LittleEndian>(4).unwrap(); // LONG
    buffer.write_u32::<LittleEndian>(1).unwrap();
    buffer.write_u32::<LittleEndian>(600).unwrap();

    // Next IFD offset (0 = no more IFDs)
    buffer.write_u32::<LittleEndian>(0).unwrap();

    buffer
}

/// Creates a little-endian TIFF region exercising every sub-IFD
/// pointer: main IFD at 8, Exif sub-IFD at 50, its rational data at
/// 80, Interoperability IFD at 88, GPS IFD at 106
pub fn build_full_tiff() -> Vec<u8> {
    let mut buffer = Vec::new();

    // TIFF header (little-endian)
    buffer.extend_from_slice(&[0x49, 0x49]);
    buffer.write_u16::<LittleEndian>(42).unwrap();
    buffer.write_u32::<LittleEndian>(8).unwrap();

    // Main IFD at offset 8 with three entries
    buffer.write_u16::<LittleEndian>(3).unwrap();

    // ImageWidth
    buffer.write_u16::<LittleEndian>(0x100).unwrap();
    buffer.write_u16::<LittleEndian>(4).unwrap();
    buffer.write_u32::<LittleEndian>(1).unwrap();
    buffer.write_u32::<LittleEndian>(800).unwrap();

    // ExifIFDPointer -> offset 50
    buffer.write_u16::<LittleEndian>(0x8769).unwrap();
    buffer.write_u16::<LittleEndian>(4).unwrap();
    buffer.write_u32::<LittleEndian>(1).unwrap();
    buffer.write_u32::<LittleEndian>(50).unwrap();

    // GPSInfoIFDPointer -> offset 106
    buffer.write_u16::<LittleEndian>(0x8825).unwrap();
    buffer.write_u16::<LittleEndian>(4).unwrap();
    buffer.write_u32::<LittleEndian>(1).unwrap();
    buffer.write_u32::<LittleEndian>(106).unwrap();

    // Next IFD offset
    buffer.write_u32::<LittleEndian>(0).unwrap();

    // Exif sub-IFD at offset 50 with two entries
    buffer.write_u16::<LittleEndian>(2).unwrap();

    // ExposureTime, one RATIONAL stored indirectly at offset 80
    buffer.write_u16::<LittleEndian>(0x829A).unwrap();
    buffer.write_u16::<LittleEndian>(5).unwrap();
    buffer.write_u32::<LittleEndian>(1).unwrap();
    buffer.write_u32::<LittleEndian>(80).unwrap();

    // InteroperabilityIFDPointer -> offset 88
    buffer.write_u16::<LittleEndian>(0xA005).unwrap();
    buffer.write_u16::<LittleEndian>(4).unwrap();
    buffer.write_u32::<LittleEndian>(1).unwrap();
    buffer.write_u32::<LittleEndian>(88).unwrap();

    // Next IFD offset
    buffer.write_u32::<LittleEndian>(0).unwrap();

    // Rational data at offset 80: 10/5, unreduced
    buffer.write_u32::<LittleEndian>(10).unwrap();
    buffer.write_u32::<LittleEndian>(5).unwrap();

    // Interoperability IFD at offset 88 with one entry
    buffer.write_u16::<LittleEndian>(1).unwrap();

    // InteroperabilityIndex, inline ASCII "R98\0"
    buffer.write_u16::<LittleEndian>(0x1).unwrap();
    buffer.write_u16::<LittleEndian>(2).unwrap();
    buffer.write_u32::<LittleEndian>(4).unwrap();
    buffer.extend_from_slice(b"R98\0");

    // Next IFD offset
    buffer.write_u32::<LittleEndian>(0).unwrap();

    // GPS IFD at offset 106 with one entry
    buffer.write_u16::<LittleEndian>(1).unwrap();

    // GPSLatitudeRef, inline ASCII "N\0" (padded to 4 bytes)
    buffer.write_u16::<LittleEndian>(0x1).unwrap();
    buffer.write_u16::<LittleEndian>(2).unwrap();
    buffer.write_u32::<LittleEndian>(2).unwrap();
    buffer.extend_from_slice(b"N\0\0\0");

    // Next IFD offset
    buffer.write_u32::<LittleEndian>(0).unwrap();

    buffer
}

/// Writes a little-endian u16 into `buffer` at `offset`
pub fn put_u16_le(buffer: &mut [u8], offset: usize, value: u16) {
    buffer[offset..offset + 2].copy_from_slice(&value.to_le_bytes());
}

/// Writes a little-endian u32 into `buffer` at `offset`
pub fn put_u32_le(buffer: &mut [u8], offset: usize, value: u32) {
    buffer[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}
