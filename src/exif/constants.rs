//! Exif format constants
//!
//! This module defines constants used throughout the Exif decoding code,
//! making the code more readable and maintainable by replacing magic numbers
//! with descriptive names.

/// JPEG/Exif container markers
pub mod markers {
    /// JPEG SOI marker immediately followed by the APP1 marker
    pub const SOI_APP1: [u8; 4] = [0xFF, 0xD8, 0xFF, 0xE1];

    /// ASCII identifier at bytes 6..10 of the segment
    pub const EXIF_IDENTIFIER: &[u8; 4] = b"Exif";

    /// 'I' byte order marker for little-endian (Intel)
    pub const LITTLE_ENDIAN_MARKER: u8 = b'I';

    /// 'M' byte order marker for big-endian (Motorola)
    pub const BIG_ENDIAN_MARKER: u8 = b'M';

    /// Bytes of the segment preceding the TIFF region (markers,
    /// length field and "Exif\0\0"), as counted by the length field
    pub const TIFF_REGION_PREFIX: usize = 8;
}

/// Field types as defined in the TIFF spec
pub mod type_codes {
    use crate::exif::errors::{ExifError, ExifResult};

    pub const BYTE: u16 = 1;       // 8-bit unsigned integer
    pub const ASCII: u16 = 2;      // 8-bit byte containing ASCII character
    pub const SHORT: u16 = 3;      // 16-bit unsigned integer
    pub const LONG: u16 = 4;       // 32-bit unsigned integer
    pub const RATIONAL: u16 = 5;   // Two LONGs: numerator and denominator
    pub const SBYTE: u16 = 6;      // 8-bit signed integer
    pub const UNDEFINED: u16 = 7;  // 8-bit byte with unspecified format
    pub const SSHORT: u16 = 8;     // 16-bit signed integer
    pub const SLONG: u16 = 9;      // 32-bit signed integer
    pub const SRATIONAL: u16 = 10; // Two SLONGs: numerator and denominator

    /// Per-element byte width of a field type
    pub fn size(type_code: u16) -> ExifResult<usize> {
        match type_code {
            BYTE | ASCII | SBYTE | UNDEFINED => Ok(1),
            SHORT | SSHORT => Ok(2),
            LONG | SLONG => Ok(4),
            RATIONAL | SRATIONAL => Ok(8),
            _ => Err(ExifError::UnsupportedTypeCode(type_code)),
        }
    }
}

/// TIFF header layout
pub mod header {
    /// Offset of the first-IFD pointer inside the TIFF region
    pub const FIRST_IFD_OFFSET: u64 = 4;
}

/// IFD entry layout
pub mod entry {
    /// Wire size of one directory entry:
    /// tag(2) + type(2) + count(4) + value/offset(4)
    pub const SIZE: u64 = 12;

    /// Offset of the value/offset field inside an entry
    pub const VALUE_FIELD: u64 = 8;

    /// Largest total value size that is stored inline in the entry
    pub const INLINE_LIMIT: u64 = 4;
}

/// Well-known Exif tags
pub mod tags {
    /// Pointer to the Exif sub-IFD
    pub const EXIF_IFD_POINTER: u16 = 0x8769;
    /// Pointer to the GPS info sub-IFD
    pub const GPS_INFO_IFD_POINTER: u16 = 0x8825;
    /// Pointer to the Interoperability sub-IFD, found inside the Exif sub-IFD
    pub const INTEROPERABILITY_IFD_POINTER: u16 = 0xA005;

    // Frequently consulted image tags
    pub const IMAGE_WIDTH: u16 = 0x100;
    pub const IMAGE_LENGTH: u16 = 0x101;
    pub const MAKE: u16 = 0x10F;
    pub const MODEL: u16 = 0x110;
    pub const ORIENTATION: u16 = 0x112;
    pub const DATE_TIME: u16 = 0x132;
    pub const EXPOSURE_TIME: u16 = 0x829A;
    pub const F_NUMBER: u16 = 0x829D;
    pub const ISO_SPEED_RATINGS: u16 = 0x8827;
    pub const DATE_TIME_ORIGINAL: u16 = 0x9003;
    pub const FOCAL_LENGTH: u16 = 0x920A;
}

/// Decoding limits
pub mod limits {
    /// Cap on the top-level IFD chain walk. A well-formed Exif segment
    /// carries two directories; anything past this bound is a broken
    /// or cyclic next-pointer chain.
    pub const MAX_IFD_CHAIN: usize = 32;
}
