//! Byte order handling for TIFF regions
//!
//! This module implements the Strategy pattern for handling different
//! byte orders (little-endian vs big-endian) when reading Exif/TIFF data.

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use std::io::Result;

use crate::exif::constants::markers;
use crate::exif::errors::{ExifError, ExifResult};
use crate::io::seekable::SeekableReader;

/// Represents the byte order of a TIFF region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
    /// Little-endian byte order ('I', Intel)
    LittleEndian,
    /// Big-endian byte order ('M', Motorola)
    BigEndian,
}

impl ByteOrder {
    /// Detects the byte order from the first byte of a TIFF region
    pub fn detect(marker: u8) -> ExifResult<Self> {
        match marker {
            markers::LITTLE_ENDIAN_MARKER => Ok(ByteOrder::LittleEndian),
            markers::BIG_ENDIAN_MARKER => Ok(ByteOrder::BigEndian),
            _ => Err(ExifError::UnrecognizedByteOrder(marker)),
        }
    }

    /// Returns a string representation of this byte order
    pub fn name(&self) -> &'static str {
        match self {
            ByteOrder::LittleEndian => "Intel",
            ByteOrder::BigEndian => "Motorola",
        }
    }

    /// Creates the appropriate handler for this byte order
    pub fn create_handler(&self) -> Box<dyn ByteOrderHandler> {
        match self {
            ByteOrder::LittleEndian => Box::new(LittleEndianHandler),
            ByteOrder::BigEndian => Box::new(BigEndianHandler),
        }
    }
}

/// Trait for byte order handling strategies
pub trait ByteOrderHandler: Send + Sync {
    /// Read a u16 value
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16>;

    /// Read a u32 value
    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32>;

    /// Read an unsigned integer of `nbytes` bytes (1 to 8)
    fn read_uint(&self, reader: &mut dyn SeekableReader, nbytes: usize) -> Result<u64>;

    /// Read a signed integer of `nbytes` bytes, two's-complement
    /// sign-extended to i64
    fn read_int(&self, reader: &mut dyn SeekableReader, nbytes: usize) -> Result<i64>;
}

/// Little-endian byte order handler
pub struct LittleEndianHandler;

impl ByteOrderHandler for LittleEndianHandler {
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<LittleEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<LittleEndian>()
    }

    fn read_uint(&self, reader: &mut dyn SeekableReader, nbytes: usize) -> Result<u64> {
        reader.read_uint::<LittleEndian>(nbytes)
    }

    fn read_int(&self, reader: &mut dyn SeekableReader, nbytes: usize) -> Result<i64> {
        reader.read_int::<LittleEndian>(nbytes)
    }
}

/// Big-endian byte order handler
pub struct BigEndianHandler;

impl ByteOrderHandler for BigEndianHandler {
    fn read_u16(&self, reader: &mut dyn SeekableReader) -> Result<u16> {
        reader.read_u16::<BigEndian>()
    }

    fn read_u32(&self, reader: &mut dyn SeekableReader) -> Result<u32> {
        reader.read_u32::<BigEndian>()
    }

    fn read_uint(&self, reader: &mut dyn SeekableReader, nbytes: usize) -> Result<u64> {
        reader.read_uint::<BigEndian>(nbytes)
    }

    fn read_int(&self, reader: &mut dyn SeekableReader, nbytes: usize) -> Result<i64> {
        reader.read_int::<BigEndian>(nbytes)
    }
}
