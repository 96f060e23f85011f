//! In-memory TIFF region access
//!
//! A TIFF region extracted from a JPEG APP1 segment is small (the
//! segment length is a 16-bit field), so the whole region is held in
//! memory and every read is bounds-checked against it.

use std::io::Cursor;

use crate::exif::errors::{ExifError, ExifResult};
use crate::io::byte_order::{ByteOrder, ByteOrderHandler};

/// A loaded TIFF byte region with a fixed byte order
///
/// The buffer is the sole owner of the region's bytes for the lifetime
/// of a parse; directory structures hold offsets into it, never copies.
pub struct TiffBuffer {
    /// Raw bytes of the TIFF region
    data: Vec<u8>,
    /// Byte order detected from the region's first byte
    byte_order: ByteOrder,
    /// Handler for reads in the detected byte order
    handler: Box<dyn ByteOrderHandler>,
}

impl TiffBuffer {
    /// Creates a buffer over a TIFF region, detecting its byte order
    /// from byte 0 ('I' for Intel, 'M' for Motorola)
    pub fn new(data: Vec<u8>) -> ExifResult<Self> {
        let marker = data
            .first()
            .copied()
            .ok_or_else(|| ExifError::GenericError("Empty TIFF region".to_string()))?;

        let byte_order = ByteOrder::detect(marker)?;
        let handler = byte_order.create_handler();

        Ok(TiffBuffer {
            data,
            byte_order,
            handler,
        })
    }

    /// Returns the byte order of this region
    pub fn byte_order(&self) -> ByteOrder {
        self.byte_order
    }

    /// Returns the length of the region in bytes
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the region is empty
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Reads an integer of `length` bytes at `offset` in the region's
    /// byte order
    ///
    /// With `signed` set, the most significant bit of the raw value is
    /// treated as a two's-complement sign bit. A read crossing the end
    /// of the region fails with OutOfBounds; there is no truncation.
    pub fn read_int(&self, offset: u64, length: usize, signed: bool) -> ExifResult<i64> {
        if !matches!(length, 1 | 2 | 4 | 8) {
            return Err(ExifError::InvalidLength(length));
        }
        self.check_bounds(offset, length)?;

        let start = offset as usize;
        let mut cursor = Cursor::new(&self.data[start..start + length]);

        let value = if signed {
            self.handler.read_int(&mut cursor, length)?
        } else {
            self.handler.read_uint(&mut cursor, length)? as i64
        };
        Ok(value)
    }

    /// Returns `count` raw bytes starting at `offset`
    pub fn raw_bytes(&self, offset: u64, count: usize) -> ExifResult<&[u8]> {
        self.check_bounds(offset, count)?;
        let start = offset as usize;
        Ok(&self.data[start..start + count])
    }

    fn check_bounds(&self, offset: u64, length: usize) -> ExifResult<()> {
        let end = offset.checked_add(length as u64);
        match end {
            Some(end) if end <= self.data.len() as u64 => Ok(()),
            _ => Err(ExifError::OutOfBounds {
                offset,
                length,
                len: self.data.len(),
            }),
        }
    }
}
