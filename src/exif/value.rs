//! Directory entry value decoding
//!
//! Decodes 12-byte directory entries into materialized tag values,
//! resolving TIFF's inline-vs-indirect storage rule: values whose
//! total size fits in the entry's 4-byte value field are stored there
//! directly, larger values live elsewhere in the region and the field
//! holds their absolute offset.

use log::debug;

use crate::exif::buffer::TiffBuffer;
use crate::exif::constants::{entry, type_codes};
use crate::exif::errors::ExifResult;
use crate::exif::ifd::{Ifd, IfdEntry, Rational, TagValue};

/// Decodes directory entries of a TIFF region into tag values
pub struct TagValueDecoder<'a> {
    buffer: &'a TiffBuffer,
}

impl<'a> TagValueDecoder<'a> {
    /// Creates a decoder over the given buffer
    pub fn new(buffer: &'a TiffBuffer) -> Self {
        TagValueDecoder { buffer }
    }

    /// Decodes the directory at `ifd_offset` into an Ifd
    ///
    /// Entries with an unsupported field type are dropped from the
    /// result; everything else is fully materialized.
    pub fn decode_ifd(&self, ifd_offset: u64, number: usize) -> ExifResult<Ifd> {
        let entries = self.buffer.read_int(ifd_offset, 2, false)? as u64;
        debug!("Decoding IFD #{} at offset {}: {} entries", number, ifd_offset, entries);

        let mut ifd = Ifd::new(number, ifd_offset);
        for i in 0..entries {
            let entry_offset = ifd_offset + 2 + entry::SIZE * i;
            if let Some(decoded) = self.decode_entry(entry_offset)? {
                ifd.add_entry(decoded);
            }
        }
        Ok(ifd)
    }

    /// Decodes the 12-byte directory entry at `entry_offset`
    ///
    /// Returns None when the field type is outside the ten codes the
    /// format defines; such entries are skipped rather than failing
    /// the surrounding directory.
    pub fn decode_entry(&self, entry_offset: u64) -> ExifResult<Option<IfdEntry>> {
        let tag = self.buffer.read_int(entry_offset, 2, false)? as u16;
        let type_code = self.buffer.read_int(entry_offset + 2, 2, false)? as u16;

        let typelen = match type_codes::size(type_code) {
            Ok(len) => len,
            Err(e) => {
                debug!("Dropping tag {:#06x}: {}", tag, e);
                return Ok(None);
            }
        };

        let count = self.buffer.read_int(entry_offset + 4, 4, false)? as u32;

        let total_bytes = count as u64 * typelen as u64;
        let mut offset = entry_offset + entry::VALUE_FIELD;
        if total_bytes > entry::INLINE_LIMIT {
            offset = self.buffer.read_int(offset, 4, false)? as u64;
        }

        let value = self.decode_value(type_code, typelen, count, offset)?;
        Ok(Some(IfdEntry::new(tag, type_code, count, value)))
    }

    fn decode_value(
        &self,
        type_code: u16,
        typelen: usize,
        count: u32,
        offset: u64,
    ) -> ExifResult<TagValue> {
        match type_code {
            type_codes::ASCII => self.decode_text(offset, count),
            type_codes::RATIONAL | type_codes::SRATIONAL => {
                self.decode_rationals(offset, count, is_signed(type_code))
            }
            _ => self.decode_numbers(offset, typelen, count, is_signed(type_code)),
        }
    }

    /// NUL-terminated ASCII: `count` covers the terminator, which is
    /// not part of the text. Interior NULs are kept as-is.
    fn decode_text(&self, offset: u64, count: u32) -> ExifResult<TagValue> {
        let text_len = (count as usize).saturating_sub(1);
        let bytes = self.buffer.raw_bytes(offset, text_len)?;
        Ok(TagValue::Text(String::from_utf8_lossy(bytes).into_owned()))
    }

    fn decode_numbers(
        &self,
        offset: u64,
        typelen: usize,
        count: u32,
        signed: bool,
    ) -> ExifResult<TagValue> {
        let mut values = Vec::with_capacity(count as usize);
        let mut cursor = offset;
        for _ in 0..count {
            values.push(self.buffer.read_int(cursor, typelen, signed)?);
            cursor += typelen as u64;
        }
        Ok(TagValue::Numbers(values))
    }

    /// Rational values are pairs of 4-byte integers, numerator first
    fn decode_rationals(&self, offset: u64, count: u32, signed: bool) -> ExifResult<TagValue> {
        let mut values = Vec::with_capacity(count as usize);
        let mut cursor = offset;
        for _ in 0..count {
            let num = self.buffer.read_int(cursor, 4, signed)?;
            let den = self.buffer.read_int(cursor + 4, 4, signed)?;
            values.push(Rational::new(num, den));
            cursor += 8;
        }
        Ok(TagValue::Rationals(values))
    }
}

/// Sign extension applies to SBYTE, SSHORT, SLONG and SRATIONAL only
fn is_signed(type_code: u16) -> bool {
    type_code == type_codes::SBYTE || type_code >= type_codes::SSHORT
}
