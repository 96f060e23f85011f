//! IFD chain traversal
//!
//! Top-level IFDs form a singly-linked chain inside the TIFF region:
//! the header holds the offset of the first directory, and each
//! directory ends with the offset of the next (zero terminates the
//! chain). The walk is a pure function of the buffer and restartable.

use log::{debug, warn};

use crate::exif::buffer::TiffBuffer;
use crate::exif::constants::{entry, header, limits};
use crate::exif::errors::{ExifError, ExifResult};

/// Walks the chain of top-level IFDs in a TIFF region
pub struct IfdWalker<'a> {
    buffer: &'a TiffBuffer,
}

impl<'a> IfdWalker<'a> {
    /// Creates a walker over the given buffer
    pub fn new(buffer: &'a TiffBuffer) -> Self {
        IfdWalker { buffer }
    }

    /// Reads the offset of the first IFD from the TIFF header
    pub fn first_ifd_offset(&self) -> ExifResult<u64> {
        Ok(self.buffer.read_int(header::FIRST_IFD_OFFSET, 4, false)? as u64)
    }

    /// Reads the entry count of the IFD at `ifd_offset`
    pub fn entry_count(&self, ifd_offset: u64) -> ExifResult<u64> {
        Ok(self.buffer.read_int(ifd_offset, 2, false)? as u64)
    }

    /// Reads the next-IFD offset stored immediately after the last
    /// entry of the IFD at `ifd_offset`
    pub fn next_ifd_offset(&self, ifd_offset: u64) -> ExifResult<u64> {
        let entries = self.entry_count(ifd_offset)?;
        let position = ifd_offset + 2 + entry::SIZE * entries;
        Ok(self.buffer.read_int(position, 4, false)? as u64)
    }

    /// Collects the ordered chain of top-level IFD offsets
    ///
    /// Follows next-pointers starting from the header's first-IFD
    /// offset until the zero sentinel. The walk is capped: a chain
    /// longer than the cap can only come from a self-referential or
    /// otherwise broken next-pointer and fails with MalformedChain.
    pub fn list_ifds(&self) -> ExifResult<Vec<u64>> {
        let mut offsets = Vec::new();
        let mut offset = self.first_ifd_offset()?;

        while offset != 0 {
            if offsets.len() >= limits::MAX_IFD_CHAIN {
                warn!("IFD chain exceeds {} directories, aborting walk", limits::MAX_IFD_CHAIN);
                return Err(ExifError::MalformedChain(offset));
            }

            debug!("Found IFD at offset {}", offset);
            offsets.push(offset);
            offset = self.next_ifd_offset(offset)?;
        }

        Ok(offsets)
    }
}
