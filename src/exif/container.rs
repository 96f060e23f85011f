//! JPEG/Exif container parsing
//!
//! Validates the APP1 segment framing, extracts the TIFF region and
//! drives the directory walk across the top-level IFD chain and the
//! pointer-referenced sub-IFDs (Exif, GPS, Interoperability).

use log::{debug, info};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::exif::buffer::TiffBuffer;
use crate::exif::constants::{markers, tags};
use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::ifd::{Ifd, IfdEntry, IfdKind};
use crate::exif::value::TagValueDecoder;
use crate::exif::walker::IfdWalker;
use crate::io::byte_order::ByteOrder;
use crate::io::seekable::SeekableReader;

/// Decoded Exif metadata for one file
#[derive(Debug)]
pub struct ExifData {
    /// Byte order of the TIFF region
    pub byte_order: ByteOrder,
    /// APP1 segment length as declared in the JPEG header
    pub segment_length: u16,
    /// Decoded directories in document order
    pub ifds: Vec<(IfdKind, Ifd)>,
}

impl ExifData {
    /// Looks up a tag in the main image directory, falling back to
    /// its Exif sub-directory
    pub fn get(&self, tag: u16) -> Option<&IfdEntry> {
        for kind in [IfdKind::Main, IfdKind::ExifSub] {
            let entry = self
                .ifds
                .iter()
                .find(|(k, _)| *k == kind)
                .and_then(|(_, ifd)| ifd.get_entry(tag));
            if entry.is_some() {
                return entry;
            }
        }
        None
    }

    /// Returns the directory tagged with the given kind, if present
    pub fn ifd(&self, kind: IfdKind) -> Option<&Ifd> {
        self.ifds.iter().find(|(k, _)| *k == kind).map(|(_, ifd)| ifd)
    }

    /// Returns the number of decoded directories
    pub fn ifd_count(&self) -> usize {
        self.ifds.len()
    }
}

/// Reader for JPEG-embedded Exif segments
pub struct ExifReader;

impl ExifReader {
    /// Creates a new Exif reader
    pub fn new() -> Self {
        ExifReader
    }

    /// Loads Exif metadata from a JPEG file
    pub fn load(&self, filepath: &str) -> ExifResult<ExifData> {
        info!("Loading Exif data from: {}", filepath);

        let file = File::open(Path::new(filepath))?;
        let mut reader = BufReader::new(file);
        self.read(&mut reader)
    }

    /// Reads an Exif segment from the given reader
    ///
    /// Validates the JPEG SOI+APP1 framing and the "Exif" identifier,
    /// extracts the TIFF region using the segment's big-endian length
    /// field, and decodes every directory in it.
    pub fn read(&self, reader: &mut dyn SeekableReader) -> ExifResult<ExifData> {
        let mut prefix = [0u8; 12];
        reader.read_exact(&mut prefix)?;

        if prefix[0..4] != markers::SOI_APP1 || &prefix[6..10] != markers::EXIF_IDENTIFIER {
            return Err(ExifError::NotAnExifFile);
        }

        // The length field is big-endian regardless of the TIFF byte
        // order, and counts itself plus the "Exif\0\0" identifier.
        let segment_length = u16::from_be_bytes([prefix[4], prefix[5]]);
        let tiff_len = (segment_length as usize)
            .checked_sub(markers::TIFF_REGION_PREFIX)
            .ok_or(ExifError::NotAnExifFile)?;
        debug!("Exif header length: {} bytes", segment_length);

        let mut data = vec![0u8; tiff_len];
        reader.read_exact(&mut data)?;

        let buffer = TiffBuffer::new(data)?;
        info!("TIFF region: {} bytes, {} format", buffer.len(), buffer.byte_order().name());

        let ifds = self.decode_directories(&buffer)?;
        Ok(ExifData {
            byte_order: buffer.byte_order(),
            segment_length,
            ifds,
        })
    }

    /// Walks the top-level IFD chain and resolves sub-IFD pointers
    ///
    /// The format nests at most three levels deep: a top-level IFD may
    /// point at an Exif sub-IFD, which may point at an Interoperability
    /// directory; GPS hangs off the top level as a sibling branch.
    fn decode_directories(&self, buffer: &TiffBuffer) -> ExifResult<Vec<(IfdKind, Ifd)>> {
        let walker = IfdWalker::new(buffer);
        let decoder = TagValueDecoder::new(buffer);

        let mut ifds = Vec::new();
        for (index, &offset) in walker.list_ifds()?.iter().enumerate() {
            let ifd = decoder.decode_ifd(offset, index)?;
            debug!("IFD #{} at offset {}: {} entries", index, offset, ifd.entry_count());

            let exif_offset = ifd.pointer_value(tags::EXIF_IFD_POINTER);
            let gps_offset = ifd.pointer_value(tags::GPS_INFO_IFD_POINTER);
            ifds.push((IfdKind::for_index(index), ifd));

            if let Some(sub_offset) = exif_offset {
                debug!("Exif sub-IFD at offset {}", sub_offset);
                let sub = decoder.decode_ifd(sub_offset, index)?;
                let interop_offset = sub.pointer_value(tags::INTEROPERABILITY_IFD_POINTER);
                ifds.push((IfdKind::ExifSub, sub));

                if let Some(io_offset) = interop_offset {
                    debug!("Interoperability IFD at offset {}", io_offset);
                    ifds.push((IfdKind::Interop, decoder.decode_ifd(io_offset, index)?));
                }
            }

            if let Some(gps) = gps_offset {
                debug!("GPS sub-IFD at offset {}", gps);
                ifds.push((IfdKind::Gps, decoder.decode_ifd(gps, index)?));
            }
        }
        Ok(ifds)
    }
}

impl Default for ExifReader {
    fn default() -> Self {
        ExifReader::new()
    }
}
