//! Image File Directory (IFD) structures and methods
//!
//! This module implements the decoded form of TIFF IFDs as they appear
//! inside an Exif segment. Each directory is a series of tag entries;
//! entries carry their values already materialized, so a directory
//! outlives the buffer walk that produced it.

use std::collections::HashMap;
use std::fmt;

use log::trace;

use crate::exif::constants::tags;

/// An unreduced numerator/denominator pair
///
/// Both halves share the signedness of the surrounding field type
/// (signed for SRATIONAL, unsigned for RATIONAL). The pair is kept
/// exactly as stored: no reduction, no division.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    pub num: i64,
    pub den: i64,
}

impl Rational {
    /// Creates a new rational value
    pub fn new(num: i64, den: i64) -> Self {
        Rational { num, den }
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Decoded value of a directory entry
///
/// A directory entry decodes to exactly one of these variants, chosen
/// by its field type. Render-time consumers must match exhaustively.
#[derive(Debug, Clone, PartialEq)]
pub enum TagValue {
    /// ASCII text with the trailing NUL terminator removed
    Text(String),
    /// Integer sequence, sign-extended where the field type is signed
    Numbers(Vec<i64>),
    /// Unreduced numerator/denominator pairs
    Rationals(Vec<Rational>),
}

/// Represents a decoded entry in an Image File Directory
///
/// Each entry describes one aspect of the image (dimensions, exposure,
/// timestamps, etc.) using a tag-value pair. Unlike the 12-byte wire
/// entry, the value here is already materialized.
#[derive(Debug, Clone, PartialEq)]
pub struct IfdEntry {
    /// TIFF tag identifier
    pub tag: u16,
    /// Field type code (1..=10)
    pub type_code: u16,
    /// Number of values of that type
    pub count: u32,
    /// The materialized value
    pub value: TagValue,
}

impl IfdEntry {
    /// Creates a new decoded IFD entry
    pub fn new(tag: u16, type_code: u16, count: u32, value: TagValue) -> Self {
        trace!("Decoded entry: tag={:#06x}, type={}, count={}", tag, type_code, count);

        Self {
            tag,
            type_code,
            count,
            value,
        }
    }

    /// Returns a human-readable description of this entry
    pub fn description(&self) -> String {
        format!("Tag: {:#06x}, Type: {}, Count: {}", self.tag, self.type_code, self.count)
    }
}

/// Represents an Image File Directory inside an Exif segment
#[derive(Debug, Clone)]
pub struct Ifd {
    /// Entries in this IFD, in wire order
    pub entries: Vec<IfdEntry>,
    /// IFD number (0-based, index within the top-level chain)
    pub number: usize,
    /// Offset of this IFD within the TIFF region
    pub offset: u64,
    /// Cached entry indices for quick lookup by tag
    tag_map: HashMap<u16, usize>,
}

impl Ifd {
    /// Creates a new empty IFD
    pub fn new(number: usize, offset: u64) -> Self {
        Self {
            entries: Vec::new(),
            number,
            offset,
            tag_map: HashMap::new(),
        }
    }

    /// Adds an entry to this IFD and updates the lookup cache
    pub fn add_entry(&mut self, entry: IfdEntry) {
        trace!("Adding entry to IFD #{}: {}", self.number, entry.description());

        self.tag_map.insert(entry.tag, self.entries.len());
        self.entries.push(entry);
    }

    /// Gets an entry by tag
    pub fn get_entry(&self, tag: u16) -> Option<&IfdEntry> {
        self.tag_map.get(&tag).map(|&index| &self.entries[index])
    }

    /// Checks if this IFD has a specific tag
    pub fn has_tag(&self, tag: u16) -> bool {
        self.tag_map.contains_key(&tag)
    }

    /// Gets the number of entries in this IFD
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Reads a sub-IFD pointer value from this directory
    ///
    /// A zero offset means the pointed-to directory is absent.
    pub fn pointer_value(&self, tag: u16) -> Option<u64> {
        match self.get_entry(tag)?.value {
            TagValue::Numbers(ref values) => values
                .first()
                .copied()
                .filter(|&v| v != 0)
                .map(|v| v as u64),
            _ => None,
        }
    }

    /// Gets the image dimensions if both tags are present
    pub fn dimensions(&self) -> Option<(i64, i64)> {
        let width = self.number_value(tags::IMAGE_WIDTH)?;
        let height = self.number_value(tags::IMAGE_LENGTH)?;
        Some((width, height))
    }

    fn number_value(&self, tag: u16) -> Option<i64> {
        match self.get_entry(tag)?.value {
            TagValue::Numbers(ref values) => values.first().copied(),
            _ => None,
        }
    }
}

/// Which directory of the segment a decoded Ifd represents
///
/// The container parser tags each directory it produces; the tag also
/// selects the name table the directory renders against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IfdKind {
    /// First top-level IFD (the main image)
    Main,
    /// Second top-level IFD (conventionally the thumbnail)
    Thumbnail,
    /// Any further top-level IFD
    Page(usize),
    /// Exif sub-IFD, pointed to from a top-level IFD
    ExifSub,
    /// GPS sub-IFD, pointed to from a top-level IFD
    Gps,
    /// Interoperability sub-IFD, pointed to from the Exif sub-IFD
    Interop,
}

impl IfdKind {
    /// Maps a top-level chain index to its conventional kind
    pub fn for_index(index: usize) -> Self {
        match index {
            0 => IfdKind::Main,
            1 => IfdKind::Thumbnail,
            n => IfdKind::Page(n),
        }
    }

    /// Which tag-name table this directory renders against
    pub fn namespace(&self) -> TagNamespace {
        match self {
            IfdKind::Gps => TagNamespace::Gps,
            IfdKind::Interop => TagNamespace::Interop,
            _ => TagNamespace::Exif,
        }
    }
}

/// Tag namespaces with distinct id-to-name tables
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagNamespace {
    /// Main/Exif tags (top-level IFDs and the Exif sub-IFD)
    Exif,
    /// GPS info tags
    Gps,
    /// Interoperability tags
    Interop,
}
