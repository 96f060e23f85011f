//! Exif metadata decoding module
//!
//! This module provides structures and functions for decoding the
//! TIFF-structured Exif segment embedded in JPEG files.

pub mod errors;
pub mod ifd;
pub mod buffer;
pub mod walker;
pub mod value;
pub mod container;
pub mod tags;
pub(crate) mod constants;
#[cfg(test)]
mod tests;

pub use crate::io::byte_order::{BigEndianHandler, ByteOrder, ByteOrderHandler, LittleEndianHandler};
pub use errors::{ExifError, ExifResult};
pub use ifd::{Ifd, IfdEntry, IfdKind, Rational, TagNamespace, TagValue};
pub use buffer::TiffBuffer;
pub use walker::IfdWalker;
pub use value::TagValueDecoder;
pub use container::{ExifData, ExifReader};
pub use tags::{tag_display_name, TagDefinitions};
