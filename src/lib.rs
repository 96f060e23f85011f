pub mod io;
pub mod exif;
pub mod utils;
pub mod commands;
pub mod api;

pub use crate::api::ExifKit;

pub use exif::{ExifData, ExifReader, ExifError, ExifResult};
pub use exif::{Ifd, IfdEntry, IfdKind, Rational, TagNamespace, TagValue};
