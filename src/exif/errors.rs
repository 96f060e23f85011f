//! Custom error types for Exif decoding

use std::fmt;
use std::io;

/// Exif-specific error types
#[derive(Debug)]
pub enum ExifError {
    /// I/O error
    IoError(io::Error),
    /// Input does not carry the JPEG SOI+APP1/Exif framing
    NotAnExifFile,
    /// TIFF header byte 0 is neither 'I' nor 'M'
    UnrecognizedByteOrder(u8),
    /// A read would cross the end of the TIFF region
    OutOfBounds {
        offset: u64,
        length: usize,
        len: usize,
    },
    /// Integer width outside the supported 1/2/4/8 bytes
    InvalidLength(usize),
    /// Field type outside the ten defined codes
    UnsupportedTypeCode(u16),
    /// IFD next-pointer chain exceeded the iteration cap
    MalformedChain(u64),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for ExifError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExifError::IoError(e) => write!(f, "I/O error: {}", e),
            ExifError::NotAnExifFile => write!(f, "Not an Exif file"),
            ExifError::UnrecognizedByteOrder(b) => {
                write!(f, "Unrecognized byte order marker: {:#04x}", b)
            }
            ExifError::OutOfBounds { offset, length, len } => {
                write!(f, "Read of {} bytes at offset {} crosses end of {}-byte region",
                       length, offset, len)
            }
            ExifError::InvalidLength(n) => write!(f, "Unsupported integer width: {} bytes", n),
            ExifError::UnsupportedTypeCode(t) => write!(f, "Unsupported field type: {}", t),
            ExifError::MalformedChain(offset) => {
                write!(f, "IFD chain exceeded iteration cap at offset {}", offset)
            }
            ExifError::GenericError(msg) => write!(f, "Exif error: {}", msg),
        }
    }
}

impl std::error::Error for ExifError {}

impl From<io::Error> for ExifError {
    fn from(error: io::Error) -> Self {
        ExifError::IoError(error)
    }
}

/// Result type for Exif operations
pub type ExifResult<T> = Result<T, ExifError>;

impl From<String> for ExifError {
    fn from(msg: String) -> Self {
        ExifError::GenericError(msg)
    }
}
