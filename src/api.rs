use log::info;

use crate::exif::container::{ExifData, ExifReader};
use crate::exif::errors::ExifResult;
use crate::utils::format_utils;
use crate::utils::logger::Logger;

/// Main interface to the ExifKit library
pub struct ExifKit {
    logger: Logger,
}

impl ExifKit {
    /// Create a new ExifKit instance
    ///
    /// # Arguments
    /// * `log_file` - Optional path to log file, defaults to "exifkit.log"
    ///
    /// # Returns
    /// An ExifKit instance or an error if initialization fails
    pub fn new(log_file: Option<&str>) -> ExifResult<Self> {
        let log_path = log_file.unwrap_or("exifkit.log");
        let logger = Logger::new(log_path)?;
        Ok(ExifKit { logger })
    }

    /// Decode the Exif segment of a JPEG file
    ///
    /// # Arguments
    /// * `input_path` - Path to the JPEG file to decode
    ///
    /// # Returns
    /// The decoded directories, or an error for this file
    pub fn parse(&self, input_path: &str) -> ExifResult<ExifData> {
        info!("Parsing Exif data from {}", input_path);

        let data = ExifReader::new().load(input_path)?;
        self.logger.log(&format!(
            "Decoded {} directories from {}",
            data.ifd_count(),
            input_path
        ))?;
        Ok(data)
    }

    /// Decode a file and render its metadata as display text
    ///
    /// Produces the same report the CLI prints: header summary, then
    /// each directory with resolved tag names and repr-style values.
    ///
    /// # Arguments
    /// * `input_path` - Path to the JPEG file to decode
    ///
    /// # Returns
    /// String containing the formatted metadata or an error
    pub fn dump(&self, input_path: &str) -> ExifResult<String> {
        let data = self.parse(input_path)?;

        let mut result = format!(
            "Exif header length: {} bytes, {} format\n",
            data.segment_length,
            data.byte_order.name()
        );
        for (kind, ifd) in &data.ifds {
            result.push_str(&format_utils::format_ifd(*kind, ifd));
        }

        Ok(result)
    }
}
