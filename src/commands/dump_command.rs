//! Exif dump command
//!
//! This module implements the batch driver: every input file is
//! decoded and printed independently, so a failure on one file never
//! stops the rest of the batch.

use clap::ArgMatches;
use log::{debug, error};

use crate::commands::command_traits::Command;
use crate::exif::container::ExifReader;
use crate::exif::errors::{ExifError, ExifResult};
use crate::utils::format_utils;
use crate::utils::logger::Logger;

/// Command for dumping Exif metadata from JPEG files
pub struct DumpCommand<'a> {
    /// Paths of the input files, in argument order
    input_files: Vec<String>,
    /// Whether to enable verbose output
    verbose: bool,
    /// Logger for recording operations
    logger: &'a Logger,
}

impl<'a> DumpCommand<'a> {
    /// Create a new dump command
    ///
    /// # Arguments
    /// * `args` - CLI argument matches from clap
    /// * `logger` - Logger for recording operations
    pub fn new(args: &ArgMatches, logger: &'a Logger) -> ExifResult<Self> {
        let input_files: Vec<String> = args
            .get_many::<String>("files")
            .ok_or_else(|| ExifError::GenericError("Missing input files".to_string()))?
            .cloned()
            .collect();

        let verbose = args.get_flag("verbose");

        Ok(DumpCommand {
            input_files,
            verbose,
            logger,
        })
    }

    /// Decodes one file and prints its directories
    fn dump_file(&self, filename: &str) -> ExifResult<()> {
        let reader = ExifReader::new();
        let data = reader.load(filename)?;

        println!(" Exif header length: {} bytes, {} format",
                 data.segment_length, data.byte_order.name());

        for (kind, ifd) in &data.ifds {
            print!("{}", format_utils::format_ifd(*kind, ifd));
        }
        Ok(())
    }
}

impl<'a> Command for DumpCommand<'a> {
    fn execute(&self) -> ExifResult<()> {
        if self.verbose {
            debug!("Verbose mode enabled");
        }

        let mut failures = 0;
        for filename in &self.input_files {
            println!("{}:", filename);

            if let Err(e) = self.dump_file(filename) {
                match e {
                    ExifError::NotAnExifFile => println!(" Not an Exif file"),
                    ExifError::IoError(ref io_err) => println!(" Cannot open file: {}", io_err),
                    ref other => println!(" Decode error: {}", other),
                }
                error!("Failed to decode {}: {}", filename, e);
                failures += 1;
            }
        }

        self.logger.log(&format!(
            "Processed {} files, {} failures",
            self.input_files.len(),
            failures
        ))?;

        if failures > 0 {
            return Err(ExifError::GenericError(format!(
                "{} of {} files failed to decode",
                failures,
                self.input_files.len()
            )));
        }
        Ok(())
    }
}
