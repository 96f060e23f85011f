//! CLI command implementations
//!
//! This module contains implementations of the commands supported by
//! the CLI application using the Command pattern.

pub mod command_traits;
pub mod dump_command;

pub use command_traits::{Command, CommandFactory};
pub use dump_command::DumpCommand;

use clap::ArgMatches;
use crate::exif::errors::ExifResult;
use crate::utils::logger::Logger;

/// Factory for creating command instances based on CLI arguments
pub struct ExifkitCommandFactory;

impl ExifkitCommandFactory {
    /// Create a new factory instance
    pub fn new() -> Self {
        ExifkitCommandFactory
    }
}

impl<'a> CommandFactory<'a> for ExifkitCommandFactory {
    fn create_command(&self, args: &ArgMatches, logger: &'a Logger) -> ExifResult<Box<dyn Command + 'a>> {
        Ok(Box::new(DumpCommand::new(args, logger)?))
    }
}
