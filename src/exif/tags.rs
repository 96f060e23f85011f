//! Exif tag name definitions and utilities
//!
//! The three namespace tables (main/Exif, GPS, Interoperability) are
//! external data: an embedded TOML document parsed once at startup,
//! not logic. Unknown ids render as a hexadecimal fallback name.

use std::collections::HashMap;
use std::fs;

use lazy_static::lazy_static;

use crate::exif::errors::{ExifError, ExifResult};
use crate::exif::ifd::TagNamespace;

lazy_static! {
    // Parse the TOML file at startup
    static ref TAG_DEFINITIONS: TagDefinitions = {
        let content = include_str!("../../exif_tags.toml");
        TagDefinitions::from_str(content).unwrap_or_else(|e| {
            eprintln!("Warning: Failed to parse Exif tag definitions: {}", e);
            TagDefinitions::default()
        })
    };
}

/// Container for the tag id-to-name tables
#[derive(Debug, Default)]
pub struct TagDefinitions {
    // Maps main/Exif tag IDs to tag names
    pub exif_names: HashMap<u16, String>,
    // Maps GPS tag IDs to tag names
    pub gps_names: HashMap<u16, String>,
    // Maps Interoperability tag IDs to tag names
    pub interop_names: HashMap<u16, String>,
}

impl TagDefinitions {
    /// Parse tag definitions from a TOML string
    pub fn from_str(content: &str) -> ExifResult<Self> {
        let toml_value: toml::Value = match content.parse() {
            Ok(value) => value,
            Err(e) => return Err(ExifError::GenericError(format!("Failed to parse TOML: {}", e))),
        };

        let mut defs = TagDefinitions::default();

        Self::parse_name_table(&toml_value, "exif_tags", &mut defs.exif_names);
        Self::parse_name_table(&toml_value, "gps_tags", &mut defs.gps_names);
        Self::parse_name_table(&toml_value, "interop_tags", &mut defs.interop_names);

        Ok(defs)
    }

    /// Helper to parse one name table from TOML
    fn parse_name_table(toml_value: &toml::Value, table_name: &str, target: &mut HashMap<u16, String>) {
        if let Some(table) = toml_value.get(table_name).and_then(|v| v.as_table()) {
            for (k, v) in table {
                if let (Ok(id), Some(name)) = (k.parse::<u16>(), v.as_str()) {
                    target.insert(id, name.to_string());
                }
            }
        }
    }

    /// Load tag definitions from a TOML file
    pub fn from_file(path: &str) -> ExifResult<Self> {
        let contents = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => return Err(ExifError::IoError(e)),
        };

        Self::from_str(&contents)
    }

    /// Get a tag name within a namespace
    ///
    /// Unresolved ids get the hexadecimal fallback form.
    pub fn tag_name(&self, namespace: TagNamespace, tag: u16) -> String {
        let table = match namespace {
            TagNamespace::Exif => &self.exif_names,
            TagNamespace::Gps => &self.gps_names,
            TagNamespace::Interop => &self.interop_names,
        };

        table
            .get(&tag)
            .cloned()
            .unwrap_or_else(|| format!("0x{:04X}", tag))
    }
}

/// Get a tag display name from the embedded definitions
pub fn tag_display_name(namespace: TagNamespace, tag: u16) -> String {
    TAG_DEFINITIONS.tag_name(namespace, tag)
}
