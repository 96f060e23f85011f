//! Output formatting for decoded Exif data
//!
//! Renders decoded directories the way the CLI presents them: a
//! heading per directory, then one line per tag with a resolved name,
//! a type abbreviation and a repr-style value. The decoding core
//! never formats anything itself.

use crate::exif::constants::type_codes;
use crate::exif::ifd::{Ifd, IfdKind, TagValue};
use crate::exif::tags;

/// Returns the single-letter abbreviation for a field type
pub fn type_abbreviation(type_code: u16) -> &'static str {
    match type_code {
        type_codes::BYTE => "B",
        type_codes::ASCII => "A",
        type_codes::SHORT => "S",
        type_codes::LONG => "L",
        type_codes::RATIONAL => "R",
        type_codes::SBYTE => "SB",
        type_codes::UNDEFINED => "U",
        type_codes::SSHORT => "SS",
        type_codes::SLONG => "SL",
        type_codes::SRATIONAL => "SR",
        _ => "?",
    }
}

/// Renders a decoded value in repr style
///
/// Text values are quoted, numbers and rationals print as lists.
pub fn format_value(value: &TagValue) -> String {
    match value {
        TagValue::Text(text) => format!("{:?}", text),
        TagValue::Numbers(values) => format!("{:?}", values),
        TagValue::Rationals(values) => {
            let parts: Vec<String> = values.iter().map(|r| r.to_string()).collect();
            format!("[{}]", parts.join(", "))
        }
    }
}

/// Returns the heading line for a directory
pub fn format_heading(kind: IfdKind, offset: u64) -> String {
    match kind {
        IfdKind::Main => format!(" IFD 0 (main image) at offset {}:", offset),
        IfdKind::Thumbnail => format!(" IFD 1 (thumbnail) at offset {}:", offset),
        IfdKind::Page(n) => format!(" IFD {} at offset {}:", n, offset),
        IfdKind::ExifSub => format!(" Exif SubIFD at offset {}:", offset),
        IfdKind::Interop => format!(" Exif Interoperability SubSubIFD at offset {}:", offset),
        IfdKind::Gps => format!(" GPS SubIFD at offset {}:", offset),
    }
}

/// Renders one directory with tag names resolved against the
/// namespace its kind selects
pub fn format_ifd(kind: IfdKind, ifd: &Ifd) -> String {
    let namespace = kind.namespace();

    let mut out = String::new();
    out.push_str(&format_heading(kind, ifd.offset));
    out.push('\n');

    for entry in &ifd.entries {
        out.push_str(&format!(
            "  {}({})={}\n",
            tags::tag_display_name(namespace, entry.tag),
            type_abbreviation(entry.type_code),
            format_value(&entry.value)
        ));
    }
    out
}
