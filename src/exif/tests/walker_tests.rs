//! Tests for the IFD chain walker

use crate::exif::buffer::TiffBuffer;
use crate::exif::errors::ExifError;
use crate::exif::tests::test_utils::{build_minimal_tiff, put_u16_le, put_u32_le};
use crate::exif::walker::IfdWalker;

/// Builds a region whose header points at a chain of empty IFDs at
/// the given offsets, each linking to the next and the last to zero
fn build_chain_region(offsets: &[usize]) -> Vec<u8> {
    let mut data = vec![0u8; 300];
    data[0] = b'I';
    data[1] = b'I';
    put_u16_le(&mut data, 2, 42);
    put_u32_le(&mut data, 4, offsets[0] as u32);

    for (i, &offset) in offsets.iter().enumerate() {
        let next = offsets.get(i + 1).copied().unwrap_or(0);
        put_u16_le(&mut data, offset, 0); // entry count
        put_u32_le(&mut data, offset + 2, next as u32);
    }
    data
}

#[test]
fn reads_first_ifd_offset_from_header() {
    let buffer = TiffBuffer::new(build_minimal_tiff()).unwrap();
    let walker = IfdWalker::new(&buffer);

    assert_eq!(walker.first_ifd_offset().unwrap(), 8);
}

#[test]
fn reads_entry_count_and_next_offset() {
    let buffer = TiffBuffer::new(build_minimal_tiff()).unwrap();
    let walker = IfdWalker::new(&buffer);

    assert_eq!(walker.entry_count(8).unwrap(), 2);
    // Two 12-byte entries, so the next pointer sits at 8 + 2 + 24
    assert_eq!(walker.next_ifd_offset(8).unwrap(), 0);
}

#[test]
fn collects_chain_until_zero_sentinel() {
    let buffer = TiffBuffer::new(build_chain_region(&[100, 250])).unwrap();
    let walker = IfdWalker::new(&buffer);

    assert_eq!(walker.list_ifds().unwrap(), vec![100, 250]);
}

#[test]
fn single_ifd_chain() {
    let buffer = TiffBuffer::new(build_minimal_tiff()).unwrap();
    let walker = IfdWalker::new(&buffer);

    assert_eq!(walker.list_ifds().unwrap(), vec![8]);
}

#[test]
fn self_referential_chain_is_malformed() {
    // IFD at 100 whose next pointer loops back to itself
    let mut data = vec![0u8; 200];
    data[0] = b'I';
    data[1] = b'I';
    put_u16_le(&mut data, 2, 42);
    put_u32_le(&mut data, 4, 100);
    put_u16_le(&mut data, 100, 0);
    put_u32_le(&mut data, 102, 100);

    let buffer = TiffBuffer::new(data).unwrap();
    let walker = IfdWalker::new(&buffer);

    assert!(matches!(walker.list_ifds(), Err(ExifError::MalformedChain(100))));
}

#[test]
fn chain_running_off_the_buffer_is_out_of_bounds() {
    let mut data = vec![0u8; 8];
    data[0] = b'I';
    data[1] = b'I';
    put_u16_le(&mut data, 2, 42);
    put_u32_le(&mut data, 4, 500); // beyond the region

    let buffer = TiffBuffer::new(data).unwrap();
    let walker = IfdWalker::new(&buffer);

    assert!(matches!(walker.list_ifds(), Err(ExifError::OutOfBounds { .. })));
}
