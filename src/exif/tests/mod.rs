//! Unit tests for the Exif decoding engine

mod test_utils;
mod byte_order_tests;
mod walker_tests;
