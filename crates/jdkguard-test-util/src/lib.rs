//! Shared test fixtures for the jdkguard workspace.
//!
//! Builders for synthetic class files so scan and pipeline tests never need
//! a real JDK on the machine. Kept as a plain crate (not `#[cfg(test)]`
//! modules) because several member crates share these helpers through
//! dev-dependencies.

#![forbid(unsafe_code)]

use camino::Utf8Path;

/// Minimal valid 8-byte class-file header: magic, zero minor, and the given
/// big-endian major version.
pub fn class_file_bytes(major: u16) -> Vec<u8> {
    let mut bytes = vec![0xCA, 0xFE, 0xBA, 0xBE, 0x00, 0x00];
    bytes.extend_from_slice(&major.to_be_bytes());
    bytes
}

/// Write a synthetic class file at `path`, creating parent directories.
pub fn write_class_file(path: &Utf8Path, major: u16) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    std::fs::write(path, class_file_bytes(major)).expect("write class file");
}

/// Write a class file truncated to `len` bytes (at most 8), for exercising
/// the malformed-artifact path.
pub fn write_truncated_class_file(path: &Utf8Path, len: usize) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("create parent");
    }
    let bytes = class_file_bytes(0);
    std::fs::write(path, &bytes[..len.min(bytes.len())]).expect("write truncated class file");
}
