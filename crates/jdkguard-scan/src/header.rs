use camino::{Utf8Path, Utf8PathBuf};
use std::fs::File;
use std::io::Read;
use thiserror::Error;

/// Artifact whose version header could not be decoded.
///
/// Covers both unreadable files and files shorter than the 8-byte header.
#[derive(Debug, Error)]
#[error("malformed artifact {path}: {reason}")]
pub struct MalformedArtifact {
    pub path: Utf8PathBuf,
    pub reason: String,
}

/// Decode the class-file major version from the first 8 header bytes.
///
/// Bytes 0-3 are the magic, 4-5 the minor version; bytes 6-7 carry the
/// big-endian u16 major version. One sequential read of exactly 8 bytes;
/// the handle is released on every exit path. A file shorter than 8 bytes
/// is malformed, never decoded as garbage.
pub fn extract_major_version(path: &Utf8Path) -> Result<u16, MalformedArtifact> {
    let mut file = File::open(path).map_err(|err| MalformedArtifact {
        path: path.to_owned(),
        reason: format!("open failed: {err}"),
    })?;

    let mut header = [0u8; 8];
    file.read_exact(&mut header).map_err(|err| MalformedArtifact {
        path: path.to_owned(),
        reason: format!("header shorter than 8 bytes: {err}"),
    })?;

    Ok(u16::from_be_bytes([header[6], header[7]]))
}
