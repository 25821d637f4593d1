use crate::header::{extract_major_version, MalformedArtifact};
use camino::Utf8PathBuf;
use rayon::prelude::*;

/// One located artifact with its decoded header.
#[derive(Debug)]
pub struct ScannedArtifact {
    pub path: Utf8PathBuf,
    pub version: Result<u16, MalformedArtifact>,
}

/// Decode headers across the rayon worker pool.
///
/// Extraction is independent per artifact: no shared mutable state, one
/// file handle per artifact, released before the worker moves on. Workers
/// tag each result with its discovery index and the output is re-sorted by
/// that index, so the returned order always matches discovery order no
/// matter how the pool interleaved the work.
pub fn scan_artifacts(artifacts: Vec<Utf8PathBuf>) -> Vec<ScannedArtifact> {
    let mut scanned: Vec<(usize, ScannedArtifact)> = artifacts
        .into_par_iter()
        .enumerate()
        .map(|(index, path)| {
            let version = extract_major_version(&path);
            (index, ScannedArtifact { path, version })
        })
        .collect();

    scanned.sort_by_key(|(index, _)| *index);
    scanned.into_iter().map(|(_, artifact)| artifact).collect()
}
