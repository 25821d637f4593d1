use anyhow::Context;
use camino::Utf8PathBuf;
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::PathBuf;
use walkdir::WalkDir;

/// Include filter for candidate artifacts, built from a file extension.
#[derive(Clone, Debug)]
pub struct ArtifactFilter {
    set: GlobSet,
}

impl ArtifactFilter {
    /// Filter matching `**/*.{extension}`. A leading dot is tolerated so
    /// `"class"` and `".class"` configure the same filter.
    pub fn for_extension(extension: &str) -> anyhow::Result<Self> {
        let extension = extension.trim_start_matches('.');
        if extension.is_empty() {
            anyhow::bail!("artifact extension must not be empty");
        }
        let mut builder = GlobSetBuilder::new();
        builder.add(
            Glob::new(&format!("**/*.{extension}"))
                .with_context(|| format!("compile artifact filter for extension {extension}"))?,
        );
        let set = builder.build().context("build artifact filter")?;
        Ok(Self { set })
    }

    pub fn matches(&self, path: &Utf8PathBuf) -> bool {
        self.set.is_match(path.as_str())
    }
}

/// Artifacts found under the scan roots, in discovery order, plus non-fatal
/// diagnostics for entries the walk had to skip.
#[derive(Clone, Debug, Default)]
pub struct Located {
    pub artifacts: Vec<Utf8PathBuf>,
    pub diagnostics: Vec<String>,
}

/// Recursively discover candidate artifacts under `roots`.
///
/// A root that does not exist contributes zero artifacts and is not an
/// error. An unreadable directory entry is skipped with a diagnostic; the
/// scan continues. Traversal order within a root is filesystem-dependent;
/// callers may rely only on set membership and count.
pub fn locate_artifacts(roots: &[Utf8PathBuf], filter: &ArtifactFilter) -> Located {
    let mut located = Located::default();

    for root in roots {
        if !root.as_std_path().exists() {
            continue;
        }

        for entry in WalkDir::new(root) {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    let Some(path) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
                        located
                            .diagnostics
                            .push(format!("skipping non-UTF-8 path under {root}"));
                        continue;
                    };
                    if filter.matches(&path) {
                        located.artifacts.push(path);
                    }
                }
                Ok(_) => {}
                Err(err) => {
                    located
                        .diagnostics
                        .push(format!("skipping unreadable entry under {root}: {err}"));
                }
            }
        }
    }

    located
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
