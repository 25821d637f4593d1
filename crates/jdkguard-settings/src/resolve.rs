use crate::{model::JdkguardConfigV1, vendors};
use anyhow::Context;
use camino::Utf8PathBuf;
use jdkguard_domain::Policy;
use jdkguard_types::versions::release_to_major;
use std::collections::BTreeMap;

pub const DEFAULT_VERSION: u32 = 21;
pub const DEFAULT_VENDOR: &str = "Amazon Corretto";
pub const DEFAULT_EXTENSION: &str = "class";
pub const DEFAULT_PREVIEW_LIMIT: usize = 10;

/// Conventional compiled-output directories checked when none are configured.
pub const DEFAULT_ROOTS: &[&str] = &["build/classes"];

/// Embedder-supplied overrides; take precedence over file config.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub version: Option<u32>,
    pub versions: Vec<u32>,
    pub vendor: Option<String>,
    pub roots: Vec<String>,
    pub preview_limit: Option<u32>,
}

/// Where and what to scan.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScanPlan {
    pub roots: Vec<Utf8PathBuf>,
    pub extension: String,
}

/// Everything one verification run needs, resolved once up front.
#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub policy: Policy,
    pub scan: ScanPlan,
    pub preview_limit: usize,
    /// Config-supplied additions to the built-in major -> label table.
    pub version_labels: BTreeMap<u16, String>,
}

/// Resolve file config + overrides into the immutable run configuration.
///
/// Release numbers are translated to class-file majors here, so the policy
/// compares like with like (config says 21, class files carry 65).
pub fn resolve_config(
    cfg: JdkguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let releases = resolve_releases(&cfg, &overrides);
    let vendor = overrides
        .vendor
        .clone()
        .or(cfg.vendor.clone())
        .unwrap_or_else(|| DEFAULT_VENDOR.to_string());

    let policy = Policy::new(
        releases.iter().map(|r| release_to_major(*r)),
        vendors::vendor_fragments(&vendor),
    );

    let roots = if !overrides.roots.is_empty() {
        overrides.roots.clone()
    } else if !cfg.roots.is_empty() {
        cfg.roots.clone()
    } else {
        DEFAULT_ROOTS.iter().map(|r| r.to_string()).collect()
    };

    let extension = cfg
        .extension
        .clone()
        .unwrap_or_else(|| DEFAULT_EXTENSION.to_string());

    let preview_limit = overrides
        .preview_limit
        .or(cfg.preview_limit)
        .map(|n| n as usize)
        .unwrap_or(DEFAULT_PREVIEW_LIMIT);

    let version_labels = parse_version_labels(&cfg.version_labels)?;

    Ok(ResolvedConfig {
        policy,
        scan: ScanPlan {
            roots: roots.into_iter().map(Utf8PathBuf::from).collect(),
            extension,
        },
        preview_limit,
        version_labels,
    })
}

fn resolve_releases(cfg: &JdkguardConfigV1, overrides: &Overrides) -> Vec<u32> {
    if !overrides.versions.is_empty() {
        return overrides.versions.clone();
    }
    if let Some(v) = overrides.version {
        return vec![v];
    }
    if !cfg.versions.is_empty() {
        return cfg.versions.clone();
    }
    vec![cfg.version.unwrap_or(DEFAULT_VERSION)]
}

fn parse_version_labels(
    raw: &BTreeMap<String, String>,
) -> anyhow::Result<BTreeMap<u16, String>> {
    let mut labels = BTreeMap::new();
    for (major, label) in raw {
        let major: u16 = major
            .parse()
            .with_context(|| format!("invalid version_labels key: {major}"))?;
        labels.insert(major, label.clone());
    }
    Ok(labels)
}
