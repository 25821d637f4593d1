//! Config parsing and policy resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves
//! configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;
mod vendors;

pub use model::JdkguardConfigV1;
pub use resolve::{resolve_config, Overrides, ResolvedConfig, ScanPlan};
pub use vendors::vendor_fragments;

/// Parse `jdkguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<JdkguardConfigV1> {
    let cfg: JdkguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}
