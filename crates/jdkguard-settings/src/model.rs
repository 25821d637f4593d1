use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// `jdkguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so
/// forward-compat is easy. Every field is optional; defaults apply.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct JdkguardConfigV1 {
    /// Optional schema string for tooling (`jdkguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Allowed Java release (e.g. 21). Ignored when `versions` is set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    /// Allowed Java releases; supersedes `version` when non-empty.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<u32>,

    /// Expected runtime vendor. Expanded through the canonical alias table
    /// into case-insensitive substring fragments.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    /// Root directories scanned for compiled artifacts, relative to the
    /// project root unless absolute.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roots: Vec<String>,

    /// Artifact file extension (default `class`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// How many failing artifacts rendered output lists before eliding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_limit: Option<u32>,

    /// Extra class-file major -> release label entries, e.g. `"69" = "25"`.
    /// Extends the built-in table without code changes.
    #[serde(default)]
    pub version_labels: BTreeMap<String, String>,
}
