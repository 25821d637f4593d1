use crate::ArtifactPath;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for jdkguard reports.
pub const SCHEMA_REPORT_V1: &str = "jdkguard.report.v1";

/// Verdict is intentionally binary: it maps cleanly to a CI gate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Fail,
}

/// Stable discriminator for how an artifact was classified.
///
/// Version and vendor mismatches are distinct codes so CI surfaces can tell
/// a stale artifact from a wrong toolchain; `malformed_artifact` marks a
/// header that could not be decoded.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ResultCode {
    Compliant,
    VersionMismatch,
    VendorMismatch,
    MalformedArtifact,
}

/// The runtime actually resolved for compilation, supplied once per run by
/// the provisioning collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolchainMetadata {
    pub vendor: String,
    /// Java release number (21), not the class-file major (65).
    pub major_version: u32,
}

/// One evaluated artifact.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ComplianceResult {
    pub artifact: ArtifactPath,
    /// Decoded class-file major version; `None` when the header was
    /// unreadable or shorter than 8 bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<u16>,
    pub vendor: String,
    pub verdict: Verdict,
    pub code: ResultCode,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// Jdkguard-specific summary payload for the report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema, Default)]
pub struct JdkguardData {
    pub roots_scanned: u32,
    pub artifacts_checked: u32,
    pub failures_total: u32,

    /// Policy recap so the report stands alone: allowed class-file majors
    /// and the vendor substring fragments that were in force.
    pub allowed_majors: Vec<u16>,
    pub allowed_vendors: Vec<String>,

    /// Non-fatal scan notes (unreadable directories, empty scans).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub diagnostics: Vec<String>,
}

/// A generic report envelope.
///
/// Keeping this generic allows jdkguard to embed tool-specific data while
/// still enforcing a stable outer shape.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ReportEnvelope<TData = JdkguardData> {
    /// Versioned schema identifier for the envelope shape.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    /// Toolchain the artifacts were checked against.
    pub toolchain: ToolchainMetadata,
    pub verdict: Verdict,
    /// Every failing artifact, in discovery order. Rendering may truncate
    /// the listing; this list is never truncated.
    pub failures: Vec<ComplianceResult>,
    pub data: TData,
}

pub type JdkguardReport = ReportEnvelope<JdkguardData>;

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn envelope_serializes_with_stable_field_names() {
        let report = JdkguardReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "jdkguard".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2026-01-01 00:00:00 UTC),
            finished_at: datetime!(2026-01-01 00:00:01 UTC),
            toolchain: ToolchainMetadata {
                vendor: "Amazon Corretto".to_string(),
                major_version: 21,
            },
            verdict: Verdict::Fail,
            failures: vec![ComplianceResult {
                artifact: ArtifactPath::new("build/classes/App.class"),
                version: Some(52),
                vendor: "Amazon Corretto".to_string(),
                verdict: Verdict::Fail,
                code: ResultCode::VersionMismatch,
            }],
            data: JdkguardData {
                roots_scanned: 1,
                artifacts_checked: 1,
                failures_total: 1,
                allowed_majors: vec![65],
                allowed_vendors: vec!["amazon".to_string()],
                diagnostics: Vec::new(),
            },
        };

        let json = serde_json::to_value(&report).expect("serialize report");
        assert_eq!(json["schema"], "jdkguard.report.v1");
        assert_eq!(json["verdict"], "fail");
        assert_eq!(json["failures"][0]["code"], "version_mismatch");
        assert_eq!(json["failures"][0]["artifact"], "build/classes/App.class");
        assert_eq!(json["toolchain"]["major_version"], 21);
    }

    #[test]
    fn absent_version_is_omitted_from_json() {
        let result = ComplianceResult {
            artifact: ArtifactPath::new("Broken.class"),
            version: None,
            vendor: "Eclipse Adoptium".to_string(),
            verdict: Verdict::Fail,
            code: ResultCode::MalformedArtifact,
        };
        let json = serde_json::to_value(&result).expect("serialize result");
        assert!(json.get("version").is_none());
        assert_eq!(json["code"], "malformed_artifact");
    }
}
