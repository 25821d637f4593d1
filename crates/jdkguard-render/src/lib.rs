//! Rendering for CI surfaces (console text, Markdown, GitHub annotations).
//!
//! Renderers are pure string builders over the report. Preview truncation
//! happens here and only here; stored failure lists and counts are never
//! altered by rendering.

#![forbid(unsafe_code)]

mod detail;
mod gha;
mod markdown;
mod summary;

pub use gha::render_github_annotations;
pub use markdown::render_markdown;
pub use summary::render_summary;

#[cfg(test)]
pub(crate) mod test_fixtures {
    use jdkguard_types::{
        ArtifactPath, ComplianceResult, JdkguardData, JdkguardReport, ResultCode, ToolMeta,
        ToolchainMetadata, Verdict, SCHEMA_REPORT_V1,
    };
    use time::macros::datetime;

    pub fn failing(artifact: &str, version: Option<u16>, code: ResultCode) -> ComplianceResult {
        ComplianceResult {
            artifact: ArtifactPath::new(artifact),
            version,
            vendor: "Eclipse Adoptium".to_string(),
            verdict: Verdict::Fail,
            code,
        }
    }

    pub fn report(failures: Vec<ComplianceResult>, checked: u32) -> JdkguardReport {
        let failures_total = failures.len() as u32;
        JdkguardReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "jdkguard".to_string(),
                version: "0.1.0".to_string(),
            },
            started_at: datetime!(2026-01-01 00:00:00 UTC),
            finished_at: datetime!(2026-01-01 00:00:01 UTC),
            toolchain: ToolchainMetadata {
                vendor: "Eclipse Adoptium".to_string(),
                major_version: 21,
            },
            verdict: if failures_total == 0 {
                Verdict::Pass
            } else {
                Verdict::Fail
            },
            failures,
            data: JdkguardData {
                roots_scanned: 1,
                artifacts_checked: checked,
                failures_total,
                allowed_majors: vec![61, 65],
                allowed_vendors: vec!["adoptium".to_string(), "temurin".to_string()],
                diagnostics: Vec::new(),
            },
        }
    }
}
