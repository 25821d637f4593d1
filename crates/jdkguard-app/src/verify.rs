//! The `verify` use case: scan compiled artifacts and evaluate them against
//! the resolved toolchain policy.

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use jdkguard_domain::{aggregate, check_artifact};
use jdkguard_scan::{locate_artifacts, scan_artifacts, ArtifactFilter};
use jdkguard_settings::{Overrides, ResolvedConfig};
use jdkguard_types::{
    ArtifactPath, ComplianceResult, JdkguardData, JdkguardReport, ToolMeta, ToolchainMetadata,
    Verdict, SCHEMA_REPORT_V1,
};
use thiserror::Error;
use time::OffsetDateTime;

/// External collaborator seam: supplies the runtime actually resolved for
/// compilation, once per run, before scanning starts.
pub trait ResolveToolchain {
    fn resolve(&self) -> anyhow::Result<ToolchainMetadata>;
}

/// Resolver backed by already-known metadata, for hosts that resolved the
/// toolchain themselves.
#[derive(Clone, Debug)]
pub struct FixedToolchain(pub ToolchainMetadata);

impl ResolveToolchain for FixedToolchain {
    fn resolve(&self) -> anyhow::Result<ToolchainMetadata> {
        Ok(self.0.clone())
    }
}

/// Run-level failures. These abort the run; no partial report exists.
#[derive(Debug, Error)]
pub enum VerifyError {
    /// Toolchain resolution failed; the run aborted before scanning.
    /// Fatal and unretried.
    #[error("missing runtime metadata: {0}")]
    MissingRuntimeMetadata(anyhow::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Input for the verify use case.
#[derive(Clone, Debug)]
pub struct VerifyInput<'a> {
    /// Directory the configured scan roots are resolved against.
    pub project_root: &'a Utf8Path,
    /// `jdkguard.toml` contents (empty string if not found).
    pub config_text: &'a str,
    /// Host-supplied overrides.
    pub overrides: Overrides,
}

/// Output from the verify use case.
#[derive(Clone, Debug)]
pub struct VerifyOutput {
    /// The generated report.
    pub report: JdkguardReport,
    /// The resolved configuration used (labels and preview bound feed the
    /// renderers).
    pub resolved: ResolvedConfig,
}

/// Run the verify pipeline: resolve config and toolchain once, locate and
/// decode artifacts, evaluate each against the policy, aggregate, envelope.
///
/// One linear pass per run; artifacts are enumerated fresh every time and
/// nothing is cached across runs.
pub fn run_verify(
    input: VerifyInput<'_>,
    toolchain: &dyn ResolveToolchain,
) -> Result<VerifyOutput, VerifyError> {
    let started_at = OffsetDateTime::now_utc();

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        jdkguard_settings::JdkguardConfigV1::default()
    } else {
        jdkguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved =
        jdkguard_settings::resolve_config(cfg, input.overrides.clone()).context("resolve config")?;

    // Metadata is resolved exactly once; failure aborts before scanning.
    let metadata = toolchain
        .resolve()
        .map_err(VerifyError::MissingRuntimeMetadata)?;

    let filter =
        ArtifactFilter::for_extension(&resolved.scan.extension).context("compile artifact filter")?;
    let roots: Vec<Utf8PathBuf> = resolved
        .scan
        .roots
        .iter()
        .map(|root| {
            if root.is_absolute() {
                root.clone()
            } else {
                input.project_root.join(root)
            }
        })
        .collect();

    let located = locate_artifacts(&roots, &filter);
    let mut diagnostics = located.diagnostics;

    let results: Vec<ComplianceResult> = scan_artifacts(located.artifacts)
        .into_iter()
        .map(|scanned| {
            let version = match scanned.version {
                Ok(version) => Some(version),
                Err(err) => {
                    diagnostics.push(err.to_string());
                    None
                }
            };
            check_artifact(
                report_path(input.project_root, &scanned.path),
                version,
                &metadata.vendor,
                &resolved.policy,
            )
        })
        .collect();

    let outcome = aggregate(results);
    if outcome.total_checked == 0 {
        diagnostics.push("no artifacts found under the configured roots".to_string());
    }

    let finished_at = OffsetDateTime::now_utc();

    let report = JdkguardReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "jdkguard".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at,
        toolchain: metadata,
        verdict: outcome.verdict(),
        data: JdkguardData {
            roots_scanned: roots.len() as u32,
            artifacts_checked: outcome.total_checked,
            failures_total: outcome.failures.len() as u32,
            allowed_majors: resolved.policy.allowed_majors().iter().copied().collect(),
            allowed_vendors: resolved.policy.vendor_fragments().to_vec(),
            diagnostics,
        },
        failures: outcome.failures,
    };

    Ok(VerifyOutput { report, resolved })
}

/// Report paths relative to the project root where possible.
fn report_path(project_root: &Utf8Path, artifact: &Utf8Path) -> ArtifactPath {
    ArtifactPath::from(artifact.strip_prefix(project_root).unwrap_or(artifact))
}

/// Map the run verdict to the signal a hosting pipeline consumes:
/// 0 = pass, 2 = fail.
pub fn verdict_exit_signal(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Fail => 2,
    }
}
