use crate::policy::Policy;
use jdkguard_types::{ArtifactPath, ComplianceResult, ResultCode, Verdict};

/// Verdict for one artifact: pass iff the decoded major version is allowed
/// and the resolved vendor contains at least one policy fragment.
///
/// Pure function of its arguments; no I/O, no shared state.
pub fn evaluate(version: u16, vendor: &str, policy: &Policy) -> Verdict {
    if policy.version_allowed(version) && policy.vendor_matches(vendor) {
        Verdict::Pass
    } else {
        Verdict::Fail
    }
}

/// Build the full per-artifact result, classifying failures.
///
/// `version` is `None` when the artifact header could not be decoded; such
/// artifacts fail with `malformed_artifact` instead of aborting the scan.
/// When both criteria fail, the version mismatch wins the code.
pub fn check_artifact(
    artifact: ArtifactPath,
    version: Option<u16>,
    vendor: &str,
    policy: &Policy,
) -> ComplianceResult {
    let (verdict, code) = match version {
        None => (Verdict::Fail, ResultCode::MalformedArtifact),
        Some(v) if !policy.version_allowed(v) => (Verdict::Fail, ResultCode::VersionMismatch),
        Some(_) if !policy.vendor_matches(vendor) => (Verdict::Fail, ResultCode::VendorMismatch),
        Some(_) => (Verdict::Pass, ResultCode::Compliant),
    };

    ComplianceResult {
        artifact,
        version,
        vendor: vendor.to_string(),
        verdict,
        code,
    }
}
