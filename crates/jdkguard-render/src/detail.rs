use jdkguard_types::{label_for_major, ComplianceResult, ResultCode};
use std::collections::BTreeMap;

/// Human-readable version rendering: `65 (Java 21)` when the table knows a
/// label, bare `65` otherwise.
pub(crate) fn version_display(major: u16, labels: &BTreeMap<u16, String>) -> String {
    match label_for_major(major, labels) {
        Some(label) => format!("{major} (Java {label})"),
        None => major.to_string(),
    }
}

/// One-line reason for a failing result.
pub(crate) fn failure_detail(result: &ComplianceResult, labels: &BTreeMap<u16, String>) -> String {
    match result.code {
        ResultCode::VersionMismatch => match result.version {
            Some(v) => format!("compiled for major version {}", version_display(v, labels)),
            None => "compiled for a disallowed major version".to_string(),
        },
        ResultCode::VendorMismatch => {
            format!("toolchain vendor '{}' is not allowed", result.vendor)
        }
        ResultCode::MalformedArtifact => "header could not be decoded".to_string(),
        ResultCode::Compliant => "compliant".to_string(),
    }
}
