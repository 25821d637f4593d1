use crate::detail::failure_detail;
use jdkguard_types::JdkguardReport;
use std::collections::BTreeMap;

/// Render failures as GitHub Actions workflow command annotations.
///
/// Format: `::error file={path}::{message}`
pub fn render_github_annotations(
    report: &JdkguardReport,
    labels: &BTreeMap<u16, String>,
) -> Vec<String> {
    let mut out = Vec::new();

    for failure in &report.failures {
        let message = format!(
            "{}: {}",
            failure.artifact.file_name(),
            failure_detail(failure, labels)
        )
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");

        out.push(format!(
            "::error file={}::{}",
            failure.artifact.as_str(),
            message
        ));
    }

    out
}
