use crate::detail::{failure_detail, version_display};
use jdkguard_types::JdkguardReport;
use std::collections::BTreeMap;

/// Render the console summary for one run.
///
/// The surface build logs show: toolchain lines, the total, then either the
/// all-clear confirmation or the policy recap with a bounded failure
/// preview. `preview_limit` caps only what is listed; every count reflects
/// the full failure list.
pub fn render_summary(
    report: &JdkguardReport,
    labels: &BTreeMap<u16, String>,
    preview_limit: usize,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Vendor used for compiling the code: {}\n",
        report.toolchain.vendor
    ));
    out.push_str(&format!(
        "Java version used for compiling the code: {}\n",
        report.toolchain.major_version
    ));
    out.push_str(&format!(
        "Total class files checked: {}\n",
        report.data.artifacts_checked
    ));

    if report.failures.is_empty() {
        out.push_str("All class files are compiled with the correct Java version and vendor.\n");
    } else {
        let allowed_versions = report
            .data
            .allowed_majors
            .iter()
            .map(|m| version_display(*m, labels))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!("Allowed Java versions: {}\n", allowed_versions));
        out.push_str(&format!(
            "Allowed vendors: {}\n",
            report.data.allowed_vendors.join(", ")
        ));
        out.push_str(&format!(
            "Class files compiled with an incorrect Java version/vendor: {}\n",
            report.data.failures_total
        ));

        for failure in report.failures.iter().take(preview_limit) {
            out.push_str(&format!(
                "- {} ({})\n",
                failure.artifact.as_str(),
                failure_detail(failure, labels)
            ));
        }
        let remainder = report.failures.len().saturating_sub(preview_limit);
        if remainder > 0 {
            out.push_str(&format!("...and {} more.\n", remainder));
        }
    }

    for note in &report.data.diagnostics {
        out.push_str(&format!("note: {}\n", note));
    }

    out
}
