use crate::detail::failure_detail;
use jdkguard_types::{JdkguardReport, Verdict};
use std::collections::BTreeMap;

pub fn render_markdown(
    report: &JdkguardReport,
    labels: &BTreeMap<u16, String>,
    preview_limit: usize,
) -> String {
    let mut out = String::new();

    out.push_str("# Jdkguard report\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Toolchain: {} (Java {})\n- Checked: {} artifacts, {} failing\n\n",
        verdict,
        report.toolchain.vendor,
        report.toolchain.major_version,
        report.data.artifacts_checked,
        report.data.failures_total
    ));

    for note in &report.data.diagnostics {
        out.push_str(&format!("> Note: {}\n\n", note));
    }

    if report.failures.is_empty() {
        out.push_str("No failures.\n");
        return out;
    }

    out.push_str("## Failures\n\n");
    for failure in report.failures.iter().take(preview_limit) {
        out.push_str(&format!(
            "- `{}` — {}\n",
            failure.artifact.as_str(),
            failure_detail(failure, labels)
        ));
    }
    let remainder = report.failures.len().saturating_sub(preview_limit);
    if remainder > 0 {
        out.push_str(&format!("\n...and {} more.\n", remainder));
    }

    out
}
