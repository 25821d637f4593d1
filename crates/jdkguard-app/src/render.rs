//! Render use cases over a verify outcome.
//!
//! Thin wrappers that bind the resolved preview bound and version labels,
//! so hosts do not have to thread them by hand.

use crate::verify::VerifyOutput;
use anyhow::Context;
use jdkguard_types::JdkguardReport;

pub fn render_summary(output: &VerifyOutput) -> String {
    jdkguard_render::render_summary(
        &output.report,
        &output.resolved.version_labels,
        output.resolved.preview_limit,
    )
}

pub fn render_markdown(output: &VerifyOutput) -> String {
    jdkguard_render::render_markdown(
        &output.report,
        &output.resolved.version_labels,
        output.resolved.preview_limit,
    )
}

pub fn render_annotations(output: &VerifyOutput, max: usize) -> Vec<String> {
    jdkguard_render::render_github_annotations(&output.report, &output.resolved.version_labels)
        .into_iter()
        .take(max)
        .collect()
}

pub fn serialize_report(report: &JdkguardReport) -> anyhow::Result<String> {
    serde_json::to_string_pretty(report).context("serialize report")
}
