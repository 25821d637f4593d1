//! End-to-end pipeline tests: temp project trees with synthetic class
//! files, driven through `run_verify` exactly the way a host embeds it.

use camino::{Utf8Path, Utf8PathBuf};
use jdkguard_app::{
    render_summary, run_verify, verdict_exit_signal, FixedToolchain, ResolveToolchain,
    VerifyError, VerifyInput,
};
use jdkguard_settings::Overrides;
use jdkguard_test_util::{write_class_file, write_truncated_class_file};
use jdkguard_types::{ResultCode, ToolchainMetadata, Verdict};
use tempfile::TempDir;

fn utf8_root(tmp: &TempDir) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path")
}

fn adoptium() -> FixedToolchain {
    FixedToolchain(ToolchainMetadata {
        vendor: "Eclipse Adoptium".to_string(),
        major_version: 21,
    })
}

fn verify(root: &Utf8Path, config: &str) -> jdkguard_app::VerifyOutput {
    run_verify(
        VerifyInput {
            project_root: root,
            config_text: config,
            overrides: Overrides::default(),
        },
        &adoptium(),
    )
    .expect("run_verify")
}

#[test]
fn compliant_artifacts_pass() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_class_file(&root.join("build/classes/com/example/App.class"), 65);
    write_class_file(&root.join("build/classes/com/example/Util.class"), 65);

    let output = verify(&root, "vendor = \"adoptium\"\nversion = 21\n");

    assert_eq!(output.report.verdict, Verdict::Pass);
    assert_eq!(output.report.data.artifacts_checked, 2);
    assert!(output.report.failures.is_empty());
    assert_eq!(verdict_exit_signal(output.report.verdict), 0);

    let summary = render_summary(&output);
    assert!(summary.contains("Total class files checked: 2"));
    assert!(summary.contains("All class files are compiled with the correct Java version"));
}

#[test]
fn stale_artifact_fails_and_is_listed() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_class_file(&root.join("build/classes/Old.class"), 52);

    let output = verify(&root, "vendor = \"adoptium\"\nversion = 21\n");

    assert_eq!(output.report.verdict, Verdict::Fail);
    assert_eq!(verdict_exit_signal(output.report.verdict), 2);
    assert_eq!(output.report.failures.len(), 1);

    let failure = &output.report.failures[0];
    assert_eq!(failure.artifact.as_str(), "build/classes/Old.class");
    assert_eq!(failure.version, Some(52));
    assert_eq!(failure.code, ResultCode::VersionMismatch);
}

#[test]
fn mixed_run_counts_exactly() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    for i in 0..12 {
        write_class_file(&root.join(format!("build/classes/ok/C{i}.class")), 65);
    }
    for i in 0..3 {
        write_class_file(&root.join(format!("build/classes/stale/S{i}.class")), 52);
    }

    let output = verify(&root, "vendor = \"adoptium\"\nversion = 21\n");

    assert_eq!(output.report.data.artifacts_checked, 15);
    assert_eq!(output.report.data.failures_total, 3);
    assert_eq!(output.report.failures.len(), 3);

    // Under the default cap of 10, all three are listed and nothing elided.
    let summary = render_summary(&output);
    assert!(summary.contains("incorrect Java version/vendor: 3"));
    assert!(!summary.contains("more."));
}

#[test]
fn wrong_vendor_fails_every_artifact() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_class_file(&root.join("build/classes/App.class"), 65);

    let output = run_verify(
        VerifyInput {
            project_root: &root,
            config_text: "vendor = \"amazon corretto\"\nversion = 21\n",
            overrides: Overrides::default(),
        },
        &adoptium(),
    )
    .expect("run_verify");

    assert_eq!(output.report.verdict, Verdict::Fail);
    assert_eq!(output.report.failures[0].code, ResultCode::VendorMismatch);
    assert_eq!(output.report.failures[0].vendor, "Eclipse Adoptium");
}

#[test]
fn missing_root_is_an_empty_pass() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);

    let output = verify(&root, "");

    assert_eq!(output.report.verdict, Verdict::Pass);
    assert_eq!(output.report.data.artifacts_checked, 0);
    assert_eq!(verdict_exit_signal(output.report.verdict), 0);
    assert!(output
        .report
        .data
        .diagnostics
        .iter()
        .any(|d| d.contains("no artifacts found")));
}

#[test]
fn resolver_failure_aborts_before_scanning() {
    struct NoToolchain;
    impl ResolveToolchain for NoToolchain {
        fn resolve(&self) -> anyhow::Result<ToolchainMetadata> {
            anyhow::bail!("no matching runtime installed")
        }
    }

    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_class_file(&root.join("build/classes/App.class"), 65);

    let err = run_verify(
        VerifyInput {
            project_root: &root,
            config_text: "",
            overrides: Overrides::default(),
        },
        &NoToolchain,
    )
    .expect_err("resolution failure must abort");

    assert!(matches!(err, VerifyError::MissingRuntimeMetadata(_)));
    assert!(err.to_string().contains("no matching runtime installed"));
}

#[test]
fn truncated_artifact_is_recorded_as_malformed_failure() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_class_file(&root.join("build/classes/Good.class"), 65);
    write_truncated_class_file(&root.join("build/classes/Broken.class"), 5);

    let output = verify(&root, "vendor = \"adoptium\"\nversion = 21\n");

    assert_eq!(output.report.data.artifacts_checked, 2);
    assert_eq!(output.report.failures.len(), 1);
    let failure = &output.report.failures[0];
    assert_eq!(failure.code, ResultCode::MalformedArtifact);
    assert_eq!(failure.version, None);
    assert!(output
        .report
        .data
        .diagnostics
        .iter()
        .any(|d| d.contains("malformed artifact")));
}

#[test]
fn preview_cap_truncates_rendering_but_not_the_report() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    for i in 0..3 {
        write_class_file(&root.join(format!("build/classes/S{i}.class")), 52);
    }

    let output = run_verify(
        VerifyInput {
            project_root: &root,
            config_text: "vendor = \"adoptium\"\nversion = 21\n",
            overrides: Overrides {
                preview_limit: Some(2),
                ..Overrides::default()
            },
        },
        &adoptium(),
    )
    .expect("run_verify");

    assert_eq!(output.report.failures.len(), 3);
    assert_eq!(output.report.data.failures_total, 3);

    let summary = render_summary(&output);
    assert!(summary.contains("...and 1 more."));
}

#[test]
fn repeated_runs_agree_on_the_failure_set() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_class_file(&root.join("build/classes/A.class"), 65);
    write_class_file(&root.join("build/classes/B.class"), 52);
    write_class_file(&root.join("build/classes/c/D.class"), 61);

    let config = "vendor = \"adoptium\"\nversions = [21]\n";
    let first = verify(&root, config);
    let second = verify(&root, config);

    let names = |output: &jdkguard_app::VerifyOutput| {
        let mut v: Vec<String> = output
            .report
            .failures
            .iter()
            .map(|f| f.artifact.as_str().to_string())
            .collect();
        v.sort();
        v
    };
    assert_eq!(names(&first), names(&second));
    assert_eq!(
        first.report.data.artifacts_checked,
        second.report.data.artifacts_checked
    );
}

#[test]
fn custom_roots_are_honored() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_class_file(&root.join("out/production/App.class"), 65);
    // Outside the configured root, must be ignored.
    write_class_file(&root.join("build/classes/Ignored.class"), 52);

    let output = verify(
        &root,
        "vendor = \"adoptium\"\nversion = 21\nroots = [\"out/production\"]\n",
    );

    assert_eq!(output.report.data.artifacts_checked, 1);
    assert_eq!(output.report.verdict, Verdict::Pass);
}

#[test]
fn extension_filter_skips_other_files() {
    let tmp = TempDir::new().expect("temp dir");
    let root = utf8_root(&tmp);
    write_class_file(&root.join("build/classes/App.class"), 65);
    std::fs::write(root.join("build/classes/App.kotlin_module"), b"meta").expect("write");
    std::fs::write(root.join("build/classes/notes.txt"), b"notes").expect("write");

    let output = verify(&root, "vendor = \"adoptium\"\nversion = 21\n");

    assert_eq!(output.report.data.artifacts_checked, 1);
    assert_eq!(output.report.verdict, Verdict::Pass);
}
