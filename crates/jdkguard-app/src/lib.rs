//! Use case orchestration for jdkguard.
//!
//! This crate is the embedding surface: a hosting build pipeline calls
//! `run_verify` unconditionally after compilation and feeds
//! `verdict_exit_signal` into its own failure handling. There is no
//! standalone command-line binary; the host owns argument parsing and I/O.

#![forbid(unsafe_code)]

mod render;
mod verify;

pub use render::{render_annotations, render_markdown, render_summary, serialize_report};
pub use verify::{
    run_verify, verdict_exit_signal, FixedToolchain, ResolveToolchain, VerifyError, VerifyInput,
    VerifyOutput,
};
