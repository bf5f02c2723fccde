//! Shared plumbing for the `forge-check` and `verify-identity` binaries:
//! configuration, client flags, logging and report rendering.

pub mod client;
pub mod config;
pub mod links;
pub mod report;

pub use client::{Client, ClientArgs};

/// Install the `tracing` subscriber.
///
/// Logs go to stderr so stdout carries only the report. The filter comes
/// from `RUST_LOG` and defaults to `warn`; skipped indices and failed reads
/// are reported by the binaries themselves and logged at `debug`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Print report lines to stdout.
#[allow(clippy::print_stdout)]
pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{line}");
    }
}

/// Print a JSON document to stdout.
#[allow(clippy::print_stdout)]
pub fn print_json(value: &serde_json::Value) {
    match serde_json::to_string_pretty(value) {
        Ok(text) => println!("{text}"),
        Err(e) => tracing::error!(error = %e, "could not serialize report"),
    }
}

/// Report a fatal error: JSON `{"error": ...}` on stdout in JSON mode,
/// `Error: ...` on stderr otherwise.
#[allow(clippy::print_stderr)]
pub fn print_error(error: &anyhow::Error, json: bool) {
    if json {
        print_json(&report::error_json(error));
    } else {
        eprintln!("Error: {error:#}");
    }
}
