// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Example: install the crash plugin and mount a component that fails.
//!
//! Run with:
//!   LOOM_CRASH_DSN=http://abc@example.com:80/2 cargo run --example install -p loom-crash-tui

use std::error::Error;
use std::sync::Arc;

use loom_crash_tui::{CaptureConfig, CrashPlugin, Dsn, ReportClient};
use loom_crash_tui_testing::{FailingInit, TestHarness};
use loom_tui_component::App;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prints what a real crash client would queue for transport.
struct StderrClient;

impl ReportClient for StderrClient {
	fn configure(&self, dsn: &Dsn) -> loom_crash_tui::Result<()> {
		eprintln!("configured for project {} at {}", dsn.project_id(), dsn.host());
		Ok(())
	}

	fn capture_exception(&self, error: &(dyn Error + 'static)) -> bool {
		eprintln!("captured: {error}");
		true
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
		.init();

	let config = CaptureConfig::from_toml_str("disable_report = false")?.apply_env();

	let mut app = App::new();
	app.config_mut().set_error_handler(|err, instance, info| {
		eprintln!("{} failed in {info}: {err}", instance.name());
	});
	app.use_plugin(&CrashPlugin::new(Arc::new(StderrClient)), config);

	let mut harness = TestHarness::new(40, 3);
	app.mount(FailingInit::new("foo"), harness.terminal())?;
	info!(lines = ?harness.buffer_lines(), "Mounted");

	Ok(())
}
