// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Installation of the crash plugin onto an [`App`].

use std::sync::Arc;

use loom_tui_component::{App, Plugin};
use tracing::{info, warn};

use crate::chain::HandlerChain;
use crate::client::{ReportClient, Reporter};
use crate::config::CaptureConfig;
use crate::dsn::Dsn;

/// Name the plugin is recorded under by [`App::use_plugin`].
pub const PLUGIN_NAME: &str = "loom-crash-tui";

/// Forwards every component fault on an [`App`] to a crash client.
///
/// # Example
///
/// ```ignore
/// let mut app = App::new();
/// app.use_plugin(
///     &CrashPlugin::new(client),
///     CaptureConfig::with_dsn("https://public@crash.example.com/42"),
/// );
/// ```
#[derive(Clone)]
pub struct CrashPlugin {
	client: Arc<dyn ReportClient>,
}

impl CrashPlugin {
	pub fn new(client: Arc<dyn ReportClient>) -> Self {
		Self { client }
	}
}

impl Plugin for CrashPlugin {
	type Options = CaptureConfig;

	fn name(&self) -> &'static str {
		PLUGIN_NAME
	}

	fn install(&self, app: &mut App, options: CaptureConfig) {
		install(app, Arc::clone(&self.client), &options);
	}
}

/// Attach the capture accessor to `app` and wrap its current error handler.
///
/// Not idempotent: every call wraps whatever handler is installed at that
/// moment, so installing twice captures each fault twice.
///
/// Instances copy the app's extensions when they mount, so only components
/// mounted after this call carry the [`Reporter`]. Install before mounting.
/// Faults from earlier instances still go through the new handler.
pub fn install(app: &mut App, client: Arc<dyn ReportClient>, options: &CaptureConfig) -> Reporter {
	let reporter = connect(client, options);
	app.provide(reporter.clone());

	let previous = app.config_mut().take_error_handler();
	let chain = HandlerChain::new(reporter.clone(), previous);
	info!(
		enabled = reporter.is_enabled(),
		wraps_previous = chain.wraps_previous(),
		"Crash reporting installed"
	);
	app.config_mut().replace_error_handler(chain.into_handler());

	reporter
}

/// Resolve the options into a live or disabled reporter.
fn connect(client: Arc<dyn ReportClient>, options: &CaptureConfig) -> Reporter {
	if options.disable_report {
		info!("Crash reporting disabled by configuration");
		return Reporter::disabled();
	}

	let Some(raw) = options.dsn.as_deref() else {
		warn!("No crash DSN configured, reporting disabled");
		return Reporter::disabled();
	};

	let dsn = match raw.parse::<Dsn>() {
		Ok(dsn) => dsn,
		Err(e) => {
			warn!(error = %e, "Invalid crash DSN, reporting disabled");
			return Reporter::disabled();
		}
	};

	if let Err(e) = client.configure(&dsn) {
		warn!(error = %e, dsn = %dsn, "Crash client rejected DSN, reporting disabled");
		return Reporter::disabled();
	}

	info!(host = dsn.host(), project_id = dsn.project_id(), "Crash client configured");
	Reporter::live(client)
}
