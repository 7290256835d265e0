// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! The crash client contract and the capture accessor handed to components.

use std::error::Error;
use std::fmt;
use std::sync::Arc;

use loom_tui_component::Instance;

use crate::dsn::Dsn;
use crate::error::Result;

/// The external crash client the plugin forwards faults to.
///
/// Transport, queuing and serialization belong to the implementation.
pub trait ReportClient: Send + Sync {
	/// Point the client at the project identified by `dsn`.
	fn configure(&self, dsn: &Dsn) -> Result<()>;

	/// Hand `error` to the client. Returns whether the event was queued.
	fn capture_exception(&self, error: &(dyn Error + 'static)) -> bool;
}

/// Capability of reporting an error to the crash backend.
pub trait CapturesExceptions {
	fn capture_exception(&self, error: &(dyn Error + 'static)) -> bool;
}

/// Capture accessor attached to every component instance.
///
/// A disabled reporter accepts every error, never touches a client and
/// always answers `false`.
#[derive(Clone)]
pub struct Reporter {
	client: Option<Arc<dyn ReportClient>>,
}

impl Reporter {
	pub fn live(client: Arc<dyn ReportClient>) -> Self {
		Self { client: Some(client) }
	}

	pub fn disabled() -> Self {
		Self { client: None }
	}

	pub fn is_enabled(&self) -> bool {
		self.client.is_some()
	}
}

impl CapturesExceptions for Reporter {
	fn capture_exception(&self, error: &(dyn Error + 'static)) -> bool {
		match &self.client {
			Some(client) => client.capture_exception(error),
			None => false,
		}
	}
}

impl fmt::Debug for Reporter {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("Reporter").field("enabled", &self.is_enabled()).finish()
	}
}

/// Reach the [`Reporter`] from inside a component.
pub trait InstanceReporterExt {
	fn reporter(&self) -> Option<&Reporter>;
}

impl InstanceReporterExt for Instance {
	fn reporter(&self) -> Option<&Reporter> {
		self.extension::<Reporter>()
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use super::*;

	#[derive(Default)]
	struct Counting {
		calls: AtomicUsize,
	}

	impl ReportClient for Counting {
		fn configure(&self, _dsn: &Dsn) -> Result<()> {
			Ok(())
		}

		fn capture_exception(&self, _error: &(dyn Error + 'static)) -> bool {
			self.calls.fetch_add(1, Ordering::SeqCst);
			true
		}
	}

	#[test]
	fn live_reporter_delegates() {
		let client = Arc::new(Counting::default());
		let reporter = Reporter::live(client.clone());
		let err = std::io::Error::other("foo");

		assert!(reporter.is_enabled());
		assert!(reporter.capture_exception(&err));
		assert_eq!(client.calls.load(Ordering::SeqCst), 1);
	}

	#[test]
	fn disabled_reporter_answers_false() {
		let reporter = Reporter::disabled();
		assert!(!reporter.is_enabled());
		assert!(!reporter.capture_exception(&std::io::Error::other("foo")));
		assert_eq!(format!("{reporter:?}"), "Reporter { enabled: false }");
	}
}
