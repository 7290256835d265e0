// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::error::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use loom_crash_tui::{CrashTuiError, Dsn, ReportClient, Result};

/// One call to [`ReportClient::capture_exception`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedError {
	pub message: String,
	/// Address of the error object, to check it was not copied on the way.
	pub addr: usize,
}

/// Crash client that records what it is asked to do.
#[derive(Debug)]
pub struct RecordingClient {
	reject_configure: bool,
	queued: AtomicBool,
	configured: Mutex<Vec<Dsn>>,
	captured: Mutex<Vec<CapturedError>>,
}

impl Default for RecordingClient {
	fn default() -> Self {
		Self {
			reject_configure: false,
			queued: AtomicBool::new(true),
			configured: Mutex::new(Vec::new()),
			captured: Mutex::new(Vec::new()),
		}
	}
}

impl RecordingClient {
	pub fn new() -> Self {
		Self::default()
	}

	/// A client whose `configure` always fails.
	pub fn rejecting() -> Self {
		Self {
			reject_configure: true,
			..Self::default()
		}
	}

	/// Set what `capture_exception` answers.
	pub fn set_queued(&self, queued: bool) {
		self.queued.store(queued, Ordering::SeqCst);
	}

	pub fn configured(&self) -> Vec<Dsn> {
		self.configured.lock().expect("configured lock poisoned").clone()
	}

	pub fn captured(&self) -> Vec<CapturedError> {
		self.captured.lock().expect("captured lock poisoned").clone()
	}

	pub fn messages(&self) -> Vec<String> {
		self.captured().into_iter().map(|c| c.message).collect()
	}

	pub fn capture_count(&self) -> usize {
		self.captured.lock().expect("captured lock poisoned").len()
	}
}

impl ReportClient for RecordingClient {
	fn configure(&self, dsn: &Dsn) -> Result<()> {
		if self.reject_configure {
			return Err(CrashTuiError::Configure("rejected by test client".into()));
		}
		self.configured.lock().expect("configured lock poisoned").push(dsn.clone());
		Ok(())
	}

	fn capture_exception(&self, error: &(dyn Error + 'static)) -> bool {
		let addr = error as *const dyn Error as *const () as usize;
		self.captured
			.lock()
			.expect("captured lock poisoned")
			.push(CapturedError {
				message: error.to_string(),
				addr,
			});
		self.queued.load(Ordering::SeqCst)
	}
}
