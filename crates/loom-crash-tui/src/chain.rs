// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Composition of the capture step with a previously installed error handler.

use std::sync::Arc;

use loom_tui_component::{ErrorHandler, ErrorInfo, Instance};
use loom_tui_core::ComponentError;
use tracing::debug;

use crate::client::{CapturesExceptions, Reporter};

/// Capture step followed by whatever handler was installed before it.
///
/// Built once at installation. The capture always runs first, then the
/// previous handler receives the untouched `(error, instance, info)` triple.
#[derive(Clone)]
pub struct HandlerChain {
	reporter: Reporter,
	previous: Option<ErrorHandler>,
}

impl HandlerChain {
	pub fn new(reporter: Reporter, previous: Option<ErrorHandler>) -> Self {
		Self { reporter, previous }
	}

	pub fn reporter(&self) -> &Reporter {
		&self.reporter
	}

	pub fn wraps_previous(&self) -> bool {
		self.previous.is_some()
	}

	pub fn handle(&self, err: &ComponentError, instance: &Instance, info: &ErrorInfo) {
		let queued = self.reporter.capture_exception(err);
		debug!(
			component = instance.name(),
			uid = %instance.uid(),
			info = %info,
			queued,
			"Forwarded component error"
		);

		if let Some(previous) = &self.previous {
			previous(err, instance, info);
		}
	}

	pub fn into_handler(self) -> ErrorHandler {
		Arc::new(move |err: &ComponentError, instance: &Instance, info: &ErrorInfo| {
			self.handle(err, instance, info)
		})
	}
}
