// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use ratatui::Frame;
use ratatui::layout::Rect;

use loom_tui_core::{Action, ComponentError, Event};

mod app;
mod instance;

pub use app::{App, AppConfig, ErrorHandler, Mounted, Plugin};
pub use instance::{Instance, InstanceId};
pub use loom_tui_core::ErrorInfo;

pub struct RenderContext<'a> {
	pub instance: &'a Instance,
}

impl<'a> RenderContext<'a> {
	pub fn new(instance: &'a Instance) -> Self {
		Self { instance }
	}

	/// Shortcut for [`Instance::extension`].
	pub fn extension<T: Send + Sync + 'static>(&self) -> Option<&'a T> {
		self.instance.extension::<T>()
	}
}

/// Core trait for TUI components.
///
/// Components are the building blocks of the TUI. They handle events,
/// produce actions, and render themselves to the terminal. Every fallible
/// method reports faults by returning `Err`; the host routes those faults to
/// the application-wide error handler (see [`AppConfig::error_handler`]).
pub trait Component: Send + Sync {
	fn id(&self) -> &str;

	/// Called once when the component is attached to the UI tree ("on_mount").
	/// Use this for one-time initialization that requires the component to be fully constructed.
	fn init(&mut self, _instance: &Instance) -> Result<(), ComponentError> {
		Ok(())
	}

	fn handle_event(&mut self, _event: &Event, _instance: &Instance) -> Result<Vec<Action>, ComponentError> {
		Ok(Vec::new())
	}

	fn update(&mut self, _action: &Action, _instance: &Instance) -> Result<Vec<Action>, ComponentError> {
		Ok(Vec::new())
	}

	fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<(), ComponentError>;

	/// Fallback drawn when `render` fails.
	///
	/// `None` means the component has no fallback and the area is left blank.
	fn render_error(
		&self,
		_frame: &mut Frame,
		_area: Rect,
		_ctx: &RenderContext,
		_error: &ComponentError,
	) -> Option<Result<(), ComponentError>> {
		None
	}

	/// Called once when the component is detached from the UI tree.
	fn unmount(&mut self, _instance: &Instance) -> Result<(), ComponentError> {
		Ok(())
	}
}
