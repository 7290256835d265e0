// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::borrow::Cow;
use std::fmt;

use crossterm::event::{KeyEvent, MouseEvent};
use thiserror::Error;

/// Result type alias using ComponentError as the default error type.
pub type Result<T, E = ComponentError> = std::result::Result<T, E>;

/// Actions that components can emit in response to events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
	/// Periodic tick for animations or polling.
	Tick,
	/// Request application shutdown.
	Quit,
	/// Request a re-render of the UI.
	Render,
	/// Move focus to the next focusable component.
	FocusNext,
	/// Move focus to the previous focusable component.
	FocusPrev,
	/// Submit/confirm the current input or selection.
	Submit,
	/// Cancel the current operation.
	Cancel,
	/// Custom action with a kind identifier and payload.
	Custom { kind: Cow<'static, str>, payload: String },
}

/// Terminal events from crossterm.
#[derive(Debug, Clone)]
pub enum Event {
	/// Keyboard input.
	Key(KeyEvent),
	/// Mouse input.
	Mouse(MouseEvent),
	/// Terminal resize to (width, height).
	Resize(u16, u16),
	/// Periodic tick.
	Tick,
	/// Paste event with pasted text.
	Paste(String),
	/// Terminal gained focus.
	FocusGained,
	/// Terminal lost focus.
	FocusLost,
}

impl From<crossterm::event::Event> for Event {
	fn from(event: crossterm::event::Event) -> Self {
		match event {
			crossterm::event::Event::Key(key) => Event::Key(key),
			crossterm::event::Event::Mouse(mouse) => Event::Mouse(mouse),
			crossterm::event::Event::Resize(w, h) => Event::Resize(w, h),
			crossterm::event::Event::Paste(text) => Event::Paste(text),
			crossterm::event::Event::FocusGained => Event::FocusGained,
			crossterm::event::Event::FocusLost => Event::FocusLost,
		}
	}
}

/// Faults raised by component code while the host drives it.
#[derive(Debug, Error)]
pub enum ComponentError {
	#[error("initialization failed: {0}")]
	Init(String),
	#[error("render failed: {0}")]
	Render(String),
	#[error("update failed: {0}")]
	Update(String),
	#[error("event handling failed: {0}")]
	Event(String),
	#[error("teardown failed: {0}")]
	Unmount(String),
	#[error("terminal backend error: {0}")]
	Backend(String),
	#[error(transparent)]
	Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

/// Where in the component lifecycle a fault escaped.
///
/// This is the "info" part of the `(error, instance, info)` triple handed to
/// the application-wide error handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorInfo {
	/// The component's primary `render` failed.
	Render,
	/// The component's `render_error` fallback failed.
	RenderError,
	/// A lifecycle hook (`init`, `update`, `unmount`) failed.
	Hook(&'static str),
	/// An event handler failed.
	Event,
}

impl fmt::Display for ErrorInfo {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			ErrorInfo::Render => f.write_str("render"),
			ErrorInfo::RenderError => f.write_str("render_error"),
			ErrorInfo::Hook(name) => write!(f, "{name} hook"),
			ErrorInfo::Event => f.write_str("event handler"),
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn error_info_display() {
		assert_eq!(ErrorInfo::Render.to_string(), "render");
		assert_eq!(ErrorInfo::RenderError.to_string(), "render_error");
		assert_eq!(ErrorInfo::Hook("init").to_string(), "init hook");
		assert_eq!(ErrorInfo::Event.to_string(), "event handler");
	}

	#[test]
	fn component_error_display() {
		assert_eq!(ComponentError::Init("foo".into()).to_string(), "initialization failed: foo");
		assert_eq!(ComponentError::Render("boom".into()).to_string(), "render failed: boom");
	}

	#[test]
	fn other_error_is_transparent() {
		let io = std::io::Error::other("disk gone");
		let err = ComponentError::from(Box::new(io) as Box<dyn std::error::Error + Send + Sync>);
		assert_eq!(err.to_string(), "disk gone");
	}

	proptest! {
		#[test]
		fn init_error_keeps_message(msg in "[a-z ]{0,32}") {
			let err = ComponentError::Init(msg.clone());
			prop_assert!(err.to_string().ends_with(&msg));
		}
	}
}
