// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Components with predictable faults.

use crossterm::event::KeyCode;
use loom_crash_tui::{CapturesExceptions, InstanceReporterExt, Reporter};
use loom_tui_component::{Component, Instance, RenderContext};
use loom_tui_core::{Action, ComponentError, Event};
use ratatui::layout::Rect;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Renders a fixed line of text and never fails.
pub struct RawComponent {
	text: String,
}

impl RawComponent {
	pub fn new(text: impl Into<String>) -> Self {
		Self { text: text.into() }
	}
}

impl Component for RawComponent {
	fn id(&self) -> &str {
		"raw"
	}

	fn render(&self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<(), ComponentError> {
		frame.render_widget(Paragraph::new(self.text.as_str()), area);
		Ok(())
	}
}

/// Fails in its `init` lifecycle hook.
pub struct FailingInit {
	message: String,
}

impl FailingInit {
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}
}

impl Component for FailingInit {
	fn id(&self) -> &str {
		"failing-init"
	}

	fn init(&mut self, _instance: &Instance) -> Result<(), ComponentError> {
		Err(ComponentError::Init(self.message.clone()))
	}

	fn render(&self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<(), ComponentError> {
		frame.render_widget(Paragraph::new("mounted"), area);
		Ok(())
	}
}

/// Fails when Enter is pressed, like a button whose click handler throws.
#[derive(Default)]
pub struct TriggerError {
	pub presses: usize,
}

impl Component for TriggerError {
	fn id(&self) -> &str {
		"trigger-error"
	}

	fn handle_event(&mut self, event: &Event, _instance: &Instance) -> Result<Vec<Action>, ComponentError> {
		match event {
			Event::Key(key) if key.code == KeyCode::Enter => {
				self.presses += 1;
				Err(ComponentError::Event(format!("press {}", self.presses)))
			}
			_ => Ok(Vec::new()),
		}
	}

	fn render(&self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<(), ComponentError> {
		frame.render_widget(Paragraph::new("[ click ]"), area);
		Ok(())
	}
}

/// Fails in its `update` and `unmount` lifecycle hooks.
pub struct FailingHooks;

impl Component for FailingHooks {
	fn id(&self) -> &str {
		"failing-hooks"
	}

	fn update(&mut self, action: &Action, _instance: &Instance) -> Result<Vec<Action>, ComponentError> {
		Err(ComponentError::Update(format!("{action:?}")))
	}

	fn render(&self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<(), ComponentError> {
		frame.render_widget(Paragraph::new("hooks"), area);
		Ok(())
	}

	fn unmount(&mut self, _instance: &Instance) -> Result<(), ComponentError> {
		Err(ComponentError::Unmount("bye".into()))
	}
}

/// What [`FailingRender`] does once its primary render failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
	None,
	Draws,
	Fails,
}

/// Fails in `render`, then behaves as configured in `render_error`.
pub struct FailingRender {
	fallback: Fallback,
}

impl FailingRender {
	pub fn new(fallback: Fallback) -> Self {
		Self { fallback }
	}
}

impl Component for FailingRender {
	fn id(&self) -> &str {
		"failing-render"
	}

	fn render(&self, _frame: &mut Frame, _area: Rect, _ctx: &RenderContext) -> Result<(), ComponentError> {
		Err(ComponentError::Render("render".into()))
	}

	fn render_error(
		&self,
		frame: &mut Frame,
		area: Rect,
		_ctx: &RenderContext,
		error: &ComponentError,
	) -> Option<Result<(), ComponentError>> {
		match self.fallback {
			Fallback::None => None,
			Fallback::Draws => {
				frame.render_widget(Paragraph::new(format!("oops: {error}")), area);
				Some(Ok(()))
			}
			Fallback::Fails => Some(Err(ComponentError::Render("renderError".into()))),
		}
	}
}

/// Reports a handled error by hand through its [`Reporter`] on Enter.
#[derive(Default)]
pub struct ManualReport {
	pub last_answer: Option<bool>,
}

impl Component for ManualReport {
	fn id(&self) -> &str {
		"manual-report"
	}

	fn handle_event(&mut self, event: &Event, instance: &Instance) -> Result<Vec<Action>, ComponentError> {
		if let Event::Key(key) = event {
			if key.code == KeyCode::Enter {
				let handled = ComponentError::Event("handled".into());
				self.last_answer = instance.reporter().map(|r| r.capture_exception(&handled));
				return Ok(vec![Action::Render]);
			}
		}
		Ok(Vec::new())
	}

	fn render(&self, frame: &mut Frame, area: Rect, ctx: &RenderContext) -> Result<(), ComponentError> {
		let state = match ctx.extension::<Reporter>() {
			Some(reporter) if reporter.is_enabled() => "reporting on",
			Some(_) => "reporting off",
			None => "no reporter",
		};
		frame.render_widget(Paragraph::new(state), area);
		Ok(())
	}
}
