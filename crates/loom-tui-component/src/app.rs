// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Application host: the global error channel, plugin registration and the
//! mount/render/dispatch cycle for components.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use http::Extensions;
use loom_tui_core::{Action, ComponentError, ErrorInfo, Event};
use ratatui::backend::Backend;
use ratatui::layout::Rect;
use ratatui::{Frame, Terminal};
use tracing::{debug, error};

use crate::instance::{Instance, InstanceId};
use crate::{Component, RenderContext};

/// Application-wide handler for faults escaping component code.
///
/// Receives the original error, the instance it escaped from, and where in
/// the lifecycle it happened.
pub type ErrorHandler = Arc<dyn Fn(&ComponentError, &Instance, &ErrorInfo) + Send + Sync>;

/// Global configuration of an [`App`].
#[derive(Default, Clone)]
pub struct AppConfig {
	error_handler: Option<ErrorHandler>,
}

impl AppConfig {
	/// The currently installed error handler, if any.
	pub fn error_handler(&self) -> Option<&ErrorHandler> {
		self.error_handler.as_ref()
	}

	pub fn set_error_handler<F>(&mut self, handler: F)
	where
		F: Fn(&ComponentError, &Instance, &ErrorInfo) + Send + Sync + 'static,
	{
		self.error_handler = Some(Arc::new(handler));
	}

	/// Install `handler`, returning the one it displaced.
	pub fn replace_error_handler(&mut self, handler: ErrorHandler) -> Option<ErrorHandler> {
		self.error_handler.replace(handler)
	}

	pub fn take_error_handler(&mut self) -> Option<ErrorHandler> {
		self.error_handler.take()
	}
}

impl fmt::Debug for AppConfig {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("AppConfig")
			.field("error_handler", &self.error_handler.is_some())
			.finish()
	}
}

/// Extension registered against an [`App`] with [`App::use_plugin`].
pub trait Plugin {
	type Options;

	/// Name used to record the installation on the app.
	fn name(&self) -> &'static str;

	fn install(&self, app: &mut App, options: Self::Options);
}

/// A framework instance: owns the global configuration and the extensions
/// handed to every component mounted on it.
#[derive(Debug, Default)]
pub struct App {
	config: AppConfig,
	extensions: Extensions,
	plugins: Vec<&'static str>,
	next_uid: AtomicU64,
}

impl App {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn config(&self) -> &AppConfig {
		&self.config
	}

	pub fn config_mut(&mut self) -> &mut AppConfig {
		&mut self.config
	}

	/// Attach `value` to every instance mounted from now on.
	pub fn provide<T: Clone + Send + Sync + 'static>(&mut self, value: T) {
		self.extensions.insert(value);
	}

	/// Register a plugin. A plugin whose name is already recorded is skipped.
	pub fn use_plugin<P: Plugin>(&mut self, plugin: &P, options: P::Options) -> &mut Self {
		let name = plugin.name();
		if self.plugins.contains(&name) {
			debug!(plugin = name, "plugin already installed");
			return self;
		}
		plugin.install(self, options);
		self.plugins.push(name);
		self
	}

	pub fn installed_plugins(&self) -> &[&'static str] {
		&self.plugins
	}

	/// Route a component fault to the installed error handler.
	///
	/// Without a handler the fault is logged and otherwise dropped.
	pub fn handle_error(&self, err: &ComponentError, instance: &Instance, info: &ErrorInfo) {
		match &self.config.error_handler {
			Some(handler) => handler(err, instance, info),
			None => error!(
				component = instance.name(),
				uid = %instance.uid(),
				info = %info,
				error = %err,
				"Unhandled component error"
			),
		}
	}

	/// Attach `component`, run its `init` hook and draw it once.
	///
	/// Fails only when the component's fallback render fails (or the
	/// terminal does); every other fault is routed through
	/// [`App::handle_error`] and mounting carries on.
	pub fn mount<C, B>(&self, component: C, terminal: &mut Terminal<B>) -> Result<Mounted<'_, C>, ComponentError>
	where
		C: Component,
		B: Backend,
	{
		let uid = InstanceId(self.next_uid.fetch_add(1, Ordering::Relaxed));
		let instance = Instance::new(uid, component.id(), self.extensions.clone());
		let mut mounted = Mounted {
			app: self,
			component,
			instance,
		};

		if let Err(err) = mounted.component.init(&mounted.instance) {
			self.handle_error(&err, &mounted.instance, &ErrorInfo::Hook("init"));
		}

		mounted.render(terminal)?;
		Ok(mounted)
	}
}

/// A component attached to an [`App`].
pub struct Mounted<'app, C> {
	app: &'app App,
	component: C,
	instance: Instance,
}

impl<C: Component> Mounted<'_, C> {
	pub fn instance(&self) -> &Instance {
		&self.instance
	}

	pub fn component(&self) -> &C {
		&self.component
	}

	pub fn render<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<(), ComponentError> {
		let mut outcome = Ok(());
		terminal
			.draw(|frame| {
				let area = frame.area();
				outcome = self.render_frame(frame, area);
			})
			.map_err(|e| ComponentError::Backend(e.to_string()))?;
		outcome
	}

	fn render_frame(&self, frame: &mut Frame, area: Rect) -> Result<(), ComponentError> {
		let ctx = RenderContext::new(&self.instance);
		let Err(err) = self.component.render(frame, area, &ctx) else {
			return Ok(());
		};

		// A failing fallback supersedes the primary fault: only it is routed.
		match self.component.render_error(frame, area, &ctx, &err) {
			None | Some(Ok(())) => {
				self.app.handle_error(&err, &self.instance, &ErrorInfo::Render);
				Ok(())
			}
			Some(Err(fallback)) => {
				self.app.handle_error(&fallback, &self.instance, &ErrorInfo::RenderError);
				Err(fallback)
			}
		}
	}

	/// Feed a terminal event to the component.
	pub fn dispatch(&mut self, event: &Event) -> Vec<Action> {
		match self.component.handle_event(event, &self.instance) {
			Ok(actions) => actions,
			Err(err) => {
				self.app.handle_error(&err, &self.instance, &ErrorInfo::Event);
				Vec::new()
			}
		}
	}

	pub fn apply(&mut self, action: &Action) -> Vec<Action> {
		match self.component.update(action, &self.instance) {
			Ok(actions) => actions,
			Err(err) => {
				self.app.handle_error(&err, &self.instance, &ErrorInfo::Hook("update"));
				Vec::new()
			}
		}
	}

	/// Detach the component, running its `unmount` hook.
	pub fn unmount(mut self) -> C {
		if let Err(err) = self.component.unmount(&self.instance) {
			self.app.handle_error(&err, &self.instance, &ErrorInfo::Hook("unmount"));
		}
		self.component
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use crossterm::event::{KeyCode, KeyEvent};
	use ratatui::backend::TestBackend;
	use ratatui::widgets::Paragraph;

	use super::*;

	type Seen = Arc<Mutex<Vec<(String, String)>>>;

	struct Flaky {
		fail_init: bool,
		fail_render: bool,
		fallback: Option<bool>,
	}

	impl Flaky {
		fn healthy() -> Self {
			Self {
				fail_init: false,
				fail_render: false,
				fallback: None,
			}
		}
	}

	impl Component for Flaky {
		fn id(&self) -> &str {
			"flaky"
		}

		fn init(&mut self, _instance: &Instance) -> Result<(), ComponentError> {
			if self.fail_init {
				return Err(ComponentError::Init("init".into()));
			}
			Ok(())
		}

		fn handle_event(&mut self, event: &Event, _instance: &Instance) -> Result<Vec<Action>, ComponentError> {
			match event {
				Event::Key(_) => Err(ComponentError::Event("key".into())),
				_ => Ok(vec![Action::Render]),
			}
		}

		fn update(&mut self, action: &Action, _instance: &Instance) -> Result<Vec<Action>, ComponentError> {
			match action {
				Action::Quit => Err(ComponentError::Update("quit".into())),
				_ => Ok(Vec::new()),
			}
		}

		fn render(&self, frame: &mut Frame, area: Rect, _ctx: &RenderContext) -> Result<(), ComponentError> {
			if self.fail_render {
				return Err(ComponentError::Render("render".into()));
			}
			frame.render_widget(Paragraph::new("ok"), area);
			Ok(())
		}

		fn render_error(
			&self,
			frame: &mut Frame,
			area: Rect,
			_ctx: &RenderContext,
			_error: &ComponentError,
		) -> Option<Result<(), ComponentError>> {
			let works = self.fallback?;
			if !works {
				return Some(Err(ComponentError::Render("renderError".into())));
			}
			frame.render_widget(Paragraph::new("fallback"), area);
			Some(Ok(()))
		}

		fn unmount(&mut self, _instance: &Instance) -> Result<(), ComponentError> {
			Err(ComponentError::Unmount("bye".into()))
		}
	}

	fn recording_app() -> (App, Seen) {
		let seen: Seen = Arc::default();
		let mut app = App::new();
		let sink = Arc::clone(&seen);
		app.config_mut().set_error_handler(move |err, _instance, info| {
			sink.lock().unwrap().push((err.to_string(), info.to_string()));
		});
		(app, seen)
	}

	fn terminal() -> Terminal<TestBackend> {
		Terminal::new(TestBackend::new(20, 1)).unwrap()
	}

	#[test]
	fn healthy_mount_routes_nothing() {
		let (app, seen) = recording_app();
		let mounted = app.mount(Flaky::healthy(), &mut terminal()).unwrap();
		assert!(seen.lock().unwrap().is_empty());
		assert_eq!(mounted.instance().name(), "flaky");
	}

	#[test]
	fn init_failure_is_routed_and_mount_continues() {
		let (app, seen) = recording_app();
		let component = Flaky {
			fail_init: true,
			..Flaky::healthy()
		};
		assert!(app.mount(component, &mut terminal()).is_ok());
		assert_eq!(
			*seen.lock().unwrap(),
			vec![("initialization failed: init".to_string(), "init hook".to_string())]
		);
	}

	#[test]
	fn render_failure_without_fallback_leaves_frame_blank() {
		let (app, seen) = recording_app();
		let component = Flaky {
			fail_render: true,
			..Flaky::healthy()
		};
		let mut terminal = terminal();
		assert!(app.mount(component, &mut terminal).is_ok());
		assert_eq!(seen.lock().unwrap().len(), 1);
		assert_eq!(seen.lock().unwrap()[0].1, "render");
	}

	#[test]
	fn working_fallback_is_drawn() {
		let (app, seen) = recording_app();
		let component = Flaky {
			fail_render: true,
			fallback: Some(true),
			..Flaky::healthy()
		};
		let mut terminal = terminal();
		app.mount(component, &mut terminal).unwrap();

		let buffer = terminal.backend().buffer();
		let line: String = (0..buffer.area.width).map(|x| buffer[(x, 0)].symbol().to_string()).collect();
		assert!(line.starts_with("fallback"));
		assert_eq!(seen.lock().unwrap().len(), 1);
	}

	#[test]
	fn failing_fallback_is_routed_and_surfaces() {
		let (app, seen) = recording_app();
		let component = Flaky {
			fail_render: true,
			fallback: Some(false),
			..Flaky::healthy()
		};
		let err = app.mount(component, &mut terminal()).err().unwrap();
		assert_eq!(err.to_string(), "render failed: renderError");

		assert_eq!(
			*seen.lock().unwrap(),
			vec![("render failed: renderError".to_string(), "render_error".to_string())]
		);
	}

	#[test]
	fn event_and_update_failures_are_routed() {
		let (app, seen) = recording_app();
		let mut mounted = app.mount(Flaky::healthy(), &mut terminal()).unwrap();

		let key = Event::Key(KeyEvent::from(KeyCode::Enter));
		assert!(mounted.dispatch(&key).is_empty());
		assert_eq!(mounted.dispatch(&Event::Tick), vec![Action::Render]);
		assert!(mounted.apply(&Action::Quit).is_empty());
		mounted.unmount();

		let infos: Vec<String> = seen.lock().unwrap().iter().map(|(_, info)| info.clone()).collect();
		assert_eq!(infos, vec!["event handler", "update hook", "unmount hook"]);
	}

	#[test]
	fn unhandled_errors_are_logged_not_raised() {
		let app = App::new();
		let component = Flaky {
			fail_init: true,
			..Flaky::healthy()
		};
		assert!(app.mount(component, &mut terminal()).is_ok());
	}

	#[test]
	fn instances_get_distinct_ids_and_provided_extensions() {
		#[derive(Clone)]
		struct Greeting(&'static str);

		let mut app = App::new();
		app.provide(Greeting("hi"));
		let mut terminal = terminal();
		let a = app.mount(Flaky::healthy(), &mut terminal).unwrap();
		let b = app.mount(Flaky::healthy(), &mut terminal).unwrap();

		assert_ne!(a.instance().uid(), b.instance().uid());
		assert_eq!(a.instance().extension::<Greeting>().map(|g| g.0), Some("hi"));
	}

	struct Counter;

	impl Plugin for Counter {
		type Options = u32;

		fn name(&self) -> &'static str {
			"counter"
		}

		fn install(&self, app: &mut App, options: u32) {
			let current = app.extensions.get::<u32>().copied().unwrap_or(0);
			app.provide(current + options);
		}
	}

	#[test]
	fn use_plugin_records_and_skips_repeats() {
		let mut app = App::new();
		app.use_plugin(&Counter, 2).use_plugin(&Counter, 5);

		assert_eq!(app.installed_plugins(), &["counter"]);
		assert_eq!(app.extensions.get::<u32>(), Some(&2));
	}

	fn noop_handler() -> ErrorHandler {
		Arc::new(|_: &ComponentError, _: &Instance, _: &ErrorInfo| {})
	}

	#[test]
	fn replace_error_handler_returns_previous() {
		let mut app = App::new();
		assert!(app.config_mut().replace_error_handler(noop_handler()).is_none());
		assert!(app.config_mut().replace_error_handler(noop_handler()).is_some());
		assert!(app.config_mut().take_error_handler().is_some());
		assert!(app.config().error_handler().is_none());
	}
}
