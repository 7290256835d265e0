// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

mod client;
mod stubs;

pub use client::{CapturedError, RecordingClient};
pub use stubs::{FailingHooks, FailingInit, FailingRender, Fallback, ManualReport, RawComponent, TriggerError};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use loom_tui_core::Event;
use ratatui::{backend::TestBackend, Terminal};

pub struct TestHarness {
	terminal: Terminal<TestBackend>,
}

impl TestHarness {
	pub fn new(width: u16, height: u16) -> Self {
		let backend = TestBackend::new(width, height);
		let terminal = Terminal::new(backend).expect("failed to create terminal");
		Self { terminal }
	}

	pub fn terminal(&mut self) -> &mut Terminal<TestBackend> {
		&mut self.terminal
	}

	pub fn buffer_lines(&self) -> Vec<String> {
		let buffer = self.terminal.backend().buffer();
		let area = buffer.area;
		let mut lines = Vec::new();

		for y in area.y..area.y + area.height {
			let mut line = String::new();
			for x in area.x..area.x + area.width {
				let cell = &buffer[(x, y)];
				line.push_str(cell.symbol());
			}
			lines.push(line);
		}

		lines
	}

	pub fn find_text(&self, needle: &str) -> Option<(usize, usize)> {
		let lines = self.buffer_lines();
		for (row, line) in lines.iter().enumerate() {
			if let Some(col) = line.find(needle) {
				return Some((row, col));
			}
		}
		None
	}
}

impl Default for TestHarness {
	fn default() -> Self {
		Self::new(40, 3)
	}
}

/// A plain key press.
pub fn key(code: KeyCode) -> Event {
	Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

pub fn press_enter() -> Event {
	key(KeyCode::Enter)
}
