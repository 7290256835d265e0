// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Installation options for the crash plugin.

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Environment variable holding the DSN.
pub const ENV_DSN: &str = "LOOM_CRASH_DSN";
/// Environment variable forcing no-op reporting.
pub const ENV_DISABLE_REPORT: &str = "LOOM_CRASH_DISABLE_REPORT";

/// Options read once when the plugin is installed.
///
/// ```toml
/// dsn = "https://public@crash.example.com/42"
/// disable_report = false
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaptureConfig {
	/// Locator of the remote project. Reporting is a no-op without one.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dsn: Option<String>,
	/// Force no-op reporting even when a DSN is set.
	pub disable_report: bool,
}

impl CaptureConfig {
	pub fn with_dsn(dsn: impl Into<String>) -> Self {
		Self {
			dsn: Some(dsn.into()),
			disable_report: false,
		}
	}

	pub fn disabled() -> Self {
		Self {
			dsn: None,
			disable_report: true,
		}
	}

	pub fn from_toml_str(s: &str) -> Result<Self> {
		Ok(toml::from_str(s)?)
	}

	/// Overlay `LOOM_CRASH_DSN` and `LOOM_CRASH_DISABLE_REPORT`.
	pub fn apply_env(self) -> Self {
		self.apply_vars(|key| std::env::var(key).ok())
	}

	fn apply_vars(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
		if let Some(dsn) = lookup(ENV_DSN).filter(|v| !v.trim().is_empty()) {
			self.dsn = Some(dsn);
		}
		if let Some(flag) = lookup(ENV_DISABLE_REPORT) {
			self.disable_report = parse_flag(&flag);
		}
		self
	}
}

fn parse_flag(value: &str) -> bool {
	matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
