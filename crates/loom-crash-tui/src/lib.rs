// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Crash reporting for Loom TUI applications.
//!
//! Installing [`CrashPlugin`] on an [`App`](loom_tui_component::App) does two
//! things:
//!
//! - every mounted component instance gets a [`Reporter`] it can use to
//!   report errors by hand (see [`InstanceReporterExt`])
//! - the app's error handler is replaced by a [`HandlerChain`] that forwards
//!   each fault to the crash client once and then runs the handler that was
//!   installed before
//!
//! # Quick Start
//!
//! ```ignore
//! use loom_crash_tui::{CaptureConfig, CrashPlugin};
//! use loom_tui_component::App;
//!
//! let mut app = App::new();
//! app.config_mut().set_error_handler(|err, instance, info| {
//!     eprintln!("{} failed in {info}: {err}", instance.name());
//! });
//! app.use_plugin(&CrashPlugin::new(client), CaptureConfig::from_toml_str(&config)?.apply_env());
//! ```
//!
//! Without a DSN, with an invalid one, or with `disable_report = true` the
//! plugin still installs but reporting is a no-op: the reporter answers
//! `false` and the client is never called.

mod chain;
mod client;
mod config;
mod dsn;
mod error;
mod plugin;

pub use chain::HandlerChain;
pub use client::{CapturesExceptions, InstanceReporterExt, ReportClient, Reporter};
pub use config::{CaptureConfig, ENV_DISABLE_REPORT, ENV_DSN};
pub use dsn::Dsn;
pub use error::{CrashTuiError, Result};
pub use plugin::{install, CrashPlugin, PLUGIN_NAME};
