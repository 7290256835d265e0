// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for the crash reporting plugin.

use thiserror::Error;

/// Result type alias for crash plugin operations.
pub type Result<T> = std::result::Result<T, CrashTuiError>;

/// Errors raised while resolving the reporting configuration.
///
/// None of these escape installation: the plugin falls back to no-op
/// reporting instead.
#[derive(Debug, Error)]
pub enum CrashTuiError {
	/// The DSN is not a valid URL.
	#[error("invalid DSN: {0}")]
	InvalidDsn(#[from] url::ParseError),

	/// The DSN has no public key in its user-info section.
	#[error("DSN is missing a public key")]
	MissingPublicKey,

	/// The DSN has no host.
	#[error("DSN is missing a host")]
	MissingHost,

	/// The DSN path does not end in a project ID.
	#[error("DSN is missing a project ID")]
	MissingProjectId,

	/// The crash client rejected the DSN.
	#[error("crash client configuration failed: {0}")]
	Configure(String),

	/// The TOML configuration could not be parsed.
	#[error("configuration parse error: {0}")]
	Config(#[from] toml::de::Error),
}
