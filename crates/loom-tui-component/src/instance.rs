// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::fmt;

use http::Extensions;

/// Identifier assigned to each mounted component, unique per [`crate::App`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct InstanceId(pub u64);

impl fmt::Display for InstanceId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "#{}", self.0)
	}
}

/// A mounted component as seen by plugins and error handlers.
///
/// Each instance carries its own copy of the extensions registered on the
/// app with [`crate::App::provide`] before it was mounted.
#[derive(Debug)]
pub struct Instance {
	uid: InstanceId,
	name: String,
	extensions: Extensions,
}

impl Instance {
	pub(crate) fn new(uid: InstanceId, name: impl Into<String>, extensions: Extensions) -> Self {
		Self {
			uid,
			name: name.into(),
			extensions,
		}
	}

	pub fn uid(&self) -> InstanceId {
		self.uid
	}

	/// The component id this instance was mounted from.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Look up an accessor a plugin attached to every instance.
	pub fn extension<T: Send + Sync + 'static>(&self) -> Option<&T> {
		self.extensions.get::<T>()
	}
}
