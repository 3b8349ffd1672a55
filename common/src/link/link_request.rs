// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use super::validate_destination;
use crate::IconTag;
use serde::{Deserialize, Serialize};
use std::num::NonZeroU8;

/// Icon size in Tailwind spacing units (`h-8 w-8`).
pub const DEFAULT_ICON_SIZE: NonZeroU8 = match NonZeroU8::new(8) {
    Some(size) => size,
    None => unreachable!(),
};

/// Input to a single icon render.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkRequest {
    pub tag: IconTag,
    #[serde(default)]
    pub destination: Option<String>,
    /// Deserializing a size of 0 fails.
    #[serde(default = "default_size")]
    pub size: NonZeroU8,
}

fn default_size() -> NonZeroU8 {
    DEFAULT_ICON_SIZE
}

impl LinkRequest {
    pub fn new(tag: IconTag, destination: Option<String>) -> Self {
        Self {
            tag,
            destination,
            size: DEFAULT_ICON_SIZE,
        }
    }

    /// Zero is bumped to 1; icons are never collapsed to nothing.
    pub fn with_size(mut self, size: u8) -> Self {
        self.size = NonZeroU8::new(size).unwrap_or(NonZeroU8::MIN);
        self
    }

    /// See [`validate_destination`].
    pub fn valid_destination(&self) -> Option<&str> {
        validate_destination(self.tag, self.destination.as_deref())
    }
}
