// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod icon;
mod link;
mod social_links;

pub use icon::*;
pub use link::*;
pub use social_links::SocialLinks;

// Re-export commonly-used third party crates.
pub use {serde, strum};
