// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod yew_ui;

// Export `pub` symbols below. Remaining symbols are effectively `pub(crate)`.
pub use self::yew_ui::*;

// Re-export socials_common.
pub use socials_common::{self, *};

// Re-export commonly-used third party crates.
// `yew` is ommitted since its macros require it to be a direct dependency.
pub use yew_icons;
