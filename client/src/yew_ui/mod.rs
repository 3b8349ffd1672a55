// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod app;
mod component;
mod icon_registry;

pub use app::entry_point;
pub use component::*;
pub use icon_registry::icon_id;
