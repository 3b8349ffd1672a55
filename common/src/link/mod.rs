// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod destination;
mod link_request;

pub use destination::{is_mail_destination, validate_destination, MAILTO_PREFIX};
pub use link_request::{LinkRequest, DEFAULT_ICON_SIZE};
