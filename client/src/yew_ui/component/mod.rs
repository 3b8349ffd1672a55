// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

mod external_link;
mod social_icon;
mod social_links_bar;

pub use external_link::{ExternalLink, ExternalLinkProps};
pub use social_icon::{SocialIcon, SocialIconProps};
pub use social_links_bar::{SocialLinksBar, SocialLinksBarProps};
