// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::{SocialLinksBar, SocialLinksBarProps};
use socials_common::{SocialLinks, DEFAULT_ICON_SIZE};
use std::rc::Rc;

/// Mounts a [`SocialLinksBar`] on the document body.
///
/// `config_json` is a serialized [`SocialLinks`].
pub fn entry_point(config_json: &str) -> Result<(), serde_json::Error> {
    #[cfg(feature = "log")]
    let _ = console_log::init_with_level(log::Level::Debug);

    std::panic::set_hook(Box::new(console_error_panic_hook::hook));

    let links = Rc::new(SocialLinks::from_json(config_json)?);
    yew::Renderer::<SocialLinksBar>::with_props(SocialLinksBarProps {
        links,
        size: DEFAULT_ICON_SIZE.get(),
    })
    .render();
    Ok(())
}
