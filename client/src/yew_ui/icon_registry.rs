// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use socials_common::IconTag;
use yew_icons::IconId;

/// The graphic drawn for each tag.
pub fn icon_id(tag: IconTag) -> IconId {
    match tag {
        IconTag::Mail => IconId::BootstrapEnvelopeFill,
        IconTag::Github => IconId::BootstrapGithub,
        IconTag::Twitter => IconId::BootstrapTwitter,
        IconTag::Facebook => IconId::BootstrapFacebook,
        IconTag::Youtube => IconId::BootstrapYoutube,
        IconTag::Linkedin => IconId::BootstrapLinkedin,
        IconTag::Discord => IconId::BootstrapDiscord,
    }
}
