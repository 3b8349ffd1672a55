// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::{IconTag, LinkRequest, MAILTO_PREFIX};
use serde::{Deserialize, Serialize};

/// Contact details of a site, one optional destination per [`IconTag`].
///
/// ```json
/// {"email": "contact@example.com", "github": "https://github.com/example"}
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SocialLinks {
    /// Plain address; `mailto:` is added when rendering.
    pub email: Option<String>,
    pub github: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub youtube: Option<String>,
    pub linkedin: Option<String>,
    pub discord: Option<String>,
}

impl SocialLinks {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn get(&self, tag: IconTag) -> Option<&str> {
        match tag {
            IconTag::Mail => self.email.as_deref(),
            IconTag::Github => self.github.as_deref(),
            IconTag::Twitter => self.twitter.as_deref(),
            IconTag::Facebook => self.facebook.as_deref(),
            IconTag::Youtube => self.youtube.as_deref(),
            IconTag::Linkedin => self.linkedin.as_deref(),
            IconTag::Discord => self.discord.as_deref(),
        }
    }

    /// Every tag in declaration order, paired with its destination.
    ///
    /// Nothing is validated here. Empty or malformed destinations are passed
    /// through as is and left to the renderer to omit.
    pub fn entries(&self) -> impl Iterator<Item = (IconTag, Option<String>)> + '_ {
        use strum::IntoEnumIterator;
        IconTag::iter().map(|tag| {
            let destination = self.get(tag).map(|d| match tag {
                IconTag::Mail if !d.is_empty() && !d.starts_with(MAILTO_PREFIX) => {
                    format!("{MAILTO_PREFIX}{d}")
                }
                _ => d.to_owned(),
            });
            (tag, destination)
        })
    }

    pub fn requests(&self, size: u8) -> impl Iterator<Item = LinkRequest> + '_ {
        self.entries()
            .map(move |(tag, destination)| LinkRequest::new(tag, destination).with_size(size))
    }
}
