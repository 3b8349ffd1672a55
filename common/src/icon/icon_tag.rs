// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use serde::{Deserialize, Serialize};
use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Which social media or contact icon to show. Also selects the validation
/// rule applied to the link destination.
#[derive(
    Copy,
    Clone,
    Debug,
    Eq,
    PartialEq,
    Hash,
    Ord,
    PartialOrd,
    Serialize,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum IconTag {
    Mail,
    Github,
    Twitter,
    Facebook,
    Youtube,
    Linkedin,
    Discord,
}

impl IconTag {
    /// Lowercase tag name, e.g. `"github"`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn is_mail(self) -> bool {
        self == Self::Mail
    }
}
