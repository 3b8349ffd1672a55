// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::IconTag;
use regex::Regex;
use std::sync::LazyLock;

pub const MAILTO_PREFIX: &str = "mailto:";

/// Simple ASCII mail addresses only. `[[:word:]]` is `[0-9A-Za-z_]`.
static MAIL_DESTINATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^mailto:",
        r"[[:word:]]+([.-]?[[:word:]]+)*",
        r"@",
        r"[[:word:]]+([.-]?[[:word:]]+)*",
        r"(\.[[:word:]]{2,3})+$",
    ))
    .unwrap()
});

/// Returns true if `destination` is a `mailto:` link to a plain address.
///
/// Deliberately narrower than RFC 5322: no quoting, no `+`, no consecutive
/// separators, and every domain suffix must be 2 or 3 characters long.
pub fn is_mail_destination(destination: &str) -> bool {
    MAIL_DESTINATION.is_match(destination)
}

/// Returns the destination if a link to it may be rendered for `tag`, or
/// `None` if the icon should be omitted.
pub fn validate_destination(tag: IconTag, destination: Option<&str>) -> Option<&str> {
    let destination = destination.filter(|d| !d.is_empty())?;
    if tag.is_mail() && !is_mail_destination(destination) {
        #[cfg(feature = "log")]
        log::debug!("rejected {tag} destination {destination:?}");
        return None;
    }
    Some(destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn mail_accepts() {
        for ok in [
            "mailto:user@example.com",
            "mailto:a.b@c.co",
            "mailto:first-last@sub.example.org",
            "mailto:x_y@mail.example.co.uk",
            "mailto:a1@b2.io",
        ] {
            assert!(is_mail_destination(ok), "{ok}");
        }
    }

    #[test]
    fn mail_rejects() {
        for bad in [
            "user@example.com",
            "mailto:not-an-email",
            "MAILTO:user@example.com",
            "mailto:",
            "mailto:@example.com",
            "mailto:user@",
            "mailto:user@example",
            "mailto:user@example.info",
            "mailto:user@example.c",
            "mailto:a..b@example.com",
            "mailto:a.-b@example.com",
            "mailto:.a@example.com",
            "mailto:a.@example.com",
            "mailto:user+tag@example.com",
            "mailto:us er@example.com",
            "mailto:user@example.com?subject=hi",
            "mailto:jürgen@example.com",
            "mailto:user@exämple.com",
            " mailto:user@example.com",
        ] {
            assert!(!is_mail_destination(bad), "{bad}");
        }
    }

    #[test]
    fn absent_or_empty() {
        for tag in IconTag::iter() {
            assert_eq!(validate_destination(tag, None), None);
            assert_eq!(validate_destination(tag, Some("")), None);
        }
    }

    #[test]
    fn non_mail_accepts_anything_non_empty() {
        for tag in IconTag::iter().filter(|t| !t.is_mail()) {
            for href in ["https://example.com/me", "not even a url", "mailto:nope"] {
                assert_eq!(validate_destination(tag, Some(href)), Some(href));
            }
        }
    }

    #[test]
    fn mail_uses_grammar() {
        assert_eq!(
            validate_destination(IconTag::Mail, Some("mailto:user@example.com")),
            Some("mailto:user@example.com")
        );
        assert_eq!(
            validate_destination(IconTag::Mail, Some("user@example.com")),
            None
        );
        assert_eq!(
            validate_destination(IconTag::Mail, Some("mailto:not-an-email")),
            None
        );
        assert_eq!(
            validate_destination(IconTag::Mail, Some("mailto:a.b@c.co")),
            Some("mailto:a.b@c.co")
        );
    }
}
