// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::SocialIcon;
use socials_common::{SocialLinks, DEFAULT_ICON_SIZE};
use std::rc::Rc;
use yew::virtual_dom::AttrValue;
use yew::{function_component, html, Html, Properties};

#[derive(PartialEq, Properties)]
pub struct SocialLinksBarProps {
    pub links: Rc<SocialLinks>,
    #[prop_or(DEFAULT_ICON_SIZE.get())]
    pub size: u8,
}

/// Row of icons, one per configured link. Missing or invalid links are
/// skipped individually.
#[function_component(SocialLinksBar)]
pub fn social_links_bar(props: &SocialLinksBarProps) -> Html {
    html! {
        <div class="mb-3 flex space-x-4">
            {for props.links.requests(props.size).map(|request| html! {
                <SocialIcon
                    key={request.tag.as_str()}
                    kind={request.tag}
                    href={request.destination.map(AttrValue::from)}
                    size={request.size.get()}
                />
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::{SocialLinksBar, SocialLinksBarProps};
    use socials_common::SocialLinks;
    use std::rc::Rc;
    use yew::ServerRenderer;

    async fn render(json: &'static str, size: u8) -> String {
        ServerRenderer::<SocialLinksBar>::with_props(move || SocialLinksBarProps {
            links: Rc::new(SocialLinks::from_json(json).unwrap()),
            size,
        })
        .hydratable(false)
        .render()
        .await
    }

    #[tokio::test]
    async fn empty() {
        assert_eq!(
            render("{}", 8).await,
            r#"<div class="mb-3 flex space-x-4"></div>"#
        );
    }

    #[tokio::test]
    async fn skips_invalid() {
        let html = render(
            r#"{
                "email": "contact@example.com",
                "github": "https://github.com/example",
                "twitter": "",
                "discord": "https://discord.gg/example"
            }"#,
            6,
        )
        .await;
        assert_eq!(html.matches("<a ").count(), 3, "{html}");
        assert!(html.contains(r#"href="mailto:contact@example.com""#), "{html}");
        assert!(html.contains(r#"<span class="sr-only">github</span>"#));
        assert!(html.contains(r#"<span class="sr-only">discord</span>"#));
        assert!(!html.contains(r#"<span class="sr-only">twitter</span>"#));
        assert_eq!(html.matches(" h-6 w-6").count(), 3, "{html}");

        // Mail comes first.
        let mail = html.find("sr-only\">mail").unwrap();
        let github = html.find("sr-only\">github").unwrap();
        assert!(mail < github);
    }

    #[tokio::test]
    async fn bad_email() {
        let html = render(r#"{"email": "contact at example dot com"}"#, 8).await;
        assert!(!html.contains("<a "), "{html}");
    }
}
