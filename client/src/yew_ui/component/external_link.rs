// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use yew::virtual_dom::AttrValue;
use yew::{function_component, html, Children, Classes, Html, Properties};

#[derive(PartialEq, Properties)]
pub struct ExternalLinkProps {
    pub href: AttrValue,
    #[prop_or_default]
    pub class: Classes,
    pub children: Children,
}

/// Anchor that opens in a new tab without exposing `window.opener` or the
/// referrer to the destination.
#[function_component(ExternalLink)]
pub fn external_link(props: &ExternalLinkProps) -> Html {
    html! {
        <a
            class={props.class.clone()}
            target="_blank"
            rel="noopener noreferrer"
            href={props.href.clone()}
        >
            {props.children.clone()}
        </a>
    }
}
