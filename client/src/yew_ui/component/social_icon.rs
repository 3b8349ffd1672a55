// SPDX-FileCopyrightText: 2024 Softbear, Inc.
// SPDX-License-Identifier: LGPL-3.0-or-later

use crate::{icon_id, ExternalLink};
use socials_common::{validate_destination, IconTag, DEFAULT_ICON_SIZE};
use yew::virtual_dom::AttrValue;
use yew::{classes, function_component, html, Html, Properties};
use yew_icons::Icon;

const LINK_CLASS: &str = "text-sm text-slate-500 transition hover:text-slate-600";
const ICON_CLASS: &str = "fill-current text-slate-700 hover:text-primary-500 dark:text-slate-200 dark:hover:text-primary-400";

#[derive(PartialEq, Properties)]
pub struct SocialIconProps {
    pub kind: IconTag,
    /// Where the icon links to. Nothing is rendered if absent or invalid.
    #[prop_or(None)]
    pub href: Option<AttrValue>,
    /// Tailwind spacing units; sets both width and height.
    #[prop_or(DEFAULT_ICON_SIZE.get())]
    pub size: u8,
}

#[function_component(SocialIcon)]
pub fn social_icon(props: &SocialIconProps) -> Html {
    let Some(href) = props
        .href
        .clone()
        .filter(|href| validate_destination(props.kind, Some(href.as_str())).is_some())
    else {
        return Html::default();
    };

    let size = props.size.max(1);
    // Tailwind spacing is a quarter rem per unit.
    let extent = AttrValue::from(format!("{}rem", size as f32 / 4.0));

    html! {
        <ExternalLink class={classes!(LINK_CLASS)} {href}>
            <span class="sr-only">{props.kind.as_str()}</span>
            <Icon
                icon_id={icon_id(props.kind)}
                width={extent.clone()}
                height={extent}
                class={classes!(ICON_CLASS, format!("h-{size}"), format!("w-{size}"))}
            />
        </ExternalLink>
    }
}
