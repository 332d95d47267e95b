use crate::core::styles::{BadgeVariant, badge_classes};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct BadgeProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: BadgeVariant,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Badge)]
pub(crate) fn badge(props: &BadgeProps) -> Html {
    html! {
        <span class={classes!(badge_classes(props.variant).to_string(), props.class.clone())}>
            { for props.children.iter() }
        </span>
    }
}
