use crate::core::styles::{CardVariant, card_classes};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: CardVariant,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!(card_classes(props.variant).to_string(), props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub(crate) struct CardSectionProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(CardHeader)]
pub(crate) fn card_header(props: &CardSectionProps) -> Html {
    html! {
        <div class={classes!("flex", "flex-col", "space-y-1.5", "p-6", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardContent)]
pub(crate) fn card_content(props: &CardSectionProps) -> Html {
    html! {
        <div class={classes!("p-6", "pt-0", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}

#[function_component(CardFooter)]
pub(crate) fn card_footer(props: &CardSectionProps) -> Html {
    html! {
        <div class={classes!("flex", "items-center", "p-6", "pt-0", props.class.clone())}>
            { for props.children.iter() }
        </div>
    }
}
