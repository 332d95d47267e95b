use crate::core::styles::{ButtonSize, ButtonVariant, button_classes};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct ButtonProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub disabled: bool,
    /// Shows a spinner and blocks clicks.
    #[prop_or_default]
    pub loading: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or(AttrValue::Static("button"))]
    pub r#type: AttrValue,
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(Button)]
pub(crate) fn button(props: &ButtonProps) -> Html {
    let classes = classes!(
        button_classes(props.variant, props.size).to_string(),
        props.class.clone()
    );

    html! {
        <button
            class={classes}
            r#type={props.r#type.clone()}
            disabled={props.disabled || props.loading}
            aria-busy={props.loading.then_some("true")}
            onclick={props.onclick.clone()}
        >
            {if props.loading {
                html! {
                    <span
                        class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"
                        aria-hidden="true"
                    ></span>
                }
            } else {
                html! {}
            }}
            { for props.children.iter() }
        </button>
    }
}
