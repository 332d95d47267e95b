use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct LabelProps {
    #[prop_or_default]
    pub for_input: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Label)]
pub(crate) fn label(props: &LabelProps) -> Html {
    html! {
        <label
            class={classes!(
                "text-sm",
                "font-medium",
                "leading-none",
                "peer-disabled:cursor-not-allowed",
                "peer-disabled:opacity-70",
                props.class.clone()
            )}
            for={props.for_input.clone()}
        >
            { for props.children.iter() }
            {required_marker(props.required)}
        </label>
    }
}

/// Red asterisk appended to required field labels.
pub(crate) fn required_marker(required: bool) -> Html {
    if required {
        html! { <span class="text-destructive ml-1">{"*"}</span> }
    } else {
        html! {}
    }
}
