use crate::core::ids::element_id;
use crate::core::styles::{switch_thumb_classes, switch_track_classes};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SwitchProps {
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub checked: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_checked_change: Callback<bool>,
}

#[function_component(Switch)]
pub(crate) fn switch(props: &SwitchProps) -> Html {
    let switch_id = use_memo(|id| element_id("switch", id.as_deref(), None), props.id.clone());
    let onclick = {
        let on_checked_change = props.on_checked_change.clone();
        let checked = props.checked;
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| {
            if !disabled {
                on_checked_change.emit(!checked);
            }
        })
    };

    html! {
        <div class={classes!("flex", "items-center", "space-x-2", props.class.clone())}>
            <button
                id={(*switch_id).clone()}
                type="button"
                role="switch"
                aria-checked={if props.checked { "true" } else { "false" }}
                class={switch_track_classes(props.checked, props.disabled).to_string()}
                disabled={props.disabled}
                {onclick}
            >
                <span class={switch_thumb_classes(props.checked).to_string()}></span>
            </button>
            {props.label.clone().map(|text| html! {
                <label for={(*switch_id).clone()} class="text-sm font-medium leading-none">
                    {text}
                </label>
            }).unwrap_or_default()}
        </div>
    }
}
