use crate::core::ids::element_id;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct CheckboxProps {
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

#[function_component(Checkbox)]
pub(crate) fn checkbox(props: &CheckboxProps) -> Html {
    let checkbox_id = use_memo(|id| element_id("checkbox", id.as_deref(), None), props.id.clone());
    let onchange = {
        let on_checked_change = props.on_checked_change.clone();
        Callback::from(move |event: Event| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                on_checked_change.emit(input.checked());
            }
        })
    };

    html! {
        <div class={classes!("flex", "items-center", "space-x-2", props.class.clone())}>
            <input
                id={(*checkbox_id).clone()}
                type="checkbox"
                class="peer h-4 w-4 shrink-0 rounded-sm border border-primary ring-offset-background focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50 accent-primary"
                disabled={props.disabled}
                checked={props.checked}
                {onchange}
            />
            {props.label.clone().map(|text| html! {
                <label
                    for={(*checkbox_id).clone()}
                    class="text-sm font-medium leading-none peer-disabled:cursor-not-allowed peer-disabled:opacity-70"
                >
                    {text}
                </label>
            }).unwrap_or_default()}
        </div>
    }
}
