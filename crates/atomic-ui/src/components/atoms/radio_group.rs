use crate::core::ids::generated_id;
use crate::core::selection::{ChoiceItem, choose, project};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct RadioGroupProps {
    pub items: Vec<ChoiceItem>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    /// Shared input name; generated when absent.
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_value_change: Callback<String>,
}

#[function_component(RadioGroup)]
pub(crate) fn radio_group(props: &RadioGroupProps) -> Html {
    let name = use_memo(
        |name| {
            name.as_ref()
                .map_or_else(|| generated_id("radio-group"), ToString::to_string)
        },
        props.name.clone(),
    );

    let radios = project(&props.items, props.value.as_deref(), props.disabled)
        .into_iter()
        .map(|state| {
            let input_id = format!("{}-{}", name, state.value);
            let onchange = {
                let items = props.items.clone();
                let value = state.value.clone();
                let on_value_change = props.on_value_change.clone();
                let disabled = props.disabled;
                Callback::from(move |_: Event| {
                    if let Some(next) = choose(&items, &value, disabled) {
                        on_value_change.emit(next);
                    }
                })
            };
            html! {
                <div key={state.value.clone()} class="flex items-center space-x-2">
                    <input
                        id={input_id.clone()}
                        type="radio"
                        name={(*name).clone()}
                        value={state.value.clone()}
                        class="h-4 w-4 border border-primary text-primary accent-primary focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring disabled:cursor-not-allowed disabled:opacity-50"
                        checked={state.checked}
                        disabled={state.disabled}
                        {onchange}
                    />
                    <label
                        for={input_id}
                        class={classes!(
                            "text-sm", "font-medium", "leading-none",
                            state.disabled.then_some("cursor-not-allowed opacity-70")
                        )}
                    >
                        {state.label}
                    </label>
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div role="radiogroup" class={classes!("grid", "gap-2", props.class.clone())}>
            {radios}
        </div>
    }
}
