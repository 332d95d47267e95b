use crate::components::hooks::use_outside_click;
use crate::core::selection::{ChoiceItem, Disclosure, choose, project, selected_label};
use crate::core::styles::{field_classes, item_classes};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct SelectProps {
    pub items: Vec<ChoiceItem>,
    #[prop_or_default]
    pub value: Option<AttrValue>,
    #[prop_or(AttrValue::Static("Select an option"))]
    pub placeholder: AttrValue,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_value_change: Callback<String>,
}

/// Single-value dropdown list.
#[function_component(Select)]
pub(crate) fn select(props: &SelectProps) -> Html {
    let disclosure = use_state_eq(Disclosure::default);
    let root = use_node_ref();

    {
        let disclosure = disclosure.clone();
        use_outside_click(
            root.clone(),
            Callback::from(move |()| disclosure.set(disclosure.close())),
        );
    }

    let toggle = {
        let disclosure = disclosure.clone();
        let disabled = props.disabled;
        Callback::from(move |_: MouseEvent| disclosure.set(disclosure.toggle(disabled)))
    };

    let selected = props.value.as_deref();
    let trigger_label = selected_label(&props.items, selected)
        .map_or_else(|| props.placeholder.to_string(), str::to_string);

    let options = project(&props.items, selected, props.disabled)
        .into_iter()
        .map(|state| {
            let onclick = {
                let items = props.items.clone();
                let value = state.value.clone();
                let on_value_change = props.on_value_change.clone();
                let disclosure = disclosure.clone();
                let disabled = props.disabled;
                Callback::from(move |_: MouseEvent| {
                    if let Some(next) = choose(&items, &value, disabled) {
                        on_value_change.emit(next);
                        disclosure.set(disclosure.close());
                    }
                })
            };
            html! {
                <div
                    key={state.value.clone()}
                    role="option"
                    aria-selected={if state.checked { "true" } else { "false" }}
                    aria-disabled={state.disabled.then_some("true")}
                    class={item_classes(state.checked, state.disabled).to_string()}
                    {onclick}
                >
                    {state.label}
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div ref={root} class={classes!("relative", props.class.clone())}>
            <button
                type="button"
                role="combobox"
                aria-expanded={if disclosure.is_open() { "true" } else { "false" }}
                class={classes!(
                    "h-10",
                    "items-center",
                    "justify-between",
                    field_classes(false).to_string()
                )}
                disabled={props.disabled}
                onclick={toggle}
            >
                <span class={classes!(selected.is_none().then_some("text-muted-foreground"))}>
                    {trigger_label}
                </span>
                <span class="ml-2 opacity-50" aria-hidden="true">{"\u{25be}"}</span>
            </button>
            if disclosure.is_open() {
                <div
                    role="listbox"
                    class="absolute z-50 mt-1 max-h-96 w-full overflow-auto rounded-md border bg-popover p-1 text-popover-foreground shadow-md"
                >
                    {options}
                </div>
            }
        </div>
    }
}
