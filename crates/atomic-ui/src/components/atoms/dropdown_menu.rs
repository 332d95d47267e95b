use crate::components::atoms::Button;
use crate::components::hooks::use_outside_click;
use crate::core::selection::{ChoiceItem, Disclosure, choose, project};
use crate::core::styles::{ButtonVariant, item_classes};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DropdownMenuProps {
    pub items: Vec<ChoiceItem>,
    /// Trigger content.
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub trigger_variant: ButtonVariant,
    /// Anchor the menu to the right edge of the trigger.
    #[prop_or(true)]
    pub align_end: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub on_select: Callback<String>,
}

/// Action menu; choosing an item emits its value and closes the menu.
#[function_component(DropdownMenu)]
pub(crate) fn dropdown_menu(props: &DropdownMenuProps) -> Html {
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
        Callback::from(move |_: MouseEvent| disclosure.set(disclosure.toggle(false)))
    };

    let entries = project(&props.items, None, false)
        .into_iter()
        .map(|state| {
            let onclick = {
                let items = props.items.clone();
                let value = state.value.clone();
                let on_select = props.on_select.clone();
                let disclosure = disclosure.clone();
                Callback::from(move |_: MouseEvent| {
                    if let Some(chosen) = choose(&items, &value, false) {
                        disclosure.set(disclosure.close());
                        on_select.emit(chosen);
                    }
                })
            };
            html! {
                <div
                    key={state.value.clone()}
                    role="menuitem"
                    aria-disabled={state.disabled.then_some("true")}
                    class={item_classes(false, state.disabled).to_string()}
                    {onclick}
                >
                    {state.label}
                </div>
            }
        })
        .collect::<Html>();

    html! {
        <div ref={root} class={classes!("relative", "inline-block", "text-left", props.class.clone())}>
            <Button variant={props.trigger_variant} onclick={toggle}>
                { for props.children.iter() }
            </Button>
            if disclosure.is_open() {
                <div
                    role="menu"
                    class={classes!(
                        "absolute", "z-50", "mt-2", "min-w-[8rem]", "overflow-hidden",
                        "rounded-md", "border", "bg-popover", "p-1",
                        "text-popover-foreground", "shadow-md",
                        if props.align_end { "right-0" } else { "left-0" }
                    )}
                >
                    {entries}
                </div>
            }
        </div>
    }
}
