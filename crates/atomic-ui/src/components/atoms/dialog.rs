use crate::components::hooks::use_body_scroll_lock;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DialogProps {
    pub open: bool,
    /// Receives `false` when the backdrop is clicked.
    #[prop_or_default]
    pub on_open_change: Callback<bool>,
    #[prop_or_default]
    pub title: Option<AttrValue>,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub footer: Option<Html>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

/// Modal overlay. Renders nothing while closed.
#[function_component(Dialog)]
pub(crate) fn dialog(props: &DialogProps) -> Html {
    use_body_scroll_lock(props.open);

    if !props.open {
        return html! {};
    }

    let on_backdrop = {
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |_: MouseEvent| on_open_change.emit(false))
    };
    let stop = Callback::from(|event: MouseEvent| event.stop_propagation());

    html! {
        <div
            class="fixed inset-0 z-50 flex items-center justify-center bg-black/80"
            onclick={on_backdrop}
        >
            <div
                role="dialog"
                aria-modal="true"
                class={classes!(
                    "relative", "grid", "w-full", "max-w-lg", "gap-4", "border",
                    "bg-background", "p-6", "shadow-lg", "sm:rounded-lg",
                    props.class.clone()
                )}
                onclick={stop}
            >
                if props.title.is_some() || props.description.is_some() {
                    <div class="flex flex-col space-y-1.5 text-center sm:text-left">
                        {props.title.clone().map(|title| html! {
                            <h2 class="text-lg font-semibold leading-none tracking-tight">{title}</h2>
                        }).unwrap_or_default()}
                        {props.description.clone().map(|description| html! {
                            <p class="text-sm text-muted-foreground">{description}</p>
                        }).unwrap_or_default()}
                    </div>
                }
                { for props.children.iter() }
                {props.footer.clone().map(|footer| html! {
                    <div class="flex flex-col-reverse sm:flex-row sm:justify-end sm:space-x-2">
                        {footer}
                    </div>
                }).unwrap_or_default()}
            </div>
        </div>
    }
}
