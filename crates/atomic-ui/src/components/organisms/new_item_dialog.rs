use crate::components::atoms::{Button, Checkbox, Dialog, Textarea};
use crate::components::molecules::{FormField, field_error};
use crate::core::dashboard::{CONFIRMATION, NewItemDraft, TITLE};
use crate::core::forms::FormError;
use crate::core::styles::ButtonVariant;
use gloo::console;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct NewItemDialogProps {
    pub open: bool,
    pub on_open_change: Callback<bool>,
}

/// "Add New Item" dialog. Valid drafts are logged, not stored.
#[function_component(NewItemDialog)]
pub(crate) fn new_item_dialog(props: &NewItemDialogProps) -> Html {
    let draft = use_state(NewItemDraft::default);
    let error = use_state(|| None::<FormError>);

    let close = {
        let on_open_change = props.on_open_change.clone();
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |()| {
            draft.set(NewItemDraft::default());
            error.set(None);
            on_open_change.emit(false);
        })
    };
    let on_open_change = {
        let close = close.clone();
        let on_open_change = props.on_open_change.clone();
        Callback::from(move |open: bool| {
            if open {
                on_open_change.emit(true);
            } else {
                close.emit(());
            }
        })
    };
    let on_title = {
        let draft = draft.clone();
        Callback::from(move |title: String| {
            draft.set(NewItemDraft {
                title,
                ..(*draft).clone()
            });
        })
    };
    let on_description = {
        let draft = draft.clone();
        Callback::from(move |description: String| {
            draft.set(NewItemDraft {
                description,
                ..(*draft).clone()
            });
        })
    };
    let on_confirm = {
        let draft = draft.clone();
        Callback::from(move |confirmed: bool| {
            draft.set(NewItemDraft {
                confirmed,
                ..(*draft).clone()
            });
        })
    };
    let on_cancel = {
        let close = close.clone();
        Callback::from(move |_: MouseEvent| close.emit(()))
    };
    let on_create = {
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |_: MouseEvent| match draft.validate() {
            Ok(()) => {
                console::log!("add new item", draft.title.trim().to_string());
                close.emit(());
            }
            Err(invalid) => error.set(Some(invalid)),
        })
    };

    let footer = html! {
        <>
            <Button variant={ButtonVariant::Outline} onclick={on_cancel}>{"Cancel"}</Button>
            <Button onclick={on_create}>{"Create"}</Button>
        </>
    };

    html! {
        <Dialog
            open={props.open}
            {on_open_change}
            title="Add New Item"
            description="Describe the item you want to track."
            footer={footer}
        >
            <div class="space-y-4">
                <FormField
                    label={TITLE}
                    name="item_title"
                    value={draft.title.clone()}
                    on_change={on_title}
                    placeholder="Project name"
                    required=true
                    error={field_error((*error).as_ref(), TITLE)}
                />
                <Textarea
                    label="Description"
                    name="item_description"
                    value={draft.description.clone()}
                    oninput={on_description}
                    placeholder="What is this project about?"
                />
                <Checkbox
                    label="I confirm this item is ready to track"
                    checked={draft.confirmed}
                    on_checked_change={on_confirm}
                />
                {field_error((*error).as_ref(), CONFIRMATION).map(|message| html! {
                    <p class="text-sm text-destructive">{message}</p>
                }).unwrap_or_default()}
            </div>
        </Dialog>
    }
}
