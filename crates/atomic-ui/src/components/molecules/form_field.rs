use crate::components::atoms::{Input, Label};
use crate::core::forms::FormError;
use crate::core::ids::element_id;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FormFieldProps {
    pub label: AttrValue,
    pub name: AttrValue,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub on_change: Callback<String>,
}

/// Labelled input with an optional error line.
#[function_component(FormField)]
pub(crate) fn form_field(props: &FormFieldProps) -> Html {
    let input_id = use_memo(
        |name| element_id("field", None, Some(&**name)),
        props.name.clone(),
    );

    html! {
        <div class="space-y-2">
            <Label for_input={AttrValue::from((*input_id).clone())} required={props.required}>
                {props.label.clone()}
            </Label>
            <Input
                id={AttrValue::from((*input_id).clone())}
                name={props.name.clone()}
                input_type={props.input_type.clone()}
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                autocomplete={props.autocomplete.clone()}
                required={props.required}
                disabled={props.disabled}
                error={props.error.clone()}
                oninput={props.on_change.clone()}
            />
        </div>
    }
}

/// Message for `field` when `error` belongs to it.
pub(crate) fn field_error(error: Option<&FormError>, field: &str) -> Option<AttrValue> {
    error
        .filter(|error| error.field() == Some(field))
        .map(|error| AttrValue::from(error.to_string()))
}
