use crate::components::atoms::label::required_marker;
use crate::core::ids::element_id;
use crate::core::styles::field_classes;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct InputProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or(AttrValue::Static("text"))]
    pub input_type: AttrValue,
    #[prop_or_default]
    pub id: Option<AttrValue>,
    #[prop_or_default]
    pub name: Option<AttrValue>,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub error: Option<AttrValue>,
    #[prop_or_default]
    pub autocomplete: Option<AttrValue>,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub disabled: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(Input)]
pub(crate) fn input(props: &InputProps) -> Html {
    let input_id = use_memo(
        |(id, name)| element_id("input", id.as_deref(), name.as_deref()),
        (props.id.clone(), props.name.clone()),
    );
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };
    let classes = classes!(
        "h-10",
        field_classes(props.error.is_some()).to_string(),
        props.class.clone()
    );

    html! {
        <div class="w-full">
            {props.label.clone().map(|label| html! {
                <label for={(*input_id).clone()} class="block text-sm font-medium text-foreground mb-2">
                    {label}
                    {required_marker(props.required)}
                </label>
            }).unwrap_or_default()}
            <input
                id={(*input_id).clone()}
                class={classes}
                type={props.input_type.clone()}
                placeholder={props.placeholder.clone()}
                value={props.value.clone()}
                name={props.name.clone()}
                autocomplete={props.autocomplete.clone()}
                required={props.required}
                disabled={props.disabled}
                aria-invalid={props.error.is_some().then_some("true")}
                oninput={oninput}
            />
            {props.error.clone().map(|error| html! {
                <p class="mt-1 text-sm text-destructive">{error}</p>
            }).unwrap_or_default()}
        </div>
    }
}
