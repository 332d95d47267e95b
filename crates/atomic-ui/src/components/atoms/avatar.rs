use crate::core::styles::AvatarSize;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct AvatarProps {
    #[prop_or_default]
    pub src: Option<AttrValue>,
    #[prop_or(AttrValue::Static("Avatar"))]
    pub alt: AttrValue,
    /// Initials shown when there is no image or it fails to load.
    #[prop_or(AttrValue::Static("U"))]
    pub fallback: AttrValue,
    #[prop_or_default]
    pub size: AvatarSize,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Avatar)]
pub(crate) fn avatar(props: &AvatarProps) -> Html {
    let broken = use_state_eq(|| false);
    {
        let broken = broken.clone();
        use_effect_with_deps(
            move |_| {
                broken.set(false);
                || ()
            },
            props.src.clone(),
        );
    }
    let onerror = {
        let broken = broken.clone();
        Callback::from(move |_: Event| broken.set(true))
    };

    let body = match props.src.clone() {
        Some(src) if !*broken => html! {
            <img class="aspect-square h-full w-full object-cover" src={src} alt={props.alt.clone()} {onerror} />
        },
        _ => html! {
            <span class={classes!(
                "flex", "h-full", "w-full", "items-center", "justify-center",
                "rounded-full", "bg-muted", "font-medium",
                props.size.text_class()
            )}>
                {props.fallback.clone()}
            </span>
        },
    };

    html! {
        <span class={classes!(
            "relative", "flex", "shrink-0", "overflow-hidden", "rounded-full",
            props.size.box_class(),
            props.class.clone()
        )}>
            {body}
        </span>
    }
}
