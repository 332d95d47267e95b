use crate::app::use_auth;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct FooterProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Footer)]
pub(crate) fn footer(props: &FooterProps) -> Html {
    let auth = use_auth();
    html! {
        <footer class={classes!("bg-background", "border-t", "border-border", "mt-auto", props.class.clone())}>
            <div class="max-w-7xl mx-auto py-6 px-4 sm:px-6 lg:px-8">
                <div class="text-center text-muted-foreground">
                    <p>{auth.config.footer_text.clone()}</p>
                </div>
            </div>
        </footer>
    }
}
