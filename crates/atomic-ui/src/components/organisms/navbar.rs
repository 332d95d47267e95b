use crate::app::{Route, use_auth};
use crate::components::atoms::{Avatar, Button, DropdownMenu};
use crate::core::session::{MENU_DASHBOARD, MENU_LOGOUT, NavbarState};
use crate::core::store::AppStore;
use crate::core::styles::{AvatarSize, ButtonVariant};
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[derive(Properties, PartialEq)]
pub(crate) struct NavbarProps {
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Navbar)]
pub(crate) fn navbar(props: &NavbarProps) -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let state = use_selector(|store: &AppStore| NavbarState::from_session(&store.session));

    let logout = {
        let controller = auth.controller.clone();
        Callback::from(move |_: MouseEvent| controller.logout())
    };
    let sign_in = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&Route::Login);
            }
        })
    };
    let on_menu = {
        let controller = auth.controller.clone();
        Callback::from(move |key: String| match key.as_str() {
            MENU_DASHBOARD => {
                if let Some(navigator) = navigator.as_ref() {
                    navigator.push(&Route::Dashboard);
                }
            }
            MENU_LOGOUT => controller.logout(),
            _ => {}
        })
    };

    let actions = match &*state {
        NavbarState::Authenticated { name } => html! {
            <>
                <span class="text-muted-foreground">{format!("Welcome, {name}")}</span>
                <Button variant={ButtonVariant::Outline} onclick={logout}>{"Logout"}</Button>
                <DropdownMenu
                    items={state.menu_items()}
                    trigger_variant={ButtonVariant::Ghost}
                    on_select={on_menu}
                >
                    <Avatar
                        size={AvatarSize::Sm}
                        alt={AttrValue::from(name.clone())}
                        fallback={AttrValue::from(state.initials())}
                    />
                </DropdownMenu>
            </>
        },
        NavbarState::Guest => html! {
            <Button onclick={sign_in}>{"Sign In"}</Button>
        },
    };

    html! {
        <nav class={classes!("bg-background", "shadow-sm", "border-b", "border-border", props.class.clone())}>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16">
                    <div class="flex items-center">
                        <h1 class="text-xl font-bold text-foreground">{auth.config.app_title.clone()}</h1>
                    </div>
                    <div class="flex items-center space-x-4">
                        {actions}
                    </div>
                </div>
            </div>
        </nav>
    }
}
