use crate::components::pages::{
    DashboardPage, ForgotPasswordPage, LoginPage, NotFoundPage, ResetPasswordPage,
};
use preferences::load_config;
pub(crate) use routes::Route;
pub(crate) use session::{AuthCtx, use_auth};
use yew::prelude::*;
use yew_router::prelude::*;

mod preferences;
mod routes;
mod session;

#[function_component(AtomicApp)]
pub fn atomic_app() -> Html {
    let ctx = use_memo(|_| AuthCtx::new(load_config()), ());

    {
        let ctx = (*ctx).clone();
        use_effect_with_deps(
            move |_| {
                ctx.controller.restore();
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<AuthCtx> context={(*ctx).clone()}>
            <BrowserRouter>
                <div class="app">
                    <Switch<Route> render={switch} />
                </div>
            </BrowserRouter>
        </ContextProvider<AuthCtx>>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Login} /> },
        Route::Login => html! { <LoginPage /> },
        Route::ForgotPassword => html! { <ForgotPasswordPage /> },
        Route::ResetPassword => html! { <ResetPasswordPage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

/// Entrypoint invoked by Trunk for wasm32 builds.
pub fn run_app() {
    console_error_panic_hook::set_once();
    if let Some(root) = gloo::utils::document().get_element_by_id("root") {
        yew::Renderer::<AtomicApp>::with_root(root).render();
    } else {
        yew::Renderer::<AtomicApp>::new().render();
    }
}
