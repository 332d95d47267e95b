use crate::app::{Route, use_auth};
use crate::components::atoms::Button;
use crate::components::molecules::{FormField, field_error};
use crate::core::auth::AuthOperation;
use crate::core::forms::{EMAIL, FormError, LoginForm as LoginValues, PASSWORD, SubmitError};
use crate::core::store::AppStore;
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(LoginForm)]
pub(crate) fn login_form() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let values = use_state(LoginValues::default);
    let error = use_state(|| None::<FormError>);
    let loading =
        use_selector(|store: &AppStore| store.session.pending == Some(AuthOperation::Login));

    let on_email = {
        let values = values.clone();
        Callback::from(move |email: String| {
            values.set(LoginValues {
                email,
                ..(*values).clone()
            });
        })
    };
    let on_password = {
        let values = values.clone();
        Callback::from(move |password: String| {
            values.set(LoginValues {
                password,
                ..(*values).clone()
            });
        })
    };

    let onsubmit = {
        let controller = auth.controller.clone();
        let values = values.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let controller = controller.clone();
            let form = (*values).clone();
            let error = error.clone();
            let navigator = navigator.clone();
            yew::platform::spawn_local(async move {
                match controller.submit_login(&form).await {
                    Ok(_) => {
                        error.set(None);
                        if let Some(navigator) = navigator {
                            navigator.push(&Route::Dashboard);
                        }
                    }
                    Err(SubmitError::Invalid(invalid)) => error.set(Some(invalid)),
                    Err(SubmitError::Auth(err)) => {
                        console::error!("Login failed:", err.to_string());
                    }
                }
            });
        })
    };

    html! {
        <form {onsubmit} class="w-full max-w-md space-y-4">
            <h2 class="text-2xl font-bold text-center mb-6">{"Sign In"}</h2>
            <FormField
                label={EMAIL}
                name="email"
                input_type="email"
                value={values.email.clone()}
                on_change={on_email}
                placeholder="Enter your email"
                autocomplete="email"
                required=true
                error={field_error((*error).as_ref(), EMAIL)}
            />
            <FormField
                label={PASSWORD}
                name="password"
                input_type="password"
                value={values.password.clone()}
                on_change={on_password}
                placeholder="Enter your password"
                autocomplete="current-password"
                required=true
                error={field_error((*error).as_ref(), PASSWORD)}
            />
            <Button r#type="submit" loading={*loading} class="w-full">
                {if *loading { "Signing In..." } else { "Sign In" }}
            </Button>
            <div class="text-center mt-4">
                <Link<Route> to={Route::ForgotPassword} classes="text-primary hover:underline">
                    {"Forgot Password?"}
                </Link<Route>>
            </div>
        </form>
    }
}
