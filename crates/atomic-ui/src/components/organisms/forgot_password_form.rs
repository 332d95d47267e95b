use crate::app::{Route, use_auth};
use crate::components::atoms::Button;
use crate::components::molecules::{FormField, field_error};
use crate::core::auth::AuthOperation;
use crate::core::forms::{
    EMAIL, ForgotPasswordForm as ForgotValues, FormError, SubmitError, reset_email_notice,
};
use crate::core::store::AppStore;
use crate::core::styles::ButtonVariant;
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

#[function_component(ForgotPasswordForm)]
pub(crate) fn forgot_password_form() -> Html {
    let auth = use_auth();
    let email = use_state(String::new);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<FormError>);
    let loading = use_selector(|store: &AppStore| {
        store.session.pending == Some(AuthOperation::ForgotPassword)
    });

    if *submitted {
        let retry = {
            let submitted = submitted.clone();
            Callback::from(move |_: MouseEvent| submitted.set(false))
        };
        return html! {
            <div class="text-center">
                <h3 class="text-lg font-medium text-foreground mb-2">{"Check your email"}</h3>
                <p class="text-muted-foreground mb-4">
                    {format!("We've sent a password reset link to {}", *email)}
                </p>
                <Button variant={ButtonVariant::Outline} onclick={retry}>
                    {"Try another email"}
                </Button>
            </div>
        };
    }

    let on_email = {
        let email = email.clone();
        Callback::from(move |value: String| email.set(value))
    };

    let onsubmit = {
        let controller = auth.controller.clone();
        let email = email.clone();
        let submitted = submitted.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let controller = controller.clone();
            let form = ForgotValues {
                email: (*email).clone(),
            };
            let submitted = submitted.clone();
            let error = error.clone();
            yew::platform::spawn_local(async move {
                match controller.submit_forgot_password(&form).await {
                    Ok(()) => {
                        console::log!(reset_email_notice(form.email.trim()));
                        error.set(None);
                        submitted.set(true);
                    }
                    Err(SubmitError::Invalid(invalid)) => error.set(Some(invalid)),
                    Err(SubmitError::Auth(err)) => {
                        console::error!("Failed to send reset email:", err.to_string());
                    }
                }
            });
        })
    };

    html! {
        <form {onsubmit} class="w-full max-w-md space-y-4">
            <h2 class="text-2xl font-bold text-center mb-6">{"Forgot Password"}</h2>
            <p class="text-muted-foreground text-center mb-6">
                {"Enter your email address and we'll send you a link to reset your password."}
            </p>
            <FormField
                label={EMAIL}
                name="email"
                input_type="email"
                value={(*email).clone()}
                on_change={on_email}
                placeholder="Enter your email"
                autocomplete="email"
                required=true
                error={field_error((*error).as_ref(), EMAIL)}
            />
            <Button r#type="submit" loading={*loading} class="w-full">
                {if *loading { "Sending..." } else { "Send Reset Link" }}
            </Button>
            <div class="text-center mt-4">
                <Link<Route> to={Route::Login} classes="text-primary hover:underline">
                    {"Back to Sign In"}
                </Link<Route>>
            </div>
        </form>
    }
}
