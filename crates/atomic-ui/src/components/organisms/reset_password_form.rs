use crate::app::{Route, use_auth};
use crate::components::atoms::Button;
use crate::components::molecules::{FormField, field_error};
use crate::core::auth::AuthOperation;
use crate::core::forms::{
    CONFIRM_PASSWORD, FormError, NEW_PASSWORD, ResetPasswordForm as ResetValues, ResetView,
    SubmitError, reset_success_notice, reset_token_from_query,
};
use crate::core::store::AppStore;
use crate::core::styles::ButtonVariant;
use gloo::console;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

/// Reset form gated on the `token` query parameter.
#[function_component(ResetPasswordForm)]
pub(crate) fn reset_password_form() -> Html {
    let auth = use_auth();
    let navigator = use_navigator();
    let location = use_location();
    let values = use_state(ResetValues::default);
    let submitted = use_state(|| false);
    let error = use_state(|| None::<FormError>);
    let loading = use_selector(|store: &AppStore| {
        store.session.pending == Some(AuthOperation::ResetPassword)
    });

    let token = location
        .as_ref()
        .and_then(|location| reset_token_from_query(location.query_str()));
    let go_to = |route: Route| {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(navigator) = navigator.as_ref() {
                navigator.push(&route);
            }
        })
    };

    let token = match ResetView::resolve(token.as_deref(), *submitted) {
        ResetView::Succeeded => {
            return html! {
                <div class="text-center">
                    <h3 class="text-lg font-medium text-foreground mb-2">{"Password Reset Successful"}</h3>
                    <p class="text-muted-foreground mb-4">{"Your password has been reset successfully."}</p>
                    <Button onclick={go_to(Route::Login)}>{"Go to Sign In"}</Button>
                </div>
            };
        }
        ResetView::InvalidLink => {
            return html! {
                <div class="text-center">
                    <h3 class="text-lg font-medium text-foreground mb-2">{"Invalid Reset Link"}</h3>
                    <p class="text-muted-foreground mb-4">
                        {"This password reset link is invalid or has expired."}
                    </p>
                    <Button variant={ButtonVariant::Outline} onclick={go_to(Route::ForgotPassword)}>
                        {"Request New Reset Link"}
                    </Button>
                </div>
            };
        }
        ResetView::Form { token } => token,
    };

    let on_new = {
        let values = values.clone();
        Callback::from(move |new_password: String| {
            values.set(ResetValues {
                new_password,
                ..(*values).clone()
            });
        })
    };
    let on_confirm = {
        let values = values.clone();
        Callback::from(move |confirm_password: String| {
            values.set(ResetValues {
                confirm_password,
                ..(*values).clone()
            });
        })
    };

    let onsubmit = {
        let controller = auth.controller.clone();
        let values = values.clone();
        let submitted = submitted.clone();
        let error = error.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let controller = controller.clone();
            let form = (*values).clone();
            let token = token.clone();
            let submitted = submitted.clone();
            let error = error.clone();
            yew::platform::spawn_local(async move {
                match controller.submit_reset_password(&form, &token).await {
                    Ok(()) => {
                        console::log!(reset_success_notice(&token));
                        error.set(None);
                        submitted.set(true);
                    }
                    Err(SubmitError::Invalid(FormError::PasswordMismatch)) => {
                        gloo::dialogs::alert(&FormError::PasswordMismatch.to_string());
                        error.set(Some(FormError::PasswordMismatch));
                    }
                    Err(SubmitError::Invalid(invalid)) => error.set(Some(invalid)),
                    Err(SubmitError::Auth(err)) => {
                        console::error!("Failed to reset password:", err.to_string());
                    }
                }
            });
        })
    };

    html! {
        <form {onsubmit} class="w-full max-w-md space-y-4">
            <h2 class="text-2xl font-bold text-center mb-6">{"Reset Password"}</h2>
            <FormField
                label={NEW_PASSWORD}
                name="new_password"
                input_type="password"
                value={values.new_password.clone()}
                on_change={on_new}
                placeholder="Enter new password"
                autocomplete="new-password"
                required=true
                error={field_error((*error).as_ref(), NEW_PASSWORD)}
            />
            <FormField
                label={CONFIRM_PASSWORD}
                name="confirm_password"
                input_type="password"
                value={values.confirm_password.clone()}
                on_change={on_confirm}
                placeholder="Confirm new password"
                autocomplete="new-password"
                required=true
                error={field_error((*error).as_ref(), CONFIRM_PASSWORD)}
            />
            <Button r#type="submit" loading={*loading} class="w-full">
                {if *loading { "Resetting..." } else { "Reset Password" }}
            </Button>
        </form>
    }
}
