//! One component per route.

use crate::app::Route;
use crate::components::atoms::{Card, CardContent, CardHeader};
use crate::components::organisms::{
    DashboardList, ForgotPasswordForm, LoginForm, ResetPasswordForm,
};
use crate::components::templates::{AuthPageTemplate, DashboardTemplate};
use yew::prelude::*;
use yew_router::prelude::Link;

#[function_component(LoginPage)]
pub(crate) fn login_page() -> Html {
    html! {
        <AuthPageTemplate title="Sign In">
            <LoginForm />
        </AuthPageTemplate>
    }
}

#[function_component(ForgotPasswordPage)]
pub(crate) fn forgot_password_page() -> Html {
    html! {
        <AuthPageTemplate title="Forgot Password">
            <ForgotPasswordForm />
        </AuthPageTemplate>
    }
}

#[function_component(ResetPasswordPage)]
pub(crate) fn reset_password_page() -> Html {
    html! {
        <AuthPageTemplate title="Reset Password">
            <ResetPasswordForm />
        </AuthPageTemplate>
    }
}

#[function_component(DashboardPage)]
pub(crate) fn dashboard_page() -> Html {
    html! {
        <DashboardTemplate>
            <DashboardList />
        </DashboardTemplate>
    }
}

#[function_component(NotFoundPage)]
pub(crate) fn not_found_page() -> Html {
    html! {
        <AuthPageTemplate title="Page Not Found">
            <Card>
                <CardHeader>
                    <p class="text-muted-foreground">{"The page you requested does not exist."}</p>
                </CardHeader>
                <CardContent class="text-center">
                    <Link<Route> to={Route::Login} classes="text-primary hover:underline">
                        {"Back to Sign In"}
                    </Link<Route>>
                </CardContent>
            </Card>
        </AuthPageTemplate>
    }
}
