//! Stateful sections: forms, the dashboard list, and page chrome.

pub(crate) mod dashboard_list;
pub(crate) mod footer;
pub(crate) mod forgot_password_form;
pub(crate) mod login_form;
pub(crate) mod navbar;
pub(crate) mod new_item_dialog;
pub(crate) mod reset_password_form;

pub(crate) use dashboard_list::DashboardList;
pub(crate) use footer::Footer;
pub(crate) use forgot_password_form::ForgotPasswordForm;
pub(crate) use login_form::LoginForm;
pub(crate) use navbar::Navbar;
pub(crate) use new_item_dialog::NewItemDialog;
pub(crate) use reset_password_form::ResetPasswordForm;
