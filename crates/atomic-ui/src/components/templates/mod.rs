//! Page chrome around organism content.

pub(crate) mod auth_page;
pub(crate) mod dashboard;

pub(crate) use auth_page::AuthPageTemplate;
pub(crate) use dashboard::DashboardTemplate;
