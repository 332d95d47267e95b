//! Yew components organised in atomic-design tiers.

pub(crate) mod atoms;
pub(crate) mod hooks;
pub(crate) mod molecules;
pub(crate) mod organisms;
pub(crate) mod pages;
pub(crate) mod templates;
