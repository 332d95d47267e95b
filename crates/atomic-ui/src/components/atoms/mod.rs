//! Styled primitives: one native element (or a small cluster) per component.

pub(crate) mod avatar;
pub(crate) mod badge;
pub(crate) mod button;
pub(crate) mod card;
pub(crate) mod checkbox;
pub(crate) mod dialog;
pub(crate) mod dropdown_menu;
pub(crate) mod input;
pub(crate) mod label;
pub(crate) mod radio_group;
pub(crate) mod select;
pub(crate) mod switch;
pub(crate) mod textarea;

pub(crate) use avatar::Avatar;
pub(crate) use badge::Badge;
pub(crate) use button::Button;
pub(crate) use card::{Card, CardContent, CardFooter, CardHeader};
pub(crate) use checkbox::Checkbox;
pub(crate) use dialog::Dialog;
pub(crate) use dropdown_menu::DropdownMenu;
pub(crate) use input::Input;
pub(crate) use label::Label;
pub(crate) use radio_group::RadioGroup;
pub(crate) use select::Select;
pub(crate) use switch::Switch;
pub(crate) use textarea::Textarea;
