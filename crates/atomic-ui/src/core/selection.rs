//! Single-value selection for compound controls (select, radio group, menu).
//!
//! # Design
//! - Containers receive an explicit item list instead of inspecting children.
//! - Projection is pure: exactly the item matching the current value is checked.
//! - Disabled and unknown values never produce a change.

/// One selectable entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChoiceItem {
    /// Value emitted when the item is chosen.
    pub value: String,
    /// Human-readable label.
    pub label: String,
    /// Whether the item rejects selection.
    pub disabled: bool,
}

impl ChoiceItem {
    /// Build an enabled item.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Mark the item as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// Derived per-item render state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemState {
    /// Item value.
    pub value: String,
    /// Item label.
    pub label: String,
    /// Whether this item is the current selection.
    pub checked: bool,
    /// Whether the item is disabled (itself or through its container).
    pub disabled: bool,
}

/// Project the container state onto every item.
#[must_use]
pub fn project(items: &[ChoiceItem], selected: Option<&str>, group_disabled: bool) -> Vec<ItemState> {
    items
        .iter()
        .map(|item| ItemState {
            value: item.value.clone(),
            label: item.label.clone(),
            checked: selected == Some(item.value.as_str()),
            disabled: group_disabled || item.disabled,
        })
        .collect()
}

/// Resolve a click on `value` into the next selection, if any.
///
/// A disabled container accepts nothing.
#[must_use]
pub fn choose(items: &[ChoiceItem], value: &str, group_disabled: bool) -> Option<String> {
    if group_disabled {
        return None;
    }
    items
        .iter()
        .find(|item| item.value == value && !item.disabled)
        .map(|item| item.value.clone())
}

/// Label of the currently selected item.
#[must_use]
pub fn selected_label<'a>(items: &'a [ChoiceItem], selected: Option<&str>) -> Option<&'a str> {
    let selected = selected?;
    items
        .iter()
        .find(|item| item.value == selected)
        .map(|item| item.label.as_str())
}

/// Open/closed state of a popover-style container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Disclosure {
    /// Content hidden.
    #[default]
    Closed,
    /// Content visible.
    Open,
}

impl Disclosure {
    /// Flip the state unless the trigger is disabled.
    #[must_use]
    pub const fn toggle(self, disabled: bool) -> Self {
        match (self, disabled) {
            (state, true) => state,
            (Self::Closed, false) => Self::Open,
            (Self::Open, false) => Self::Closed,
        }
    }

    /// Dismiss the content.
    #[must_use]
    pub const fn close(self) -> Self {
        Self::Closed
    }

    /// Whether content is visible.
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open)
    }
}

#[cfg(test)]
mod tests {
    use super::{ChoiceItem, Disclosure, choose, project, selected_label};

    fn plans() -> Vec<ChoiceItem> {
        vec![
            ChoiceItem::new("free", "Free"),
            ChoiceItem::new("pro", "Pro"),
            ChoiceItem::new("team", "Team").disabled(),
        ]
    }

    #[test]
    fn projection_checks_only_the_selected_item() {
        let states = project(&plans(), Some("pro"), false);
        let checked: Vec<_> = states
            .iter()
            .filter(|state| state.checked)
            .map(|state| state.value.as_str())
            .collect();
        assert_eq!(checked, vec!["pro"]);
        assert_eq!(states.len(), 3);
    }

    #[test]
    fn projection_without_selection_checks_nothing() {
        assert!(project(&plans(), None, false).iter().all(|s| !s.checked));
        assert!(project(&plans(), Some("missing"), false).iter().all(|s| !s.checked));
    }

    #[test]
    fn group_disabled_propagates_to_items() {
        let states = project(&plans(), Some("free"), true);
        assert!(states.iter().all(|state| state.disabled));
        let enabled = project(&plans(), Some("free"), false);
        assert_eq!(
            enabled.iter().filter(|state| state.disabled).count(),
            1,
            "only the item flagged disabled"
        );
    }

    #[test]
    fn choose_rejects_disabled_and_unknown_values() {
        let items = plans();
        assert_eq!(choose(&items, "pro", false), Some("pro".to_string()));
        assert_eq!(choose(&items, "team", false), None);
        assert_eq!(choose(&items, "enterprise", false), None);
    }

    #[test]
    fn disabled_container_accepts_no_choice() {
        let items = plans();
        assert_eq!(choose(&items, "free", true), None);
        assert_eq!(choose(&items, "pro", true), None);
    }

    #[test]
    fn last_choice_wins() {
        let items = plans();
        let mut current = None;
        for click in ["free", "team", "pro"] {
            if let Some(next) = choose(&items, click, false) {
                current = Some(next);
            }
        }
        assert_eq!(current.as_deref(), Some("pro"));
    }

    #[test]
    fn selected_label_resolves_trigger_text() {
        let items = plans();
        assert_eq!(selected_label(&items, Some("free")), Some("Free"));
        assert_eq!(selected_label(&items, None), None);
        assert_eq!(selected_label(&items, Some("nope")), None);
    }

    #[test]
    fn disclosure_toggles_unless_disabled() {
        let state = Disclosure::default();
        assert!(!state.is_open());
        assert_eq!(state.toggle(false), Disclosure::Open);
        assert_eq!(state.toggle(true), Disclosure::Closed);
        assert_eq!(Disclosure::Open.toggle(false), Disclosure::Closed);
        assert_eq!(Disclosure::Open.close(), Disclosure::Closed);
    }
}
