//! Shared style tokens for the atomic primitives.
//!
//! Each token maps to a fixed class fragment; components compose these with
//! [`ClassList`] and append consumer classes last.

use crate::core::classes::ClassList;

/// Classes shared by every button.
pub const BUTTON_BASE: &str = "inline-flex items-center justify-center rounded-md text-sm font-medium ring-offset-background transition-colors focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:pointer-events-none disabled:opacity-50";

/// Classes shared by every badge.
pub const BADGE_BASE: &str = "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold transition-colors focus:outline-none focus:ring-2 focus:ring-ring focus:ring-offset-2";

/// Classes for text inputs (input, textarea, select trigger).
pub const FIELD_BASE: &str = "flex w-full rounded-md border border-input bg-background px-3 py-2 text-sm ring-offset-background placeholder:text-muted-foreground focus-visible:outline-none focus-visible:ring-2 focus-visible:ring-ring focus-visible:ring-offset-2 disabled:cursor-not-allowed disabled:opacity-50";

/// Extra classes applied to a field with a validation error.
pub const FIELD_ERROR: &str = "border-destructive focus-visible:ring-destructive";

/// Classes for a selectable list entry (select item, menu item).
pub const ITEM_BASE: &str = "relative flex w-full cursor-default select-none items-center rounded-sm px-2 py-1.5 text-sm outline-none";

/// Visual variants for [`button_classes`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    /// Primary filled button.
    #[default]
    Default,
    /// Destructive action.
    Destructive,
    /// Bordered, transparent background.
    Outline,
    /// Muted filled button.
    Secondary,
    /// No chrome until hovered.
    Ghost,
    /// Rendered as an inline link.
    Link,
}

impl ButtonVariant {
    /// Every supported variant.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Default,
            Self::Destructive,
            Self::Outline,
            Self::Secondary,
            Self::Ghost,
            Self::Link,
        ]
    }

    /// Class fragment for the variant.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Default => "bg-primary text-primary-foreground hover:bg-primary/90",
            Self::Destructive => {
                "bg-destructive text-destructive-foreground hover:bg-destructive/90"
            }
            Self::Outline => {
                "border border-input bg-background hover:bg-accent hover:text-accent-foreground"
            }
            Self::Secondary => "bg-secondary text-secondary-foreground hover:bg-secondary/80",
            Self::Ghost => "hover:bg-accent hover:text-accent-foreground",
            Self::Link => "text-primary underline-offset-4 hover:underline",
        }
    }
}

/// Button sizing tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonSize {
    /// Regular height with horizontal padding.
    #[default]
    Default,
    /// Compact.
    Sm,
    /// Large.
    Lg,
    /// Square, icon-only.
    Icon,
}

impl ButtonSize {
    /// Every supported size.
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Default, Self::Sm, Self::Lg, Self::Icon]
    }

    /// Class fragment for the size.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Default => "h-10 px-4 py-2",
            Self::Sm => "h-9 rounded-md px-3",
            Self::Lg => "h-11 rounded-md px-8",
            Self::Icon => "h-10 w-10",
        }
    }
}

/// Compose the class set for a button.
#[must_use]
pub fn button_classes(variant: ButtonVariant, size: ButtonSize) -> ClassList {
    ClassList::new()
        .with(BUTTON_BASE)
        .with(variant.as_class())
        .with(size.as_class())
}

/// Badge variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeVariant {
    /// Primary fill.
    #[default]
    Default,
    /// Muted fill.
    Secondary,
    /// Destructive fill.
    Destructive,
    /// Border only.
    Outline,
}

impl BadgeVariant {
    /// Class fragment for the variant.
    #[must_use]
    pub const fn as_class(self) -> &'static str {
        match self {
            Self::Default => "border-transparent bg-primary text-primary-foreground hover:bg-primary/80",
            Self::Secondary => {
                "border-transparent bg-secondary text-secondary-foreground hover:bg-secondary/80"
            }
            Self::Destructive => {
                "border-transparent bg-destructive text-destructive-foreground hover:bg-destructive/80"
            }
            Self::Outline => "text-foreground",
        }
    }
}

/// Compose the class set for a badge.
#[must_use]
pub fn badge_classes(variant: BadgeVariant) -> ClassList {
    ClassList::new().with(BADGE_BASE).with(variant.as_class())
}

/// Avatar sizing tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AvatarSize {
    /// 32px.
    Sm,
    /// 40px.
    #[default]
    Md,
    /// 48px.
    Lg,
}

impl AvatarSize {
    /// Box dimensions.
    #[must_use]
    pub const fn box_class(self) -> &'static str {
        match self {
            Self::Sm => "h-8 w-8",
            Self::Md => "h-10 w-10",
            Self::Lg => "h-12 w-12",
        }
    }

    /// Fallback text size.
    #[must_use]
    pub const fn text_class(self) -> &'static str {
        match self {
            Self::Sm => "text-xs",
            Self::Md => "text-sm",
            Self::Lg => "text-base",
        }
    }
}

/// Card chrome variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CardVariant {
    /// Single border.
    #[default]
    Default,
    /// Doubled border width.
    Outlined,
}

/// Compose the class set for a card container.
#[must_use]
pub fn card_classes(variant: CardVariant) -> ClassList {
    ClassList::new()
        .with("rounded-lg border bg-card text-card-foreground shadow-sm")
        .with_if(variant == CardVariant::Outlined, "border-2")
}

/// Compose the class set for a text field, flagging validation errors.
#[must_use]
pub fn field_classes(has_error: bool) -> ClassList {
    ClassList::new()
        .with(FIELD_BASE)
        .with_if(has_error, FIELD_ERROR)
}

/// Compose the track classes for a switch.
#[must_use]
pub fn switch_track_classes(checked: bool, disabled: bool) -> ClassList {
    ClassList::new()
        .with("peer inline-flex h-6 w-11 shrink-0 cursor-pointer items-center rounded-full border-2 border-transparent transition-colors")
        .with(if checked { "bg-primary" } else { "bg-input" })
        .with_if(disabled, "cursor-not-allowed opacity-50")
}

/// Compose the thumb classes for a switch.
#[must_use]
pub fn switch_thumb_classes(checked: bool) -> ClassList {
    ClassList::new()
        .with("pointer-events-none block h-5 w-5 rounded-full bg-background shadow-lg ring-0 transition-transform")
        .with(if checked { "translate-x-5" } else { "translate-x-0" })
}

/// Compose the class set for a selectable list entry.
#[must_use]
pub fn item_classes(checked: bool, disabled: bool) -> ClassList {
    ClassList::new()
        .with(ITEM_BASE)
        .with_if(checked, "bg-accent text-accent-foreground")
        .with_if(disabled, "pointer-events-none opacity-50")
        .with_if(!disabled, "hover:bg-accent hover:text-accent-foreground")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn token_set(fragments: &[&str]) -> BTreeSet<String> {
        fragments
            .iter()
            .flat_map(|fragment| fragment.split_whitespace())
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn button_class_set_is_exact_for_every_combination() {
        for variant in ButtonVariant::all() {
            for size in ButtonSize::all() {
                let rendered: BTreeSet<String> = button_classes(variant, size)
                    .iter()
                    .map(str::to_string)
                    .collect();
                let expected = token_set(&[BUTTON_BASE, variant.as_class(), size.as_class()]);
                assert_eq!(rendered, expected, "{variant:?}/{size:?}");
            }
        }
    }

    #[test]
    fn button_variants_do_not_leak_into_each_other() {
        let ghost = button_classes(ButtonVariant::Ghost, ButtonSize::Default);
        assert!(!ghost.contains("bg-primary"));
        let outline = button_classes(ButtonVariant::Outline, ButtonSize::Sm);
        assert!(outline.contains("border-input"));
        assert!(outline.contains("h-9"));
        assert!(!outline.contains("h-10"));
    }

    #[test]
    fn field_error_adds_destructive_border() {
        assert!(field_classes(true).contains("border-destructive"));
        assert!(!field_classes(false).contains("border-destructive"));
    }

    #[test]
    fn outlined_card_doubles_border() {
        assert!(card_classes(CardVariant::Outlined).contains("border-2"));
        assert!(!card_classes(CardVariant::Default).contains("border-2"));
    }

    #[test]
    fn switch_reflects_checked_state() {
        assert!(switch_track_classes(true, false).contains("bg-primary"));
        assert!(switch_track_classes(false, false).contains("bg-input"));
        assert!(switch_thumb_classes(true).contains("translate-x-5"));
        assert!(switch_track_classes(false, true).contains("opacity-50"));
    }

    #[test]
    fn disabled_items_drop_hover_affordance() {
        let disabled = item_classes(false, true);
        assert!(disabled.contains("pointer-events-none"));
        assert!(!disabled.contains("hover:bg-accent"));
        assert!(item_classes(true, false).contains("bg-accent"));
    }
}
