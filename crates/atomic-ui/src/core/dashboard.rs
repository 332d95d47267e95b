//! Dashboard list model and its mock data source.

use crate::core::auth::Delay;
use crate::core::forms::FormError;
use crate::core::selection::ChoiceItem;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thiserror::Error;

const MOCK_ITEMS: &str = include_str!("../../fixtures/dashboard_items.json");

/// Lifecycle status shown as a badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Live.
    Active,
    /// Switched off.
    Inactive,
    /// Awaiting action.
    Pending,
}

impl ItemStatus {
    /// Lowercase label rendered in the badge.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }

    /// Colour classes for the status badge.
    #[must_use]
    pub const fn badge_class(self) -> &'static str {
        match self {
            Self::Active => "bg-green-100 text-green-800",
            Self::Inactive => "bg-red-100 text-red-800",
            Self::Pending => "bg-yellow-100 text-yellow-800",
        }
    }
}

/// One dashboard card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardItem {
    /// Stable identifier.
    pub id: String,
    /// Card heading.
    pub title: String,
    /// Card body.
    pub description: String,
    /// Status badge.
    pub status: ItemStatus,
    /// Creation date.
    pub created_at: NaiveDate,
}

impl DashboardItem {
    /// `Created: YYYY-MM-DD` caption.
    #[must_use]
    pub fn created_caption(&self) -> String {
        format!("Created: {}", self.created_at.format("%Y-%m-%d"))
    }
}

/// Failure loading dashboard data.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// The bundled fixture did not decode.
    #[error("dashboard fixture is invalid")]
    Fixture(#[from] serde_json::Error),
}

/// Decode the bundled mock items.
///
/// # Errors
/// Returns [`DashboardError::Fixture`] when the bundled JSON is malformed.
pub fn mock_items() -> Result<Vec<DashboardItem>, DashboardError> {
    Ok(serde_json::from_str(MOCK_ITEMS)?)
}

/// Load the mock items after the simulated latency.
///
/// # Errors
/// Propagates [`mock_items`] failures.
pub async fn fetch_items<D: Delay>(
    delay: &D,
    latency: Duration,
) -> Result<Vec<DashboardItem>, DashboardError> {
    delay.wait(latency).await;
    mock_items()
}

/// Render state of the dashboard list.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum DashboardState {
    /// Waiting for items.
    #[default]
    Loading,
    /// Items available.
    Ready(Vec<DashboardItem>),
    /// Items failed to load.
    Failed(String),
}

impl DashboardState {
    /// Fold a fetch result into the render state.
    #[must_use]
    pub fn from_result(result: Result<Vec<DashboardItem>, DashboardError>) -> Self {
        match result {
            Ok(items) => Self::Ready(items),
            Err(err) => Self::Failed(err.to_string()),
        }
    }
}

/// Status filter applied to the card grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StatusFilter {
    /// Every status.
    #[default]
    All,
    /// A single status.
    Only(ItemStatus),
}

impl StatusFilter {
    /// Select-control value.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.as_str(),
        }
    }

    /// Parse a select-control value; unknown values yield `None`.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "all" => Some(Self::All),
            "active" => Some(Self::Only(ItemStatus::Active)),
            "inactive" => Some(Self::Only(ItemStatus::Inactive)),
            "pending" => Some(Self::Only(ItemStatus::Pending)),
            _ => None,
        }
    }

    /// Options for the filter select.
    #[must_use]
    pub fn choices() -> Vec<ChoiceItem> {
        vec![
            ChoiceItem::new("all", "All statuses"),
            ChoiceItem::new("active", "Active"),
            ChoiceItem::new("pending", "Pending"),
            ChoiceItem::new("inactive", "Inactive"),
        ]
    }

    fn admits(self, status: ItemStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Card ordering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// Most recent first.
    #[default]
    Newest,
    /// Oldest first.
    Oldest,
    /// Alphabetical by title.
    Title,
}

impl SortOrder {
    /// Radio value.
    #[must_use]
    pub const fn as_value(self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::Oldest => "oldest",
            Self::Title => "title",
        }
    }

    /// Parse a radio value; unknown values yield `None`.
    #[must_use]
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "newest" => Some(Self::Newest),
            "oldest" => Some(Self::Oldest),
            "title" => Some(Self::Title),
            _ => None,
        }
    }

    /// Options for the sort radio group.
    #[must_use]
    pub fn choices() -> Vec<ChoiceItem> {
        vec![
            ChoiceItem::new("newest", "Newest"),
            ChoiceItem::new("oldest", "Oldest"),
            ChoiceItem::new("title", "Title"),
        ]
    }
}

/// Filter then order the items for display.
#[must_use]
pub fn visible_items(
    items: &[DashboardItem],
    filter: StatusFilter,
    order: SortOrder,
) -> Vec<DashboardItem> {
    let mut visible: Vec<DashboardItem> = items
        .iter()
        .filter(|item| filter.admits(item.status))
        .cloned()
        .collect();
    match order {
        SortOrder::Newest => visible.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        SortOrder::Oldest => visible.sort_by(|a, b| a.created_at.cmp(&b.created_at)),
        SortOrder::Title => visible.sort_by(|a, b| a.title.cmp(&b.title)),
    }
    visible
}

/// Draft from the "Add New Item" dialog.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewItemDraft {
    /// Title input.
    pub title: String,
    /// Description input.
    pub description: String,
    /// Confirmation checkbox.
    pub confirmed: bool,
}

/// Title field label.
pub const TITLE: &str = "Title";
/// Confirmation checkbox label.
pub const CONFIRMATION: &str = "Confirmation";

impl NewItemDraft {
    /// Check the draft is ready to submit.
    ///
    /// # Errors
    /// Returns [`FormError::Required`] for a blank title or a missing confirmation.
    pub fn validate(&self) -> Result<(), FormError> {
        if self.title.trim().is_empty() {
            return Err(FormError::Required { field: TITLE });
        }
        if !self.confirmed {
            return Err(FormError::Required { field: CONFIRMATION });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::auth::test_support::RecordingDelay;

    #[test]
    fn fixture_decodes_three_projects() {
        let items = mock_items().expect("fixture is valid");
        let titles: Vec<_> = items.iter().map(|item| item.title.as_str()).collect();
        assert_eq!(titles, ["Project Alpha", "Project Beta", "Project Gamma"]);
        assert_eq!(
            items.iter().map(|item| item.status).collect::<Vec<_>>(),
            [ItemStatus::Active, ItemStatus::Pending, ItemStatus::Inactive]
        );
        assert_eq!(items[0].created_caption(), "Created: 2024-01-15");
    }

    #[test]
    fn status_colours_are_distinct() {
        assert!(ItemStatus::Active.badge_class().contains("green"));
        assert!(ItemStatus::Inactive.badge_class().contains("red"));
        assert!(ItemStatus::Pending.badge_class().contains("yellow"));
        assert_eq!(ItemStatus::Pending.as_str(), "pending");
    }

    #[tokio::test(flavor = "current_thread")]
    async fn fetch_waits_then_resolves_ready() {
        let delay = RecordingDelay::default();
        let state =
            DashboardState::from_result(fetch_items(&delay, Duration::from_millis(1000)).await);
        assert!(matches!(state, DashboardState::Ready(ref items) if items.len() == 3));
        assert_eq!(*delay.waits.borrow(), vec![Duration::from_millis(1000)]);
    }

    #[test]
    fn decode_failure_becomes_failed_state() {
        let err = serde_json::from_str::<Vec<DashboardItem>>("[{}]")
            .map_err(DashboardError::from)
            .expect_err("missing fields");
        assert_eq!(
            DashboardState::from_result(Err(err)),
            DashboardState::Failed("dashboard fixture is invalid".to_string())
        );
    }

    #[test]
    fn filter_keeps_matching_status_only() {
        let items = mock_items().expect("fixture is valid");
        let pending = visible_items(
            &items,
            StatusFilter::Only(ItemStatus::Pending),
            SortOrder::Newest,
        );
        assert_eq!(pending.len(), 1);
        assert_eq!(pending[0].title, "Project Beta");
        assert_eq!(
            visible_items(&items, StatusFilter::All, SortOrder::Newest).len(),
            3
        );
    }

    #[test]
    fn sort_orders_by_date_or_title() {
        let items = mock_items().expect("fixture is valid");
        let titles = |order| {
            visible_items(&items, StatusFilter::All, order)
                .into_iter()
                .map(|item| item.title)
                .collect::<Vec<_>>()
        };
        assert_eq!(
            titles(SortOrder::Newest),
            ["Project Beta", "Project Alpha", "Project Gamma"]
        );
        assert_eq!(
            titles(SortOrder::Oldest),
            ["Project Gamma", "Project Alpha", "Project Beta"]
        );
        assert_eq!(
            titles(SortOrder::Title),
            ["Project Alpha", "Project Beta", "Project Gamma"]
        );
    }

    #[test]
    fn control_values_parse_back() {
        for choice in StatusFilter::choices() {
            let filter = StatusFilter::from_value(&choice.value).expect("known value");
            assert_eq!(filter.as_value(), choice.value);
        }
        for choice in SortOrder::choices() {
            let order = SortOrder::from_value(&choice.value).expect("known value");
            assert_eq!(order.as_value(), choice.value);
        }
        assert_eq!(StatusFilter::from_value("archived"), None);
        assert_eq!(SortOrder::from_value(""), None);
    }

    #[test]
    fn draft_needs_title_and_confirmation() {
        let mut draft = NewItemDraft::default();
        assert_eq!(draft.validate(), Err(FormError::Required { field: TITLE }));
        draft.title = "Project Delta".to_string();
        assert_eq!(
            draft.validate().map_err(|err| err.to_string()),
            Err("Confirmation is required".to_string())
        );
        draft.confirmed = true;
        assert!(draft.validate().is_ok());
    }
}
