//! Quick-action cards and their user-chosen order.
//!
//! Reordering is a plain remove-then-insert on the card list. The order lives
//! only as long as the dashboard state; a starting order can come from config.

use serde::Serialize;

use crate::error::DashboardError;
use crate::metrics::DashboardMetrics;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuickAction {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Badge count; absent for cards that just navigate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
}

const fn card(id: &'static str, title: &'static str, description: &'static str) -> QuickAction {
    QuickAction {
        id,
        title,
        description,
        count: None,
    }
}

const DEFAULT_CARDS: [QuickAction; 7] = [
    card("interviews", "New Interviews", "Review intake interviews"),
    card("approvals", "Cases for Approval", "Approve or reject submitted cases"),
    card("hearings", "Upcoming Hearings", "Hearings scheduled this week"),
    card("notUpdated", "Cases Not Updated", "Cases past the stale-update window"),
    card("reports", "Reports", "Generate case reports"),
    card("infographics", "Infographics", "Charts and distributions"),
    card("management", "Management", "Programs, users and transfers"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickActionBoard {
    cards: Vec<QuickAction>,
}

impl Default for QuickActionBoard {
    fn default() -> Self {
        Self {
            cards: DEFAULT_CARDS.to_vec(),
        }
    }
}

impl QuickActionBoard {
    /// Start from a saved order. Listed ids come first in the given order;
    /// cards the list omits keep their default relative order after them.
    pub fn with_order(order: &[String]) -> Self {
        let mut remaining = DEFAULT_CARDS.to_vec();
        let mut cards = Vec::with_capacity(remaining.len());
        for id in order {
            match remaining.iter().position(|c| c.id == id.as_str()) {
                Some(pos) => cards.push(remaining.remove(pos)),
                None => log::warn!("Ignoring unknown quick action id in saved order: {}", id),
            }
        }
        cards.extend(remaining);
        Self { cards }
    }

    pub fn cards(&self) -> &[QuickAction] {
        &self.cards
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.cards.iter().map(|c| c.id).collect()
    }

    /// Move the card at `from` so it ends up at index `to`.
    pub fn move_card(&mut self, from: usize, to: usize) -> Result<(), DashboardError> {
        let len = self.cards.len();
        for index in [from, to] {
            if index >= len {
                log::warn!("Rejected quick action move {} -> {} ({} cards)", from, to, len);
                return Err(DashboardError::CardIndexOutOfRange { index, len });
            }
        }
        if from == to {
            return Ok(());
        }
        let moved = self.cards.remove(from);
        self.cards.insert(to, moved);
        Ok(())
    }

    /// Copy badge counts from freshly derived metrics.
    pub fn refresh_counts(&mut self, metrics: &DashboardMetrics) {
        for card in &mut self.cards {
            card.count = match card.id {
                "interviews" => Some(metrics.actions.new_interviews),
                "approvals" => Some(metrics.actions.pending_approvals),
                "hearings" => Some(metrics.actions.upcoming_hearings),
                "notUpdated" => Some(metrics.actions.cases_not_updated),
                _ => None,
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::BASELINE;

    #[test]
    fn test_move_forward() {
        let mut board = QuickActionBoard::default();
        board.move_card(0, 2).unwrap();
        assert_eq!(&board.ids()[..4], &["approvals", "hearings", "interviews", "notUpdated"]);
    }

    #[test]
    fn test_move_backward() {
        let mut board = QuickActionBoard::default();
        board.move_card(6, 0).unwrap();
        assert_eq!(board.ids()[0], "management");
        assert_eq!(board.ids()[1], "interviews");
        assert_eq!(board.cards().len(), 7);
    }

    #[test]
    fn test_move_same_index_is_noop() {
        let mut board = QuickActionBoard::default();
        board.move_card(3, 3).unwrap();
        assert_eq!(board, QuickActionBoard::default());
    }

    #[test]
    fn test_move_out_of_range_leaves_order() {
        let mut board = QuickActionBoard::default();
        let err = board.move_card(1, 7).unwrap_err();
        assert!(matches!(err, DashboardError::CardIndexOutOfRange { index: 7, len: 7 }));
        assert_eq!(board, QuickActionBoard::default());
    }

    #[test]
    fn test_with_order_puts_listed_first() {
        let order = vec!["reports".to_string(), "bogus".to_string(), "hearings".to_string()];
        let board = QuickActionBoard::with_order(&order);
        assert_eq!(
            board.ids(),
            vec!["reports", "hearings", "interviews", "approvals", "notUpdated", "infographics", "management"]
        );
    }

    #[test]
    fn test_refresh_counts() {
        let mut board = QuickActionBoard::default();
        board.refresh_counts(&BASELINE);
        let hearings = board.cards().iter().find(|c| c.id == "hearings").unwrap();
        assert_eq!(hearings.count, Some(42));
        let reports = board.cards().iter().find(|c| c.id == "reports").unwrap();
        assert_eq!(reports.count, None);
    }

    #[test]
    fn test_not_updated_card_has_no_fixed_window() {
        let board = QuickActionBoard::default();
        let card = board.cards().iter().find(|c| c.id == "notUpdated").unwrap();
        assert!(!card.description.chars().any(|c| c.is_ascii_digit()));
    }
}
