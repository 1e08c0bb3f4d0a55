//! Chart domain model.
//!
//! This module contains the core Chart entities and the draft types that
//! represent an accountability chart being assembled before it is saved.

use crate::error::ValidationError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named role embedded inside a chart.
///
/// All fields are free text; an empty string means the field is unset.
/// Positions are values embedded in their chart, never separately
/// addressable records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Role title (e.g. "CEO", "Marketing Manager")
    #[serde(default)]
    pub title: String,
    /// Name of the person holding the role
    #[serde(default)]
    pub name: String,
    /// Key responsibilities, free text
    #[serde(default)]
    pub responsibilities: String,
    /// Key performance indicators, free text
    #[serde(default)]
    pub kpis: String,
}

impl Position {
    /// A position is worth keeping when its trimmed title or name is
    /// non-empty. Blank rows left over from the builder are dropped on save.
    pub fn is_retained(&self) -> bool {
        !self.title.trim().is_empty() || !self.name.trim().is_empty()
    }
}

/// A persisted accountability chart record.
///
/// `id` and `created_at` are assigned by the remote service on insert.
/// `owner_id` must equal the acting session's identity for all reads and
/// writes; that boundary is enforced server-side, the client's obligation
/// is to always pass the acting identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chart {
    /// Server-assigned identifier
    pub id: String,
    /// Identity of the user who created the chart
    pub owner_id: String,
    /// Non-empty chart title
    pub title: String,
    /// Optional description (empty string when absent)
    #[serde(default)]
    pub description: String,
    /// Ordered sequence of retained positions
    #[serde(default)]
    pub positions: Vec<Position>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// The validated payload for inserting a new chart.
///
/// Produced only by [`ChartDraft::into_new_chart`], so a `NewChart` always
/// carries a trimmed non-empty title and only retained positions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewChart {
    pub owner_id: String,
    pub title: String,
    pub description: String,
    pub positions: Vec<Position>,
    pub created_at: DateTime<Utc>,
}

/// A position row in the builder, identified by a client-local sequence id.
///
/// The `local_id` exists only so the builder can address rows while editing;
/// it is never persisted, and drafts loaded from a file may omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionDraft {
    #[serde(default)]
    pub local_id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub responsibilities: String,
    #[serde(default)]
    pub kpis: String,
}

impl PositionDraft {
    fn blank(local_id: u32) -> Self {
        Self {
            local_id,
            title: String::new(),
            name: String::new(),
            responsibilities: String::new(),
            kpis: String::new(),
        }
    }
}

/// In-memory state of a chart being assembled in the builder.
///
/// Exists only until save; on save it is validated into a [`NewChart`]
/// and the draft is consumed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChartDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub positions: Vec<PositionDraft>,
}

impl ChartDraft {
    /// Creates a draft with one blank position row, like a fresh builder.
    pub fn new() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            positions: vec![PositionDraft::blank(1)],
        }
    }

    /// Appends a blank position row and returns its local id.
    pub fn add_position(&mut self) -> u32 {
        let next_id = self
            .positions
            .iter()
            .map(|p| p.local_id)
            .max()
            .unwrap_or(0)
            + 1;
        self.positions.push(PositionDraft::blank(next_id));
        next_id
    }

    /// Removes the position with the given local id.
    ///
    /// The last remaining row cannot be removed; returns `false` when the
    /// id is unknown or removal was refused.
    pub fn remove_position(&mut self, local_id: u32) -> bool {
        if self.positions.len() <= 1 {
            return false;
        }
        let before = self.positions.len();
        self.positions.retain(|p| p.local_id != local_id);
        self.positions.len() < before
    }

    /// Returns a mutable reference to a position row by local id.
    pub fn position_mut(&mut self, local_id: u32) -> Option<&mut PositionDraft> {
        self.positions.iter_mut().find(|p| p.local_id == local_id)
    }

    /// Validates the draft and produces the insert payload.
    ///
    /// - An empty or whitespace-only title fails with
    ///   [`ValidationError::EmptyTitle`]; callers must not issue a
    ///   persistence call in that case.
    /// - Only positions with a non-empty trimmed title or name are retained;
    ///   local ids are dropped.
    pub fn into_new_chart(
        self,
        owner_id: impl Into<String>,
        now: DateTime<Utc>,
    ) -> std::result::Result<NewChart, ValidationError> {
        let title = self.title.trim().to_string();
        if title.is_empty() {
            return Err(ValidationError::EmptyTitle);
        }

        let positions: Vec<Position> = self
            .positions
            .into_iter()
            .map(|p| Position {
                title: p.title,
                name: p.name,
                responsibilities: p.responsibilities,
                kpis: p.kpis,
            })
            .filter(Position::is_retained)
            .collect();

        Ok(NewChart {
            owner_id: owner_id.into(),
            title,
            description: self.description.trim().to_string(),
            positions,
            created_at: now,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with(title: &str, positions: Vec<PositionDraft>) -> ChartDraft {
        ChartDraft {
            title: title.to_string(),
            description: String::new(),
            positions,
        }
    }

    fn position(local_id: u32, title: &str, name: &str) -> PositionDraft {
        PositionDraft {
            local_id,
            title: title.to_string(),
            name: name.to_string(),
            responsibilities: String::new(),
            kpis: String::new(),
        }
    }

    #[test]
    fn test_new_draft_starts_with_one_blank_position() {
        let draft = ChartDraft::new();
        assert_eq!(draft.positions.len(), 1);
        assert_eq!(draft.positions[0].local_id, 1);
    }

    #[test]
    fn test_add_position_assigns_next_local_id() {
        let mut draft = ChartDraft::new();
        assert_eq!(draft.add_position(), 2);
        draft.remove_position(1);
        // Ids keep growing past removed rows
        assert_eq!(draft.add_position(), 3);
    }

    #[test]
    fn test_remove_position_refuses_last_row() {
        let mut draft = ChartDraft::new();
        assert!(!draft.remove_position(1));
        assert_eq!(draft.positions.len(), 1);

        draft.add_position();
        assert!(draft.remove_position(1));
        assert_eq!(draft.positions.len(), 1);
    }

    #[test]
    fn test_into_new_chart_rejects_empty_title() {
        let draft = draft_with("", vec![position(1, "CEO", "Ann")]);
        assert_eq!(
            draft.into_new_chart("user-1", Utc::now()),
            Err(ValidationError::EmptyTitle)
        );
    }

    #[test]
    fn test_into_new_chart_rejects_whitespace_title() {
        let draft = draft_with("   \t", vec![position(1, "CEO", "Ann")]);
        assert_eq!(
            draft.into_new_chart("user-1", Utc::now()),
            Err(ValidationError::EmptyTitle)
        );
    }

    #[test]
    fn test_into_new_chart_filters_blank_positions() {
        let draft = draft_with(
            "Org Chart",
            vec![
                position(1, "CEO", "Ann"),
                position(2, "", ""),
                position(3, "  ", "  "),
                position(4, "", "Bob"),
            ],
        );
        let new_chart = draft.into_new_chart("user-1", Utc::now()).unwrap();
        assert_eq!(new_chart.positions.len(), 2);
        assert_eq!(new_chart.positions[0].title, "CEO");
        assert_eq!(new_chart.positions[1].name, "Bob");
    }

    #[test]
    fn test_into_new_chart_trims_title_and_description() {
        let mut draft = draft_with("  Org Chart  ", vec![position(1, "CEO", "Ann")]);
        draft.description = "  about us  ".to_string();
        let new_chart = draft.into_new_chart("user-1", Utc::now()).unwrap();
        assert_eq!(new_chart.title, "Org Chart");
        assert_eq!(new_chart.description, "about us");
        assert_eq!(new_chart.owner_id, "user-1");
    }
}
