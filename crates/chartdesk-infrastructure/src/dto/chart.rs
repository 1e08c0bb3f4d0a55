//! Wire DTOs for the `charts` table.
//!
//! PostgREST-style rows: `id, user_id, title, description, positions,
//! created_at`. The `positions` column is a structured JSON array embedded
//! in the row.

use chartdesk_core::chart::{Chart, NewChart, Position};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Row id as stored by the service. Serial integer and UUID backends both
/// occur in the wild; either way the client treats it as an opaque string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RowId {
    Text(String),
    Number(i64),
}

impl RowId {
    fn into_string(self) -> String {
        match self {
            RowId::Text(s) => s,
            RowId::Number(n) => n.to_string(),
        }
    }
}

/// One embedded position within a chart row.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PositionDto {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub responsibilities: String,
    #[serde(default)]
    pub kpis: String,
}

impl From<PositionDto> for Position {
    fn from(dto: PositionDto) -> Self {
        Position {
            title: dto.title,
            name: dto.name,
            responsibilities: dto.responsibilities,
            kpis: dto.kpis,
        }
    }
}

impl From<&Position> for PositionDto {
    fn from(position: &Position) -> Self {
        PositionDto {
            title: position.title.clone(),
            name: position.name.clone(),
            responsibilities: position.responsibilities.clone(),
            kpis: position.kpis.clone(),
        }
    }
}

/// A chart row as returned by the service.
#[derive(Debug, Clone, Deserialize)]
pub struct ChartRowDto {
    pub id: RowId,
    pub user_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub positions: Option<Vec<PositionDto>>,
    pub created_at: DateTime<Utc>,
}

impl From<ChartRowDto> for Chart {
    fn from(row: ChartRowDto) -> Self {
        Chart {
            id: row.id.into_string(),
            owner_id: row.user_id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            positions: row
                .positions
                .unwrap_or_default()
                .into_iter()
                .map(Position::from)
                .collect(),
            created_at: row.created_at,
        }
    }
}

/// The insert payload for a new chart row.
#[derive(Debug, Clone, Serialize)]
pub struct InsertChartDto {
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub positions: Vec<PositionDto>,
    pub created_at: DateTime<Utc>,
}

impl From<&NewChart> for InsertChartDto {
    fn from(chart: &NewChart) -> Self {
        InsertChartDto {
            user_id: chart.owner_id.clone(),
            title: chart.title.clone(),
            description: chart.description.clone(),
            positions: chart.positions.iter().map(PositionDto::from).collect(),
            created_at: chart.created_at,
        }
    }
}
