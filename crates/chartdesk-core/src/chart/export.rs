//! Chart export to a local JSON file.
//!
//! Mirrors the "download as file" action: the viewed chart record is
//! serialized to pretty JSON and written under a filename derived from the
//! chart title.

use super::model::Chart;
use crate::error::Result;

/// Derives the export file name from a chart title.
///
/// Whitespace runs are collapsed to single underscores and the
/// `_chart.json` suffix is appended, e.g. `"Org Chart"` becomes
/// `Org_Chart_chart.json`.
pub fn export_file_name(title: &str) -> String {
    let stem: Vec<&str> = title.split_whitespace().collect();
    format!("{}_chart.json", stem.join("_"))
}

impl Chart {
    /// Serializes the chart to the pretty JSON export format.
    pub fn to_export_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parses a chart back from the export format.
    pub fn from_export_json(json: &str) -> Result<Chart> {
        Ok(serde_json::from_str(json)?)
    }
}

/// An export payload ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartExport {
    pub file_name: String,
    pub json: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::model::Position;
    use chrono::{TimeZone, Utc};

    fn sample_chart() -> Chart {
        Chart {
            id: "chart-1".to_string(),
            owner_id: "user-1".to_string(),
            title: "Org Chart".to_string(),
            description: "Leadership team".to_string(),
            positions: vec![
                Position {
                    title: "CEO".to_string(),
                    name: "Ann".to_string(),
                    responsibilities: "Vision\nFinal decisions".to_string(),
                    kpis: "Revenue".to_string(),
                },
                Position {
                    title: "COO".to_string(),
                    name: String::new(),
                    responsibilities: String::new(),
                    kpis: String::new(),
                },
            ],
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        }
    }

    #[test]
    fn test_export_file_name() {
        assert_eq!(export_file_name("Org Chart"), "Org_Chart_chart.json");
        assert_eq!(export_file_name("Org   Chart"), "Org_Chart_chart.json");
        assert_eq!(export_file_name("Solo"), "Solo_chart.json");
    }

    #[test]
    fn test_export_round_trip() {
        let chart = sample_chart();
        let json = chart.to_export_json().unwrap();
        let parsed = Chart::from_export_json(&json).unwrap();
        assert_eq!(parsed.title, chart.title);
        assert_eq!(parsed.description, chart.description);
        assert_eq!(parsed.positions, chart.positions);
        assert_eq!(parsed, chart);
    }
}
