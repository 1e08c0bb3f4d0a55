//! Detail view commands: show and export.

use crate::views;
use anyhow::{Context, Result};
use chartdesk_application::ChartService;
use std::path::Path;

pub async fn show(charts: &ChartService, chart_id: &str) -> Result<()> {
    match charts.get(chart_id).await {
        Ok(found) => {
            let state = match found {
                Some(chart) => views::ViewState::Ready(chart),
                None => views::ViewState::NotFound,
            };
            print!("{}", views::render_chart_view(&state));
        }
        Err(e) => {
            tracing::error!("Error fetching chart {chart_id}: {e}");
            println!("Error loading chart. Please try again.");
        }
    }
    Ok(())
}

pub async fn export(charts: &ChartService, chart_id: &str, out_dir: Option<&Path>) -> Result<()> {
    match charts.export(chart_id).await {
        Ok(export) => {
            let path = out_dir
                .unwrap_or_else(|| Path::new("."))
                .join(&export.file_name);
            std::fs::write(&path, &export.json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        Err(e) if e.is_not_found() => {
            println!("Chart not found");
        }
        Err(e) => {
            tracing::error!("Error exporting chart {chart_id}: {e}");
            println!("Error exporting chart. Please try again.");
        }
    }
    Ok(())
}
