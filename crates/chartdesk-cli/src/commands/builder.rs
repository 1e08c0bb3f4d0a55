//! Builder command: assemble a draft and save it as a new chart.
//!
//! The draft comes either from a TOML file (`--file`) or from flags; the
//! two sources are mutually exclusive with `--file` taking precedence.
//! Charts are create-only; there is no edit path.

use crate::views;
use anyhow::{Context, Result};
use chartdesk_application::{ChartService, SessionStore};
use chartdesk_core::chart::{ChartDraft, PositionDraft};
use chartdesk_core::error::ChartdeskError;
use std::path::Path;

/// Parses one `--position` flag of the form
/// `title|name|responsibilities|kpis`; trailing parts may be omitted.
fn parse_position_spec(local_id: u32, spec: &str) -> PositionDraft {
    let mut parts = spec.splitn(4, '|').map(str::to_string);
    PositionDraft {
        local_id,
        title: parts.next().unwrap_or_default(),
        name: parts.next().unwrap_or_default(),
        responsibilities: parts.next().unwrap_or_default(),
        kpis: parts.next().unwrap_or_default(),
    }
}

fn draft_from_flags(
    title: Option<String>,
    description: Option<String>,
    positions: &[String],
) -> ChartDraft {
    ChartDraft {
        title: title.unwrap_or_default(),
        description: description.unwrap_or_default(),
        positions: positions
            .iter()
            .enumerate()
            .map(|(i, spec)| parse_position_spec(i as u32 + 1, spec))
            .collect(),
    }
}

fn draft_from_file(path: &Path) -> Result<ChartDraft> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read draft file {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse draft file {}", path.display()))
}

pub async fn create(
    session: &SessionStore,
    charts: &ChartService,
    file: Option<&Path>,
    title: Option<String>,
    description: Option<String>,
    positions: &[String],
) -> Result<()> {
    if session.current().is_none() {
        print!("{}", views::render_signed_out());
        return Ok(());
    }

    let draft = match file {
        Some(path) => draft_from_file(path)?,
        None => draft_from_flags(title, description, positions),
    };

    match charts.create(draft).await {
        Ok(chart) => {
            println!("Saved chart {}", chart.id);
            println!();
            print!("{}", views::render_chart_detail(&chart));
        }
        Err(ChartdeskError::Validation(_)) => {
            println!("Please enter a chart title.");
        }
        Err(e) => {
            tracing::error!("Error saving chart: {e}");
            println!("Error saving chart. Please try again.");
        }
    }
    Ok(())
}
