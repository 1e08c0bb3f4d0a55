//! Dashboard commands: list and delete.

use crate::prompt;
use crate::views::{self, DashboardState};
use anyhow::Result;
use chartdesk_application::{ChartService, SessionStore};

pub async fn list(session: &SessionStore, charts: &ChartService) -> Result<()> {
    if session.current().is_none() {
        print!("{}", views::render_signed_out());
        return Ok(());
    }

    match charts.list().await {
        Ok(list) => {
            let state = DashboardState::new(list);
            print!("{}", views::render_dashboard(&state));
        }
        Err(e) => {
            tracing::error!("Error fetching charts: {e}");
            println!("Error loading charts. Please try again.");
        }
    }
    Ok(())
}

pub async fn delete(
    session: &SessionStore,
    charts: &ChartService,
    chart_id: &str,
    yes: bool,
) -> Result<()> {
    if session.current().is_none() {
        print!("{}", views::render_signed_out());
        return Ok(());
    }

    if !yes {
        let answer = prompt::read_line("Are you sure you want to delete this chart? [y/N] ")?;
        if !matches!(answer.trim(), "y" | "Y" | "yes") {
            println!("Cancelled.");
            return Ok(());
        }
    }

    // Fetch up front so the rendered dashboard can drop the row locally
    // instead of refetching after the delete.
    let mut state = match charts.list().await {
        Ok(list) => Some(DashboardState::new(list)),
        Err(e) => {
            tracing::warn!("Error fetching charts before delete: {e}");
            None
        }
    };

    match charts.delete(chart_id).await {
        Ok(()) => {
            println!("Deleted chart {chart_id}.");
            if let Some(state) = state.as_mut() {
                state.remove(chart_id);
                println!();
                print!("{}", views::render_dashboard(state));
            }
        }
        Err(e) => {
            tracing::error!("Error deleting chart {chart_id}: {e}");
            println!("Error deleting chart. Please try again.");
        }
    }
    Ok(())
}
