//! View rendering: pure functions from view state to terminal text.
//!
//! Each view resolves to a small state machine after its single repository
//! call completes; render functions are side-effect free so the states and
//! their transitions stay testable.

use chartdesk_core::chart::Chart;

/// Terminal state of a list or detail view after its fetch resolves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState<T> {
    Ready(T),
    Empty,
    NotFound,
}

/// In-memory dashboard state: the fetched chart list, kept consistent with
/// local deletions without a refetch.
#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    charts: Vec<Chart>,
}

impl DashboardState {
    pub fn new(charts: Vec<Chart>) -> Self {
        Self { charts }
    }

    /// Removes a chart from the local list after a successful delete.
    /// Unknown ids leave the list untouched.
    pub fn remove(&mut self, chart_id: &str) {
        self.charts.retain(|chart| chart.id != chart_id);
    }

    pub fn view(&self) -> ViewState<&[Chart]> {
        if self.charts.is_empty() {
            ViewState::Empty
        } else {
            ViewState::Ready(&self.charts)
        }
    }
}

/// Renders the dashboard list, or its empty state.
pub fn render_dashboard(state: &DashboardState) -> String {
    match state.view() {
        ViewState::Empty => {
            "No charts yet\nCreate your first accountability chart with `chartdesk create`.\n"
                .to_string()
        }
        ViewState::Ready(charts) => {
            let mut out = String::from("My Accountability Charts\n\n");
            for chart in charts {
                out.push_str(&format!(
                    "  {}  {}  ({})\n      {}\n",
                    chart.id,
                    chart.title,
                    chart.created_at.format("%Y-%m-%d"),
                    if chart.description.is_empty() {
                        "No description"
                    } else {
                        &chart.description
                    },
                ));
            }
            out
        }
        ViewState::NotFound => unreachable!("dashboard has no not-found state"),
    }
}

/// Renders the detail view: the chart, or its not-found state.
pub fn render_chart_view(state: &ViewState<Chart>) -> String {
    match state {
        ViewState::Ready(chart) => render_chart_detail(chart),
        ViewState::NotFound | ViewState::Empty => {
            "Chart not found\nSee your charts with `chartdesk list`.\n".to_string()
        }
    }
}

/// Renders the detail view of a single chart.
pub fn render_chart_detail(chart: &Chart) -> String {
    let mut out = format!("{}\n", chart.title);
    if !chart.description.is_empty() {
        out.push_str(&format!("{}\n", chart.description));
    }
    out.push('\n');

    for position in &chart.positions {
        let title = if position.title.trim().is_empty() {
            "Untitled Position"
        } else {
            &position.title
        };
        out.push_str(&format!("* {title}\n"));
        if !position.name.is_empty() {
            out.push_str(&format!("  Name: {}\n", position.name));
        }
        if !position.responsibilities.is_empty() {
            out.push_str(&format!(
                "  Responsibilities:\n    {}\n",
                position.responsibilities.replace('\n', "\n    ")
            ));
        }
        if !position.kpis.is_empty() {
            out.push_str(&format!(
                "  Key Performance Indicators:\n    {}\n",
                position.kpis.replace('\n', "\n    ")
            ));
        }
        out.push('\n');
    }
    out
}

/// Renders the signed-out dashboard hint.
pub fn render_signed_out() -> String {
    "Welcome to Chartdesk\nSign in with `chartdesk login --email <email>` to create and manage \
     your accountability charts.\n"
        .to_string()
}
