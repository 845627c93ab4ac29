//! KPI panel: category/year selection, the target-vs-actual chart, the
//! favourite KPIs table and the fetch status line with its Reload button.

mod sections;
mod types;
mod ui_system;

#[cfg(test)]
mod tests;

pub use types::KpiPanelVisible;
pub use ui_system::{cancel_fetch_when_hidden, kpi_panel_ui};
