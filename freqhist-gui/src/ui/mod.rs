//! UI rendering modules.
//!
//! - `control_panel`: Left sidebar with file, parsing and chart controls
//! - `chart_view`: Central panel with the frequency bar chart
//! - `table_window`: Frequency table window
//! - `theme`: Colors and style

mod chart_view;
mod control_panel;
mod table_window;
pub mod theme;
