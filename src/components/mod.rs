pub mod chart_panel;
pub mod result_panel;
pub mod status_line;
