pub mod bar_chart;
pub mod pagination_controls;
pub mod rich_text;
