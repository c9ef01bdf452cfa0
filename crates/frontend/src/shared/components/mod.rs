pub mod date_context_bar;
pub mod ui;
