pub mod filter_panel;
pub mod stat_card;
pub mod ui;
