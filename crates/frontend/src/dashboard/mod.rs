//! Recruitment dashboard: filters, KPIs, charts, candidate table and the
//! status modal, all driven by [`controller::DashboardController`].

pub mod api;
pub mod charts;
pub mod columns;
pub mod controller;
pub mod filters;
pub mod kpi;
pub mod messages;
pub mod state;
pub mod status;
pub mod ui;
