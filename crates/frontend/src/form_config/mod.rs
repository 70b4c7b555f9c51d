//! Editor for the dynamic application-form schema.

pub mod api;
pub mod controller;
pub mod messages;
pub mod model;
pub mod ui;
