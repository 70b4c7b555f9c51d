//! Wire types exchanged between the recruitment dashboard and its backend.

pub mod dashboard;
pub mod form_config;
pub mod shared;
pub mod system;
