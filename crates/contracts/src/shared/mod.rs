pub mod api_message;
pub mod serde_helpers;
