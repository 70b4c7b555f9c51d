//! Blocking browser dialogs used for confirmations and failure notices.

use std::fmt::Debug;

/// Log a failed browser call instead of dropping it; `None` on failure.
pub fn warn_on_err<T, E: Debug>(action: &str, result: Result<T, E>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("{} failed: {:?}", action, e);
            None
        }
    }
}

pub fn alert(message: &str) {
    match web_sys::window() {
        Some(window) => {
            warn_on_err("alert", window.alert_with_message(message));
        }
        None => log::warn!("No window for alert: {}", message),
    }
}

pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| warn_on_err("confirm", w.confirm_with_message(message)))
        .unwrap_or(false)
}

/// `None` when the user cancels or no window is available.
pub fn prompt(message: &str, default: &str) -> Option<String> {
    web_sys::window()
        .and_then(|w| warn_on_err("prompt", w.prompt_with_message_and_default(message, default)))
        .flatten()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn warn_on_err_passes_values_and_drops_errors() {
        assert_eq!(warn_on_err::<_, String>("confirm", Ok(true)), Some(true));
        assert_eq!(warn_on_err::<bool, _>("confirm", Err("blocked".to_string())), None);
    }
}
