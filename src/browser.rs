//! Browser Dialogs
//!
//! `window.alert` / `window.confirm` behind the controller's Prompt seam.

use todo_client::Prompt;

#[derive(Clone, Copy, Default)]
pub struct BrowserPrompt;

impl Prompt for BrowserPrompt {
    fn alert(&self, message: &str) {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(message);
        }
    }

    fn confirm(&self, message: &str) -> bool {
        web_sys::window()
            .and_then(|window| window.confirm_with_message(message).ok())
            .unwrap_or(false)
    }
}

/// Origin of the current page, e.g. `http://localhost:8080`
pub fn page_origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}
