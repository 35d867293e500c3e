//! Host confirmation before destructive actions

use crate::console_warn;

/// Blocking yes/no question asked before a record is removed
pub trait ConfirmPrompt {
    fn confirm(&self, message: &str) -> bool;
}

impl<F> ConfirmPrompt for F
where
    F: Fn(&str) -> bool,
{
    fn confirm(&self, message: &str) -> bool {
        self(message)
    }
}

/// `window.confirm` in the browser
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConfirm;

impl ConfirmPrompt for BrowserConfirm {
    #[cfg(target_arch = "wasm32")]
    fn confirm(&self, message: &str) -> bool {
        match web_sys::window() {
            Some(window) => window.confirm_with_message(message).unwrap_or_else(|err| {
                console_warn!("[Confirm] window.confirm failed: {:?}", err);
                false
            }),
            None => {
                console_warn!("[Confirm] No window available, treating as declined");
                false
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn confirm(&self, message: &str) -> bool {
        console_warn!(
            "[Confirm] No browser host, declining prompt: {}",
            message
        );
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_prompt_receives_message() {
        let asked = RefCell::new(Vec::new());
        let prompt = |message: &str| {
            asked.borrow_mut().push(message.to_string());
            true
        };

        assert!(prompt.confirm("Remove?"));
        assert_eq!(asked.borrow().as_slice(), ["Remove?".to_string()]);
    }

    #[test]
    fn test_browser_confirm_declines_off_wasm() {
        assert!(!BrowserConfirm.confirm("Remove?"));
    }
}
