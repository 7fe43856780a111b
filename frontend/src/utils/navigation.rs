use std::cell::RefCell;
use std::rc::Rc;

/// Page-level side effects that cannot run outside a browser.
pub trait Navigator {
    fn redirect(&self, path: &str);
    fn alert(&self, message: &str);
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn redirect(&self, path: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let location = window.location();
        if location.pathname().ok().as_deref() == Some(path) {
            return;
        }
        if location.set_href(path).is_err() {
            log::warn!("failed to navigate to {}", path);
        }
    }

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

/// Records every call and answers confirmations from a queue (default `true`).
/// Used wherever no browser window exists.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    redirects: RefCell<Vec<String>>,
    alerts: RefCell<Vec<String>>,
    confirms: RefCell<Vec<String>>,
    answers: RefCell<Vec<bool>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answers consumed in order by subsequent `confirm` calls.
    pub fn with_answers(answers: &[bool]) -> Self {
        let navigator = Self::default();
        navigator.answers.replace(answers.iter().rev().copied().collect());
        navigator
    }

    pub fn redirects(&self) -> Vec<String> {
        self.redirects.borrow().clone()
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn confirms(&self) -> Vec<String> {
        self.confirms.borrow().clone()
    }

    pub fn last_redirect(&self) -> Option<String> {
        self.redirects.borrow().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, path: &str) {
        self.redirects.borrow_mut().push(path.to_string());
    }

    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop().unwrap_or(true)
    }
}

pub fn default_navigator() -> Rc<dyn Navigator> {
    if cfg!(target_arch = "wasm32") {
        Rc::new(BrowserNavigator)
    } else {
        Rc::new(RecordingNavigator::new())
    }
}
