use std::sync::Arc;

use log::warn;
use widestring::U16CStr;

use crate::{Control, ControlHandler, Hwnd, NsResult};

/// Stand-in used when the crate is built without the `gecko` feature.
/// Creation always fails, so no browser can be constructed on top of it.
#[derive(Debug)]
pub struct DisabledControl {
    hwnd: Hwnd,
}

impl DisabledControl {
    pub fn new() -> Self {
        Self { hwnd: Hwnd(0) }
    }
}

impl Default for DisabledControl {
    fn default() -> Self {
        Self::new()
    }
}

impl Control for DisabledControl {
    fn create(
        &mut self,
        hwnd: Hwnd,
        _initial_url: &U16CStr,
        _user_agent: &U16CStr,
        _handler: Arc<dyn ControlHandler>,
    ) -> NsResult {
        warn!("Gecko support is not compiled in. Rebuild with the \"gecko\" feature.");
        self.hwnd = hwnd;
        NsResult::ERROR_NOT_AVAILABLE
    }

    fn hwnd(&self) -> Hwnd {
        self.hwnd
    }

    fn recompute_size(&self) -> NsResult {
        NsResult::ERROR_NOT_INITIALIZED
    }

    fn activate(&self) -> NsResult {
        NsResult::ERROR_NOT_INITIALIZED
    }

    fn deactivate(&self) -> NsResult {
        NsResult::ERROR_NOT_INITIALIZED
    }

    fn add_element_at_end(&self, _xml: &U16CStr, _id: &U16CStr) -> NsResult {
        NsResult::ERROR_NOT_INITIALIZED
    }

    fn add_element_before(&self, _xml: &U16CStr, _id: &U16CStr) -> NsResult {
        NsResult::ERROR_NOT_INITIALIZED
    }

    fn remove_element(&self, _id: &U16CStr) -> NsResult {
        NsResult::ERROR_NOT_INITIALIZED
    }

    fn change_element(&self, _id: &U16CStr, _xml: &U16CStr) -> NsResult {
        NsResult::ERROR_NOT_INITIALIZED
    }

    fn hide_element(&self, _id: &U16CStr) -> NsResult {
        NsResult::ERROR_NOT_INITIALIZED
    }

    fn show_element(&self, _id: &U16CStr) -> NsResult {
        NsResult::ERROR_NOT_INITIALIZED
    }
}
