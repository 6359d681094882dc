use gecko_control::{
    wide_string::{empty_engine_string, to_engine_string},
    Hwnd, U16CString,
};
use pyo3::prelude::*;

use crate::{callbacks::CallbackRegistry, error::BrowserError};

/// Validated `MozillaBrowser(...)` arguments. The UTF-16 buffers only live
/// until construction finishes.
#[derive(Debug)]
pub struct BrowserOptions {
    pub hwnd: Hwnd,
    pub initial_url: U16CString,
    pub user_agent: U16CString,
    pub callbacks: CallbackRegistry,
}

impl BrowserOptions {
    pub fn new(
        hwnd: isize,
        initial_url: Option<&str>,
        user_agent: Option<&str>,
        on_load_callback: Option<&Bound<'_, PyAny>>,
        on_action_callback: Option<&Bound<'_, PyAny>>,
        on_document_load_finished_callback: Option<&Bound<'_, PyAny>>,
    ) -> Result<Self, BrowserError> {
        let initial_url = engine_text("initialURL", initial_url)?;
        let user_agent = engine_text("userAgent", user_agent)?;
        let callbacks = CallbackRegistry::register(
            on_load_callback,
            on_action_callback,
            on_document_load_finished_callback,
        )?;

        Ok(Self {
            hwnd: Hwnd(hwnd),
            initial_url,
            user_agent,
            callbacks,
        })
    }
}

/// Encodes optional text as BOM-free UTF-16. Missing text is empty.
pub(crate) fn engine_text(option: &str, text: Option<&str>) -> Result<U16CString, BrowserError> {
    match text {
        Some(text) => {
            to_engine_string(text).map_err(|_| BrowserError::InvalidText(option.to_string()))
        }
        None => Ok(empty_engine_string()),
    }
}
