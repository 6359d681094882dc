use pyo3::prelude::*;

use crate::error::BrowserError;

/// Python callable registered for one engine event, or no handler at all.
#[derive(Debug, Default)]
pub enum Callback {
    #[default]
    None,
    Function(Py<PyAny>),
}

impl Callback {
    /// Both a missing argument and Python `None` mean "no handler".
    /// Any other value has to be callable; `option` names it in the error.
    pub fn new(
        option: &'static str,
        value: Option<&Bound<'_, PyAny>>,
    ) -> Result<Self, BrowserError> {
        match value {
            None => Ok(Callback::None),
            Some(value) if value.is_none() => Ok(Callback::None),
            Some(value) if value.is_callable() => Ok(Callback::Function(value.clone().unbind())),
            Some(_) => Err(BrowserError::NotCallable(option)),
        }
    }

    pub fn function(&self) -> Option<&Py<PyAny>> {
        match self {
            Callback::None => None,
            Callback::Function(function) => Some(function),
        }
    }
}

/// Handlers for the three engine events. Written once at construction and
/// only read afterwards. Each function is released when the registry drops.
#[derive(Debug, Default)]
pub struct CallbackRegistry {
    pub on_url_load: Callback,
    pub on_action_url: Callback,
    pub on_document_load_finished: Callback,
}

impl CallbackRegistry {
    pub fn register(
        on_url_load: Option<&Bound<'_, PyAny>>,
        on_action_url: Option<&Bound<'_, PyAny>>,
        on_document_load_finished: Option<&Bound<'_, PyAny>>,
    ) -> Result<Self, BrowserError> {
        Ok(Self {
            on_url_load: Callback::new("onLoadCallback", on_url_load)?,
            on_action_url: Callback::new("onActionCallback", on_action_url)?,
            on_document_load_finished: Callback::new(
                "onDocumentLoadFinishedCallback",
                on_document_load_finished,
            )?,
        })
    }
}
