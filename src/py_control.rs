use std::sync::Arc;

use gecko_control::{Control, ControlHandler, Hwnd, NsResult, U16CStr};
use pyo3::{prelude::*, types::PyBytes};
use tracing::{debug, trace, warn};

use crate::{callbacks::CallbackRegistry, error::BrowserError};

/// Routes engine events into the registered Python callables.
///
/// Every call takes the GIL for its own duration only, so it works both from
/// engine threads and from a thread that already holds the GIL.
#[derive(Debug, Default)]
pub struct CallbackBridge {
    callbacks: CallbackRegistry,
}

impl CallbackBridge {
    pub fn new(callbacks: CallbackRegistry) -> Self {
        Self { callbacks }
    }
}

impl ControlHandler for CallbackBridge {
    fn on_url_load(&self, url: &[u8]) -> bool {
        let url_text = String::from_utf8_lossy(url);
        trace!(url = %url_text, "onURLLoad");
        let Some(callback) = self.callbacks.on_url_load.function() else {
            return true;
        };

        Python::with_gil(|py| {
            let result = match callback.call1(py, (PyBytes::new(py, url),)) {
                Ok(result) => result,
                Err(err) => {
                    warn!(url = %url_text, "Warning: ignoring exception in MozillaBrowser onLoad callback (Python-side): {err}");
                    return true;
                }
            };

            if result.is_none(py) {
                return true;
            }
            match result.bind(py).is_truthy() {
                Ok(allow) => allow,
                Err(err) => {
                    warn!(url = %url_text, "Warning: ignoring exception in MozillaBrowser onLoad callback (Python-side): {err}");
                    true
                }
            }
        })
    }

    fn on_action_url(&self, url: &[u8]) {
        let url_text = String::from_utf8_lossy(url);
        trace!(url = %url_text, "onActionURL");
        let Some(callback) = self.callbacks.on_action_url.function() else {
            return;
        };

        Python::with_gil(|py| {
            if let Err(err) = callback.call1(py, (PyBytes::new(py, url),)) {
                debug!(url = %url_text, "Discarding exception raised by onActionURL callback: {err}");
            }
        })
    }

    fn on_document_load_finished(&self) {
        trace!("onDocumentLoadFinished");
        let Some(callback) = self.callbacks.on_document_load_finished.function() else {
            return;
        };

        Python::with_gil(|py| {
            if let Err(err) = callback.call0(py) {
                debug!("Discarding exception raised by onDocumentLoadFinished callback: {err}");
            }
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlState {
    /// Allocated, engine not bound yet.
    Unattached,
    Live,
}

/// Embedding control extended with the Python callback bridge.
pub struct PyControl {
    /// Only `None` while being dropped.
    control: Option<Box<dyn Control>>,
    bridge: Arc<CallbackBridge>,
    state: ControlState,
}

impl PyControl {
    pub fn new(control: Box<dyn Control>) -> Self {
        Self {
            control: Some(control),
            bridge: Arc::new(CallbackBridge::default()),
            state: ControlState::Unattached,
        }
    }

    /// Registers `callbacks` and binds the engine to `hwnd`. On failure the
    /// control stays unattached and should be dropped.
    pub fn create(
        &mut self,
        py: Python<'_>,
        hwnd: Hwnd,
        initial_url: &U16CStr,
        user_agent: &U16CStr,
        callbacks: CallbackRegistry,
    ) -> Result<(), BrowserError> {
        self.bridge = Arc::new(CallbackBridge::new(callbacks));

        let handler: Arc<dyn ControlHandler> = self.bridge.clone();
        let Some(control) = self.control.as_deref_mut() else {
            return Err(BrowserError::GeckoInit(NsResult::ERROR_NOT_INITIALIZED));
        };
        // Engine startup may wait on callbacks that need the GIL.
        let result = py.allow_threads(move || control.create(hwnd, initial_url, user_agent, handler));
        result
            .into_result()
            .map_err(|_| BrowserError::GeckoInit(result))?;

        self.state = ControlState::Live;
        Ok(())
    }

    pub fn state(&self) -> ControlState {
        self.state
    }

    pub fn hwnd(&self) -> Hwnd {
        self.control
            .as_deref()
            .map_or(Hwnd(0), |control| control.hwnd())
    }

    pub fn control(&self) -> Option<&dyn Control> {
        self.control.as_deref()
    }
}

impl Drop for PyControl {
    fn drop(&mut self) {
        debug!(state = ?self.state, "Destroying Gecko control.");
        let control = self.control.take();
        // The engine joins in-flight callbacks on teardown, and those may be
        // waiting for the GIL.
        Python::with_gil(|py| py.allow_threads(move || drop(control)));
        // `bridge` is released after this, once the engine can no longer call it.
    }
}
