use gecko_control::{Control, NsResult};
use pyo3::{
    exceptions::PyAttributeError,
    prelude::*,
    types::{PyDict, PyTuple},
};
use tracing::{debug, error};

use crate::{
    error::BrowserError,
    factory::new_control,
    methods::{find_method, DomMethod, DOM_METHODS},
    options::BrowserOptions,
    py_control::PyControl,
};

/// Gecko browser rendering into an existing native window.
#[pyclass(name = "MozillaBrowser", module = "MozillaBrowser", frozen)]
pub struct MozillaBrowser {
    control: PyControl,
}

impl MozillaBrowser {
    /// Binds `control` to the window described by `options`. On failure the
    /// control is destroyed and every registered callable released.
    pub fn create(
        py: Python<'_>,
        control: Box<dyn Control>,
        options: BrowserOptions,
    ) -> Result<Self, BrowserError> {
        debug!(hwnd = %options.hwnd, "Creating Gecko control.");
        let mut control = PyControl::new(control);
        let result = control.create(
            py,
            options.hwnd,
            &options.initial_url,
            &options.user_agent,
            options.callbacks,
        );
        if let Err(err) = result {
            error!(hwnd = %options.hwnd, "{err}");
            return Err(err);
        }

        Ok(Self { control })
    }
}

#[pymethods]
impl MozillaBrowser {
    #[new]
    #[pyo3(signature = (
        hwnd,
        initialURL = None,
        userAgent = None,
        onLoadCallback = None,
        onActionCallback = None,
        onDocumentLoadFinishedCallback = None
    ))]
    #[allow(non_snake_case)]
    fn py_new(
        py: Python<'_>,
        hwnd: isize,
        initialURL: Option<String>,
        userAgent: Option<String>,
        onLoadCallback: Option<Bound<'_, PyAny>>,
        onActionCallback: Option<Bound<'_, PyAny>>,
        onDocumentLoadFinishedCallback: Option<Bound<'_, PyAny>>,
    ) -> PyResult<Self> {
        let options = BrowserOptions::new(
            hwnd,
            initialURL.as_deref(),
            userAgent.as_deref(),
            onLoadCallback.as_ref(),
            onActionCallback.as_ref(),
            onDocumentLoadFinishedCallback.as_ref(),
        )?;

        Ok(Self::create(py, new_control(), options)?)
    }

    fn __getattr__(slf: &Bound<'_, Self>, name: &str) -> PyResult<MozillaBrowserMethod> {
        let method = find_method(name).ok_or_else(|| {
            PyAttributeError::new_err(format!(
                "'MozillaBrowser' object has no attribute '{name}'"
            ))
        })?;

        Ok(MozillaBrowserMethod {
            browser: slf.clone().unbind(),
            method,
        })
    }

    /// Default attributes plus the DOM methods served by `__getattr__`.
    fn __dir__(slf: &Bound<'_, Self>) -> PyResult<Vec<String>> {
        let object = slf.py().import("builtins")?.getattr("object")?;
        let mut names: Vec<String> = object.call_method1("__dir__", (slf,))?.extract()?;
        names.extend(DOM_METHODS.iter().map(|method| method.name.to_string()));
        Ok(names)
    }

    fn __repr__(slf: &Bound<'_, Self>) -> String {
        format!(
            "<MozillaBrowser {:p} on HWND {}>",
            slf.as_ptr(),
            slf.get().control.hwnd()
        )
    }
}

impl Drop for MozillaBrowser {
    fn drop(&mut self) {
        debug!("Note: MozillaBrowser dropped.");
    }
}

/// `MozillaBrowser` method bound to its instance.
#[pyclass(name = "MozillaBrowserMethod", module = "MozillaBrowser", frozen)]
pub struct MozillaBrowserMethod {
    browser: Py<MozillaBrowser>,
    method: &'static DomMethod,
}

#[pymethods]
impl MozillaBrowserMethod {
    #[pyo3(signature = (*args, **kwargs))]
    fn __call__(
        &self,
        py: Python<'_>,
        args: &Bound<'_, PyTuple>,
        kwargs: Option<&Bound<'_, PyDict>>,
    ) -> PyResult<()> {
        let args = self.method.parse_args(args, kwargs)?;
        let method = self.method;
        let control = self.browser.get().control.control().ok_or(BrowserError::Control {
            method: method.name,
            result: NsResult::ERROR_NOT_INITIALIZED,
        })?;

        py.allow_threads(|| method.forward(control, &args))?;
        Ok(())
    }

    fn __repr__(&self) -> String {
        format!(
            "<built-in method {} of MozillaBrowser object at {:p}>",
            self.method.name,
            self.browser.as_ptr()
        )
    }
}
