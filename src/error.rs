use gecko_control::NsResult;
use pyo3::{
    exceptions::{PyOSError, PyTypeError, PyValueError},
    PyErr,
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BrowserError {
    #[error("{0} must be a function")]
    NotCallable(&'static str),

    #[error("{0} must not contain null characters")]
    InvalidText(String),

    #[error("{0}")]
    Arguments(String),

    #[error("Couldn't instantiate Gecko; nsresult = {0}.")]
    GeckoInit(NsResult),

    #[error("{method} failed; nsresult = {result}.")]
    Control {
        method: &'static str,
        result: NsResult,
    },
}

impl From<BrowserError> for PyErr {
    fn from(err: BrowserError) -> Self {
        let message = err.to_string();
        match err {
            BrowserError::NotCallable(_) | BrowserError::Arguments(_) => {
                PyTypeError::new_err(message)
            }
            BrowserError::InvalidText(_) => PyValueError::new_err(message),
            BrowserError::GeckoInit(_) | BrowserError::Control { .. } => {
                PyOSError::new_err(message)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages() {
        assert_eq!(
            BrowserError::NotCallable("onLoadCallback").to_string(),
            "onLoadCallback must be a function"
        );
        assert_eq!(
            BrowserError::GeckoInit(NsResult(0x8000_4005)).to_string(),
            "Couldn't instantiate Gecko; nsresult = 80004005."
        );
        assert_eq!(
            BrowserError::Control {
                method: "removeElement",
                result: NsResult::ERROR_FAILURE
            }
            .to_string(),
            "removeElement failed; nsresult = 80004005."
        );
    }
}
