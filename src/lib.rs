use pyo3::prelude::*;
use tracing::warn;

pub mod browser;
pub mod callbacks;
pub mod config;
pub mod error;
mod factory;
pub mod logger;
pub mod methods;
pub mod options;
pub mod py_control;

#[cfg(test)]
mod test_utils;

pub use browser::{MozillaBrowser, MozillaBrowserMethod};
pub use factory::{set_control_factory, FactoryAlreadyInstalled};
pub use gecko_control;

#[pymodule]
#[pyo3(name = "MozillaBrowser")]
fn mozilla_browser(m: &Bound<'_, PyModule>) -> PyResult<()> {
    let logger = &config::config().logger;
    if logger.enable {
        if let Err(err) = logger::init_logger(logger) {
            warn!("Logger was not installed: {err}");
        }
    }

    m.add_class::<MozillaBrowser>()?;
    m.add_class::<MozillaBrowserMethod>()?;
    Ok(())
}
