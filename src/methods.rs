use gecko_control::{wide_string::to_engine_string, Control, NsResult, U16CString};
use pyo3::{
    prelude::*,
    types::{PyDict, PyTuple},
};

use crate::error::BrowserError;

/// Forward from a scripted method name onto the matching `Control` call.
pub struct DomMethod {
    pub name: &'static str,
    pub params: &'static [&'static str],
    forward: fn(&dyn Control, &[U16CString]) -> NsResult,
}

/// Every method a `MozillaBrowser` exposes to Python.
pub static DOM_METHODS: &[DomMethod] = &[
    DomMethod {
        name: "recomputeSize",
        params: &[],
        forward: |control, _| control.recompute_size(),
    },
    DomMethod {
        name: "activate",
        params: &[],
        forward: |control, _| control.activate(),
    },
    DomMethod {
        name: "deactivate",
        params: &[],
        forward: |control, _| control.deactivate(),
    },
    DomMethod {
        name: "addElementAtEnd",
        params: &["xml", "id"],
        forward: |control, args| control.add_element_at_end(&args[0], &args[1]),
    },
    DomMethod {
        name: "addElementBefore",
        params: &["xml", "id"],
        forward: |control, args| control.add_element_before(&args[0], &args[1]),
    },
    DomMethod {
        name: "removeElement",
        params: &["id"],
        forward: |control, args| control.remove_element(&args[0]),
    },
    DomMethod {
        name: "changeElement",
        params: &["id", "xml"],
        forward: |control, args| control.change_element(&args[0], &args[1]),
    },
    DomMethod {
        name: "hideElement",
        params: &["id"],
        forward: |control, args| control.hide_element(&args[0]),
    },
    DomMethod {
        name: "showElement",
        params: &["id"],
        forward: |control, args| control.show_element(&args[0]),
    },
];

pub fn find_method(name: &str) -> Option<&'static DomMethod> {
    DOM_METHODS.iter().find(|method| method.name == name)
}

impl DomMethod {
    /// Matches positional and keyword arguments against `params` and encodes
    /// each one for the engine.
    pub fn parse_args(
        &self,
        args: &Bound<'_, PyTuple>,
        kwargs: Option<&Bound<'_, PyDict>>,
    ) -> PyResult<Vec<U16CString>> {
        if args.len() > self.params.len() {
            return Err(BrowserError::Arguments(format!(
                "{}() takes {} positional arguments but {} were given",
                self.name,
                self.params.len(),
                args.len()
            ))
            .into());
        }

        let mut values: Vec<Option<Bound<'_, PyAny>>> = vec![None; self.params.len()];
        for (value, arg) in values.iter_mut().zip(args.iter()) {
            *value = Some(arg);
        }

        if let Some(kwargs) = kwargs {
            for (key, value) in kwargs.iter() {
                let key: String = key.extract()?;
                let Some(index) = self.params.iter().position(|param| *param == key) else {
                    return Err(BrowserError::Arguments(format!(
                        "{}() got an unexpected keyword argument '{key}'",
                        self.name
                    ))
                    .into());
                };
                if values[index].is_some() {
                    return Err(BrowserError::Arguments(format!(
                        "{}() got multiple values for argument '{key}'",
                        self.name
                    ))
                    .into());
                }
                values[index] = Some(value);
            }
        }

        values
            .into_iter()
            .zip(self.params)
            .map(|(value, param)| {
                let value = value.ok_or_else(|| {
                    BrowserError::Arguments(format!(
                        "{}() missing required argument '{param}'",
                        self.name
                    ))
                })?;
                let text: String = value.extract().map_err(|_| {
                    BrowserError::Arguments(format!(
                        "{}() argument '{param}' must be str",
                        self.name
                    ))
                })?;
                let text = to_engine_string(&text).map_err(|_| {
                    BrowserError::InvalidText(format!("{}() argument '{param}'", self.name))
                })?;
                Ok(text)
            })
            .collect()
    }

    pub fn forward(&self, control: &dyn Control, args: &[U16CString]) -> Result<(), BrowserError> {
        (self.forward)(control, args)
            .into_result()
            .map_err(|err| BrowserError::Control {
                method: self.name,
                result: err.0,
            })
    }
}
