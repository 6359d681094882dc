mod control;
mod disabled_control;
#[cfg(all(feature = "gecko", target_os = "windows"))]
mod gecko;
mod ns_result;
pub mod wide_string;

pub use control::{Control, ControlHandler, Hwnd};
pub use disabled_control::DisabledControl;
#[cfg(all(feature = "gecko", target_os = "windows"))]
pub use gecko::GeckoControl;
pub use ns_result::{NsError, NsResult};

pub use widestring::{U16CStr, U16CString};
