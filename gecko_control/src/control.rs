use std::{fmt, sync::Arc};

use widestring::U16CStr;

use crate::NsResult;

/// Native window handle the engine renders into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(transparent)]
pub struct Hwnd(pub isize);

impl fmt::Display for Hwnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Receives engine events. Methods may be called from any engine thread.
///
/// Defaults permit every load and ignore the notifications.
pub trait ControlHandler: Send + Sync {
    /// Called before `url` is loaded. Returning `false` cancels the load.
    /// `url` is the engine's narrow string, passed through undecoded.
    fn on_url_load(&self, _url: &[u8]) -> bool {
        true
    }

    /// Called when an action (non navigational) link is activated.
    fn on_action_url(&self, _url: &[u8]) {}

    fn on_document_load_finished(&self) {}
}

/// Embedding control that owns the engine, its window and the document.
///
/// Dropping a control tears the engine down. Implementations must not return
/// from `drop` while a `ControlHandler` call is still running, and must drop
/// their handler before returning.
pub trait Control: Send + Sync {
    /// Binds the engine to `hwnd` and starts loading `initial_url`.
    /// Engine events are delivered to `handler` from then on.
    fn create(
        &mut self,
        hwnd: Hwnd,
        initial_url: &U16CStr,
        user_agent: &U16CStr,
        handler: Arc<dyn ControlHandler>,
    ) -> NsResult;

    fn hwnd(&self) -> Hwnd;

    /// Resizes the rendering surface to the current window size.
    fn recompute_size(&self) -> NsResult;
    fn activate(&self) -> NsResult;
    fn deactivate(&self) -> NsResult;

    /// Appends `xml` as the last child of the element `id`.
    fn add_element_at_end(&self, xml: &U16CStr, id: &U16CStr) -> NsResult;
    /// Inserts `xml` as a sibling right before the element `id`.
    fn add_element_before(&self, xml: &U16CStr, id: &U16CStr) -> NsResult;
    fn remove_element(&self, id: &U16CStr) -> NsResult;
    /// Replaces the element `id` with `xml`.
    fn change_element(&self, id: &U16CStr, xml: &U16CStr) -> NsResult;
    fn hide_element(&self, id: &U16CStr) -> NsResult;
    fn show_element(&self, id: &U16CStr) -> NsResult;
}
