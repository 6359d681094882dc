use std::{
    ffi::{c_char, c_int, c_void, CStr},
    panic::{self, AssertUnwindSafe},
    sync::Arc,
};

use log::error;
use widestring::U16CStr;

use crate::{Control, ControlHandler, Hwnd, NsResult};

#[allow(non_camel_case_types)]
mod sys {
    use std::ffi::{c_char, c_int, c_void};

    #[repr(C)]
    pub struct gecko_control_t {
        _private: [u8; 0],
    }

    /// Copied by `gecko_control_create`. `context` stays owned by the caller
    /// and must outlive the control.
    #[repr(C)]
    pub struct gecko_control_handler_t {
        pub context: *mut c_void,
        pub on_url_load: Option<extern "C" fn(*mut c_void, *const c_char) -> c_int>,
        pub on_action_url: Option<extern "C" fn(*mut c_void, *const c_char)>,
        pub on_document_load_finished: Option<extern "C" fn(*mut c_void)>,
    }

    extern "C" {
        pub fn gecko_control_new() -> *mut gecko_control_t;
        /// Blocks until in-flight handler calls return.
        pub fn gecko_control_delete(control: *mut gecko_control_t);
        pub fn gecko_control_create(
            control: *mut gecko_control_t,
            hwnd: isize,
            initial_url: *const u16,
            user_agent: *const u16,
            handler: *const gecko_control_handler_t,
        ) -> u32;
        pub fn gecko_control_get_hwnd(control: *mut gecko_control_t) -> isize;
        pub fn gecko_control_recompute_size(control: *mut gecko_control_t) -> u32;
        pub fn gecko_control_activate(control: *mut gecko_control_t) -> u32;
        pub fn gecko_control_deactivate(control: *mut gecko_control_t) -> u32;
        pub fn gecko_control_add_element_at_end(
            control: *mut gecko_control_t,
            xml: *const u16,
            id: *const u16,
        ) -> u32;
        pub fn gecko_control_add_element_before(
            control: *mut gecko_control_t,
            xml: *const u16,
            id: *const u16,
        ) -> u32;
        pub fn gecko_control_remove_element(control: *mut gecko_control_t, id: *const u16) -> u32;
        pub fn gecko_control_change_element(
            control: *mut gecko_control_t,
            id: *const u16,
            xml: *const u16,
        ) -> u32;
        pub fn gecko_control_hide_element(control: *mut gecko_control_t, id: *const u16) -> u32;
        pub fn gecko_control_show_element(control: *mut gecko_control_t, id: *const u16) -> u32;
    }
}

/// Native Gecko embedding control reached through its C ABI.
pub struct GeckoControl {
    inner: *mut sys::gecko_control_t,
    handler: Option<Box<HandlerContext>>,
}

// The native control serializes access internally and may be driven from any thread.
unsafe impl Send for GeckoControl {}
unsafe impl Sync for GeckoControl {}

struct HandlerContext(Arc<dyn ControlHandler>);

impl GeckoControl {
    pub fn new() -> Self {
        Self {
            inner: unsafe { sys::gecko_control_new() },
            handler: None,
        }
    }

    fn call(&self, f: impl FnOnce(*mut sys::gecko_control_t) -> u32) -> NsResult {
        if self.inner.is_null() {
            return NsResult::ERROR_NOT_INITIALIZED;
        }
        NsResult(f(self.inner))
    }

    extern "C" fn on_url_load(context: *mut c_void, url: *const c_char) -> c_int {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let handler = unsafe { &*(context as *const HandlerContext) };
            handler.0.on_url_load(bytes_from_raw(url))
        }));

        match result {
            Ok(allow) => allow as c_int,
            Err(_) => {
                error!("onURLLoad handler panicked. Allowing the load.");
                true as c_int
            }
        }
    }

    extern "C" fn on_action_url(context: *mut c_void, url: *const c_char) {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let handler = unsafe { &*(context as *const HandlerContext) };
            handler.0.on_action_url(bytes_from_raw(url));
        }));
        if result.is_err() {
            error!("onActionURL handler panicked.");
        }
    }

    extern "C" fn on_document_load_finished(context: *mut c_void) {
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let handler = unsafe { &*(context as *const HandlerContext) };
            handler.0.on_document_load_finished();
        }));
        if result.is_err() {
            error!("onDocumentLoadFinished handler panicked.");
        }
    }
}

impl Default for GeckoControl {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for GeckoControl {
    fn drop(&mut self) {
        if !self.inner.is_null() {
            unsafe { sys::gecko_control_delete(self.inner) };
        }
        // Handler context is released only after the native control is gone.
        self.handler.take();
    }
}

/// Borrows the engine's NUL-terminated string for the duration of a callback.
fn bytes_from_raw<'a>(text: *const c_char) -> &'a [u8] {
    if text.is_null() {
        return &[];
    }
    unsafe { CStr::from_ptr(text) }.to_bytes()
}

impl Control for GeckoControl {
    fn create(
        &mut self,
        hwnd: Hwnd,
        initial_url: &U16CStr,
        user_agent: &U16CStr,
        handler: Arc<dyn ControlHandler>,
    ) -> NsResult {
        if self.inner.is_null() {
            return NsResult::ERROR_OUT_OF_MEMORY;
        }

        let context = self.handler.insert(Box::new(HandlerContext(handler)));
        let raw_handler = sys::gecko_control_handler_t {
            context: context.as_mut() as *mut HandlerContext as *mut c_void,
            on_url_load: Some(Self::on_url_load),
            on_action_url: Some(Self::on_action_url),
            on_document_load_finished: Some(Self::on_document_load_finished),
        };

        NsResult(unsafe {
            sys::gecko_control_create(
                self.inner,
                hwnd.0,
                initial_url.as_ptr(),
                user_agent.as_ptr(),
                &raw_handler,
            )
        })
    }

    fn hwnd(&self) -> Hwnd {
        if self.inner.is_null() {
            return Hwnd(0);
        }
        Hwnd(unsafe { sys::gecko_control_get_hwnd(self.inner) })
    }

    fn recompute_size(&self) -> NsResult {
        self.call(|inner| unsafe { sys::gecko_control_recompute_size(inner) })
    }

    fn activate(&self) -> NsResult {
        self.call(|inner| unsafe { sys::gecko_control_activate(inner) })
    }

    fn deactivate(&self) -> NsResult {
        self.call(|inner| unsafe { sys::gecko_control_deactivate(inner) })
    }

    fn add_element_at_end(&self, xml: &U16CStr, id: &U16CStr) -> NsResult {
        self.call(|inner| unsafe {
            sys::gecko_control_add_element_at_end(inner, xml.as_ptr(), id.as_ptr())
        })
    }

    fn add_element_before(&self, xml: &U16CStr, id: &U16CStr) -> NsResult {
        self.call(|inner| unsafe {
            sys::gecko_control_add_element_before(inner, xml.as_ptr(), id.as_ptr())
        })
    }

    fn remove_element(&self, id: &U16CStr) -> NsResult {
        self.call(|inner| unsafe { sys::gecko_control_remove_element(inner, id.as_ptr()) })
    }

    fn change_element(&self, id: &U16CStr, xml: &U16CStr) -> NsResult {
        self.call(|inner| unsafe {
            sys::gecko_control_change_element(inner, id.as_ptr(), xml.as_ptr())
        })
    }

    fn hide_element(&self, id: &U16CStr) -> NsResult {
        self.call(|inner| unsafe { sys::gecko_control_hide_element(inner, id.as_ptr()) })
    }

    fn show_element(&self, id: &U16CStr) -> NsResult {
        self.call(|inner| unsafe { sys::gecko_control_show_element(inner, id.as_ptr()) })
    }
}
