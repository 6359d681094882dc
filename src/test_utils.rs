use std::{
    io,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc, Mutex,
    },
};

use gecko_control::{Control, ControlHandler, Hwnd, NsResult, U16CStr};
use tracing_subscriber::fmt::MakeWriter;

/// Records everything the bridge asks of the engine.
#[derive(Default)]
pub struct FakeControlState {
    pub create_result: Mutex<Option<NsResult>>,
    pub dom_result: Mutex<Option<NsResult>>,
    pub hwnd: Mutex<Option<Hwnd>>,
    pub initial_url: Mutex<Option<String>>,
    pub user_agent: Mutex<Option<String>>,
    pub handler: Mutex<Option<Arc<dyn ControlHandler>>>,
    pub calls: Mutex<Vec<(&'static str, Vec<String>)>>,
    pub dropped: AtomicBool,
}

impl FakeControlState {
    pub fn failing_create(result: NsResult) -> Arc<Self> {
        let state = Arc::new(Self::default());
        *state.create_result.lock().unwrap() = Some(result);
        state
    }

    pub fn failing_dom(result: NsResult) -> Arc<Self> {
        let state = Arc::new(Self::default());
        *state.dom_result.lock().unwrap() = Some(result);
        state
    }

    pub fn handler(&self) -> Arc<dyn ControlHandler> {
        self.handler
            .lock()
            .unwrap()
            .clone()
            .expect("control was not created")
    }

    pub fn calls(&self) -> Vec<(&'static str, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }

    pub fn is_dropped(&self) -> bool {
        self.dropped.load(Ordering::SeqCst)
    }
}

pub struct FakeControl {
    state: Arc<FakeControlState>,
}

impl FakeControl {
    pub fn new(state: Arc<FakeControlState>) -> Box<Self> {
        Box::new(Self { state })
    }

    fn record(&self, method: &'static str, args: &[&U16CStr]) -> NsResult {
        let args = args.iter().map(|arg| arg.to_string_lossy()).collect();
        self.state.calls.lock().unwrap().push((method, args));
        self.state.dom_result.lock().unwrap().unwrap_or(NsResult::OK)
    }
}

impl Drop for FakeControl {
    fn drop(&mut self) {
        self.state.handler.lock().unwrap().take();
        self.state.dropped.store(true, Ordering::SeqCst);
    }
}

impl Control for FakeControl {
    fn create(
        &mut self,
        hwnd: Hwnd,
        initial_url: &U16CStr,
        user_agent: &U16CStr,
        handler: Arc<dyn ControlHandler>,
    ) -> NsResult {
        *self.state.hwnd.lock().unwrap() = Some(hwnd);
        *self.state.initial_url.lock().unwrap() = Some(initial_url.to_string_lossy());
        *self.state.user_agent.lock().unwrap() = Some(user_agent.to_string_lossy());
        *self.state.handler.lock().unwrap() = Some(handler);
        self.state.create_result.lock().unwrap().unwrap_or(NsResult::OK)
    }

    fn hwnd(&self) -> Hwnd {
        self.state.hwnd.lock().unwrap().unwrap_or(Hwnd(0))
    }

    fn recompute_size(&self) -> NsResult {
        self.record("recomputeSize", &[])
    }

    fn activate(&self) -> NsResult {
        self.record("activate", &[])
    }

    fn deactivate(&self) -> NsResult {
        self.record("deactivate", &[])
    }

    fn add_element_at_end(&self, xml: &U16CStr, id: &U16CStr) -> NsResult {
        self.record("addElementAtEnd", &[xml, id])
    }

    fn add_element_before(&self, xml: &U16CStr, id: &U16CStr) -> NsResult {
        self.record("addElementBefore", &[xml, id])
    }

    fn remove_element(&self, id: &U16CStr) -> NsResult {
        self.record("removeElement", &[id])
    }

    fn change_element(&self, id: &U16CStr, xml: &U16CStr) -> NsResult {
        self.record("changeElement", &[id, xml])
    }

    fn hide_element(&self, id: &U16CStr) -> NsResult {
        self.record("hideElement", &[id])
    }

    fn show_element(&self, id: &U16CStr) -> NsResult {
        self.record("showElement", &[id])
    }
}

/// In-memory sink for log lines emitted while a test runs.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    /// Runs `f` with a subscriber that writes into this buffer.
    pub fn capture<T>(&self, f: impl FnOnce() -> T) -> T {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::TRACE)
            .finish();
        tracing::subscriber::with_default(subscriber, f)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
