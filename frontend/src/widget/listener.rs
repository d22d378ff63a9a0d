use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys::Window;

/// A window event listener that detaches itself when dropped.
pub struct WindowListener<E: FromWasmAbi + 'static> {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut(E)>,
}

impl<E: FromWasmAbi + 'static> WindowListener<E> {
    pub fn new(window: &Window, event: &'static str, handler: impl FnMut(E) + 'static) -> Option<Self> {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(E)>);
        window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .ok()?;
        Some(Self {
            window: window.clone(),
            event,
            callback,
        })
    }
}

impl<E: FromWasmAbi + 'static> Drop for WindowListener<E> {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}
