use crate::dom;
use folio_core::{Debouncer, SurfaceManager, SurfaceSize, Viewport};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resize the surface now and push the new size to the canvas backing store.
pub fn apply_resize(
    canvas: &web::HtmlCanvasElement,
    surface: &RefCell<SurfaceManager>,
    viewport: Viewport,
) -> SurfaceSize {
    let size = surface.borrow_mut().resize(viewport);
    canvas.set_width(size.width as u32);
    canvas.set_height(size.height as u32);
    size
}

/// Window resize handling: signals feed a debouncer, one pending timeout wakes
/// up when the quiet window should have passed.
struct ResizeDebounce {
    canvas: web::HtmlCanvasElement,
    surface: Rc<RefCell<SurfaceManager>>,
    debouncer: RefCell<Debouncer<Viewport>>,
    timeout: Cell<Option<i32>>,
    on_timeout: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl ResizeDebounce {
    fn on_signal(&self, window: &web::Window) {
        self.debouncer
            .borrow_mut()
            .signal(Instant::now(), dom::viewport(window));
        let quiet = self.debouncer.borrow().quiet_window();
        self.arm(window, quiet.as_millis() as i32);
    }

    fn on_timeout(&self) {
        self.timeout.set(None);
        let now = Instant::now();
        let due = self.debouncer.borrow_mut().poll(now);
        if let Some(viewport) = due {
            apply_resize(&self.canvas, &self.surface, viewport);
            return;
        }
        // timers may fire a little early relative to the monotonic clock
        let left = self.debouncer.borrow().remaining(now);
        if let (Some(left), Some(window)) = (left, web::window()) {
            self.arm(&window, left.as_millis() as i32 + 1);
        }
    }

    fn arm(&self, window: &web::Window, delay_ms: i32) {
        if let Some(handle) = self.timeout.take() {
            window.clear_timeout_with_handle(handle);
        }
        if let Some(cb) = self.on_timeout.borrow().as_ref() {
            match window.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                delay_ms,
            ) {
                Ok(handle) => self.timeout.set(Some(handle)),
                Err(e) => log::error!("[resize] setTimeout failed: {:?}", e),
            }
        }
    }
}

pub fn wire_debounced_resize(
    window: &web::Window,
    canvas: &web::HtmlCanvasElement,
    surface: Rc<RefCell<SurfaceManager>>,
) {
    let state = Rc::new(ResizeDebounce {
        canvas: canvas.clone(),
        surface,
        debouncer: RefCell::new(Debouncer::default()),
        timeout: Cell::new(None),
        on_timeout: RefCell::new(None),
    });

    let timeout_state = Rc::downgrade(&state);
    *state.on_timeout.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if let Some(s) = timeout_state.upgrade() {
            s.on_timeout();
        }
    }) as Box<dyn FnMut()>));

    let resize_window = window.clone();
    let resize_closure = Closure::wrap(Box::new(move || {
        state.on_signal(&resize_window);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    resize_closure.forget();
}
