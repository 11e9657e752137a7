use crate::canvas2d::WebCanvas;
use folio_core::{FrameContext, LoopControl, Scene, SurfaceManager, Theme};
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Everything one backdrop frame needs.
pub struct Backdrop {
    pub scene: Scene,
    pub ctx: FrameContext,
    pub canvas: WebCanvas,
    pub surface: Rc<RefCell<SurfaceManager>>,
    pub theme: Rc<Cell<Theme>>,
}

impl Backdrop {
    pub fn frame(&mut self) {
        // both are owned by other handlers; sample them once per tick
        self.ctx.surface = self.surface.borrow().size();
        self.ctx.theme = self.theme.get();
        self.scene.tick(&mut self.ctx, &mut self.canvas);
    }
}

/// requestAnimationFrame loop that only keeps a frame pending while
/// [`LoopControl::is_active`].
pub struct FrameLoop {
    backdrop: RefCell<Backdrop>,
    control: Cell<LoopControl>,
    pending: Cell<Option<i32>>,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl FrameLoop {
    pub fn new(backdrop: Backdrop) -> Rc<Self> {
        let this = Rc::new(Self {
            backdrop: RefCell::new(backdrop),
            control: Cell::new(LoopControl::default()),
            pending: Cell::new(None),
            tick: RefCell::new(None),
        });
        let weak: Weak<Self> = Rc::downgrade(&this);
        *this.tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if let Some(l) = weak.upgrade() {
                l.on_frame();
            }
        }) as Box<dyn FnMut()>));
        this
    }

    pub fn start(&self) {
        self.update_control(LoopControl::start);
    }

    pub fn stop(&self) {
        self.update_control(LoopControl::stop);
    }

    pub fn set_visible(&self, visible: bool) {
        self.update_control(|c| c.set_visible(visible));
    }

    pub fn is_active(&self) -> bool {
        self.control.get().is_active()
    }

    fn update_control(&self, change: impl FnOnce(&mut LoopControl) -> bool) {
        let mut control = self.control.get();
        let changed = change(&mut control);
        self.control.set(control);
        if !changed {
            return;
        }
        if control.is_active() {
            self.request_frame();
        } else {
            self.cancel_frame();
        }
    }

    fn on_frame(&self) {
        self.pending.set(None);
        if !self.is_active() {
            return;
        }
        self.backdrop.borrow_mut().frame();
        self.request_frame();
    }

    fn request_frame(&self) {
        if self.pending.get().is_some() {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
                Ok(handle) => self.pending.set(Some(handle)),
                Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
            }
        }
    }

    fn cancel_frame(&self) {
        if let (Some(handle), Some(window)) = (self.pending.take(), web::window()) {
            _ = window.cancel_animation_frame(handle);
        }
    }
}

/// Pause the loop while the page is hidden and resume when it returns.
pub fn wire_visibility(document: &web::Document, frame_loop: &Rc<FrameLoop>) {
    frame_loop.set_visible(!document.hidden());
    let doc = document.clone();
    let fl = frame_loop.clone();
    let closure = Closure::wrap(Box::new(move || {
        fl.set_visible(!doc.hidden());
    }) as Box<dyn FnMut()>);
    _ = document
        .add_event_listener_with_callback("visibilitychange", closure.as_ref().unchecked_ref());
    closure.forget();
}
