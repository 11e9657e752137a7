#![cfg(target_arch = "wasm32")]
use folio_core::{FrameContext, Scene, SceneConfig, SurfaceManager};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod canvas2d;
mod constants;
mod dom;
mod effects;
mod frame;
mod resize;
mod theme;
mod ui;

pub use ui::{toggle_mobile_menu, toggle_popup};

thread_local! {
    static BACKDROP: RefCell<Option<Rc<frame::FrameLoop>>> = const { RefCell::new(None) };
}

/// Host control over the backdrop animation. Stopping cancels the pending
/// frame; starting resumes it if the page is visible.
#[wasm_bindgen]
pub fn set_backdrop_running(running: bool) {
    BACKDROP.with(|slot| {
        if let Some(frame_loop) = slot.borrow().as_ref() {
            if running {
                frame_loop.start();
            } else {
                frame_loop.stop();
            }
        }
    });
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    ui::set_copyright_year(&document);

    let theme = theme::wire_theme_toggle(&document);
    effects::wire_card_tilt(&window, &document);
    effects::wire_scroll_effects(&window, &document);
    effects::wire_scroll_reveal(&document);
    effects::wire_stats_counter(&document);

    let canvas_el = document
        .get_element_by_id(constants::BACKDROP_CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", constants::BACKDROP_CANVAS_ID))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Surface is sized before any particle spawns so they start in bounds
    let surface = Rc::new(RefCell::new(SurfaceManager::default()));
    let bounds = resize::apply_resize(&canvas, &surface, dom::viewport(&window));
    resize::wire_debounced_resize(&window, &canvas, surface.clone());

    let config = SceneConfig {
        seed: (js_sys::Math::random() * u32::MAX as f64) as u64,
        ..SceneConfig::default()
    };
    let scene = Scene::new(&config, bounds);
    log::info!(
        "[backdrop] surface={:.0}x{:.0} stars={} blossoms={} theme={}",
        bounds.width,
        bounds.height,
        scene.stars.len(),
        scene.blossoms.len(),
        theme.get().storage_value()
    );

    let backdrop = frame::Backdrop {
        scene,
        ctx: FrameContext::new(bounds, theme.get()),
        canvas: canvas2d::WebCanvas::from_element(&canvas)?,
        surface,
        theme,
    };
    let frame_loop = frame::FrameLoop::new(backdrop);
    frame::wire_visibility(&document, &frame_loop);
    frame_loop.start();
    BACKDROP.with(|slot| *slot.borrow_mut() = Some(frame_loop));

    Ok(())
}
