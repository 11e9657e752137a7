//! Pointer and scroll driven page effects: card tilt, progress bar, active
//! navigation link, section reveal and the stats count-up.

use crate::constants::*;
use crate::dom;
use folio_core::constants::{COUNT_UP_INTERVAL_MS, REVEAL_THRESHOLD, STATS_THRESHOLD};
use folio_core::scroll::{self, Section};
use folio_core::tilt::{self, Tilt};
use glam::DVec2;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub fn wire_card_tilt(window: &web::Window, document: &web::Document) {
    if !tilt::tilt_enabled(dom::viewport(window).width) {
        return;
    }
    for card in dom::query_all(document, TILT_CARD_SELECTOR) {
        let card_move = card.clone();
        let on_move = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = card_move.get_bounding_client_rect();
            let pointer = DVec2::new(
                ev.client_x() as f64 - rect.left(),
                ev.client_y() as f64 - rect.top(),
            );
            let size = DVec2::new(rect.width(), rect.height());
            let css = Tilt::from_pointer(pointer, size).to_css();
            _ = card_move.style().set_property("transform", &css);
        }) as Box<dyn FnMut(_)>);
        _ = card.add_event_listener_with_callback("mousemove", on_move.as_ref().unchecked_ref());
        on_move.forget();

        let card_leave = card.clone();
        let on_leave = Closure::wrap(Box::new(move || {
            _ = card_leave
                .style()
                .set_property("transform", &tilt::resting_transform());
        }) as Box<dyn FnMut()>);
        _ = card.add_event_listener_with_callback("mouseleave", on_leave.as_ref().unchecked_ref());
        on_leave.forget();
    }
}

fn update_progress_bar(document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let body_top = document.body().map(|b| b.scroll_top()).unwrap_or(0);
    let scroll_top = if body_top != 0 { body_top } else { root.scroll_top() };
    let percent = scroll::progress_percent(
        scroll_top as f64,
        root.scroll_height() as f64,
        root.client_height() as f64,
    );
    if let Some(bar) = dom::html_element_by_id(document, PROGRESS_BAR_ID) {
        _ = bar.style().set_property("width", &format!("{percent}%"));
    }
}

fn update_active_nav(window: &web::Window, document: &web::Document) {
    let page_y = window.page_y_offset().unwrap_or(0.0);
    let sections = dom::query_all(document, NAV_SECTION_SELECTOR)
        .into_iter()
        .map(|el| Section::new(el.id(), el.offset_top() as f64))
        .collect::<Vec<_>>();
    let current = scroll::current_section(&sections, page_y);
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let href = link.get_attribute("href").unwrap_or_default();
        let classes = link.class_list();
        if scroll::link_is_active(&href, current) {
            _ = classes.add_1(ACTIVE_CLASS);
        } else {
            _ = classes.remove_1(ACTIVE_CLASS);
        }
    }
}

pub fn wire_scroll_effects(window: &web::Window, document: &web::Document) {
    let win = window.clone();
    let doc = document.clone();
    let on_scroll = Closure::wrap(Box::new(move || {
        update_progress_bar(&doc);
        update_active_nav(&win, &doc);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref());
    on_scroll.forget();
}

/// IntersectionObserver calling `on_entries` with the typed entries of each
/// batch. `None` when the browser refuses to build one.
fn intersection_observer(
    threshold: f64,
    mut on_entries: impl FnMut(&[web::IntersectionObserverEntry], &web::IntersectionObserver) + 'static,
) -> Option<web::IntersectionObserver> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            let entries = entries
                .iter()
                .filter_map(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
                .collect::<Vec<_>>();
            on_entries(&entries, &observer);
        },
    )
        as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);
    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init);
    callback.forget();
    match observer {
        Ok(o) => Some(o),
        Err(e) => {
            log::warn!("[effects] IntersectionObserver unavailable: {:?}", e);
            None
        }
    }
}

/// Fade sections in as they scroll into view. Once shown they stay shown.
pub fn wire_scroll_reveal(document: &web::Document) {
    let Some(observer) = intersection_observer(REVEAL_THRESHOLD, |entries, _| {
        for entry in entries.iter().filter(|e| e.is_intersecting()) {
            _ = entry.target().class_list().add_1(VISIBLE_CLASS);
        }
    }) else {
        return;
    };
    for section in dom::query_all(document, REVEAL_SECTION_SELECTOR) {
        observer.observe(&section);
    }
}

/// One `.count` element ticking toward its `data-target`.
struct CountUp {
    el: web::HtmlElement,
    target: f64,
    tick: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl CountUp {
    fn start(el: web::HtmlElement) {
        let target = el
            .get_attribute(COUNTER_TARGET_ATTRIBUTE)
            .and_then(|v| v.trim().parse::<f64>().ok())
            .unwrap_or(0.0);
        let counter = Rc::new(Self {
            el,
            target,
            tick: RefCell::new(None),
        });
        let tick_counter = counter.clone();
        *counter.tick.borrow_mut() = Some(Closure::wrap(
            Box::new(move || tick_counter.step()) as Box<dyn FnMut()>
        ));
        counter.step();
    }

    fn step(&self) {
        let current = self
            .el
            .text_content()
            .and_then(|t| t.trim().parse::<f64>().ok())
            .unwrap_or(0.0);
        let next = scroll::next_count(current, self.target);
        self.el.set_text_content(Some(&next.to_string()));
        if scroll::count_done(current, self.target) {
            return;
        }
        let Some(window) = web::window() else {
            return;
        };
        if let Some(cb) = self.tick.borrow().as_ref() {
            _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
                cb.as_ref().unchecked_ref(),
                COUNT_UP_INTERVAL_MS,
            );
        }
    }
}

/// Count every stat up from zero the first time the stats strip is half in
/// view, then stop watching it.
pub fn wire_stats_counter(document: &web::Document) {
    let Ok(Some(section)) = document.query_selector(STATS_SECTION_SELECTOR) else {
        return;
    };
    let counters = dom::query_all(document, COUNTER_SELECTOR);
    let started = Cell::new(false);
    let watched = section.clone();
    let Some(observer) = intersection_observer(STATS_THRESHOLD, move |entries, observer| {
        if started.get() || !entries.iter().any(|e| e.is_intersecting()) {
            return;
        }
        started.set(true);
        for counter in &counters {
            CountUp::start(counter.clone());
        }
        observer.unobserve(&watched);
    }) else {
        return;
    };
    observer.observe(&section);
}
