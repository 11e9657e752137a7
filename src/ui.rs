use crate::constants::*;
use crate::dom;
use wasm_bindgen::prelude::*;
use web_sys as web;

/// Show or hide a popup overlay by element id.
#[wasm_bindgen]
pub fn toggle_popup(id: &str) {
    let Some(popup) = dom::window_document().and_then(|d| dom::html_element_by_id(&d, id)) else {
        log::warn!("[ui] no popup #{id}");
        return;
    };
    let style = popup.style();
    let shown = style.get_property_value("display").unwrap_or_default() == POPUP_SHOWN_DISPLAY;
    let next = if shown {
        POPUP_HIDDEN_DISPLAY
    } else {
        POPUP_SHOWN_DISPLAY
    };
    _ = style.set_property("display", next);
}

/// Open or close the mobile navigation drawer and swap the burger icon.
#[wasm_bindgen]
pub fn toggle_mobile_menu() {
    let Some(document) = dom::window_document() else {
        return;
    };
    let Some(menu) = document.get_element_by_id(MOBILE_MENU_ID) else {
        return;
    };
    let opening = !menu.class_list().contains(ACTIVE_CLASS);
    _ = menu.class_list().toggle(ACTIVE_CLASS);
    if let Ok(Some(icon)) = document.query_selector(BURGER_ICON_SELECTOR) {
        if opening {
            dom::replace_class(&icon, MENU_CLOSED_ICON, MENU_OPEN_ICON);
        } else {
            dom::replace_class(&icon, MENU_OPEN_ICON, MENU_CLOSED_ICON);
        }
    }
}

pub fn set_copyright_year(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(COPYRIGHT_YEAR_ID) {
        let year = js_sys::Date::new_0().get_full_year();
        el.set_text_content(Some(&year.to_string()));
    }
}
