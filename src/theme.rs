use crate::constants::*;
use crate::dom;
use folio_core::theme::THEME_STORAGE_KEY;
use folio_core::Theme;
use std::cell::Cell;
use std::rc::Rc;
use web_sys as web;

fn local_storage() -> Option<web::Storage> {
    web::window().and_then(|w| w.local_storage().ok().flatten())
}

/// Theme persisted by a previous visit, light if none.
pub fn load_stored() -> Theme {
    let stored = local_storage().and_then(|s| s.get_item(THEME_STORAGE_KEY).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

/// Mirror the theme onto the page: body attribute, toggle icons and label.
pub fn apply(document: &web::Document, theme: Theme) {
    if let Some(body) = document.body() {
        if theme.is_dark() {
            _ = body.set_attribute(THEME_ATTRIBUTE, DARK_THEME_VALUE);
        } else {
            _ = body.remove_attribute(THEME_ATTRIBUTE);
        }
    }
    let previous_icon = theme.toggled().icon_class();
    for id in [THEME_TOGGLE_ID, MOBILE_THEME_TOGGLE_ID] {
        let icon = document
            .get_element_by_id(id)
            .and_then(|btn| btn.query_selector("i").ok().flatten());
        if let Some(icon) = icon {
            dom::replace_class(&icon, previous_icon, theme.icon_class());
        }
    }
    let label = document
        .get_element_by_id(MOBILE_THEME_TOGGLE_ID)
        .and_then(|btn| btn.query_selector("span").ok().flatten());
    if let Some(label) = label {
        label.set_text_content(Some(theme.toggle_label()));
    }
}

fn persist(theme: Theme) {
    if let Some(storage) = local_storage() {
        if let Err(e) = storage.set_item(THEME_STORAGE_KEY, theme.storage_value()) {
            log::warn!("[theme] could not persist preference: {:?}", e);
        }
    }
}

/// Initialize from storage and wire both toggle buttons. The returned cell is
/// the flag the backdrop reads every frame.
pub fn wire_theme_toggle(document: &web::Document) -> Rc<Cell<Theme>> {
    let theme = Rc::new(Cell::new(load_stored()));
    if theme.get().is_dark() {
        apply(document, Theme::Dark);
    }
    for id in [THEME_TOGGLE_ID, MOBILE_THEME_TOGGLE_ID] {
        let theme_click = theme.clone();
        let doc = document.clone();
        dom::add_click_listener(document, id, move || {
            let next = theme_click.get().toggled();
            theme_click.set(next);
            apply(&doc, next);
            persist(next);
            log::info!("[theme] switched to {}", next.storage_value());
        });
    }
    theme
}
