//! Scroll-driven page math: the progress bar, the active nav section and the
//! stats count-up.

use crate::constants::{COUNT_UP_STEPS, NAV_SECTION_LEAD_PX};
use std::cmp::Ordering;

/// How far down the page the reader is, in percent. A page that cannot scroll
/// reports zero.
pub fn progress_percent(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let scrollable = scroll_height - client_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

/// A page section by id and its offset from the document top.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub offset_top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, offset_top: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
        }
    }
}

/// The last section, in document order, whose top is at most
/// `NAV_SECTION_LEAD_PX` below the current scroll position.
pub fn current_section(sections: &[Section], page_y: f64) -> Option<&str> {
    sections
        .iter()
        .rev()
        .find(|s| page_y >= s.offset_top - NAV_SECTION_LEAD_PX)
        .map(|s| s.id.as_str())
}

/// Whether a nav link pointing at `href` should be highlighted.
pub fn link_is_active(href: &str, current: Option<&str>) -> bool {
    match current {
        Some(id) if !id.is_empty() => href.contains(id),
        _ => false,
    }
}

/// Next value shown by a count-up counter. Below the target it climbs by
/// `target / COUNT_UP_STEPS`, rounded up to a whole number; once the current
/// value reaches or passes the target it snaps to the target.
pub fn next_count(current: f64, target: f64) -> f64 {
    if count_done(current, target) {
        return target;
    }
    let next = (current + target / COUNT_UP_STEPS).ceil();
    // a non-positive target cannot make progress by stepping
    if next <= current {
        target
    } else {
        next
    }
}

/// Whether a counter showing `current` has finished counting.
pub fn count_done(current: f64, target: f64) -> bool {
    // NaN on either side counts as done
    current.partial_cmp(&target) != Some(Ordering::Less)
}
