//! Scroll-driven geometry: progress bar, active nav link, timeline

use crate::consts::NAV_SECTION_LEAD_DIVISOR;

/// Page scroll as a percentage in [0, 100]
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, client_height: f64) -> f64 {
    let max_scroll = scroll_height - client_height;
    if max_scroll <= 0.0 {
        return 0.0;
    }
    (scroll_top / max_scroll * 100.0).clamp(0.0, 100.0)
}

/// Layout of a page section
#[derive(Debug, Clone, PartialEq)]
pub struct SectionBox {
    pub id: String,
    pub offset_top: f64,
    pub height: f64,
}

impl SectionBox {
    pub fn new(id: impl Into<String>, offset_top: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            offset_top,
            height,
        }
    }

    /// Scroll position at which this section takes over the nav
    pub fn activation_point(&self) -> f64 {
        self.offset_top - self.height / NAV_SECTION_LEAD_DIVISOR
    }
}

/// Id of the current section: the last one (document order) whose
/// activation point has been scrolled past
pub fn active_section(scroll_y: f64, sections: &[SectionBox]) -> Option<&str> {
    sections
        .iter()
        .filter(|s| scroll_y >= s.activation_point())
        .last()
        .map(|s| s.id.as_str())
}

/// Whether a nav link points at the current section
pub fn link_matches(href: &str, current: Option<&str>) -> bool {
    match current {
        Some(id) if !id.is_empty() => href.contains(id),
        _ => false,
    }
}

/// Timeline fill height as a percentage in [0, 100].
/// Measured from the timeline's top to the middle of the viewport.
pub fn timeline_fill(viewport_height: f64, timeline_top: f64, timeline_height: f64) -> f64 {
    if timeline_height <= 0.0 {
        return 0.0;
    }
    let pct = (viewport_height / 2.0 - timeline_top) / timeline_height * 100.0;
    pct.clamp(0.0, 100.0)
}

/// Timeline item is active while its top is above the trigger line
pub fn item_active(item_top: f64, viewport_height: f64, trigger_ratio: f64) -> bool {
    item_top < viewport_height * trigger_ratio
}
