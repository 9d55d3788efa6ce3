use leptos::html;
use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::consts::{HEADER_SCROLLED_THRESHOLD_PX, NAV_ACTIVE_OFFSET_PX};

#[derive(Clone)]
pub struct SectionEntry {
    pub id: &'static str,
    pub node: NodeRef<html::Section>,
}

/// Window scroll position plus the registry of page sections, shared through
/// context so the nav bar and the sections themselves agree on what is
/// currently on screen.
#[derive(Clone, Copy)]
pub struct ScrollState {
    pub scroll_y: Signal<f64>,
    sections: RwSignal<Vec<SectionEntry>>,
}

impl ScrollState {
    pub fn new() -> Self {
        let (_, scroll_y) = use_window_scroll();
        Self {
            scroll_y,
            sections: RwSignal::new(Vec::new()),
        }
    }

    pub fn get() -> Self {
        expect_context()
    }

    /// Sections register in document order; the order decides which one wins
    /// when several tops are above the activation threshold.
    pub fn register_section(&self, id: &'static str, node: NodeRef<html::Section>) {
        self.sections.update(|s| s.push(SectionEntry { id, node }));
    }

    /// Id of the section the viewport is currently in, if any.
    pub fn active_section(&self) -> Signal<Option<&'static str>> {
        let sections = self.sections;
        let scroll_y = self.scroll_y;
        Signal::derive(move || {
            let y = scroll_y.get();
            let tops: Vec<(&'static str, f64)> = sections.with(|entries| {
                entries
                    .iter()
                    .filter_map(|entry| {
                        let el = entry.node.get()?;
                        Some((entry.id, el.offset_top() as f64))
                    })
                    .collect()
            });
            active_section_id(y, &tops)
        })
    }

    pub fn header_scrolled(&self) -> Signal<bool> {
        let scroll_y = self.scroll_y;
        Signal::derive(move || is_header_scrolled(scroll_y.get()))
    }
}

impl Default for ScrollState {
    fn default() -> Self {
        Self::new()
    }
}

/// The active section is the last one, in registration order, whose top
/// minus the activation offset has been scrolled past.
pub fn active_section_id(scroll_y: f64, tops: &[(&'static str, f64)]) -> Option<&'static str> {
    let mut current = None;
    for (id, top) in tops {
        if scroll_y >= top - NAV_ACTIVE_OFFSET_PX {
            current = Some(*id);
        }
    }
    current
}

pub fn is_header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SCROLLED_THRESHOLD_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPS: &[(&str, f64)] = &[("home", 0.0), ("about", 600.0), ("projects", 1400.0)];

    #[test]
    fn no_sections_means_no_active_link() {
        assert_eq!(active_section_id(500.0, &[]), None);
    }

    #[test]
    fn first_section_active_from_the_top() {
        assert_eq!(active_section_id(0.0, TOPS), Some("home"));
    }

    #[test]
    fn section_activates_at_offset_before_its_top() {
        assert_eq!(active_section_id(399.0, TOPS), Some("home"));
        assert_eq!(active_section_id(400.0, TOPS), Some("about"));
    }

    #[test]
    fn last_crossed_section_wins() {
        assert_eq!(active_section_id(5000.0, TOPS), Some("projects"));
    }

    #[test]
    fn none_above_first_threshold() {
        let tops = &[("about", 600.0), ("projects", 1400.0)];
        assert_eq!(active_section_id(0.0, tops), None);
    }

    #[test]
    fn header_blurs_strictly_past_threshold() {
        assert!(!is_header_scrolled(100.0));
        assert!(is_header_scrolled(100.5));
        assert!(!is_header_scrolled(0.0));
    }
}
