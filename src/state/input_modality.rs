use leptos::prelude::*;
use leptos::{ev, logging};
use leptos_use::{use_document, use_event_listener};

use crate::consts::KEYBOARD_NAV_CLASS;

/// Tracks whether the visitor is navigating with the keyboard, so focus
/// outlines only show up for keyboard users.
#[derive(Clone, Copy, Default)]
pub struct InputModality {
    pub keyboard: RwSignal<bool>,
}

impl InputModality {
    pub fn get() -> Self {
        expect_context()
    }

    /// Wires the Tab/mousedown listeners and mirrors the state onto the
    /// body class the stylesheet keys focus outlines on.
    pub fn attach(self) {
        _ = use_event_listener(use_document(), ev::keydown, move |evt| {
            if evt.key() == "Tab" {
                self.keyboard.set(true);
            }
        });
        _ = use_event_listener(use_document(), ev::mousedown, move |_| {
            self.keyboard.set(false);
        });

        Effect::new(move |_| {
            let enabled = self.keyboard.get();
            let Some(body) = document().body() else {
                return;
            };
            let res = if enabled {
                body.class_list().add_1(KEYBOARD_NAV_CLASS)
            } else {
                body.class_list().remove_1(KEYBOARD_NAV_CLASS)
            };
            if let Err(e) = res {
                logging::warn!("failed to toggle {}: {:?}", KEYBOARD_NAV_CLASS, e);
            }
        });
    }
}
