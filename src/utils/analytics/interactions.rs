use leptos::prelude::*;
use leptos::{ev, logging};
use leptos_use::{use_document, use_event_listener};
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

use super::scroll_depth::{scroll_depth_percent, DepthGauge};
use super::{AnalyticsCtx, AnalyticsProvider, ConsoleProvider, PageAnalyticsEvent};
use crate::state::scroll_state::ScrollState;

/// Wires the page-wide interaction tracking: one document-level click
/// listener for anchor clicks, and a scroll listener reporting 25% depth
/// milestones. Call once from the app root.
pub fn track_page_interactions(ctx: AnalyticsCtx) {
    attach_link_click_tracking(ctx.clone());
    attach_scroll_depth_tracking(ctx);
}

fn attach_link_click_tracking(ctx: AnalyticsCtx) {
    _ = use_event_listener(use_document(), ev::click, move |evt| {
        let Some(target) = evt.target() else {
            return;
        };
        let Ok(anchor) = target.dyn_into::<HtmlAnchorElement>() else {
            return;
        };
        ConsoleProvider.track_event(
            PageAnalyticsEvent::LinkClick {
                href: anchor.href(),
                text: anchor.text_content().unwrap_or_default().trim().to_string(),
            },
            &ctx,
        );
    });
}

fn attach_scroll_depth_tracking(ctx: AnalyticsCtx) {
    let scroll_y = ScrollState::get().scroll_y;
    let gauge = StoredValue::new(DepthGauge::default());

    Effect::new(move |_| {
        let y = scroll_y.get();
        let Some(percent) = current_scroll_percent(y) else {
            return;
        };
        let crossed = gauge
            .try_update_value(|g| g.observe(percent))
            .unwrap_or_default();
        if crossed.is_empty() {
            return;
        }
        let max_percent = gauge.with_value(|g| g.max_percent());
        for milestone in crossed {
            ConsoleProvider.track_event(
                PageAnalyticsEvent::ScrollDepth {
                    percent: milestone,
                    max_percent,
                },
                &ctx,
            );
        }
    });
}

/// Reads the document and viewport heights needed to turn a scroll offset
/// into a depth percentage. `None` if the body is missing or the page does
/// not scroll.
fn current_scroll_percent(scroll_y: f64) -> Option<u32> {
    let body = document().body();
    let Some(body) = body else {
        logging::warn!("document body unavailable for scroll depth tracking");
        return None;
    };
    let viewport_height = window().inner_height().ok()?.as_f64()?;
    scroll_depth_percent(scroll_y, body.scroll_height() as f64, viewport_height)
}
