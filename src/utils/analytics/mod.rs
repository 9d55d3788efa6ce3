use leptos::logging;
use serde::Serialize;

use crate::consts::{EVENT_LINK_CLICK, EVENT_SCROLL_DEPTH};

pub mod interactions;
pub mod scroll_depth;

/// Global analytics state shared through context.
#[derive(Clone)]
pub struct AnalyticsCtx {
    pub visitor_id: String,
}

#[derive(Clone, Serialize)]
pub struct LinkClickProps {
    pub href: String,
    pub text: String,
    pub visitor_id: String,
}

#[derive(Clone, Serialize)]
pub struct ScrollDepthProps {
    pub percent: u32,
    pub max_percent: u32,
    pub visitor_id: String,
}

#[derive(Clone, Debug)]
pub enum PageAnalyticsEvent {
    LinkClick { href: String, text: String },
    ScrollDepth { percent: u32, max_percent: u32 },
}

pub trait AnalyticsProvider {
    fn track_event(&self, event: PageAnalyticsEvent, ctx: &AnalyticsCtx);
}

/// Console-backed provider. A production deployment would swap this for one
/// that ships events to a collector; this site only logs them.
pub struct ConsoleProvider;

impl AnalyticsProvider for ConsoleProvider {
    fn track_event(&self, event: PageAnalyticsEvent, ctx: &AnalyticsCtx) {
        match event {
            PageAnalyticsEvent::LinkClick { href, text } => {
                track_event(
                    EVENT_LINK_CLICK,
                    LinkClickProps {
                        href,
                        text,
                        visitor_id: ctx.visitor_id.clone(),
                    },
                );
            }
            PageAnalyticsEvent::ScrollDepth {
                percent,
                max_percent,
            } => {
                track_event(
                    EVENT_SCROLL_DEPTH,
                    ScrollDepthProps {
                        percent,
                        max_percent,
                        visitor_id: ctx.visitor_id.clone(),
                    },
                );
            }
        }
    }
}

/// Serializes `props` and logs the named event to the console.
fn track_event<T: Serialize>(event_name: &str, props: T) {
    match serde_json::to_string(&props) {
        Ok(payload) => logging::log!("analytics event: {} {}", event_name, payload),
        Err(e) => logging::error!("failed to serialize {} payload: {}", event_name, e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn link_click_payload_field_names() {
        let props = LinkClickProps {
            href: "#projects".into(),
            text: "Projects".into(),
            visitor_id: "v-1".into(),
        };
        let payload = serde_json::to_value(&props).unwrap();
        assert_eq!(payload["href"], "#projects");
        assert_eq!(payload["text"], "Projects");
        assert_eq!(payload["visitor_id"], "v-1");
    }

    #[test]
    fn scroll_depth_payload_field_names() {
        let props = ScrollDepthProps {
            percent: 50,
            max_percent: 63,
            visitor_id: "v-1".into(),
        };
        let payload = serde_json::to_value(&props).unwrap();
        assert_eq!(payload["percent"], 50);
        assert_eq!(payload["max_percent"], 63);
    }
}
