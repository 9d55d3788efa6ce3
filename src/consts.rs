use serde::Serialize;

/// Offset subtracted from each section's top when deciding the active nav link
pub const NAV_ACTIVE_OFFSET_PX: f64 = 200.0;

/// Scroll depth past which the header swaps to its blurred background
pub const HEADER_SCROLLED_THRESHOLD_PX: f64 = 100.0;

/// Delay before the page fades in after mount
pub const PAGE_FADE_IN_DELAY_MS: f64 = 100.0;

/// How long a project card stays pressed after a click
pub const CARD_PRESS_RESET_MS: f64 = 150.0;

/// Visibility ratio at which a section counts as on screen
pub const REVEAL_VISIBILITY_THRESHOLD: f64 = 0.1;

/// Bottom inset on the reveal observer's root, so sections reveal slightly late
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Step between reported scroll depth milestones
pub const SCROLL_DEPTH_STEP_PERCENT: u32 = 25;

/// Body class enabling visible focus outlines
pub const KEYBOARD_NAV_CLASS: &str = "keyboard-navigation";

/// Local storage key for the anonymous visitor id
pub const VISITOR_ID_STORE: &str = "portfolio-visitor-id";

pub const EVENT_LINK_CLICK: &str = "link_click";
pub const EVENT_SCROLL_DEPTH: &str = "scroll_depth";

/// Static description of where the site is hosted, shown in the console
/// diagnostics table.
#[derive(Clone, Serialize)]
pub struct SiteInfo {
    pub service: &'static str,
    pub feature: &'static str,
    pub region: &'static str,
    pub project: &'static str,
}

pub const SITE_INFO: SiteInfo = SiteInfo {
    service: "Amazon S3",
    feature: "Static Website Hosting",
    region: "us-east-1",
    project: "portfolio-site",
};
