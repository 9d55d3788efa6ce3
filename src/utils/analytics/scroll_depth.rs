use crate::consts::SCROLL_DEPTH_STEP_PERCENT;

/// Deepest scroll position seen in this page view, plus which depth
/// milestones have already been reported. Owned by the component wiring the
/// scroll listener and passed explicitly rather than held as module state.
#[derive(Clone, Copy, Debug, Default)]
pub struct DepthGauge {
    max_percent: u32,
    reported: u32,
}

impl DepthGauge {
    pub fn max_percent(&self) -> u32 {
        self.max_percent
    }

    /// Records a scroll depth sample. Returns the 25% milestones newly
    /// crossed, lowest first; each milestone fires at most once per page
    /// view. The max never decreases, so a scroll back up reports nothing.
    pub fn observe(&mut self, percent: u32) -> Vec<u32> {
        if percent > self.max_percent {
            self.max_percent = percent.min(100);
        }

        let mut fired = Vec::new();
        let mut next = self.reported + SCROLL_DEPTH_STEP_PERCENT;
        while next <= self.max_percent {
            fired.push(next);
            self.reported = next;
            next += SCROLL_DEPTH_STEP_PERCENT;
        }
        fired
    }
}

/// Percentage of the scrollable height reached, rounded to the nearest whole
/// percent and clamped to 0..=100. `None` when the document does not scroll.
pub fn scroll_depth_percent(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> Option<u32> {
    let scrollable = scroll_height - viewport_height;
    if scrollable <= 0.0 {
        return None;
    }
    let percent = (scroll_y / scrollable * 100.0).round();
    Some(percent.clamp(0.0, 100.0) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shallow_scrolling_reports_nothing() {
        let mut gauge = DepthGauge::default();
        assert!(gauge.observe(0).is_empty());
        assert!(gauge.observe(24).is_empty());
        assert_eq!(gauge.max_percent(), 24);
    }

    #[test]
    fn milestones_fire_once_each() {
        let mut gauge = DepthGauge::default();
        assert_eq!(gauge.observe(30), vec![25]);
        assert!(gauge.observe(30).is_empty());
        assert_eq!(gauge.observe(52), vec![50]);
        assert!(gauge.observe(52).is_empty());
    }

    #[test]
    fn fast_scroll_reports_every_crossed_milestone() {
        let mut gauge = DepthGauge::default();
        assert_eq!(gauge.observe(100), vec![25, 50, 75, 100]);
        assert!(gauge.observe(100).is_empty());
    }

    #[test]
    fn scrolling_back_up_never_lowers_the_max() {
        let mut gauge = DepthGauge::default();
        gauge.observe(60);
        assert!(gauge.observe(10).is_empty());
        assert_eq!(gauge.max_percent(), 60);
        // coming back down past 60 again is still silent
        assert!(gauge.observe(60).is_empty());
        // only genuinely new depth reports
        assert_eq!(gauge.observe(80), vec![75]);
    }

    #[test]
    fn samples_above_100_are_clamped() {
        let mut gauge = DepthGauge::default();
        assert_eq!(gauge.observe(140), vec![25, 50, 75, 100]);
        assert_eq!(gauge.max_percent(), 100);
    }

    #[test]
    fn percent_is_none_when_page_does_not_scroll() {
        assert_eq!(scroll_depth_percent(0.0, 700.0, 700.0), None);
        assert_eq!(scroll_depth_percent(0.0, 500.0, 700.0), None);
    }

    #[test]
    fn percent_rounds_and_clamps() {
        assert_eq!(scroll_depth_percent(0.0, 2000.0, 1000.0), Some(0));
        assert_eq!(scroll_depth_percent(500.0, 2000.0, 1000.0), Some(50));
        assert_eq!(scroll_depth_percent(333.0, 2000.0, 1000.0), Some(33));
        // overscroll bounce can push past the bottom
        assert_eq!(scroll_depth_percent(1100.0, 2000.0, 1000.0), Some(100));
        assert_eq!(scroll_depth_percent(-5.0, 2000.0, 1000.0), Some(0));
    }
}
