//! Scroll-position rules for the header and the legacy waypoint animations.

/// The header gets `scrolled` once the page is scrolled past `threshold_px`.
pub fn header_scrolled(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// A waypoint animates once its top edge is within the first `ratio` of the
/// viewport.
pub fn waypoint_due(rect_top: f64, viewport_height: f64, ratio: f64) -> bool {
    rect_top <= viewport_height * ratio
}

/// Indices of the waypoints that should gain `et-animated` in this pass.
pub fn due_waypoints(tops: &[f64], viewport_height: f64, ratio: f64) -> Vec<usize> {
    tops.iter()
        .enumerate()
        .filter(|(_, top)| waypoint_due(**top, viewport_height, ratio))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_threshold_is_exclusive() {
        assert!(!header_scrolled(0.0, 100.0));
        assert!(!header_scrolled(100.0, 100.0));
        assert!(header_scrolled(100.5, 100.0));
    }

    #[test]
    fn waypoints_in_upper_three_quarters() {
        let due = due_waypoints(&[-40.0, 300.0, 600.0, 601.0, 2000.0], 800.0, 0.75);
        assert_eq!(due, vec![0, 1, 2]);
    }
}
