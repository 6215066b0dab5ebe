mod common;

use folio::engine::viewport::{
    intersection_ratio, is_intersecting, ObserverConfig, RowSpan, Viewport,
};

#[test]
fn fade_threshold_triggers_while_mostly_below_the_fold() {
    let config = ObserverConfig {
        threshold: 0.1,
        bottom_inset: 2,
    };
    // 10-row card peeking 1 row into an inset 20-row viewport: exactly 10%.
    let view = Viewport::new(0, 20);
    let span = RowSpan::new(17, 10);
    assert!(is_intersecting(span, view, config));

    // One row lower and it no longer clears the inset bottom edge.
    let span_below = RowSpan::new(18, 10);
    assert!(!is_intersecting(span_below, view, config));
}

#[test]
fn progress_threshold_waits_for_half_the_bar() {
    let config = ObserverConfig {
        threshold: 0.5,
        bottom_inset: 0,
    };
    let view = Viewport::new(0, 10);
    // 4-row block with 1 visible row: 25%, no trigger.
    assert!(!is_intersecting(RowSpan::new(9, 4), view, config));
    // 2 visible rows: exactly 50%, triggers.
    assert!(is_intersecting(RowSpan::new(8, 4), view, config));
}

#[test]
fn scrolling_down_grows_the_ratio_monotonically() {
    let span = RowSpan::new(30, 4);
    let mut last = 0.0;
    for scroll in 0..=30u16 {
        let ratio = intersection_ratio(span, Viewport::new(scroll, 10), 0);
        assert!(ratio >= last, "ratio shrank while scrolling towards span");
        last = ratio;
    }
    assert_eq!(last, 1.0);
}

#[test]
fn inset_only_affects_the_bottom_edge() {
    // Span above the viewport top is unaffected by the bottom inset.
    let span = RowSpan::new(0, 4);
    let view = Viewport::new(2, 10);
    assert_eq!(intersection_ratio(span, view, 3), 0.5);
}
