//! Row-span intersection math.
//!
//! The page is laid out as row spans in a virtual document; the viewport is
//! the slice of rows currently on screen. Intersection ratios are computed
//! from spans alone, so reveal logic stays independent of how the page got
//! laid out and survives re-layout (filter changes, resizes) unchanged.

/// A contiguous run of rows in the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub top: u16,
    pub height: u16,
}

impl RowSpan {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }

    /// One past the last row.
    pub fn bottom(&self) -> u16 {
        self.top.saturating_add(self.height)
    }

    pub fn contains(&self, row: u16) -> bool {
        row >= self.top && row < self.bottom()
    }
}

/// The rows currently on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    /// Document row at the top of the screen (the scroll offset).
    pub top: u16,
    /// Visible height in rows.
    pub height: u16,
}

impl Viewport {
    pub fn new(top: u16, height: u16) -> Self {
        Self { top, height }
    }
}

/// Trigger configuration for one observer instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserverConfig {
    /// Fraction of the span's rows that must be visible, in (0, 1].
    pub threshold: f64,
    /// Rows shaved off the bottom edge of the viewport before testing, so
    /// the trigger fires slightly before the span is actually on screen
    /// (zero for no inset).
    pub bottom_inset: u16,
}

/// Fraction of `span`'s rows inside the viewport, after shaving
/// `bottom_inset` rows off the viewport's bottom edge.
///
/// A zero-height span counts as fully intersecting while its top row is
/// inside the (inset) viewport.
pub fn intersection_ratio(span: RowSpan, view: Viewport, bottom_inset: u16) -> f64 {
    let view_bottom = view.top.saturating_add(view.height.saturating_sub(bottom_inset));
    if span.height == 0 {
        let inside = span.top >= view.top && span.top < view_bottom;
        return if inside { 1.0 } else { 0.0 };
    }
    let lo = span.top.max(view.top);
    let hi = span.bottom().min(view_bottom);
    if hi <= lo {
        return 0.0;
    }
    f64::from(hi - lo) / f64::from(span.height)
}

/// Whether `span` meets the observer's threshold in the current viewport.
pub fn is_intersecting(span: RowSpan, view: Viewport, config: ObserverConfig) -> bool {
    intersection_ratio(span, view, config.bottom_inset) >= config.threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_visible_span_has_ratio_one() {
        let view = Viewport::new(0, 20);
        let span = RowSpan::new(5, 4);
        assert_eq!(intersection_ratio(span, view, 0), 1.0);
    }

    #[test]
    fn off_screen_span_has_ratio_zero() {
        let view = Viewport::new(0, 20);
        let span = RowSpan::new(30, 4);
        assert_eq!(intersection_ratio(span, view, 0), 0.0);
    }

    #[test]
    fn partially_visible_span_has_fractional_ratio() {
        let view = Viewport::new(0, 10);
        // Rows 8..12; only rows 8 and 9 are on screen.
        let span = RowSpan::new(8, 4);
        assert_eq!(intersection_ratio(span, view, 0), 0.5);
    }

    #[test]
    fn bottom_inset_shrinks_the_viewport() {
        let view = Viewport::new(0, 10);
        let span = RowSpan::new(8, 4);
        // Inset of 2 moves the bottom edge to row 8; nothing intersects.
        assert_eq!(intersection_ratio(span, view, 2), 0.0);
    }

    #[test]
    fn span_contains_its_rows_only() {
        let span = RowSpan::new(3, 2);
        assert!(!span.contains(2));
        assert!(span.contains(3));
        assert!(span.contains(4));
        assert!(!span.contains(5));
    }
}
