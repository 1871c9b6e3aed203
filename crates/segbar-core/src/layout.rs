//! Layout arithmetic for a segmented control row
//!
//! All positions are measured from the left edge of the viewport, in the same
//! unit as the viewport width (terminal cells for the TUI widget). Segments
//! share the available width equally; the highlight tile rests on the first
//! segment and is translated by [`SegmentLayout::highlight_offset`].

/// Derived geometry of a segmented control
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SegmentLayout {
    viewport_width: f64,
    container_margin: f64,
    count: usize,
    is_rtl: bool,
}

impl SegmentLayout {
    pub fn new(viewport_width: f64, container_margin: f64, count: usize, is_rtl: bool) -> Self {
        Self {
            viewport_width,
            container_margin,
            count,
            is_rtl,
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn is_rtl(&self) -> bool {
        self.is_rtl
    }

    pub fn container_margin(&self) -> f64 {
        self.container_margin
    }

    /// Viewport width minus the margin on both sides
    pub fn available_width(&self) -> f64 {
        (self.viewport_width - 2.0 * self.container_margin).max(0.0)
    }

    /// Width of one segment
    pub fn segment_width(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.available_width() / self.count as f64
        }
    }

    /// Translation of the highlight tile for the selected index
    ///
    /// Negative under RTL, where the tile rests on the right-most slot.
    pub fn highlight_offset(&self, index: usize) -> f64 {
        let offset = index as f64 * self.segment_width();
        if self.is_rtl {
            -offset
        } else {
            offset
        }
    }

    /// Visual slot (counted from the left) occupied by a segment
    pub fn visual_slot(&self, index: usize) -> usize {
        if self.is_rtl {
            self.count.saturating_sub(1).saturating_sub(index)
        } else {
            index
        }
    }

    /// Left and right edge of a segment
    pub fn segment_bounds(&self, index: usize) -> (f64, f64) {
        let width = self.segment_width();
        let start = self.container_margin + self.visual_slot(index) as f64 * width;
        (start, start + width)
    }

    /// Left edge of the tile before any translation
    pub fn tile_origin(&self) -> f64 {
        self.segment_bounds(0).0
    }

    /// Left edge of the tile for a given translation
    pub fn tile_start(&self, offset: f64) -> f64 {
        self.tile_origin() + offset
    }

    /// Segment under a horizontal position, `None` inside the margins
    pub fn index_at(&self, x: f64) -> Option<usize> {
        let width = self.segment_width();
        if width <= 0.0 {
            return None;
        }

        let relative = x - self.container_margin;
        if relative < 0.0 || relative >= self.available_width() {
            return None;
        }

        let slot = ((relative / width).floor() as usize).min(self.count - 1);
        Some(self.visual_slot(slot))
    }
}
