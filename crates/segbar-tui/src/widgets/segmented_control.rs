//! Segmented control widget
//!
//! A row of mutually exclusive options with a highlight tile that springs to
//! the selected one. The selection belongs to the caller: the widget reflects
//! `current_index` and reports presses through the change callback.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    widgets::StatefulWidget,
};
use tracing::debug;
use unicode_width::UnicodeWidthStr;

use segbar_core::{
    accessibility::describe_all,
    segment::{badge_at, format_count},
    AccessibilityProps, BadgeValue, Segment, SegmentLayout,
};

use crate::animation::TileState;
use crate::style::ControlStyles;
use crate::theme::Theme;

/// Called with the index of a pressed segment
pub type ChangeHandler<'a> = Box<dyn FnMut(usize) + 'a>;

/// Draws a custom highlight tile
pub type TileRenderer<'a> = Box<dyn Fn(&TileProps, &mut Buffer) + 'a>;

/// What a tile renderer gets to work with
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TileProps {
    /// Tile style after overrides
    pub style: ratatui::style::Style,
    /// Current animated translation, in cells
    pub translate_x: f64,
    /// Width of one segment, in cells
    pub segment_width: f64,
    /// Cells the tile covers this frame, clipped to the row
    pub area: Rect,
}

pub struct SegmentedControl<'a> {
    segments: Vec<Segment>,
    current_index: usize,
    on_change: ChangeHandler<'a>,
    badge_values: Option<Vec<BadgeValue>>,
    is_rtl: bool,
    container_margin: u16,
    theme: Theme,
    styles: ControlStyles,
    render_tile: Option<TileRenderer<'a>>,
}

impl<'a> SegmentedControl<'a> {
    pub fn new<I, S>(segments: I, current_index: usize, on_change: impl FnMut(usize) + 'a) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Segment>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
            current_index,
            on_change: Box::new(on_change),
            badge_values: None,
            is_rtl: false,
            container_margin: 0,
            theme: Theme::default(),
            styles: ControlStyles::default(),
            render_tile: None,
        }
    }

    /// Badge per segment, aligned by position
    pub fn badge_values<I, B>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = B>,
        B: Into<BadgeValue>,
    {
        self.badge_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn rtl(mut self, is_rtl: bool) -> Self {
        self.is_rtl = is_rtl;
        self
    }

    /// Cells kept free on both sides of the row
    pub fn container_margin(mut self, margin: u16) -> Self {
        self.container_margin = margin;
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Style overrides, merged over the theme defaults
    pub fn styles(mut self, styles: ControlStyles) -> Self {
        self.styles = styles;
        self
    }

    /// Replace the default tile visual
    pub fn render_tile(mut self, renderer: impl Fn(&TileProps, &mut Buffer) + 'a) -> Self {
        self.render_tile = Some(Box::new(renderer));
        self
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Geometry of the row when drawn into `area`
    pub fn layout(&self, area: Rect) -> SegmentLayout {
        SegmentLayout::new(
            area.width as f64,
            self.container_margin as f64,
            self.segments.len(),
            self.is_rtl,
        )
    }

    /// Report a press of segment `index` to the caller
    ///
    /// Pressing the selected segment is reported too; ignoring it is up to
    /// the caller.
    pub fn press(&mut self, index: usize) {
        debug!(index, current = self.current_index, "Segment pressed");
        (self.on_change)(index);
    }

    /// Segment drawn at a terminal cell
    pub fn segment_at(&self, area: Rect, column: u16, row: u16) -> Option<usize> {
        if !area.contains(Position::new(column, row)) {
            return None;
        }
        // Sample the middle of the cell, matching how spans are rounded
        let x = (column - area.x) as f64 + 0.5;
        self.layout(area).index_at(x)
    }

    /// Press the segment under a left click; returns whether one was pressed
    pub fn handle_mouse(&mut self, area: Rect, event: MouseEvent) -> bool {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return false;
        }
        match self.segment_at(area, event.column, event.row) {
            Some(index) => {
                self.press(index);
                true
            }
            None => false,
        }
    }

    /// Accessibility description of every segment
    pub fn accessibility(&self) -> Vec<AccessibilityProps> {
        describe_all(&self.segments, self.current_index)
    }

    /// Columns of the row not covered by the margins
    fn row_span(&self, area: Rect) -> (u16, u16) {
        let margin = self.container_margin.min(area.width / 2);
        (area.x + margin, area.right() - margin)
    }

    fn render_segment(
        &self,
        index: usize,
        slot: Rect,
        styles: &ControlStyles,
        buf: &mut Buffer,
    ) {
        let Some(segment) = self.segments.get(index) else {
            return;
        };
        let active = index == self.current_index;
        let slot_width = slot.width as usize;
        if slot_width == 0 || slot.height == 0 {
            return;
        }

        let badge = badge_at(self.badge_values.as_deref(), index)
            .map(|count| format!(" {} ", format_count(count)));
        let badge_width = badge.as_deref().map(UnicodeWidthStr::width).unwrap_or(0);

        // Keep at least one label cell and a gap next to the badge
        let badge = badge.filter(|_| badge_width + 2 <= slot_width);
        let label_max = match badge {
            Some(_) => slot_width - badge_width - 1,
            None => slot_width,
        };
        let label = truncate_to_width(&segment.label, label_max);
        let label_width = label.width();
        let gap = usize::from(badge.is_some() && label_width > 0);
        let content_width = label_width + gap + badge.as_ref().map(|_| badge_width).unwrap_or(0);

        let x = slot.x + (slot_width.saturating_sub(content_width) / 2) as u16;
        let y = slot.y + slot.height / 2;

        let (next_x, _) = buf.set_stringn(x, y, &label, label_max, styles.text(active));
        if let Some(badge) = badge {
            buf.set_stringn(next_x + gap as u16, y, &badge, badge_width, styles.badge(active));
        }
    }
}

impl StatefulWidget for &SegmentedControl<'_> {
    type State = TileState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut TileState) {
        let styles = ControlStyles::resolve(&self.theme, &self.styles);
        buf.set_style(area, styles.wrapper);

        if area.is_empty() || self.segments.is_empty() {
            return;
        }

        let (row_start, row_end) = self.row_span(area);
        if row_start >= row_end {
            return;
        }

        let layout = self.layout(area);
        state.animate_to(layout.highlight_offset(self.current_index));

        let slots: Vec<Option<Rect>> = (0..self.segments.len())
            .map(|index| {
                let (start, end) = layout.segment_bounds(index);
                cell_span(area, start, end, row_start, row_end)
            })
            .collect();

        for slot in slots.iter().flatten() {
            buf.set_style(*slot, styles.pressable);
        }

        let translate_x = state.offset();
        let tile_start = layout.tile_start(translate_x);
        let tile_area = cell_span(
            area,
            tile_start,
            tile_start + layout.segment_width(),
            row_start,
            row_end,
        )
        .unwrap_or(Rect::new(row_start, area.y, 0, area.height));

        let props = TileProps {
            style: styles.tile,
            translate_x,
            segment_width: layout.segment_width(),
            area: tile_area,
        };
        match &self.render_tile {
            Some(renderer) => renderer(&props, buf),
            None => buf.set_style(props.area, props.style),
        }

        for (index, slot) in slots.iter().enumerate() {
            if let Some(slot) = slot {
                self.render_segment(index, *slot, &styles, buf);
            }
        }
    }
}

/// Column of the cell whose middle lies at or after `x` (relative to `area`)
fn column(area: Rect, x: f64) -> i64 {
    (area.x as f64 + x - 0.5).ceil() as i64
}

/// Cells covering `[start, end)`, clipped to the row; `None` when empty
fn cell_span(area: Rect, start: f64, end: f64, clip_start: u16, clip_end: u16) -> Option<Rect> {
    let first = column(area, start).max(clip_start as i64);
    let last = column(area, end).min(clip_end as i64);
    (first < last).then(|| Rect::new(first as u16, area.y, (last - first) as u16, area.height))
}

/// Truncate to a display width, marking the cut with an ellipsis
fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    // Measure the whole prefix: selectors and joiners can widen the
    // character before them
    let mut out = String::new();
    for c in text.chars() {
        out.push(c);
        if out.width() > max_width - 1 {
            out.pop();
            break;
        }
    }
    out.push('…');
    out
}
