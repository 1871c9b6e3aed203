use std::sync::Arc;

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use segbar_core::{AccessibilityProps, AppConfig, BadgeValue, Segment};
use tracing::debug;

use crate::animation::TileState;
use crate::input::{handle_key_event, Action};
use crate::keymap::Keymap;
use crate::theme::Theme;
use crate::themes::load_theme;
use crate::widgets::{SegmentedControl, StatusBarWidget};

/// State of the interactive demo
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub segments: Vec<Segment>,
    pub badge_values: Vec<BadgeValue>,
    /// Selection; only changed through the control's change callback
    pub current_index: usize,
    pub is_rtl: bool,
    pub container_margin: u16,
    pub tile: TileState,
    pub keymap: Keymap,
    pub pending_key: Option<char>,
    pub should_quit: bool,
    pub status_message: Option<String>,
    /// Where the control was drawn last frame, for mouse hits
    pub control_area: Rect,
}

impl App {
    pub fn new(config: Arc<AppConfig>) -> Self {
        let control = &config.control;
        Self {
            theme: load_theme(&config.ui.theme),
            segments: control.segments.clone(),
            badge_values: control.badge_values.clone(),
            current_index: control.initial_index,
            is_rtl: control.is_rtl,
            container_margin: control.container_margin,
            tile: TileState::new(config.animation),
            keymap: Keymap::from_config(&config.keymap),
            pending_key: None,
            should_quit: false,
            status_message: None,
            control_area: Rect::default(),
            config,
        }
    }

    /// Build the control for the current state
    pub fn control<'a>(&self, on_change: impl FnMut(usize) + 'a) -> SegmentedControl<'a> {
        SegmentedControl::new(self.segments.iter().cloned(), self.current_index, on_change)
            .badge_values(self.badge_values.iter().cloned())
            .rtl(self.is_rtl)
            .container_margin(self.container_margin)
            .theme(self.theme.clone())
    }

    /// Press segment `index` through the control, as a tap would
    pub fn press(&mut self, index: usize) {
        if index >= self.segments.len() {
            return;
        }
        let mut pressed = None;
        self.control(|i| pressed = Some(i)).press(index);
        if let Some(index) = pressed {
            self.on_change(index);
        }
    }

    /// Change callback: adopt the pressed segment
    fn on_change(&mut self, index: usize) {
        if index == self.current_index {
            debug!(index, "Selected segment pressed again");
            return;
        }
        debug!(from = self.current_index, to = index, "Selection changed");
        self.current_index = index;
        self.clear_status();
    }

    /// Move the selection by `delta` segments in the visual direction
    pub fn step(&mut self, delta: isize) {
        if self.segments.is_empty() {
            return;
        }
        let delta = if self.is_rtl { -delta } else { delta };
        let last = self.segments.len() as isize - 1;
        let target = (self.current_index as isize + delta).clamp(0, last);
        self.press(target as usize);
    }

    pub fn toggle_rtl(&mut self) {
        self.is_rtl = !self.is_rtl;
        // Offsets change sign, so the old position means nothing now
        self.tile.reset();
        let mode = if self.is_rtl { "RTL" } else { "LTR" };
        self.set_status(format!("Layout: {}", mode));
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let action = handle_key_event(key, &self.keymap, self.pending_key == Some('g'));
        self.handle_action(action);
    }

    pub fn handle_action(&mut self, action: Action) {
        if action != Action::PendingG {
            self.clear_pending_key();
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Next => self.step(1),
            Action::Prev => self.step(-1),
            Action::First => self.press(0),
            Action::Last => self.press(self.segments.len().saturating_sub(1)),
            Action::ToggleRtl => self.toggle_rtl(),
            Action::PendingG => self.pending_key = Some('g'),
            Action::Press(index) => self.press(index),
            Action::None => {}
        }
    }

    /// Press the segment under a click, if any
    pub fn handle_mouse(&mut self, event: MouseEvent) {
        let mut pressed = None;
        self.control(|i| pressed = Some(i))
            .handle_mouse(self.control_area, event);
        if let Some(index) = pressed {
            self.on_change(index);
        }
    }

    /// Advance the highlight tile; returns whether it is still moving
    pub fn update_animation(&mut self) -> bool {
        if self.tile.is_animating() {
            self.tile.update();
        }
        self.tile.is_animating()
    }

    pub fn is_animating(&self) -> bool {
        self.tile.is_animating()
    }

    /// Accessibility description of the selected segment
    pub fn current_accessibility(&self) -> Option<AccessibilityProps> {
        self.control(|_| {})
            .accessibility()
            .into_iter()
            .nth(self.current_index)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    pub fn render(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Length(5),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.accent))
            .title(" segbar ")
            .style(Style::default().bg(self.theme.bg0));
        let inner = block.inner(chunks[0]);
        frame.render_widget(block, chunks[0]);

        self.control_area = inner;
        let control = self.control(|_| {});
        frame.render_stateful_widget(&control, inner, &mut self.tile);

        self.render_descriptions(frame, chunks[1], &control);
        StatusBarWidget::render(frame, chunks[2], self);
    }

    /// What a screen reader would announce for each segment
    fn render_descriptions(&self, frame: &mut Frame, area: Rect, control: &SegmentedControl) {
        let lines: Vec<Line> = control
            .accessibility()
            .into_iter()
            .enumerate()
            .map(|(index, props)| {
                let selected = index == self.current_index;
                let style = if selected {
                    Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.theme.fg1)
                };
                let mut spans = vec![
                    Span::styled(if selected { " > " } else { "   " }, style),
                    Span::styled(props.label.unwrap_or_default(), style),
                ];
                if let Some(hint) = props.hint {
                    spans.push(Span::styled(
                        format!("  ({})", hint),
                        Style::default().fg(self.theme.grey1),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        let paragraph = Paragraph::new(lines).style(Style::default().bg(self.theme.bg0));
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
    use ratatui::{backend::TestBackend, Terminal};

    use super::*;

    fn app() -> App {
        App::new(Arc::new(AppConfig::default()))
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(44, 12)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
    }

    fn key(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
    }

    #[test]
    fn test_new_uses_config() {
        let app = app();
        assert_eq!(app.segments.len(), 4);
        assert_eq!(app.current_index, 0);
        assert_eq!(app.container_margin, 2);
        assert!(!app.is_rtl);
    }

    #[test]
    fn test_press_selects() {
        let mut app = app();
        app.press(2);
        assert_eq!(app.current_index, 2);

        app.press(2);
        assert_eq!(app.current_index, 2);

        // Out of range digits do nothing
        app.press(9);
        assert_eq!(app.current_index, 2);
    }

    #[test]
    fn test_step_clamps_and_follows_direction() {
        let mut app = app();
        app.step(-1);
        assert_eq!(app.current_index, 0);
        app.step(1);
        app.step(1);
        assert_eq!(app.current_index, 2);

        app.is_rtl = true;
        app.step(1);
        assert_eq!(app.current_index, 1);
    }

    #[test]
    fn test_keys() {
        let mut app = app();
        app.handle_key(key('l'));
        assert_eq!(app.current_index, 1);

        app.handle_key(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
        assert_eq!(app.current_index, 3);

        app.handle_key(key('g'));
        assert_eq!(app.pending_key, Some('g'));
        app.handle_key(key('g'));
        assert_eq!(app.current_index, 0);
        assert_eq!(app.pending_key, None);

        app.handle_key(key('3'));
        assert_eq!(app.current_index, 2);

        app.handle_key(key('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_pending_g_cleared_by_other_key() {
        let mut app = app();
        app.handle_key(key('g'));
        app.handle_key(key('l'));
        assert_eq!(app.pending_key, None);
        assert_eq!(app.current_index, 1);
    }

    #[test]
    fn test_toggle_rtl_snaps_tile() {
        let mut app = app();
        app.press(1);
        draw(&mut app);
        app.toggle_rtl();
        draw(&mut app);

        assert!(app.is_rtl);
        assert!(!app.is_animating());
        assert!(app.tile.offset() < 0.0);
        assert_eq!(app.status_message.as_deref(), Some("Layout: RTL"));
    }

    #[test]
    fn test_mouse_press_after_render() {
        let mut app = app();
        draw(&mut app);
        assert_eq!(app.control_area, Rect::new(1, 1, 42, 3));

        // Row is 38 cells after the margins, about 9.5 per segment
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 40,
            row: 2,
            modifiers: KeyModifiers::NONE,
        };
        app.handle_mouse(click);
        assert_eq!(app.current_index, 3);
    }

    #[test]
    fn test_selection_animates_between_frames() {
        let mut app = app();
        draw(&mut app);
        app.press(3);
        draw(&mut app);
        assert!(app.is_animating());

        for _ in 0..300 {
            app.tile.advance(Duration::from_millis(16));
        }
        assert!(!app.update_animation());
    }

    #[test]
    fn test_current_accessibility() {
        let mut app = app();
        app.press(1);
        let props = app.current_accessibility().unwrap();
        assert_eq!(props.label.as_deref(), Some("Week, option, 2 of 4"));
        assert_eq!(props.state.map(|s| s.selected), Some(true));
    }
}
