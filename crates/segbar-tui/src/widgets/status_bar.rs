use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let status_text = match &app.status_message {
            Some(msg) => format!(" {}", msg),
            None => Self::summary(app),
        };

        let help_hint = " q:quit h/l:move 1-9:press r:rtl ";
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let bar = Style::default().bg(app.theme.bg1);
        let line = Line::from(vec![
            Span::styled(status_text, bar.fg(app.theme.fg0)),
            Span::styled(" ".repeat(padding_len), bar),
            Span::styled(help_hint, bar.fg(app.theme.grey1)),
        ]);

        frame.render_widget(Paragraph::new(line).style(bar), area);
    }

    fn summary(app: &App) -> String {
        let mode = if app.is_rtl { "RTL" } else { "LTR" };
        let label = app
            .current_accessibility()
            .and_then(|props| props.label)
            .unwrap_or_default();
        format!(
            " {} | Segment {}/{} | {}",
            mode,
            app.current_index + 1,
            app.segments.len(),
            label
        )
    }
}
