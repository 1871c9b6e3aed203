use std::io;
use std::sync::Arc;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use segbar_core::AppConfig;
use segbar_tui::{
    animation::SpringConfigExt,
    app::App,
    event::{AppEvent, EventHandler},
};

pub async fn run(config: Arc<AppConfig>) -> Result<()> {
    info!(
        segments = config.control.segments.len(),
        theme = %config.ui.theme.name,
        "Starting demo"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("segbar"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config.clone());
    let event_handler = EventHandler::new(
        config.ui.tick_rate_ms,
        config.animation.animation_tick_duration(),
    );

    let result = run_loop(&mut terminal, &mut app, &event_handler);

    // Restore terminal, even when the loop failed
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    info!(index = app.current_index, "Demo finished");
    result
}

fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_handler: &EventHandler,
) -> Result<()> {
    loop {
        app.update_animation();

        terminal.draw(|frame| app.render(frame))?;

        // Poll faster while the tile is still moving
        if let Some(event) = event_handler.next(app.is_animating())? {
            match event {
                AppEvent::Key(key) => app.handle_key(key),
                AppEvent::Mouse(mouse) => app.handle_mouse(mouse),
                AppEvent::Resize(_, _) => {
                    // Offsets scale with the width; jump instead of sliding
                    app.tile.reset();
                }
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
