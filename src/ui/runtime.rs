use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use std::io;
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

pub fn run(config: &Config) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal(config.ui.mouse)?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let mut app = App::new(config.ui.heading.clone());
    let events = EventHandler::new(tick_rate)?;
    let size = terminal.size()?;
    app.on_resize(size.width, size.height);
    tracing::info!("Counter UI started");

    loop {
        if app.needs_redraw() {
            let drawn = terminal.draw(|frame| draw(frame, &app))?.area;
            app.mark_drawn();
            // Hit testing must follow the area that was actually drawn
            app.on_resize(drawn.width, drawn.height);
        }
        if app.should_quit() {
            tracing::info!(count = app.count(), "Quit requested");
            break;
        }

        handle_event(&mut app, events.next(tick_rate))?;
    }

    drop(guard);
    Ok(())
}

/// Applies one event from the reader thread to the app.
///
/// Terminal read failures and a closed event channel are fatal.
pub fn handle_event(
    app: &mut App,
    event: Result<AppEvent, RecvTimeoutError>,
) -> io::Result<()> {
    match event {
        Ok(AppEvent::Key(key)) => app.on_key(key),
        Ok(AppEvent::Mouse(mouse)) => app.on_mouse(mouse),
        Ok(AppEvent::Resize(cols, rows)) => {
            tracing::debug!(cols, rows, "Terminal resized");
            app.on_resize(cols, rows);
        }
        Ok(AppEvent::Tick) => {}
        Ok(AppEvent::Shutdown) => {
            tracing::info!(count = app.count(), "Shutdown signal received");
            app.request_quit();
        }
        Ok(AppEvent::Error(err)) => {
            tracing::error!("Terminal input failed: {}", err);
            return Err(err);
        }
        Err(RecvTimeoutError::Timeout) => {}
        Err(RecvTimeoutError::Disconnected) => {
            tracing::error!("Event channel closed");
            return Err(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "terminal event reader stopped",
            ));
        }
    }
    Ok(())
}
