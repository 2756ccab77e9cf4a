use std::time::Duration;

use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use futures::StreamExt;
use soleil_core::FeedRuntime;

use crate::render::render;
use crate::ui::{App, Tui};

/// Redraw cadence; also drives the live pulse animation
const UI_TICK: Duration = Duration::from_millis(100);

pub(crate) async fn run_app(terminal: &mut Tui, app: &mut App, feed: &FeedRuntime) -> Result<()> {
    let mut event_stream = EventStream::new();
    let mut tick_interval = tokio::time::interval(UI_TICK);

    while app.running {
        terminal.draw(|f| render(f, app))?;

        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        handle_key(app, key);
                    }
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => app.quit(),
                }
            }

            _ = tick_interval.tick() => {
                app.tick();
                app.refresh(feed.snapshot());
            }
        }
    }
    Ok(())
}

pub(crate) fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        if app.pending_quit {
            app.quit();
        } else {
            app.pending_quit = true;
        }
        return;
    }

    app.pending_quit = false;
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),
        KeyCode::Up | KeyCode::Char('k') => app.scroll_up(1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_down(1),
        KeyCode::PageUp => app.scroll_up(10),
        KeyCode::PageDown => app.scroll_down(10),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_to_top(),
        _ => {}
    }
}
