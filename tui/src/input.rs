//! Input handling for Periodle TUI.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use periodle_engine::App;

const INPUT_POLL_TIMEOUT: Duration = Duration::from_millis(50);
const MAX_EVENTS_PER_FRAME: usize = 64; // never starve rendering

/// Drain pending terminal events into `app`.
///
/// Waits up to a short timeout for the first event, then handles whatever
/// else is already queued. Returns `true` when the app asked to quit.
pub fn handle_events(app: &mut App) -> Result<bool> {
    if !event::poll(INPUT_POLL_TIMEOUT)? {
        return Ok(app.should_quit());
    }

    for _ in 0..MAX_EVENTS_PER_FRAME {
        match event::read()? {
            Event::Key(key) => handle_key(app, key),
            Event::Paste(text) => {
                for c in text.chars() {
                    app.insert_char(c);
                }
            }
            _ => {}
        }
        if app.should_quit() || !event::poll(Duration::ZERO)? {
            break;
        }
    }

    Ok(app.should_quit())
}

/// Apply one key press to `app`.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind == KeyEventKind::Release {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c' | 'q')) {
        debug!("Quit requested from keyboard");
        app.request_quit();
        return;
    }

    // A notice swallows the key that dismisses it.
    if app.notice().is_some() {
        app.dismiss_notice();
        return;
    }

    if ctrl {
        if key.code == KeyCode::Char('r')
            && let Err(err) = app.start_new_game()
        {
            debug!(%err, "New round failed");
        }
        return;
    }

    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Esc => app.clear_draft(),
        KeyCode::Char(c) => app.insert_char(c),
        _ => {}
    }
}
