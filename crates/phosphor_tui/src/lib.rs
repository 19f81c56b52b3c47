//! Terminal front end for Phosphor narratives.
//!
//! Reveal renderers (teletype for text, pixelation for bitmaps) run on a
//! fixed frame tick and report completion back to the narrative; keyboard
//! and mouse input is normalised into link gestures and prompt commands.

#![warn(missing_docs)]

mod app;
mod pixelate;
mod teletype;
mod ui;

pub use app::{App, Effect};
pub use pixelate::{Pixelate, STEPS};
pub use teletype::{CURSOR, Teletype};
pub use ui::draw;

use phosphor_error::{PhosphorResult, TuiError};
use phosphor_narrative::{Narrative, PhosphorConfig};
use ratatui::crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
};
use std::time::Instant;

/// Runs a started narrative in the terminal until the user quits.
#[tracing::instrument(skip_all)]
pub fn run(narrative: Narrative, config: &PhosphorConfig) -> PhosphorResult<()> {
    let mut terminal = ratatui::init();
    execute!(std::io::stdout(), EnableMouseCapture)
        .map_err(|e| TuiError::new(format!("Failed to enable mouse capture: {}", e)))?;
    tracing::info!("Terminal initialized");

    let mut app = App::new(narrative, config.render().clone());
    let result = run_app(&mut terminal, &mut app);

    let _ = execute!(std::io::stdout(), DisableMouseCapture);
    ratatui::restore();
    tracing::info!("Terminal restored");
    result
}

fn run_app(terminal: &mut ratatui::DefaultTerminal, app: &mut App) -> PhosphorResult<()> {
    let tick = app.render_config().tick();
    let mut last_tick = Instant::now();

    while !app.should_quit {
        terminal
            .draw(|f| draw(f, app))
            .map_err(|e| TuiError::new(format!("Failed to draw: {}", e)))?;

        let timeout = tick.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).map_err(|e| TuiError::new(format!("Failed to poll: {}", e)))? {
            match event::read().map_err(|e| TuiError::new(format!("Failed to read: {}", e)))? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }

        let now = Instant::now();
        if now.duration_since(last_tick) >= tick {
            app.tick(now.duration_since(last_tick));
            last_tick = now;
        }
    }

    Ok(())
}
