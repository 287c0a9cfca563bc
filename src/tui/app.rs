//! Interactive picker event loop.
//!
//! Each turn reads one terminal event and hands it to [`Selection::handle`]. The screen is
//! redrawn only after an action, and the loop ends once the selection reaches `Quitting`.

use std::time::Duration;

use anyhow::Result;
use ratatui::Terminal;
use ratatui::backend::Backend;

use super::events::{Action, poll_event};
use super::rendering::render_ui;
use super::selection::{Mode, Selection};
use super::terminal::TerminalManager;
use crate::models::Prompt;

const POLL_TIMEOUT: Duration = Duration::from_millis(250);

/// Run the picker over `prompts` and return the chosen prompt text, if any
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or restored. The terminal
/// is restored before any error is returned.
pub fn run_interactive(prompts: &[Prompt]) -> Result<Option<String>> {
    let mut manager = TerminalManager::new()?;

    let mut selection = Selection::new(prompts);
    let result = drive(&mut manager, &mut selection);

    manager.restore()?;
    result?;

    Ok(selection.into_choice())
}

fn drive(manager: &mut TerminalManager, selection: &mut Selection<'_>) -> Result<()> {
    let terminal = manager.terminal_mut();
    let size = terminal.size()?;
    selection.resize(size.width, size.height);
    run_loop(terminal, selection)
}

/// Drive `selection` from terminal events until it quits
fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    selection: &mut Selection<'_>,
) -> Result<()> {
    let mut needs_redraw = true;

    while selection.mode() != Mode::Quitting {
        if needs_redraw {
            terminal.draw(|f| render_ui(f, selection))?;
            needs_redraw = false;
        }

        let action = poll_event(POLL_TIMEOUT)?;
        if action != Action::None {
            selection.handle(action);
            needs_redraw = true;
        }
    }

    Ok(())
}
