//! Keyboard input handling for the TUI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::{App, InputMode, UNITS_STEP, UNITS_STEP_LARGE};

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }
    match app.mode {
        InputMode::Normal => handle_normal(app, key),
        InputMode::Editing(_) => handle_editing(app, key),
    }
}

fn handle_normal(app: &mut App, key: KeyEvent) {
    let step = if key.modifiers.contains(KeyModifiers::SHIFT) {
        UNITS_STEP_LARGE
    } else {
        UNITS_STEP
    };
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Right => app.adjust_units(step),
        KeyCode::Left => app.adjust_units(-step),
        KeyCode::Char('p') => app.cycle_plan(),
        KeyCode::Char('+' | '=') => app.add_panel(),
        KeyCode::Char('-') => app.remove_panel(),
        KeyCode::Char('a') => app.toggle_advanced(),
        KeyCode::Char('n') => app.start_editing(),
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Char('d') | KeyCode::Delete => app.delete_selected(),
        KeyCode::Char('s') => app.save_to_history(),
        KeyCode::Char('h') => app.toggle_history(),
        KeyCode::Char('t') => app.toggle_tips(),
        KeyCode::Char('c') => app.toggle_chart(),
        _ => {}
    }
}

fn handle_editing(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.stop_editing(),
        KeyCode::Tab => app.next_field(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Char(c) => app.type_char(c),
        _ => {}
    }
}
