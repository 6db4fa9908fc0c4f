use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the main loop should do with a key press. Network work is
/// spawned by the loop itself; the handler only mutates app state.
#[derive(Debug, PartialEq)]
pub enum KeyOutcome {
    None,
    Submit(String),
    Reset,
    Quit,
}

pub fn handle_chat_input(key: KeyEvent, app: &mut App) -> KeyOutcome {
    match key.code {
        KeyCode::Esc => return KeyOutcome::Quit,
        KeyCode::Enter => {
            // Sending stays gated until the readiness poll succeeds
            if app.model_ready() {
                if let Some(prompt) = app.take_prompt() {
                    return KeyOutcome::Submit(prompt);
                }
            }
        }
        KeyCode::PageUp => app.scroll_up(),
        KeyCode::PageDown => app.scroll_down(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        KeyCode::Char(c) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match c {
                    'c' => return KeyOutcome::Quit,
                    'r' => return KeyOutcome::Reset,
                    'u' => app.scroll_up(),
                    'd' => app.scroll_down(),
                    _ => {}
                }
            } else {
                app.input.push(c);
            }
        }
        _ => {}
    }
    KeyOutcome::None
}
