use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Next,
    Prev,
    First,
    Last,
    ToggleRtl,
    PendingG, // First 'g' press, waiting for second 'g'
    Press(usize),
    None,
}

/// Handle a key event and return the corresponding action
///
/// `pending_g` is true when the previous key was a lone 'g'.
pub fn handle_key_event(key: KeyEvent, keymap: &Keymap, pending_g: bool) -> Action {
    let binding = normalize(key);

    if keymap.is_g_prefix(&binding) {
        if pending_g {
            return keymap.get_pending_g_action().copied().unwrap_or(Action::None);
        }
        return Action::PendingG;
    }

    keymap.get(&binding).copied().unwrap_or(Action::None)
}

/// Terminals disagree on whether uppercase letters carry SHIFT
fn normalize(key: KeyEvent) -> KeyBinding {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_uppercase() => {
            KeyBinding::new(key.code, key.modifiers | KeyModifiers::SHIFT)
        }
        _ => KeyBinding::new(key.code, key.modifiers),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_configured_keys() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('l'), KeyModifiers::NONE), &keymap, false),
            Action::Next
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Left, KeyModifiers::NONE), &keymap, false),
            Action::Prev
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL), &keymap, false),
            Action::Quit
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('x'), KeyModifiers::NONE), &keymap, false),
            Action::None
        );
    }

    #[test]
    fn test_uppercase_with_or_without_shift() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('G'), KeyModifiers::SHIFT), &keymap, false),
            Action::Last
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('G'), KeyModifiers::NONE), &keymap, false),
            Action::Last
        );
    }

    #[test]
    fn test_gg_sequence() {
        let keymap = Keymap::default();
        let g = key(KeyCode::Char('g'), KeyModifiers::NONE);
        assert_eq!(handle_key_event(g, &keymap, false), Action::PendingG);
        assert_eq!(handle_key_event(g, &keymap, true), Action::First);
    }

    #[test]
    fn test_digits_press() {
        let keymap = Keymap::default();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('1'), KeyModifiers::NONE), &keymap, false),
            Action::Press(0)
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('9'), KeyModifiers::NONE), &keymap, false),
            Action::Press(8)
        );
    }
}
