use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Where keyboard focus sits when a key arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFocus {
    Page,
    /// Inside a text field. Carousel keys pass through untouched.
    TextInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    Handled,
    PassThrough,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Previous,
    Next,
    TogglePause,
    Resume,
}

pub fn key_command(key: KeyEvent, focus: InputFocus) -> Option<KeyCommand> {
    if focus == InputFocus::TextInput || key.kind == KeyEventKind::Release {
        return None;
    }
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    match key.code {
        KeyCode::Left => Some(KeyCommand::Previous),
        KeyCode::Right => Some(KeyCommand::Next),
        KeyCode::Char(' ') => Some(KeyCommand::TogglePause),
        KeyCode::Esc => Some(KeyCommand::Resume),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn arrows_space_and_escape_map() {
        assert_eq!(
            key_command(press(KeyCode::Left), InputFocus::Page),
            Some(KeyCommand::Previous)
        );
        assert_eq!(
            key_command(press(KeyCode::Right), InputFocus::Page),
            Some(KeyCommand::Next)
        );
        assert_eq!(
            key_command(press(KeyCode::Char(' ')), InputFocus::Page),
            Some(KeyCommand::TogglePause)
        );
        assert_eq!(
            key_command(press(KeyCode::Esc), InputFocus::Page),
            Some(KeyCommand::Resume)
        );
    }

    #[test]
    fn text_input_passes_everything_through() {
        for code in [KeyCode::Left, KeyCode::Right, KeyCode::Char(' '), KeyCode::Esc] {
            assert_eq!(key_command(press(code), InputFocus::TextInput), None);
        }
    }

    #[test]
    fn modified_and_other_keys_are_ignored() {
        let ctrl_left = KeyEvent::new(KeyCode::Left, KeyModifiers::CONTROL);
        assert_eq!(key_command(ctrl_left, InputFocus::Page), None);
        assert_eq!(key_command(press(KeyCode::Char('x')), InputFocus::Page), None);
    }
}
