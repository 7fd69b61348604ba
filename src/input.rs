use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::components::Dir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Dir),
    Quit,
}

/// Arrow keys or vi keys steer; `q`, Esc and Ctrl-C quit. Releases are
/// ignored so a held key only counts when pressed or repeated.
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Some(Command::Steer(Dir::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Command::Steer(Dir::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Command::Steer(Dir::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Command::Steer(Dir::Right)),
        KeyCode::Char('q') | KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(Command::Quit)
        }
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
    fn arrows_and_vi_keys_steer() {
        assert_eq!(command_for(press(KeyCode::Up)), Some(Command::Steer(Dir::Up)));
        assert_eq!(command_for(press(KeyCode::Char('j'))), Some(Command::Steer(Dir::Down)));
        assert_eq!(command_for(press(KeyCode::Left)), Some(Command::Steer(Dir::Left)));
        assert_eq!(command_for(press(KeyCode::Char('l'))), Some(Command::Steer(Dir::Right)));
    }

    #[test]
    fn quit_keys() {
        assert_eq!(command_for(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Esc)), Some(Command::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(command_for(ctrl_c), Some(Command::Quit));
        assert_eq!(command_for(press(KeyCode::Char('c'))), None);
    }

    #[test]
    fn other_keys_and_releases_do_nothing() {
        assert_eq!(command_for(press(KeyCode::Char(' '))), None);
        assert_eq!(command_for(press(KeyCode::Enter)), None);
        let release =
            KeyEvent::new_with_kind(KeyCode::Up, KeyModifiers::NONE, KeyEventKind::Release);
        assert_eq!(command_for(release), None);
    }
}
